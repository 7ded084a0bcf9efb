//! Error types for the widget and its loaders.

use thiserror::Error;

use crate::model::ItemId;

/// Errors reported by [`crate::SelectableGroupedList`] and the model loaders.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("duplicate item id: {id}")]
    DuplicateId { id: ItemId },

    #[error("mount target not found: {selector}")]
    MountTargetMissing { selector: String },

    #[error("widget is already mounted")]
    AlreadyMounted,

    #[error("item not found: {id}")]
    ItemNotFound { id: ItemId },

    #[error("unknown group: {group}")]
    UnknownGroup { group: String },

    /// A node bound at mount time is no longer in the host document.
    #[error("bound node missing from document: {id}")]
    MissingNode { id: String },

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl WidgetError {
    /// Whether the error comes from stale input (an id or group the model
    /// does not know) rather than from a broken host document.
    pub fn is_stale_target(&self) -> bool {
        matches!(self, Self::ItemNotFound { .. } | Self::UnknownGroup { .. })
    }
}
