use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable, unique identifier of an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random (v4) UUID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A selectable entry.
///
/// Serialized as `{ "id", "label", "groupId", "isSelected" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    pub group_id: String,
    #[serde(default)]
    pub is_selected: bool,
}

impl Item {
    /// Create an unselected item with a generated id.
    pub fn new(label: impl Into<String>, group_id: impl Into<String>) -> Self {
        Self {
            id: ItemId::generate(),
            label: label.into(),
            group_id: group_id.into(),
            is_selected: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn selected(mut self, is_selected: bool) -> Self {
        self.is_selected = is_selected;
        self
    }
}
