//! Widget configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::WidgetError;

/// Default text shown in the dropdown body when a search matches nothing.
pub const DEFAULT_EMPTY_PLACEHOLDER: &str = "Empty(";

/// Default placeholder hosts show in an empty search field.
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search...";

/// Which items the badge tray lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrayScope {
    /// Every selected item, including items hidden by the current search.
    #[default]
    Selection,
    /// Only selected items that are in the working copy.
    WorkingCopy,
}

/// Per-widget configuration.
///
/// Unknown or missing fields in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Text rendered in the dropdown body when a search has no matches.
    pub empty_placeholder: String,

    /// Which items the badge tray lists.
    pub tray_scope: TrayScope,

    /// Placeholder for the host's search field. The widget never owns the
    /// field; hosts apply this when they build it.
    pub search_placeholder: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            empty_placeholder: DEFAULT_EMPTY_PLACEHOLDER.to_string(),
            tray_scope: TrayScope::default(),
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
        }
    }
}

impl WidgetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the empty-search placeholder.
    pub fn empty_placeholder(mut self, text: impl Into<String>) -> Self {
        self.empty_placeholder = text.into();
        self
    }

    /// Set the tray scope.
    pub fn tray_scope(mut self, scope: TrayScope) -> Self {
        self.tray_scope = scope;
        self
    }

    pub fn search_placeholder(mut self, text: impl Into<String>) -> Self {
        self.search_placeholder = text.into();
        self
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, WidgetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WidgetError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
