//! Host document: owns the root element and resolves selectors.

use crate::element::{
    Element, element_path, find_by_class, find_by_data, find_element, find_element_mut,
};

/// A parsed selector. Only the forms the widget and its hosts use are
/// supported: `#id`, `.class` and `[attr=value]` (value optionally quoted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
    Attr { key: String, value: String },
}

impl Selector {
    /// Parse a selector string. Returns None for unsupported syntax.
    pub fn parse(selector: &str) -> Option<Self> {
        let selector = selector.trim();
        if let Some(id) = selector.strip_prefix('#') {
            return (!id.is_empty()).then(|| Self::Id(id.to_string()));
        }
        if let Some(class) = selector.strip_prefix('.') {
            return (!class.is_empty()).then(|| Self::Class(class.to_string()));
        }
        let inner = selector.strip_prefix('[')?.strip_suffix(']')?;
        let (key, value) = inner.split_once('=')?;
        let value = value.trim_matches(|c| c == '\'' || c == '"');
        if key.is_empty() {
            return None;
        }
        Some(Self::Attr {
            key: key.trim().to_string(),
            value: value.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// First element matching `selector`, in document order.
    pub fn query(&self, selector: &str) -> Option<&Element> {
        match Selector::parse(selector)? {
            Selector::Id(id) => find_element(&self.root, &id),
            Selector::Class(class) => find_by_class(&self.root, &class),
            Selector::Attr { key, value } => find_by_data(&self.root, &key, &value),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// IDs from the root down to `id`, inclusive. Empty if `id` is absent.
    pub fn path(&self, id: &str) -> Vec<String> {
        element_path(&self.root, id).unwrap_or_default()
    }

    /// Whether `id` is `ancestor` or lies inside it.
    pub fn contains(&self, ancestor: &str, id: &str) -> bool {
        self.path(id).iter().any(|step| step == ancestor)
    }
}
