use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// How children are laid out by the text renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// One child per line.
    #[default]
    Column,
    /// Children side by side, separated by one cell.
    Row,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Layout
    pub direction: Direction,
    /// Hanging indent (in cells) for every child of a column after the first.
    pub indent: u16,

    // Styling hooks
    pub classes: Vec<String>,
    /// `data-*`, `role` and `aria-*` attributes.
    pub data: HashMap<String, String>,

    // Interaction
    pub focusable: bool,
    /// When false, clicks go to the nearest ancestor instead
    /// (CSS `pointer-events: none`).
    pub pointer_events: bool,
    /// Hidden elements are skipped by layout, rendering and hit testing.
    pub visible: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            direction: Direction::Column,
            indent: 0,
            classes: Vec::new(),
            data: HashMap::new(),
            focusable: false,
            pointer_events: true,
            visible: true,
        }
    }
}

impl Element {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    /// Create a text input element.
    pub fn text_input(value: impl Into<String>) -> Self {
        Self {
            id: generate_id("input"),
            content: Content::Input {
                value: value.into(),
                placeholder: None,
            },
            focusable: true,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn indent(mut self, indent: u16) -> Self {
        self.indent = indent;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    /// Let clicks fall through to the parent.
    pub fn pass_through(mut self) -> Self {
        self.pointer_events = false;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the placeholder text for a text input.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let Content::Input { placeholder, .. } = &mut self.content {
            *placeholder = Some(text.into());
        }
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // In-place mutation, used when patching a mounted tree.

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Toggle a class. Returns true if the class is now present.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.classes.push(class.to_string());
            true
        }
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    /// Append a child, replacing non-children content.
    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    /// Replace all content with the given children.
    pub fn replace_children(&mut self, children: Vec<Element>) {
        self.content = Content::Children(children);
    }

    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }

    pub fn child_elements_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    /// The element's own text, if it is a text node.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(s) => Some(s),
            _ => None,
        }
    }
}
