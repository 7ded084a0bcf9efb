use crate::element::Element;
use crate::event::Event;

/// Tracks which element is currently focused.
///
/// Every focus change is reported as the `Blur` / `Focus` events the host
/// should forward to its widgets.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Focus an element by ID. Returns the resulting events
    /// (empty if it was already focused).
    pub fn focus(&mut self, id: &str) -> Vec<Event> {
        if self.focused.as_deref() == Some(id) {
            return Vec::new();
        }
        let mut events = self.blur();
        log::trace!("[focus] focusing {id}");
        self.focused = Some(id.to_string());
        events.push(Event::focus(id));
        events
    }

    /// Clear focus.
    pub fn blur(&mut self) -> Vec<Event> {
        match self.focused.take() {
            Some(old) => vec![Event::blur(old)],
            None => Vec::new(),
        }
    }

    /// Focus the next focusable element (Tab navigation).
    pub fn focus_next(&mut self, root: &Element) -> Vec<Event> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return Vec::new();
        }

        let next = match self.position_in(&focusable) {
            Some(i) => (i + 1) % focusable.len(),
            None => 0,
        };
        self.focus(&focusable[next])
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    pub fn focus_prev(&mut self, root: &Element) -> Vec<Event> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return Vec::new();
        }

        let prev = match self.position_in(&focusable) {
            Some(0) | None => focusable.len() - 1,
            Some(i) => i - 1,
        };
        self.focus(&focusable[prev])
    }

    /// Drop focus if the focused element disappeared from the tree
    /// (for instance after a re-render replaced its subtree).
    pub fn revalidate(&mut self, root: &Element) -> Vec<Event> {
        let gone = self
            .focused
            .as_deref()
            .is_some_and(|id| !collect_focusable(root).iter().any(|f| f == id));
        if gone { self.blur() } else { Vec::new() }
    }

    fn position_in(&self, focusable: &[String]) -> Option<usize> {
        let current = self.focused.as_deref()?;
        focusable.iter().position(|id| id == current)
    }
}

/// IDs of visible, focusable elements in document order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

fn walk(el: &Element, out: &mut Vec<String>) {
    if !el.visible {
        return;
    }
    if el.focusable {
        out.push(el.id.clone());
    }
    for child in el.child_elements() {
        walk(child, out);
    }
}
