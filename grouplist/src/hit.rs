use crate::element::Element;
use crate::layout::LayoutResult;

/// Find the deepest visible element at the given coordinates.
///
/// This is the DOM notion of an event target: whatever is on top,
/// regardless of whether it is interactive, skipping elements that let
/// clicks pass through. Handlers decide what to do with targets that
/// carry no markers.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    deepest(layout, root, x, y, &|el| el.pointer_events)
}

/// Find the deepest focusable element at the given coordinates.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
) -> Option<String> {
    deepest(layout, root, x, y, &|el| el.focusable)
}

fn deepest(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    if !element.visible {
        return None;
    }

    // Children are checked even when the parent has no rect of its own:
    // empty containers are not laid out but may still be ancestors.
    if layout
        .get(&element.id)
        .is_some_and(|rect| !rect.contains(x, y))
    {
        return None;
    }

    // Last child wins on overlap
    for child in element.child_elements().iter().rev() {
        if let Some(id) = deepest(layout, child, x, y, accept) {
            return Some(id);
        }
    }

    let inside = layout
        .get(&element.id)
        .is_some_and(|rect| rect.contains(x, y));
    (inside && accept(element)).then(|| element.id.clone())
}
