mod content;
mod node;

pub use content::Content;
pub use node::{Direction, Element};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.child_elements()
        .iter()
        .find_map(|child| find_element(child, id))
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    root.child_elements_mut()
        .iter_mut()
        .find_map(|child| find_element_mut(child, id))
}

/// Find the first element (document order) whose attribute `key` equals `value`.
pub fn find_by_data<'a>(root: &'a Element, key: &str, value: &str) -> Option<&'a Element> {
    find_first(root, &|el| el.get_data(key) == Some(value))
}

/// Mutable variant of [`find_by_data`].
pub fn find_by_data_mut<'a>(
    root: &'a mut Element,
    key: &str,
    value: &str,
) -> Option<&'a mut Element> {
    find_first_mut(root, &|el| el.get_data(key) == Some(value))
}

/// Find the first element (document order) carrying a class.
pub fn find_by_class<'a>(root: &'a Element, class: &str) -> Option<&'a Element> {
    find_first(root, &|el| el.has_class(class))
}

/// Collect all elements carrying a class, in document order.
pub fn find_all_by_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect(root, &|el| el.has_class(class), &mut found);
    found
}

/// Path of element IDs from `root` down to `id`, inclusive.
/// Returns None if `id` is not in the tree.
pub fn element_path(root: &Element, id: &str) -> Option<Vec<String>> {
    if root.id == id {
        return Some(vec![root.id.clone()]);
    }

    for child in root.child_elements() {
        if let Some(mut path) = element_path(child, id) {
            path.insert(0, root.id.clone());
            return Some(path);
        }
    }

    None
}

fn find_first<'a>(el: &'a Element, pred: &dyn Fn(&Element) -> bool) -> Option<&'a Element> {
    if pred(el) {
        return Some(el);
    }
    el.child_elements()
        .iter()
        .find_map(|child| find_first(child, pred))
}

fn find_first_mut<'a>(
    el: &'a mut Element,
    pred: &dyn Fn(&Element) -> bool,
) -> Option<&'a mut Element> {
    if pred(el) {
        return Some(el);
    }
    el.child_elements_mut()
        .iter_mut()
        .find_map(|child| find_first_mut(child, pred))
}

fn collect<'a>(el: &'a Element, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
    if pred(el) {
        out.push(el);
    }
    for child in el.child_elements() {
        collect(child, pred, out);
    }
}
