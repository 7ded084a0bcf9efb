//! Pure element builders for the widget's subtrees, and the text renderer.
//!
//! Every function here is a function of its arguments only; the widget
//! swaps the produced children into the mounted tree wholesale.

mod text;

pub use text::{TextFrame, render_text};

use crate::attrs::*;
use crate::element::Element;
use crate::model::{Item, ItemId, group_runs};

/// Node id `<kind>:<part>[:<part>…]`. Parts are escaped (`\\` and `\:`), so
/// distinct (kind, parts) pairs never produce the same id, whatever the
/// item ids and group names contain.
fn node_id(kind: &str, parts: &[&str]) -> String {
    let mut id = String::from(kind);
    for part in parts {
        id.push(':');
        for ch in part.chars() {
            if matches!(ch, '\\' | ':') {
                id.push('\\');
            }
            id.push(ch);
        }
    }
    id
}

pub fn group_node_id(group: &str) -> String {
    node_id("group", &[group])
}

pub fn group_title_id(group: &str) -> String {
    node_id("group-title", &[group])
}

pub fn item_node_id(id: &ItemId) -> String {
    node_id("item", &[id.as_str()])
}

pub fn label_node_id(id: &ItemId) -> String {
    node_id("label", &[id.as_str()])
}

pub fn label_text_id(id: &ItemId) -> String {
    node_id("label-text", &[id.as_str()])
}

pub fn check_input_id(id: &ItemId) -> String {
    node_id("check", &[id.as_str()])
}

pub fn check_glyph_id(id: &ItemId) -> String {
    node_id("check-glyph", &[id.as_str()])
}

pub fn sub_group_wrapper_id(id: &ItemId) -> String {
    node_id("sub-group", &[id.as_str()])
}

pub fn sub_group_toggle_id(id: &ItemId) -> String {
    node_id("sub-group-toggle", &[id.as_str()])
}

pub fn sub_group_list_id(id: &ItemId) -> String {
    node_id("sub-group-list", &[id.as_str()])
}

pub fn sub_group_option_id(id: &ItemId, group: &str) -> String {
    node_id("sub-group-option", &[id.as_str(), group])
}

pub fn badge_node_id(id: &ItemId) -> String {
    node_id("badge", &[id.as_str()])
}

/// Children of the dropdown body for a group-sorted list.
///
/// One header per contiguous group run; each item is appended to the first
/// header whose `data-group` matches, which on a sorted list is its own run.
pub fn dropdown_body(
    items: &[Item],
    groups: &[String],
    open_submenu: Option<&ItemId>,
) -> Vec<Element> {
    let mut headers: Vec<Element> = group_runs(items)
        .into_iter()
        .map(|(group, _)| group_header(group))
        .collect();

    for item in items {
        let Some(header) = headers
            .iter_mut()
            .find(|h| h.get_data(DATA_GROUP) == Some(item.group_id.as_str()))
        else {
            log::warn!("[render] no header for group {:?}", item.group_id);
            continue;
        };
        let open = open_submenu == Some(&item.id);
        header.push_child(item_node(item, groups, open));
    }

    headers
}

/// Placeholder shown in place of the groups when a search matches nothing.
pub fn empty_state(text: &str) -> Vec<Element> {
    vec![Element::text(text).id("dropdown-empty").class(CLASS_EMPTY)]
}

/// One badge per selected item, in list order.
pub fn badge_tray<'a>(items: impl IntoIterator<Item = &'a Item>) -> Vec<Element> {
    items
        .into_iter()
        .filter(|item| item.is_selected)
        .map(|item| {
            Element::text(item.label.clone())
                .id(badge_node_id(&item.id))
                .class(CLASS_BADGE)
                .data(DATA_ID, item.id.as_str())
        })
        .collect()
}

fn group_header(group: &str) -> Element {
    Element::col()
        .id(group_node_id(group))
        .class(CLASS_GROUP)
        .data(DATA_GROUP, group)
        .indent(2)
        .child(Element::text(group).id(group_title_id(group)))
}

/// Row for a single item: checkbox label plus its sub-group selector.
pub fn item_node(item: &Item, groups: &[String], submenu_open: bool) -> Element {
    let mut label = Element::row()
        .id(label_node_id(&item.id))
        .data(DATA_ID, item.id.as_str())
        .focusable(true)
        .child(
            Element::text_input("")
                .id(check_input_id(&item.id))
                .data(DATA_HIDDEN, "true")
                .focusable(false)
                .visible(false),
        )
        .child(
            Element::text("✔")
                .id(check_glyph_id(&item.id))
                .class(CLASS_CHECKBOX)
                .pass_through(),
        )
        .child(
            Element::text(item.label.clone())
                .id(label_text_id(&item.id))
                .pass_through(),
        );
    if item.is_selected {
        label.add_class(CLASS_ACTIVE);
    }

    Element::row()
        .id(item_node_id(&item.id))
        .class(CLASS_ITEM_WRAPPER)
        .child(label)
        .child(sub_group_selector(item, groups, submenu_open))
}

/// Per-item toggle showing the current group, plus the option list.
pub fn sub_group_selector(item: &Item, groups: &[String], open: bool) -> Element {
    let visibility = if open { VISIBEL } else { HIDDEN };
    let toggle = Element::text(item.group_id.clone())
        .id(sub_group_toggle_id(&item.id))
        .class(CLASS_SUB_GROUP_TOGGLE)
        .data(DATA_LIST_ID, item.id.as_str())
        .data(DATA_VISIBEL, visibility)
        .data(ARIA_PRESSED, open.to_string())
        .data(ROLE, "button");

    let options = groups.iter().map(|group| {
        let mut option = Element::text(group.clone())
            .id(sub_group_option_id(&item.id, group))
            .class(CLASS_SUB_GROUP_OPTION)
            .data(DATA_SELECTED_ID, item.id.as_str())
            .data(DATA_OPTION, group.as_str())
            .data(ROLE, "option");
        if *group == item.group_id {
            option.add_class(CLASS_ACTIVE);
        }
        option
    });

    Element::col()
        .id(sub_group_wrapper_id(&item.id))
        .class(CLASS_SUB_GROUP_WRAPPER)
        .data(ROLE, "list")
        .indent(2)
        .focusable(true)
        .child(toggle)
        .child(
            Element::col()
                .id(sub_group_list_id(&item.id))
                .class(CLASS_SUB_GROUP_LIST)
                .visible(open)
                .children(options),
        )
}
