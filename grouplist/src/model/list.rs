use std::collections::HashSet;
use std::fs;
use std::ops::Range;
use std::path::Path;

use super::{Item, ItemId};
use crate::error::WidgetError;

/// Sort ascending by group, keeping the relative order of equal groups.
pub fn sort_by_group(items: &mut [Item]) {
    items.sort_by(|a, b| a.group_id.cmp(&b.group_id));
}

pub fn sorted_by_group(mut items: Vec<Item>) -> Vec<Item> {
    sort_by_group(&mut items);
    items
}

/// Contiguous runs of equal `group_id`, in list order.
///
/// On a group-sorted list every group appears in exactly one run.
pub fn group_runs(items: &[Item]) -> Vec<(&str, Range<usize>)> {
    let mut runs: Vec<(&str, Range<usize>)> = Vec::new();
    for (index, item) in items.iter().enumerate() {
        match runs.last_mut() {
            Some((group, range)) if *group == item.group_id => range.end = index + 1,
            _ => runs.push((item.group_id.as_str(), index..index + 1)),
        }
    }
    runs
}

/// One entry per run of equal groups. On a sorted list, the distinct groups.
pub fn distinct_groups(items: &[Item]) -> Vec<String> {
    group_runs(items)
        .into_iter()
        .map(|(group, _)| group.to_string())
        .collect()
}

/// Items whose label starts with `query`. Case-sensitive.
pub fn filter_by_prefix(items: &[Item], query: &str) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item.label.starts_with(query))
        .cloned()
        .collect()
}

pub fn find_index(items: &[Item], id: &ItemId) -> Option<usize> {
    items.iter().position(|item| &item.id == id)
}

/// Reject lists in which an id occurs twice.
pub fn check_unique_ids(items: &[Item]) -> Result<(), WidgetError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(&item.id) {
            return Err(WidgetError::DuplicateId {
                id: item.id.clone(),
            });
        }
    }
    Ok(())
}

/// Parse a JSON array of items.
pub fn load_items(json: &str) -> Result<Vec<Item>, WidgetError> {
    let items: Vec<Item> = serde_json::from_str(json)?;
    check_unique_ids(&items)?;
    Ok(items)
}

/// Read a JSON array of items from a file.
pub fn load_items_from(path: impl AsRef<Path>) -> Result<Vec<Item>, WidgetError> {
    let json = fs::read_to_string(path)?;
    load_items(&json)
}
