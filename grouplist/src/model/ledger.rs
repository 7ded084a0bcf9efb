use std::collections::HashMap;

use super::{Item, ItemId, sorted_by_group};
use crate::error::WidgetError;

/// Field edits (`is_selected`, `group_id`) for every known item, by id.
///
/// Searches narrow the working copy, but edits are always recorded here,
/// so rolling back never loses an edit made to an item a search hid.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    items: HashMap<ItemId, Item>,
}

impl Ledger {
    pub fn new(items: &[Item]) -> Self {
        Self {
            items: items
                .iter()
                .map(|item| (item.id.clone(), item.clone()))
                .collect(),
        }
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flip `is_selected`. Returns the new value.
    pub fn toggle_selected(&mut self, id: &ItemId) -> Result<bool, WidgetError> {
        let item = self.get_mut(id)?;
        item.is_selected = !item.is_selected;
        Ok(item.is_selected)
    }

    /// Move an item to `group`. Returns false if it was already there.
    pub fn set_group(&mut self, id: &ItemId, group: &str) -> Result<bool, WidgetError> {
        let item = self.get_mut(id)?;
        if item.group_id == group {
            return Ok(false);
        }
        item.group_id = group.to_string();
        Ok(true)
    }

    /// Rebuild the full list from `canonical`, carrying every recorded
    /// edit forward, sorted by group.
    pub fn roll_back(&self, canonical: &[Item]) -> Vec<Item> {
        let merged = canonical
            .iter()
            .map(|item| self.items.get(&item.id).unwrap_or(item).clone())
            .collect();
        sorted_by_group(merged)
    }

    fn get_mut(&mut self, id: &ItemId) -> Result<&mut Item, WidgetError> {
        self.items
            .get_mut(id)
            .ok_or_else(|| WidgetError::ItemNotFound { id: id.clone() })
    }
}
