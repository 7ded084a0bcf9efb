//! Pure list model: items, ordering, filtering and the edit ledger.
//!
//! Nothing here knows about the element tree.

mod item;
mod ledger;
mod list;

pub use item::{Item, ItemId};
pub use ledger::Ledger;
pub use list::{
    check_unique_ids, distinct_groups, filter_by_prefix, find_index, group_runs, load_items,
    load_items_from, sort_by_group, sorted_by_group,
};
