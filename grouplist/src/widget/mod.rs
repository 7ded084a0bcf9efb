//! The widget controller: state, mounting, rendering and event routing.

mod events;
mod state;

pub use state::{Outcome, SelectableGroupedList};
