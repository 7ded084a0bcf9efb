//! Grouped, searchable multi-select list widget.
//!
//! The widget renders into an in-memory element tree owned by a host
//! [`Document`]. Hosts feed it [`Event`]s and redraw when
//! [`SelectableGroupedList::handle`] reports [`Outcome::Updated`].

pub mod attrs;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod focus;
pub mod hit;
pub mod layout;
pub mod model;
pub mod render;
pub mod widget;

pub use config::{TrayScope, WidgetConfig};
pub use document::{Document, Selector};
pub use element::Element;
pub use error::WidgetError;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::{FocusState, collect_focusable};
pub use hit::{hit_test, hit_test_focusable};
pub use layout::{LayoutResult, Rect};
pub use model::{Item, ItemId};
pub use widget::{Outcome, SelectableGroupedList};
