//! Event routing for the widget.
//!
//! Routing is by element path rather than per-node listeners: a click is
//! offered to the innermost interested region (sub-group selector, then
//! tray/body, then the close surface), and stops there.

use super::state::{Bindings, Outcome, SelectableGroupedList, node_mut};
use crate::attrs::*;
use crate::document::Document;
use crate::error::WidgetError;
use crate::event::Event;
use crate::model::{ItemId, filter_by_prefix, find_index, sort_by_group};

/// Markers read off a click target before the tree is mutated.
#[derive(Debug, Default)]
struct Markers {
    id: Option<String>,
    visibility: Option<String>,
    list_id: Option<String>,
    selected_id: Option<String>,
    option: Option<String>,
}

impl Markers {
    fn read(doc: &Document, target: &str) -> Self {
        let Some(el) = doc.get(target) else {
            return Self::default();
        };
        let attr = |key: &str| el.get_data(key).map(str::to_owned);
        Self {
            id: attr(DATA_ID),
            visibility: attr(DATA_VISIBEL),
            list_id: attr(DATA_LIST_ID),
            selected_id: attr(DATA_SELECTED_ID),
            option: attr(DATA_OPTION),
        }
    }
}

impl SelectableGroupedList {
    /// Handle one event. Events are ignored until the widget is mounted.
    ///
    /// Errors leave the model and the tree as they were.
    pub fn handle(&mut self, doc: &mut Document, event: &Event) -> Result<Outcome, WidgetError> {
        let Some(bindings) = self.bindings.clone() else {
            return Ok(Outcome::Ignored);
        };

        match event {
            Event::Input { target, value } if *target == bindings.search => {
                self.search(doc, &bindings, value)
            }
            Event::Focus { target } if *target == bindings.search => self.open(doc, &bindings),
            Event::Blur { target } => Ok(self.blur(doc, target)),
            Event::Click {
                target: Some(target),
            } => self.click(doc, &bindings, target),
            _ => Ok(Outcome::Ignored),
        }
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    fn search(
        &mut self,
        doc: &mut Document,
        bindings: &Bindings,
        query: &str,
    ) -> Result<Outcome, WidgetError> {
        let rolled_back = self.items();
        self.query = query.to_string();
        self.open_submenu = None;

        if query.is_empty() {
            self.working = rolled_back;
            self.render_body(doc, bindings)?;
            self.render_tray(doc, bindings)?;
            return Ok(Outcome::Updated);
        }

        let matches = filter_by_prefix(&rolled_back, query);
        log::debug!(
            "[grouplist] search {query:?}: {} of {} items",
            matches.len(),
            rolled_back.len()
        );
        self.working = matches;

        if self.working.is_empty() {
            self.render_empty(doc, bindings)?;
        } else {
            self.render_body(doc, bindings)?;
        }
        self.render_tray(doc, bindings)?;
        Ok(Outcome::Updated)
    }

    // -------------------------------------------------------------------------
    // Open / close
    // -------------------------------------------------------------------------

    fn open(&mut self, doc: &mut Document, bindings: &Bindings) -> Result<Outcome, WidgetError> {
        if self.is_open {
            return Ok(Outcome::Ignored);
        }
        node_mut(doc, &bindings.search)?.add_class(CLASS_ACTIVE);
        node_mut(doc, &bindings.body)?.visible = true;
        self.is_open = true;
        self.close_armed = true;
        log::debug!("[grouplist] dropdown opened");
        Ok(Outcome::Updated)
    }

    fn close(&mut self, doc: &mut Document, bindings: &Bindings) -> Result<Outcome, WidgetError> {
        node_mut(doc, &bindings.search)?.remove_class(CLASS_ACTIVE);
        node_mut(doc, &bindings.body)?.visible = false;
        self.is_open = false;
        self.close_armed = false;
        log::debug!("[grouplist] dropdown closed");
        Ok(Outcome::Updated)
    }

    // -------------------------------------------------------------------------
    // Clicks
    // -------------------------------------------------------------------------

    fn click(
        &mut self,
        doc: &mut Document,
        bindings: &Bindings,
        target: &str,
    ) -> Result<Outcome, WidgetError> {
        let path = doc.path(target);
        if path.is_empty() {
            return Ok(Outcome::Ignored);
        }

        let in_sub_group = path.iter().any(|id| {
            doc.get(id)
                .is_some_and(|el| el.has_class(CLASS_SUB_GROUP_WRAPPER))
        });
        if in_sub_group {
            return self.sub_group_click(doc, bindings, target);
        }

        if path
            .iter()
            .any(|id| *id == bindings.tray || *id == bindings.body)
        {
            return self.select_click(doc, bindings, target);
        }

        if self.close_armed && path.iter().any(|id| *id == bindings.close_surface) {
            return self.close(doc, bindings);
        }

        Ok(Outcome::Ignored)
    }

    fn select_click(
        &mut self,
        doc: &mut Document,
        bindings: &Bindings,
        target: &str,
    ) -> Result<Outcome, WidgetError> {
        let Some(id) = Markers::read(doc, target).id else {
            return Ok(Outcome::Ignored);
        };
        self.toggle_selection(doc, bindings, &ItemId::from(id))
    }

    /// Flip selection of `id`, redraw the tray and patch the body label
    /// in place.
    fn toggle_selection(
        &mut self,
        doc: &mut Document,
        bindings: &Bindings,
        id: &ItemId,
    ) -> Result<Outcome, WidgetError> {
        let selected = self.ledger.toggle_selected(id)?;
        if let Some(index) = find_index(&self.working, id) {
            self.working[index].is_selected = selected;
        }

        self.render_tray(doc, bindings)?;
        self.mark_label(doc, bindings, id, selected)?;

        log::debug!("[grouplist] {id} selected={selected}");
        Ok(Outcome::Updated)
    }

    // -------------------------------------------------------------------------
    // Sub-group selector
    // -------------------------------------------------------------------------

    fn sub_group_click(
        &mut self,
        doc: &mut Document,
        bindings: &Bindings,
        target: &str,
    ) -> Result<Outcome, WidgetError> {
        let markers = Markers::read(doc, target);

        if let Some(visibility) = markers.visibility {
            let Some(id) = markers.list_id.map(ItemId::from) else {
                return Ok(Outcome::Ignored);
            };
            return Ok(if visibility == HIDDEN {
                self.show_submenu(doc, id)
            } else {
                self.hide_submenu(doc)
            });
        }

        match (markers.selected_id, markers.option) {
            (Some(id), Some(group)) => self.choose_group(doc, bindings, &ItemId::from(id), &group),
            _ => Ok(Outcome::Ignored),
        }
    }

    fn show_submenu(&mut self, doc: &mut Document, id: ItemId) -> Outcome {
        let previous = self.open_submenu.replace(id.clone());
        if let Some(previous) = previous.filter(|previous| *previous != id) {
            self.sync_submenu(doc, &previous);
        }
        self.sync_submenu(doc, &id);
        log::trace!("[grouplist] sub-menu open for {id}");
        Outcome::Updated
    }

    fn hide_submenu(&mut self, doc: &mut Document) -> Outcome {
        match self.open_submenu.take() {
            Some(id) => {
                self.sync_submenu(doc, &id);
                Outcome::Updated
            }
            None => Outcome::Ignored,
        }
    }

    /// Move `id` to `group`, then close its sub-menu. Body and tray are
    /// redrawn so both follow the new group order.
    fn choose_group(
        &mut self,
        doc: &mut Document,
        bindings: &Bindings,
        id: &ItemId,
        group: &str,
    ) -> Result<Outcome, WidgetError> {
        if !self.groups.iter().any(|g| g == group) {
            return Err(WidgetError::UnknownGroup {
                group: group.to_string(),
            });
        }
        let changed = self.ledger.set_group(id, group)?;

        if !changed {
            self.hide_submenu(doc);
            return Ok(Outcome::Updated);
        }

        self.open_submenu = None;
        if let Some(index) = find_index(&self.working, id) {
            self.working[index].group_id = group.to_string();
        }
        sort_by_group(&mut self.working);
        self.render_body(doc, bindings)?;
        self.render_tray(doc, bindings)?;

        log::debug!("[grouplist] {id} moved to group {group:?}");
        Ok(Outcome::Updated)
    }

    /// Blur of a sub-group selector closes whichever sub-menu is open.
    fn blur(&mut self, doc: &mut Document, target: &str) -> Outcome {
        let is_selector = doc
            .get(target)
            .is_some_and(|el| el.has_class(CLASS_SUB_GROUP_WRAPPER));
        if !is_selector {
            return Outcome::Ignored;
        }
        self.hide_submenu(doc)
    }
}
