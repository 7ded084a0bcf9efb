//! Widget state and the mount / render half of the controller.

use crate::attrs::*;
use crate::config::{TrayScope, WidgetConfig};
use crate::document::Document;
use crate::element::{Element, find_by_data_mut};
use crate::error::WidgetError;
use crate::model::{Item, ItemId, Ledger, check_unique_ids, distinct_groups, sorted_by_group};
use crate::render;

/// Whether handling an event changed the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing addressed to this widget, or nothing to do.
    Ignored,
    /// Model or tree changed; the host should redraw.
    Updated,
}

/// Node ids resolved at mount.
#[derive(Debug, Clone)]
pub(super) struct Bindings {
    pub container: String,
    pub search: String,
    pub close_surface: String,
    pub tray: String,
    pub body: String,
}

/// A grouped, searchable multi-select list.
///
/// The canonical list is fixed at construction. Searches and group changes
/// replace the working copy; every field edit is also recorded in a ledger
/// so clearing a search restores all items with their edits.
///
/// # Example
///
/// ```ignore
/// let mut doc = Document::new(
///     Element::col()
///         .id("page")
///         .child(Element::text_input("").id("search"))
///         .child(Element::col().id("list"))
///         .child(Element::text("close").id("overlay")),
/// );
/// let mut widget = SelectableGroupedList::new(items);
/// widget.mount(&mut doc, "#list", "#search", "#overlay")?;
/// widget.handle(&mut doc, &Event::focus("search"))?;
/// ```
#[derive(Debug)]
pub struct SelectableGroupedList {
    pub(super) canonical: Vec<Item>,
    pub(super) groups: Vec<String>,
    pub(super) ledger: Ledger,
    pub(super) working: Vec<Item>,
    pub(super) query: String,
    pub(super) config: WidgetConfig,
    pub(super) bindings: Option<Bindings>,
    pub(super) is_open: bool,
    pub(super) close_armed: bool,
    pub(super) open_submenu: Option<ItemId>,
}

impl SelectableGroupedList {
    /// Create a widget from an unordered list. Items are sorted by group,
    /// keeping input order within a group.
    pub fn new(items: Vec<Item>) -> Self {
        let canonical = sorted_by_group(items);
        let groups = distinct_groups(&canonical);
        Self {
            ledger: Ledger::new(&canonical),
            canonical,
            groups,
            working: Vec::new(),
            query: String::new(),
            config: WidgetConfig::default(),
            bindings: None,
            is_open: false,
            close_armed: false,
            open_submenu: None,
        }
    }

    /// Like [`new`](Self::new), rejecting duplicate ids.
    pub fn try_new(items: Vec<Item>) -> Result<Self, WidgetError> {
        check_unique_ids(&items)?;
        Ok(Self::new(items))
    }

    pub fn with_config(mut self, config: WidgetConfig) -> Self {
        self.config = config;
        self
    }

    /// Mount into `doc`.
    ///
    /// Appends the badge tray and the dropdown body to `container`, renders
    /// both, and starts accepting events. An empty list mounts nothing.
    pub fn mount(
        &mut self,
        doc: &mut Document,
        container: &str,
        search: &str,
        close_surface: &str,
    ) -> Result<(), WidgetError> {
        if self.bindings.is_some() {
            return Err(WidgetError::AlreadyMounted);
        }
        if self.canonical.is_empty() {
            log::debug!("[grouplist] empty item list, nothing to mount");
            return Ok(());
        }

        let resolve = |selector: &str| {
            doc.query(selector)
                .map(|el| el.id.clone())
                .ok_or_else(|| WidgetError::MountTargetMissing {
                    selector: selector.to_string(),
                })
        };
        let bindings = Bindings {
            container: resolve(container)?,
            search: resolve(search)?,
            close_surface: resolve(close_surface)?,
            tray: SELECTED_LIST_BODY.to_string(),
            body: DROPDOWN_BODY.to_string(),
        };

        let container_el = node_mut(doc, &bindings.container)?;
        container_el.push_child(Element::row().id(SELECTED_LIST_BODY));
        container_el.push_child(Element::col().id(DROPDOWN_BODY).visible(false));

        self.working = self.canonical.clone();
        self.ledger = Ledger::new(&self.canonical);

        log::debug!(
            "[grouplist] mounted {} items in {} groups into #{}",
            self.canonical.len(),
            self.groups.len(),
            bindings.container
        );

        self.render_body(doc, &bindings)?;
        self.render_tray(doc, &bindings)?;
        self.bindings = Some(bindings);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn is_mounted(&self) -> bool {
        self.bindings.is_some()
    }

    /// Items sorted by group as given at construction, without edits.
    pub fn canonical(&self) -> &[Item] {
        &self.canonical
    }

    /// The list currently rendered in the dropdown body.
    pub fn working_copy(&self) -> &[Item] {
        &self.working
    }

    /// Every item with all edits applied, sorted by group.
    pub fn items(&self) -> Vec<Item> {
        self.ledger.roll_back(&self.canonical)
    }

    /// Selected items, sorted by group.
    pub fn selected(&self) -> Vec<Item> {
        self.items()
            .into_iter()
            .filter(|item| item.is_selected)
            .collect()
    }

    /// Distinct groups of the canonical list, offered by every sub-menu.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open_submenu(&self) -> Option<&ItemId> {
        self.open_submenu.as_ref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Rendering into the mounted tree
    // -------------------------------------------------------------------------

    pub(super) fn render_body(
        &self,
        doc: &mut Document,
        bindings: &Bindings,
    ) -> Result<(), WidgetError> {
        let children =
            render::dropdown_body(&self.working, &self.groups, self.open_submenu.as_ref());
        log::trace!("[grouplist] render body: {} items", self.working.len());
        let body = node_mut(doc, &bindings.body)?;
        body.replace_children(children);
        body.visible = self.is_open;
        Ok(())
    }

    pub(super) fn render_empty(
        &self,
        doc: &mut Document,
        bindings: &Bindings,
    ) -> Result<(), WidgetError> {
        let body = node_mut(doc, &bindings.body)?;
        body.replace_children(render::empty_state(&self.config.empty_placeholder));
        body.visible = self.is_open;
        Ok(())
    }

    pub(super) fn render_tray(
        &self,
        doc: &mut Document,
        bindings: &Bindings,
    ) -> Result<(), WidgetError> {
        let badges = match self.config.tray_scope {
            TrayScope::Selection => render::badge_tray(&self.items()),
            TrayScope::WorkingCopy => render::badge_tray(&self.working),
        };
        node_mut(doc, &bindings.tray)?.replace_children(badges);
        Ok(())
    }

    /// Set `active` on the body label of `id`, if it is rendered. The rest
    /// of the body is left alone.
    pub(super) fn mark_label(
        &self,
        doc: &mut Document,
        bindings: &Bindings,
        id: &ItemId,
        active: bool,
    ) -> Result<(), WidgetError> {
        let body = node_mut(doc, &bindings.body)?;
        if let Some(label) = find_by_data_mut(body, DATA_ID, id.as_str()) {
            if active {
                label.add_class(CLASS_ACTIVE);
            } else {
                label.remove_class(CLASS_ACTIVE);
            }
        }
        Ok(())
    }

    /// Reflect `open_submenu` on the toggle and option list of `id`.
    pub(super) fn sync_submenu(&self, doc: &mut Document, id: &ItemId) {
        let open = self.open_submenu.as_ref() == Some(id);
        if let Some(toggle) = doc.get_mut(&render::sub_group_toggle_id(id)) {
            toggle.set_data(DATA_VISIBEL, if open { VISIBEL } else { HIDDEN });
            toggle.set_data(ARIA_PRESSED, open.to_string());
        }
        if let Some(list) = doc.get_mut(&render::sub_group_list_id(id)) {
            list.visible = open;
        }
    }
}

pub(super) fn node_mut<'a>(
    doc: &'a mut Document,
    id: &str,
) -> Result<&'a mut Element, WidgetError> {
    doc.get_mut(id)
        .ok_or_else(|| WidgetError::MissingNode { id: id.to_string() })
}
