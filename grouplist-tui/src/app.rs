//! Host page and event loop.

use std::time::Duration;

use crossterm::event::{
    Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};

use grouplist::element::Content;
use grouplist::render::{TextFrame, render_text};
use grouplist::{
    Document, Element, Event, FocusState, Item, Key, Modifiers, MouseButton, Outcome,
    SelectableGroupedList, WidgetConfig, hit_test, hit_test_focusable,
};

use crate::error::TuiError;
use crate::terminal::Terminal;

pub const SEARCH_ID: &str = "search";
pub const CONTAINER_ID: &str = "dropdown";
pub const CLOSE_SURFACE_ID: &str = "close-popup-overlay";

const TITLE: &str = "Grouped list  (Tab: move, Enter: pick, Esc: close, Ctrl+Q: quit)";

const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct App {
    doc: Document,
    widget: SelectableGroupedList,
    focus: FocusState,
    frame: TextFrame,
}

/// The page the widget mounts into: a title, the search field, the
/// container and a close line standing in for the overlay.
fn host_page(config: &WidgetConfig) -> Element {
    Element::col()
        .id("page")
        .child(Element::text(TITLE).id("title"))
        .child(
            Element::text_input("")
                .id(SEARCH_ID)
                .placeholder(config.search_placeholder.clone()),
        )
        .child(Element::col().id(CONTAINER_ID))
        .child(Element::text("[ close ]").id(CLOSE_SURFACE_ID))
}

impl App {
    pub fn new(items: Vec<Item>, config: WidgetConfig) -> Result<Self, TuiError> {
        let mut doc = Document::new(host_page(&config));
        let mut widget = SelectableGroupedList::try_new(items)?.with_config(config);
        widget.mount(
            &mut doc,
            &format!("#{CONTAINER_ID}"),
            &format!("#{SEARCH_ID}"),
            &format!("#{CLOSE_SURFACE_ID}"),
        )?;

        Ok(Self {
            doc,
            widget,
            focus: FocusState::new(),
            frame: TextFrame::default(),
        })
    }

    pub fn run(&mut self, terminal: &mut Terminal) -> Result<(), TuiError> {
        loop {
            self.frame = render_text(self.doc.root());
            let highlight = self
                .focus
                .focused()
                .and_then(|id| self.frame.layout.get(id))
                .copied();
            terminal.draw(&self.frame, highlight)?;

            for event in terminal.poll(Some(POLL_INTERVAL))? {
                if self.on_terminal_event(event) == Flow::Quit {
                    log::info!("[app] quit");
                    return Ok(());
                }
            }
        }
    }

    fn on_terminal_event(&mut self, event: CrosstermEvent) -> Flow {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => self.on_key(key),
            CrosstermEvent::Mouse(mouse) => {
                self.on_mouse(mouse);
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    fn on_key(&mut self, event: KeyEvent) -> Flow {
        let key = Key::from(event.code);
        let modifiers = Modifiers::from(event.modifiers);
        let on_search = self.focus.focused() == Some(SEARCH_ID);

        match key {
            Key::Char('c' | 'q') if modifiers.ctrl => return Flow::Quit,
            Key::Tab => {
                let events = self.focus.focus_next(self.doc.root());
                self.dispatch(events);
            }
            Key::BackTab => {
                let events = self.focus.focus_prev(self.doc.root());
                self.dispatch(events);
            }
            Key::Escape => {
                let mut events = self.focus.blur();
                events.push(Event::click(CLOSE_SURFACE_ID));
                self.dispatch(events);
            }
            Key::Char(c) if on_search && !modifiers.ctrl => self.edit_search(|value| value.push(c)),
            Key::Backspace if on_search => self.edit_search(|value| {
                value.pop();
            }),
            Key::Enter | Key::Char(' ') => {
                let target = self.focus.focused().map(str::to_owned);
                self.dispatch(vec![Event::Click { target }]);
            }
            _ => {
                let target = self.focus.focused().map(str::to_owned);
                self.dispatch(vec![Event::Key {
                    target,
                    key,
                    modifiers,
                }]);
            }
        }
        Flow::Continue
    }

    fn on_mouse(&mut self, event: MouseEvent) {
        let MouseEventKind::Down(button) = event.kind else {
            return;
        };
        if MouseButton::from(button) != MouseButton::Left {
            return;
        }

        let (x, y) = (event.column, event.row);
        let root = self.doc.root();
        let target = hit_test(&self.frame.layout, root, x, y);
        let mut events = match hit_test_focusable(&self.frame.layout, root, x, y) {
            Some(id) => self.focus.focus(&id),
            None => self.focus.blur(),
        };
        log::trace!("[app] mouse at ({x}, {y}) -> {target:?}");
        events.push(Event::Click { target });
        self.dispatch(events);
    }

    /// Apply `edit` to the search field's value and report the new value.
    fn edit_search(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(Content::Input { value, .. }) =
            self.doc.get_mut(SEARCH_ID).map(|el| &mut el.content)
        else {
            log::warn!("[app] search field missing");
            return;
        };
        edit(value);
        let value = value.clone();
        self.dispatch(vec![Event::input(SEARCH_ID, value)]);
    }

    /// Deliver events in order, then drop focus from elements a re-render
    /// removed.
    fn dispatch(&mut self, events: Vec<Event>) {
        for event in events {
            self.deliver(&event);
        }
        for event in self.focus.revalidate(self.doc.root()) {
            self.deliver(&event);
        }
    }

    fn deliver(&mut self, event: &Event) {
        match self.widget.handle(&mut self.doc, event) {
            Ok(Outcome::Updated) => log::trace!("[app] {event:?} updated the page"),
            Ok(Outcome::Ignored) => {}
            Err(e) => log::warn!("[app] {event:?} failed: {e}"),
        }
    }
}
