use grouplist::render::{
    badge_node_id, label_node_id, label_text_id, render_text, sub_group_toggle_id,
    sub_group_wrapper_id,
};
use grouplist::{
    Document, Element, Event, FocusState, Item, ItemId, Outcome, SelectableGroupedList, collect_focusable,
    hit_test, hit_test_focusable,
};

fn setup() -> (SelectableGroupedList, Document) {
    let mut doc = Document::new(
        Element::col()
            .id("page")
            .child(Element::text_input("").id("search"))
            .child(Element::col().id("dropdown"))
            .child(Element::text("close").id("close-popup-overlay")),
    );
    let mut widget = SelectableGroupedList::new(vec![
        Item::new("Coca-Cola", "Something").with_id("cola"),
        Item::new("Carrot", "Vegatabel").with_id("carrot"),
        Item::new("Apple", "Fruits").with_id("apple").selected(true),
        Item::new("Orange", "Fruits").with_id("orange"),
        Item::new("Potato", "Vegatabel").with_id("potato"),
    ]);
    widget
        .mount(&mut doc, "#dropdown", "#search", "#close-popup-overlay")
        .unwrap();
    (widget, doc)
}

// ============================================================================
// Text rendering
// ============================================================================

#[test]
fn test_closed_dropdown_shows_tray_only() {
    let (_widget, doc) = setup();
    let frame = render_text(doc.root());
    assert_eq!(
        frame.lines,
        vec!["[                      ]", "[Apple]", "close"]
    );
}

#[test]
fn test_open_dropdown_lists_groups() {
    let (mut widget, mut doc) = setup();
    widget.handle(&mut doc, &Event::focus("search")).unwrap();

    let frame = render_text(doc.root());
    assert_eq!(
        frame.lines,
        vec![
            "[                     ▾]",
            "[Apple]",
            "Fruits",
            "  [x] Apple ▸ Fruits",
            "  [ ] Orange ▸ Fruits",
            "Something",
            "  [ ] Coca-Cola ▸ Something",
            "Vegatabel",
            "  [ ] Carrot ▸ Vegatabel",
            "  [ ] Potato ▸ Vegatabel",
            "close",
        ]
    );
}

#[test]
fn test_open_submenu_lists_options() {
    let (mut widget, mut doc) = setup();
    widget.handle(&mut doc, &Event::focus("search")).unwrap();
    let toggle = sub_group_toggle_id(&"carrot".into());
    widget.handle(&mut doc, &Event::click(&toggle)).unwrap();

    let frame = render_text(doc.root());
    let line = frame.line_of(&toggle).unwrap();
    assert_eq!(frame.lines[line], "  [ ] Carrot ▾ Vegatabel");
    assert_eq!(frame.lines[line + 1].trim(), "Fruits");
    assert_eq!(frame.lines[line + 2].trim(), "Something");
    assert_eq!(frame.lines[line + 3].trim(), "› Vegatabel");
}

// ============================================================================
// Hit testing against the rendered frame
// ============================================================================

#[test]
fn test_click_on_label_text_targets_label() {
    let (mut widget, mut doc) = setup();
    widget.handle(&mut doc, &Event::focus("search")).unwrap();

    let frame = render_text(doc.root());
    let text = *frame.layout.get(&label_text_id(&"orange".into())).unwrap();
    let target = hit_test(&frame.layout, doc.root(), text.x + 1, text.y);
    assert_eq!(target, Some(label_node_id(&"orange".into())));

    let outcome = widget
        .handle(&mut doc, &Event::Click { target })
        .unwrap();
    assert_eq!(outcome, Outcome::Updated);
    assert_eq!(widget.selected().len(), 2);

    let frame = render_text(doc.root());
    assert_eq!(frame.lines[1], "[Apple] [Orange]");
}

#[test]
fn test_click_on_toggle_and_outside() {
    let (mut widget, mut doc) = setup();
    widget.handle(&mut doc, &Event::focus("search")).unwrap();

    let frame = render_text(doc.root());
    let toggle_id = sub_group_toggle_id(&"potato".into());
    let toggle = *frame.layout.get(&toggle_id).unwrap();
    assert_eq!(
        hit_test(&frame.layout, doc.root(), toggle.x, toggle.y),
        Some(toggle_id)
    );
    assert_eq!(
        hit_test_focusable(&frame.layout, doc.root(), toggle.x, toggle.y),
        Some(sub_group_wrapper_id(&"potato".into()))
    );
    assert_eq!(hit_test(&frame.layout, doc.root(), 200, 200), None);
}

#[test]
fn test_hidden_body_is_not_hit() {
    let (_widget, doc) = setup();
    let frame = render_text(doc.root());
    assert!(frame.layout.get(&label_node_id(&"apple".into())).is_none());
    // Line 1 is the tray when closed
    assert_eq!(
        hit_test(&frame.layout, doc.root(), 1, 1),
        Some(badge_node_id(&"apple".into()))
    );
}

// ============================================================================
// Focus
// ============================================================================

#[test]
fn test_focus_order_follows_body() {
    let (mut widget, mut doc) = setup();
    assert_eq!(collect_focusable(doc.root()), vec!["search"]);

    widget.handle(&mut doc, &Event::focus("search")).unwrap();
    let order = collect_focusable(doc.root());
    let expected = vec![
        "search".to_string(),
        label_node_id(&"apple".into()),
        sub_group_wrapper_id(&"apple".into()),
        label_node_id(&"orange".into()),
        sub_group_wrapper_id(&"orange".into()),
    ];
    assert_eq!(order[..5], expected[..]);
}

#[test]
fn test_tab_navigation_feeds_widget() {
    let (mut widget, mut doc) = setup();
    let mut focus = FocusState::new();

    for event in focus.focus_next(doc.root()) {
        widget.handle(&mut doc, &event).unwrap();
    }
    assert_eq!(focus.focused(), Some("search"));
    assert!(widget.is_open());

    // Tab to the first label, then to its selector
    focus.focus_next(doc.root());
    let events = focus.focus_next(doc.root());
    let apple = ItemId::from("apple");
    let selector = sub_group_wrapper_id(&apple);
    assert_eq!(focus.focused(), Some(selector.as_str()));
    assert_eq!(
        events,
        vec![Event::blur(label_node_id(&apple)), Event::focus(&selector)]
    );

    widget
        .handle(&mut doc, &Event::click(sub_group_toggle_id(&apple)))
        .unwrap();
    assert!(widget.open_submenu().is_some());

    for event in focus.focus_next(doc.root()) {
        widget.handle(&mut doc, &event).unwrap();
    }
    assert!(widget.open_submenu().is_none());
}
