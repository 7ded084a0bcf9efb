use grouplist::attrs::*;
use grouplist::render::{
    group_node_id, group_title_id, item_node_id, label_node_id, sub_group_list_id,
    sub_group_option_id, sub_group_toggle_id, sub_group_wrapper_id,
};
use grouplist::{
    Document, Element, Event, Item, ItemId, Outcome, SelectableGroupedList, WidgetError,
};

fn mount(items: Vec<Item>) -> (SelectableGroupedList, Document) {
    let mut doc = Document::new(
        Element::col()
            .id("page")
            .child(Element::text_input("").id("search"))
            .child(Element::col().id("dropdown"))
            .child(Element::text("close").id("close-popup-overlay")),
    );
    let mut widget = SelectableGroupedList::new(items);
    widget
        .mount(&mut doc, "#dropdown", "#search", "#close-popup-overlay")
        .unwrap();
    widget.handle(&mut doc, &Event::focus("search")).unwrap();
    (widget, doc)
}

fn setup() -> (SelectableGroupedList, Document) {
    mount(vec![
        Item::new("Coca-Cola", "Something").with_id("cola"),
        Item::new("Carrot", "Vegatabel").with_id("carrot"),
        Item::new("Apple", "Fruits").with_id("apple").selected(true),
        Item::new("Orange", "Fruits").with_id("orange"),
        Item::new("Potato", "Vegatabel").with_id("potato"),
    ])
}

fn click(widget: &mut SelectableGroupedList, doc: &mut Document, target: &str) -> Outcome {
    widget.handle(doc, &Event::click(target)).unwrap()
}

fn toggle(id: &str) -> String {
    sub_group_toggle_id(&id.into())
}

fn option(id: &str, group: &str) -> String {
    sub_group_option_id(&id.into(), group)
}

fn is_shown(doc: &Document, id: &str) -> bool {
    let toggle = doc.get(&sub_group_toggle_id(&id.into())).unwrap();
    let list = doc.get(&sub_group_list_id(&id.into())).unwrap();
    assert_eq!(
        toggle.get_data(DATA_VISIBEL) == Some(VISIBEL),
        list.visible,
        "toggle and list disagree for {id}"
    );
    list.visible
}

fn working(widget: &SelectableGroupedList) -> Vec<String> {
    widget
        .working_copy()
        .iter()
        .map(|item| item.id.to_string())
        .collect()
}

fn tray(doc: &Document) -> Vec<String> {
    doc.get(SELECTED_LIST_BODY)
        .unwrap()
        .child_elements()
        .iter()
        .map(|badge| badge.get_data(DATA_ID).unwrap().to_string())
        .collect()
}

// ============================================================================
// Open / close
// ============================================================================

#[test]
fn test_toggle_opens_and_closes() {
    let (mut widget, mut doc) = setup();
    assert!(!is_shown(&doc, "carrot"));

    assert_eq!(click(&mut widget, &mut doc, &toggle("carrot")), Outcome::Updated);
    assert!(is_shown(&doc, "carrot"));
    assert_eq!(widget.open_submenu().map(|id| id.as_str()), Some("carrot"));
    assert_eq!(
        doc.get(&toggle("carrot")).unwrap().get_data(ARIA_PRESSED),
        Some("true")
    );

    click(&mut widget, &mut doc, &toggle("carrot"));
    assert!(!is_shown(&doc, "carrot"));
    assert!(widget.open_submenu().is_none());
    assert_eq!(
        doc.get(&toggle("carrot")).unwrap().get_data(ARIA_PRESSED),
        Some("false")
    );
}

#[test]
fn test_only_one_submenu_open() {
    let (mut widget, mut doc) = setup();
    click(&mut widget, &mut doc, &toggle("carrot"));
    click(&mut widget, &mut doc, &toggle("potato"));

    assert!(!is_shown(&doc, "carrot"));
    assert!(is_shown(&doc, "potato"));
}

#[test]
fn test_blur_of_selector_closes_submenu() {
    let (mut widget, mut doc) = setup();
    click(&mut widget, &mut doc, &toggle("carrot"));

    // Blur of something else leaves it open
    let outcome = widget.handle(&mut doc, &Event::blur("search")).unwrap();
    assert_eq!(outcome, Outcome::Ignored);
    assert!(is_shown(&doc, "carrot"));

    // Any selector blurring hides whichever sub-menu is visible
    let outcome = widget
        .handle(&mut doc, &Event::blur(sub_group_wrapper_id(&"potato".into())))
        .unwrap();
    assert_eq!(outcome, Outcome::Updated);
    assert!(!is_shown(&doc, "carrot"));
}

#[test]
fn test_clicks_inside_selector_do_not_toggle_selection() {
    let (mut widget, mut doc) = setup();
    let outcome = click(&mut widget, &mut doc, &sub_group_wrapper_id(&"orange".into()));
    assert_eq!(outcome, Outcome::Ignored);

    click(&mut widget, &mut doc, &toggle("orange"));
    assert_eq!(widget.selected().len(), 1);
}

// ============================================================================
// Choosing a group
// ============================================================================

#[test]
fn test_reassign_moves_item_under_new_header() {
    let (mut widget, mut doc) = setup();
    click(&mut widget, &mut doc, &toggle("carrot"));

    let outcome = click(&mut widget, &mut doc, &option("carrot", "Fruits"));
    assert_eq!(outcome, Outcome::Updated);
    assert_eq!(
        working(&widget),
        vec!["apple", "orange", "carrot", "cola", "potato"]
    );
    assert!(widget.open_submenu().is_none());
    assert!(!is_shown(&doc, "carrot"));

    // Re-rendered under the Fruits header, with the new group on its toggle
    let carrot = item_node_id(&"carrot".into());
    assert!(doc.contains(&group_node_id("Fruits"), &carrot));
    assert!(!doc.contains(&group_node_id("Vegatabel"), &carrot));
    assert_eq!(doc.get(&toggle("carrot")).unwrap().text_content(), Some("Fruits"));
    assert!(doc
        .get(&option("carrot", "Fruits"))
        .unwrap()
        .has_class(CLASS_ACTIVE));
}

#[test]
fn test_reassign_round_trip_restores_order() {
    let (mut widget, mut doc) = setup();
    let before = working(&widget);

    click(&mut widget, &mut doc, &toggle("carrot"));
    click(&mut widget, &mut doc, &option("carrot", "Fruits"));
    click(&mut widget, &mut doc, &toggle("carrot"));
    click(&mut widget, &mut doc, &option("carrot", "Vegatabel"));

    assert_eq!(working(&widget), before);
}

#[test]
fn test_reassign_to_same_group_only_closes() {
    let (mut widget, mut doc) = setup();
    let before = working(&widget);
    click(&mut widget, &mut doc, &toggle("carrot"));

    let outcome = click(&mut widget, &mut doc, &option("carrot", "Vegatabel"));
    assert_eq!(outcome, Outcome::Updated);
    assert_eq!(working(&widget), before);
    assert!(!is_shown(&doc, "carrot"));
}

#[test]
fn test_reassign_keeps_selection() {
    let (mut widget, mut doc) = setup();
    click(&mut widget, &mut doc, &toggle("apple"));
    click(&mut widget, &mut doc, &option("apple", "Something"));

    let selected = widget.selected();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].group_id, "Something");
    assert!(doc
        .get(&label_node_id(&"apple".into()))
        .unwrap()
        .has_class(CLASS_ACTIVE));
}

#[test]
fn test_reassign_reorders_tray() {
    let (mut widget, mut doc) = setup();
    click(&mut widget, &mut doc, &label_node_id(&"cola".into()));
    assert_eq!(tray(&doc), vec!["apple", "cola"]);

    click(&mut widget, &mut doc, &toggle("apple"));
    click(&mut widget, &mut doc, &option("apple", "Vegatabel"));

    assert_eq!(tray(&doc), vec!["cola", "apple"]);
}

#[test]
fn test_reassign_rejects_unknown_group_and_item() {
    let (mut widget, mut doc) = setup();
    let before = working(&widget);

    doc.get_mut(&option("carrot", "Fruits"))
        .unwrap()
        .set_data(DATA_OPTION, "Meat");
    let err = widget
        .handle(&mut doc, &Event::click(option("carrot", "Fruits")))
        .unwrap_err();
    assert!(matches!(err, WidgetError::UnknownGroup { ref group } if group == "Meat"));

    doc.get_mut(&option("potato", "Fruits"))
        .unwrap()
        .set_data(DATA_SELECTED_ID, "ghost");
    let err = widget
        .handle(&mut doc, &Event::click(option("potato", "Fruits")))
        .unwrap_err();
    assert!(matches!(err, WidgetError::ItemNotFound { .. }));

    assert_eq!(working(&widget), before);
}

// ============================================================================
// Ids with separators in them
// ============================================================================

fn lookalikes() -> (SelectableGroupedList, Document) {
    mount(vec![
        Item::new("A", "x").with_id("a"),
        Item::new("Toggle A", "x").with_id("toggle-a"),
        Item::new("List A", "x").with_id("list-a"),
        Item::new("Text X", "x").with_id("text-x"),
        Item::new("Colon", "x:y").with_id("a:b"),
        Item::new("Title", "x-title").with_id("t"),
    ])
}

#[test]
fn test_lookalike_ids_open_their_own_submenu() {
    let (mut widget, mut doc) = lookalikes();

    let outcome = click(&mut widget, &mut doc, &toggle("a"));
    assert_eq!(outcome, Outcome::Updated);
    assert_eq!(widget.open_submenu(), Some(&ItemId::from("a")));
    assert!(is_shown(&doc, "a"));
    assert!(!is_shown(&doc, "toggle-a"));
    assert!(!is_shown(&doc, "list-a"));

    click(&mut widget, &mut doc, &toggle("a:b"));
    assert_eq!(widget.open_submenu(), Some(&ItemId::from("a:b")));
    assert!(!is_shown(&doc, "a"));
}

#[test]
fn test_lookalike_ids_reassign_the_right_item() {
    let (mut widget, mut doc) = lookalikes();

    click(&mut widget, &mut doc, &toggle("a"));
    click(&mut widget, &mut doc, &option("a", "x-title"));

    let moved: Vec<_> = widget
        .working_copy()
        .iter()
        .filter(|item| item.group_id == "x-title")
        .map(|item| item.id.to_string())
        .collect();
    assert_eq!(moved, vec!["a", "t"]);
    assert!(doc.contains(&group_node_id("x-title"), &item_node_id(&"a".into())));
    assert!(doc.contains(&group_node_id("x"), &item_node_id(&"toggle-a".into())));
}

#[test]
fn test_lookalike_ids_keep_distinct_nodes() {
    let (_widget, doc) = lookalikes();

    let label = doc.get(&label_node_id(&"text-x".into())).unwrap();
    assert_eq!(label.get_data(DATA_ID), Some("text-x"));
    assert_eq!(
        doc.get(&group_title_id("x")).unwrap().text_content(),
        Some("x")
    );
    assert_eq!(
        doc.get(&group_node_id("x-title")).unwrap().get_data(DATA_GROUP),
        Some("x-title")
    );
    assert_eq!(
        doc.get(&sub_group_wrapper_id(&"toggle-a".into()))
            .unwrap()
            .get_data(ROLE),
        Some("list")
    );
}
