use grouplist::Item;

/// Items shown when no `items.json` is present.
pub fn items() -> Vec<Item> {
    vec![
        Item::new("Coca-Cola", "Something"),
        Item::new("Carrot", "Vegatabel"),
        Item::new("Apple", "Fruits").selected(true),
        Item::new("Orange", "Fruits"),
        Item::new("Potato", "Vegatabel"),
    ]
}
