// Integration tests for the layout editor: item/category CRUD and the
// pricing behavior that falls out of it.

use seatkit_designer::{CategoryPatch, ItemPatch, LayoutEditor};
use seatkit_core::{ItemType, LayoutError, LayoutItem};

#[test]
fn add_item_issues_fresh_id() {
    let mut editor = LayoutEditor::new("Hall");
    let mut seat = LayoutItem::seat(0.0, 0.0, 20.0, 20.0, "A", 1);
    seat.id.clear();
    let id = editor.add_item(seat).unwrap();
    assert!(!id.is_empty());
    assert!(editor.layout().item(&id).is_some());
}

#[test]
fn add_item_rejects_non_positive_dimensions() {
    let mut editor = LayoutEditor::new("Hall");
    let item = LayoutItem::new(ItemType::Table, 0.0, 0.0, 0.0, 40.0);
    assert!(matches!(
        editor.add_item(item),
        Err(LayoutError::InvalidDimensions { .. })
    ));
    assert!(editor.layout().items.is_empty());
}

#[test]
fn update_item_merges_fields() {
    let mut editor = LayoutEditor::new("Hall");
    let id = editor
        .add_item(LayoutItem::seat(0.0, 0.0, 20.0, 20.0, "A", 1))
        .unwrap();

    editor.update_item(&id, ItemPatch::position(50.0, 60.0)).unwrap();
    let item = editor.layout().item(&id).unwrap();
    assert_eq!((item.x, item.y), (50.0, 60.0));
    // Untouched fields survive the merge.
    assert_eq!(item.row_label.as_deref(), Some("A"));
}

#[test]
fn update_item_with_stale_id_is_a_noop() {
    let mut editor = LayoutEditor::new("Hall");
    editor
        .update_item("nope", ItemPatch::position(1.0, 2.0))
        .unwrap();
    assert!(editor.layout().items.is_empty());
}

#[test]
fn update_item_rejects_bad_dimensions_before_applying() {
    let mut editor = LayoutEditor::new("Hall");
    let id = editor
        .add_item(LayoutItem::seat(0.0, 0.0, 20.0, 20.0, "A", 1))
        .unwrap();
    let patch = ItemPatch {
        x: Some(99.0),
        w: Some(-5.0),
        ..ItemPatch::default()
    };
    assert!(editor.update_item(&id, patch).is_err());
    // Nothing partially applied.
    assert_eq!(editor.layout().item(&id).unwrap().x, 0.0);
}

#[test]
fn remove_item_tolerates_unknown_ids() {
    let mut editor = LayoutEditor::new("Hall");
    let id = editor
        .add_item(LayoutItem::seat(0.0, 0.0, 20.0, 20.0, "A", 1))
        .unwrap();
    assert!(editor.remove_item(&id));
    assert!(!editor.remove_item(&id));
}

#[test]
fn category_validation_blocks_bad_input() {
    let mut editor = LayoutEditor::new("Hall");
    assert_eq!(
        editor.add_category("  ", "#fff", 10.0),
        Err(LayoutError::EmptyCategoryName)
    );
    assert_eq!(
        editor.add_category("VIP", "", 10.0),
        Err(LayoutError::MissingCategoryColor)
    );
    assert!(matches!(
        editor.add_category("VIP", "#fff", -1.0),
        Err(LayoutError::InvalidPrice { .. })
    ));
    assert!(editor.layout().categories.is_empty());
}

#[test]
fn category_price_update_flows_into_seat_price() {
    // Spec scenario: seat price is derived from the category, not cached.
    let mut editor = LayoutEditor::new("Hall");
    let cat_id = editor.add_category("VIP", "#ff0000", 100.0).unwrap();
    let mut seat = LayoutItem::seat(0.0, 0.0, 20.0, 20.0, "A", 1);
    seat.category_id = Some(cat_id.clone());
    let seat_id = editor.add_item(seat).unwrap();

    assert_eq!(editor.effective_price(&seat_id), Some(100.0));

    editor
        .update_category(
            &cat_id,
            CategoryPatch {
                price: Some(150.0),
                ..CategoryPatch::default()
            },
        )
        .unwrap();
    assert_eq!(editor.effective_price(&seat_id), Some(150.0));
}

#[test]
fn table_metadata_price_overrides_category_after_update() {
    // Spec scenario: category fallback first, metadata override wins later.
    let mut editor = LayoutEditor::new("Hall");
    let cat_id = editor.add_category("Floor", "#00aaff", 75.0).unwrap();
    let mut table = LayoutItem::new(ItemType::Table, 0.0, 0.0, 60.0, 60.0);
    table.category_id = Some(cat_id);
    let table_id = editor.add_item(table).unwrap();

    assert_eq!(editor.effective_price(&table_id), Some(75.0));

    editor
        .update_item(&table_id, ItemPatch::metadata_price(40.0))
        .unwrap();
    assert_eq!(editor.effective_price(&table_id), Some(40.0));
}

#[test]
fn remove_category_detaches_but_never_deletes_items() {
    let mut editor = LayoutEditor::new("Hall");
    let cat_id = editor.add_category("VIP", "#ff0000", 100.0).unwrap();

    let mut seat = LayoutItem::seat(0.0, 0.0, 20.0, 20.0, "A", 1);
    seat.category_id = Some(cat_id.clone());
    let seat_id = editor.add_item(seat).unwrap();

    let mut booth = LayoutItem::new(ItemType::Booth, 0.0, 40.0, 80.0, 50.0);
    booth.category_id = Some(cat_id.clone());
    let booth_id = editor.add_item(booth).unwrap();

    let detached = editor.remove_category(&cat_id);
    assert_eq!(detached, 2);
    assert_eq!(editor.layout().items.len(), 2);
    assert_eq!(editor.layout().item(&seat_id).unwrap().category_id, None);
    assert_eq!(editor.layout().item(&booth_id).unwrap().category_id, None);

    // Prices fall back correctly after the detach.
    assert_eq!(editor.effective_price(&seat_id), Some(0.0));
    assert_eq!(editor.effective_price(&booth_id), None);
}

#[test]
fn remove_unknown_category_detaches_nothing() {
    let mut editor = LayoutEditor::new("Hall");
    assert_eq!(editor.remove_category("ghost"), 0);
}

#[test]
fn next_seat_suggestion_and_gaps() {
    let mut editor = LayoutEditor::new("Hall");
    editor
        .add_item(LayoutItem::seat(0.0, 0.0, 20.0, 20.0, "A", 1))
        .unwrap();
    editor
        .add_item(LayoutItem::seat(40.0, 0.0, 20.0, 20.0, "A", 3))
        .unwrap();
    editor
        .add_item(LayoutItem::seat(0.0, 30.0, 20.0, 20.0, "B", 1))
        .unwrap();

    let suggestion = editor.next_seat();
    assert_eq!(suggestion.row, "C");
    assert_eq!(suggestion.number, 1);
    assert_eq!(editor.row_gaps("A"), vec![2]);
    assert!(editor.row_gaps("B").is_empty());
}

#[test]
fn snapshot_refreshes_updated_at() {
    let mut editor = LayoutEditor::new("Hall");
    let before = editor.layout().updated_at;
    std::thread::sleep(std::time::Duration::from_millis(2));
    let snapshot = editor.snapshot();
    assert!(snapshot.updated_at > before);
    assert_eq!(snapshot.name, "Hall");
}
