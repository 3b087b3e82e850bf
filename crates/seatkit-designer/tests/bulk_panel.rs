// The bulk operations panel: confirmation gating, input validation, and
// selection lifecycle.

use seatkit_designer::{BulkOpsPanel, LayoutEditor, Selection};
use seatkit_core::{ItemType, LayoutItem};

fn setup() -> (LayoutEditor, Selection) {
    let mut editor = LayoutEditor::new("Hall");
    let mut selection = Selection::new();
    for n in 0..3 {
        let seat = LayoutItem::seat(n as f64 * 30.0, 0.0, 20.0, 20.0, "A", n + 1);
        selection.select(&editor.add_item(seat).unwrap());
    }
    let table = LayoutItem::new(ItemType::Table, 0.0, 50.0, 60.0, 60.0);
    selection.select(&editor.add_item(table).unwrap());
    (editor, selection)
}

#[test]
fn header_counts_partition_by_type() {
    let (editor, selection) = setup();
    let panel = BulkOpsPanel::new();
    let counts = panel.selection_counts(&selection, editor.layout());
    assert_eq!(counts.get(&ItemType::Seat), Some(&3));
    assert_eq!(counts.get(&ItemType::Table), Some(&1));
}

#[test]
fn preset_rotations_are_plus_minus_ninety() {
    let (mut editor, selection) = setup();
    let panel = BulkOpsPanel::new();
    panel.rotate_cw(&mut editor, &selection);
    assert!(editor.layout().items.iter().all(|i| i.rotation == 90.0));
    panel.rotate_ccw(&mut editor, &selection);
    panel.rotate_ccw(&mut editor, &selection);
    assert!(editor.layout().items.iter().all(|i| i.rotation == 270.0));
}

#[test]
fn custom_rotation_requires_a_parsable_angle() {
    let (mut editor, selection) = setup();
    let mut panel = BulkOpsPanel::new();
    panel.custom_angle_input = "45x".to_string();
    assert!(panel.apply_custom_rotation(&mut editor, &selection).is_err());
    assert!(editor.layout().items.iter().all(|i| i.rotation == 0.0));

    panel.custom_angle_input = " -45 ".to_string();
    panel.apply_custom_rotation(&mut editor, &selection).unwrap();
    assert!(editor.layout().items.iter().all(|i| i.rotation == 315.0));
}

#[test]
fn custom_scale_rejects_zero_and_garbage() {
    let (mut editor, selection) = setup();
    let mut panel = BulkOpsPanel::new();
    panel.custom_scale_input = "0".to_string();
    assert!(panel.apply_custom_scale(&mut editor, &selection).is_err());
    panel.custom_scale_input = "big".to_string();
    assert!(panel.apply_custom_scale(&mut editor, &selection).is_err());
    assert_eq!(editor.layout().items[0].w, 20.0);

    panel.custom_scale_input = "2".to_string();
    panel.apply_custom_scale(&mut editor, &selection).unwrap();
    assert_eq!(editor.layout().items[0].w, 40.0);
}

#[test]
fn category_assign_is_gated_until_chosen() {
    let (mut editor, selection) = setup();
    let mut panel = BulkOpsPanel::new();
    assert!(!panel.can_apply_category());
    assert_eq!(panel.apply_category(&mut editor, &selection), 0);

    let cat_id = editor.add_category("VIP", "#ff0000", 100.0).unwrap();
    panel.chosen_category = Some(cat_id.clone());
    assert!(panel.can_apply_category());
    // Only the 3 seats take the category; the table is unaffected.
    assert_eq!(panel.apply_category(&mut editor, &selection), 3);
    let table = editor
        .layout()
        .items
        .iter()
        .find(|i| i.item_type == ItemType::Table)
        .unwrap();
    assert_eq!(table.category_id, None);
}

#[test]
fn delete_selection_clears_the_selection() {
    let (mut editor, mut selection) = setup();
    let panel = BulkOpsPanel::new();
    assert_eq!(panel.delete_selection(&mut editor, &mut selection), 4);
    assert!(selection.is_empty());
    assert!(editor.layout().items.is_empty());
}
