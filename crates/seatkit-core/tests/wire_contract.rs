// Verifies the persisted layout document matches the external storage
// contract field-for-field, including tolerance for minimal documents.

use seatkit_core::{ItemType, LayoutItem, SeatCategory, TableShape, VenueLayout};
use serde_json::{json, Value};

#[test]
fn serialized_document_uses_contract_field_names() {
    let mut layout = VenueLayout::new("Main Hall");
    layout.id = "abc123".to_string();
    layout.venue_owner_id = Some("owner-1".to_string());

    let cat = SeatCategory::new("VIP", "#ff0000", 100.0);
    let mut seat = LayoutItem::seat(10.0, 20.0, 24.0, 24.0, "A", 1);
    seat.category_id = Some(cat.id.clone());
    seat.rotation = 45.0;
    layout.categories.push(cat);
    layout.items.push(seat);

    let doc: Value = serde_json::to_value(&layout).unwrap();
    assert_eq!(doc["_id"], "abc123");
    assert_eq!(doc["name"], "Main Hall");
    assert_eq!(doc["venueOwnerId"], "owner-1");
    assert_eq!(doc["canvasW"], 1200);
    assert_eq!(doc["canvasH"], 800);
    assert_eq!(doc["isActive"], false);
    assert!(doc["createdAt"].is_string());
    assert!(doc["updatedAt"].is_string());

    let item = &doc["items"][0];
    assert_eq!(item["type"], "seat");
    assert_eq!(item["rowLabel"], "A");
    assert_eq!(item["seatNumber"], 1);
    assert_eq!(item["rotation"], 45.0);
    assert!(item["categoryId"].is_string());
    // Optional fields stay off the wire when unset.
    assert!(item.get("label").is_none());
    assert!(item.get("metadata").is_none());

    let category = &doc["categories"][0];
    assert_eq!(category["name"], "VIP");
    assert_eq!(category["color"], "#ff0000");
    assert_eq!(category["price"], 100.0);
}

#[test]
fn parses_document_from_the_store() {
    let doc = json!({
        "_id": "651f0c",
        "name": "Club Floor",
        "eventId": "ev-9",
        "canvasW": 1000,
        "canvasH": 600,
        "isActive": true,
        "createdAt": "2025-02-10T12:00:00Z",
        "updatedAt": "2025-02-11T08:30:00Z",
        "items": [
            {"id": "t1", "type": "table", "x": 1.5, "y": 2.5, "w": 60, "h": 60,
             "shape": "round", "tableSeats": 6, "metadata": {"price": 40}},
            {"id": "s1", "type": "seat", "x": 0, "y": 0, "w": 20, "h": 20,
             "rowLabel": "A", "seatNumber": 1}
        ],
        "categories": [
            {"id": "c1", "name": "Standard", "color": "#00ff00", "price": 25}
        ]
    });

    let layout: VenueLayout = serde_json::from_value(doc).unwrap();
    assert_eq!(layout.id, "651f0c");
    assert!(layout.is_active);
    assert_eq!(layout.items.len(), 2);

    let table = &layout.items[0];
    assert_eq!(table.item_type, ItemType::Table);
    assert_eq!(table.shape, Some(TableShape::Round));
    assert_eq!(table.table_seats, Some(6));
    assert_eq!(table.metadata_price(), Some(40.0));
    assert_eq!(table.rotation, 0.0);

    // appliesTo absent on a legacy document defaults to seat in filtering.
    assert_eq!(layout.categories[0].applies_to, None);
    assert_eq!(layout.categories[0].kind(), seatkit_core::CategoryKind::Seat);
}

#[test]
fn unsaved_layout_keeps_empty_id_off_the_wire() {
    let layout = VenueLayout::new("Draft");
    let doc: Value = serde_json::to_value(&layout).unwrap();
    assert!(doc.get("_id").is_none());

    let back: VenueLayout = serde_json::from_value(doc).unwrap();
    assert!(back.id.is_empty());
}

#[test]
fn tolerates_minimal_document() {
    let layout: VenueLayout = serde_json::from_value(json!({"name": "Bare"})).unwrap();
    assert_eq!(layout.canvas_w, 1200);
    assert_eq!(layout.canvas_h, 800);
    assert!(layout.items.is_empty());
    assert!(layout.categories.is_empty());
    assert!(!layout.is_active);
}

#[test]
fn round_trips_through_json() {
    let mut layout = VenueLayout::new("Round Trip");
    let mut booth = LayoutItem::new(ItemType::Booth, 5.0, 5.0, 80.0, 50.0);
    booth.label = Some("Booth 1".to_string());
    layout.items.push(booth);

    let text = serde_json::to_string(&layout).unwrap();
    let back: VenueLayout = serde_json::from_str(&text).unwrap();
    assert_eq!(back, layout);
}
