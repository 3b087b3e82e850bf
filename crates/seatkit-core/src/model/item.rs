use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Point;

/// Kinds of items that can be placed on a venue floor plan.
///
/// This is a closed set: seats and tables/booths are bookable, the rest are
/// fixed markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Seat,
    Table,
    Booth,
    Stage,
    Screen,
    Entry,
    Exit,
    Washroom,
}

impl ItemType {
    /// Display name used in tooltips and summaries.
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemType::Seat => "Seat",
            ItemType::Table => "Table",
            ItemType::Booth => "Booth",
            ItemType::Stage => "Stage",
            ItemType::Screen => "Screen",
            ItemType::Entry => "Entry",
            ItemType::Exit => "Exit",
            ItemType::Washroom => "Washroom",
        }
    }

    /// Whether items of this type are priced via metadata override before
    /// falling back to their category.
    pub fn has_price_override(&self) -> bool {
        matches!(self, ItemType::Table | ItemType::Booth)
    }
}

/// Table outline variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    Round,
    Rect,
    Half,
    Triangle,
}

/// A single positioned geometric entity in a venue floor plan.
///
/// `x`/`y` is the top-left corner in canvas units; `rotation` is applied
/// around the item's own center. Insertion order in the parent layout is the
/// display z-order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Degrees in `[0, 360)`, about the item center. Omitted on the wire
    /// when zero.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub rotation: f64,
    #[serde(rename = "categoryId", default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Table outline, tables only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<TableShape>,
    /// Row letter, seats only ("A".."Z", "AA"..).
    #[serde(rename = "rowLabel", default, skip_serializing_if = "Option::is_none")]
    pub row_label: Option<String>,
    /// Position within the row, seats only. Unique per row by convention,
    /// duplicates are tolerated and only flagged by gap detection.
    #[serde(rename = "seatNumber", default, skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<u32>,
    /// Informational capacity, tables only.
    #[serde(rename = "tableSeats", default, skip_serializing_if = "Option::is_none")]
    pub table_seats: Option<u32>,
    #[serde(rename = "seatCount", default, skip_serializing_if = "Option::is_none")]
    pub seat_count: Option<u32>,
    /// Open key-value bag. The only contractually meaningful key is `price`
    /// (positive number), the per-item override for tables and booths.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

impl LayoutItem {
    /// Creates an item with a fresh id at the given position and size.
    pub fn new(item_type: ItemType, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            item_type,
            x,
            y,
            w,
            h,
            rotation: 0.0,
            category_id: None,
            label: None,
            shape: None,
            row_label: None,
            seat_number: None,
            table_seats: None,
            seat_count: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Creates a seat with its row label and number set.
    pub fn seat(x: f64, y: f64, w: f64, h: f64, row: &str, number: u32) -> Self {
        let mut item = Self::new(ItemType::Seat, x, y, w, h);
        item.row_label = Some(row.to_string());
        item.seat_number = Some(number);
        item
    }

    /// The item's center point, the pivot for rotation and scaling.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn is_seat(&self) -> bool {
        self.item_type == ItemType::Seat
    }

    /// The `metadata.price` override, if it is a positive finite number.
    pub fn metadata_price(&self) -> Option<f64> {
        self.metadata
            .get("price")
            .and_then(serde_json::Value::as_f64)
            .filter(|p| p.is_finite() && *p > 0.0)
    }

    /// Display label: the explicit label if present, else `rowLabel` +
    /// `seatNumber` for seats, else the type name.
    pub fn display_label(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        if let (Some(row), Some(number)) = (&self.row_label, self.seat_number) {
            return format!("{row}{number}");
        }
        self.item_type.display_name().to_string()
    }
}
