use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::SeatCategory;
use super::item::LayoutItem;

/// Default canvas width in canvas units.
pub const DEFAULT_CANVAS_W: u32 = 1200;
/// Default canvas height in canvas units.
pub const DEFAULT_CANVAS_H: u32 = 800;

/// A venue floor plan: a canvas, positioned items, and pricing categories.
///
/// This is the whole-document snapshot persisted to the external layout
/// store; there is no partial or delta persistence. Saves are last-write-wins
/// with no optimistic-concurrency token.
///
/// A `categoryId` on an item that no longer resolves to a category is
/// tolerated everywhere and treated as "no category".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueLayout {
    /// Storage-assigned identifier. Empty until first persisted, and kept
    /// off the wire until then so the store never sees a bogus empty id.
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(
        rename = "venueOwnerId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub venue_owner_id: Option<String>,
    #[serde(rename = "eventId", default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// Ordered: insertion order is display z-order.
    #[serde(default)]
    pub items: Vec<LayoutItem>,
    /// Unique by id.
    #[serde(default)]
    pub categories: Vec<SeatCategory>,
    #[serde(rename = "canvasW", default = "default_canvas_w")]
    pub canvas_w: u32,
    #[serde(rename = "canvasH", default = "default_canvas_h")]
    pub canvas_h: u32,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(rename = "createdAt", default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_canvas_w() -> u32 {
    DEFAULT_CANVAS_W
}

fn default_canvas_h() -> u32 {
    DEFAULT_CANVAS_H
}

impl VenueLayout {
    /// Creates an empty layout with the default 1200x800 canvas.
    pub fn new(name: &str) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            name: name.to_string(),
            venue_owner_id: None,
            event_id: None,
            items: Vec::new(),
            categories: Vec::new(),
            canvas_w: DEFAULT_CANVAS_W,
            canvas_h: DEFAULT_CANVAS_H,
            is_active: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn item(&self, id: &str) -> Option<&LayoutItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn item_mut(&mut self, id: &str) -> Option<&mut LayoutItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&SeatCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_mut(&mut self, id: &str) -> Option<&mut SeatCategory> {
        self.categories.iter_mut().find(|c| c.id == id)
    }

    /// Category lookup map for price resolution and rendering.
    pub fn categories_by_id(&self) -> HashMap<&str, &SeatCategory> {
        self.categories.iter().map(|c| (c.id.as_str(), c)).collect()
    }

    /// The category an item resolves to, tolerating dangling references.
    pub fn category_of(&self, item: &LayoutItem) -> Option<&SeatCategory> {
        item.category_id
            .as_deref()
            .and_then(|id| self.category(id))
    }

    /// Seats belonging to the given row label.
    pub fn seats_in_row<'a>(&'a self, row: &'a str) -> impl Iterator<Item = &'a LayoutItem> {
        self.items
            .iter()
            .filter(move |i| i.is_seat() && i.row_label.as_deref() == Some(row))
    }

    /// Row labels currently used by seats, in first-seen order.
    pub fn used_row_labels(&self) -> Vec<String> {
        let mut rows: Vec<String> = Vec::new();
        for item in self.items.iter().filter(|i| i.is_seat()) {
            if let Some(row) = &item.row_label {
                if !rows.iter().any(|r| r == row) {
                    rows.push(row.clone());
                }
            }
        }
        rows
    }
}
