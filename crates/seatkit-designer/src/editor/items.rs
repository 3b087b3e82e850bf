//! Item CRUD for the layout editor.

use std::collections::BTreeMap;

use tracing::debug;
use uuid::Uuid;

use seatkit_core::{normalize_angle, LayoutError, LayoutItem, Result, TableShape};

use super::LayoutEditor;

/// Partial update for a [`LayoutItem`]: `Some` fields are applied, the rest
/// keep their current value.
///
/// `category_id` and `label` are doubly optional so a patch can also clear
/// them (`Some(None)`). Metadata is merged key-by-key rather than replaced.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub w: Option<f64>,
    pub h: Option<f64>,
    pub rotation: Option<f64>,
    pub category_id: Option<Option<String>>,
    pub label: Option<Option<String>>,
    pub shape: Option<TableShape>,
    pub row_label: Option<String>,
    pub seat_number: Option<u32>,
    pub table_seats: Option<u32>,
    pub seat_count: Option<u32>,
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
}

impl ItemPatch {
    /// Patch that moves an item to a new top-left position.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Patch that sets the `metadata.price` override (tables/booths).
    pub fn metadata_price(price: f64) -> Self {
        let mut metadata = BTreeMap::new();
        metadata.insert("price".to_string(), serde_json::json!(price));
        Self {
            metadata: Some(metadata),
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<()> {
        if let Some(w) = self.w {
            if !w.is_finite() || w <= 0.0 {
                return Err(LayoutError::InvalidDimensions {
                    w,
                    h: self.h.unwrap_or(0.0),
                });
            }
        }
        if let Some(h) = self.h {
            if !h.is_finite() || h <= 0.0 {
                return Err(LayoutError::InvalidDimensions {
                    w: self.w.unwrap_or(0.0),
                    h,
                });
            }
        }
        Ok(())
    }
}

impl LayoutEditor {
    /// Adds an item, issuing a fresh id when the caller left it empty.
    /// Requires positive dimensions; there is no other geometric validation,
    /// items may overlap or sit outside the canvas.
    pub fn add_item(&mut self, mut item: LayoutItem) -> Result<String> {
        if !item.w.is_finite() || !item.h.is_finite() || item.w <= 0.0 || item.h <= 0.0 {
            return Err(LayoutError::InvalidDimensions {
                w: item.w,
                h: item.h,
            });
        }
        if item.id.is_empty() {
            item.id = Uuid::new_v4().to_string();
        }
        item.rotation = normalize_angle(item.rotation);
        let id = item.id.clone();
        self.layout.items.push(item);
        Ok(id)
    }

    /// Merges a patch into an item. Unknown ids are a silent no-op: ids are
    /// engine-issued, so a stale id means the item was already removed.
    pub fn update_item(&mut self, id: &str, patch: ItemPatch) -> Result<()> {
        patch.validate()?;
        let Some(item) = self.layout.item_mut(id) else {
            debug!(item_id = id, "update_item: id not found, ignoring");
            return Ok(());
        };
        if let Some(x) = patch.x {
            item.x = x;
        }
        if let Some(y) = patch.y {
            item.y = y;
        }
        if let Some(w) = patch.w {
            item.w = w;
        }
        if let Some(h) = patch.h {
            item.h = h;
        }
        if let Some(rotation) = patch.rotation {
            item.rotation = normalize_angle(rotation);
        }
        if let Some(category_id) = patch.category_id {
            item.category_id = category_id;
        }
        if let Some(label) = patch.label {
            item.label = label;
        }
        if let Some(shape) = patch.shape {
            item.shape = Some(shape);
        }
        if let Some(row_label) = patch.row_label {
            item.row_label = Some(row_label);
        }
        if let Some(seat_number) = patch.seat_number {
            item.seat_number = Some(seat_number);
        }
        if let Some(table_seats) = patch.table_seats {
            item.table_seats = Some(table_seats);
        }
        if let Some(seat_count) = patch.seat_count {
            item.seat_count = Some(seat_count);
        }
        if let Some(metadata) = patch.metadata {
            item.metadata.extend(metadata);
        }
        Ok(())
    }

    /// Removes an item. Returns `false` (not an error) for unknown ids.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.layout.items.len();
        self.layout.items.retain(|i| i.id != id);
        self.layout.items.len() < before
    }
}
