//! Bulk geometric transforms over a set of selected items.
//!
//! Every transform is applied independently per item, so the effect is
//! deterministic and order-independent. Ids that no longer exist are simply
//! skipped.

use std::collections::HashSet;

use seatkit_core::{normalize_angle, ItemType, LayoutError, Result};

use super::LayoutEditor;

impl LayoutEditor {
    /// Rotates each selected item by `delta_degrees` around its own center.
    /// Negative deltas and arbitrary custom angles are fine; the stored
    /// rotation is normalized into `[0, 360)`.
    ///
    /// Rotating by `d1` then `d2` is equivalent to rotating once by
    /// `d1 + d2` modulo 360.
    pub fn rotate_items(&mut self, ids: &HashSet<String>, delta_degrees: f64) {
        for item in self.layout.items.iter_mut().filter(|i| ids.contains(&i.id)) {
            item.rotation = normalize_angle(item.rotation + delta_degrees);
        }
    }

    /// Scales each selected item's width and height by `factor`, keeping the
    /// item's center fixed.
    ///
    /// The engine only requires `factor > 0`; the 0.1–3.0 range offered by
    /// the bulk panel is a UI-level guard, not an invariant here.
    pub fn scale_items(&mut self, ids: &HashSet<String>, factor: f64) -> Result<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(LayoutError::InvalidScaleFactor { factor });
        }
        for item in self.layout.items.iter_mut().filter(|i| ids.contains(&i.id)) {
            // Keep the center (x + w/2, y + h/2) where it was.
            item.x -= item.w * (factor - 1.0) / 2.0;
            item.y -= item.h * (factor - 1.0) / 2.0;
            item.w *= factor;
            item.h *= factor;
        }
        Ok(())
    }

    /// Assigns a category to every selected item of type seat. Non-seat
    /// items in the selection are left untouched (seats are the only type
    /// priced purely through their category). Returns how many items were
    /// assigned.
    pub fn assign_category(&mut self, ids: &HashSet<String>, category_id: &str) -> usize {
        let mut assigned = 0;
        for item in self.layout.items.iter_mut().filter(|i| ids.contains(&i.id)) {
            if item.item_type == ItemType::Seat {
                item.category_id = Some(category_id.to_string());
                assigned += 1;
            }
        }
        assigned
    }

    /// Removes every selected item. Unknown ids are skipped. Returns the
    /// number of items removed.
    pub fn remove_items(&mut self, ids: &HashSet<String>) -> usize {
        let before = self.layout.items.len();
        self.layout.items.retain(|i| !ids.contains(&i.id));
        before - self.layout.items.len()
    }
}
