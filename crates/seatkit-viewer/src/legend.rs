//! Legend: summarizes the categories actually in use by a layout,
//! partitioned into seat categories and non-seat categories.
//!
//! `appliesTo` on a category is authoritative when present. Legacy documents
//! that predate the field fall back to scanning item usage, in which case a
//! category referenced by both seat and non-seat items appears in both
//! partitions. Either way this is a display convenience, not a data-model
//! property.

use std::collections::HashSet;

use seatkit_core::{CategoryKind, SeatCategory, VenueLayout};

/// Categories in use, partitioned for legend display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Legend {
    pub seat_categories: Vec<SeatCategory>,
    pub non_seat_categories: Vec<SeatCategory>,
}

impl Legend {
    pub fn is_empty(&self) -> bool {
        self.seat_categories.is_empty() && self.non_seat_categories.is_empty()
    }
}

/// Builds the legend for a layout. Categories referenced by no item are
/// omitted; dangling item references contribute nothing.
pub fn build_legend(layout: &VenueLayout) -> Legend {
    let mut used_by_seats: HashSet<&str> = HashSet::new();
    let mut used_by_non_seats: HashSet<&str> = HashSet::new();
    for item in &layout.items {
        if let Some(id) = item.category_id.as_deref() {
            if item.is_seat() {
                used_by_seats.insert(id);
            } else {
                used_by_non_seats.insert(id);
            }
        }
    }

    let mut legend = Legend::default();
    for category in &layout.categories {
        let id = category.id.as_str();
        let used = used_by_seats.contains(id) || used_by_non_seats.contains(id);
        if !used {
            continue;
        }
        match category.applies_to {
            Some(CategoryKind::Seat) => legend.seat_categories.push(category.clone()),
            Some(_) => legend.non_seat_categories.push(category.clone()),
            None => {
                // Legacy document: infer the partition from usage.
                if used_by_seats.contains(id) {
                    legend.seat_categories.push(category.clone());
                }
                if used_by_non_seats.contains(id) {
                    legend.non_seat_categories.push(category.clone());
                }
            }
        }
    }
    legend
}
