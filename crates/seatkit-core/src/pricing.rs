//! Effective-price resolution.
//!
//! The one place the override-then-fallback pricing rule lives. The editing
//! engine applies it when summarizing a layout before save and the viewer
//! applies it again when rendering tooltips; sharing the function keeps the
//! two from drifting.
//!
//! Rules:
//! - Tables and booths: a positive `metadata.price` wins over the category
//!   price; a positive category price is the fallback; otherwise the price
//!   is unset (`None`, displayed as "Not set" — a valid state, not an error).
//! - Seats: priced exclusively via their category; no category means `0`.
//! - All other types are never priced.

use std::collections::HashMap;

use crate::model::{ItemType, LayoutItem, SeatCategory};

/// Resolves the effective price of an item against a category lookup map.
///
/// Dangling `categoryId` references behave as "no category".
pub fn effective_price(
    item: &LayoutItem,
    categories: &HashMap<&str, &SeatCategory>,
) -> Option<f64> {
    let category = item
        .category_id
        .as_deref()
        .and_then(|id| categories.get(id).copied());

    match item.item_type {
        ItemType::Table | ItemType::Booth => {
            if let Some(price) = item.metadata_price() {
                return Some(price);
            }
            category.map(|c| c.price).filter(|p| *p > 0.0)
        }
        ItemType::Seat => Some(category.map(|c| c.price).unwrap_or(0.0)),
        _ => None,
    }
}

/// Formats a resolved price for display, using "Not set" for `None`.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{p:.2}"),
        None => "Not set".to_string(),
    }
}
