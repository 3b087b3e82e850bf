//! Per-event decor feed: fixed, non-bookable markers (stage, screens,
//! entry/exit, washroom) overlaid on a seat map.
//!
//! The external feed has been observed in two shapes, flattened
//! (`x`/`y`/`w`/`h`/`label`) and nested (`pos`/`size`/`lbl`). Both are
//! accepted by [`DecorFeedEntry`] and normalized exactly once at the
//! ingestion boundary; everything downstream only sees [`DecorItem`].
//! Entries that cannot be normalized are dropped, never surfaced as errors:
//! the overlay is cosmetic and fails silent by design.

use serde::Deserialize;
use tracing::debug;

use super::item::ItemType;

/// A normalized decor marker with a flattened position and size.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorItem {
    pub id: String,
    pub item_type: ItemType,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Vec2 {
    x: f64,
    y: f64,
}

/// One raw entry of the decor feed, tolerant of both observed shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct DecorFeedEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "type", default)]
    item_type: Option<ItemType>,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
    #[serde(default)]
    w: Option<f64>,
    #[serde(default)]
    h: Option<f64>,
    #[serde(default)]
    pos: Option<Vec2>,
    #[serde(default)]
    size: Option<Vec2>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    lbl: Option<String>,
}

impl DecorFeedEntry {
    /// Flattens this entry, preferring the flat fields where both shapes are
    /// present. Returns `None` when id, type, position, or size is missing.
    pub fn normalize(self) -> Option<DecorItem> {
        let id = self.id?;
        let item_type = self.item_type?;
        let x = self.x.or(self.pos.map(|p| p.x))?;
        let y = self.y.or(self.pos.map(|p| p.y))?;
        let w = self.w.or(self.size.map(|s| s.x))?;
        let h = self.h.or(self.size.map(|s| s.y))?;
        Some(DecorItem {
            id,
            item_type,
            x,
            y,
            w,
            h,
            label: self.label.or(self.lbl),
        })
    }
}

/// Normalizes a whole feed, silently dropping malformed entries.
pub fn normalize_feed(entries: Vec<DecorFeedEntry>) -> Vec<DecorItem> {
    let total = entries.len();
    let items: Vec<DecorItem> = entries.into_iter().filter_map(DecorFeedEntry::normalize).collect();
    if items.len() < total {
        debug!(
            dropped = total - items.len(),
            "dropped malformed decor feed entries"
        );
    }
    items
}
