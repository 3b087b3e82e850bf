//! Venue layout data model.
//!
//! The types in this module reproduce the document contract exchanged with
//! the external layout store field-for-field (`_id`, `canvasW`, camelCase
//! item fields), so a fetched document round-trips byte-compatibly.

mod category;
mod decor;
mod item;
mod layout;

pub use category::{CategoryKind, SeatCategory};
pub use decor::{normalize_feed, DecorFeedEntry, DecorItem};
pub use item::{ItemType, LayoutItem, TableShape};
pub use layout::{VenueLayout, DEFAULT_CANVAS_H, DEFAULT_CANVAS_W};
