//! # SeatKit Core
//!
//! Core types and shared logic for SeatKit.
//! Provides the venue layout data model, the wire-exact document contract
//! exchanged with the external layout store, and the pure algorithms shared
//! by the editing engine and the viewer:
//!
//! - **Model**: [`VenueLayout`], [`LayoutItem`], [`SeatCategory`], decor items
//! - **Geometry**: points, rotation about an arbitrary center
//! - **Pricing**: effective-price resolution (override-then-fallback)
//! - **Numbering**: row labels, next-row suggestion, gap detection
//!
//! The pricing and numbering modules are deliberately free of editor state so
//! that the editing engine and the read-only viewer resolve prices and labels
//! through the same code path.

pub mod error;
pub mod geometry;
pub mod model;
pub mod numbering;
pub mod pricing;

pub use error::{LayoutError, Result};
pub use geometry::{normalize_angle, rotate_point, Point};
pub use model::{
    normalize_feed, CategoryKind, DecorFeedEntry, DecorItem, ItemType, LayoutItem, SeatCategory,
    TableShape, VenueLayout, DEFAULT_CANVAS_H, DEFAULT_CANVAS_W,
};
pub use numbering::{next_available_row, next_seat, row_gaps, row_label, NextSeat};
pub use pricing::{effective_price, format_price};
