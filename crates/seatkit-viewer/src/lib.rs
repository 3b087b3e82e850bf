//! # SeatKit Viewer
//!
//! Pure, read-only projection of a [`VenueLayout`](seatkit_core::VenueLayout)
//! into SVG. Nothing in this crate mutates a layout.
//!
//! - **svg**: the seat-map projection itself (rotation transforms, category
//!   fills, tooltips via the shared price resolver)
//! - **legend**: categories actually in use, partitioned seat vs non-seat
//! - **decor**: overlay of fixed per-event markers, fail-silent by design

pub mod decor;
pub mod legend;
pub mod svg;

pub use decor::render_decor_overlay;
pub use legend::{build_legend, Legend};
pub use svg::{default_fill, render_layout, render_layout_with_decor};
