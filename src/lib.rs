//! # SeatKit
//!
//! A venue seat-map layout toolkit: model a venue floor plan as positioned,
//! rotatable items grouped into priced categories, edit it in memory with
//! bulk geometric transforms, render it as SVG, and exchange it with the
//! external layout-storage service.
//!
//! ## Architecture
//!
//! SeatKit is organized as a workspace with multiple crates:
//!
//! 1. **seatkit-core** - layout model, wire contract, pricing, numbering
//! 2. **seatkit-designer** - the editing engine and bulk-operations panel
//! 3. **seatkit-viewer** - read-only SVG projection, legend, decor overlay
//! 4. **seatkit-storage** - layout-store client and cache
//! 5. **seatkit** - this binary, a diagnostic CLI over a layout document

pub use seatkit_core::{
    effective_price, next_available_row, normalize_angle, rotate_point, row_gaps, row_label,
    CategoryKind, DecorItem, ItemType, LayoutError, LayoutItem, Point, SeatCategory, VenueLayout,
};
pub use seatkit_designer::{
    arrange_along_arc, BulkOpsPanel, CategoryPatch, CurveArrangeParams, ItemPatch, LayoutEditor,
    Selection,
};
pub use seatkit_storage::{LayoutCache, LayoutStoreClient, StorageError, StoreConfig};
pub use seatkit_viewer::{build_legend, render_layout, render_layout_with_decor, Legend};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes tracing with an env-filter (`RUST_LOG`), defaulting to `info`.
pub fn init_logging() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}
