//! Layout editor: owns the in-memory layout for an editing session.
//!
//! This module is split into submodules for better organization:
//! - `items`: item CRUD and field patches
//! - `categories`: category CRUD with detach-on-delete
//! - `transforms`: bulk rotate, scale, category assignment, delete
//!
//! The editor does not enforce authorization: whether a venue owner may edit
//! a layout is an external decision made before an editor is constructed.

mod categories;
mod items;
mod transforms;

pub use items::ItemPatch;
pub use categories::CategoryPatch;

use chrono::Utc;
use seatkit_core::numbering::{self, NextSeat};
use seatkit_core::pricing;
use seatkit_core::{LayoutError, Result, VenueLayout};

/// In-memory editing engine for a single [`VenueLayout`].
///
/// All mutations are synchronous and happen one user action at a time; the
/// layout is exclusively owned by the single editor instance for the session.
#[derive(Debug, Clone)]
pub struct LayoutEditor {
    layout: VenueLayout,
}

impl LayoutEditor {
    /// Creates an editor over a fresh, empty layout.
    pub fn new(name: &str) -> Self {
        Self {
            layout: VenueLayout::new(name),
        }
    }

    /// Creates an editor over an existing (fetched) layout.
    pub fn from_layout(layout: VenueLayout) -> Self {
        Self { layout }
    }

    /// Read access to the layout being edited.
    pub fn layout(&self) -> &VenueLayout {
        &self.layout
    }

    /// Consumes the editor, returning the layout.
    pub fn into_layout(self) -> VenueLayout {
        self.layout
    }

    /// Whole-document snapshot for persistence, with `updatedAt` refreshed.
    /// Saves are last-write-wins; there is no partial persistence.
    pub fn snapshot(&mut self) -> VenueLayout {
        self.layout.updated_at = Utc::now();
        self.layout.clone()
    }

    /// Resizes the canvas. Both dimensions must be positive.
    pub fn set_canvas_size(&mut self, w: u32, h: u32) -> Result<()> {
        if w == 0 || h == 0 {
            return Err(LayoutError::InvalidDimensions {
                w: w as f64,
                h: h as f64,
            });
        }
        self.layout.canvas_w = w;
        self.layout.canvas_h = h;
        Ok(())
    }

    /// Suggests the next seat to place: first unused row, number 1.
    pub fn next_seat(&self) -> NextSeat {
        numbering::next_seat(&self.layout)
    }

    /// Missing seat numbers in a row, for the overview diagnostics.
    pub fn row_gaps(&self, row: &str) -> Vec<u32> {
        numbering::row_gaps(&self.layout, row)
    }

    /// Resolved price for an item, via the shared resolution rules.
    /// `None` means "Not set" (valid) or an unknown id.
    pub fn effective_price(&self, item_id: &str) -> Option<f64> {
        let item = self.layout.item(item_id)?;
        pricing::effective_price(item, &self.layout.categories_by_id())
    }
}
