//! # SeatKit Designer
//!
//! The layout editing engine: owns the authoritative in-memory
//! [`VenueLayout`](seatkit_core::VenueLayout) during an editing session and
//! exposes the mutation operations that preserve its invariants.
//!
//! ## Core Components
//!
//! - **Editor**: item and category CRUD, field patches, bulk geometric
//!   transforms (rotate, scale, category assignment, delete)
//! - **Selection**: the ephemeral set of selected item ids that scopes bulk
//!   operations (never persisted)
//! - **Curve**: generative arrangement of item centers along a circular arc
//! - **Panel**: the bulk-operations control surface (presets, parsed inputs,
//!   confirmation gating)
//!
//! ## Design
//!
//! The editor is single-user and synchronous: every mutation happens in
//! response to one discrete user action, and saves persist the whole
//! document snapshot (last-write-wins, no concurrency token). Stale ids are
//! tolerated as no-ops; validation failures block an operation entirely and
//! never partially apply.

pub mod curve;
pub mod editor;
pub mod panel;
pub mod selection;

pub use curve::{arrange_along_arc, CurveArrangeParams};
pub use editor::{CategoryPatch, ItemPatch, LayoutEditor};
pub use panel::BulkOpsPanel;
pub use selection::Selection;
