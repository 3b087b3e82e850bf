//! # SeatKit Storage
//!
//! Async client for the external layout-storage REST API and the in-process
//! layout cache.
//!
//! The storage service owns all persistence; this crate only speaks its
//! document contract. Failure policy follows the editor's rules: a fetch or
//! save that fails surfaces a distinguishable error state for the user to
//! retry manually. Nothing in this crate retries automatically.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;

pub use cache::LayoutCache;
pub use client::{LayoutFilter, LayoutStoreClient, SeatAvailability};
pub use config::StoreConfig;
pub use error::{StorageError, StorageResult};
