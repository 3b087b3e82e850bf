//! In-process cache of fetched layouts.
//!
//! The cache is an explicitly constructed object handed to whatever
//! component needs it; there is no process-wide singleton. Expired entries
//! are collected by `sweep_once`, either called directly or driven by the
//! background sweeper task, which shuts down cleanly through a `watch` stop
//! channel instead of running an uncancelable interval forever.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use seatkit_core::VenueLayout;

struct CacheEntry {
    layout: VenueLayout,
    inserted_at: Instant,
}

/// TTL-based cache of layout documents, keyed by layout id.
pub struct LayoutCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl LayoutCache {
    /// Creates a cache whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Returns a clone of the cached layout, if present and fresh.
    pub fn get(&self, id: &str) -> Option<VenueLayout> {
        let entries = self.entries.read();
        let entry = entries.get(id)?;
        if entry.inserted_at.elapsed() >= self.ttl {
            return None;
        }
        Some(entry.layout.clone())
    }

    /// Inserts or replaces a layout, resetting its TTL.
    pub fn insert(&self, layout: VenueLayout) {
        let mut entries = self.entries.write();
        entries.insert(
            layout.id.clone(),
            CacheEntry {
                layout,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Drops one layout, e.g. after a save or delete invalidates it.
    pub fn invalidate(&self, id: &str) {
        self.entries.write().remove(id);
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Removes expired entries, returning how many were dropped.
    pub fn sweep_once(&self) -> usize {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| entry.inserted_at.elapsed() < self.ttl);
        let dropped = before - entries.len();
        if dropped > 0 {
            debug!(dropped, "swept expired layout cache entries");
        }
        dropped
    }

    /// Spawns the periodic sweeper. It sweeps every `interval` until the
    /// stop channel reports `true` or its sender is dropped.
    pub fn spawn_sweeper(
        self: Arc<Self>,
        interval: Duration,
        mut stop: watch::Receiver<bool>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick fires immediately; skip it.
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        self.sweep_once();
                    }
                    changed = stop.changed() => {
                        if changed.is_err() || *stop.borrow() {
                            info!("layout cache sweeper stopping");
                            break;
                        }
                    }
                }
            }
        })
    }
}
