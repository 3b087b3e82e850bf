//! Selection state for the editor.
//!
//! A selection is an ephemeral, component-local set of item ids used to
//! scope bulk operations. It is never persisted with the layout.

use std::collections::{BTreeMap, HashSet};

use seatkit_core::{ItemType, VenueLayout};

/// The set of currently selected item ids.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &HashSet<String> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Adds an id to the selection.
    pub fn select(&mut self, id: &str) {
        self.ids.insert(id.to_string());
    }

    pub fn deselect(&mut self, id: &str) {
        self.ids.remove(id);
    }

    /// Toggles an id, the Shift+click behavior.
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Replaces the selection with every item in the layout.
    pub fn select_all(&mut self, layout: &VenueLayout) {
        self.ids = layout.items.iter().map(|i| i.id.clone()).collect();
    }

    /// Drops ids that no longer resolve to an item.
    pub fn retain_existing(&mut self, layout: &VenueLayout) {
        self.ids.retain(|id| layout.item(id).is_some());
    }

    /// Live selection count partitioned by item type, for the bulk panel
    /// header. Stale ids are ignored.
    pub fn counts_by_type(&self, layout: &VenueLayout) -> BTreeMap<ItemType, usize> {
        let mut counts = BTreeMap::new();
        for item in layout.items.iter().filter(|i| self.ids.contains(&i.id)) {
            *counts.entry(item.item_type).or_insert(0) += 1;
        }
        counts
    }
}
