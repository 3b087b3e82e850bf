//! Category CRUD for the layout editor.
//!
//! Deleting a category is destructive to pricing display but never to items:
//! dependent items are detached, not cascaded. The confirmation prompt for
//! that is a UI-boundary contract, the engine only reports how many items
//! were affected.

use tracing::{debug, info};

use seatkit_core::{CategoryKind, LayoutError, Result, SeatCategory};

use super::LayoutEditor;

/// Partial update for a [`SeatCategory`].
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub price: Option<f64>,
    pub applies_to: Option<CategoryKind>,
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(LayoutError::EmptyCategoryName);
    }
    Ok(())
}

fn validate_color(color: &str) -> Result<()> {
    if color.trim().is_empty() {
        return Err(LayoutError::MissingCategoryColor);
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(LayoutError::InvalidPrice { price });
    }
    Ok(())
}

impl LayoutEditor {
    /// Adds a category with a fresh id. Name must be non-empty, color
    /// present, price non-negative; a failed validation applies nothing.
    pub fn add_category(&mut self, name: &str, color: &str, price: f64) -> Result<String> {
        validate_name(name)?;
        validate_color(color)?;
        validate_price(price)?;
        let category = SeatCategory::new(name.trim(), color, price);
        let id = category.id.clone();
        self.layout.categories.push(category);
        Ok(id)
    }

    /// Merges a patch into a category, with the same validation as
    /// [`add_category`](Self::add_category). Unknown ids are a silent no-op.
    pub fn update_category(&mut self, id: &str, patch: CategoryPatch) -> Result<()> {
        if let Some(name) = &patch.name {
            validate_name(name)?;
        }
        if let Some(color) = &patch.color {
            validate_color(color)?;
        }
        if let Some(price) = patch.price {
            validate_price(price)?;
        }
        let Some(category) = self.layout.category_mut(id) else {
            debug!(category_id = id, "update_category: id not found, ignoring");
            return Ok(());
        };
        if let Some(name) = patch.name {
            category.name = name.trim().to_string();
        }
        if let Some(color) = patch.color {
            category.color = color;
        }
        if let Some(price) = patch.price {
            category.price = price;
        }
        if let Some(applies_to) = patch.applies_to {
            category.applies_to = Some(applies_to);
        }
        Ok(())
    }

    /// Removes a category and detaches it from every item referencing it.
    /// Items are never deleted. Returns the number of detached items so the
    /// caller can word its confirmation message; unknown ids detach nothing.
    pub fn remove_category(&mut self, id: &str) -> usize {
        let before = self.layout.categories.len();
        self.layout.categories.retain(|c| c.id != id);
        if self.layout.categories.len() == before {
            debug!(category_id = id, "remove_category: id not found, ignoring");
            return 0;
        }
        let mut detached = 0;
        for item in &mut self.layout.items {
            if item.category_id.as_deref() == Some(id) {
                item.category_id = None;
                detached += 1;
            }
        }
        info!(category_id = id, detached, "removed category");
        detached
    }

    /// Categories offered to an item type in selection UI. Legacy categories
    /// without `appliesTo` count as seat categories.
    pub fn categories_for(&self, kind: CategoryKind) -> Vec<&SeatCategory> {
        self.layout
            .categories
            .iter()
            .filter(|c| c.kind() == kind)
            .collect()
    }
}
