use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::item::ItemType;

/// The item kinds a category can apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Seat,
    Table,
    Booth,
}

impl CategoryKind {
    /// Whether an item of the given type can carry a category of this kind.
    pub fn matches(&self, item_type: ItemType) -> bool {
        matches!(
            (self, item_type),
            (CategoryKind::Seat, ItemType::Seat)
                | (CategoryKind::Table, ItemType::Table)
                | (CategoryKind::Booth, ItemType::Booth)
        )
    }
}

/// A named, colored, priced grouping applied to layout items.
///
/// Drives default pricing and legend grouping. Deleting a category never
/// deletes items, it only detaches their `categoryId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatCategory {
    pub id: String,
    pub name: String,
    /// CSS-style color used for editor swatches and rendered fill.
    pub color: String,
    /// Non-negative default price for items in this category.
    pub price: f64,
    /// Which item kind this category is offered to. Absent on legacy
    /// documents, where filtering treats it as `Seat` and the legend falls
    /// back to scanning item usage.
    #[serde(rename = "appliesTo", default, skip_serializing_if = "Option::is_none")]
    pub applies_to: Option<CategoryKind>,
}

impl SeatCategory {
    /// Creates a category with a fresh id.
    pub fn new(name: &str, color: &str, price: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            color: color.to_string(),
            price,
            applies_to: None,
        }
    }

    /// The kind this category applies to, defaulting to seats when the
    /// document predates the `appliesTo` field.
    pub fn kind(&self) -> CategoryKind {
        self.applies_to.unwrap_or(CategoryKind::Seat)
    }
}
