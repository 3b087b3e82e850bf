//! Bulk operations panel: the control surface through which a user issues
//! bulk transforms over the current selection.
//!
//! The panel holds the raw input fields (custom angle, custom factor, chosen
//! category) and applies them to the editor only on explicit confirmation.
//! Validation failures block the operation and apply nothing. Deleting the
//! selection needs no extra confirmation at this layer — that is the
//! caller's responsibility — but always clears the selection afterward.

use std::collections::BTreeMap;

use seatkit_core::{ItemType, LayoutError, Result, VenueLayout};

use crate::editor::LayoutEditor;
use crate::selection::Selection;

/// Preset rotation step for the two fixed buttons, degrees.
pub const ROTATE_STEP_DEGREES: f64 = 90.0;
/// Preset scale-down factor (80%).
pub const SCALE_DOWN_FACTOR: f64 = 0.8;
/// Preset scale-up factor (120%).
pub const SCALE_UP_FACTOR: f64 = 1.2;
/// Recommended bounds for the custom scale input. A UI-level guard only;
/// the engine accepts any positive factor.
pub const RECOMMENDED_SCALE_RANGE: (f64, f64) = (0.1, 3.0);

/// State of the bulk operations panel.
#[derive(Debug, Clone, Default)]
pub struct BulkOpsPanel {
    /// Raw text of the arbitrary-angle input.
    pub custom_angle_input: String,
    /// Raw text of the arbitrary-factor input.
    pub custom_scale_input: String,
    /// Target category for bulk assignment, chosen from a dropdown.
    pub chosen_category: Option<String>,
}

impl BulkOpsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live selection count partitioned by type, for the panel header.
    pub fn selection_counts(
        &self,
        selection: &Selection,
        layout: &VenueLayout,
    ) -> BTreeMap<ItemType, usize> {
        selection.counts_by_type(layout)
    }

    /// The +90 degree preset button.
    pub fn rotate_cw(&self, editor: &mut LayoutEditor, selection: &Selection) {
        editor.rotate_items(selection.ids(), ROTATE_STEP_DEGREES);
    }

    /// The -90 degree preset button.
    pub fn rotate_ccw(&self, editor: &mut LayoutEditor, selection: &Selection) {
        editor.rotate_items(selection.ids(), -ROTATE_STEP_DEGREES);
    }

    /// Applies the custom angle input on explicit confirmation. Any finite
    /// angle is accepted, including negative ones.
    pub fn apply_custom_rotation(
        &self,
        editor: &mut LayoutEditor,
        selection: &Selection,
    ) -> Result<()> {
        let angle = self.parse_number(&self.custom_angle_input)?;
        editor.rotate_items(selection.ids(), angle);
        Ok(())
    }

    /// The 80% preset button.
    pub fn scale_down(&self, editor: &mut LayoutEditor, selection: &Selection) {
        // Preset factors are always valid.
        let _ = editor.scale_items(selection.ids(), SCALE_DOWN_FACTOR);
    }

    /// The 120% preset button.
    pub fn scale_up(&self, editor: &mut LayoutEditor, selection: &Selection) {
        let _ = editor.scale_items(selection.ids(), SCALE_UP_FACTOR);
    }

    /// Applies the custom factor input on explicit confirmation. The factor
    /// must parse and be positive.
    pub fn apply_custom_scale(
        &self,
        editor: &mut LayoutEditor,
        selection: &Selection,
    ) -> Result<()> {
        let factor = self.parse_number(&self.custom_scale_input)?;
        editor.scale_items(selection.ids(), factor)
    }

    /// Whether the category-assign button is enabled.
    pub fn can_apply_category(&self) -> bool {
        self.chosen_category.is_some()
    }

    /// Assigns the chosen category to the seats in the selection. Non-seat
    /// items are unaffected. Does nothing until a category is chosen.
    /// Returns how many seats were assigned.
    pub fn apply_category(&self, editor: &mut LayoutEditor, selection: &Selection) -> usize {
        match &self.chosen_category {
            Some(category_id) => editor.assign_category(selection.ids(), category_id),
            None => 0,
        }
    }

    /// Deletes the entire selection and clears it. Returns the number of
    /// items removed.
    pub fn delete_selection(&self, editor: &mut LayoutEditor, selection: &mut Selection) -> usize {
        let removed = editor.remove_items(selection.ids());
        selection.clear();
        removed
    }

    fn parse_number(&self, input: &str) -> Result<f64> {
        input
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| LayoutError::InvalidNumericInput {
                input: input.to_string(),
            })
    }
}
