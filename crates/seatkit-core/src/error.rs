//! Error handling for SeatKit.
//!
//! Validation failures are the only hard errors the layout engine produces:
//! operations on stale ids are tolerated as no-ops by design, and a missing
//! price is a valid terminal state ("Not set"), not an error.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Layout model and editing errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Category name must be non-empty
    #[error("Category name must not be empty")]
    EmptyCategoryName,

    /// Category color is required
    #[error("Category color is required")]
    MissingCategoryColor,

    /// Price must be a non-negative finite number
    #[error("Invalid price: {price}")]
    InvalidPrice {
        /// The rejected price value.
        price: f64,
    },

    /// Item dimensions must be positive
    #[error("Invalid item dimensions: {w}x{h}")]
    InvalidDimensions {
        /// The rejected width.
        w: f64,
        /// The rejected height.
        h: f64,
    },

    /// Scale factor must be a positive finite number
    #[error("Invalid scale factor: {factor}")]
    InvalidScaleFactor {
        /// The rejected factor.
        factor: f64,
    },

    /// Numeric input could not be parsed
    #[error("Invalid numeric input: {input:?}")]
    InvalidNumericInput {
        /// The raw input string.
        input: String,
    },

    /// Curve arrangement needs at least two items
    #[error("Curve arrangement requires at least 2 items, got {count}")]
    TooFewItems {
        /// How many items were selected.
        count: usize,
    },
}

/// Result type alias using [`LayoutError`].
pub type Result<T> = std::result::Result<T, LayoutError>;
