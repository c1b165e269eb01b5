//! Error types for the calculation core.

use thiserror::Error;

/// Calculation error types
#[derive(Debug, Error)]
pub enum BrewError {
    /// Conversion between the two units is not defined (unknown unit or
    /// cross-category, e.g. mass to volume).
    #[error("unsupported unit conversion: {from} -> {to}")]
    UnsupportedUnit { from: String, to: String },

    /// The recipe is invalid in a way no formula can recover from.
    #[error("invalid recipe: {0}")]
    Validation(String),
}

/// Result type for calculation operations
pub type BrewResult<T> = Result<T, BrewError>;
