//! Recipe model
//!
//! The process parameters of a recipe; immutable within a calculation.
//! Ingredient lists travel separately.

use serde::{Deserialize, Serialize};

/// Process parameters for one batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Target batch volume
    pub batch_size: f64,
    /// Unit of `batch_size` (gal, l, qt, ml)
    pub batch_size_unit: String,
    /// Mash efficiency, percent
    pub efficiency: f64,
    /// Boil length in minutes
    pub boil_time: f64,
    /// Mash temperature, if tracked
    pub mash_temperature: Option<f64>,
    /// Unit of `mash_temperature` (f or c); defaults to Fahrenheit
    pub mash_temp_unit: Option<String>,
}

impl Recipe {
    /// A typical 5-gallon batch with default process parameters,
    /// handy as a starting point in tests and previews.
    pub fn five_gallon() -> Self {
        Self {
            batch_size: 5.0,
            batch_size_unit: "gal".to_string(),
            efficiency: 75.0,
            boil_time: 60.0,
            mash_temperature: None,
            mash_temp_unit: None,
        }
    }
}
