//! Calculated recipe metrics
//!
//! The result value produced by every calculation run.

use serde::{Deserialize, Serialize};

/// Derived brewing metrics for a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeMetrics {
    /// Original gravity (specific gravity before fermentation)
    pub og: f64,
    /// Final gravity (specific gravity after fermentation)
    pub fg: f64,
    /// Alcohol by volume, percent
    pub abv: f64,
    /// International Bitterness Units
    pub ibu: f64,
    /// Color on the Standard Reference Method scale
    pub srm: f64,
}

impl RecipeMetrics {
    /// Metrics of plain water: gravity 1.000, nothing else.
    pub fn water() -> Self {
        Self {
            og: 1.0,
            fg: 1.0,
            abv: 0.0,
            ibu: 0.0,
            srm: 0.0,
        }
    }

    /// Placeholder metrics substituted when a calculation produces a
    /// physically inconsistent result (fg > og). ABV is 0.040 * 131.25.
    pub fn safe_default() -> Self {
        Self {
            og: 1.050,
            fg: 1.010,
            abv: 5.25,
            ibu: 0.0,
            srm: 0.0,
        }
    }
}

/// A finished calculation: the metrics plus a flag telling the caller
/// whether the safe default was substituted for an inconsistent result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutcome {
    pub metrics: RecipeMetrics,
    /// True when `safe_default` metrics were substituted; the caller
    /// should surface this to the user rather than trust the numbers.
    pub fallback: bool,
}
