//! Brewing metrics calculation core
//!
//! Computes derived brewing metrics (gravity, alcohol, bitterness,
//! color) from a recipe's ingredient list and process parameters,
//! improves yeast-attenuation predictions from observed fermentation
//! outcomes, and scores recipes against style-guide ranges. Pure
//! computation over in-memory values: no I/O, no persistence, no
//! rendering.

pub mod analytics;
pub mod error;
pub mod formulas;
pub mod models;
pub mod orchestrator;
pub mod styles;
pub mod units;

pub use error::{BrewError, BrewResult};
pub use models::{
    CalculationOutcome, FermentationRecord, Ingredient, Recipe, RecipeMetrics, StyleGuide,
    StyleMatch,
};
pub use orchestrator::{Calculator, DebouncedCalculator};
