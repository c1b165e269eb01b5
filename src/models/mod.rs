//! Data models
//!
//! Plain data structs passed into and out of the calculation core.

mod fermentation;
mod ingredient;
mod metrics;
mod recipe;
mod style;

pub use fermentation::FermentationRecord;
pub use ingredient::{Grain, Hop, HopUse, Ingredient, Other, Yeast};
pub use metrics::{CalculationOutcome, RecipeMetrics};
pub use recipe::Recipe;
pub use style::{MetricMatches, StyleGuide, StyleMatch, StyleRange};
