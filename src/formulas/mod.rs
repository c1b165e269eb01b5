//! Formula engine
//!
//! Produces `RecipeMetrics` from normalized inputs. Recipe-level values
//! (batch size, mash temperature) are normalized once at the top of a
//! calculation; per-ingredient amounts are converted at their point of
//! use. Malformed numeric ingredient fields degrade to zero
//! contribution so live previews always get a complete result.

pub mod bitterness;
pub mod color;
pub mod gravity;

pub use bitterness::{bigness_factor, boil_time_factor, ibu, utilization};
pub use color::{mcu, srm, srm_from_mcu};
pub use gravity::{
    abv, blended_attenuation, final_gravity, original_gravity, ABV_FACTOR, DEFAULT_ATTENUATION,
};

use crate::error::{BrewError, BrewResult};
use crate::models::{CalculationOutcome, Ingredient, Recipe, RecipeMetrics};
use crate::units;

/// Tolerance when checking fg <= og
const GRAVITY_EPSILON: f64 = 1e-9;

/// Recipe-level values after the single normalization pass
#[derive(Debug, Clone)]
pub struct NormalizedBatch {
    pub batch_gal: f64,
    pub batch_liters: f64,
    pub efficiency: f64,
    pub mash_temp_f: Option<f64>,
}

impl NormalizedBatch {
    /// Normalize a recipe's process parameters to the canonical system
    /// (US gallons / Fahrenheit; liters kept alongside for the metric
    /// IBU formula). Every formula divides by batch size, so a
    /// non-positive batch is fatal.
    pub fn from_recipe(recipe: &Recipe) -> BrewResult<Self> {
        if recipe.batch_size <= 0.0 {
            return Err(BrewError::Validation(format!(
                "batch size must be positive, got {}",
                recipe.batch_size
            )));
        }

        let batch_gal = units::to_gallons(recipe.batch_size, &recipe.batch_size_unit)?;
        let batch_liters = units::to_liters(recipe.batch_size, &recipe.batch_size_unit)?;

        let mash_temp_f = match (recipe.mash_temperature, recipe.mash_temp_unit.as_deref()) {
            (Some(temp), Some(unit)) => Some(units::to_fahrenheit(temp, unit)?),
            // No unit given: already Fahrenheit by convention
            (Some(temp), None) => Some(temp),
            (None, _) => None,
        };

        Ok(Self {
            batch_gal,
            batch_liters,
            efficiency: recipe.efficiency,
            mash_temp_f,
        })
    }
}

/// Run the full formula pipeline for one recipe
///
/// `attenuation` is the recipe-level best estimate (see the analytics
/// module); callers without yeast data pass `DEFAULT_ATTENUATION`.
/// A physically inconsistent result (fg > og) is replaced with
/// `RecipeMetrics::safe_default` and flagged, never propagated.
pub fn calculate(
    recipe: &Recipe,
    ingredients: &[Ingredient],
    attenuation: f64,
) -> BrewResult<CalculationOutcome> {
    let batch = NormalizedBatch::from_recipe(recipe)?;

    let og = gravity::original_gravity(ingredients, batch.efficiency, batch.batch_gal)?;
    let fg = gravity::final_gravity(og, attenuation);

    if fg > og + GRAVITY_EPSILON {
        tracing::warn!(og, fg, attenuation, "computed FG above OG, substituting safe defaults");
        return Ok(CalculationOutcome {
            metrics: RecipeMetrics::safe_default(),
            fallback: true,
        });
    }

    let metrics = RecipeMetrics {
        og,
        fg,
        abv: gravity::abv(og, fg),
        ibu: bitterness::ibu(ingredients, og, batch.batch_liters)?,
        srm: color::srm(ingredients, batch.batch_gal)?,
    };

    Ok(CalculationOutcome {
        metrics,
        fallback: false,
    })
}
