//! Gravity and alcohol formulas
//!
//! OG from grain extract potential, FG from attenuation, and the
//! standard homebrew linear ABV approximation.

use crate::error::BrewResult;
use crate::models::Ingredient;
use crate::units;

/// Attenuation assumed when a recipe has no yeast, percent.
/// Keeps FG estimable for live previews.
pub const DEFAULT_ATTENUATION: f64 = 75.0;

/// Multiplier in the linear ABV approximation `(og - fg) * 131.25`.
/// This is the recognized homebrew-tool standard, a deliberate
/// simplification rather than exact alcoholometry.
pub const ABV_FACTOR: f64 = 131.25;

/// Original gravity from grain contributions
///
/// Per grain: points = amount_lb * potential_ppg * efficiency / 100.
/// Missing `potential` contributes zero. A recipe with no grains is
/// exactly 1.000.
pub fn original_gravity(
    ingredients: &[Ingredient],
    efficiency: f64,
    batch_gal: f64,
) -> BrewResult<f64> {
    let mut points = 0.0;

    for ingredient in ingredients {
        if let Ingredient::Grain(grain) = ingredient {
            let amount_lb = units::to_pounds(grain.amount, &grain.unit)?;
            let potential = grain.potential.unwrap_or(0.0);
            points += amount_lb * potential * (efficiency / 100.0);
        }
    }

    Ok(1.0 + points / batch_gal / 1000.0)
}

/// Final gravity from OG and attenuation percent
pub fn final_gravity(og: f64, attenuation: f64) -> f64 {
    1.0 + (og - 1.0) * (1.0 - attenuation / 100.0)
}

/// Alcohol by volume, percent
pub fn abv(og: f64, fg: f64) -> f64 {
    (og - fg) * ABV_FACTOR
}

/// Blend per-yeast attenuation estimates into one recipe-level value
///
/// Weighted by yeast amount; when every amount is zero the estimates
/// weight equally. No yeast at all falls back to `DEFAULT_ATTENUATION`.
pub fn blended_attenuation(estimates: &[(f64, f64)]) -> f64 {
    if estimates.is_empty() {
        return DEFAULT_ATTENUATION;
    }

    let total_weight: f64 = estimates.iter().map(|(weight, _)| weight).sum();
    if total_weight <= 0.0 {
        let sum: f64 = estimates.iter().map(|(_, est)| est).sum();
        return sum / estimates.len() as f64;
    }

    estimates
        .iter()
        .map(|(weight, est)| weight * est)
        .sum::<f64>()
        / total_weight
}
