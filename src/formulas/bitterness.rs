//! Hop bitterness (IBU) via Tinseth utilization
//!
//! Only boil additions contribute; whirlpool and dry hops are a scope
//! decision and contribute zero (isomerization outside the boil is not
//! modeled).

use crate::error::BrewResult;
use crate::models::{HopUse, Ingredient};
use crate::units;

/// Tinseth bigness factor coefficient
pub const BIGNESS_COEFFICIENT: f64 = 1.65;
/// Tinseth bigness factor exponent base
pub const BIGNESS_BASE: f64 = 0.000125;
/// Tinseth boil-time decay rate, per minute
pub const BOIL_TIME_RATE: f64 = 0.04;
/// Tinseth boil-time factor divisor
pub const BOIL_TIME_DIVISOR: f64 = 4.15;

/// Wort-gravity correction to utilization
pub fn bigness_factor(og: f64) -> f64 {
    BIGNESS_COEFFICIENT * BIGNESS_BASE.powf(og - 1.0)
}

/// Boil-length contribution to utilization
pub fn boil_time_factor(minutes: f64) -> f64 {
    (1.0 - (-BOIL_TIME_RATE * minutes).exp()) / BOIL_TIME_DIVISOR
}

/// Combined Tinseth utilization for one addition
pub fn utilization(og: f64, minutes: f64) -> f64 {
    bigness_factor(og) * boil_time_factor(minutes)
}

/// Total IBU across all boil hop additions
///
/// Per hop: `alpha/100 * grams * utilization * 1000 / batch_liters`.
/// Missing `alpha_acid` or `time` contribute zero.
pub fn ibu(ingredients: &[Ingredient], og: f64, batch_liters: f64) -> BrewResult<f64> {
    let mut total = 0.0;

    for ingredient in ingredients {
        if let Ingredient::Hop(hop) = ingredient {
            if hop.usage != HopUse::Boil {
                continue;
            }
            let grams = units::to_grams(hop.amount, &hop.unit)?;
            let alpha = hop.alpha_acid.unwrap_or(0.0);
            let minutes = hop.time.unwrap_or(0.0);
            let util = utilization(og, minutes);
            total += (alpha / 100.0) * grams * util * 1000.0 / batch_liters;
        }
    }

    Ok(total)
}
