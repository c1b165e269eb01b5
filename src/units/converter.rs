//! Unit conversion functions
//!
//! Pure, stateless conversion between supported units. Mass and volume
//! conversions go through a canonical base (grams / milliliters) at full
//! precision, so A -> B -> A round-trips within floating-point noise.
//! Cross-category or unknown conversions fail; correctness cannot be
//! guaranteed by guessing.

use crate::error::{BrewError, BrewResult};

use super::units::{grams_per_unit, ml_per_unit, temp_scale, TempScale};

/// Convert a value between two supported units
pub fn convert(value: f64, from: &str, to: &str) -> BrewResult<f64> {
    if let (Some(from_g), Some(to_g)) = (grams_per_unit(from), grams_per_unit(to)) {
        return Ok(value * from_g / to_g);
    }

    if let (Some(from_ml), Some(to_ml)) = (ml_per_unit(from), ml_per_unit(to)) {
        return Ok(value * from_ml / to_ml);
    }

    if let (Some(from_scale), Some(to_scale)) = (temp_scale(from), temp_scale(to)) {
        return Ok(convert_temperature(value, from_scale, to_scale));
    }

    Err(BrewError::UnsupportedUnit {
        from: from.to_string(),
        to: to.to_string(),
    })
}

fn convert_temperature(value: f64, from: TempScale, to: TempScale) -> f64 {
    match (from, to) {
        (TempScale::Fahrenheit, TempScale::Celsius) => (value - 32.0) * 5.0 / 9.0,
        (TempScale::Celsius, TempScale::Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        _ => value,
    }
}

/// Convert a mass quantity to pounds
pub fn to_pounds(value: f64, unit: &str) -> BrewResult<f64> {
    convert(value, unit, "lb")
}

/// Convert a mass quantity to grams
pub fn to_grams(value: f64, unit: &str) -> BrewResult<f64> {
    convert(value, unit, "g")
}

/// Convert a volume quantity to US gallons
pub fn to_gallons(value: f64, unit: &str) -> BrewResult<f64> {
    convert(value, unit, "gal")
}

/// Convert a volume quantity to liters
pub fn to_liters(value: f64, unit: &str) -> BrewResult<f64> {
    convert(value, unit, "l")
}

/// Convert a temperature to Fahrenheit
pub fn to_fahrenheit(value: f64, unit: &str) -> BrewResult<f64> {
    convert(value, unit, "f")
}
