//! Unit types and conversion constants
//!
//! Provides types for representing measurement units and standard
//! conversion factors.

// ============================================================================
// Mass Conversion Constants (to grams)
// ============================================================================

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Milliliters per quart (US)
pub const ML_PER_QUART: f64 = 946.353;
/// Milliliters per gallon (US)
pub const ML_PER_GALLON: f64 = 3785.41;

/// Category of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    /// Mass units (g, oz, lb, kg)
    Mass,
    /// Volume units (ml, qt, l, gal)
    Volume,
    /// Temperature units (f, c)
    Temperature,
}

/// Temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempScale {
    Fahrenheit,
    Celsius,
}

// ============================================================================
// Unit Recognition
// ============================================================================

/// Get the conversion factor to grams for a mass unit
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    match trimmed {
        "g" | "gram" | "grams" => Some(1.0),
        "kg" | "kilogram" | "kilograms" => Some(G_PER_KG),
        "oz" | "ounce" | "ounces" => Some(G_PER_OZ),
        "lb" | "lbs" | "pound" | "pounds" => Some(G_PER_LB),
        _ => None,
    }
}

/// Get the conversion factor to milliliters for a volume unit
pub fn ml_per_unit(unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    match trimmed {
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Some(1.0),
        "l" | "liter" | "liters" | "litre" | "litres" => Some(ML_PER_LITER),
        "qt" | "quart" | "quarts" => Some(ML_PER_QUART),
        "gal" | "gallon" | "gallons" => Some(ML_PER_GALLON),
        _ => None,
    }
}

/// Recognize a temperature unit string
pub fn temp_scale(unit: &str) -> Option<TempScale> {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    match trimmed {
        "f" | "°f" | "fahrenheit" => Some(TempScale::Fahrenheit),
        "c" | "°c" | "celsius" => Some(TempScale::Celsius),
        _ => None,
    }
}

/// Determine the category of a unit string, if it is a supported unit
pub fn categorize_unit(unit: &str) -> Option<UnitCategory> {
    if grams_per_unit(unit).is_some() {
        return Some(UnitCategory::Mass);
    }
    if ml_per_unit(unit).is_some() {
        return Some(UnitCategory::Volume);
    }
    if temp_scale(unit).is_some() {
        return Some(UnitCategory::Temperature);
    }
    None
}
