//! Unit conversion module
//!
//! Pure mass/volume/temperature conversion; everything else in the
//! crate depends on it.

pub mod converter;
pub mod units;

pub use converter::{convert, to_fahrenheit, to_gallons, to_grams, to_liters, to_pounds};
pub use units::{categorize_unit, grams_per_unit, ml_per_unit, temp_scale, TempScale, UnitCategory};
