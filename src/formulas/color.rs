//! Beer color (SRM) via Morey's equation

use crate::error::BrewResult;
use crate::models::Ingredient;
use crate::units;

/// Morey coefficient
pub const MOREY_COEFFICIENT: f64 = 1.4922;
/// Morey exponent
pub const MOREY_EXPONENT: f64 = 0.6859;

/// Malt color units: sum of amount_lb * lovibond over batch gallons
pub fn mcu(ingredients: &[Ingredient], batch_gal: f64) -> BrewResult<f64> {
    let mut total = 0.0;

    for ingredient in ingredients {
        if let Ingredient::Grain(grain) = ingredient {
            let amount_lb = units::to_pounds(grain.amount, &grain.unit)?;
            total += amount_lb * grain.color.unwrap_or(0.0);
        }
    }

    Ok(total / batch_gal)
}

/// SRM from malt color units
pub fn srm_from_mcu(mcu: f64) -> f64 {
    MOREY_COEFFICIENT * mcu.powf(MOREY_EXPONENT)
}

/// Total SRM for an ingredient list
pub fn srm(ingredients: &[Ingredient], batch_gal: f64) -> BrewResult<f64> {
    Ok(srm_from_mcu(mcu(ingredients, batch_gal)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grain;

    fn grain(amount_lb: f64, lovibond: Option<f64>) -> Ingredient {
        Ingredient::Grain(Grain {
            ingredient_id: 1,
            amount: amount_lb,
            unit: "lb".to_string(),
            potential: Some(36.0),
            color: lovibond,
        })
    }

    #[test]
    fn test_srm_reference_batch() {
        // 10 lb at 2 L in 5 gal -> MCU 4 -> SRM ~3.86
        let value = srm(&[grain(10.0, Some(2.0))], 5.0).unwrap();
        assert!((value - 3.8616).abs() < 1e-3, "got {}", value);
    }

    #[test]
    fn test_srm_non_decreasing_in_color() {
        let mut last = 0.0;
        for lovibond in [1.0, 2.0, 10.0, 40.0, 300.0] {
            let value = srm(&[grain(10.0, Some(lovibond))], 5.0).unwrap();
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_missing_color_contributes_zero() {
        let value = srm(&[grain(10.0, None)], 5.0).unwrap();
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_srm_never_negative() {
        assert!(srm(&[], 5.0).unwrap() >= 0.0);
    }
}
