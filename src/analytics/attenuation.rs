//! Yeast attenuation analytics
//!
//! Blends a yeast's manufacturer attenuation spec with observed
//! fermentation outcomes. The observed average only wins when enough
//! consistent data backs it; otherwise the spec value stands.

use serde::{Deserialize, Serialize};

use crate::models::FermentationRecord;

/// Sample count at which the count factor of confidence saturates
pub const MIN_SAMPLES: f64 = 5.0;
/// Standard deviation (percentage points) at which confidence reaches zero
pub const MAX_SPREAD: f64 = 15.0;
/// Confidence at or above which the observed average overrides the spec
pub const CONFIDENCE_THRESHOLD: f64 = 0.7;

/// Derived attenuation statistics for one yeast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttenuationAnalytics {
    /// Manufacturer-specified attenuation, percent
    pub theoretical_attenuation: f64,
    /// Mean observed apparent attenuation, percent
    pub actual_attenuation_average: f64,
    /// Number of usable fermentation records
    pub actual_attenuation_count: usize,
    /// Sample standard deviation of observed attenuation
    pub std_deviation: f64,
    /// 0..=1; 0 with no samples, saturates at 1
    pub confidence: f64,
}

impl AttenuationAnalytics {
    /// The attenuation value the formula engine should use
    pub fn best_estimate(&self) -> f64 {
        if self.confidence >= CONFIDENCE_THRESHOLD {
            self.actual_attenuation_average
        } else {
            self.theoretical_attenuation
        }
    }
}

/// Apparent attenuation of one fermentation, percent
///
/// `None` for records where the value is undefined (og <= 1) or the
/// gravities are physically inconsistent (fg > og).
pub fn apparent_attenuation(og: f64, fg: f64) -> Option<f64> {
    if og <= 1.0 || fg > og {
        return None;
    }
    Some((og - fg) / (og - 1.0) * 100.0)
}

/// Compute analytics for one yeast from its fermentation history
///
/// Unusable records are skipped and do not count toward the sample
/// count. Zero usable records yields confidence exactly 0, so the
/// estimate silently falls back to the theoretical value.
pub fn analyze(theoretical: f64, records: &[FermentationRecord]) -> AttenuationAnalytics {
    let samples: Vec<f64> = records
        .iter()
        .filter_map(|r| {
            let value = apparent_attenuation(r.og, r.fg);
            if value.is_none() {
                tracing::warn!(
                    ingredient_id = r.ingredient_id,
                    og = r.og,
                    fg = r.fg,
                    "skipping inconsistent fermentation record"
                );
            }
            value
        })
        .collect();

    let count = samples.len();
    if count == 0 {
        return AttenuationAnalytics {
            theoretical_attenuation: theoretical,
            actual_attenuation_average: 0.0,
            actual_attenuation_count: 0,
            std_deviation: 0.0,
            confidence: 0.0,
        };
    }

    let mean = samples.iter().sum::<f64>() / count as f64;
    let std_deviation = if count > 1 {
        let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>()
            / (count as f64 - 1.0);
        variance.sqrt()
    } else {
        0.0
    };

    AttenuationAnalytics {
        theoretical_attenuation: theoretical,
        actual_attenuation_average: mean,
        actual_attenuation_count: count,
        std_deviation,
        confidence: confidence(count, std_deviation),
    }
}

/// Confidence in the observed average
///
/// Increases with sample count, decreases with spread, clamped to
/// [0, 1]. Exactly 0 for zero samples.
pub fn confidence(count: usize, std_deviation: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let count_factor = (count as f64 / MIN_SAMPLES).min(1.0);
    let spread_factor = 1.0 - (std_deviation / MAX_SPREAD).min(1.0);
    (count_factor * spread_factor).clamp(0.0, 1.0)
}
