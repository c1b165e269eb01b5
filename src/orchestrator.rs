//! Calculation orchestrator
//!
//! The public entry point: wires the formula engine, attenuation
//! analytics (with cache), and style matcher together, and provides a
//! debounced async front for interactive editing where the latest
//! request supersedes any still in flight.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::analytics::{analyze, AnalyticsCache, AttenuationAnalytics};
use crate::error::BrewResult;
use crate::formulas::{self, blended_attenuation, DEFAULT_ATTENUATION};
use crate::models::{
    CalculationOutcome, FermentationRecord, Ingredient, Recipe, RecipeMetrics, StyleGuide,
    StyleMatch,
};
use crate::styles;
use crate::units::{self, UnitCategory};

/// Debounce window for interactive recalculation
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Entry point for recipe calculations
///
/// Holds the only shared mutable state in the crate: the analytics
/// cache and the style catalog. Everything else is pure and safe to
/// call concurrently.
pub struct Calculator {
    analytics_cache: AnalyticsCache,
    style_catalog: Vec<StyleGuide>,
}

impl Calculator {
    pub fn new(style_catalog: Vec<StyleGuide>) -> Self {
        Self {
            analytics_cache: AnalyticsCache::default(),
            style_catalog,
        }
    }

    /// Override the analytics cache TTL (deterministic tests)
    pub fn with_cache_ttl(style_catalog: Vec<StyleGuide>, ttl: Duration) -> Self {
        Self {
            analytics_cache: AnalyticsCache::new(ttl),
            style_catalog,
        }
    }

    /// Calculate metrics for a recipe
    ///
    /// When fermentation history is supplied, each yeast's attenuation
    /// becomes the analytics best estimate; multiple yeasts blend by
    /// amount-weighted average.
    pub fn calculate(
        &self,
        recipe: &Recipe,
        ingredients: &[Ingredient],
        history: Option<&[FermentationRecord]>,
    ) -> BrewResult<CalculationOutcome> {
        let attenuation = self.recipe_attenuation(ingredients, history);
        formulas::calculate(recipe, ingredients, attenuation)
    }

    /// Attenuation analytics for one yeast, cached per ingredient id
    pub fn analytics(
        &self,
        ingredient_id: i64,
        theoretical: f64,
        history: &[FermentationRecord],
    ) -> AttenuationAnalytics {
        if let Some(hit) = self.analytics_cache.get(ingredient_id) {
            return hit;
        }

        let records: Vec<FermentationRecord> = history
            .iter()
            .filter(|r| r.ingredient_id == ingredient_id)
            .cloned()
            .collect();
        let computed = analyze(theoretical, &records);
        self.analytics_cache.insert(ingredient_id, computed.clone());
        computed
    }

    /// Drop cached analytics for a yeast; call when new fermentation
    /// data for it is recorded
    pub fn invalidate_analytics(&self, ingredient_id: i64) {
        self.analytics_cache.invalidate(ingredient_id);
    }

    /// Score metrics against the whole style catalog, best first
    pub fn match_styles(&self, metrics: &RecipeMetrics) -> Vec<StyleMatch> {
        styles::match_styles(metrics, &self.style_catalog)
    }

    /// Catalog styles matching well enough to suggest
    pub fn suggest_styles(&self, metrics: &RecipeMetrics) -> Vec<StyleMatch> {
        styles::suggest_styles(metrics, &self.style_catalog)
    }

    fn recipe_attenuation(
        &self,
        ingredients: &[Ingredient],
        history: Option<&[FermentationRecord]>,
    ) -> f64 {
        let estimates: Vec<(f64, f64)> = ingredients
            .iter()
            .filter_map(|ingredient| match ingredient {
                Ingredient::Yeast(yeast) => {
                    let theoretical = yeast.attenuation.unwrap_or(DEFAULT_ATTENUATION);
                    let estimate = match history {
                        Some(records) => self
                            .analytics(yeast.ingredient_id, theoretical, records)
                            .best_estimate(),
                        None => theoretical,
                    };
                    Some((yeast_weight(yeast.amount, &yeast.unit), estimate))
                }
                _ => None,
            })
            .collect();

        blended_attenuation(&estimates)
    }
}

/// Blend weight for one yeast addition, in canonical units
///
/// Mass amounts normalize to grams, volume amounts (liquid yeast) to
/// milliliters, so two equal additions weigh equally whatever unit they
/// were entered in. Count-like units (packs, vials) have no conversion
/// and weigh by their raw amount.
fn yeast_weight(amount: f64, unit: &str) -> f64 {
    match units::categorize_unit(unit) {
        Some(UnitCategory::Mass) => units::to_grams(amount, unit).unwrap_or(amount),
        Some(UnitCategory::Volume) => units::convert(amount, unit, "ml").unwrap_or(amount),
        _ => {
            tracing::debug!(unit, amount, "yeast amount has no canonical unit, weighting as-is");
            amount
        }
    }
}

/// Debounced, superseding wrapper around `Calculator`
///
/// Each request takes a monotonically increasing sequence number and
/// waits out the debounce window; if a newer request arrived meanwhile,
/// the older one is discarded without computing. Results apply
/// latest-wins, so a slow older calculation can never overwrite a
/// newer one.
pub struct DebouncedCalculator {
    calculator: Arc<Calculator>,
    window: Duration,
    next_seq: AtomicU64,
    applied_seq: AtomicU64,
    latest: Mutex<Option<CalculationOutcome>>,
}

impl DebouncedCalculator {
    pub fn new(calculator: Arc<Calculator>) -> Self {
        Self::with_window(calculator, DEFAULT_DEBOUNCE)
    }

    pub fn with_window(calculator: Arc<Calculator>, window: Duration) -> Self {
        Self {
            calculator,
            window,
            next_seq: AtomicU64::new(0),
            applied_seq: AtomicU64::new(0),
            latest: Mutex::new(None),
        }
    }

    /// Request a recalculation
    ///
    /// Returns `None` when this request was superseded by a newer one
    /// inside the debounce window.
    pub async fn request(
        &self,
        recipe: Recipe,
        ingredients: Vec<Ingredient>,
        history: Option<Vec<FermentationRecord>>,
    ) -> Option<BrewResult<CalculationOutcome>> {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.window).await;

        if self.next_seq.load(Ordering::SeqCst) != seq {
            tracing::debug!(seq, "recalculation superseded before it started");
            return None;
        }

        let result = self
            .calculator
            .calculate(&recipe, &ingredients, history.as_deref());

        if let Ok(outcome) = &result {
            let prev = self.applied_seq.fetch_max(seq, Ordering::SeqCst);
            if prev < seq {
                let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
                *latest = Some(outcome.clone());
            } else {
                tracing::debug!(seq, "stale recalculation result discarded");
                return None;
            }
        }

        Some(result)
    }

    /// The most recently applied outcome, if any request has completed
    pub fn latest(&self) -> Option<CalculationOutcome> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::CONFIDENCE_THRESHOLD;
    use crate::error::BrewError;
    use crate::models::{Grain, Hop, HopUse, Yeast};

    fn grain(amount_lb: f64, potential: f64, color: f64) -> Ingredient {
        Ingredient::Grain(Grain {
            ingredient_id: 1,
            amount: amount_lb,
            unit: "lb".to_string(),
            potential: Some(potential),
            color: Some(color),
        })
    }

    fn boil_hop(amount_oz: f64, alpha: f64, minutes: f64) -> Ingredient {
        Ingredient::Hop(Hop {
            ingredient_id: 2,
            amount: amount_oz,
            unit: "oz".to_string(),
            alpha_acid: Some(alpha),
            usage: HopUse::Boil,
            time: Some(minutes),
        })
    }

    fn yeast(ingredient_id: i64, attenuation: f64) -> Ingredient {
        Ingredient::Yeast(Yeast {
            ingredient_id,
            amount: 1.0,
            unit: "g".to_string(),
            attenuation: Some(attenuation),
        })
    }

    /// History entry for a 1.050 wort at the given apparent attenuation
    fn history_record(ingredient_id: i64, attenuation: f64) -> FermentationRecord {
        let fg = 1.0 + 0.050 * (1.0 - attenuation / 100.0);
        FermentationRecord::new(ingredient_id, 1.050, fg)
    }

    #[test]
    fn test_grain_only_batch() {
        let calc = Calculator::new(Vec::new());
        let outcome = calc
            .calculate(&Recipe::five_gallon(), &[grain(10.0, 36.0, 2.0)], None)
            .unwrap();
        let m = &outcome.metrics;
        assert!((m.og - 1.054).abs() < 1e-9);
        assert!((m.fg - 1.0135).abs() < 1e-9); // default 75% attenuation
        assert!((m.abv - 5.3156).abs() < 1e-3);
        assert_eq!(m.ibu, 0.0);
        assert!((m.srm - 3.8616).abs() < 1e-3);
    }

    #[test]
    fn test_hopped_batch_adds_bitterness() {
        let calc = Calculator::new(Vec::new());
        let ingredients = vec![grain(10.0, 36.0, 2.0), boil_hop(1.0, 5.0, 60.0)];
        let outcome = calc
            .calculate(&Recipe::five_gallon(), &ingredients, None)
            .unwrap();
        assert!((outcome.metrics.ibu - 16.66).abs() < 0.05);
    }

    #[test]
    fn test_history_overrides_manufacturer_spec() {
        let calc = Calculator::new(Vec::new());
        let ingredients = vec![grain(10.0, 36.0, 2.0), yeast(42, 75.0)];
        let history: Vec<_> = [78.0, 79.0, 79.0, 80.0, 80.0, 81.0, 81.0, 82.0]
            .iter()
            .map(|a| history_record(42, *a))
            .collect();

        let analytics = calc.analytics(42, 75.0, &history);
        assert!(analytics.confidence >= CONFIDENCE_THRESHOLD);

        let outcome = calc
            .calculate(&Recipe::five_gallon(), &ingredients, Some(&history))
            .unwrap();
        // 80% attenuation instead of the 75% spec
        assert!((outcome.metrics.fg - 1.0108).abs() < 1e-4);
    }

    #[test]
    fn test_history_for_other_yeast_is_ignored() {
        let calc = Calculator::new(Vec::new());
        let ingredients = vec![grain(10.0, 36.0, 2.0), yeast(42, 75.0)];
        let history: Vec<_> = (0..8).map(|_| history_record(99, 90.0)).collect();
        let outcome = calc
            .calculate(&Recipe::five_gallon(), &ingredients, Some(&history))
            .unwrap();
        assert!((outcome.metrics.fg - 1.0135).abs() < 1e-9);
    }

    #[test]
    fn test_two_yeasts_blend_by_amount() {
        let calc = Calculator::new(Vec::new());
        let ingredients = vec![
            grain(10.0, 36.0, 2.0),
            Ingredient::Yeast(Yeast {
                ingredient_id: 10,
                amount: 2.0,
                unit: "g".to_string(),
                attenuation: Some(70.0),
            }),
            Ingredient::Yeast(Yeast {
                ingredient_id: 11,
                amount: 1.0,
                unit: "g".to_string(),
                attenuation: Some(85.0),
            }),
        ];
        let outcome = calc
            .calculate(&Recipe::five_gallon(), &ingredients, None)
            .unwrap();
        // blended attenuation 75% -> same fg as the default case
        assert!((outcome.metrics.fg - 1.0135).abs() < 1e-9);
    }

    #[test]
    fn test_yeast_blend_normalizes_mixed_units() {
        // 453.592 g and 1 lb are the same mass, so 70% and 90%
        // attenuation blend to 80% regardless of entry unit
        let calc = Calculator::new(Vec::new());
        let ingredients = vec![
            grain(10.0, 36.0, 2.0),
            Ingredient::Yeast(Yeast {
                ingredient_id: 10,
                amount: 453.592,
                unit: "g".to_string(),
                attenuation: Some(70.0),
            }),
            Ingredient::Yeast(Yeast {
                ingredient_id: 11,
                amount: 1.0,
                unit: "lb".to_string(),
                attenuation: Some(90.0),
            }),
        ];
        let outcome = calc
            .calculate(&Recipe::five_gallon(), &ingredients, None)
            .unwrap();
        // 80% of the 54 points: fg = 1 + 0.054 * 0.2
        assert!((outcome.metrics.fg - 1.0108).abs() < 1e-6);
    }

    #[test]
    fn test_yeast_weight_canonicalizes_per_category() {
        // Same mass, different units
        assert!((yeast_weight(1.0, "lb") - yeast_weight(453.592, "g")).abs() < 1e-9);
        // Same volume, different units
        assert!((yeast_weight(1.0, "l") - yeast_weight(1000.0, "ml")).abs() < 1e-9);
        // No canonical unit: raw amount stands
        assert_eq!(yeast_weight(2.0, "pack"), 2.0);
    }

    #[test]
    fn test_zero_batch_size_fails_without_partial_result() {
        let calc = Calculator::new(Vec::new());
        let mut recipe = Recipe::five_gallon();
        recipe.batch_size = 0.0;
        let err = calc
            .calculate(&recipe, &[grain(10.0, 36.0, 2.0)], None)
            .unwrap_err();
        assert!(matches!(err, BrewError::Validation(_)));
    }

    #[test]
    fn test_analytics_cached_until_invalidated() {
        let calc = Calculator::new(Vec::new());
        let history: Vec<_> = (0..8).map(|_| history_record(42, 80.0)).collect();

        let first = calc.analytics(42, 75.0, &history);
        assert_eq!(first.actual_attenuation_count, 8);

        // Cached value survives a change in the underlying history
        let cached = calc.analytics(42, 75.0, &[]);
        assert_eq!(cached.actual_attenuation_count, 8);

        calc.invalidate_analytics(42);
        let recomputed = calc.analytics(42, 75.0, &[]);
        assert_eq!(recomputed.actual_attenuation_count, 0);
        assert_eq!(recomputed.confidence, 0.0);
    }

    #[test]
    fn test_style_suggestions_through_catalog() {
        let catalog = vec![
            StyleGuide::new(1, "American Pale Ale")
                .og(1.045, 1.060)
                .fg(1.010, 1.015)
                .abv(4.5, 6.2)
                .ibu(30.0, 50.0)
                .srm(5.0, 10.0),
            StyleGuide::new(2, "Imperial Stout")
                .og(1.075, 1.115)
                .fg(1.018, 1.030)
                .abv(8.0, 12.0)
                .ibu(50.0, 90.0)
                .srm(30.0, 40.0),
        ];
        let calc = Calculator::new(catalog);
        let metrics = RecipeMetrics {
            og: 1.054,
            fg: 1.0135,
            abv: 5.3,
            ibu: 35.0,
            srm: 8.0,
        };
        let suggested = calc.suggest_styles(&metrics);
        assert_eq!(suggested.len(), 1);
        assert_eq!(suggested[0].style.name, "American Pale Ale");
        assert_eq!(suggested[0].match_percentage, 100.0);

        let all = calc.match_styles(&metrics);
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].match_percentage, 0.0);
    }

    #[tokio::test]
    async fn test_rapid_edits_coalesce_to_latest() {
        let calc = Arc::new(Calculator::new(Vec::new()));
        let debounced = DebouncedCalculator::with_window(calc, Duration::from_millis(30));

        let first = debounced.request(
            Recipe::five_gallon(),
            vec![grain(8.0, 36.0, 2.0)],
            None,
        );
        let second = debounced.request(
            Recipe::five_gallon(),
            vec![grain(10.0, 36.0, 2.0)],
            None,
        );

        let (first, second) = tokio::join!(first, second);
        assert!(first.is_none(), "older request should be superseded");

        let outcome = second.unwrap().unwrap();
        assert!((outcome.metrics.og - 1.054).abs() < 1e-9);
        assert_eq!(debounced.latest().unwrap(), outcome);
    }

    #[tokio::test]
    async fn test_single_request_applies() {
        let calc = Arc::new(Calculator::new(Vec::new()));
        let debounced = DebouncedCalculator::with_window(calc, Duration::from_millis(5));

        let result = debounced
            .request(Recipe::five_gallon(), vec![grain(10.0, 36.0, 2.0)], None)
            .await;
        assert!(result.is_some());
        assert!(debounced.latest().is_some());
    }
}
