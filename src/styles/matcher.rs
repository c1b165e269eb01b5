//! Style matching
//!
//! Scores calculated metrics against style-guide ranges. The
//! denominator is always 5: a style that leaves a range undefined, or
//! a recipe metric that falls outside it, counts as a miss, never a
//! skip.

use std::cmp::Ordering;

use crate::models::{MetricMatches, RecipeMetrics, StyleGuide, StyleMatch, StyleRange};

/// Number of metrics every style is scored on
pub const TOTAL_SPECS: usize = 5;
/// Minimum match percentage (inclusive) for a style to be suggested
pub const SUGGESTION_THRESHOLD: f64 = 60.0;

fn in_range(range: Option<&StyleRange>, value: f64) -> bool {
    range.is_some_and(|r| r.contains(value))
}

/// Score one style against calculated metrics
pub fn match_style(metrics: &RecipeMetrics, style: &StyleGuide) -> StyleMatch {
    let matches = MetricMatches {
        og: in_range(style.og.as_ref(), metrics.og),
        fg: in_range(style.fg.as_ref(), metrics.fg),
        abv: in_range(style.abv.as_ref(), metrics.abv),
        ibu: in_range(style.ibu.as_ref(), metrics.ibu),
        srm: in_range(style.srm.as_ref(), metrics.srm),
    };

    StyleMatch {
        style: style.clone(),
        match_percentage: matches.count() as f64 / TOTAL_SPECS as f64 * 100.0,
        matches,
    }
}

/// Score every style, ranked descending by match percentage
///
/// The sort is stable, so ties keep catalog order.
pub fn match_styles(metrics: &RecipeMetrics, styles: &[StyleGuide]) -> Vec<StyleMatch> {
    let mut results: Vec<StyleMatch> = styles
        .iter()
        .map(|style| match_style(metrics, style))
        .collect();

    results.sort_by(|a, b| {
        b.match_percentage
            .partial_cmp(&a.match_percentage)
            .unwrap_or(Ordering::Equal)
    });

    results
}

/// Styles worth suggesting to the user
pub fn suggest_styles(metrics: &RecipeMetrics, styles: &[StyleGuide]) -> Vec<StyleMatch> {
    match_styles(metrics, styles)
        .into_iter()
        .filter(|m| m.match_percentage >= SUGGESTION_THRESHOLD)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pale_ale_metrics() -> RecipeMetrics {
        RecipeMetrics {
            og: 1.054,
            fg: 1.0135,
            abv: 5.3,
            ibu: 35.0,
            srm: 8.0,
        }
    }

    #[test]
    fn test_three_of_five_is_sixty_and_suggested() {
        let style = StyleGuide::new(1, "American Pale Ale")
            .og(1.045, 1.060)
            .fg(1.010, 1.015)
            .abv(4.5, 6.2)
            .ibu(40.0, 60.0) // recipe's 35 misses
            .srm(10.0, 14.0); // recipe's 8 misses
        let result = match_style(&pale_ale_metrics(), &style);
        assert_eq!(result.matches.count(), 3);
        assert_eq!(result.match_percentage, 60.0);

        let suggested = suggest_styles(&pale_ale_metrics(), &[style]);
        assert_eq!(suggested.len(), 1);
    }

    #[test]
    fn test_undefined_range_counts_as_miss() {
        // All five in-range values but only four ranges defined
        let style = StyleGuide::new(1, "Partial Style")
            .og(1.045, 1.060)
            .fg(1.010, 1.015)
            .abv(4.5, 6.2)
            .ibu(30.0, 45.0);
        let result = match_style(&pale_ale_metrics(), &style);
        assert_eq!(result.match_percentage, 80.0);
        assert!(!result.matches.srm);
    }

    #[test]
    fn test_zero_matches_excluded_from_suggestions() {
        let style = StyleGuide::new(2, "Imperial Stout")
            .og(1.075, 1.115)
            .fg(1.018, 1.030)
            .abv(8.0, 12.0)
            .ibu(50.0, 90.0)
            .srm(30.0, 40.0);
        let result = match_style(&pale_ale_metrics(), &style);
        assert_eq!(result.match_percentage, 0.0);
        assert!(suggest_styles(&pale_ale_metrics(), &[style]).is_empty());
    }

    #[test]
    fn test_ranking_descending_with_stable_ties() {
        let full = StyleGuide::new(1, "Full Match")
            .og(1.045, 1.060)
            .fg(1.010, 1.015)
            .abv(4.5, 6.2)
            .ibu(30.0, 45.0)
            .srm(5.0, 10.0);
        let tie_a = StyleGuide::new(2, "Tie A").og(1.045, 1.060);
        let tie_b = StyleGuide::new(3, "Tie B").og(1.045, 1.060);

        let ranked = match_styles(&pale_ale_metrics(), &[tie_a, full, tie_b]);
        assert_eq!(ranked[0].style.name, "Full Match");
        assert_eq!(ranked[0].match_percentage, 100.0);
        // Tied styles keep catalog order
        assert_eq!(ranked[1].style.name, "Tie A");
        assert_eq!(ranked[2].style.name, "Tie B");
    }
}
