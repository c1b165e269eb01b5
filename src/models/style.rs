//! Style guide models
//!
//! Reference ranges for a beer style and the result of scoring a
//! recipe's metrics against them.

use serde::{Deserialize, Serialize};

/// An inclusive min/max range for one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleRange {
    pub min: f64,
    pub max: f64,
}

impl StyleRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive containment check
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Reference ranges for a beer style
///
/// Styles are expected to define all five ranges; an undefined range
/// counts against the style when scoring, it is not skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleGuide {
    pub id: i64,
    pub name: String,
    pub og: Option<StyleRange>,
    pub fg: Option<StyleRange>,
    pub abv: Option<StyleRange>,
    pub ibu: Option<StyleRange>,
    pub srm: Option<StyleRange>,
}

impl StyleGuide {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            og: None,
            fg: None,
            abv: None,
            ibu: None,
            srm: None,
        }
    }

    pub fn og(mut self, min: f64, max: f64) -> Self {
        self.og = Some(StyleRange::new(min, max));
        self
    }

    pub fn fg(mut self, min: f64, max: f64) -> Self {
        self.fg = Some(StyleRange::new(min, max));
        self
    }

    pub fn abv(mut self, min: f64, max: f64) -> Self {
        self.abv = Some(StyleRange::new(min, max));
        self
    }

    pub fn ibu(mut self, min: f64, max: f64) -> Self {
        self.ibu = Some(StyleRange::new(min, max));
        self
    }

    pub fn srm(mut self, min: f64, max: f64) -> Self {
        self.srm = Some(StyleRange::new(min, max));
        self
    }
}

/// Per-metric match flags for one style comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricMatches {
    pub og: bool,
    pub fg: bool,
    pub abv: bool,
    pub ibu: bool,
    pub srm: bool,
}

impl MetricMatches {
    /// Number of matching metrics (out of a fixed 5)
    pub fn count(&self) -> usize {
        [self.og, self.fg, self.abv, self.ibu, self.srm]
            .iter()
            .filter(|m| **m)
            .count()
    }
}

/// The result of scoring a recipe against one style
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleMatch {
    pub style: StyleGuide,
    pub match_percentage: f64,
    pub matches: MetricMatches,
}
