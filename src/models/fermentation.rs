//! Fermentation record model
//!
//! One historical brew's observed gravity pair for a yeast. Created by
//! brew-session tracking elsewhere; read-only input here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An observed (OG, FG) pair for one fermentation of a yeast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FermentationRecord {
    /// Catalog id of the yeast this fermentation used
    pub ingredient_id: i64,
    /// Measured original gravity
    pub og: f64,
    /// Measured final gravity
    pub fg: f64,
    /// When the fermentation finished
    pub recorded_at: DateTime<Utc>,
}

impl FermentationRecord {
    pub fn new(ingredient_id: i64, og: f64, fg: f64) -> Self {
        Self {
            ingredient_id,
            og,
            fg,
            recorded_at: Utc::now(),
        }
    }
}
