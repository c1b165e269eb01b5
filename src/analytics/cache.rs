//! Per-yeast analytics cache
//!
//! Recomputing analytics means scanning a yeast's whole fermentation
//! history, so results are cached per ingredient id with a TTL and
//! invalidated explicitly when new data is recorded. Last writer wins;
//! a concurrent reader may briefly see a stale (never corrupt) entry.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use super::attenuation::AttenuationAnalytics;

/// Default time-to-live for cached analytics
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

struct CacheEntry {
    analytics: AttenuationAnalytics,
    inserted_at: Instant,
}

/// TTL cache of `AttenuationAnalytics` keyed by ingredient id
pub struct AnalyticsCache {
    ttl: Duration,
    entries: Mutex<HashMap<i64, CacheEntry>>,
}

impl AnalyticsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch a live entry; expired entries count as misses
    pub fn get(&self, ingredient_id: i64) -> Option<AttenuationAnalytics> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&ingredient_id)
            .filter(|entry| entry.inserted_at.elapsed() < self.ttl)
            .map(|entry| entry.analytics.clone())
    }

    /// Store analytics, replacing any previous entry
    pub fn insert(&self, ingredient_id: i64, analytics: AttenuationAnalytics) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            ingredient_id,
            CacheEntry {
                analytics,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Drop the entry for one ingredient (new fermentation data recorded)
    pub fn invalidate(&self, ingredient_id: i64) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if entries.remove(&ingredient_id).is_some() {
            tracing::debug!(ingredient_id, "invalidated cached attenuation analytics");
        }
    }

    /// Drop every expired entry; returns how many were removed
    pub fn purge_expired(&self) -> usize {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|_, entry| entry.inserted_at.elapsed() < self.ttl);
        before - entries.len()
    }
}

impl Default for AnalyticsCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
