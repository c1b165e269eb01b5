//! Attenuation analytics module
//!
//! Statistics over historical fermentation outcomes plus the cache
//! they live in.

pub mod attenuation;
pub mod cache;

pub use attenuation::{
    analyze, apparent_attenuation, confidence, AttenuationAnalytics, CONFIDENCE_THRESHOLD,
    MAX_SPREAD, MIN_SAMPLES,
};
pub use cache::{AnalyticsCache, DEFAULT_TTL};
