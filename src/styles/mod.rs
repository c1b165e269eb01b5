//! Style matching module

pub mod matcher;

pub use matcher::{match_style, match_styles, suggest_styles, SUGGESTION_THRESHOLD, TOTAL_SPECS};
