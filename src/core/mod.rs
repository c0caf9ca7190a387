// Core algorithm exports
pub mod age_range;
pub mod filters;
pub mod matcher;
pub mod mood;
pub mod overlap;
pub mod reasons;
pub mod scoring;

pub use age_range::resolve_age_range;
pub use filters::{matches_age, matches_gender, passes_filters};
pub use matcher::{CompatibilityMatcher, MAX_MATCHES};
pub use mood::detect_mood;
pub use overlap::{overlap_score, terms_overlap};
pub use scoring::{calculate_compatibility, ScoreBreakdown};
