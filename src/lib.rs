//! Companion Match - compatibility matching and mood detection for AI companions
//!
//! This library provides the deterministic scoring engine that ranks companion
//! profiles against questionnaire answers, plus the keyword mood classifier
//! used on chat messages. Both are pure functions; the HTTP layer and the
//! PostgreSQL store wrap them for the service binary.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{detect_mood, CompatibilityMatcher, MAX_MATCHES};
pub use models::{CandidateProfile, MatchResult, MoodReading, MoodType, Preference, ScoringWeights};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let matcher = CompatibilityMatcher::default();
        assert_eq!(*matcher.weights(), ScoringWeights::default());
        assert_eq!(detect_mood("").mood, MoodType::Neutral);
    }
}
