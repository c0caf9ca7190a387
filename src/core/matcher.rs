use crate::models::{CandidateProfile, MatchResult, Preference, ScoringWeights};
use crate::core::{
    age_range::{resolve_age_range, AGE_SLACK_YEARS},
    filters::passes_filters,
    reasons::build_match_reasons,
    scoring::calculate_compatibility,
};

/// Maximum number of ranked matches returned per request
pub const MAX_MATCHES: usize = 6;

/// Compatibility matcher - ranks companion profiles against questionnaire answers
///
/// # Pipeline Stages
/// 1. Age range resolution
/// 2. Hard filtering (gender, age with slack)
/// 3. Scoring
/// 4. Reason generation
/// 5. Stable ranking and truncation
///
/// The matcher holds only its weights; every call is independent.
#[derive(Debug, Clone)]
pub struct CompatibilityMatcher {
    weights: ScoringWeights,
}

impl CompatibilityMatcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Find the best matches for a preference
    ///
    /// # Arguments
    /// * `preference` - The user's questionnaire answers
    /// * `candidates` - The candidate pool; order only matters for ties
    ///
    /// # Returns
    /// At most [`MAX_MATCHES`] results, highest score first
    pub fn find_matches(
        &self,
        preference: &Preference,
        candidates: &[CandidateProfile],
    ) -> Vec<MatchResult> {
        let age_range = resolve_age_range(&preference.age_range_label);

        let mut matches: Vec<MatchResult> = candidates
            .iter()
            .filter(|profile| passes_filters(profile, preference, age_range, AGE_SLACK_YEARS))
            .map(|profile| {
                let breakdown = calculate_compatibility(profile, preference, age_range, &self.weights);
                let match_reasons = build_match_reasons(profile, preference, &breakdown);

                MatchResult {
                    profile: profile.clone(),
                    compatibility_score: breakdown.total,
                    match_reasons,
                }
            })
            .collect();

        // sort_by is stable, so equal scores keep pool order
        matches.sort_by(|a, b| {
            b.compatibility_score
                .partial_cmp(&a.compatibility_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        matches.truncate(MAX_MATCHES);

        tracing::trace!(
            "Ranked {} matches from {} candidates",
            matches.len(),
            candidates.len()
        );

        matches
    }

    /// One-line summary of a ranked match list
    pub fn recommendation_summary(&self, preference: &Preference, matches: &[MatchResult]) -> String {
        let Some(top) = matches.first() else {
            return "No matches yet. Browse all companions to find someone who feels right for you."
                .to_string();
        };

        // Scores are clamped to [0, 1] by the scorer, so the cast cannot overflow
        debug_assert!((0.0..=1.0).contains(&top.compatibility_score));
        let percent = (top.compatibility_score * 100.0).round() as u32;
        let noun = if matches.len() == 1 { "companion" } else { "companions" };
        let greeting = if preference.display_name.trim().is_empty() {
            String::new()
        } else {
            format!("{}, ", preference.display_name.trim())
        };

        format!(
            "{}your top match is {} with {}% compatibility. We found {} {} who fit your preferences.",
            greeting,
            top.profile.name,
            percent,
            matches.len(),
            noun
        )
    }
}

impl Default for CompatibilityMatcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
