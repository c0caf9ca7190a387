use crate::core::overlap::{overlaps_any, shared_terms};
use crate::core::scoring::ScoreBreakdown;
use crate::models::{CandidateProfile, Preference, RelationshipGoal};

/// Maximum number of reasons attached to a match
pub const MAX_REASONS: usize = 3;

const HOBBY_REASON_THRESHOLD: f64 = 0.3;
const PERSONALITY_REASON_THRESHOLD: f64 = 0.2;
const CREATIVE_HOBBIES: &[&str] = &["art", "music", "photography", "cooking"];

/// Build the human-readable reasons for a match, highest priority first
///
/// Reasons are display-only and never feed back into the score.
pub fn build_match_reasons(
    profile: &CandidateProfile,
    preference: &Preference,
    breakdown: &ScoreBreakdown,
) -> Vec<String> {
    let mut reasons = Vec::with_capacity(MAX_REASONS);

    if breakdown.hobby_score > HOBBY_REASON_THRESHOLD {
        let shared = shared_terms(&preference.hobbies, &profile.hobbies);
        if !shared.is_empty() {
            reasons.push(format!("You both enjoy {}", join_first_two(&shared)));
        }
    }

    if breakdown.personality_score > PERSONALITY_REASON_THRESHOLD {
        let shared = shared_terms(&preference.personality_traits, &profile.personality_traits);
        if !shared.is_empty() {
            reasons.push(format!("You're both {}", join_first_two(&shared)));
        }
    }

    if breakdown.in_age_range {
        reasons.push(format!("{} is in your preferred age range", profile.name));
    }

    if !profile.location.is_empty() {
        reasons.push(format!(
            "Based in {}, bringing a unique cultural perspective",
            profile.location
        ));
    }

    let bio = profile.bio.to_lowercase();

    if bio.contains("passionate") && preference.relationship_goal == RelationshipGoal::Romantic {
        reasons.push("Shares your desire for a passionate, romantic connection".to_string());
    }

    if bio.contains("creative") && overlaps_any(&preference.hobbies, CREATIVE_HOBBIES) {
        reasons.push("Has a creative spirit that matches your artistic interests".to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

fn join_first_two(terms: &[&str]) -> String {
    terms.iter().take(2).copied().collect::<Vec<_>>().join(" and ")
}
