use crate::core::overlap::{overlap_score, overlaps_any};
use crate::models::{AgeRange, CandidateProfile, CompanionType, Preference, RelationshipGoal, ScoringWeights};

/// Trait keywords that earn the companion-type bonus for a given pairing
///
/// Pairings not listed here earn no type bonus.
const TYPE_BONUS_KEYWORDS: &[(CompanionType, RelationshipGoal, &[&str])] = &[
    (
        CompanionType::Romantic,
        RelationshipGoal::Romantic,
        &["romantic", "passionate", "warm"],
    ),
    (
        CompanionType::Casual,
        RelationshipGoal::Friendship,
        &["friendly", "casual", "fun", "energetic"],
    ),
    (
        CompanionType::Spiritual,
        RelationshipGoal::Support,
        &["peaceful", "calm", "spiritual", "thoughtful"],
    ),
];

/// Per-candidate score components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub hobby_score: f64,
    pub personality_score: f64,
    pub in_age_range: bool,
    pub total: f64,
}

/// Keywords for a (companion type, goal) pairing, if the pairing has any
pub fn type_bonus_keywords(
    companion_type: CompanionType,
    goal: RelationshipGoal,
) -> Option<&'static [&'static str]> {
    TYPE_BONUS_KEYWORDS
        .iter()
        .find(|(t, g, _)| *t == companion_type && *g == goal)
        .map(|(_, _, keywords)| *keywords)
}

/// Calculate a compatibility score (0-1) for a candidate
///
/// Scoring formula:
/// score = (
///     hobby_score * 0.4 +          # Shared interests
///     personality_score * 0.4 +    # Shared traits
///     type_bonus (0.2) +           # Traits fit the companion type / goal pairing
///     location_bonus (0.1) +       # "City, Region" style location
///     age_bonus (0.1)              # Inside the strict preferred window
/// ).clamp(0, 1)
pub fn calculate_compatibility(
    profile: &CandidateProfile,
    preference: &Preference,
    age_range: AgeRange,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let hobby_score = overlap_score(&preference.hobbies, &profile.hobbies);
    let personality_score = overlap_score(&preference.personality_traits, &profile.personality_traits);

    let mut bonus = 0.0;

    if let Some(keywords) = type_bonus_keywords(preference.companion_type, preference.relationship_goal) {
        if overlaps_any(&profile.personality_traits, keywords) {
            bonus += weights.type_bonus;
        }
    }

    if profile.location.contains(',') {
        bonus += weights.location_bonus;
    }

    let in_age_range = age_range.contains(profile.age);

    let mut total = hobby_score * weights.hobby + personality_score * weights.personality + bonus;
    if in_age_range {
        total += weights.age_bonus;
    }

    ScoreBreakdown {
        hobby_score,
        personality_score,
        in_age_range,
        total: total.clamp(0.0, 1.0),
    }
}
