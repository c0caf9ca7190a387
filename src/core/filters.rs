use crate::models::{AgeRange, CandidateProfile, Preference};

/// Preference value that disables gender filtering
pub const ANY_GENDER: &str = "any";

/// Check if a candidate matches the requested gender
///
/// Only the exact value `"any"` disables the filter; any other value is
/// compared case-insensitively against the candidate's gender.
#[inline]
pub fn matches_gender(profile: &CandidateProfile, preference: &Preference) -> bool {
    preference.gender_preference == ANY_GENDER
        || preference.gender_preference.to_lowercase() == profile.gender.to_lowercase()
}

/// Check if a candidate's age is within the window widened by `slack` years
#[inline]
pub fn matches_age(profile: &CandidateProfile, age_range: AgeRange, slack: u8) -> bool {
    age_range.contains_with_slack(profile.age, slack)
}

/// Hard filter applied before scoring
///
/// Candidates failing here never reach the scorer.
#[inline]
pub fn passes_filters(
    profile: &CandidateProfile,
    preference: &Preference,
    age_range: AgeRange,
    slack: u8,
) -> bool {
    matches_gender(profile, preference) && matches_age(profile, age_range, slack)
}
