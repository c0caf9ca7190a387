use crate::models::AgeRange;

/// Years tolerated outside the preferred window before a candidate is dropped
pub const AGE_SLACK_YEARS: u8 = 2;

/// Range used when the questionnaire label is not one of the known buckets
pub const DEFAULT_AGE_RANGE: AgeRange = AgeRange { min: 18, max: 100 };

/// Questionnaire age buckets
const AGE_BUCKETS: &[(&str, AgeRange)] = &[
    ("18-25", AgeRange { min: 18, max: 25 }),
    ("26-35", AgeRange { min: 26, max: 35 }),
    ("36-45", AgeRange { min: 36, max: 45 }),
    ("46+", AgeRange { min: 46, max: 100 }),
];

/// Map an age bucket label to its inclusive range
///
/// Unknown or malformed labels resolve to [`DEFAULT_AGE_RANGE`].
pub fn resolve_age_range(label: &str) -> AgeRange {
    let label = label.trim();
    AGE_BUCKETS
        .iter()
        .find(|(bucket, _)| *bucket == label)
        .map(|(_, range)| *range)
        .unwrap_or(DEFAULT_AGE_RANGE)
}
