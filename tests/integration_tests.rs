// Integration tests for Companion Match

use companion_match::core::{age_range::resolve_age_range, CompatibilityMatcher, MAX_MATCHES};
use companion_match::models::{CandidateProfile, CompanionType, Preference, RelationshipGoal};

const GENDERS: &[&str] = &["female", "male", "Female", "non-binary"];
const HOBBIES: &[&str] = &["Hiking", "cooking classes", "art", "Music", "reading", "yoga", "photography"];
const TRAITS: &[&str] = &["warm", "Passionate", "curious", "calm", "funny", "thoughtful"];
const LOCATIONS: &[&str] = &["", "Lisbon", "Austin, TX", "Seoul, South Korea"];

fn create_test_profile(id: usize) -> CandidateProfile {
    CandidateProfile {
        id: id.to_string(),
        name: format!("Companion {}", id),
        age: 18 + (id * 7 % 50) as u8,
        gender: GENDERS[id % GENDERS.len()].to_string(),
        bio: if id % 3 == 0 {
            "Passionate and creative storyteller".to_string()
        } else {
            "Loves quiet evenings".to_string()
        },
        hobbies: (0..(id % 4))
            .map(|i| HOBBIES[(id + i) % HOBBIES.len()].to_string())
            .collect(),
        personality_traits: (0..(id % 3 + 1))
            .map(|i| TRAITS[(id * 2 + i) % TRAITS.len()].to_string())
            .collect(),
        likes: vec![],
        dislikes: vec![],
        image_url: None,
        location: LOCATIONS[id % LOCATIONS.len()].to_string(),
    }
}

fn create_pool(size: usize) -> Vec<CandidateProfile> {
    (0..size).map(create_test_profile).collect()
}

fn create_test_preference(gender: &str, label: &str) -> Preference {
    Preference {
        companion_type: CompanionType::Romantic,
        gender_preference: gender.to_string(),
        age_range_label: label.to_string(),
        hobbies: vec!["hiking".to_string(), "cooking".to_string(), "art".to_string()],
        personality_traits: vec!["warm".to_string(), "curious".to_string()],
        relationship_goal: RelationshipGoal::Romantic,
        display_name: "Sam".to_string(),
    }
}

#[test]
fn test_integration_result_invariants() {
    let matcher = CompatibilityMatcher::with_default_weights();
    let labels = ["18-25", "26-35", "36-45", "46+", "unknown"];
    let genders = ["any", "female", "MALE", "non-binary"];

    for size in [0, 1, 3, 6, 7, 40] {
        let pool = create_pool(size);

        for label in labels {
            for gender in genders {
                let preference = create_test_preference(gender, label);
                let range = resolve_age_range(label);
                let matches = matcher.find_matches(&preference, &pool);

                assert!(matches.len() <= MAX_MATCHES.min(pool.len()));

                for m in &matches {
                    assert!((0.0..=1.0).contains(&m.compatibility_score));
                    assert!(m.match_reasons.len() <= 3);
                    assert!(m.profile.age >= range.min.saturating_sub(2));
                    assert!(m.profile.age <= range.max.saturating_add(2));
                    if gender != "any" {
                        assert_eq!(m.profile.gender.to_lowercase(), gender.to_lowercase());
                    }
                }

                for pair in matches.windows(2) {
                    assert!(pair[0].compatibility_score >= pair[1].compatibility_score);
                }
            }
        }
    }
}

#[test]
fn test_integration_idempotent() {
    let matcher = CompatibilityMatcher::with_default_weights();
    let pool = create_pool(40);
    let preference = create_test_preference("any", "26-35");

    let first = matcher.find_matches(&preference, &pool);
    let second = matcher.find_matches(&preference, &pool);

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

#[test]
fn test_integration_does_not_mutate_inputs() {
    let matcher = CompatibilityMatcher::with_default_weights();
    let pool = create_pool(12);
    let before = serde_json::to_value(&pool).unwrap();

    let _ = matcher.find_matches(&create_test_preference("any", "18-25"), &pool);

    assert_eq!(serde_json::to_value(&pool).unwrap(), before);
}

#[test]
fn test_integration_empty_pool() {
    let matcher = CompatibilityMatcher::with_default_weights();
    let preference = create_test_preference("any", "26-35");

    let matches = matcher.find_matches(&preference, &[]);
    assert!(matches.is_empty());

    let summary = matcher.recommendation_summary(&preference, &matches);
    assert!(summary.starts_with("No matches yet"));
}

#[test]
fn test_integration_end_to_end_reasons() {
    let matcher = CompatibilityMatcher::with_default_weights();
    let preference = create_test_preference("female", "26-35");

    let candidate = CandidateProfile {
        id: "star".to_string(),
        name: "Mira".to_string(),
        age: 29,
        gender: "female".to_string(),
        bio: "Passionate painter with a creative streak".to_string(),
        hobbies: vec!["Hiking".to_string(), "Cooking".to_string(), "Artistic journaling".to_string()],
        personality_traits: vec!["Warm".to_string(), "curious".to_string()],
        likes: vec!["tea".to_string()],
        dislikes: vec![],
        image_url: Some("https://cdn.example.com/mira.png".to_string()),
        location: "Oslo, Norway".to_string(),
    };

    let matches = matcher.find_matches(&preference, &[create_test_profile(1), candidate]);

    let top = &matches[0];
    assert_eq!(top.profile.id, "star");
    assert_eq!(top.compatibility_score, 1.0);
    assert_eq!(
        top.match_reasons,
        vec![
            "You both enjoy hiking and cooking".to_string(),
            "You're both warm and curious".to_string(),
            "Mira is in your preferred age range".to_string(),
        ]
    );

    let summary = matcher.recommendation_summary(&preference, &matches);
    assert!(summary.contains("Mira with 100% compatibility"));
}
