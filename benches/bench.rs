// Criterion benchmarks for Companion Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use companion_match::core::{detect_mood, overlap::overlap_score, CompatibilityMatcher};
use companion_match::models::{CandidateProfile, CompanionType, Preference, RelationshipGoal};

const HOBBIES: &[&str] = &["hiking", "cooking", "art", "music", "reading", "yoga", "gaming", "travel"];
const TRAITS: &[&str] = &["warm", "passionate", "curious", "calm", "funny", "thoughtful", "friendly"];

fn create_candidate(id: usize) -> CandidateProfile {
    CandidateProfile {
        id: id.to_string(),
        name: format!("Companion {}", id),
        age: 18 + (id % 50) as u8,
        gender: if id % 2 == 0 { "female" } else { "male" }.to_string(),
        bio: "Creative and passionate about the little things".to_string(),
        hobbies: (0..4).map(|i| HOBBIES[(id + i) % HOBBIES.len()].to_string()).collect(),
        personality_traits: (0..3).map(|i| TRAITS[(id + i) % TRAITS.len()].to_string()).collect(),
        likes: vec![],
        dislikes: vec![],
        image_url: None,
        location: if id % 3 == 0 { "Lisbon, Portugal" } else { "Lisbon" }.to_string(),
    }
}

fn create_preference() -> Preference {
    Preference {
        companion_type: CompanionType::Romantic,
        gender_preference: "female".to_string(),
        age_range_label: "26-35".to_string(),
        hobbies: vec!["hiking".to_string(), "art".to_string(), "music".to_string()],
        personality_traits: vec!["warm".to_string(), "curious".to_string()],
        relationship_goal: RelationshipGoal::Romantic,
        display_name: "Sam".to_string(),
    }
}

fn bench_overlap_score(c: &mut Criterion) {
    let wanted: Vec<String> = HOBBIES[..4].iter().map(|h| h.to_string()).collect();
    let offered: Vec<String> = HOBBIES[2..].iter().map(|h| h.to_uppercase()).collect();

    c.bench_function("overlap_score", |b| {
        b.iter(|| overlap_score(black_box(&wanted), black_box(&offered)));
    });
}

fn bench_find_matches(c: &mut Criterion) {
    let matcher = CompatibilityMatcher::with_default_weights();
    let preference = create_preference();

    let mut group = c.benchmark_group("find_matches");

    for size in [10, 100, 1000] {
        let candidates: Vec<CandidateProfile> = (0..size).map(create_candidate).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &candidates, |b, candidates| {
            b.iter(|| matcher.find_matches(black_box(&preference), black_box(candidates)));
        });
    }

    group.finish();
}

fn bench_detect_mood(c: &mut Criterion) {
    let messages = [
        "I am SO happy!!!",
        "work has me completely overwhelmed and exhausted",
        "nothing much, just reading a book before bed",
    ];

    c.bench_function("detect_mood", |b| {
        b.iter(|| {
            for message in &messages {
                black_box(detect_mood(black_box(message)));
            }
        });
    });
}

criterion_group!(benches, bench_overlap_score, bench_find_matches, bench_detect_mood);
criterion_main!(benches);
