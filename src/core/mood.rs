//! Keyword mood classifier.
//!
//! A first-match-wins scan over an ordered mood table. Table order decides
//! overlapping keywords: a message hitting both "happy" and "excited"
//! keywords is always classified as happy.

use crate::models::{MoodReading, MoodType};

/// Intensity scale upper bound
pub const MAX_INTENSITY: u8 = 10;

/// Reading returned when no keyword matches
pub const NEUTRAL_READING: MoodReading = MoodReading {
    mood: MoodType::Neutral,
    intensity: 5,
};

/// More than this many `!` raises intensity by one
const EXCLAMATION_THRESHOLD: usize = 2;

/// Uppercase share of all characters above which intensity rises by one
const CAPS_RATIO_THRESHOLD: f64 = 0.5;

struct MoodPattern {
    mood: MoodType,
    keywords: &'static [&'static str],
    base_intensity: u8,
}

static MOOD_TABLE: &[MoodPattern] = &[
    MoodPattern {
        mood: MoodType::Happy,
        keywords: &["happy", "joy", "glad", "wonderful", "amazing", "great day", "cheerful"],
        base_intensity: 7,
    },
    MoodPattern {
        mood: MoodType::Excited,
        keywords: &["excited", "thrilled", "can't wait", "pumped", "hyped", "stoked"],
        base_intensity: 8,
    },
    MoodPattern {
        mood: MoodType::Loved,
        keywords: &["love", "adore", "cherish", "grateful", "appreciated", "cared for"],
        base_intensity: 8,
    },
    MoodPattern {
        mood: MoodType::Sad,
        keywords: &["sad", "depressed", "unhappy", "crying", "heartbroken", "miserable"],
        base_intensity: 6,
    },
    MoodPattern {
        mood: MoodType::Lonely,
        keywords: &["lonely", "alone", "isolated", "no one", "nobody", "miss you"],
        base_intensity: 6,
    },
    MoodPattern {
        mood: MoodType::Anxious,
        keywords: &["anxious", "worried", "nervous", "scared", "afraid", "panic"],
        base_intensity: 7,
    },
    MoodPattern {
        mood: MoodType::Stressed,
        keywords: &["stressed", "overwhelmed", "pressure", "exhausted", "burned out", "deadline"],
        base_intensity: 7,
    },
    MoodPattern {
        mood: MoodType::Angry,
        keywords: &["angry", "furious", "annoyed", "frustrated", "hate", "pissed"],
        base_intensity: 8,
    },
    MoodPattern {
        mood: MoodType::Calm,
        keywords: &["calm", "peaceful", "relaxed", "serene", "chill", "at ease"],
        base_intensity: 5,
    },
];

/// Detect the mood of a message
///
/// Total over all inputs: empty or unmatched text yields [`NEUTRAL_READING`].
pub fn detect_mood(text: &str) -> MoodReading {
    let lowered = text.to_lowercase();

    let Some(pattern) = MOOD_TABLE
        .iter()
        .find(|p| p.keywords.iter().any(|k| lowered.contains(k)))
    else {
        return NEUTRAL_READING;
    };

    let mut intensity = pattern.base_intensity;

    if text.matches('!').count() > EXCLAMATION_THRESHOLD {
        intensity = (intensity + 1).min(MAX_INTENSITY);
    }

    if caps_ratio(text) > CAPS_RATIO_THRESHOLD {
        intensity = (intensity + 1).min(MAX_INTENSITY);
    }

    MoodReading {
        mood: pattern.mood,
        intensity,
    }
}

/// Share of uppercase letters among all characters (spaces and punctuation included)
fn caps_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }

    let upper = text.chars().filter(|c| c.is_uppercase()).count();
    upper as f64 / total as f64
}
