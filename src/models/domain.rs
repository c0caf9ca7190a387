use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of companion the user is looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanionType {
    Romantic,
    Casual,
    Spiritual,
    #[serde(other)]
    Other,
}

/// What the user wants out of the relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipGoal {
    Romantic,
    Friendship,
    Support,
    #[serde(other)]
    Other,
}

/// Questionnaire answers used for a single matching request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preference {
    #[serde(rename = "companionType")]
    pub companion_type: CompanionType,
    #[serde(rename = "genderPreference", default = "default_gender_preference")]
    pub gender_preference: String,
    #[serde(rename = "ageRangeLabel", default)]
    pub age_range_label: String,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(rename = "personalityTraits", default)]
    pub personality_traits: Vec<String>,
    #[serde(rename = "relationshipGoal")]
    pub relationship_goal: RelationshipGoal,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}

fn default_gender_preference() -> String { "any".to_string() }

/// Companion profile eligible for matching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub gender: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(rename = "personalityTraits", default)]
    pub personality_traits: Vec<String>,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub dislikes: Vec<String>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub location: String,
}

/// Candidate profile with its computed score and reasons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub profile: CandidateProfile,
    #[serde(rename = "compatibilityScore")]
    pub compatibility_score: f64,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
}

/// Inclusive age window resolved from a questionnaire bucket label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    pub min: u8,
    pub max: u8,
}

impl AgeRange {
    /// Strict membership, no slack
    pub fn contains(&self, age: u8) -> bool {
        age >= self.min && age <= self.max
    }

    /// Membership with `slack` years tolerated on each side
    pub fn contains_with_slack(&self, age: u8, slack: u8) -> bool {
        age >= self.min.saturating_sub(slack) && age <= self.max.saturating_add(slack)
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub hobby: f64,
    pub personality: f64,
    pub type_bonus: f64,
    pub location_bonus: f64,
    pub age_bonus: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            hobby: 0.4,
            personality: 0.4,
            type_bonus: 0.2,
            location_bonus: 0.1,
            age_bonus: 0.1,
        }
    }
}

/// Emotional state detected in (or logged for) a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "mood_type", rename_all = "lowercase")]
pub enum MoodType {
    Happy,
    Excited,
    Loved,
    Sad,
    Lonely,
    Anxious,
    Stressed,
    Angry,
    Calm,
    Neutral,
}

impl MoodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodType::Happy => "happy",
            MoodType::Excited => "excited",
            MoodType::Loved => "loved",
            MoodType::Sad => "sad",
            MoodType::Lonely => "lonely",
            MoodType::Anxious => "anxious",
            MoodType::Stressed => "stressed",
            MoodType::Angry => "angry",
            MoodType::Calm => "calm",
            MoodType::Neutral => "neutral",
        }
    }
}

impl fmt::Display for MoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(MoodType::Happy),
            "excited" => Ok(MoodType::Excited),
            "loved" => Ok(MoodType::Loved),
            "sad" => Ok(MoodType::Sad),
            "lonely" => Ok(MoodType::Lonely),
            "anxious" => Ok(MoodType::Anxious),
            "stressed" => Ok(MoodType::Stressed),
            "angry" => Ok(MoodType::Angry),
            "calm" => Ok(MoodType::Calm),
            "neutral" => Ok(MoodType::Neutral),
            other => Err(format!("unknown mood: {}", other)),
        }
    }
}

/// Output of the mood classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodReading {
    pub mood: MoodType,
    pub intensity: u8,
}

/// Persisted mood reading for a user/companion conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: uuid::Uuid,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "companionId")]
    pub companion_id: String,
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
    pub mood: MoodType,
    pub intensity: u8,
    #[serde(rename = "autoDetected")]
    pub auto_detected: bool,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}
