use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{CandidateProfile, MoodType, Preference};

/// Request to find matches
///
/// When `candidates` is omitted the pool is loaded from the companion store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesRequest {
    pub preference: Preference,
    #[serde(default)]
    pub candidates: Option<Vec<CandidateProfile>>,
}

/// Request to classify a chat message
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DetectMoodRequest {
    #[validate(length(max = 4000))]
    pub text: String,
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId", default)]
    pub user_id: Option<String>,
    #[validate(length(min = 1))]
    #[serde(alias = "companion_id", rename = "companionId", default)]
    pub companion_id: Option<String>,
    #[serde(alias = "session_id", rename = "sessionId", default)]
    pub session_id: Option<String>,
}

/// Request to log a mood by hand
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordMoodRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "companion_id", rename = "companionId")]
    pub companion_id: String,
    #[serde(alias = "session_id", rename = "sessionId", default)]
    pub session_id: Option<String>,
    pub mood: MoodType,
    #[validate(range(min = 1, max = 10))]
    pub intensity: u8,
}

/// Query for recent mood entries
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecentMoodsQuery {
    #[validate(length(min = 1))]
    #[serde(rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    #[serde(rename = "companionId")]
    pub companion_id: String,
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    20
}
