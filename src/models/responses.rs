use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchResult, MoodEntry, MoodType};

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<MatchResult>,
    pub summary: String,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for mood detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectMoodResponse {
    pub mood: MoodType,
    pub intensity: u8,
    pub recorded: bool,
    #[serde(rename = "entryId", skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<uuid::Uuid>,
}

/// Response listing stored mood entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentMoodsResponse {
    pub entries: Vec<MoodEntry>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub database: bool,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
