// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AgeRange, CandidateProfile, CompanionType, MatchResult, MoodEntry, MoodReading, MoodType,
    Preference, RelationshipGoal, ScoringWeights,
};
pub use requests::{DetectMoodRequest, FindMatchesRequest, RecentMoodsQuery, RecordMoodRequest};
pub use responses::{
    DetectMoodResponse, ErrorResponse, FindMatchesResponse, HealthResponse, RecentMoodsResponse,
};
