use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

use crate::core::detect_mood;
use crate::models::{
    DetectMoodRequest, DetectMoodResponse, RecentMoodsQuery, RecentMoodsResponse, RecordMoodRequest,
};
use crate::routes::{error_response, store_unavailable, AppState};
use crate::services::NewMoodEntry;

/// Upper bound on entries returned by the recent moods endpoint
const MAX_RECENT_LIMIT: u16 = 100;

/// Configure all mood-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/moods/detect", web::post().to(detect))
        .route("/moods", web::post().to(record))
        .route("/moods/recent", web::get().to(recent));
}

/// Detect mood endpoint
///
/// POST /api/v1/moods/detect
///
/// Request body:
/// ```json
/// {
///   "text": "string",
///   "userId": "string",
///   "companionId": "string",
///   "sessionId": "string"
/// }
/// ```
///
/// The reading is stored as auto-detected when both ids are present and a
/// store is configured. Storage is best-effort: a failed write still returns
/// the reading with `recorded: false`.
async fn detect(
    state: web::Data<AppState>,
    req: web::Json<DetectMoodRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for detect mood request: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let reading = detect_mood(&req.text);

    let mut response = DetectMoodResponse {
        mood: reading.mood,
        intensity: reading.intensity,
        recorded: false,
        entry_id: None,
    };

    if let (Some(user_id), Some(companion_id), Some(postgres)) = (
        req.user_id.as_deref(),
        req.companion_id.as_deref(),
        state.postgres.as_ref(),
    ) {
        let entry = NewMoodEntry {
            user_id,
            companion_id,
            session_id: req.session_id.as_deref(),
            mood: reading.mood,
            intensity: reading.intensity,
            auto_detected: true,
        };

        match postgres.record_mood(entry).await {
            Ok(stored) => {
                response.recorded = true;
                response.entry_id = Some(stored.id);
            }
            Err(e) => {
                tracing::warn!("Detected mood for {} but failed to store it: {}", user_id, e);
            }
        }
    }

    tracing::debug!(
        "Detected mood {} ({}) recorded: {}",
        response.mood,
        response.intensity,
        response.recorded
    );

    HttpResponse::Ok().json(response)
}

/// Record mood endpoint
///
/// POST /api/v1/moods
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "companionId": "string",
///   "sessionId": "string",
///   "mood": "happy|excited|loved|sad|lonely|anxious|stressed|angry|calm|neutral",
///   "intensity": 1
/// }
/// ```
async fn record(
    state: web::Data<AppState>,
    req: web::Json<RecordMoodRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let Some(postgres) = &state.postgres else {
        return store_unavailable();
    };

    let entry = NewMoodEntry {
        user_id: &req.user_id,
        companion_id: &req.companion_id,
        session_id: req.session_id.as_deref(),
        mood: req.mood,
        intensity: req.intensity,
        auto_detected: false,
    };

    match postgres.record_mood(entry).await {
        Ok(stored) => HttpResponse::Created().json(stored),
        Err(e) => {
            tracing::error!("Failed to record mood for {}: {}", req.user_id, e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to record mood",
                e.to_string(),
            )
        }
    }
}

/// Recent moods endpoint
///
/// GET /api/v1/moods/recent?userId={userId}&companionId={companionId}&limit={limit}
async fn recent(
    state: web::Data<AppState>,
    query: web::Query<RecentMoodsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let Some(postgres) = &state.postgres else {
        return store_unavailable();
    };

    let limit = query.limit.min(MAX_RECENT_LIMIT) as usize;

    match postgres.recent_moods(&query.user_id, &query.companion_id, limit).await {
        Ok(entries) => HttpResponse::Ok().json(RecentMoodsResponse {
            count: entries.len(),
            entries,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch moods for {}: {}", query.user_id, e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch moods",
                e.to_string(),
            )
        }
    }
}
