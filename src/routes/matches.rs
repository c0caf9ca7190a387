use actix_web::{http::StatusCode, web, HttpResponse, Responder};

use crate::models::{FindMatchesRequest, FindMatchesResponse, HealthResponse};
use crate::routes::{error_response, store_unavailable, AppState};

/// Largest candidate pool accepted inline in a request body
pub const MAX_INLINE_CANDIDATES: usize = 1000;

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let database = match &state.postgres {
        Some(postgres) => postgres.health_check().await.unwrap_or(false),
        None => false,
    };

    let status = if database { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        database,
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "preference": {
///     "companionType": "romantic",
///     "genderPreference": "any",
///     "ageRangeLabel": "26-35",
///     "hobbies": ["hiking"],
///     "personalityTraits": ["warm"],
///     "relationshipGoal": "romantic",
///     "displayName": "Sam"
///   },
///   "candidates": [ ... ]
/// }
/// ```
///
/// Without `candidates` the active companion pool is loaded from the store.
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    let FindMatchesRequest { preference, candidates } = req.into_inner();

    let candidates = match candidates {
        Some(candidates) if candidates.len() > MAX_INLINE_CANDIDATES => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "Validation failed",
                format!("At most {} candidates can be sent inline", MAX_INLINE_CANDIDATES),
            );
        }
        Some(candidates) => candidates,
        None => {
            let Some(postgres) = &state.postgres else {
                return store_unavailable();
            };

            match postgres.list_companions().await {
                Ok(candidates) => candidates,
                Err(e) => {
                    tracing::error!("Failed to load companion pool: {}", e);
                    return error_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Failed to load companions",
                        e.to_string(),
                    );
                }
            }
        }
    };

    tracing::debug!(
        "Matching {} candidates (type: {:?}, goal: {:?}, age: {:?})",
        candidates.len(),
        preference.companion_type,
        preference.relationship_goal,
        preference.age_range_label
    );

    let matches = state.matcher.find_matches(&preference, &candidates);
    let summary = state.matcher.recommendation_summary(&preference, &matches);

    tracing::info!(
        "Returning {} matches (from {} candidates)",
        matches.len(),
        candidates.len()
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        matches,
        summary,
        total_candidates: candidates.len(),
    })
}
