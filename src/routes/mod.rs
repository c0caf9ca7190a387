// Route exports
pub mod matches;
pub mod moods;

use actix_web::{http::StatusCode, web, HttpResponse};
use std::sync::Arc;

use crate::core::CompatibilityMatcher;
use crate::models::ErrorResponse;
use crate::services::PostgresClient;

/// Application state shared across all handlers
///
/// `postgres` is `None` when the service runs without persistence.
#[derive(Clone)]
pub struct AppState {
    pub postgres: Option<Arc<PostgresClient>>,
    pub matcher: CompatibilityMatcher,
}

impl AppState {
    pub fn new(postgres: Option<Arc<PostgresClient>>, matcher: CompatibilityMatcher) -> Self {
        Self { postgres, matcher }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(moods::configure),
    );
}

pub(crate) fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.into(),
        status_code: status.as_u16(),
    })
}

pub(crate) fn store_unavailable() -> HttpResponse {
    error_response(
        StatusCode::SERVICE_UNAVAILABLE,
        "Store unavailable",
        "No database is configured for this instance",
    )
}
