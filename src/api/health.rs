// File Path: src/api/health.rs
//! Health Check Handler
//!
//! Reports whether the server is up and whether `songs.json` is present and valid.

use axum::{extract::State, http::StatusCode, Json};
use tracing::warn;

use crate::{
    api::state::AppState,
    models::{DatabaseStatus, HealthResponse},
    services::song_store::DatabaseHealth,
};

/// Check server and data file health
///
/// Answers 200 when `songs.json` exists and parses as JSON, 503 otherwise.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running and songs.json is available", body = HealthResponse),
        (status = 503, description = "songs.json is missing or cannot be read", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.song_store.check_health().await {
        DatabaseHealth::Connected => (
            StatusCode::OK,
            Json(HealthResponse::new(
                DatabaseStatus::Connected,
                "Server is running and songs.json is available",
            )),
        ),
        DatabaseHealth::Disconnected => {
            warn!(path = %state.song_store.path().display(), "songs.json not found");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::new(
                    DatabaseStatus::Disconnected,
                    "songs.json file does not exist",
                )),
            )
        }
        DatabaseHealth::Error(reason) => {
            warn!(path = %state.song_store.path().display(), "songs.json unreadable: {}", reason);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::new(
                    DatabaseStatus::Error,
                    format!("Error reading songs.json: {}", reason),
                )),
            )
        }
    }
}
