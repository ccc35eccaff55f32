// File Path: src/api/songs.rs
//! Songs API Handlers

use axum::{extract::State, Json};
use serde_json::Value;

use crate::{
    api::state::AppState,
    models::{ApiError, ApiResult, ErrorResponse, SongsResponse},
};

/// Get all songs
///
/// Returns every song in the catalog with its metadata, in stored order.
/// A missing or unreadable catalog file is served as an empty list.
#[utoipa::path(
    get,
    path = "/api/songs",
    tag = "Songs",
    responses(
        (status = 200, description = "List of all songs", body = SongsResponse),
        (status = 500, description = "Songs could not be returned", body = ErrorResponse)
    )
)]
pub async fn list_songs(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let songs = state.song_store.load_songs().await;

    let body = serde_json::to_value(SongsResponse::new(songs))
        .map_err(|e| ApiError::Serialization(e.to_string()))?;

    Ok(Json(body))
}
