// File Path: src/routes/songs.rs

//! Song Routes

use axum::{routing::get, Router};

use crate::api::{songs, state::AppState};

/// Creates song catalog routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/songs", get(songs::list_songs))
}
