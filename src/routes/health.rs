// File Path: src/routes/health.rs
//! Health Check Routes
//!
//! Provides health monitoring and system status endpoints

use axum::{routing::get, Router};

use crate::api::{health, state::AppState};

/// Creates health-related routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/health", get(health::health_check))
}
