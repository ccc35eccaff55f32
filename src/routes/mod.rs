// src/routes/mod.rs

//! # Routes Module
//!
//! Defines the main routing structure for the Axum server.

use axum::{http::Uri, middleware, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{api::state::AppState, middleware::request_id_layer, models::ApiError};

pub mod docs;
pub mod health;
pub mod songs;

/// Creates and configures the main application router.
pub fn create_router(state: AppState) -> Router {
    let public_url = state.config.public_url();

    Router::new()
        .merge(songs::routes())
        .merge(health::routes())
        .merge(docs::routes(&public_url))
        .fallback(not_found)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_layer))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
