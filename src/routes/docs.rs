// File Path: src/routes/docs.rs
//! Swagger UI and the raw OpenAPI document.

use axum::Router;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{docs, state::AppState};

pub const SWAGGER_UI_PATH: &str = "/api-docs";
pub const OPENAPI_JSON_PATH: &str = "/api-docs.json";

/// `/api-docs` redirects to the UI at `/api-docs/`, which loads `/api-docs.json`.
pub fn routes(public_url: &str) -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, docs::openapi(public_url)))
}
