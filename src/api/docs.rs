// File Path: src/api/docs.rs
//! OpenAPI document generated from the handler annotations.

use utoipa::openapi::{server::ServerBuilder, OpenApi as OpenApiDocument};
use utoipa::OpenApi;

use crate::{
    api::{health, songs},
    models::{DatabaseStatus, ErrorResponse, HealthResponse, ServiceStatus, Song, SongsResponse},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Musik M-O API",
        version = "1.0.0",
        description = "API for a music application with songs, covers and metadata",
        contact(name = "API Support", email = "support@musik-mo.dk")
    ),
    paths(songs::list_songs, health::health_check),
    components(schemas(
        Song,
        SongsResponse,
        ErrorResponse,
        HealthResponse,
        ServiceStatus,
        DatabaseStatus
    )),
    tags(
        (name = "Songs", description = "Song catalog"),
        (name = "Health", description = "Service and data file status")
    )
)]
pub struct ApiDoc;

/// Builds the document, advertising `public_url` as the development server.
pub fn openapi(public_url: &str) -> OpenApiDocument {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![ServerBuilder::new()
        .url(public_url)
        .description(Some("Development server"))
        .build()]);
    doc
}
