//! # Musik M-O API
//!
//! Read-only HTTP catalog of songs served straight from a `songs.json` file,
//! with a health check that diagnoses that file and generated Swagger docs.

pub mod api;
pub mod config;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use api::state::AppState;
pub use config::Config;
pub use routes::create_router;
