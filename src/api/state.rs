// src/api/state.rs

//! # Application State
//!
//! Defines the shared state that will be accessible by all route handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::services::song_store::SongStore;

/// The core application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    // Read-only view of the catalog file.
    pub song_store: Arc<SongStore>,
}

impl AppState {
    /// Builds the state from configuration; the store points at `config.songs_file`.
    pub fn new(config: Config) -> Self {
        let song_store = SongStore::new(config.songs_file.clone());

        AppState {
            config: Arc::new(config),
            song_store: Arc::new(song_store),
        }
    }
}
