// src/services/mod.rs

//! # Services Module
//!
//! Business logic and access to the on-disk data.

// Catalog reader and health probe over songs.json
pub mod song_store;
