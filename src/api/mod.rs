// src/api/mod.rs

//! # API Handlers
//!
//! Request handlers and the generated OpenAPI document.

pub mod docs;
pub mod health;
pub mod songs;
pub mod state;
