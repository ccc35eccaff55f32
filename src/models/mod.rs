// File Path: src/models/mod.rs

//! # Models
//!
//! Error types and the JSON shapes exchanged over the HTTP API.

// =========================================================================================
// SECTION 1: IMPORTS
// =========================================================================================

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

// =========================================================================================
// SECTION 2: API ERROR HANDLING
// =========================================================================================

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Route not found: {0}")]
    NotFound(String),
}

impl ApiError {
    /// The underlying failure, without the variant's own prefix.
    fn reason(&self) -> String {
        match self {
            ApiError::Io(e) => e.to_string(),
            ApiError::Json(e) => e.to_string(),
            ApiError::Serialization(reason) | ApiError::NotFound(reason) => reason.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Io(_) | ApiError::Json(_) | ApiError::Serialization(_) => {
                tracing::error!(error = %self, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error loading songs: {}", self.reason()),
                )
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Body returned whenever a request fails.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

// =========================================================================================
// SECTION 3: SONG MODELS
// =========================================================================================

/// A single catalog entry as stored in `songs.json`.
///
/// The catalog reader passes stored records through untouched, so this type
/// describes the documented shape rather than gating what is served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Unique ID of the song
    #[schema(example = 1)]
    pub id: i64,
    /// Song title
    #[schema(example = "Blue Monday")]
    pub title: String,
    /// Artist who made the song
    #[schema(example = "New Order")]
    pub artist: String,
    /// Path to the cover image
    #[schema(example = "covers/blue-monday.jpg")]
    pub cover_path: String,
    /// Path to the audio file
    #[schema(example = "songs/blue-monday.mp3")]
    pub song_path: String,
    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Time of the last update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Successful body of `GET /api/songs`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SongsResponse {
    pub success: bool,
    pub count: usize,
    #[schema(value_type = Vec<Song>)]
    pub songs: Vec<Value>,
}

impl SongsResponse {
    pub fn new(songs: Vec<Value>) -> Self {
        Self {
            success: true,
            count: songs.len(),
            songs,
        }
    }
}

// =========================================================================================
// SECTION 4: HEALTH MODELS
// =========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ServiceStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "ERROR")]
    Error,
}

/// State of the backing `songs.json` file as seen by the health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Connected,
    Disconnected,
    Error,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub message: String,
    /// ISO 8601 with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`
    pub timestamp: String,
    pub database: DatabaseStatus,
}

impl HealthResponse {
    pub fn new(database: DatabaseStatus, message: impl Into<String>) -> Self {
        let status = match database {
            DatabaseStatus::Connected => ServiceStatus::Ok,
            DatabaseStatus::Disconnected | DatabaseStatus::Error => ServiceStatus::Error,
        };

        Self {
            status,
            message: message.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            database,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn song_uses_camel_case_fields() {
        let song: Song = serde_json::from_value(json!({
            "id": 7,
            "title": "Heroes",
            "artist": "David Bowie",
            "coverPath": "covers/heroes.jpg",
            "songPath": "songs/heroes.mp3",
            "createdAt": "2024-01-02T03:04:05Z"
        }))
        .unwrap();

        assert_eq!(song.cover_path, "covers/heroes.jpg");
        assert_eq!(song.song_path, "songs/heroes.mp3");
        assert!(song.created_at.is_some());
        assert!(song.updated_at.is_none());

        let value = serde_json::to_value(&song).unwrap();
        assert!(value.get("updatedAt").is_none());
        assert_eq!(value["songPath"], "songs/heroes.mp3");
    }

    #[test]
    fn songs_response_counts_entries() {
        let response = SongsResponse::new(vec![json!({"id": 1}), json!({"id": 2})]);
        assert!(response.success);
        assert_eq!(response.count, 2);
    }

    #[test]
    fn health_response_status_follows_database() {
        let ok = serde_json::to_value(HealthResponse::new(DatabaseStatus::Connected, "fine")).unwrap();
        assert_eq!(ok["status"], "OK");
        assert_eq!(ok["database"], "connected");

        let missing =
            serde_json::to_value(HealthResponse::new(DatabaseStatus::Disconnected, "gone")).unwrap();
        assert_eq!(missing["status"], "ERROR");
        assert_eq!(missing["database"], "disconnected");

        let broken = serde_json::to_value(HealthResponse::new(DatabaseStatus::Error, "bad")).unwrap();
        assert_eq!(broken["database"], "error");
    }

    #[test]
    fn health_timestamp_has_millisecond_precision() {
        let response = HealthResponse::new(DatabaseStatus::Connected, "fine");
        let parsed = DateTime::parse_from_rfc3339(&response.timestamp).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
        assert!(response.timestamp.ends_with('Z'));
        // "YYYY-MM-DDTHH:MM:SS.mmmZ"
        assert_eq!(response.timestamp.len(), 24);
    }

    #[test]
    fn not_found_error_maps_to_404() {
        let response = ApiError::NotFound("/nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn serialization_error_maps_to_500() {
        let response = ApiError::Serialization("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Error loading songs: boom");
    }
}
