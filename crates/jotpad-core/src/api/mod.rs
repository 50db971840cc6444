//! Notes service REST contract.
//!
//! [`NotesApi`] is the seam between the view state and the transport; the
//! production implementation is [`HttpNotesApi`].

mod http;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{Note, NoteId, NotePayload};

pub use http::{Credentials, HttpNotesApi};

/// How a failed request is handled by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 401 from the service: the session is gone, go back to login
    AuthExpired,
    /// Anything else: network failure, non-auth 4xx/5xx, malformed body
    OperationFailed,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 401. On notes calls the session is gone; on `POST /auth/login`
    /// the credentials were rejected. Callers map it to their own wording.
    #[error("Unauthorized (HTTP 401)")]
    Unauthorized,
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to parse JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Notes API error: {0}")]
    Api(String),
    #[error("Invalid API configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl ApiError {
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Unauthorized => FailureKind::AuthExpired,
            _ => FailureKind::OperationFailed,
        }
    }

    #[must_use]
    pub const fn is_auth_expired(&self) -> bool {
        matches!(self.kind(), FailureKind::AuthExpired)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Operations the notes screen issues against the service.
///
/// Success bodies of mutations are ignored; the caller refetches the list.
#[allow(async_fn_in_trait)]
pub trait NotesApi {
    /// `GET /notes`, server order preserved
    async fn list_notes(&self) -> ApiResult<Vec<Note>>;

    /// `POST /notes`
    async fn create_note(&self, payload: &NotePayload) -> ApiResult<()>;

    /// `PATCH /notes/{id}`
    async fn update_note(&self, id: &NoteId, payload: &NotePayload) -> ApiResult<()>;

    /// `DELETE /notes/{id}`
    async fn delete_note(&self, id: &NoteId) -> ApiResult<()>;

    /// `POST /auth/logout`
    async fn logout(&self) -> ApiResult<()>;
}

/// Trim and validate an API base URL, dropping any trailing slash.
pub fn normalize_api_url(url: &str) -> ApiResult<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ApiError::InvalidConfiguration(
            "API base URL must not be empty",
        ));
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ApiError::InvalidConfiguration(
            "API base URL must include http:// or https://",
        ));
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
    error: Option<String>,
}

/// Human-readable message for a failed response, suffixed with the status code.
fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ErrorResponse>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let compacted: String = body.trim().chars().take(180).collect();
    if compacted.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", compacted, status.as_u16())
    }
}
