//! Error types for the API client.
//!
//! The client distinguishes transport failures, backend-reported errors
//! (an HTTP error status, with the backend's `detail` string when one
//! was present), and undecodable response bodies. Views mostly render
//! these as a single message string, but the distinction is kept in the
//! type.

use serde::Deserialize;
use thiserror::Error;

/// Result type for API client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS
    /// failure, broken transfer).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with an error status.
    #[error("{detail}")]
    Backend { status: u16, detail: String },

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The HTTP status the backend answered with, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The error body shape FastAPI-style backends produce.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Build a [`ApiError::Backend`] from an error response body.
///
/// Decodes `{"detail": "..."}` when possible, otherwise falls back to
/// the status's canonical reason text.
pub(crate) fn backend_error(status: reqwest::StatusCode, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.detail)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
    ApiError::Backend {
        status: status.as_u16(),
        detail,
    }
}
