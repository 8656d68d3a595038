//! Storage-specific error types for the Realtime Database client.
//!
//! These errors are internal to the storage layer and are converted to
//! `pricecache_core::Error` before being returned to callers.

use pricecache_core::errors::{DatabaseError, Error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid service account: {0}")]
    Credential(String),

    #[error("Failed to sign token assertion: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Database session is closed")]
    SessionClosed,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    /// Builds a status error, preferring the `{"error": "..."}` message the
    /// database puts in its body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| body.trim().to_string());
        StorageError::Status { status, message }
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Credential(message) => Error::Credential(message),
            StorageError::Signing(e) => Error::Credential(e.to_string()),
            StorageError::TokenExchange(message) => {
                Error::Database(DatabaseError::AuthenticationFailed(message))
            }
            StorageError::Http(e) => Error::Database(DatabaseError::ConnectionFailed(e.to_string())),
            StorageError::Status { status, message } if status == 401 || status == 403 => {
                Error::Database(DatabaseError::AuthenticationFailed(format!(
                    "HTTP {}: {}",
                    status, message
                )))
            }
            StorageError::Status { status, message } => Error::Database(
                DatabaseError::QueryFailed(format!("HTTP {}: {}", status, message)),
            ),
            StorageError::SessionClosed => Error::Database(DatabaseError::ConnectionFailed(
                "session is closed".to_string(),
            )),
            StorageError::Serialization(e) => {
                Error::Database(DatabaseError::SerializationFailed(e.to_string()))
            }
        }
    }
}
