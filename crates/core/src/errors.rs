//! Core error types for the price refresher.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (HTTP, token exchange, etc.) are converted to these types by the storage
//! layer.
//!
//! Quote failures never show up here: price resolution recovers from them
//! locally. Everything in this module is fatal to a run.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the price refresher.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Invalid service credential: {0}")]
    Credential(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for database operations.
///
/// Uses `String` for all details so the storage layer can convert its own
/// error types into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The database could not be reached.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// The session could not be authenticated or was rejected.
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// A read or write was rejected by the database.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// A payload could not be encoded or decoded.
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Database(DatabaseError::SerializationFailed(err.to_string()))
    }
}
