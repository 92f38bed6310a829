//! Error taxonomy for TheMealDB client.
//!
//! The set is closed: every failure a fetch can produce maps to one of
//! these variants, and stores render the `Display` description into their
//! error state. The client never retries; recovery is a caller-issued
//! retry intent.

use thiserror::Error;

/// Errors returned by `MealDbClient` operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NetworkError {
    /// Endpoint construction produced a malformed URL. Not reachable under
    /// normal parameter values.
    #[error("Invalid URL")]
    InvalidUrl,

    /// The response was not recognized as a valid HTTP response.
    #[error("No data received")]
    NoData,

    /// The server answered with a status outside 200-299.
    #[error("Server error with code: {0}")]
    ServerError(u16),

    /// The payload did not match the expected shape.
    #[error("Failed to decode response")]
    Decoding,

    /// Any other transport failure, carrying the underlying description.
    #[error("{0}")]
    Unknown(String),
}

impl NetworkError {
    /// Short stable code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::InvalidUrl => "E_API_URL",
            NetworkError::NoData => "E_API_NO_DATA",
            NetworkError::ServerError(_) => "E_API_STATUS",
            NetworkError::Decoding => "E_API_DECODE",
            NetworkError::Unknown(_) => "E_API_OTHER",
        }
    }
}
