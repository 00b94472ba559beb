//! Error handling module for the relief console.
//!
//! Provides the centralized error type with stable codes and the user-facing
//! notice text shown for each failure category.

use std::fmt;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const SERVER_ERROR: &str = "SERVER_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const DECLINED: &str = "DECLINED";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const IO_ERROR: &str = "IO_ERROR";
}

/// Console error type.
#[derive(Debug)]
pub enum ConsoleError {
    /// Login rejected with 401
    InvalidCredentials,
    /// Authenticated call rejected with 401, or no session present
    Unauthorized(String),
    /// Request never reached the backend
    Network(String),
    /// Backend answered with a non-2xx status
    Server { status: u16, message: String },
    /// Local input validation failed
    Validation(String),
    /// The admin declined a confirmation prompt
    Declined(String),
    /// Session store failure
    Storage(String),
    /// Response body could not be decoded
    Decode(String),
    /// Local file failure
    Io(String),
}

impl ConsoleError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConsoleError::InvalidCredentials => codes::INVALID_CREDENTIALS,
            ConsoleError::Unauthorized(_) => codes::UNAUTHORIZED,
            ConsoleError::Network(_) => codes::NETWORK_ERROR,
            ConsoleError::Server { .. } => codes::SERVER_ERROR,
            ConsoleError::Validation(_) => codes::VALIDATION_ERROR,
            ConsoleError::Declined(_) => codes::DECLINED,
            ConsoleError::Storage(_) => codes::STORAGE_ERROR,
            ConsoleError::Decode(_) => codes::DECODE_ERROR,
            ConsoleError::Io(_) => codes::IO_ERROR,
        }
    }

    /// Get the message shown to the admin.
    pub fn message(&self) -> String {
        match self {
            ConsoleError::InvalidCredentials => "Invalid email or password".to_string(),
            ConsoleError::Unauthorized(msg) => msg.clone(),
            ConsoleError::Network(msg) => {
                format!("Unable to connect to server. Please try again later. ({})", msg)
            }
            ConsoleError::Server { status, message } if message.is_empty() => {
                format!("Server error: {}", status)
            }
            ConsoleError::Server { status, message } => {
                format!("Server error: {} ({})", status, message)
            }
            ConsoleError::Validation(msg) => msg.clone(),
            ConsoleError::Declined(msg) => msg.clone(),
            ConsoleError::Storage(msg) => msg.clone(),
            ConsoleError::Decode(msg) => msg.clone(),
            ConsoleError::Io(msg) => msg.clone(),
        }
    }

    /// Map a non-2xx HTTP status to an error.
    ///
    /// Login uses [`ConsoleError::InvalidCredentials`] for 401 instead.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        if status == 401 {
            ConsoleError::Unauthorized(
                "Session rejected by server. Please log in again.".to_string(),
            )
        } else {
            ConsoleError::Server {
                status,
                message: message.into(),
            }
        }
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ConsoleError {}

impl From<reqwest::Error> for ConsoleError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("HTTP error: {:?}", err);
        if err.is_decode() {
            ConsoleError::Decode(format!("Malformed response: {}", err))
        } else if let Some(status) = err.status() {
            ConsoleError::from_status(status.as_u16(), err.to_string())
        } else {
            ConsoleError::Network(err.to_string())
        }
    }
}

impl From<sqlx::Error> for ConsoleError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Session store error: {:?}", err);
        ConsoleError::Storage(format!("Session store error: {}", err))
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ConsoleError::Decode(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O error: {:?}", err);
        ConsoleError::Io(format!("I/O error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_status_maps_to_session_message() {
        let err = ConsoleError::from_status(401, "nope");
        assert_eq!(err.error_code(), codes::UNAUTHORIZED);
        assert!(err.message().contains("log in again"));
    }

    #[test]
    fn test_server_status_message_includes_code() {
        let err = ConsoleError::from_status(503, "");
        assert_eq!(err.error_code(), codes::SERVER_ERROR);
        assert_eq!(err.message(), "Server error: 503");
    }

    #[test]
    fn test_network_message_mentions_connection() {
        let err = ConsoleError::Network("connection refused".to_string());
        assert!(err.message().starts_with("Unable to connect to server"));
    }

    #[test]
    fn test_display_prefixes_code() {
        let err = ConsoleError::Validation("Latitude must be between -90 and 90".to_string());
        assert_eq!(
            err.to_string(),
            "VALIDATION_ERROR: Latitude must be between -90 and 90"
        );
    }
}
