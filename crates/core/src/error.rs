//! Error types for the EasySportsPass client
//!
//! This module provides unified error handling across the client crates:
//! normalized backend errors, transport failures, client-side validation
//! errors, and storage/serialization errors.

use serde_json::Value;
use thiserror::Error;

/// The main error type for the EasySportsPass client
#[derive(Debug, Error)]
pub enum AppError {
    // ========================================================================
    // Backend Errors
    // ========================================================================
    /// The backend answered with a non-2xx status. Carries the server's
    /// human-readable message, the HTTP status, and the raw response payload.
    #[error("{message}")]
    Server {
        message: String,
        status: u16,
        payload: Option<Value>,
    },

    /// No response was received at all (connection refused, DNS, offline).
    #[error("Please try again.")]
    Network,

    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A single form field failed its validation rule
    #[error("Field validation failed for '{field}': {message}")]
    FieldValidation { field: String, message: String },

    // ========================================================================
    // Client-side Errors
    // ========================================================================
    /// Browser local-storage read/write failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Session state error (e.g. an operation requiring a token without one)
    #[error("Session error: {0}")]
    Session(String),

    /// Operation cancelled by the user (confirmation dialog dismissed)
    #[error("Operation cancelled")]
    Cancelled,

    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a normalized backend error from a status code and message
    pub fn server(message: impl Into<String>, status: u16, payload: Option<Value>) -> Self {
        AppError::Server {
            message: message.into(),
            status,
            payload,
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    /// Create a field validation error
    pub fn field_validation(field: impl Into<String>, msg: impl Into<String>) -> Self {
        AppError::FieldValidation {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        AppError::Storage(msg.into())
    }

    /// Create a session error
    pub fn session(msg: impl Into<String>) -> Self {
        AppError::Session(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Check if this error came from the backend (a response was received)
    pub fn is_server(&self) -> bool {
        matches!(self, AppError::Server { .. })
    }

    /// Check if this error is a transport failure (no response received)
    pub fn is_network(&self) -> bool {
        matches!(self, AppError::Network)
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::FieldValidation { .. }
        )
    }

    /// HTTP status of the failing response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for showing to the user, with `fallback` used when
    /// the server did not provide one.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Server { message, .. } if !message.is_empty() => message.clone(),
            AppError::Network => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_server_error() {
        let err = AppError::server("Country already exists", 409, None);
        assert!(err.is_server());
        assert!(!err.is_network());
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.to_string(), "Country already exists");
    }

    #[test]
    fn test_network_error_message() {
        let err = AppError::Network;
        assert!(err.is_network());
        assert_eq!(err.to_string(), "Please try again.");
        assert_eq!(err.user_message("fallback"), "Please try again.");
    }

    #[test]
    fn test_user_message_prefers_server_message() {
        let err = AppError::server("Invalid credentials", 401, None);
        assert_eq!(err.user_message("Login failed."), "Invalid credentials");
    }

    #[test]
    fn test_user_message_falls_back_when_server_message_empty() {
        let err = AppError::server("", 500, None);
        assert_eq!(err.user_message("Login failed."), "Login failed.");
    }

    #[test]
    fn test_validation_errors() {
        let err = AppError::field_validation("cityName", "City Name is required");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Field validation failed for 'cityName': City Name is required"
        );
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_internal_fallback_message() {
        let err = AppError::internal("signal poisoned");
        assert_eq!(err.user_message("Something went wrong"), "Something went wrong");
    }
}
