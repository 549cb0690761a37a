//! # Page Error Type
//!
//! Unified error type surfaced by the page controllers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Client                             │
//! │                                                                         │
//! │  CoreError ────── Validation / BookNotFound ──┐                         │
//! │                                               ├──► PageError ──► UI     │
//! │  ApiError ─────── Rejected / Network ─────────┘    (inline text)        │
//! │                                                                         │
//! │  Every error is recovered locally and rendered inline; none are         │
//! │  fatal, none are retried automatically.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use liber_api::ApiError;
use liber_core::CoreError;

/// Error surfaced by a page controller.
///
/// ## Serialization
/// This is what the embedding UI receives when a page operation fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Book not found: 64af1c"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for inline display
    pub message: String,
}

/// Error codes for page operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Requested entity is not in the shared state
    NotFound,

    /// Local validation failed; no request was made
    ValidationError,

    /// The backend answered with a non-2xx status
    RequestError,

    /// The request never produced a response
    NetworkError,

    /// Anything else (configuration, internal)
    Internal,
}

impl PageError {
    /// Creates a new page error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        PageError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        PageError::new(ErrorCode::NotFound, message)
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        PageError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        PageError::new(ErrorCode::Internal, message)
    }
}

/// Converts domain errors to page errors.
impl From<CoreError> for PageError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::BookNotFound(_) => PageError::not_found(err.to_string()),
            CoreError::Validation(e) => PageError::validation(e.to_string()),
        }
    }
}

/// Converts backend errors to page errors.
impl From<ApiError> for PageError {
    fn from(err: ApiError) -> Self {
        match &err {
            ApiError::Rejected { .. } => {
                PageError::new(ErrorCode::RequestError, err.user_message())
            }
            ApiError::Network(_) => PageError::new(ErrorCode::NetworkError, err.user_message()),
            ApiError::InvalidBaseUrl(_) | ApiError::ConfigLoad(_) => {
                PageError::internal(err.to_string())
            }
        }
    }
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for PageError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use liber_core::{BookId, ValidationError};

    #[test]
    fn test_core_error_mapping() {
        let err: PageError = CoreError::BookNotFound(BookId::from("x")).into();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err: PageError = CoreError::Validation(ValidationError::PasswordMismatch).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Passwords do not match");
    }

    #[test]
    fn test_api_error_mapping_keeps_user_message() {
        let err: PageError = ApiError::rejected(409, "Email already exists".into()).into();
        assert_eq!(err.code, ErrorCode::RequestError);
        assert_eq!(err.message, "Email already exists");

        let err: PageError = ApiError::Network("connection refused".into()).into();
        assert_eq!(err.code, ErrorCode::NetworkError);
    }

    #[test]
    fn test_serialized_shape() {
        let err = PageError::not_found("Book not found: x");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Book not found: x");
    }
}
