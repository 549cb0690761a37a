//! # API Error Types
//!
//! Error types for backend requests.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       API Error Categories                              │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │    Transport    │  │      Rejection          │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidBaseUrl │  │  Network        │  │  Rejected               │ │
//! │  │  ConfigLoad     │  │  (request threw)│  │  (non-2xx + body text)  │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rejection and transport failures surface identically to the user as
//! inline text and are never retried automatically; the distinction exists
//! for logging and tests.

use thiserror::Error;

use liber_core::SIGNUP_FALLBACK_MESSAGE;

/// Result type alias for backend operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Backend request failures.
#[derive(Debug, Error)]
pub enum ApiError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// The configured base URL is not a usable http(s) URL.
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// Failed to load the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoad(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request itself failed: connection refused, DNS, timeout.
    #[error("Network error: {0}")]
    Network(String),

    // =========================================================================
    // Rejection
    // =========================================================================
    /// The backend answered with a non-2xx status. `message` is the response
    /// body text when non-empty, otherwise the generic fallback.
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

impl ApiError {
    /// Builds the rejection for a non-2xx response.
    ///
    /// An empty or whitespace-only body falls back to the generic signup
    /// failure message.
    pub fn rejected(status: u16, body: String) -> Self {
        let message = if body.trim().is_empty() {
            SIGNUP_FALLBACK_MESSAGE.to_string()
        } else {
            body
        };
        ApiError::Rejected { status, message }
    }

    /// Returns true if the request never produced a response.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Returns true if the backend answered and said no.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }

    /// The inline text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidBaseUrl(err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::ConfigLoad(err.to_string())
    }
}

impl From<toml::de::Error> for ApiError {
    fn from(err: toml::de::Error) -> Self {
        ApiError::ConfigLoad(err.to_string())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
