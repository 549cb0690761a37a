//! # Error Types
//!
//! Domain-specific error types for liber-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  liber-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Pre-submission validation failures             │
//! │                                                                         │
//! │  liber-api errors (separate crate)                                     │
//! │  └── ApiError         - Backend request failures                       │
//! │                                                                         │
//! │  Page errors (in app)                                                  │
//! │  └── PageError        - What the embedding UI sees (serialized)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → PageError → inline user text      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing book is NOT an error value: the detail view degrades to its
//! fallback instead. `BookNotFound` only surfaces when an action is attempted
//! against the fallback view.

use thiserror::Error;

use crate::types::BookId;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An action was attempted for a book that is not in the shared
    /// collection (or the collection has not loaded).
    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    /// Validation error (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Pre-submission validation failures.
///
/// The only rule that gates a signup submission locally is the password
/// confirmation; every other field constraint is enforced by the embedding
/// UI or the backend.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Password and confirmation disagree. The message text is part of the
    /// UI contract and must not change.
    #[error("Passwords do not match")]
    PasswordMismatch,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
