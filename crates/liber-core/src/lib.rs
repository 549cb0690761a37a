//! # liber-core: Pure Domain Logic for the Liber Client
//!
//! This crate is the **heart** of the Liber book-borrowing client. It contains
//! the domain types and derivations as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Liber Client Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Embedding UI (out of scope)                  │   │
//! │  │    Book Detail Page ──► Signup Page ──► Login Page             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/client (pages + state)                  │   │
//! │  │    BookDetailPage, SignupPage, BookStore, SessionState         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ liber-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  detail   │  │  signup   │  │ validation│  │   │
//! │  │   │   Book    │  │  lookup   │  │   form    │  │   rules   │  │   │
//! │  │   │  Review   │  │  rating   │  │  status   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Book, Review, UserProfile, Session)
//! - [`detail`] - Book detail view derivation (lookup, rating, call-to-action)
//! - [`signup`] - Signup form record and submission status
//! - [`error`] - Domain error types
//! - [`validation`] - Pre-submission validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every derivation is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and shared-state access is FORBIDDEN here
//! 3. **Typed Identifiers**: Book and user ids are normalized at the wire
//!    boundary, compared strictly afterwards
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod detail;
pub mod error;
pub mod signup;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use liber_core::Book` instead of
// `use liber_core::types::Book`

pub use detail::{BookDetailView, BookView, CallToAction};
pub use error::{CoreError, ValidationError};
pub use signup::{SignupField, SignupForm, SubmissionStatus};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of indicator slots in the rating display.
///
/// Ratings are 0-5 stars; the detail view renders exactly this many slots and
/// fills the first `floor(clamp(rating, 0, 5))` of them.
pub const RATING_SLOTS: usize = 5;

/// Route of the login page.
///
/// Used by the unauthenticated call-to-action and by the post-signup redirect.
pub const LOGIN_ROUTE: &str = "/login";

/// Confirmation message shown after a successful signup submission.
pub const SIGNUP_SUCCESS_MESSAGE: &str = "Account created successfully!";

/// Fallback message for a rejected signup when the backend sent no body text.
pub const SIGNUP_FALLBACK_MESSAGE: &str = "Signup failed";
