//! # Validation Module
//!
//! Pre-submission validation for the signup form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Embedding UI                                                 │
//! │  ├── Required fields, email/phone input types                          │
//! │  └── Native form constraints, immediate feedback                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (before any network call)                        │
//! │  └── Password confirmation                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend (POST /api/v1/users)                                 │
//! │  └── Uniqueness, format, persistence constraints                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Layer 2 is deliberately narrow: a mismatch fails fast with no request
//! issued, everything else is the concern of the layers around it.

use crate::error::ValidationError;
use crate::signup::SignupForm;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a signup form immediately before submission.
///
/// ## Rules
/// - password and confirmPassword must agree
///
/// ## Example
/// ```rust
/// use liber_core::signup::{SignupField, SignupForm};
/// use liber_core::validation::validate_signup;
///
/// let mut form = SignupForm::new();
/// form.set(SignupField::Password, "p1");
/// form.set(SignupField::ConfirmPassword, "p2");
/// assert!(validate_signup(&form).is_err());
/// ```
pub fn validate_signup(form: &SignupForm) -> ValidationResult<()> {
    if !form.passwords_match() {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signup::SignupField;

    #[test]
    fn test_validate_signup_accepts_matching_passwords() {
        let mut form = SignupForm::new();
        form.set(SignupField::Password, "p1");
        form.set(SignupField::ConfirmPassword, "p1");
        assert!(validate_signup(&form).is_ok());
    }

    #[test]
    fn test_validate_signup_rejects_mismatch() {
        let mut form = SignupForm::new();
        form.set(SignupField::Password, "p1");
        form.set(SignupField::ConfirmPassword, "p2");
        assert_eq!(
            validate_signup(&form),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_validate_signup_ignores_other_fields() {
        // Empty names, email, and phone pass: those constraints belong to
        // the embedding UI and the backend.
        let form = SignupForm::new();
        assert!(validate_signup(&form).is_ok());
    }
}
