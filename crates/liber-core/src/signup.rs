//! # Signup Form
//!
//! The signup form record and its submission status.
//!
//! ## Submission State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Signup Submission Lifecycle                          │
//! │                                                                         │
//! │                 submit()                 2xx response                   │
//! │   ┌──────────┐ ────────► ┌────────────┐ ────────────► ┌───────────┐    │
//! │   │   Idle   │           │ Submitting │               │ Succeeded │    │
//! │   └──────────┘           └─────┬──────┘               └───────────┘    │
//! │        ▲                       │ non-2xx / network error               │
//! │        │                       ▼                                        │
//! │        │                 ┌────────────┐                                 │
//! │        └──── (new form)  │   Failed   │ ──── submit() ──► Submitting   │
//! │                          └────────────┘                                 │
//! │                                                                         │
//! │  Submitting is re-enterable only from Idle or Failed. While            │
//! │  Submitting, the submit control is disabled, so at most one            │
//! │  submission is in flight per form instance.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Signup Form
// =============================================================================

/// Mutable record of the signup fields.
///
/// All fields are free text and start empty. The record doubles as the
/// request body for `POST /api/v1/users`: the serde attributes pin the
/// camelCase wire names, and `confirmPassword` is submitted verbatim
/// alongside the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

/// Names of the individual form fields.
///
/// Used to address exactly one field per update, mirroring a per-keystroke
/// edit in the embedding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl SignupForm {
    /// An empty form.
    pub fn new() -> Self {
        SignupForm::default()
    }

    /// Replaces the value of exactly one named field.
    ///
    /// All other fields are left untouched.
    pub fn set(&mut self, field: SignupField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SignupField::FirstName => self.first_name = value,
            SignupField::LastName => self.last_name = value,
            SignupField::Email => self.email = value,
            SignupField::Phone => self.phone = value,
            SignupField::Password => self.password = value,
            SignupField::ConfirmPassword => self.confirm_password = value,
        }
    }

    /// Returns true if password and confirmation agree.
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}

// =============================================================================
// Submission Status
// =============================================================================

/// Status of the signup submission, tracked alongside the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "state", content = "message")]
pub enum SubmissionStatus {
    /// No submission attempted yet.
    #[default]
    Idle,

    /// A submission is in flight; the submit control is disabled.
    Submitting,

    /// The backend accepted the submission.
    Succeeded(String),

    /// The submission was rejected locally or by the backend. The form
    /// stays editable for a manual retry.
    Failed(String),
}

impl SubmissionStatus {
    /// Returns true while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    /// Returns true if a new submission may start from this state.
    ///
    /// Only `Idle` and `Failed` allow entering `Submitting`; a successful
    /// form is about to navigate away and never resubmits.
    pub fn can_submit(&self) -> bool {
        matches!(self, SubmissionStatus::Idle | SubmissionStatus::Failed(_))
    }

    /// The user-facing message carried by this state, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Succeeded(msg) | SubmissionStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_exactly_one_field() {
        let mut form = SignupForm::new();
        form.set(SignupField::FirstName, "Ann");
        form.set(SignupField::Email, "ann@x.com");

        assert_eq!(form.first_name, "Ann");
        assert_eq!(form.email, "ann@x.com");
        assert_eq!(form.last_name, "");
        assert_eq!(form.password, "");

        form.set(SignupField::FirstName, "Anna");
        assert_eq!(form.first_name, "Anna");
        assert_eq!(form.email, "ann@x.com");
    }

    #[test]
    fn test_passwords_match() {
        let mut form = SignupForm::new();
        assert!(form.passwords_match()); // both empty

        form.set(SignupField::Password, "p1");
        assert!(!form.passwords_match());

        form.set(SignupField::ConfirmPassword, "p1");
        assert!(form.passwords_match());
    }

    #[test]
    fn test_form_serializes_with_wire_names() {
        let form = SignupForm {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@x.com".to_string(),
            phone: "555".to_string(),
            password: "p1".to_string(),
            confirm_password: "p1".to_string(),
        };

        let body = serde_json::to_value(&form).unwrap();
        assert_eq!(body["firstName"], "Ann");
        assert_eq!(body["lastName"], "Lee");
        assert_eq!(body["email"], "ann@x.com");
        assert_eq!(body["phone"], "555");
        assert_eq!(body["password"], "p1");
        // Sent verbatim; the backend contract includes it.
        assert_eq!(body["confirmPassword"], "p1");
    }

    #[test]
    fn test_status_transitions() {
        assert!(SubmissionStatus::Idle.can_submit());
        assert!(SubmissionStatus::Failed("nope".into()).can_submit());

        assert!(!SubmissionStatus::Submitting.can_submit());
        assert!(SubmissionStatus::Submitting.is_submitting());

        let done = SubmissionStatus::Succeeded("ok".into());
        assert!(!done.can_submit());
        assert_eq!(done.message(), Some("ok"));
        assert_eq!(SubmissionStatus::Idle.message(), None);
    }
}
