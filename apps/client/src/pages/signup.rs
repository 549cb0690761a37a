//! # Signup Page
//!
//! Owns the signup form, drives the submission lifecycle, and schedules the
//! post-success redirect.
//!
//! ## Submission Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Signup Page Flow                                     │
//! │                                                                         │
//! │  set_field() ──► form (one named field replaced per call)              │
//! │                                                                         │
//! │  submit()                                                               │
//! │     │                                                                   │
//! │     ├── status not Idle/Failed? ──► ignored (at most one in flight)    │
//! │     │                                                                   │
//! │     ├── passwords differ? ──► Failed("Passwords do not match")         │
//! │     │                         (no network call)                         │
//! │     │                                                                   │
//! │     ├── status = Submitting                                            │
//! │     ├── POST /api/v1/users ──► 2xx ──► Succeeded + deferred redirect   │
//! │     │                    └──► error ─► Failed(message), form editable  │
//! │     └── returns the settled status                                     │
//! │                                                                         │
//! │  Drop ──► pending redirect aborted (no stray navigation after          │
//! │           teardown; an in-flight request result is simply discarded)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use liber_api::BackendClient;
use liber_core::validation::validate_signup;
use liber_core::{
    SignupField, SignupForm, SubmissionStatus, LOGIN_ROUTE, SIGNUP_SUCCESS_MESSAGE,
};

use crate::navigation::Navigator;

/// How long a successful signup lingers before redirecting to login.
pub const SIGNUP_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Controller for the signup page.
///
/// The form and status are local to this instance and die with it; a page
/// that succeeded navigates away instead of resubmitting.
pub struct SignupPage {
    form: SignupForm,
    status: SubmissionStatus,
    client: BackendClient,
    navigator: Arc<dyn Navigator>,
    redirect_delay: Duration,
    redirect: Option<JoinHandle<()>>,
}

impl SignupPage {
    /// Creates an empty signup page.
    pub fn new(client: BackendClient, navigator: Arc<dyn Navigator>) -> Self {
        SignupPage {
            form: SignupForm::new(),
            status: SubmissionStatus::Idle,
            client,
            navigator,
            redirect_delay: SIGNUP_REDIRECT_DELAY,
            redirect: None,
        }
    }

    /// Overrides the redirect delay (tests shorten it).
    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    /// Replaces exactly one named form field, as the user types.
    pub fn set_field(&mut self, field: SignupField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// The current form record.
    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    /// The current submission status.
    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Whether the submit control is enabled.
    ///
    /// Disabled exactly while a submission is in flight, and after success
    /// (the page is about to navigate away).
    pub fn can_submit(&self) -> bool {
        self.status.can_submit()
    }

    /// Runs one submission attempt.
    ///
    /// ## Behavior
    /// - Ignored unless the status allows a new attempt (`Idle`/`Failed`).
    /// - A password mismatch fails locally with the exact message
    ///   "Passwords do not match"; no request is issued.
    /// - Otherwise exactly one request goes out; the settled status is
    ///   `Succeeded` with the fixed confirmation message or `Failed` with
    ///   the backend/network message.
    /// - On success the redirect to the login route is scheduled after the
    ///   configured delay.
    pub async fn submit(&mut self) -> &SubmissionStatus {
        if !self.status.can_submit() {
            warn!(status = ?self.status, "submit ignored; not re-enterable from this state");
            return &self.status;
        }

        if let Err(err) = validate_signup(&self.form) {
            debug!("signup rejected locally");
            self.status = SubmissionStatus::Failed(err.to_string());
            return &self.status;
        }

        self.status = SubmissionStatus::Submitting;

        match self.client.signup(&self.form).await {
            Ok(()) => {
                self.status = SubmissionStatus::Succeeded(SIGNUP_SUCCESS_MESSAGE.to_string());
                self.schedule_redirect();
            }
            Err(err) => {
                self.status = SubmissionStatus::Failed(err.user_message());
            }
        }

        &self.status
    }

    /// Schedules the deferred navigation to the login route.
    fn schedule_redirect(&mut self) {
        let navigator = Arc::clone(&self.navigator);
        let delay = self.redirect_delay;
        self.redirect = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            navigator.navigate(LOGIN_ROUTE);
        }));
    }
}

impl Drop for SignupPage {
    /// A page torn down before the redirect fires must not navigate later.
    fn drop(&mut self) {
        if let Some(redirect) = self.redirect.take() {
            redirect.abort();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
