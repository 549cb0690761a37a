//! # Backend Client
//!
//! The reqwest-based HTTP client for the Liber backend.
//!
//! ## Signup Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Signup Submission                                  │
//! │                                                                         │
//! │  SignupPage ──► BackendClient::signup(form)                            │
//! │                      │                                                  │
//! │                      │  POST {base}/api/v1/users                        │
//! │                      │  Content-Type: application/json                  │
//! │                      │  {firstName, lastName, email, phone,             │
//! │                      │   password, confirmPassword}                     │
//! │                      ▼                                                  │
//! │                 ┌─────────┐                                             │
//! │                 │ Backend │                                             │
//! │                 └────┬────┘                                             │
//! │         2xx ◄────────┼────────► non-2xx          request threw          │
//! │       Ok(())         │    Rejected{status, body}  Network(message)      │
//! │   (body ignored)     │    (empty body → fallback)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Exactly one request is issued per call. The client never retries; a
//! failure is reported back and the caller decides what the user sees.

use std::time::Duration;

use tracing::{debug, info, warn};
use url::Url;

use liber_core::SignupForm;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Path of the user-registration endpoint, joined onto the base URL.
pub const USERS_PATH: &str = "/api/v1/users";

/// HTTP client for the Liber backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    /// Creates a client for the configured backend.
    ///
    /// Fails if the base URL is invalid or the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let base_url = config.parsed_base_url()?;

        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(BackendClient { http, base_url })
    }

    /// Submits a signup form to `POST {base}/api/v1/users`.
    ///
    /// ## Behavior
    /// - Issues exactly one request; no retry on any failure.
    /// - 2xx: success, the response body is ignored.
    /// - non-2xx: `ApiError::Rejected` carrying the response body text, or
    ///   the generic fallback when the body is empty.
    /// - transport failure: `ApiError::Network` with the underlying message.
    ///
    /// The form is serialized verbatim, `confirmPassword` included; the
    /// backend contract expects the full record.
    pub async fn signup(&self, form: &SignupForm) -> ApiResult<()> {
        let url = self.base_url.join(USERS_PATH)?;
        debug!(%url, "submitting signup");

        let response = self.http.post(url).json(form).send().await?;
        let status = response.status();

        if status.is_success() {
            info!(status = status.as_u16(), "signup accepted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "signup rejected");
        Err(ApiError::rejected(status.as_u16(), body))
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::extract::Json;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::Router;
    use liber_core::{SignupField, SignupForm};
    use tokio::sync::mpsc;

    fn test_form() -> SignupForm {
        let mut form = SignupForm::new();
        form.set(SignupField::FirstName, "Ann");
        form.set(SignupField::LastName, "Lee");
        form.set(SignupField::Email, "ann@x.com");
        form.set(SignupField::Phone, "555");
        form.set(SignupField::Password, "p1");
        form.set(SignupField::ConfirmPassword, "p1");
        form
    }

    fn client_for(base_url: String) -> BackendClient {
        let config = ApiConfig {
            base_url,
            ..ApiConfig::default()
        };
        BackendClient::new(&config).unwrap()
    }

    /// Serves `app` on an ephemeral local port and returns the base URL.
    async fn spawn_backend(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_signup_accepts_2xx_and_sends_full_record() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let app = Router::new().route(
            USERS_PATH,
            post(move |Json(body): Json<serde_json::Value>| {
                let tx = tx.clone();
                async move {
                    tx.send(body).ok();
                    StatusCode::CREATED
                }
            }),
        );

        let client = client_for(spawn_backend(app).await);
        client.signup(&test_form()).await.unwrap();

        let body = rx.recv().await.unwrap();
        assert_eq!(body["firstName"], "Ann");
        assert_eq!(body["lastName"], "Lee");
        assert_eq!(body["email"], "ann@x.com");
        assert_eq!(body["phone"], "555");
        assert_eq!(body["password"], "p1");
        assert_eq!(body["confirmPassword"], "p1");
    }

    #[tokio::test]
    async fn test_signup_surfaces_rejection_body() {
        let app = Router::new().route(
            USERS_PATH,
            post(|| async { (StatusCode::CONFLICT, "Email already exists") }),
        );

        let client = client_for(spawn_backend(app).await);
        let err = client.signup(&test_form()).await.unwrap_err();

        match err {
            ApiError::Rejected { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "Email already exists");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_signup_falls_back_on_empty_rejection_body() {
        let app = Router::new().route(
            USERS_PATH,
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );

        let client = client_for(spawn_backend(app).await);
        let err = client.signup(&test_form()).await.unwrap_err();
        assert_eq!(err.user_message(), "Signup failed");
    }

    #[tokio::test]
    async fn test_signup_maps_transport_failure_to_network_error() {
        // Grab an ephemeral port, then close the listener so nothing answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}", addr));
        let err = client.signup(&test_form()).await.unwrap_err();
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_signup_issues_exactly_one_request_per_call() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let app = Router::new().route(
            USERS_PATH,
            post(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    (StatusCode::BAD_GATEWAY, "upstream down")
                }
            }),
        );

        let client = client_for(spawn_backend(app).await);
        let err = client.signup(&test_form()).await.unwrap_err();
        assert!(err.is_rejection());

        // A failure is reported, not retried.
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
