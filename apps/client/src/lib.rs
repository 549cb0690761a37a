//! # Liber Client Library
//!
//! Headless page orchestration for the Liber book-borrowing client.
//!
//! ## Module Organization
//! ```text
//! liber_client/
//! ├── lib.rs          ◄─── You are here (wiring & demo entry)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Shared book collection (watch channel)
//! │   └── session.rs  ◄─── Authenticated user snapshot
//! ├── pages/
//! │   ├── mod.rs      ◄─── Page exports
//! │   ├── book_detail.rs  ◄─── Detail derivation + borrow dispatch
//! │   └── signup.rs   ◄─── Form state machine + submission
//! ├── actions.rs      ◄─── Borrow intent pipeline (mpsc)
//! ├── navigation.rs   ◄─── Navigator seam (/login redirects)
//! └── error.rs        ◄─── Page error type for the embedding UI
//! ```

pub mod actions;
pub mod error;
pub mod navigation;
pub mod pages;
pub mod state;

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use liber_api::{ApiConfig, BackendClient};
use liber_core::{Book, BookId, SignupField, UserProfile};

use actions::ActionSender;
use error::PageError;
use navigation::TracingNavigator;
use pages::{BookDetailPage, SignupPage};
use state::{BookStore, SessionState};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=liber=trace` - Show trace for liber crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,liber=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Runs the demo wiring: seeds a store, derives the detail view, and walks
/// the signup validation path. Stands in for the embedding UI so the page
/// layer can be exercised from a terminal.
pub async fn run() -> Result<(), PageError> {
    info!("Starting Liber client demo");

    let config = ApiConfig::load_or_default(None);
    let client = BackendClient::new(&config)?;
    info!(base_url = %client.base_url(), "backend client ready");

    let store = BookStore::new();
    let session = SessionState::new();
    let (actions, mut action_rx) = ActionSender::channel();

    // Demo stand-in for the external action pipeline.
    tokio::spawn(async move {
        while let Some(action) = action_rx.recv().await {
            info!(?action, "action pipeline received intent");
        }
    });

    // Demo stand-in for the external collaborator that fetches books.
    store.publish(demo_books());

    let page = BookDetailPage::new(BookId::from("demo-1"), &store, session.clone(), actions);

    let view = page.view();
    info!(?view, "derived detail view (anonymous)");

    session.login(UserProfile {
        id: Some("demo-user".to_string()),
        first_name: "Demo".to_string(),
        ..UserProfile::default()
    });

    let view = page.view();
    info!(?view, "derived detail view (authenticated)");
    page.borrow_book()?;

    // Signup validation path; nothing leaves the process.
    let mut signup = SignupPage::new(client.clone(), Arc::new(TracingNavigator));
    signup.set_field(SignupField::Password, "p1");
    signup.set_field(SignupField::ConfirmPassword, "p2");
    let status = signup.submit().await;
    info!(?status, "signup with mismatched passwords settles locally");

    Ok(())
}

fn demo_books() -> Vec<Book> {
    vec![Book {
        id: BookId::from("demo-1"),
        title: "Clean Code".to_string(),
        author: "Robert C. Martin".to_string(),
        year: 2008,
        avg_rating: 4.5,
        is_available: true,
        expected_available: None,
        thumbnail: None,
        reviews: Vec::new(),
    }]
}
