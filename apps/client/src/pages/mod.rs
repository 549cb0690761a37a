//! # Pages Module
//!
//! The page controllers of the client.
//!
//! ## Page Organization
//! ```text
//! pages/
//! ├── mod.rs          ◄─── You are here (exports)
//! ├── book_detail.rs  ◄─── Detail view derivation + borrow dispatch
//! └── signup.rs       ◄─── Form state, submission, deferred redirect
//! ```
//!
//! A page controller owns its local state (signup form, submission status)
//! and reads everything else as snapshots of shared state. It exposes derived
//! views and operations; rendering belongs to the embedding UI.

pub mod book_detail;
pub mod signup;

pub use book_detail::BookDetailPage;
pub use signup::SignupPage;
