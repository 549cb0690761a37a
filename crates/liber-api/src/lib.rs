//! # liber-api: Backend HTTP Client
//!
//! The one outbound network surface of the Liber client: configuration for
//! the backend base URL and the reqwest-based client that submits signups to
//! `POST {base}/api/v1/users`.
//!
//! ## Modules
//!
//! - [`config`] - Base URL and timeout configuration (TOML file + env)
//! - [`client`] - The HTTP client
//! - [`error`] - API error taxonomy (rejection vs. network vs. config)

pub mod client;
pub mod config;
pub mod error;

pub use client::{BackendClient, USERS_PATH};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
