//! # Liber Client Entry Point
//!
//! Terminal entry for the headless client. The embedding UI normally drives
//! the page layer directly; this binary wires the demo flow in `lib.rs` so
//! the pages can be exercised standalone.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load API configuration (client.toml + LIBER_API_* overrides)
//! 3. Seed demo state and derive the detail view
//! 4. Walk the signup validation path

use tracing::error;

#[tokio::main]
async fn main() {
    liber_client::init_tracing();

    if let Err(err) = liber_client::run().await {
        error!(%err, "demo run failed");
        std::process::exit(1);
    }
}
