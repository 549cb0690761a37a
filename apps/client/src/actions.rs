//! # Action Pipeline
//!
//! Intents dispatched by the pages into the external action pipeline.
//!
//! The pipeline receives an intent (e.g. "borrow book X"), performs the side
//! effect, and updates shared state elsewhere. Dispatch is fire-and-forget:
//! the pages never observe the result.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use liber_core::BookId;

/// An intent for the external pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Request to borrow the given book for the authenticated user.
    Borrow { book_id: BookId },
}

/// Sending half of the action pipeline, held by the pages.
#[derive(Debug, Clone)]
pub struct ActionSender {
    tx: mpsc::UnboundedSender<Action>,
}

impl ActionSender {
    /// Creates the pipeline, returning the sender for the pages and the
    /// receiver for the external dispatcher.
    pub fn channel() -> (ActionSender, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (ActionSender { tx }, rx)
    }

    /// Submits an intent.
    ///
    /// Success and failure handling are the pipeline's responsibility; if
    /// the receiving side is gone, the intent is dropped with a warning.
    pub fn dispatch(&self, action: Action) {
        debug!(?action, "dispatching action");
        if self.tx.send(action).is_err() {
            warn!("action pipeline closed; intent dropped");
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
