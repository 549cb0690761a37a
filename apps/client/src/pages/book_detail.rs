//! # Book Detail Page
//!
//! Orchestrates the detail view for one requested book.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Book Detail Page                                     │
//! │                                                                         │
//! │  External fetch ──► BookStore::publish ──► watch channel               │
//! │                                                │                        │
//! │        BookDetailPage::changed().await ◄───────┘                        │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │  view() = derive(snapshot.books, book_id, session.snapshot())          │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │  Found { title, rating slots, call-to-action, reviews } | NotFound     │
//! │                                                                         │
//! │  borrow_book() ──► Action::Borrow ──► action pipeline (result unseen)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The page holds no derived state of its own: every `view()` call re-derives
//! from the current snapshots, so re-rendering with an unchanged collection
//! is a no-op by construction.

use tokio::sync::watch;
use tracing::debug;

use liber_core::{BookDetailView, BookId, CallToAction, CoreError};

use crate::actions::{Action, ActionSender};
use crate::error::PageError;
use crate::state::{BookStore, BooksSnapshot, SessionState};

/// Controller for the detail view of one book.
pub struct BookDetailPage {
    book_id: BookId,
    books: watch::Receiver<BooksSnapshot>,
    session: SessionState,
    actions: ActionSender,
}

impl BookDetailPage {
    /// Creates the page for a book identifier taken from navigation context.
    pub fn new(
        book_id: BookId,
        store: &BookStore,
        session: SessionState,
        actions: ActionSender,
    ) -> Self {
        BookDetailPage {
            book_id,
            books: store.subscribe(),
            session,
            actions,
        }
    }

    /// The identifier this page was opened for.
    pub fn book_id(&self) -> &BookId {
        &self.book_id
    }

    /// Derives the current view from the latest snapshots.
    pub fn view(&self) -> BookDetailView {
        let snapshot = self.books.borrow().clone();
        BookDetailView::derive(&snapshot.books, &self.book_id, &self.session.snapshot())
    }

    /// Waits for the next book collection update.
    ///
    /// Returns false if the store was dropped; the current snapshot stays
    /// usable either way.
    pub async fn changed(&mut self) -> bool {
        self.books.changed().await.is_ok()
    }

    /// Dispatches a borrow request for this book.
    ///
    /// Only legal when the derived call-to-action is the actionable borrow
    /// control: never for an unauthenticated session, an unavailable book,
    /// or the fallback view. Dispatch causes no local state change; the
    /// pipeline owns success and failure handling.
    pub fn borrow_book(&self) -> Result<(), PageError> {
        let view = self.view();
        let Some(book) = view.book() else {
            return Err(CoreError::BookNotFound(self.book_id.clone()).into());
        };

        match &book.call_to_action {
            CallToAction::Borrow { book_id } => {
                debug!(%book_id, "borrow requested");
                self.actions.dispatch(Action::Borrow {
                    book_id: book_id.clone(),
                });
                Ok(())
            }
            CallToAction::Unavailable { .. } => {
                Err(PageError::validation("Book is not available to borrow"))
            }
            CallToAction::LoginRedirect { .. } => {
                Err(PageError::validation("Log in to borrow books"))
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
