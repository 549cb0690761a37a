//! # Book Store
//!
//! Shared, read-only snapshot of the book collection.
//!
//! The collection is owned elsewhere: an external collaborator fetches the
//! books and calls [`BookStore::publish`]. Pages hold a receiver, read
//! snapshots, and re-derive their views when a new snapshot lands. The page
//! core never mutates the collection.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::debug;

use liber_core::Book;

/// One published state of the book collection.
///
/// Snapshots are cheap to clone: the book list itself is behind an `Arc`.
/// The version increases with every publish, so two snapshots with the same
/// version are the same collection.
#[derive(Debug, Clone)]
pub struct BooksSnapshot {
    /// Books in backend order.
    pub books: Arc<Vec<Book>>,

    /// Publish counter; 0 means nothing has been published yet.
    pub version: u64,

    /// When this snapshot was published.
    pub refreshed_at: DateTime<Utc>,
}

impl BooksSnapshot {
    fn empty() -> Self {
        BooksSnapshot {
            books: Arc::new(Vec::new()),
            version: 0,
            refreshed_at: Utc::now(),
        }
    }

    /// Returns true until the first publish.
    pub fn is_loaded(&self) -> bool {
        self.version > 0
    }
}

/// Publish/subscribe store for the shared book collection.
///
/// ## Thread Safety
/// Backed by a `tokio::sync::watch` channel: writers replace the snapshot,
/// readers borrow it lock-free. Receivers created via [`BookStore::subscribe`]
/// wake whenever a new snapshot is published.
#[derive(Debug, Clone)]
pub struct BookStore {
    tx: Arc<watch::Sender<BooksSnapshot>>,
}

impl BookStore {
    /// Creates a store with an unloaded (empty, version 0) collection.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(BooksSnapshot::empty());
        BookStore { tx: Arc::new(tx) }
    }

    /// Replaces the collection with a freshly fetched one.
    ///
    /// Called by the external collaborator that owns the data; every
    /// subscriber is notified.
    pub fn publish(&self, books: Vec<Book>) {
        self.tx.send_modify(|snapshot| {
            snapshot.books = Arc::new(books);
            snapshot.version += 1;
            snapshot.refreshed_at = Utc::now();
        });
        debug!(
            version = self.tx.borrow().version,
            count = self.tx.borrow().books.len(),
            "book collection published"
        );
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> BooksSnapshot {
        self.tx.borrow().clone()
    }

    /// Subscribes to collection updates.
    pub fn subscribe(&self) -> watch::Receiver<BooksSnapshot> {
        self.tx.subscribe()
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use liber_core::BookId;

    fn test_book(id: &str) -> Book {
        Book {
            id: BookId::from(id),
            title: format!("Book {}", id),
            author: "Author".to_string(),
            year: 2020,
            avg_rating: 3.0,
            is_available: true,
            expected_available: None,
            thumbnail: None,
            reviews: Vec::new(),
        }
    }

    #[test]
    fn test_store_starts_unloaded() {
        let store = BookStore::new();
        let snapshot = store.snapshot();
        assert!(!snapshot.is_loaded());
        assert!(snapshot.books.is_empty());
    }

    #[test]
    fn test_publish_bumps_version() {
        let store = BookStore::new();
        store.publish(vec![test_book("a")]);
        store.publish(vec![test_book("a"), test_book("b")]);

        let snapshot = store.snapshot();
        assert!(snapshot.is_loaded());
        assert_eq!(snapshot.version, 2);
        assert_eq!(snapshot.books.len(), 2);
    }

    #[tokio::test]
    async fn test_subscribers_wake_on_publish() {
        let store = BookStore::new();
        let mut rx = store.subscribe();

        store.publish(vec![test_book("a")]);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().books.len(), 1);
    }
}
