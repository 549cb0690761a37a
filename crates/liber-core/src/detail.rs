//! # Book Detail Derivation
//!
//! Derives the renderable description of a single book from the shared
//! collection: lookup by identifier, the five-slot rating display, the
//! call-to-action branch, and the review sequence.
//!
//! ## Call-to-Action Decision Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   authenticated │ available │ branch                                    │
//! │   ───────────── │ ───────── │ ────────────────────────────────────────  │
//! │       yes       │    yes    │ Borrow        (actionable)                │
//! │       yes       │    no     │ Unavailable   (disabled, expected label)  │
//! │       no        │    -      │ LoginRedirect (navigation only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Exactly one branch holds for every `(authenticated, available)` pair.
//!
//! Everything here is a pure function of its inputs: deriving twice from the
//! same collection and identifier yields the same view and no side effects.

use crate::types::{Book, BookId, Review, Session};
use crate::{LOGIN_ROUTE, RATING_SLOTS};

// =============================================================================
// Lookup
// =============================================================================

/// Finds the first book whose identifier equals the requested one.
///
/// An empty or not-yet-loaded collection yields `None`, which renders as the
/// fallback view.
pub fn find_book<'a>(books: &'a [Book], id: &BookId) -> Option<&'a Book> {
    books.iter().find(|book| book.id == *id)
}

// =============================================================================
// Rating Display
// =============================================================================

/// Derives the five indicator slots for an average rating.
///
/// Slot `i` is filled iff `i` is below the rating truncated toward zero, so
/// the filled count is `floor(clamp(rating, 0, 5))`: a 4.5 average lights
/// four slots, never a partial fifth.
pub fn rating_slots(avg_rating: f32) -> [bool; RATING_SLOTS] {
    let filled = filled_slots(avg_rating);
    let mut slots = [false; RATING_SLOTS];
    for (i, slot) in slots.iter_mut().enumerate() {
        *slot = i < filled;
    }
    slots
}

/// Number of filled slots for an average rating.
pub fn filled_slots(avg_rating: f32) -> usize {
    avg_rating.clamp(0.0, RATING_SLOTS as f32).floor() as usize
}

// =============================================================================
// Call to Action
// =============================================================================

/// The single action control shown on the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallToAction {
    /// Actionable borrow control; invoking it dispatches a borrow request
    /// for this book into the action pipeline.
    Borrow { book_id: BookId },

    /// Disabled control showing when the book is expected back.
    Unavailable { expected: Option<String> },

    /// Navigation control that redirects to the login route.
    LoginRedirect { route: &'static str },
}

impl CallToAction {
    /// Decides the branch for a session/book pair.
    pub fn decide(session: &Session, book: &Book) -> Self {
        if !session.is_authenticated() {
            return CallToAction::LoginRedirect { route: LOGIN_ROUTE };
        }
        if book.is_available {
            CallToAction::Borrow {
                book_id: book.id.clone(),
            }
        } else {
            CallToAction::Unavailable {
                expected: book.expected_available.clone(),
            }
        }
    }

    /// Returns true for the actionable borrow branch.
    pub fn is_borrowable(&self) -> bool {
        matches!(self, CallToAction::Borrow { .. })
    }
}

// =============================================================================
// Derived View
// =============================================================================

/// Renderable description of the requested book, or the fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum BookDetailView {
    /// The requested book was found in the shared collection.
    Found(BookView),

    /// No book matched, or the collection has not loaded yet.
    NotFound,
}

impl BookDetailView {
    /// Derives the view for one identifier from the current snapshots.
    ///
    /// The book data is frozen into the view at derivation time, so the
    /// result stays consistent even if the shared collection is replaced
    /// afterwards. Re-deriving from unchanged inputs is a no-op in effect:
    /// the same view comes back.
    pub fn derive(books: &[Book], id: &BookId, session: &Session) -> Self {
        match find_book(books, id) {
            Some(book) => BookDetailView::Found(BookView::from_book(book, session)),
            None => BookDetailView::NotFound,
        }
    }

    /// The found view, if any.
    pub fn book(&self) -> Option<&BookView> {
        match self {
            BookDetailView::Found(view) => Some(view),
            BookDetailView::NotFound => None,
        }
    }
}

/// The fields of a found book, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct BookView {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub avg_rating: f32,
    pub rating_slots: [bool; RATING_SLOTS],
    pub thumbnail: Option<String>,
    pub call_to_action: CallToAction,
    reviews: Vec<Review>,
}

impl BookView {
    fn from_book(book: &Book, session: &Session) -> Self {
        BookView {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year,
            avg_rating: book.avg_rating,
            rating_slots: rating_slots(book.avg_rating),
            thumbnail: book.thumbnail.clone(),
            call_to_action: CallToAction::decide(session, book),
            reviews: book.reviews.clone(),
        }
    }

    /// Lazy, finite, restartable sequence over the book's reviews.
    ///
    /// Each call starts from the first review. Zero reviews iterates empty;
    /// the view renders no placeholder in that case.
    pub fn reviews(&self) -> impl Iterator<Item = &Review> {
        self.reviews.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
