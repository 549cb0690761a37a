//! # Domain Types
//!
//! Core domain types shared between the pages and the backend wire format.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Book       │   │     Review      │   │   UserProfile   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (BookId)    │   │  author (fName) │   │  id (optional)  │       │
//! │  │  title, author  │   │  title          │   │  first_name     │       │
//! │  │  avg_rating     │   │  description    │   │  last_name      │       │
//! │  │  is_available   │   │  rating         │   │  email          │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! The backend delivers Mongo-style documents: entity ids arrive as `_id`,
//! review authors as a populated `userId` object, and field names in
//! camelCase. The serde attributes below pin that contract so these types can
//! be deserialized straight from the book endpoints.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Book Identifier
// =============================================================================

/// Typed book identifier.
///
/// ## Boundary Normalization
/// The backend and the navigation layer disagree on representation: route
/// parameters are strings while some payloads carry numeric ids. Instead of
/// comparing loosely at every lookup, the id is normalized to its string form
/// once, when it enters the system. Every comparison after that is strict.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BookId(String);

impl BookId {
    /// Creates an identifier from its canonical string form.
    pub fn new(id: impl Into<String>) -> Self {
        BookId(id.into())
    }

    /// Returns the canonical string form.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        BookId(id.to_string())
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        BookId(id)
    }
}

impl<'de> Deserialize<'de> for BookId {
    /// Accepts both JSON strings and JSON numbers.
    ///
    /// Numeric ids are folded into their decimal string form so that a book
    /// delivered with `"_id": 42` still matches a route parameter of `"42"`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => BookId(id),
            RawId::Number(id) => BookId(id.to_string()),
        })
    }
}

// =============================================================================
// Book
// =============================================================================

/// A book in the shared collection.
///
/// Owned by shared application state; the detail view only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier (wire name `_id`).
    #[serde(rename = "_id")]
    pub id: BookId,

    /// Display title.
    pub title: String,

    /// Author name.
    pub author: String,

    /// Publication year.
    pub year: i32,

    /// Average rating across reviews, 0-5. May be fractional.
    pub avg_rating: f32,

    /// Whether the book can currently be borrowed.
    pub is_available: bool,

    /// Label describing when an unavailable book is expected back.
    #[serde(default)]
    pub expected_available: Option<String>,

    /// Cover image reference.
    #[serde(default)]
    pub thumbnail: Option<String>,

    /// Reviews in backend order.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

// =============================================================================
// Review
// =============================================================================

/// A reader review embedded within a [`Book`].
///
/// Immutable from the client's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Review author (wire name `userId`, populated by the backend).
    #[serde(rename = "userId")]
    pub author: ReviewAuthor,

    /// Review headline.
    pub title: String,

    /// Free-text body.
    pub description: String,

    /// Rating given by this reviewer, 0-5.
    pub rating: f32,
}

/// The subset of the reviewing user the backend embeds in a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAuthor {
    /// Author first name (wire name `fName`).
    #[serde(rename = "fName")]
    pub first_name: String,
}

// =============================================================================
// User / Session
// =============================================================================

/// Profile of the authenticated user, as delivered by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique identifier (wire name `_id`). Present iff the user is known
    /// to the backend.
    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    /// First name (wire name `fName`).
    #[serde(rename = "fName", default)]
    pub first_name: String,

    /// Last name (wire name `lName`).
    #[serde(rename = "lName", default)]
    pub last_name: String,

    /// Account email.
    #[serde(default)]
    pub email: String,
}

/// Read-only snapshot of the authentication state.
///
/// ## Invariant
/// A session is authenticated iff the user carries a non-empty identifier.
/// The detail view must never offer borrow actions to an unauthenticated
/// session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated user, absent when logged out.
    pub user: Option<UserProfile>,
}

impl Session {
    /// A logged-out session.
    pub fn anonymous() -> Self {
        Session { user: None }
    }

    /// A session for the given user.
    pub fn authenticated(user: UserProfile) -> Self {
        Session { user: Some(user) }
    }

    /// Returns true if a user with an identifier is present.
    pub fn is_authenticated(&self) -> bool {
        self.user
            .as_ref()
            .and_then(|u| u.id.as_deref())
            .is_some_and(|id| !id.is_empty())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_from_string_payload() {
        let id: BookId = serde_json::from_str(r#""64af1c""#).unwrap();
        assert_eq!(id.as_str(), "64af1c");
    }

    #[test]
    fn test_book_id_from_numeric_payload() {
        let id: BookId = serde_json::from_str("42").unwrap();
        assert_eq!(id, BookId::from("42"));
    }

    #[test]
    fn test_book_deserializes_backend_document() {
        let payload = r#"{
            "_id": "64af1c",
            "title": "Clean Code",
            "author": "Robert C. Martin",
            "year": 2008,
            "avgRating": 4.5,
            "isAvailable": true,
            "thumbnail": "https://covers.example/clean-code.jpg",
            "reviews": [
                {
                    "userId": { "fName": "Ann" },
                    "title": "Great",
                    "description": "Changed how I name things.",
                    "rating": 5.0
                }
            ]
        }"#;

        let book: Book = serde_json::from_str(payload).unwrap();
        assert_eq!(book.id, BookId::from("64af1c"));
        assert_eq!(book.title, "Clean Code");
        assert!(book.is_available);
        assert_eq!(book.expected_available, None);
        assert_eq!(book.reviews.len(), 1);
        assert_eq!(book.reviews[0].author.first_name, "Ann");
    }

    #[test]
    fn test_book_tolerates_missing_optional_fields() {
        let payload = r#"{
            "_id": 7,
            "title": "Untitled",
            "author": "Unknown",
            "year": 1999,
            "avgRating": 0.0,
            "isAvailable": false
        }"#;

        let book: Book = serde_json::from_str(payload).unwrap();
        assert_eq!(book.id, BookId::from("7"));
        assert!(book.reviews.is_empty());
        assert_eq!(book.thumbnail, None);
    }

    #[test]
    fn test_session_authentication() {
        assert!(!Session::anonymous().is_authenticated());

        let with_id = Session::authenticated(UserProfile {
            id: Some("u-1".to_string()),
            first_name: "Ann".to_string(),
            ..UserProfile::default()
        });
        assert!(with_id.is_authenticated());

        // A profile without an identifier does not count as logged in.
        let without_id = Session::authenticated(UserProfile::default());
        assert!(!without_id.is_authenticated());

        let empty_id = Session::authenticated(UserProfile {
            id: Some(String::new()),
            ..UserProfile::default()
        });
        assert!(!empty_id.is_authenticated());
    }
}
