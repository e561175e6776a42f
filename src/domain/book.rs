//! Book domain model.
//!
//! This module defines the core `Book` type representing a single reading-list
//! entry, along with its stable identity type [`BookId`]. Books are created
//! unread and mutated in place by the store; identity never changes after
//! creation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a book, assigned once at creation time.
///
/// Kept as a type alias to make semantic intent explicit in signatures. All
/// store lookups go through this id rather than structural equality, so two
/// books with identical title/reason/read-state remain unambiguous.
pub type BookId = Uuid;

/// A single reading-list entry.
///
/// # Fields
///
/// - `id`: immutable unique identity, generated when the book is created
/// - `title`: the book's title (non-empty by caller convention)
/// - `reason_to_read`: free text explaining why the book is on the list
/// - `has_been_read`: read/unread flag, `false` for new books
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub reason_to_read: String,
    pub has_been_read: bool,
}

impl Book {
    /// Creates a new unread book with a generated stable id.
    ///
    /// # Examples
    ///
    /// ```
    /// use reading_list::Book;
    ///
    /// let book = Book::new("Dune", "recommended");
    /// assert_eq!(book.title, "Dune");
    /// assert!(!book.has_been_read);
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, reason_to_read: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, reason_to_read)
    }

    /// Creates a new unread book with a caller-provided stable id.
    ///
    /// Used by tests and decode paths where identity already exists.
    #[must_use]
    pub fn with_id(
        id: BookId,
        title: impl Into<String>,
        reason_to_read: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            reason_to_read: reason_to_read.into(),
            has_been_read: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_book_starts_unread() {
        let book = Book::new("Dune", "recommended");
        assert!(!book.has_been_read);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.reason_to_read, "recommended");
    }

    #[test]
    fn ids_are_unique_even_for_identical_content() {
        let a = Book::new("Dune", "recommended");
        let b = Book::new("Dune", "recommended");
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }

    #[test]
    fn serde_round_trip_preserves_identity_and_content() {
        let book = Book::new("Solaris", "classic");
        let json = serde_json::to_string(&book).unwrap();
        let decoded: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(book, decoded);
    }
}
