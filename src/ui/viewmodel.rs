//! View model types representing the renderable two-section list.
//!
//! This module defines immutable view models computed from the store, following
//! the MVVM pattern. View models are display-ready data for an out-of-scope
//! presentation shell; they contain no business logic and trigger no I/O.
//!
//! The shape mirrors the classic two-section reading list: read books first,
//! unread books second, with a section header shown only when the section has
//! rows.

use crate::domain::BookId;
use crate::storage::Storage;
use crate::store::BookStore;

/// Header title of the read section.
const READ_SECTION_TITLE: &str = "Read Books";

/// Header title of the unread section.
const UNREAD_SECTION_TITLE: &str = "Unread Books";

/// Complete view model for the two-section reading list.
///
/// Sections come in fixed order: read books at index 0, unread books at
/// index 1. Both sections are always present, even when empty, so row
/// coordinates stay stable for the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingListView {
    pub sections: Vec<Section>,
}

/// One section of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Header text, `None` when the section has no rows.
    pub title: Option<String>,

    /// Rows in insertion order.
    pub rows: Vec<BookRow>,
}

/// Display information for a single book row.
///
/// Carries the book's id so the shell can map a selected row straight back to
/// a store operation without holding onto store internals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub id: BookId,
    pub title: String,
    pub reason_to_read: String,
    pub has_been_read: bool,
}

impl ReadingListView {
    /// Computes the view model from the current store state.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use reading_list::{BookStore, ReadingListView};
    ///
    /// let store = BookStore::open_default()?;
    /// let view = ReadingListView::from_store(&store);
    /// assert_eq!(view.sections.len(), 2);
    /// # Ok::<(), reading_list::ReadingListError>(())
    /// ```
    #[must_use]
    pub fn from_store<S: Storage>(store: &BookStore<S>) -> Self {
        let read_rows: Vec<BookRow> = store.read_books().into_iter().map(BookRow::from).collect();
        let unread_rows: Vec<BookRow> =
            store.unread_books().into_iter().map(BookRow::from).collect();

        Self {
            sections: vec![
                Section::new(READ_SECTION_TITLE, read_rows),
                Section::new(UNREAD_SECTION_TITLE, unread_rows),
            ],
        }
    }

    /// Looks up the book id at the given section/row coordinate.
    ///
    /// Returns `None` for out-of-range coordinates.
    #[must_use]
    pub fn book_at(&self, section: usize, row: usize) -> Option<BookId> {
        self.sections
            .get(section)
            .and_then(|s| s.rows.get(row))
            .map(|r| r.id)
    }
}

impl Section {
    fn new(title: &str, rows: Vec<BookRow>) -> Self {
        let title = if rows.is_empty() {
            None
        } else {
            Some(title.to_string())
        };
        Self { title, rows }
    }
}

impl From<crate::domain::Book> for BookRow {
    fn from(book: crate::domain::Book) -> Self {
        Self {
            id: book.id,
            title: book.title,
            reason_to_read: book.reason_to_read,
            has_been_read: book.has_been_read,
        }
    }
}
