//! The book collection owner and its persistence policy.
//!
//! This module defines [`BookStore`], the single source of truth for both the
//! in-memory book sequence and the on-disk file. The store loads once at
//! construction, keeps books in insertion order, and rewrites the full file
//! synchronously after every mutation.
//!
//! # Persistence Policy
//!
//! Persistence is best-effort by design: a load failure logs an error and
//! starts the store empty, and a save failure logs an error and leaves the
//! in-memory state authoritative for the rest of the process lifetime. Callers
//! of mutation methods never receive an error value.
//!
//! # Lookup Semantics
//!
//! All mutations locate their target by [`BookId`], never by field values, so
//! two books with identical content stay unambiguous. A mutation aimed at an
//! id that is not in the store is a silent no-op.

use crate::domain::{Book, BookId};
use crate::storage::{JsonStorage, Storage};
use std::path::PathBuf;

/// Sole owner of the book collection and its persisted representation.
///
/// Generic over the storage backend so tests can substitute in-memory or
/// failure-injecting implementations; production use goes through
/// [`BookStore::open`] with the JSON file backend.
///
/// # Examples
///
/// ```no_run
/// use reading_list::BookStore;
/// use std::path::PathBuf;
///
/// let mut store = BookStore::open(PathBuf::from("/tmp/ReadingList.json"))?;
/// let book = store.create("Dune", "recommended");
/// store.toggle_read(book.id);
/// assert_eq!(store.read_books().len(), 1);
/// # Ok::<(), reading_list::ReadingListError>(())
/// ```
pub struct BookStore<S: Storage> {
    /// Persistence backend, written after every mutation.
    storage: S,

    /// The full ordered collection, loaded once at construction.
    books: Vec<Book>,
}

impl BookStore<JsonStorage> {
    /// Opens a store backed by a JSON file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error only if the file's parent directory cannot be created.
    /// A missing file starts the store empty, and an unreadable or corrupt
    /// file is logged and also starts the store empty; neither is an error.
    pub fn open(path: PathBuf) -> crate::Result<Self> {
        Ok(Self::with_storage(JsonStorage::new(path)?))
    }

    /// Opens a store backed by `ReadingList.json` in the user-local data
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be located or the data
    /// directory cannot be created.
    pub fn open_default() -> crate::Result<Self> {
        Self::open(crate::infrastructure::default_store_path()?)
    }
}

impl<S: Storage> BookStore<S> {
    /// Creates a store over an arbitrary backend, loading the persisted
    /// collection once.
    ///
    /// Load failures are logged and yield an empty store; this constructor
    /// never fails and never panics on corrupt state.
    pub fn with_storage(storage: S) -> Self {
        let books = match storage.load() {
            Ok(books) => books,
            Err(e) => {
                tracing::error!(error = %e, "could not load persisted books, starting empty");
                Vec::new()
            }
        };

        tracing::debug!(book_count = books.len(), "book store initialized");
        Self { storage, books }
    }

    /// Returns the full collection in insertion order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the number of books in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns `true` if the store holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Looks up a single book by id.
    #[must_use]
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Returns copies of all books marked as read, in insertion order.
    ///
    /// Pure and recomputed on every call; there is no cached index.
    #[must_use]
    pub fn read_books(&self) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| b.has_been_read)
            .cloned()
            .collect()
    }

    /// Returns copies of all books not yet read, in insertion order.
    ///
    /// Pure and recomputed on every call; there is no cached index.
    #[must_use]
    pub fn unread_books(&self) -> Vec<Book> {
        self.books
            .iter()
            .filter(|b| !b.has_been_read)
            .cloned()
            .collect()
    }

    /// Creates a new unread book, appends it to the end of the collection,
    /// persists, and returns a copy of the created record.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        reason_to_read: impl Into<String>,
    ) -> Book {
        let book = Book::new(title, reason_to_read);
        let _span = tracing::debug_span!("create_book",
            book_id = %book.id,
            title = %book.title
        )
        .entered();

        self.books.push(book.clone());
        self.persist();
        book
    }

    /// Removes the book with the given id, if present, and persists.
    ///
    /// An absent id is a silent no-op.
    pub fn delete(&mut self, id: BookId) {
        let _span = tracing::debug_span!("delete_book", book_id = %id).entered();

        let Some(index) = self.position(id) else {
            tracing::debug!("book not found, nothing to delete");
            return;
        };

        self.books.remove(index);
        self.persist();
    }

    /// Flips the read/unread flag of the book with the given id, if present,
    /// and persists.
    ///
    /// An absent id is a silent no-op.
    pub fn toggle_read(&mut self, id: BookId) {
        let _span = tracing::debug_span!("toggle_read", book_id = %id).entered();

        let Some(index) = self.position(id) else {
            tracing::debug!("book not found, nothing to toggle");
            return;
        };

        self.books[index].has_been_read = !self.books[index].has_been_read;
        self.persist();
    }

    /// Replaces the title and reason of the book with the given id, if
    /// present, and persists. The read/unread flag is unchanged.
    ///
    /// An absent id is a silent no-op.
    pub fn update(
        &mut self,
        id: BookId,
        title: impl Into<String>,
        reason_to_read: impl Into<String>,
    ) {
        let _span = tracing::debug_span!("update_book", book_id = %id).entered();

        let Some(index) = self.position(id) else {
            tracing::debug!("book not found, nothing to update");
            return;
        };

        self.books[index].title = title.into();
        self.books[index].reason_to_read = reason_to_read.into();
        self.persist();
    }

    /// Index of the book with the given id in the ordered sequence.
    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    /// Rewrites the persisted file from the in-memory collection.
    ///
    /// Save failures are logged and swallowed; the in-memory state stays
    /// authoritative either way.
    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.books) {
            tracing::error!(error = %e, "could not persist books, keeping in-memory state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ReadingListError, Result};
    use std::collections::HashSet;
    use tempfile::tempdir;
    use uuid::Uuid;

    /// In-memory backend for exercising store logic without the filesystem.
    #[derive(Default)]
    struct MemoryStorage {
        books: Vec<Book>,
    }

    impl Storage for MemoryStorage {
        fn load(&self) -> Result<Vec<Book>> {
            Ok(self.books.clone())
        }

        fn save(&mut self, books: &[Book]) -> Result<()> {
            self.books = books.to_vec();
            Ok(())
        }
    }

    /// Backend whose loads succeed but whose saves always fail.
    struct WriteRejectingStorage;

    impl Storage for WriteRejectingStorage {
        fn load(&self) -> Result<Vec<Book>> {
            Ok(Vec::new())
        }

        fn save(&mut self, _books: &[Book]) -> Result<()> {
            Err(ReadingListError::Save("disk full".to_string()))
        }
    }

    /// Backend whose load always fails, as if the file were corrupt.
    struct CorruptStorage;

    impl Storage for CorruptStorage {
        fn load(&self) -> Result<Vec<Book>> {
            Err(ReadingListError::Load("bad bytes".to_string()))
        }

        fn save(&mut self, _books: &[Book]) -> Result<()> {
            Ok(())
        }
    }

    fn memory_store() -> BookStore<MemoryStorage> {
        BookStore::with_storage(MemoryStorage::default())
    }

    #[test]
    fn create_appends_unread_book_last() {
        let mut store = memory_store();
        store.create("A", "x");
        let book = store.create("Dune", "recommended");

        assert!(!book.has_been_read);
        assert_eq!(store.books().last().unwrap().id, book.id);
        assert!(store.unread_books().iter().any(|b| b.id == book.id));
        assert!(!store.read_books().iter().any(|b| b.id == book.id));
    }

    #[test]
    fn read_and_unread_views_partition_the_collection() {
        let mut store = memory_store();
        let a = store.create("A", "x");
        store.create("B", "y");
        let c = store.create("C", "z");
        store.toggle_read(a.id);
        store.toggle_read(c.id);

        let read_ids: HashSet<BookId> = store.read_books().iter().map(|b| b.id).collect();
        let unread_ids: HashSet<BookId> = store.unread_books().iter().map(|b| b.id).collect();
        let all_ids: HashSet<BookId> = store.books().iter().map(|b| b.id).collect();

        assert!(read_ids.is_disjoint(&unread_ids));
        assert_eq!(
            read_ids.union(&unread_ids).copied().collect::<HashSet<_>>(),
            all_ids
        );
    }

    #[test]
    fn views_preserve_insertion_order() {
        let mut store = memory_store();
        let a = store.create("A", "x");
        let b = store.create("B", "y");
        let c = store.create("C", "z");
        store.toggle_read(b.id);

        let unread: Vec<BookId> = store.unread_books().iter().map(|x| x.id).collect();
        assert_eq!(unread, vec![a.id, c.id]);
        let read: Vec<BookId> = store.read_books().iter().map(|x| x.id).collect();
        assert_eq!(read, vec![b.id]);
    }

    #[test]
    fn toggle_twice_restores_original_flag() {
        let mut store = memory_store();
        let book = store.create("A", "x");

        store.toggle_read(book.id);
        assert!(store.get(book.id).unwrap().has_been_read);
        store.toggle_read(book.id);
        assert!(!store.get(book.id).unwrap().has_been_read);
    }

    #[test]
    fn update_replaces_fields_but_not_read_flag() {
        let mut store = memory_store();
        let book = store.create("Draft", "tbd");
        store.toggle_read(book.id);

        store.update(book.id, "Dune", "recommended");

        let updated = store.get(book.id).unwrap();
        assert_eq!(updated.title, "Dune");
        assert_eq!(updated.reason_to_read, "recommended");
        assert!(updated.has_been_read);
    }

    #[test]
    fn mutations_on_absent_id_leave_collection_unchanged() {
        let mut store = memory_store();
        store.create("A", "x");
        let before = store.books().to_vec();

        let ghost = Uuid::new_v4();
        store.delete(ghost);
        store.toggle_read(ghost);
        store.update(ghost, "B", "y");

        assert_eq!(store.books(), before.as_slice());
    }

    #[test]
    fn delete_targets_by_id_not_content() {
        let mut store = memory_store();
        let first = store.create("Dune", "recommended");
        let second = store.create("Dune", "recommended");

        store.delete(second.id);

        assert_eq!(store.len(), 1);
        assert_eq!(store.books()[0].id, first.id);
    }

    #[test]
    fn corrupt_load_starts_empty_without_panicking() {
        let store = BookStore::with_storage(CorruptStorage);
        assert!(store.is_empty());
    }

    #[test]
    fn save_failure_keeps_in_memory_state_authoritative() {
        let mut store = BookStore::with_storage(WriteRejectingStorage);
        let book = store.create("A", "x");
        store.toggle_read(book.id);

        assert_eq!(store.len(), 1);
        assert!(store.get(book.id).unwrap().has_been_read);
    }

    #[test]
    fn mutations_persist_through_the_backend() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ReadingList.json");

        let mut store = BookStore::open(path.clone()).unwrap();
        let a = store.create("A", "x");
        store.create("B", "y");
        store.toggle_read(a.id);

        let reloaded = BookStore::open(path).unwrap();
        assert_eq!(reloaded.books(), store.books());
    }
}
