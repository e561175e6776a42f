//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait that abstracts over different
//! persistence backends. This keeps the store's collection logic independent of
//! the on-disk format and lets tests substitute in-memory or failure-injecting
//! backends.
//!
//! # Design Philosophy
//!
//! The trait is deliberately minimal: the persisted file is always rewritten
//! wholesale and always read wholesale, so the seam is just load/save of the
//! full ordered sequence. There is no per-record API.

use crate::domain::error::Result;
use crate::domain::Book;

/// Abstraction over persistent storage backends.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic
///   full-file rewrites (default)
///
/// # Examples
///
/// ```no_run
/// use reading_list::storage::{JsonStorage, Storage};
/// use std::path::PathBuf;
///
/// let storage = JsonStorage::new(PathBuf::from("/tmp/ReadingList.json"))?;
/// let books = storage.load()?;
/// # Ok::<(), reading_list::ReadingListError>(())
/// ```
pub trait Storage {
    /// Loads the full persisted collection in insertion order.
    ///
    /// A missing file is not an error; it yields an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ReadingListError::Load`](crate::ReadingListError::Load) if the
    /// persisted state exists but cannot be read or decoded.
    fn load(&self) -> Result<Vec<Book>>;

    /// Rewrites the full persisted collection.
    ///
    /// The entire sequence is written on every call; there is no append path.
    ///
    /// # Errors
    ///
    /// Returns [`ReadingListError::Save`](crate::ReadingListError::Save) if the
    /// write fails.
    fn save(&mut self, books: &[Book]) -> Result<()>;
}
