//! JSON file-based storage backend.
//!
//! This module provides a simple, human-readable storage implementation using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(n) - loads and decodes the entire file
//! - **Write**: O(n) - serializes and writes the entire collection
//! - **Best for**: small personal collections, infrequent writes

use crate::domain::error::{ReadingListError, Result};
use crate::domain::Book;
use crate::storage::backend::Storage;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk. Wraps the book sequence
/// in a single versioned object for better JSON structure and future
/// extensibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format.
    version: u32,

    /// The full ordered book sequence.
    #[serde(default)]
    books: Vec<Book>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            books: Vec::new(),
        }
    }
}

/// JSON file storage backend.
///
/// Stores the book collection in a human-readable JSON file with atomic
/// writes. The whole file is rewritten on every save; nothing is appended.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "books": [
///     {
///       "id": "5f6c0d2e-...",
///       "title": "Dune",
///       "reason_to_read": "recommended",
///       "has_been_read": false
///     }
///   ]
/// }
/// ```
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,
}

impl JsonStorage {
    /// Creates a JSON storage backend at the given path.
    ///
    /// The file itself is not touched until the first save; parent directories
    /// are created up front so later writes only contend with the file.
    ///
    /// # Errors
    ///
    /// Returns [`ReadingListError::Load`] if parent directory creation fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use reading_list::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/ReadingList.json"))?;
    /// # Ok::<(), reading_list::ReadingListError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ReadingListError::Load(format!(
                    "failed to create data directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        Ok(Self { file_path })
    }

    /// Returns the path this backend reads from and writes to.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.file_path
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Result<Vec<Book>> {
        let _span = tracing::debug_span!("json_load", path = ?self.file_path).entered();

        if !self.file_path.exists() {
            tracing::debug!("no persisted file, starting empty");
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.file_path)
            .map_err(|e| ReadingListError::Load(format!("failed to read file: {e}")))?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| ReadingListError::Load(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            book_count = data.books.len(),
            "loaded persisted books"
        );

        Ok(data.books)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        let _span = tracing::debug_span!("json_save", count = books.len()).entered();

        let data = StorageData {
            version: 1,
            books: books.to_vec(),
        };
        let json = serde_json::to_string_pretty(&data)
            .map_err(|e| ReadingListError::Save(format!("failed to serialize JSON: {e}")))?;

        // Write to a temporary file first, then rename over the target, so the
        // persisted file is never left half-written.
        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)
            .map_err(|e| ReadingListError::Save(format!("failed to write temp file: {e}")))?;
        std::fs::rename(&tmp_path, &self.file_path)
            .map_err(|e| ReadingListError::Save(format!("failed to replace file: {e}")))?;

        tracing::debug!(path = ?self.file_path, "collection saved");
        Ok(())
    }
}
