//! Error types for the reading list core.
//!
//! This module defines the centralized error type [`ReadingListError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All errors
//! are implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.

use thiserror::Error;

/// The main error type for reading list operations.
///
/// Exactly two failure kinds exist in this core, both tied to the persisted
/// file. The store recovers from both locally (logged and swallowed), so these
/// errors surface only through the storage layer's `Result`s, never through
/// store mutation methods.
///
/// # Examples
///
/// ```
/// use reading_list::ReadingListError;
///
/// fn read_store_file() -> Result<(), ReadingListError> {
///     Err(ReadingListError::Load("file contained invalid JSON".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum ReadingListError {
    /// Loading the persisted collection failed.
    ///
    /// Occurs when the file exists but cannot be read or decoded. A missing
    /// file is not an error; the storage layer treats it as an empty
    /// collection. The string contains a description of what went wrong.
    #[error("failed to load reading list: {0}")]
    Load(String),

    /// Saving the persisted collection failed.
    ///
    /// Occurs when the filesystem rejects the full-file rewrite. The string
    /// contains a description of what went wrong.
    #[error("failed to save reading list: {0}")]
    Save(String),
}

/// A specialized `Result` type for reading list operations.
///
/// This is a type alias for `std::result::Result<T, ReadingListError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, ReadingListError>;
