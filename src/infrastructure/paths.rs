//! Path resolution for the persisted reading list file.
//!
//! This module locates the user-local application data directory through the
//! `directories` crate and anchors the fixed-name store file inside it. Tests
//! and embedders bypass this entirely by handing an explicit path to
//! [`JsonStorage`](crate::storage::JsonStorage).

use crate::domain::error::{ReadingListError, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Fixed name of the persisted store file.
pub const STORE_FILE_NAME: &str = "ReadingList.json";

/// Resolves the default path of the persisted store file.
///
/// The file lives in the platform data directory for this application, e.g.
/// `~/.local/share/reading-list/ReadingList.json` on Linux or
/// `~/Library/Application Support/reading-list/ReadingList.json` on macOS.
/// The directory is not created here; the storage backend does that.
///
/// # Errors
///
/// Returns [`ReadingListError::Load`] if no home directory can be located.
///
/// # Examples
///
/// ```no_run
/// use reading_list::infrastructure::default_store_path;
///
/// let path = default_store_path()?;
/// assert!(path.ends_with("ReadingList.json"));
/// # Ok::<(), reading_list::ReadingListError>(())
/// ```
pub fn default_store_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "reading-list").ok_or_else(|| {
        ReadingListError::Load("could not locate a user data directory".to_string())
    })?;
    Ok(dirs.data_dir().join(STORE_FILE_NAME))
}
