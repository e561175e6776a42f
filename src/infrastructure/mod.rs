//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides platform path resolution for the persisted store
//! file. It is the only part of the core that knows where on disk the
//! reading list lives by default.

pub mod paths;

pub use paths::{default_store_path, STORE_FILE_NAME};
