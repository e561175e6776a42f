//! Storage layer for the persisted book collection.
//!
//! This module provides the persistence seam between the in-memory store and
//! its on-disk representation. The file is rewritten wholesale on every
//! mutation and read wholesale once at startup.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction for backend implementations
//! - `json`: JSON file-based storage implementation

pub mod backend;
pub mod json;

pub use backend::Storage;
pub use json::JsonStorage;
