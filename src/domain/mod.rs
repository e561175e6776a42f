//! Domain layer for the reading list core.
//!
//! This module contains the core domain types, independent of persistence or
//! presentation concerns. Business rules stay isolated here from external
//! dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: Book domain model and identity

pub mod book;
pub mod error;

pub use book::{Book, BookId};
pub use error::{ReadingListError, Result};
