//! View model layer consumed by the presentation shell.
//!
//! Rendering itself lives outside this crate; the shell asks for a
//! [`ReadingListView`] and draws it however it likes. Everything here is pure
//! computation over store state.

pub mod viewmodel;

pub use viewmodel::{BookRow, ReadingListView, Section};
