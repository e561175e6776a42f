//! Reading List: a single-user book-tracking core.
//!
//! This crate stores a small collection of book records (title, reason to
//! read, read/unread flag), persists them to a local JSON file, and exposes
//! filtered read/unread views with add/edit/delete/toggle operations. The
//! on-screen rendering is out of scope; a presentation shell consumes the
//! store through a small contract and the optional view-model layer.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation Shell (external)                      │  ← Out of scope
//! └─────────────────────────────────────────────────────┘
//!          │                              │
//! ┌───────────────────┐        ┌───────────────────────┐
//! │ View Models (ui/) │        │ Store Layer (store/)  │  ← Single owner
//! │ - Two sections    │◄───────│ - Collection CRUD     │
//! │ - Row → id map    │        │ - Persistence policy  │
//! └───────────────────┘        └───────────────────────┘
//!                                         │
//!                              ┌───────────────────────┐
//!                              │ Storage Layer         │
//!                              │ (storage/)            │
//!                              │ - Storage trait       │
//!                              │ - JSON file backend   │
//!                              └───────────────────────┘
//!                                         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Book model (domain/book)                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Core domain types (Book, errors)
//! - [`store`]: The `BookStore` collection owner
//! - [`storage`]: JSON file persistence with atomic full-file rewrites
//! - [`ui`]: Immutable view models for the two-section list
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`observability`]: Tracing subscriber setup
//!
//! # Persistence Model
//!
//! One file, `ReadingList.json` in the user-local data directory, rewritten
//! wholesale after every mutation. Persistence is best-effort: a corrupt or
//! unreadable file starts the store empty, and a failed write is logged while
//! the in-memory collection stays authoritative. The store never crashes on
//! bad persisted state.
//!
//! # Example
//!
//! ```no_run
//! use reading_list::{BookStore, ReadingListView};
//!
//! let mut store = BookStore::open_default()?;
//!
//! let dune = store.create("Dune", "recommended");
//! store.create("Solaris", "book club");
//! store.toggle_read(dune.id);
//!
//! let view = ReadingListView::from_store(&store);
//! assert_eq!(view.sections.len(), 2);
//! # Ok::<(), reading_list::ReadingListError>(())
//! ```

pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod store;
pub mod ui;

pub use domain::{Book, BookId, ReadingListError, Result};
pub use store::BookStore;
pub use ui::{BookRow, ReadingListView, Section};
