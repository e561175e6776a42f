//! Logging setup for the reading list core.
//!
//! The crate emits `tracing` events and debug spans from the storage and store
//! layers. Load and save failures surface only as log records by design, so an
//! embedding shell that wants those diagnostics should install a subscriber,
//! either its own or the one provided by [`init_tracing`].

mod init;

pub use init::init_tracing;
