//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber that receives the storage and
//! store diagnostics emitted throughout the crate. The core never fails or
//! panics because of logging; persistence errors are reported here and nowhere
//! else.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber for reading list diagnostics.
///
/// Sets up a formatted stderr subscriber filtered by level.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable (highest priority)
/// 2. The `level` argument if set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
/// Initialization failure (for instance another subscriber already installed
/// by the embedding shell) is silently ignored; observability is optional.
///
/// # Example
///
/// ```
/// use reading_list::observability::init_tracing;
///
/// init_tracing(Some("debug"));
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("info")));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
