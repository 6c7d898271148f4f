//! # Logging
//!
//! Installs the global `tracing` subscriber.

use crate::error::StudioError;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs a formatting subscriber filtered by `RUST_LOG` (default `info`).
///
/// # Errors
///
/// Returns [`StudioError::Logging`] if a global subscriber is already set.
pub fn init_logging() -> Result<(), StudioError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| StudioError::Logging {
            message: e.to_string(),
        })
}
