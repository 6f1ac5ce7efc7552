//! Logging initialization for jbranch.
//!
//! Logs go to stderr so stdout stays clean for the generated branch
//! name. `RUST_LOG` overrides the level when set.

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging.
///
/// # Arguments
/// * `debug_override` - If true, override log level to "debug" (from --debug flag)
pub fn init_logging(debug_override: bool) -> Result<()> {
    let log_level = if debug_override { "debug" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
