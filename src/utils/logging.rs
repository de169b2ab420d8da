//! # Logging
//!
//! Installs a global `tracing` subscriber from a [`LoggingConfig`].
//!
//! The codec only emits events; it never installs a subscriber on its own.
//! Applications that want the crate's `trace!`/`debug!` output call
//! [`init_logging`] once at startup.
//!
//! ## Usage
//! ```rust,no_run
//! use ezsp_codec::config::LoggingConfig;
//! use ezsp_codec::utils::logging::init_logging;
//!
//! init_logging(&LoggingConfig::default())?;
//! # Ok::<(), ezsp_codec::CodecError>(())
//! ```

use crate::config::LoggingConfig;
use crate::error::{CodecError, Result};
use tracing::info;

/// Install the global subscriber.
///
/// # Errors
/// Returns `CodecError::ConfigError` if the configuration is invalid or a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(CodecError::ConfigError(errors.join("; ")));
    }

    let builder = tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_target(true);

    let installed = if config.json_format {
        builder.json().with_ansi(false).try_init()
    } else {
        builder.with_ansi(config.ansi).try_init()
    };

    installed.map_err(|e| CodecError::ConfigError(format!("Failed to install subscriber: {e}")))?;

    info!(app = %config.app_name, level = %config.log_level, "Logging initialized");
    Ok(())
}
