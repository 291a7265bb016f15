use std::sync::OnceLock;

use tracing::debug;

use crate::{
    error::result::{LoggerResult, LoggerResultHelper},
    logger_error, Logger, LoggerConfig,
};

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger used by the logging macros.
///
/// Created with the default configuration (stdout, RFC 3339 timestamps,
/// every level) on first use unless [`global_init`] ran before.
pub fn global_logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::default)
}

/// Install the process-wide logger from a configuration.
///
/// # Errors
/// Returns an error if the sink cannot be opened, or if the global logger
/// was already installed or used
pub fn global_init(config: &LoggerConfig) -> LoggerResult<&'static Logger> {
    let logger = Logger::new(config)?;
    if GLOBAL_LOGGER.set(logger).is_err() {
        return Err(logger_error!("the global logger is already initialized"));
    }
    debug!("Global console logger initialized with config {config:?}");
    GLOBAL_LOGGER
        .get()
        .context("the global logger is not initialized")
}
