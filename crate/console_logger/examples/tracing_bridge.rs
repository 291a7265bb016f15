//! Example of how to route `tracing` events to the console logger
//! cargo run --example tracing_bridge -p cosmian_console_logger

use std::sync::Arc;

use cosmian_console_logger::{console_init, Logger, LoggerConfig, Severity};

fn main() {
    let config = LoggerConfig {
        special_slug: Some("warn".to_owned()),
        ..Default::default()
    };
    let logger = match Logger::new(&config) {
        Ok(logger) => Arc::new(logger),
        Err(e) => {
            eprintln!("Failed to create the console logger: {e}");
            return;
        }
    };
    if let Err(e) = console_init(logger.clone()) {
        eprintln!("Failed to install the console logger: {e}");
        return;
    }

    tracing::info!(key_1 = "bar", key_2 = 10, "handle foo");
    tracing::warn!("warnings use the special level");
    tracing::error!(retry = false, "handle foo failed");

    // the threshold still applies to bridged events
    logger.set_min_level(Severity::Error);
    tracing::info!("dropped");
    tracing::error!("kept");

    logger.set_min_level(Severity::Debug);
    logger.info("direct calls and tracing events share the same sink");
}
