//! # Cosmian Console Logger
//!
//! A leveled console logger for command line tools and ad hoc diagnostics.
//!
//! Every record is rendered as
//!
//! ```text
//! <timestamp> [<slug>] <message>
//! - <key>: <value>
//! ```
//!
//! with the bracketed slug and the sub-message markers colorized per level.
//! Records below the logger threshold are dropped.
//!
//! ## Levels
//!
//! `debug` < `info` < `special` < `error` < `fatal`. The slug of the
//! `special` level can be changed at runtime with
//! [`Logger::set_special_slug`]. Fatal records exit the process.
//!
//! ## Usage
//!
//! ```ignore
//! use cosmian_console_logger::{info, Logger, LoggerConfig};
//!
//! // the process-wide logger, with defaults
//! info!("listening on {}", addr);
//! info!(user = user, tag = tag; "request received");
//!
//! // an explicit logger
//! let logger = Logger::new(&LoggerConfig::from_file(path)?)?;
//! info!(logger: &logger, "listening on {}", addr);
//! ```
//!
//! A [`ConsoleLayer`] routes `tracing` events to a logger, see
//! [`console_init`].
mod config;
mod error;
mod global;
mod layer;
mod level;
mod logger;
mod macros;
mod sink;

pub use config::{ColorMode, LoggerConfig, SinkTarget, RFC3339_FORMAT};
pub use error::LoggerError;
pub use global::{global_init, global_logger};
pub use layer::{console_init, severity_of, ConsoleLayer};
pub use level::{LevelStyle, LevelStyles, Severity};
pub use logger::Logger;
pub use sink::{MemorySink, Sink};

/// Re-exported dependencies used in the public API
pub mod reexport {
    pub use colored;
    pub use tracing;
    pub use tracing_subscriber;
}

#[cfg(test)]
mod tests;
