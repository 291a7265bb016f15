use std::{fs, path::Path, path::PathBuf};

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    error::result::{LoggerResult, LoggerResultHelper},
    level::Severity,
    sink::Sink,
    LoggerError,
};

/// RFC 3339 with the local offset, e.g. `2024-05-02T17:04:05+02:00`
pub const RFC3339_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Whether ANSI colors are written to the sink
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Let the `colored` crate decide (`NO_COLOR`, `CLICOLOR`,
    /// `CLICOLOR_FORCE`)
    #[default]
    Auto,
    Always,
    Never,
}

/// Where the logger writes, as it appears in a configuration file
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkTarget {
    #[default]
    Stdout,
    Stderr,
    File(PathBuf),
}

impl SinkTarget {
    /// Open the sink this target points to
    ///
    /// # Errors
    /// Returns an error if a file target cannot be opened
    pub fn open(&self) -> LoggerResult<Sink> {
        Ok(match self {
            Self::Stdout => Sink::Stdout,
            Self::Stderr => Sink::Stderr,
            Self::File(path) => Sink::file(path).map_err(|e| {
                LoggerError::IOError(format!("unable to open log file {path:?}: {e}"))
            })?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Records below this level are dropped
    pub min_level: Severity,

    /// A chrono `strftime` format string.
    /// Defaults to RFC 3339.
    pub timestamp_format: String,

    /// Written before the slug
    pub slug_prefix: String,

    /// Written after the slug
    pub slug_suffix: String,

    /// Replaces the `special` slug when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_slug: Option<String>,

    pub color: ColorMode,

    pub sink: SinkTarget,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: Severity::Debug,
            timestamp_format: RFC3339_FORMAT.to_owned(),
            slug_prefix: "[".to_owned(),
            slug_suffix: "]".to_owned(),
            special_slug: None,
            color: ColorMode::Auto,
            sink: SinkTarget::Stdout,
        }
    }
}

impl LoggerConfig {
    /// Parse a TOML configuration. Missing keys take their default value.
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or the timestamp format is
    /// not a valid `strftime` string
    pub fn from_toml_str(content: &str) -> LoggerResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML configuration file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(conf_path: &Path) -> LoggerResult<Self> {
        trace!("Loading logger configuration from {conf_path:?}");
        let content = fs::read_to_string(conf_path)
            .context(&format!("Unable to read configuration file {conf_path:?}"))?;
        trace!("Configuration file contents: {content}");
        Self::from_toml_str(&content)
    }

    /// Write this configuration as TOML
    ///
    /// # Errors
    /// Returns an error if the configuration cannot be serialized or written
    pub fn to_file(&self, conf_path: &Path) -> LoggerResult<()> {
        trace!("Saving logger configuration to {conf_path:?}");
        let content = toml::to_string_pretty(self)
            .context(&format!("Unable to serialize configuration {self:?}"))?;
        fs::write(conf_path, content)
            .context(&format!("Unable to write configuration file {conf_path:?}"))
    }

    /// Check the timestamp format.
    /// The logger setters never call this.
    ///
    /// # Errors
    /// Returns `LoggerError::Parsing` on an invalid `strftime` specifier
    pub fn validate(&self) -> LoggerResult<()> {
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::Parsing(format!(
                "invalid timestamp format: {:?}",
                self.timestamp_format
            )));
        }
        Ok(())
    }
}
