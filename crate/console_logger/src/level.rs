use std::{fmt, str::FromStr};

use colored::Color;
use serde::{Deserialize, Serialize};

use crate::LoggerError;

/// Severity of a log record.
///
/// Variants are ordered from the least to the most severe: a record is
/// emitted when its severity is greater than or equal to the logger
/// threshold.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Debug = 0,
    Info = 1,
    Special = 2,
    #[serde(alias = "err")]
    Error = 3,
    Fatal = 4,
}

impl Severity {
    pub const ALL: [Self; 5] = [
        Self::Debug,
        Self::Info,
        Self::Special,
        Self::Error,
        Self::Fatal,
    ];

    /// The name of the level, which is also its default slug
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Special => "special",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "special" => Ok(Self::Special),
            "error" | "err" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            _ => Err(LoggerError::Parsing(format!(
                "unknown severity: {s}. Use one of debug, info, special, error, fatal"
            ))),
        }
    }
}

/// How a level is rendered: its slug text, the color of the slug and of
/// sub-message content, and the highlight color of sub-message markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelStyle {
    pub slug: String,
    pub primary: Color,
    pub secondary: Color,
}

impl LevelStyle {
    #[must_use]
    pub fn default_for(level: Severity) -> Self {
        let (primary, secondary) = match level {
            Severity::Debug => (Color::Blue, Color::BrightBlue),
            Severity::Info => (Color::Cyan, Color::BrightCyan),
            Severity::Special => (Color::Green, Color::BrightGreen),
            Severity::Error => (Color::Red, Color::BrightRed),
            Severity::Fatal => (Color::Magenta, Color::BrightMagenta),
        };
        Self {
            slug: level.as_str().to_owned(),
            primary,
            secondary,
        }
    }
}

/// The style of every level, looked up by severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelStyles([LevelStyle; 5]);

impl Default for LevelStyles {
    fn default() -> Self {
        Self(Severity::ALL.map(LevelStyle::default_for))
    }
}

impl LevelStyles {
    #[must_use]
    pub fn get(&self, level: Severity) -> &LevelStyle {
        &self.0[level.index()]
    }

    pub fn get_mut(&mut self, level: Severity) -> &mut LevelStyle {
        &mut self.0[level.index()]
    }

    /// Only the Special level has a user defined slug.
    pub fn set_special_slug(&mut self, slug: impl Into<String>) {
        self.get_mut(Severity::Special).slug = slug.into();
    }
}
