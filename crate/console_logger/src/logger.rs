use std::{
    fmt::{self, Write as _},
    io::Write,
    sync::{Mutex, MutexGuard, PoisonError},
};

use chrono::Local;
use colored::{Color, Colorize};

use crate::{
    config::{ColorMode, LoggerConfig, RFC3339_FORMAT},
    error::result::LoggerResult,
    level::{LevelStyle, LevelStyles, Severity},
    sink::Sink,
};

const KEY_COLOR: Color = Color::BrightWhite;
const SWATCH_GLYPH: &str = "█";

const BRIGHT_PALETTE: [Color; 8] = [
    Color::BrightBlack,
    Color::BrightBlue,
    Color::BrightCyan,
    Color::BrightGreen,
    Color::BrightMagenta,
    Color::BrightRed,
    Color::BrightWhite,
    Color::BrightYellow,
];

const STANDARD_PALETTE: [Color; 8] = [
    Color::Black,
    Color::Blue,
    Color::Cyan,
    Color::Green,
    Color::Magenta,
    Color::Red,
    Color::White,
    Color::Yellow,
];

/// What follows the primary line of a record
enum SubMessages {
    None,
    Values(Vec<(String, String)>),
    Error(String),
}

struct LoggerState {
    sink: Sink,
    timestamp_format: String,
    min_level: Severity,
    slug_prefix: String,
    slug_suffix: String,
    color: ColorMode,
    styles: LevelStyles,
}

impl LoggerState {
    fn paint(&self, text: &str, color: Color) -> String {
        match self.color {
            ColorMode::Never => text.to_owned(),
            ColorMode::Always => format!("\x1b[{}m{text}\x1b[0m", color.to_fg_str()),
            ColorMode::Auto => text.color(color).to_string(),
        }
    }

    fn timestamp(&self) -> String {
        let now = Local::now();
        let mut timestamp = String::new();
        if let Err(e) = write!(timestamp, "{}", now.format(&self.timestamp_format)) {
            eprintln!(
                "invalid timestamp format {:?}: {e}",
                self.timestamp_format
            );
            return now.format(RFC3339_FORMAT).to_string();
        }
        timestamp
    }

    fn render(&self, level: Severity, message: &str, sub_messages: &SubMessages) -> String {
        let LevelStyle {
            slug,
            primary,
            secondary,
        } = self.styles.get(level);
        let slug = format!("{}{slug}{}", self.slug_prefix, self.slug_suffix);
        let mut record = format!(
            "{} {} {message}\n",
            self.timestamp(),
            self.paint(&slug, *primary)
        );
        match sub_messages {
            SubMessages::None => {}
            SubMessages::Values(values) => {
                for (key, value) in values {
                    record.push_str(&format!(
                        "{} {}{} {value}\n",
                        self.paint("-", *secondary),
                        self.paint(key, KEY_COLOR),
                        self.paint(":", *secondary),
                    ));
                }
            }
            SubMessages::Error(error) => {
                record.push_str(&format!(
                    "{} {}\n",
                    self.paint("-", *secondary),
                    self.paint(error, *primary)
                ));
            }
        }
        record
    }

    fn write(&mut self, content: &str) {
        if let Err(e) = self.sink.write_all(content.as_bytes()) {
            eprintln!("{e}");
        }
    }
}

/// A leveled console logger.
///
/// The configuration and the sink live behind a single lock: a record, with
/// all its sub-messages, is written in one piece, and the setters take
/// effect on the next call.
///
/// ```ignore
/// use cosmian_console_logger::{Logger, LoggerConfig, Severity};
///
/// let logger = Logger::new(&LoggerConfig::default())?;
/// logger.set_min_level(Severity::Info);
/// logger.info(&format!("listening on port {}", 8080));
/// logger.error_with_error("request failed", &err);
/// ```
pub struct Logger {
    state: Mutex<LoggerState>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::with_sink(&LoggerConfig::default(), Sink::Stdout)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Logger")
            .field("sink", &state.sink)
            .field("min_level", &state.min_level)
            .field("timestamp_format", &state.timestamp_format)
            .field("color", &state.color)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Build a logger writing to the sink named in the configuration
    ///
    /// # Errors
    /// Returns an error if the sink is a file that cannot be opened
    pub fn new(config: &LoggerConfig) -> LoggerResult<Self> {
        let sink = config.sink.open()?;
        Ok(Self::with_sink(config, sink))
    }

    /// Build a logger writing to `sink`; `config.sink` is ignored
    pub fn with_sink(config: &LoggerConfig, sink: impl Into<Sink>) -> Self {
        let mut styles = LevelStyles::default();
        if let Some(slug) = &config.special_slug {
            styles.set_special_slug(slug.clone());
        }
        Self {
            state: Mutex::new(LoggerState {
                sink: sink.into(),
                timestamp_format: config.timestamp_format.clone(),
                min_level: config.min_level,
                slug_prefix: config.slug_prefix.clone(),
                slug_suffix: config.slug_suffix.clone(),
                color: config.color,
                styles,
            }),
        }
    }

    // Logging must keep working after a panic in another thread.
    fn lock(&self) -> MutexGuard<'_, LoggerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn log(&self, level: Severity, message: &str, sub_messages: &SubMessages) {
        let mut state = self.lock();
        if level < state.min_level {
            return;
        }
        let record = state.render(level, message, sub_messages);
        state.write(&record);
    }

    /// Write `<timestamp> <slug> <message>` if `level` passes the threshold
    pub fn emit(&self, level: Severity, message: &str) {
        self.log(level, message, &SubMessages::None);
    }

    /// Like [`Logger::emit`], followed by one `- key: value` line per pair,
    /// in iteration order
    pub fn emit_with_values<I, K, V>(&self, level: Severity, message: &str, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: fmt::Display,
        V: fmt::Display,
    {
        let values = values
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.log(level, message, &SubMessages::Values(values));
    }

    /// Like [`Logger::emit`], followed by a `- <error>` line
    pub fn emit_with_error(&self, level: Severity, message: &str, error: &dyn std::error::Error) {
        self.log(level, message, &SubMessages::Error(error.to_string()));
    }

    pub fn debug(&self, message: &str) {
        self.emit(Severity::Debug, message);
    }

    pub fn debug_with_values<I, K, V>(&self, message: &str, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: fmt::Display,
        V: fmt::Display,
    {
        self.emit_with_values(Severity::Debug, message, values);
    }

    pub fn info(&self, message: &str) {
        self.emit(Severity::Info, message);
    }

    pub fn info_with_values<I, K, V>(&self, message: &str, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: fmt::Display,
        V: fmt::Display,
    {
        self.emit_with_values(Severity::Info, message, values);
    }

    pub fn special(&self, message: &str) {
        self.emit(Severity::Special, message);
    }

    pub fn special_with_values<I, K, V>(&self, message: &str, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: fmt::Display,
        V: fmt::Display,
    {
        self.emit_with_values(Severity::Special, message, values);
    }

    pub fn error(&self, message: &str) {
        self.emit(Severity::Error, message);
    }

    pub fn error_with_values<I, K, V>(&self, message: &str, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: fmt::Display,
        V: fmt::Display,
    {
        self.emit_with_values(Severity::Error, message, values);
    }

    pub fn error_with_error(&self, message: &str, error: &dyn std::error::Error) {
        self.emit_with_error(Severity::Error, message, error);
    }

    /// Log at the fatal level, then exit the process with `code`.
    ///
    /// The sink is flushed before exiting.
    pub fn fatal(&self, code: i32, message: &str) -> ! {
        self.emit(Severity::Fatal, message);
        self.exit(code)
    }

    /// See [`Logger::fatal`]
    pub fn fatal_with_values<I, K, V>(&self, code: i32, message: &str, values: I) -> !
    where
        I: IntoIterator<Item = (K, V)>,
        K: fmt::Display,
        V: fmt::Display,
    {
        self.emit_with_values(Severity::Fatal, message, values);
        self.exit(code)
    }

    /// See [`Logger::fatal`]
    pub fn fatal_with_error(&self, code: i32, message: &str, error: &dyn std::error::Error) -> ! {
        self.emit_with_error(Severity::Fatal, message, error);
        self.exit(code)
    }

    fn exit(&self, code: i32) -> ! {
        self.flush();
        std::process::exit(code)
    }

    pub fn flush(&self) {
        if let Err(e) = self.lock().sink.flush() {
            eprintln!("{e}");
        }
    }

    /// Print the bright and the standard palettes, one line each.
    /// Ignores the threshold.
    pub fn color_swatch(&self) {
        let mut state = self.lock();
        let mut swatch = String::new();
        for palette in [BRIGHT_PALETTE, STANDARD_PALETTE] {
            for color in palette {
                swatch.push_str(&state.paint(SWATCH_GLYPH, color));
            }
            swatch.push('\n');
        }
        state.write(&swatch);
    }

    pub fn set_special_slug(&self, slug: impl Into<String>) {
        self.lock().styles.set_special_slug(slug);
    }

    #[must_use]
    pub fn slug(&self, level: Severity) -> String {
        self.lock().styles.get(level).slug.clone()
    }

    pub fn set_min_level(&self, level: Severity) {
        self.lock().min_level = level;
    }

    #[must_use]
    pub fn min_level(&self) -> Severity {
        self.lock().min_level
    }

    /// Replace the sink; the previous one is flushed first
    pub fn set_sink(&self, sink: impl Into<Sink>) {
        let mut state = self.lock();
        if let Err(e) = state.sink.flush() {
            eprintln!("{e}");
        }
        state.sink = sink.into();
    }

    /// Not validated; see [`LoggerConfig::validate`]
    pub fn set_timestamp_format(&self, format: impl Into<String>) {
        self.lock().timestamp_format = format.into();
    }

    pub fn set_slug_delimiters(&self, prefix: impl Into<String>, suffix: impl Into<String>) {
        let mut state = self.lock();
        state.slug_prefix = prefix.into();
        state.slug_suffix = suffix.into();
    }

    pub fn set_color_mode(&self, color: ColorMode) {
        self.lock().color = color;
    }
}
