use thiserror::Error;

pub(crate) mod result;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parsing error: {0}")]
    Parsing(String),

    #[error("Tracing subscriber error: {0}")]
    TracingSubscriber(String),

    #[error("IO error: {0}")]
    IOError(String),
}

impl From<std::io::Error> for LoggerError {
    fn from(e: std::io::Error) -> Self {
        Self::IOError(e.to_string())
    }
}

impl From<toml::de::Error> for LoggerError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parsing(e.to_string())
    }
}

impl From<tracing_subscriber::util::TryInitError> for LoggerError {
    fn from(value: tracing_subscriber::util::TryInitError) -> Self {
        Self::TracingSubscriber(value.to_string())
    }
}

/// Construct a configuration error from a string.
#[macro_export]
macro_rules! logger_error {
    ($msg:literal) => {
        $crate::LoggerError::Config(::core::format_args!($msg).to_string())
    };
    ($err:expr $(,)?) => ({
        $crate::LoggerError::Config($err.to_string())
    });
    ($fmt:expr, $($arg:tt)*) => {
        $crate::LoggerError::Config(::core::format_args!($fmt, $($arg)*).to_string())
    };
}
