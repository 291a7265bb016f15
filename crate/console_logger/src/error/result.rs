use super::LoggerError;

pub(crate) type LoggerResult<R> = Result<R, LoggerError>;

pub(crate) trait LoggerResultHelper<T> {
    fn context(self, context: &str) -> LoggerResult<T>;
}

impl<T, E> LoggerResultHelper<T> for Result<T, E>
where
    E: std::error::Error,
{
    fn context(self, context: &str) -> LoggerResult<T> {
        self.map_err(|e| LoggerError::Config(format!("{context}: {e}")))
    }
}

impl<T> LoggerResultHelper<T> for Option<T> {
    fn context(self, context: &str) -> LoggerResult<T> {
        self.ok_or_else(|| LoggerError::Config(context.to_owned()))
    }
}
