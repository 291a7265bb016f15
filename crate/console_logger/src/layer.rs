use std::{borrow::Borrow, fmt};

use tracing::{
    field::{Field, Visit},
    Event, Level, Subscriber,
};
use tracing_subscriber::{layer::Context, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::{error::result::LoggerResult, Logger, Severity};

/// A `tracing` layer rendering every event through a [`Logger`].
///
/// `TRACE` and `DEBUG` map to [`Severity::Debug`], `INFO` to
/// [`Severity::Info`], `WARN` to [`Severity::Special`] and `ERROR` to
/// [`Severity::Error`]. The `message` field is the log message, the other
/// fields become `key: value` sub-messages.
pub struct ConsoleLayer<L> {
    logger: L,
}

impl<L> ConsoleLayer<L>
where
    L: Borrow<Logger>,
{
    /// `logger` is either a `&'static Logger` or an `Arc<Logger>`
    pub const fn new(logger: L) -> Self {
        Self { logger }
    }
}

#[must_use]
pub fn severity_of(level: &Level) -> Severity {
    if *level == Level::ERROR {
        Severity::Error
    } else if *level == Level::WARN {
        Severity::Special
    } else if *level == Level::INFO {
        Severity::Info
    } else {
        Severity::Debug
    }
}

#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: Vec<(&'static str, String)>,
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_owned();
        } else {
            self.fields.push((field.name(), value.to_owned()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push((field.name(), format!("{value:?}")));
        }
    }
}

impl<S, L> Layer<S> for ConsoleLayer<L>
where
    S: Subscriber,
    L: Borrow<Logger> + Send + Sync + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        self.logger.borrow().emit_with_values(
            severity_of(event.metadata().level()),
            &visitor.message,
            visitor.fields,
        );
    }
}

/// Route all `tracing` events of the process to `logger`.
///
/// # Errors
/// Returns an error if a global `tracing` subscriber is already set
pub fn console_init<L>(logger: L) -> LoggerResult<()>
where
    L: Borrow<Logger> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(ConsoleLayer::new(logger))
        .try_init()?;
    tracing::debug!("console logger installed as the tracing subscriber");
    Ok(())
}
