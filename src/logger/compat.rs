//! Bridge from the standard `log` facade.
//!
//! Lets dependencies that log through the `log` crate share this facade's
//! backend: their records are mapped onto [`Priority`] and forwarded like
//! any other message.

use log::{Level, Metadata, Record};

use super::level::Priority;
use super::{is_priority_enabled, log_message};

/// `log::Log` implementation forwarding into the facade.
pub struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

/// Maps a `log` crate level onto a [`Priority`].
///
/// `Trace` folds into [`Priority::Debug`]; the facade has no finer level.
fn priority_of(level: Level) -> Priority {
    match level {
        Level::Error => Priority::Error,
        Level::Warn => Priority::Warning,
        Level::Info => Priority::Info,
        Level::Debug | Level::Trace => Priority::Debug,
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        is_priority_enabled(priority_of(metadata.level()))
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            log_message(priority_of(record.level()), *record.args());
        }
    }

    fn flush(&self) {}
}

/// Routes the standard `log` macros into this facade.
///
/// Call once at startup; fails if another logger is already installed.
pub fn install_bridge() -> Result<(), log::SetLoggerError> {
    log::set_logger(&BRIDGE).map(|()| log::set_max_level(log::LevelFilter::Trace))
}
