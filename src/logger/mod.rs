//! The logging facade.
//!
//! Free functions here operate on the process-wide [`Logger`]; every
//! operation also exists as a method for code holding its own instance.
//! The variadic forms live in the crate-root macros (`log_info!`,
//! `log_with_error!`, `log_ratelimited!`, ...), which check the threshold
//! or the rate limiter before evaluating any format arguments.

pub mod backend;
pub mod compat;
pub mod config;
mod errno;
pub mod level;
pub mod log_core;
pub mod macros;
pub mod ptr;
pub mod ratelimit;

#[cfg(test)]
mod tests;

use std::fmt;

pub use level::{Priority, name_of};
pub use log_core::{Logger, global};
pub use ptr::FmtPtr;
pub use ratelimit::RateLimitState;

use backend::Backend;

/// Opens the backend logging channel of the process-wide logger.
pub fn open_logger() {
    global().open()
}

/// Closes the backend logging channel of the process-wide logger.
///
/// Unused on the production path; kept so tests can bracket backend usage.
/// Not safe to race against concurrent logging calls.
pub fn close_logger() {
    global().close()
}

/// The process-wide minimum priority.
pub fn get_log_level() -> Priority {
    global().level()
}

/// Sets the process-wide minimum priority.
pub fn set_log_level(level: Priority) {
    global().set_level(level)
}

/// Whether a message at `priority` would currently be forwarded.
#[inline]
pub fn is_priority_enabled(priority: Priority) -> bool {
    global().is_enabled(priority)
}

/// Replaces the process-wide backend. Startup-time operation.
pub fn set_backend(backend: Box<dyn Backend>) {
    global().set_backend(backend)
}

/// Logs one message at `priority`. See [`Logger::log`].
pub fn log_message(priority: Priority, args: fmt::Arguments<'_>) {
    global().log(priority, args)
}

/// Logs a message annotated with `code`'s description and returns `code`
/// unchanged. See [`Logger::log_with_error`].
pub fn log_with_error(priority: Priority, code: i32, args: fmt::Arguments<'_>) -> i32 {
    global().log_with_error(priority, code, args)
}

/// Escalates `code` to unrecoverable, logging at the fatal level. See
/// [`Logger::log_unrecoverable`].
pub fn log_unrecoverable(code: i32, args: fmt::Arguments<'_>) -> i32 {
    global().log_unrecoverable(code, args)
}

/// Logs one message assembled from a prefix and two fragments. See
/// [`Logger::log_embedded`].
pub fn log_embedded(
    priority: Priority,
    prefix: Option<&str>,
    first: Option<fmt::Arguments<'_>>,
    second: Option<fmt::Arguments<'_>>,
) {
    global().log_embedded(priority, prefix, first, second)
}

/// Logs the current call stack. See [`Logger::log_backtrace`].
pub fn log_backtrace(priority: Priority) {
    global().log_backtrace(priority)
}

/// Sleeps briefly in kernel mode so burst output does not overrun the log
/// buffers; a no-op in user mode.
pub fn pause_briefly() {
    global().pause()
}

/// Rate-limiter check used by `log_ratelimited!` call sites.
#[doc(hidden)]
pub fn rate_check(state: &RateLimitState) -> bool {
    global().check_ratelimit(state)
}
