//! Core logger implementation.
//!
//! All state lives in a [`Logger`] instance so tests can run against
//! private loggers while production code shares the [`global`] singleton.

use core::sync::atomic::{AtomicU8, Ordering};
use std::fmt::{self, Write as _};
use std::backtrace::{Backtrace, BacktraceStatus};

use once_cell::sync::Lazy;
use spin::RwLock;

use super::backend::{Backend, UserBackend};
use super::config::DEFAULT_LOG_LEVEL;
use super::errno::ErrnoGuard;
use super::level::Priority;
use super::ratelimit::RateLimitState;
use crate::errors;

/// Pace the console every this many backtrace lines.
const BACKTRACE_CHUNK: usize = 32;

/// A leveled logger bound to one [`Backend`].
///
/// # Thread safety
///
/// The level is a single atomic: concurrent loggers may observe a level
/// change slightly late, which callers must tolerate. Swapping or closing
/// the backend while other threads log is not protected beyond the slot
/// lock; production code never closes, so this is only a test concern.
pub struct Logger {
    /// Minimum priority forwarded to the backend (eventually consistent).
    level: AtomicU8,
    backend: RwLock<Box<dyn Backend>>,
}

impl Logger {
    /// Creates a logger with an explicit level and backend.
    pub fn new(level: Priority, backend: Box<dyn Backend>) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
            backend: RwLock::new(backend),
        }
    }

    /// Creates a logger at the default level.
    pub fn with_backend(backend: Box<dyn Backend>) -> Self {
        Self::new(DEFAULT_LOG_LEVEL, backend)
    }

    /// The current minimum priority.
    pub fn level(&self) -> Priority {
        let level = self.level.load(Ordering::Acquire);
        Priority::from_u8(level).unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Sets the minimum priority for subsequent messages.
    pub fn set_level(&self, level: Priority) {
        self.level.store(level as u8, Ordering::Release);
    }

    /// Checks whether `priority` passes the current threshold.
    #[inline]
    pub fn is_enabled(&self, priority: Priority) -> bool {
        priority as u8 <= self.level.load(Ordering::Relaxed)
    }

    /// Replaces the backend. Startup-time operation; racing it against
    /// concurrent logging gives either backend, never a torn state.
    pub fn set_backend(&self, backend: Box<dyn Backend>) {
        *self.backend.write() = backend;
    }

    /// Opens the backend channel.
    pub fn open(&self) {
        let _errno = ErrnoGuard::new();
        self.backend.read().open();
    }

    /// Closes the backend channel.
    ///
    /// Never called on the production path; kept so tests can bracket
    /// backend usage. Unsafe to race against concurrent logging.
    pub fn close(&self) {
        let _errno = ErrnoGuard::new();
        self.backend.read().close();
    }

    /// Base emission primitive: renders and forwards one message if
    /// `priority` passes the threshold, otherwise does nothing.
    pub fn log(&self, priority: Priority, args: fmt::Arguments<'_>) {
        if !self.is_enabled(priority) {
            return;
        }
        let _errno = ErrnoGuard::new();
        let message = fmt::format(args);
        self.forward(priority, &message);
    }

    /// Emits `args` followed by the description of `code`, then returns
    /// `code` unchanged even when the message was filtered out.
    pub fn log_with_error(&self, priority: Priority, code: i32, args: fmt::Arguments<'_>) -> i32 {
        if self.is_enabled(priority) {
            let _errno = ErrnoGuard::new();
            let message = format!("{}: {}", args, errors::string_error(code));
            self.forward(priority, &message);
        }
        code
    }

    /// Escalates `code` to unrecoverable and logs it at the fatal level.
    ///
    /// The [`errors::SUCCESS`] and [`errors::QUEUED`] sentinels pass
    /// through silently and unescalated.
    pub fn log_unrecoverable(&self, code: i32, args: fmt::Arguments<'_>) -> i32 {
        if let errors::SUCCESS | errors::QUEUED = code {
            return code;
        }
        self.log_with_error(Priority::FATAL, code, args);
        errors::make_unrecoverable(code)
    }

    /// Emits one message assembled from an optional prefix and up to two
    /// pre-rendered fragments, concatenated in order.
    ///
    /// Lets a call site wrap a caller-supplied format string in static
    /// context without the caller knowing the final layout.
    pub fn log_embedded(
        &self,
        priority: Priority,
        prefix: Option<&str>,
        first: Option<fmt::Arguments<'_>>,
        second: Option<fmt::Arguments<'_>>,
    ) {
        if !self.is_enabled(priority) {
            return;
        }
        let _errno = ErrnoGuard::new();
        let mut message = String::new();
        if let Some(prefix) = prefix {
            message.push_str(prefix);
        }
        if let Some(first) = first {
            let _ = message.write_fmt(first);
        }
        if let Some(second) = second {
            let _ = message.write_fmt(second);
        }
        self.forward(priority, &message);
    }

    /// Emits the current call stack, one line per frame row.
    ///
    /// Best-effort: when capture is unavailable a single reduced line is
    /// emitted instead. Long traces are paced through the backend so
    /// kernel-mode buffers can drain.
    pub fn log_backtrace(&self, priority: Priority) {
        if !self.is_enabled(priority) {
            return;
        }
        let _errno = ErrnoGuard::new();
        let backtrace = Backtrace::force_capture();
        if backtrace.status() != BacktraceStatus::Captured {
            self.forward(priority, "[backtrace unavailable]");
            return;
        }
        self.forward(priority, "call stack:");
        for (index, line) in backtrace.to_string().lines().enumerate() {
            self.forward(priority, line.trim_end());
            if index % BACKTRACE_CHUNK == BACKTRACE_CHUNK - 1 {
                self.backend.read().pause();
            }
        }
    }

    /// Lets the backend drain before more burst output.
    pub fn pause(&self) {
        self.backend.read().pause();
    }

    /// Consults a call site's rate limiter.
    ///
    /// Pass-through when the active backend does not limit. A window
    /// rollover reports how many calls were suppressed in the window that
    /// just closed.
    pub fn check_ratelimit(&self, state: &RateLimitState) -> bool {
        if !self.backend.read().limits_rate() {
            return true;
        }
        let (allowed, suppressed) = state.check_window();
        if suppressed > 0 {
            self.log(
                Priority::Warning,
                format_args!("{} callbacks suppressed", suppressed),
            );
        }
        allowed
    }

    /// Hands one rendered message to the backend.
    fn forward(&self, priority: Priority, message: &str) {
        self.backend.read().emit(priority, message);
    }
}

/// Process-wide logger used by the free functions and the macros.
static GLOBAL_LOGGER: Lazy<Logger> =
    Lazy::new(|| Logger::new(DEFAULT_LOG_LEVEL, Box::new(UserBackend::to_stderr())));

/// The process-wide logger instance.
pub fn global() -> &'static Logger {
    &GLOBAL_LOGGER
}
