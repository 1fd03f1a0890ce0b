//! Logging macros
//!
//! Variadic entry points of the facade. Each per-level macro checks the
//! current threshold before touching its arguments, and `log_ratelimited!`
//! consults its call site's limiter first, so a filtered or suppressed call
//! never evaluates format arguments and never reaches the backend.
//!
//! # Macro list
//!
//! - `log_debug!` / `log_info!` / `log_notice!` / `log_warning!` /
//!   `log_error!` / `log_fatal!`: one emission per named priority
//! - `log_with_error!`: message plus error-code description, returns the code
//! - `log_unrecoverable!`: fatal emission plus escalation, returns the code
//! - `log_ratelimited!`: per-call-site rate-limited emission

/// Internal implementation macro with threshold filtering.
///
/// The early check keeps disabled levels from evaluating their format
/// arguments.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_filtered {
    ($priority:expr, $($arg:tt)*) => {
        if $crate::logger::is_priority_enabled($priority) {
            $crate::logger::log_message($priority, format_args!($($arg)*));
        }
    };
}

/// Logs a debug message.
///
/// ```
/// unilog::log_debug!("chunk {} parsed", 3);
/// ```
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::__log_filtered!($crate::logger::Priority::Debug, $($arg)*)
    };
}

/// Logs an informational message.
///
/// ```
/// unilog::log_info!("index loaded in {} ms", 12);
/// ```
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::__log_filtered!($crate::logger::Priority::Info, $($arg)*)
    };
}

/// Logs a normal but notable condition.
#[macro_export]
macro_rules! log_notice {
    ($($arg:tt)*) => {
        $crate::__log_filtered!($crate::logger::Priority::Notice, $($arg)*)
    };
}

/// Logs a warning.
///
/// ```
/// unilog::log_warning!("queue depth {} above watermark", 128);
/// ```
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        $crate::__log_filtered!($crate::logger::Priority::Warning, $($arg)*)
    };
}

/// Logs an error.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::__log_filtered!($crate::logger::Priority::Error, $($arg)*)
    };
}

/// Logs a fatal error.
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {
        $crate::__log_filtered!($crate::logger::Priority::FATAL, $($arg)*)
    };
}

/// Logs a message with an error-code description appended, evaluating to
/// the code itself so call sites can log and return in one expression.
///
/// ```
/// use unilog::errors;
/// use unilog::logger::Priority;
///
/// fn refuse() -> i32 {
///     unilog::log_with_error!(Priority::Error, errors::UNSUPPORTED, "refusing request")
/// }
/// assert_eq!(refuse(), errors::UNSUPPORTED);
/// ```
#[macro_export]
macro_rules! log_with_error {
    ($priority:expr, $code:expr, $($arg:tt)*) => {
        $crate::logger::log_with_error($priority, $code, format_args!($($arg)*))
    };
}

/// Logs at the fatal level and evaluates to the escalated code; the
/// success and queued sentinels pass through untouched.
///
/// ```
/// use unilog::errors;
///
/// let status = unilog::log_unrecoverable!(errors::SUCCESS, "commit failed");
/// assert_eq!(status, errors::SUCCESS);
/// ```
#[macro_export]
macro_rules! log_unrecoverable {
    ($code:expr, $($arg:tt)*) => {
        $crate::logger::log_unrecoverable($code, format_args!($($arg)*))
    };
}

/// Rate-limited emission: each call site gets its own limiter window, and
/// suppressed calls skip both argument evaluation and the backend entirely.
/// With a non-limiting (user mode) backend this is a plain filtered log.
///
/// ```
/// use unilog::logger::Priority;
///
/// for sector in 0..3 {
///     unilog::log_ratelimited!(Priority::Warning, "slow read on sector {}", sector);
/// }
/// ```
#[macro_export]
macro_rules! log_ratelimited {
    ($priority:expr, $($arg:tt)*) => {{
        static RATELIMIT_STATE: $crate::logger::RateLimitState =
            $crate::logger::RateLimitState::with_defaults();
        if $crate::logger::rate_check(&RATELIMIT_STATE) {
            $crate::__log_filtered!($priority, $($arg)*);
        }
    }};
}
