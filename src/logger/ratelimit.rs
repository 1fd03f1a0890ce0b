//! Per-call-site rate limiting.
//!
//! Each `log_ratelimited!` call site owns one static [`RateLimitState`]: a
//! window of `interval` length admitting at most `burst` messages. Calls
//! beyond the burst are counted and suppressed until the window rolls over,
//! at which point the suppressed count is reported once.
//!
//! Only the kernel backend enforces limiting; in user mode the check is a
//! pass-through (see `Logger::check_ratelimit`).

use core::time::Duration;
use std::time::Instant;

use spin::Mutex;

use super::config::{DEFAULT_RATELIMIT_BURST, DEFAULT_RATELIMIT_INTERVAL};

/// Mutable window state, updated under the spin lock.
struct Window {
    /// Start of the current window; `None` until the first check.
    begin: Option<Instant>,
    /// Messages admitted in the current window.
    printed: u32,
    /// Messages suppressed in the current window.
    missed: u32,
}

/// Token-bucket-like limiter state for one call site.
///
/// Const-constructible so it can live in a `static` inside a macro
/// expansion. Safe to check concurrently from multiple threads.
pub struct RateLimitState {
    interval: Duration,
    burst: u32,
    window: Mutex<Window>,
}

impl RateLimitState {
    /// Creates a limiter admitting `burst` messages per `interval`.
    pub const fn new(interval: Duration, burst: u32) -> Self {
        Self {
            interval,
            burst,
            window: Mutex::new(Window {
                begin: None,
                printed: 0,
                missed: 0,
            }),
        }
    }

    /// Creates a limiter with the default window and burst size.
    pub const fn with_defaults() -> Self {
        Self::new(DEFAULT_RATELIMIT_INTERVAL, DEFAULT_RATELIMIT_BURST)
    }

    /// Returns `true` if the caller may emit.
    pub fn check(&self) -> bool {
        self.check_window().0
    }

    /// Like [`check`](Self::check), but also reports the number of calls
    /// suppressed in a window that just rolled over (zero otherwise).
    pub(crate) fn check_window(&self) -> (bool, u32) {
        let now = Instant::now();
        let mut window = self.window.lock();

        let mut suppressed = 0;
        match window.begin {
            Some(begin) if now.duration_since(begin) >= self.interval => {
                suppressed = window.missed;
                window.begin = Some(now);
                window.printed = 0;
                window.missed = 0;
            }
            Some(_) => {}
            None => window.begin = Some(now),
        }

        if window.printed < self.burst {
            window.printed += 1;
            (true, suppressed)
        } else {
            window.missed += 1;
            (false, suppressed)
        }
    }

    /// Messages suppressed so far in the current window.
    pub fn missed(&self) -> u32 {
        self.window.lock().missed
    }
}
