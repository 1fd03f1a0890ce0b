// src/logger/tests/mod.rs

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::backend::Backend;
use super::level::Priority;
use super::log_core::Logger;

// ========== test helpers ==========

/// Test-only log macro.
///
/// Mirrors the production macros but drives an independent Logger instance.
macro_rules! test_log {
    ($logger:expr, $priority:expr, $($arg:tt)*) => {
        $logger.log($priority, format_args!($($arg)*))
    };
}

/// Serializes tests that touch the process-wide logger or the `log` crate
/// bridge, and restores the default level afterwards.
struct GlobalLoggerLock {
    _guard: std::sync::MutexGuard<'static, ()>,
}

impl GlobalLoggerLock {
    fn acquire() -> Self {
        static LOCK: Mutex<()> = Mutex::new(());
        Self {
            _guard: LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner()),
        }
    }
}

impl Drop for GlobalLoggerLock {
    fn drop(&mut self) {
        crate::logger::set_log_level(crate::logger::config::DEFAULT_LOG_LEVEL);
        crate::logger::set_backend(Box::new(crate::logger::backend::UserBackend::to_stderr()));
    }
}

/// Recording backend: counts emissions, keeps every rendered line, and can
/// misbehave on demand (clobber errno) the way a real failing sink would.
struct MockBackend {
    emitted: Mutex<Vec<(Priority, String)>>,
    open_count: AtomicUsize,
    close_count: AtomicUsize,
    limits_rate: bool,
    errno_to_set: Option<i32>,
}

impl MockBackend {
    fn new() -> Self {
        Self {
            emitted: Mutex::new(Vec::new()),
            open_count: AtomicUsize::new(0),
            close_count: AtomicUsize::new(0),
            limits_rate: false,
            errno_to_set: None,
        }
    }

    /// A mock that behaves like the kernel backend for rate limiting.
    fn limiting() -> Self {
        Self {
            limits_rate: true,
            ..Self::new()
        }
    }

    /// A mock whose emission overwrites errno, like failing sink I/O.
    #[cfg(any(target_os = "linux", target_os = "android", target_os = "macos"))]
    fn clobbering_errno(value: i32) -> Self {
        Self {
            errno_to_set: Some(value),
            ..Self::new()
        }
    }

    fn emit_count(&self) -> usize {
        self.emitted.lock().unwrap().len()
    }

    fn messages(&self) -> Vec<String> {
        self.emitted
            .lock()
            .unwrap()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    fn entries(&self) -> Vec<(Priority, String)> {
        self.emitted.lock().unwrap().clone()
    }
}

impl Backend for Arc<MockBackend> {
    fn open(&self) {
        self.open_count.fetch_add(1, Ordering::SeqCst);
    }

    fn close(&self) {
        self.close_count.fetch_add(1, Ordering::SeqCst);
    }

    fn emit(&self, priority: Priority, message: &str) {
        #[cfg(any(target_os = "linux", target_os = "android", target_os = "macos"))]
        if let Some(value) = self.errno_to_set {
            super::errno::set_errno(value);
        }
        self.emitted
            .lock()
            .unwrap()
            .push((priority, message.to_string()));
    }

    fn limits_rate(&self) -> bool {
        self.limits_rate
    }

    fn pause(&self) {}
}

/// Builds a private logger over a recording backend.
fn mock_logger(level: Priority) -> (Logger, Arc<MockBackend>) {
    let mock = Arc::new(MockBackend::new());
    (Logger::new(level, Box::new(Arc::clone(&mock))), mock)
}

mod errors;
mod level;

#[cfg(any(target_os = "linux", target_os = "android", target_os = "macos"))]
mod errno;
