//! User-space backend: syslog-style lines to a byte sink.

use core::sync::atomic::{AtomicBool, Ordering};
use std::io::Write;

use chrono::Local;
use spin::Mutex;

use super::Backend;
use crate::logger::level::Priority;

/// Writes `"<timestamp> ident[pid] LEVEL: message"` lines.
///
/// The sink defaults to stderr; tests inject an in-memory buffer. As with
/// `syslog(3)`, emitting without an explicit `open` still works; `open`
/// and `close` only track the channel state.
pub struct UserBackend {
    ident: String,
    pid: u32,
    opened: AtomicBool,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl UserBackend {
    /// Backend logging to stderr, identified by the current executable name.
    pub fn to_stderr() -> Self {
        Self::with_sink(&default_ident(), Box::new(std::io::stderr()))
    }

    /// Backend logging to an arbitrary sink under the given ident.
    pub fn with_sink(ident: &str, sink: Box<dyn Write + Send>) -> Self {
        Self {
            ident: ident.to_string(),
            pid: std::process::id(),
            opened: AtomicBool::new(false),
            sink: Mutex::new(sink),
        }
    }

    /// Whether the channel is currently open.
    pub fn is_open(&self) -> bool {
        self.opened.load(Ordering::Acquire)
    }
}

impl Backend for UserBackend {
    fn open(&self) {
        self.opened.store(true, Ordering::Release);
    }

    fn close(&self) {
        self.opened.store(false, Ordering::Release);
        let _ = self.sink.lock().flush();
    }

    fn emit(&self, priority: Priority, message: &str) {
        let timestamp = Local::now().format("%b %e %H:%M:%S");
        let mut sink = self.sink.lock();
        let _ = writeln!(
            sink,
            "{} {}[{}] {}: {}",
            timestamp,
            self.ident,
            self.pid,
            priority.as_name(),
            message
        );
    }

    fn limits_rate(&self) -> bool {
        false
    }

    fn pause(&self) {}
}

/// Ident for the default backend: the executable name, if discoverable.
fn default_ident() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "unilog".to_string())
}
