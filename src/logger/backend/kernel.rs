//! Kernel-mode backend: printk-style ring buffer with a console mirror.

use core::sync::atomic::{AtomicU8, Ordering};
use std::io::Write;
use std::time::Instant;

use super::Backend;
use super::entry::BufferedEntry;
use super::ring::EntryRing;
use crate::logger::config::{DEFAULT_CONSOLE_LEVEL, DEFAULT_LOG_LEVEL, LOG_PAUSE};
use crate::logger::level::Priority;

/// Buffers every accepted message in a bounded lock-free ring and mirrors
/// entries at or above the console threshold straight to stderr.
///
/// This backend enforces rate limiting and honors `pause_briefly`, the two
/// behaviors that only matter when log pressure can outrun the sink.
pub struct KernelBackend {
    ring: EntryRing,
    console_level: AtomicU8,
    created: Instant,
}

impl KernelBackend {
    /// Backend with the default console threshold.
    pub fn new() -> Self {
        Self::with_console_level(DEFAULT_CONSOLE_LEVEL)
    }

    /// Backend mirroring entries at or above `console_level` to stderr.
    pub fn with_console_level(console_level: Priority) -> Self {
        Self {
            ring: EntryRing::new(),
            console_level: AtomicU8::new(console_level as u8),
            created: Instant::now(),
        }
    }

    /// Drains the next unread entry from the ring.
    pub fn read(&self) -> Option<BufferedEntry> {
        self.ring.read()
    }

    /// Unread entries currently buffered.
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// True if no unread entries are buffered.
    pub fn is_empty(&self) -> bool {
        self.ring.len() == 0
    }

    /// Entries overwritten before being read.
    pub fn dropped(&self) -> usize {
        self.ring.dropped()
    }

    /// Discards all unread entries.
    pub fn clear(&self) {
        self.ring.clear();
    }

    /// Sets the console-mirror threshold.
    pub fn set_console_level(&self, level: Priority) {
        self.console_level.store(level as u8, Ordering::Release);
    }

    /// The current console-mirror threshold.
    pub fn console_level(&self) -> Priority {
        let level = self.console_level.load(Ordering::Acquire);
        Priority::from_u8(level).unwrap_or(DEFAULT_LOG_LEVEL)
    }

    fn mirrors_to_console(&self, priority: Priority) -> bool {
        priority as u8 <= self.console_level.load(Ordering::Acquire)
    }

    fn mirror_to_console(&self, entry: &BufferedEntry) {
        // Single write so concurrent mirrors do not interleave mid-line.
        let priority = entry.priority();
        let line = format!(
            "{}{}{}\n",
            priority.color_code(),
            entry,
            priority.reset_color_code()
        );
        let _ = std::io::stderr().write_all(line.as_bytes());
    }
}

impl Default for KernelBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for KernelBackend {
    fn open(&self) {}

    fn close(&self) {}

    fn emit(&self, priority: Priority, message: &str) {
        let timestamp_us = self.created.elapsed().as_micros() as u64;
        let entry = BufferedEntry::new(priority, timestamp_us, message);
        if self.mirrors_to_console(priority) {
            self.mirror_to_console(&entry);
        }
        self.ring.write(entry);
    }

    fn limits_rate(&self) -> bool {
        true
    }

    fn pause(&self) {
        std::thread::sleep(LOG_PAUSE);
    }
}
