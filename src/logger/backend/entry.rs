//! Fixed-size buffered log entries for the kernel-mode ring.

use core::fmt;

use crate::logger::config::MAX_LOG_MESSAGE_LENGTH;
use crate::logger::level::Priority;

/// One buffered log line.
///
/// The message is stored inline so entries can be copied in and out of the
/// ring without allocating. Messages longer than
/// [`MAX_LOG_MESSAGE_LENGTH`] are truncated at a UTF-8 boundary.
#[derive(Clone)]
pub struct BufferedEntry {
    priority: Priority,
    length: usize,
    timestamp_us: u64,
    message: [u8; MAX_LOG_MESSAGE_LENGTH],
}

impl BufferedEntry {
    /// An entry with no message, used to pre-fill ring slots.
    pub(super) const fn empty() -> Self {
        Self {
            priority: Priority::Debug,
            length: 0,
            timestamp_us: 0,
            message: [0; MAX_LOG_MESSAGE_LENGTH],
        }
    }

    /// Builds an entry from a rendered message, truncating if necessary.
    pub(super) fn new(priority: Priority, timestamp_us: u64, message: &str) -> Self {
        let text = truncate_to_boundary(message, MAX_LOG_MESSAGE_LENGTH);
        let mut buffer = [0; MAX_LOG_MESSAGE_LENGTH];
        buffer[..text.len()].copy_from_slice(text.as_bytes());
        Self {
            priority,
            length: text.len(),
            timestamp_us,
            message: buffer,
        }
    }

    /// The buffered message text.
    pub fn message(&self) -> &str {
        // length always marks a UTF-8 boundary of a str we copied in.
        core::str::from_utf8(&self.message[..self.length]).unwrap_or("")
    }

    /// Priority the entry was logged at.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Microseconds since the backend was created.
    pub fn timestamp_us(&self) -> u64 {
        self.timestamp_us
    }
}

impl fmt::Display for BufferedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:5}.{:06}] [{}] {}",
            self.timestamp_us / 1_000_000,
            self.timestamp_us % 1_000_000,
            self.priority.as_name(),
            self.message()
        )
    }
}

/// Cuts `message` down to at most `max` bytes without splitting a character.
fn truncate_to_boundary(message: &str, max: usize) -> &str {
    if message.len() <= max {
        return message;
    }
    let mut end = max;
    while end > 0 && !message.is_char_boundary(end) {
        end -= 1;
    }
    &message[..end]
}
