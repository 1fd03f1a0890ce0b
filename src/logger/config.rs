//! Logging configuration

use core::time::Duration;

use super::level::Priority;

/// Byte budget for the kernel-mode log ring.
pub const KERNEL_LOG_BUFFER_SIZE: usize = 16 * 1024; // 16KB

/// Maximum length of a single buffered log message.
pub const MAX_LOG_MESSAGE_LENGTH: usize = 256;

/// Default minimum priority; less urgent messages are discarded.
pub const DEFAULT_LOG_LEVEL: Priority = Priority::Info;

/// Default console-mirror threshold for the kernel backend.
pub const DEFAULT_CONSOLE_LEVEL: Priority = Priority::Warning;

/// Rate-limit window length for `log_ratelimited!` call sites.
pub const DEFAULT_RATELIMIT_INTERVAL: Duration = Duration::from_secs(5);

/// Messages allowed per rate-limit window before suppression starts.
pub const DEFAULT_RATELIMIT_BURST: u32 = 10;

/// How long `pause_briefly` sleeps in kernel mode so burst output does not
/// overrun the log buffers.
pub const LOG_PAUSE: Duration = Duration::from_millis(4);
