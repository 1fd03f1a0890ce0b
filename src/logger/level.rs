//! Message priorities, ordered syslog-style: smaller values are more urgent.

use core::fmt;

/// Severity of a log message.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    /// System is unusable.
    Emergency = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical conditions.
    Critical = 2,
    /// Error conditions.
    Error = 3,
    /// Warning conditions.
    Warning = 4,
    /// Normal but significant condition.
    Notice = 5,
    /// Informational.
    Info = 6,
    /// Debug-level messages.
    Debug = 7,
}

/// Canonical names, indexed by priority value.
const NAMES: [&str; 8] = [
    "EMERGENCY",
    "ALERT",
    "CRITICAL",
    "ERROR",
    "WARNING",
    "NOTICE",
    "INFO",
    "DEBUG",
];

impl Priority {
    /// Priority used by the fatal-path emitters (`log_fatal!`,
    /// `log_unrecoverable`). Maps onto [`Priority::Critical`].
    pub const FATAL: Priority = Priority::Critical;

    /// Converts a raw priority value back into a `Priority`.
    pub const fn from_u8(value: u8) -> Option<Priority> {
        match value {
            0 => Some(Priority::Emergency),
            1 => Some(Priority::Alert),
            2 => Some(Priority::Critical),
            3 => Some(Priority::Error),
            4 => Some(Priority::Warning),
            5 => Some(Priority::Notice),
            6 => Some(Priority::Info),
            7 => Some(Priority::Debug),
            _ => None,
        }
    }

    /// Looks up a priority by name, case-insensitively.
    ///
    /// Unrecognized names silently map to [`Priority::Info`]; callers never
    /// see an error from a bad level name.
    pub fn from_name(name: &str) -> Priority {
        for (value, candidate) in NAMES.iter().enumerate() {
            if name.eq_ignore_ascii_case(candidate) {
                // NAMES is indexed by priority value, so value is in 0..8.
                return Priority::from_u8(value as u8).unwrap_or(Priority::Info);
            }
        }
        Priority::Info
    }

    /// The canonical upper-case name of this priority.
    pub const fn as_name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// ANSI color used when mirroring this priority to a console.
    pub const fn color_code(self) -> &'static str {
        match self {
            Self::Emergency | Self::Alert | Self::Critical => "\x1b[1;31m",
            Self::Error => "\x1b[31m",
            Self::Warning => "\x1b[33m",
            Self::Notice => "\x1b[1;37m",
            Self::Info => "\x1b[37m",
            Self::Debug => "\x1b[90m",
        }
    }

    /// Resets the console color after [`Priority::color_code`].
    pub const fn reset_color_code(self) -> &'static str {
        "\x1b[0m"
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_name())
    }
}

/// Names an arbitrary priority value, including out-of-range ones.
///
/// The wide argument type lets raw values from configuration or the wire be
/// named without a round trip through [`Priority::from_u8`].
pub fn name_of(value: i32) -> &'static str {
    match u8::try_from(value).ok().and_then(Priority::from_u8) {
        Some(priority) => priority.as_name(),
        None => "unknown",
    }
}
