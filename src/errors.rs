//! Error codes understood by the logging facade.
//!
//! Codes are plain `i32` values in three bands:
//!
//! - `0` is [`SUCCESS`].
//! - `1..ERROR_CODE_BASE` are OS `errno` values, described via the
//!   platform's error strings.
//! - [`ERROR_CODE_BASE`] and up are domain codes defined here.
//!
//! A code can additionally carry an *unrecoverable* marker bit, applied by
//! [`make_unrecoverable`] when an error is escalated past the point of
//! retrying. The [`SUCCESS`] and [`QUEUED`] sentinels are never escalated.

/// The operation succeeded.
pub const SUCCESS: i32 = 0;

/// First value of the domain error code band. Everything below this (and
/// above zero) is treated as an OS `errno` value.
pub const ERROR_CODE_BASE: i32 = 1024;

/// The operation was accepted and queued; completion is pending.
///
/// Like [`SUCCESS`], this is a non-error status and passes through
/// [`make_unrecoverable`] unchanged.
pub const QUEUED: i32 = ERROR_CODE_BASE + 1;

/// The component was in the wrong state for the requested operation.
pub const BAD_STATE: i32 = ERROR_CODE_BASE + 2;

/// A resource limit was exceeded.
pub const RESOURCE_LIMIT: i32 = ERROR_CODE_BASE + 3;

/// On-disk or in-memory data failed validation.
pub const CORRUPT_DATA: i32 = ERROR_CODE_BASE + 4;

/// The requested operation is not supported.
pub const UNSUPPORTED: i32 = ERROR_CODE_BASE + 5;

/// One past the last defined domain code.
pub const ERROR_CODE_LAST: i32 = ERROR_CODE_BASE + 6;

/// Marker bit identifying a code escalated by [`make_unrecoverable`].
///
/// Sits well above both the errno band and the domain band so the original
/// code survives the round trip through [`strip_unrecoverable`].
const UNRECOVERABLE_BIT: i32 = 1 << 17;

/// Marks `code` as unrecoverable.
///
/// The [`SUCCESS`] and [`QUEUED`] sentinels are returned unchanged; any
/// other code comes back with the marker bit set.
pub fn make_unrecoverable(code: i32) -> i32 {
    match code {
        SUCCESS | QUEUED => code,
        _ => code | UNRECOVERABLE_BIT,
    }
}

/// Returns `true` if `code` carries the unrecoverable marker.
pub fn is_unrecoverable(code: i32) -> bool {
    code & UNRECOVERABLE_BIT != 0
}

/// Removes the unrecoverable marker, recovering the original code.
pub fn strip_unrecoverable(code: i32) -> i32 {
    code & !UNRECOVERABLE_BIT
}

/// Returns a human-readable description of `code`.
///
/// Unknown codes never fail to describe; they render as `"unknown error N"`.
/// An escalated code is described as its base code with an
/// `" (unrecoverable)"` suffix.
pub fn string_error(code: i32) -> String {
    if is_unrecoverable(code) {
        let mut text = string_error(strip_unrecoverable(code));
        text.push_str(" (unrecoverable)");
        return text;
    }

    match code {
        SUCCESS => "success".to_string(),
        QUEUED => "operation queued".to_string(),
        BAD_STATE => "bad state".to_string(),
        RESOURCE_LIMIT => "resource limit exceeded".to_string(),
        CORRUPT_DATA => "corrupt data".to_string(),
        UNSUPPORTED => "operation not supported".to_string(),
        errno if errno > 0 && errno < ERROR_CODE_BASE => os_error_string(errno),
        _ => format!("unknown error {}", code),
    }
}

/// Describes an OS errno value using the platform's error strings.
fn os_error_string(errno: i32) -> String {
    std::io::Error::from_raw_os_error(errno).to_string()
}
