//! Pointer values in log messages.
//!
//! Logged addresses are useful in development and a leak in production
//! kernel builds, so the rendering is selected at compile time: with the
//! `raw-pointers` feature (the default, and the right choice for user-space
//! builds) [`FmtPtr`] prints the raw address; without it, an opaque token.

use std::fmt;

/// Wraps an address for logging.
///
/// ```
/// use unilog::logger::FmtPtr;
///
/// let value = 7u32;
/// let rendered = format!("entry at {}", FmtPtr::of(&value));
/// # let _ = rendered;
/// ```
#[cfg_attr(not(feature = "raw-pointers"), allow(dead_code))]
pub struct FmtPtr(usize);

impl FmtPtr {
    /// Captures the address of `value`.
    pub fn of<T>(value: &T) -> Self {
        Self(value as *const T as usize)
    }

    /// Captures a raw pointer.
    pub fn from_raw<T>(ptr: *const T) -> Self {
        Self(ptr as usize)
    }
}

impl fmt::Display for FmtPtr {
    #[cfg(feature = "raw-pointers")]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }

    #[cfg(not(feature = "raw-pointers"))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(redacted)")
    }
}
