//! Ambient last-error preservation.
//!
//! Every emission operation brackets its backend call with an [`ErrnoGuard`]
//! so the caller observes the same `errno` after logging as before it, even
//! when the backend's own I/O fails and overwrites it.

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd"
))]
mod imp {
    /// Restores the `errno` observed at construction when dropped.
    pub(crate) struct ErrnoGuard {
        saved: i32,
    }

    impl ErrnoGuard {
        pub(crate) fn new() -> Self {
            Self { saved: errno() }
        }
    }

    impl Drop for ErrnoGuard {
        fn drop(&mut self) {
            set_errno(self.saved);
        }
    }

    /// Reads the calling thread's `errno`.
    pub(crate) fn errno() -> i32 {
        unsafe { *errno_location() }
    }

    /// Overwrites the calling thread's `errno`.
    pub(crate) fn set_errno(value: i32) {
        unsafe {
            *errno_location() = value;
        }
    }

    #[cfg(any(target_os = "linux", target_os = "android"))]
    fn errno_location() -> *mut i32 {
        unsafe { libc::__errno_location() }
    }

    #[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
    fn errno_location() -> *mut i32 {
        unsafe { libc::__error() }
    }

    #[cfg(any(target_os = "openbsd", target_os = "netbsd"))]
    fn errno_location() -> *mut i32 {
        unsafe { libc::__errno() }
    }
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd"
)))]
mod imp {
    /// No-op guard on platforms without a reachable thread-local `errno`.
    pub(crate) struct ErrnoGuard;

    impl ErrnoGuard {
        pub(crate) fn new() -> Self {
            Self
        }
    }
}

pub(crate) use imp::ErrnoGuard;

#[cfg(all(
    test,
    any(target_os = "linux", target_os = "android", target_os = "macos")
))]
pub(crate) use imp::{errno, set_errno};
