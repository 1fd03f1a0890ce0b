//! Priority-leveled logging facade that works in two environments.
//!
//! The same call sites log through one of two interchangeable backends,
//! selected at startup:
//!
//! - **User mode** ([`UserBackend`]): lines go to a syslog-style sink
//!   (stderr by default), stamped with a timestamp and the process ident.
//! - **Kernel mode** ([`KernelBackend`]): lines go to a bounded lock-free
//!   ring buffer, with a console mirror for urgent entries, per-call-site
//!   rate limiting, and burst pacing.
//!
//! All emission operations preserve the caller's `errno`, and the
//! error-annotated emitters return their error code unchanged so they can
//! be used directly in `return` expressions:
//!
//! ```
//! use unilog::errors;
//! use unilog::log_with_error;
//! use unilog::logger::Priority;
//!
//! fn open_index(path: &str) -> i32 {
//!     log_with_error!(Priority::Error, errors::BAD_STATE, "cannot open {}", path)
//! }
//! ```
//!
//! [`UserBackend`]: logger::backend::UserBackend
//! [`KernelBackend`]: logger::backend::KernelBackend

pub mod errors;
pub mod logger;

pub use logger::Logger;
pub use logger::Priority;
pub use logger::backend::Backend;
