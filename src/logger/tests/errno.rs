// src/logger/tests/errno.rs
//
// Emission must leave the caller's errno exactly as found, even when the
// backend's own I/O overwrites it.

use std::sync::Arc;

use super::*;
use crate::errors;
use crate::logger::errno::{errno, set_errno};

fn clobbering_logger(level: Priority) -> (Logger, Arc<MockBackend>) {
    let mock = Arc::new(MockBackend::clobbering_errno(71));
    (Logger::new(level, Box::new(Arc::clone(&mock))), mock)
}

#[test]
fn test_log_preserves_errno() {
    let (logger, mock) = clobbering_logger(Priority::Info);

    set_errno(7);
    test_log!(logger, Priority::Info, "backend will clobber errno");

    assert_eq!(errno(), 7);
    assert_eq!(mock.emit_count(), 1);
}

#[test]
fn test_log_with_error_preserves_errno() {
    let (logger, _mock) = clobbering_logger(Priority::Info);

    set_errno(13);
    let returned = logger.log_with_error(
        Priority::Error,
        errors::BAD_STATE,
        format_args!("rebuild failed"),
    );

    assert_eq!(returned, errors::BAD_STATE);
    assert_eq!(errno(), 13);
}

#[test]
fn test_backtrace_preserves_errno() {
    let (logger, _mock) = clobbering_logger(Priority::Debug);

    set_errno(22);
    logger.log_backtrace(Priority::Error);

    assert_eq!(errno(), 22);
}

#[test]
fn test_open_close_preserve_errno() {
    let (logger, _mock) = clobbering_logger(Priority::Info);

    set_errno(5);
    logger.open();
    logger.close();

    assert_eq!(errno(), 5);
}
