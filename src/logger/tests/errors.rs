// src/logger/tests/errors.rs

use super::*;
use crate::errors;

#[test]
fn test_string_error_bands() {
    assert_eq!(errors::string_error(errors::SUCCESS), "success");
    assert_eq!(errors::string_error(errors::QUEUED), "operation queued");
    assert_eq!(errors::string_error(errors::BAD_STATE), "bad state");
    assert_eq!(
        errors::string_error(errors::ERROR_CODE_LAST + 100),
        format!("unknown error {}", errors::ERROR_CODE_LAST + 100)
    );

    // errno band delegates to the platform (2 == ENOENT everywhere we run).
    let text = errors::string_error(2);
    assert!(text.contains("os error 2") || text.to_lowercase().contains("no such file"));
}

#[test]
fn test_unrecoverable_marking() {
    let escalated = errors::make_unrecoverable(errors::CORRUPT_DATA);

    assert_ne!(escalated, errors::CORRUPT_DATA);
    assert!(errors::is_unrecoverable(escalated));
    assert!(!errors::is_unrecoverable(errors::CORRUPT_DATA));
    assert_eq!(errors::strip_unrecoverable(escalated), errors::CORRUPT_DATA);

    // Marking is idempotent.
    assert_eq!(errors::make_unrecoverable(escalated), escalated);
}

#[test]
fn test_sentinels_never_escalate() {
    assert_eq!(errors::make_unrecoverable(errors::SUCCESS), errors::SUCCESS);
    assert_eq!(errors::make_unrecoverable(errors::QUEUED), errors::QUEUED);
}

#[test]
fn test_escalated_string_mentions_base() {
    let escalated = errors::make_unrecoverable(errors::BAD_STATE);
    assert_eq!(errors::string_error(escalated), "bad state (unrecoverable)");
}

#[test]
fn test_log_with_error_returns_code_unchanged() {
    let (logger, mock) = mock_logger(Priority::Warning);

    // Emitted: at threshold.
    let returned = logger.log_with_error(
        Priority::Error,
        errors::RESOURCE_LIMIT,
        format_args!("allocating {} slots", 64),
    );
    assert_eq!(returned, errors::RESOURCE_LIMIT);

    // Filtered: same return value, no emission.
    let returned = logger.log_with_error(
        Priority::Debug,
        errors::RESOURCE_LIMIT,
        format_args!("allocating {} slots", 64),
    );
    assert_eq!(returned, errors::RESOURCE_LIMIT);

    assert_eq!(mock.emit_count(), 1);
    assert_eq!(
        mock.messages(),
        ["allocating 64 slots: resource limit exceeded"]
    );
}

#[test]
fn test_log_unrecoverable_escalates_and_logs_fatal() {
    let (logger, mock) = mock_logger(Priority::Info);

    let returned = logger.log_unrecoverable(errors::CORRUPT_DATA, format_args!("index header"));

    assert_eq!(returned, errors::make_unrecoverable(errors::CORRUPT_DATA));
    assert_ne!(returned, errors::CORRUPT_DATA);

    let entries = mock.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, Priority::FATAL);
    assert_eq!(entries[0].1, "index header: corrupt data");
}

#[test]
fn test_log_unrecoverable_sentinel_passthrough() {
    let (logger, mock) = mock_logger(Priority::Debug);

    assert_eq!(
        logger.log_unrecoverable(errors::SUCCESS, format_args!("all fine")),
        errors::SUCCESS
    );
    assert_eq!(
        logger.log_unrecoverable(errors::QUEUED, format_args!("pending")),
        errors::QUEUED
    );

    // Sentinels are not errors: nothing is emitted for them.
    assert_eq!(mock.emit_count(), 0);
}
