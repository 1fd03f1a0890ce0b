// src/logger/tests/level.rs

use super::Priority;
use crate::logger::level::name_of;

const ALL_PRIORITIES: [Priority; 8] = [
    Priority::Emergency,
    Priority::Alert,
    Priority::Critical,
    Priority::Error,
    Priority::Warning,
    Priority::Notice,
    Priority::Info,
    Priority::Debug,
];

#[test]
fn test_name_round_trip() {
    for priority in ALL_PRIORITIES {
        let name = priority.as_name();
        assert_eq!(Priority::from_name(name), priority);
        assert_eq!(Priority::from_name(&name.to_lowercase()), priority);

        // Mixed case: first letter upper, rest lower ("Error", "Warning").
        let mixed = format!("{}{}", &name[..1], &name.to_lowercase()[1..]);
        assert_eq!(Priority::from_name(&mixed), priority);
    }
}

#[test]
fn test_unknown_name_defaults_to_info() {
    assert_eq!(Priority::from_name("VERBOSE"), Priority::Info);
    assert_eq!(Priority::from_name(""), Priority::Info);
    assert_eq!(Priority::from_name("err or"), Priority::Info);
}

#[test]
fn test_value_round_trip() {
    for priority in ALL_PRIORITIES {
        assert_eq!(Priority::from_u8(priority as u8), Some(priority));
    }
    assert_eq!(Priority::from_u8(8), None);
    assert_eq!(Priority::from_u8(255), None);
}

#[test]
fn test_name_of_out_of_range() {
    assert_eq!(name_of(3), "ERROR");
    assert_eq!(name_of(-1), "unknown");
    assert_eq!(name_of(8), "unknown");
    assert_eq!(name_of(i32::MAX), "unknown");
}

#[test]
fn test_ordering() {
    // Smaller value = more urgent; the filter relies on this.
    assert!(Priority::Emergency < Priority::Debug);
    assert!(Priority::Error < Priority::Warning);
    assert_eq!(Priority::FATAL, Priority::Critical);
}

#[test]
fn test_display_matches_name() {
    assert_eq!(format!("{}", Priority::Warning), "WARNING");
}
