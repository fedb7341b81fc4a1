//! Integration tests for equality, ordering and membership checks.

use bulwark::prelude::*;

#[test]
fn test_equality_returns_value() {
    let region = String::from("eu-west-1");
    let region = region.ensure_eq(String::from("eu-west-1"), "region").unwrap();
    assert_eq!(region, "eu-west-1");
}

#[test]
fn test_equality_failure_reports_both_sides() {
    let err = "staging".ensure_eq("production", "env").unwrap_err();
    let violation = err.violation().unwrap();

    assert_eq!(err.kind(), ErrorKind::Argument);
    assert_eq!(violation.param, "env");
    assert_eq!(violation.got.as_deref(), Some("\"staging\""));
    assert!(violation.expected.as_deref().unwrap().contains("production"));
}

#[test]
fn test_not_equal() {
    assert!('a'.ensure_ne('b', "c").is_ok());
    assert_eq!('a'.ensure_ne('a', "c").unwrap_err().code(), Some("ne"));
}

#[test]
fn test_ordering_errors_are_range_errors() {
    let cases = [
        5i64.ensure_lt(5, "n"),
        6i64.ensure_le(5, "n"),
        5i64.ensure_gt(5, "n"),
        4i64.ensure_ge(5, "n"),
    ];

    for result in cases {
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Range);
    }
}

#[test]
fn test_ordering_on_strings() {
    assert!("apple".ensure_lt("banana", "fruit").is_ok());
    assert!("cherry".ensure_le("banana", "fruit").is_err());
}

#[test]
fn test_ordering_chains() {
    let percent = 42u8
        .ensure_ge(0, "percent")
        .and_then(|p| p.ensure_le(100, "percent"))
        .unwrap();
    assert_eq!(percent, 42);
}

#[test]
fn test_one_of() {
    #[derive(Debug, PartialEq)]
    enum Method {
        Get,
        Post,
        Delete,
    }

    let allowed = [Method::Get, Method::Post];
    assert_eq!(Method::Get.ensure_one_of(&allowed, "method").unwrap(), Method::Get);

    let err = Method::Delete.ensure_one_of(&allowed, "method").unwrap_err();
    assert_eq!(err.code(), Some("one_of"));
    assert!(Method::Delete.ensure_not_one_of(&allowed, "method").is_ok());
}
