//! Integration tests for zero, sign and parity checks.

use bulwark::prelude::*;

#[test]
fn test_zero_checks_across_types() {
    assert!(0u64.ensure_zero("n").is_ok());
    assert!(0.0f32.ensure_zero("n").is_ok());
    assert!((-0.0f64).ensure_zero("n").is_ok());
    assert!(0.5f64.ensure_not_zero("n").is_ok());

    let err = 0i16.ensure_not_zero("divisor").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
    assert_eq!(err.code(), Some("not_zero"));
}

#[test]
fn test_sign_checks_on_floats() {
    assert_eq!(1.5f64.ensure_positive("rate").unwrap(), 1.5);
    assert!((-0.001f64).ensure_negative("delta").is_ok());
    assert!(0.0f64.ensure_positive("rate").is_err());
    assert!(0.0f64.ensure_non_negative("rate").is_ok());
}

#[test]
fn test_sign_failure_message() {
    let err = (-3i32).ensure_positive("workers").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.param(), Some("workers"));
    assert!(err.to_string().starts_with("workers must be positive"));
}

#[test]
fn test_non_positive() {
    assert!((-1i8).ensure_non_positive("n").is_ok());
    assert!(0i8.ensure_non_positive("n").is_ok());
    assert_eq!(1i8.ensure_non_positive("n").unwrap_err().code(), Some("non_positive"));
}

#[test]
fn test_parity_on_unsigned_and_wide_types() {
    assert!(u128::MAX.ensure_odd("n").is_ok());
    assert!(usize::MAX.ensure_even("n").is_err());
    assert!(i128::MIN.ensure_even("n").is_ok());
    assert!(2u8.ensure_odd("n").is_err());
}

#[test]
fn test_parity_failure_is_argument_error() {
    let err = 9u32.ensure_even("batch").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
    assert!(err.to_string().contains("batch must be even, got 9"));
}
