//! Integration tests for type membership checks.

use std::any::Any;

use bulwark::{ensure_dyn_type, prelude::*};

#[derive(Debug)]
struct Celsius(f64);

#[test]
fn test_static_type_membership() {
    assert!(Celsius(21.5).ensure_type::<Celsius>("temp").is_ok());
    assert!(Celsius(21.5).ensure_not_type::<f64>("temp").is_ok());

    let err = 21.5f64.ensure_type::<Celsius>("temp").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
    assert_eq!(err.code(), Some("type"));
    assert!(err.to_string().contains("Celsius"));
}

#[test]
fn test_token_captured_elsewhere() {
    let expected = TypeToken::of::<Vec<String>>();

    assert!(vec![String::from("a")]
        .ensure_type_of(expected, "names")
        .is_ok());
    assert!(vec!["a"].ensure_type_of(expected, "names").is_err());
    assert!(vec!["a"].ensure_not_type_of(expected, "names").is_ok());
    assert_eq!(expected.to_string(), expected.name());
}

#[test]
fn test_dyn_values() {
    let values: Vec<Box<dyn Any>> = vec![Box::new(1u8), Box::new("two"), Box::new(3.0f32)];
    let token = TypeToken::of::<u8>();

    let matches: Vec<bool> = values
        .iter()
        .map(|v| ensure_dyn_type(&**v, token, "value").is_ok())
        .collect();
    assert_eq!(matches, [true, false, false]);
}

#[test]
fn test_dyn_failure_names_expected_type() {
    let value: Box<dyn Any> = Box::new(String::from("x"));
    let err = ensure_dyn_type(value.as_ref(), TypeToken::of::<i32>(), "payload").unwrap_err();

    assert_eq!(err.param(), Some("payload"));
    assert!(err.to_string().contains("payload must be of type i32"));
}
