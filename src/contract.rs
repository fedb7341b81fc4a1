//! The shared shape of every check.
//!
//! A check evaluates one predicate over a value it takes by value. On success the
//! value is handed back unchanged; on failure the [`Param`] decides which error is
//! returned, falling back to the category's default built by the check.

use std::fmt::Debug;

use crate::error::{GuardError, GuardResult, Violation};
use crate::param::Param;

/// Runs a single check.
///
/// `predicate` decides whether `value` passes. `describe` builds the default error
/// from the value and the parameter name; it only runs when the check fails and the
/// parameter does not override the error with its own.
///
/// Every built-in check is a call to this function, and it is public so callers can
/// plug their own predicates into the same contract.
///
/// # Example
///
/// ```rust
/// use bulwark::{check, GuardError, Violation};
///
/// let name = check(
///     "alice",
///     "name",
///     |v| v.chars().all(|c| c.is_ascii_lowercase()),
///     |v, param| {
///         GuardError::Argument(
///             Violation::new(param, format!("{param} must be lowercase, got {v:?}"))
///                 .with_code("lowercase"),
///         )
///     },
/// )
/// .unwrap();
///
/// assert_eq!(name, "alice");
/// ```
pub fn check<'p, T>(
    value: T,
    param: impl Into<Param<'p>>,
    predicate: impl FnOnce(&T) -> bool,
    describe: impl FnOnce(&T, &str) -> GuardError,
) -> GuardResult<T> {
    if predicate(&value) {
        return Ok(value);
    }
    Err(param.into().into_error(|name| describe(&value, name)))
}

/// Renders a checked value for the `got` field of a violation.
pub(crate) fn render<T: Debug + ?Sized>(value: &T) -> String {
    format!("{:?}", value)
}

/// Builds an argument error with code, message, expected and got filled in.
pub(crate) fn argument(
    name: &str,
    code: &str,
    message: String,
    expected: impl Into<String>,
    got: String,
) -> GuardError {
    GuardError::Argument(
        Violation::new(name, message)
            .with_code(code)
            .with_expected(expected)
            .with_got(got),
    )
}

/// Builds a range error with code, message, expected and got filled in.
pub(crate) fn range(
    name: &str,
    code: &str,
    message: String,
    expected: impl Into<String>,
    got: String,
) -> GuardError {
    GuardError::Range(
        Violation::new(name, message)
            .with_code(code)
            .with_expected(expected)
            .with_got(got),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn is_short(value: &&str) -> bool {
        value.len() < 4
    }

    fn too_long(value: &&str, name: &str) -> GuardError {
        argument(
            name,
            "short",
            format!("{name} must be shorter than 4 bytes"),
            "fewer than 4 bytes",
            render(value),
        )
    }

    #[test]
    fn test_success_returns_value() {
        let value = check("abc", "code", is_short, too_long).unwrap();
        assert_eq!(value, "abc");
    }

    #[test]
    fn test_failure_uses_default_error() {
        let err = check("abcdef", "code", is_short, too_long).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        let violation = err.violation().unwrap();
        assert_eq!(violation.param, "code");
        assert_eq!(violation.code, "short");
        assert_eq!(violation.got.as_deref(), Some("\"abcdef\""));
    }

    #[test]
    fn test_describe_not_called_on_success() {
        let value = check(1, "n", |_| true, |_, _| panic!("must not describe")).unwrap();
        assert_eq!(value, 1);
    }

    #[test]
    fn test_owned_value_round_trips() {
        let input = vec![1, 2, 3];
        let ptr = input.as_ptr();
        let output = check(input, "items", |v| !v.is_empty(), |_, _| unreachable!()).unwrap();
        assert_eq!(output.as_ptr(), ptr);
    }
}
