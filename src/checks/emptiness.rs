//! Emptiness checks.
//!
//! A value is empty when it equals its type's `Default`: `""` for strings, no
//! elements for collections, zero for numbers.

use std::fmt::Debug;

use crate::contract::{argument, check, render};
use crate::error::GuardResult;
use crate::param::Param;

/// Checks comparing a value against its type's default.
pub trait EmptinessGuards: PartialEq + Default + Debug + Sized {
    /// Requires the value to equal `Self::default()`.
    fn ensure_empty<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| *value == Self::default(),
            |value, name| {
                argument(
                    name,
                    "empty",
                    format!("{name} must be empty, got {value:?}"),
                    render(&Self::default()),
                    render(value),
                )
            },
        )
    }

    /// Requires the value to differ from `Self::default()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulwark::prelude::*;
    ///
    /// let tags = vec!["rust"].ensure_not_empty("tags").unwrap();
    /// assert_eq!(tags, ["rust"]);
    ///
    /// assert!(String::new().ensure_not_empty("name").is_err());
    /// ```
    fn ensure_not_empty<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| *value != Self::default(),
            |value, name| {
                argument(
                    name,
                    "not_empty",
                    format!("{name} must not be empty"),
                    "non-empty value",
                    render(value),
                )
            },
        )
    }
}

impl<T: PartialEq + Default + Debug> EmptinessGuards for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_strings() {
        assert!("".ensure_empty("s").is_ok());
        assert!(String::new().ensure_empty("s").is_ok());
        assert!("x".ensure_not_empty("s").is_ok());

        let err = "x".ensure_empty("s").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        assert_eq!(err.code(), Some("empty"));
    }

    #[test]
    fn test_collections() {
        assert!(Vec::<u8>::new().ensure_empty("v").is_ok());
        let err = Vec::<u8>::new().ensure_not_empty("v").unwrap_err();
        assert!(err.to_string().contains("v must not be empty"));
    }

    #[test]
    fn test_numbers_use_zero() {
        assert!(0u32.ensure_empty("n").is_ok());
        assert!(5u32.ensure_not_empty("n").is_ok());
    }
}
