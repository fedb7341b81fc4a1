//! Nullness checks on `Option`.

use std::fmt::Debug;

use crate::contract::{argument, check, render};
use crate::error::{GuardError, GuardResult, Violation};
use crate::param::Param;

/// Checks for the presence or absence of a value.
pub trait OptionGuards<T>: Sized {
    /// Requires `Some`, returning the inner value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulwark::prelude::*;
    ///
    /// let token: Option<&str> = Some("abc");
    /// assert_eq!(token.ensure_some("token").unwrap(), "abc");
    ///
    /// let missing: Option<&str> = None;
    /// let err = missing.ensure_some("token").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Null);
    /// ```
    fn ensure_some<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<T>;

    /// Requires `None`.
    fn ensure_none<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self>;
}

impl<T: Debug> OptionGuards<T> for Option<T> {
    fn ensure_some<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<T> {
        match self {
            Some(value) => Ok(value),
            None => Err(param.into().into_error(|name| {
                GuardError::Null(
                    Violation::new(name, format!("{name} must not be null"))
                        .with_code("some")
                        .with_expected("a value")
                        .with_got("None"),
                )
            })),
        }
    }

    fn ensure_none<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(self, param, Option::is_none, |value, name| {
            argument(
                name,
                "none",
                format!("{name} must be null, got {value:?}"),
                "None",
                render(value),
            )
        })
    }
}
