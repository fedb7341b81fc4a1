//! Equality, ordering and range checks.
//!
//! This module provides [`EqualityGuards`] for any `PartialEq` value and
//! [`OrderGuards`] for any `PartialOrd` value. Range checks delegate to
//! [`Interval`] so that every combination of inclusive and exclusive ends
//! behaves the same way.

use std::fmt::Debug;

use crate::boundary::{Bounds, Interval};
use crate::contract::{argument, check, range, render};
use crate::error::GuardResult;
use crate::param::Param;

/// Checks comparing a value against targets by equality.
pub trait EqualityGuards: PartialEq + Debug + Sized {
    /// Requires the value to equal `target`.
    fn ensure_eq<'p>(self, target: Self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| *value == target,
            |value, name| {
                argument(
                    name,
                    "eq",
                    format!("{name} must be equal to {target:?}, got {value:?}"),
                    render(&target),
                    render(value),
                )
            },
        )
    }

    /// Requires the value to differ from `target`.
    fn ensure_ne<'p>(self, target: Self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| *value != target,
            |value, name| {
                argument(
                    name,
                    "ne",
                    format!("{name} must not be equal to {target:?}"),
                    format!("anything but {target:?}"),
                    render(value),
                )
            },
        )
    }

    /// Requires the value to equal one of `members`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulwark::prelude::*;
    ///
    /// let method = "GET".ensure_one_of(&["GET", "HEAD"], "method").unwrap();
    /// assert_eq!(method, "GET");
    ///
    /// assert!("POST".ensure_one_of(&["GET", "HEAD"], "method").is_err());
    /// ```
    fn ensure_one_of<'p>(self, members: &[Self], param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| members.contains(value),
            |value, name| {
                argument(
                    name,
                    "one_of",
                    format!("{name} must be one of {members:?}, got {value:?}"),
                    format!("one of {members:?}"),
                    render(value),
                )
            },
        )
    }

    /// Requires the value to equal none of `members`.
    fn ensure_not_one_of<'p>(
        self,
        members: &[Self],
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| !members.contains(value),
            |value, name| {
                argument(
                    name,
                    "not_one_of",
                    format!("{name} must not be one of {members:?}, got {value:?}"),
                    format!("none of {members:?}"),
                    render(value),
                )
            },
        )
    }
}

impl<T: PartialEq + Debug> EqualityGuards for T {}

/// Checks comparing a value against bounds by ordering.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// let percent = 42.5_f64
///     .ensure_ge(0.0, "percent")
///     .and_then(|p| p.ensure_le(100.0, "percent"))
///     .unwrap();
/// assert_eq!(percent, 42.5);
/// ```
pub trait OrderGuards: PartialOrd + Debug + Sized {
    /// Requires the value to be strictly less than `bound`.
    fn ensure_lt<'p>(self, bound: Self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| *value < bound,
            |value, name| {
                range(
                    name,
                    "lt",
                    format!("{name} must be less than {bound:?}, got {value:?}"),
                    format!("value < {bound:?}"),
                    render(value),
                )
            },
        )
    }

    /// Requires the value to be at most `bound`.
    fn ensure_le<'p>(self, bound: Self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| *value <= bound,
            |value, name| {
                range(
                    name,
                    "le",
                    format!("{name} must be at most {bound:?}, got {value:?}"),
                    format!("value <= {bound:?}"),
                    render(value),
                )
            },
        )
    }

    /// Requires the value to be strictly greater than `bound`.
    fn ensure_gt<'p>(self, bound: Self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| *value > bound,
            |value, name| {
                range(
                    name,
                    "gt",
                    format!("{name} must be greater than {bound:?}, got {value:?}"),
                    format!("value > {bound:?}"),
                    render(value),
                )
            },
        )
    }

    /// Requires the value to be at least `bound`.
    fn ensure_ge<'p>(self, bound: Self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| *value >= bound,
            |value, name| {
                range(
                    name,
                    "ge",
                    format!("{name} must be at least {bound:?}, got {value:?}"),
                    format!("value >= {bound:?}"),
                    render(value),
                )
            },
        )
    }

    /// Requires the value to lie between `min` and `max`.
    ///
    /// Each end is inclusive or exclusive according to `bounds`, and the message
    /// renders the range with matching brackets.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulwark::prelude::*;
    ///
    /// assert!(10i32.ensure_between(1, 10, Bounds::INCLUSIVE, "n").is_ok());
    ///
    /// let err = 10i32.ensure_between(1, 10, Bounds::MAX_EXCLUSIVE, "n").unwrap_err();
    /// assert!(err.to_string().contains("[1, 10)"));
    /// ```
    fn ensure_between<'p>(
        self,
        min: Self,
        max: Self,
        bounds: Bounds,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        self.ensure_within(&Interval::new(min, max, bounds), param)
    }

    /// Requires the value to lie outside the range from `min` to `max`.
    fn ensure_not_between<'p>(
        self,
        min: Self,
        max: Self,
        bounds: Bounds,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        self.ensure_outside(&Interval::new(min, max, bounds), param)
    }

    /// Requires the value to lie within `interval`.
    fn ensure_within<'p>(
        self,
        interval: &Interval<Self>,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| interval.contains(value),
            |value, name| {
                range(
                    name,
                    "between",
                    format!("{name} must be within {interval}, got {value:?}"),
                    format!("within {interval}"),
                    render(value),
                )
            },
        )
    }

    /// Requires the value to lie outside `interval`.
    fn ensure_outside<'p>(
        self,
        interval: &Interval<Self>,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| !interval.contains(value),
            |value, name| {
                range(
                    name,
                    "not_between",
                    format!("{name} must be outside {interval}, got {value:?}"),
                    format!("outside {interval}"),
                    render(value),
                )
            },
        )
    }
}

impl<T: PartialOrd + Debug> OrderGuards for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_eq_and_ne() {
        assert_eq!(5i32.ensure_eq(5, "n").unwrap(), 5);
        assert_eq!(5i32.ensure_ne(6, "n").unwrap(), 5);

        let err = 5i32.ensure_eq(6, "n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        assert_eq!(err.code(), Some("eq"));
        assert!(err.to_string().contains("n must be equal to 6, got 5"));

        let err = "a".ensure_ne("a", "s").unwrap_err();
        assert_eq!(err.code(), Some("ne"));
    }

    #[test]
    fn test_one_of() {
        assert!('b'.ensure_one_of(&['a', 'b'], "c").is_ok());
        assert!('z'.ensure_one_of(&['a', 'b'], "c").is_err());
        assert!('z'.ensure_not_one_of(&['a', 'b'], "c").is_ok());

        let err = 'a'.ensure_not_one_of(&['a', 'b'], "c").unwrap_err();
        assert_eq!(err.code(), Some("not_one_of"));
    }

    #[test]
    fn test_one_of_empty_members() {
        assert!(1i32.ensure_one_of(&[], "n").is_err());
        assert!(1i32.ensure_not_one_of(&[], "n").is_ok());
    }

    #[test]
    fn test_ordering() {
        assert!(4i32.ensure_lt(5, "n").is_ok());
        assert!(5i32.ensure_lt(5, "n").is_err());
        assert!(5i32.ensure_le(5, "n").is_ok());
        assert!(6i32.ensure_le(5, "n").is_err());
        assert!(6i32.ensure_gt(5, "n").is_ok());
        assert!(5i32.ensure_gt(5, "n").is_err());
        assert!(5i32.ensure_ge(5, "n").is_ok());
        assert!(4i32.ensure_ge(5, "n").is_err());
    }

    #[test]
    fn test_ordering_is_range_error() {
        let err = 10i32.ensure_lt(3, "count").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        let violation = err.violation().unwrap();
        assert_eq!(violation.expected.as_deref(), Some("value < 3"));
        assert_eq!(violation.got.as_deref(), Some("10"));
    }

    #[test]
    fn test_between_message_renders_brackets() {
        let err = 0i32.ensure_between(0, 5, Bounds::MIN_EXCLUSIVE, "n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(err.to_string().contains("n must be within (0, 5], got 0"));
    }

    #[test]
    fn test_not_between() {
        assert!(7i32.ensure_not_between(0, 5, Bounds::INCLUSIVE, "n").is_ok());
        assert!(5i32.ensure_not_between(0, 5, Bounds::MAX_EXCLUSIVE, "n").is_ok());

        let err = 3i32.ensure_not_between(0, 5, Bounds::INCLUSIVE, "n").unwrap_err();
        assert_eq!(err.code(), Some("not_between"));
        assert!(err.to_string().contains("outside [0, 5]"));
    }

    #[test]
    fn test_strings_compare_lexically() {
        assert!("m".ensure_between("a", "z", Bounds::INCLUSIVE, "s").is_ok());
        assert!("zz".ensure_between("a", "z", Bounds::INCLUSIVE, "s").is_err());
    }
}
