//! Zero, sign and parity checks.
//!
//! Sign checks compare against `T::default()`, which is zero for every primitive
//! numeric type. Parity checks are limited to the primitive integers through the
//! sealed [`Integer`] trait.

use std::fmt::Debug;

use crate::contract::{argument, check, range, render};
use crate::error::GuardResult;
use crate::param::Param;

/// Checks comparing a number against zero.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// assert_eq!(3i32.ensure_positive("workers").unwrap(), 3);
/// assert!(0i32.ensure_positive("workers").is_err());
/// assert!(0.0_f32.ensure_non_negative("ratio").is_ok());
/// ```
pub trait SignGuards: PartialOrd + Default + Debug + Sized {
    /// Requires the value to be zero.
    fn ensure_zero<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| *value == Self::default(),
            |value, name| {
                argument(
                    name,
                    "zero",
                    format!("{name} must be zero, got {value:?}"),
                    "zero",
                    render(value),
                )
            },
        )
    }

    /// Requires the value to be non-zero.
    fn ensure_not_zero<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| *value != Self::default(),
            |value, name| {
                argument(
                    name,
                    "not_zero",
                    format!("{name} must not be zero"),
                    "non-zero value",
                    render(value),
                )
            },
        )
    }

    /// Requires the value to be greater than zero.
    fn ensure_positive<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| *value > Self::default(),
            |value, name| {
                range(
                    name,
                    "positive",
                    format!("{name} must be positive, got {value:?}"),
                    "value > 0",
                    render(value),
                )
            },
        )
    }

    /// Requires the value to be less than zero.
    fn ensure_negative<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| *value < Self::default(),
            |value, name| {
                range(
                    name,
                    "negative",
                    format!("{name} must be negative, got {value:?}"),
                    "value < 0",
                    render(value),
                )
            },
        )
    }

    /// Requires the value to be zero or greater.
    fn ensure_non_negative<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| *value >= Self::default(),
            |value, name| {
                range(
                    name,
                    "non_negative",
                    format!("{name} must be non-negative, got {value:?}"),
                    "value >= 0",
                    render(value),
                )
            },
        )
    }

    /// Requires the value to be zero or less.
    fn ensure_non_positive<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| *value <= Self::default(),
            |value, name| {
                range(
                    name,
                    "non_positive",
                    format!("{name} must be non-positive, got {value:?}"),
                    "value <= 0",
                    render(value),
                )
            },
        )
    }
}

impl<T: PartialOrd + Default + Debug> SignGuards for T {}

mod sealed {
    pub trait Sealed {}
}

/// Primitive integer types supporting parity checks.
pub trait Integer: sealed::Sealed + Copy + Debug {
    /// Returns true if the value is divisible by two.
    fn is_even(self) -> bool;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Integer for $t {
                fn is_even(self) -> bool {
                    self % 2 == 0
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Checks on the parity of an integer.
pub trait ParityGuards: Integer {
    /// Requires the value to be even.
    fn ensure_even<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(self, param, |value| value.is_even(), |value, name| {
            argument(
                name,
                "even",
                format!("{name} must be even, got {value:?}"),
                "even number",
                render(value),
            )
        })
    }

    /// Requires the value to be odd.
    fn ensure_odd<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(self, param, |value| !value.is_even(), |value, name| {
            argument(
                name,
                "odd",
                format!("{name} must be odd, got {value:?}"),
                "odd number",
                render(value),
            )
        })
    }
}

impl<T: Integer> ParityGuards for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_zero() {
        assert!(0i32.ensure_zero("n").is_ok());
        assert!(0.0_f64.ensure_zero("n").is_ok());
        assert!(1i32.ensure_zero("n").is_err());
        assert!(1i32.ensure_not_zero("n").is_ok());

        let err = 0u8.ensure_not_zero("divisor").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        assert!(err.to_string().contains("divisor must not be zero"));
    }

    #[test]
    fn test_sign_checks_are_range_errors() {
        let err = (-1i32).ensure_positive("n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.code(), Some("positive"));

        let err = 0i32.ensure_negative("n").unwrap_err();
        assert_eq!(err.code(), Some("negative"));
    }

    #[test]
    fn test_non_negative_and_non_positive_accept_zero() {
        assert!(0i32.ensure_non_negative("n").is_ok());
        assert!(0i32.ensure_non_positive("n").is_ok());
        assert!((-1i32).ensure_non_negative("n").is_err());
        assert!(1i32.ensure_non_positive("n").is_err());
    }

    #[test]
    fn test_nan_is_neither_positive_nor_negative() {
        assert!(f64::NAN.ensure_positive("x").is_err());
        assert!(f64::NAN.ensure_negative("x").is_err());
        assert!(f64::NAN.ensure_not_zero("x").is_ok());
    }

    #[test]
    fn test_parity() {
        assert!(0i32.ensure_even("n").is_ok());
        assert!((-4i32).ensure_even("n").is_ok());
        assert!((-3i32).ensure_odd("n").is_ok());
        assert!(7u64.ensure_odd("n").is_ok());
        assert!(i64::MIN.ensure_even("n").is_ok());

        let err = 3i32.ensure_even("n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        assert_eq!(err.code(), Some("even"));
    }
}
