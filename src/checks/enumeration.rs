//! Flag and defined-member checks for enum-like values.
//!
//! Two distinct notions are kept apart here. Flag checks test bitwise membership
//! (`value & flag == flag`) and suit bit sets and integer masks. Defined-member
//! checks test whether a raw value converts into an enum through `TryFrom`.

use std::any::type_name;
use std::fmt::Debug;
use std::ops::BitAnd;

use crate::contract::{argument, check, render};
use crate::error::GuardResult;
use crate::param::Param;

/// Bitwise flag membership checks.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// const READ: u8 = 0b001;
/// const WRITE: u8 = 0b010;
///
/// let mode = (READ | WRITE).ensure_has_flag(WRITE, "mode").unwrap();
/// assert!(mode.ensure_lacks_flag(READ, "mode").is_err());
/// ```
pub trait FlagGuards: BitAnd<Output = Self> + Copy + PartialEq + Debug {
    /// Requires every bit of `flag` to be set.
    fn ensure_has_flag<'p>(self, flag: Self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| (*value & flag) == flag,
            |value, name| {
                argument(
                    name,
                    "has_flag",
                    format!("{name} must have flag {flag:?} set, got {value:?}"),
                    format!("flag {flag:?} set"),
                    render(value),
                )
            },
        )
    }

    /// Requires at least one bit of `flag` to be clear.
    fn ensure_lacks_flag<'p>(self, flag: Self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| (*value & flag) != flag,
            |value, name| {
                argument(
                    name,
                    "lacks_flag",
                    format!("{name} must not have flag {flag:?} set, got {value:?}"),
                    format!("flag {flag:?} not set"),
                    render(value),
                )
            },
        )
    }
}

impl<T: BitAnd<Output = T> + Copy + PartialEq + Debug> FlagGuards for T {}

/// Checks whether a raw value names a defined member of an enum.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// #[derive(Debug)]
/// enum Level {
///     Low,
///     High,
/// }
///
/// impl TryFrom<u8> for Level {
///     type Error = ();
///
///     fn try_from(raw: u8) -> Result<Self, ()> {
///         match raw {
///             0 => Ok(Level::Low),
///             1 => Ok(Level::High),
///             _ => Err(()),
///         }
///     }
/// }
///
/// assert_eq!(1u8.ensure_defined::<Level>("level").unwrap(), 1);
/// assert!(7u8.ensure_defined::<Level>("level").is_err());
/// ```
pub trait DefinedGuards: Copy + Debug {
    /// Requires `E::try_from(self)` to succeed.
    fn ensure_defined<'p, E: TryFrom<Self>>(
        self,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| E::try_from(*value).is_ok(),
            |value, name| {
                argument(
                    name,
                    "defined",
                    format!("{name} must be a defined {}, got {value:?}", type_name::<E>()),
                    format!("defined {}", type_name::<E>()),
                    render(value),
                )
            },
        )
    }

    /// Requires `E::try_from(self)` to fail.
    fn ensure_not_defined<'p, E: TryFrom<Self>>(
        self,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| E::try_from(*value).is_err(),
            |value, name| {
                argument(
                    name,
                    "not_defined",
                    format!("{name} must not be a defined {}, got {value:?}", type_name::<E>()),
                    format!("undefined {}", type_name::<E>()),
                    render(value),
                )
            },
        )
    }
}

impl<T: Copy + Debug> DefinedGuards for T {}
