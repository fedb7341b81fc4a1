//! Length checks.
//!
//! This module provides [`HasLength`] for the built-in notion of length (Unicode
//! scalar values for strings, elements for collections), [`LengthGuards`] for
//! checks on it, and [`LengthBound`] for checks on a caller-selected length.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::{self, Debug, Display};

use crate::contract::{argument, check, render};
use crate::error::GuardResult;
use crate::param::Param;

/// Types with a built-in length.
pub trait HasLength {
    /// Returns the length of the value.
    fn length(&self) -> usize;
}

impl HasLength for str {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl HasLength for String {
    fn length(&self) -> usize {
        self.as_str().length()
    }
}

impl<T> HasLength for [T] {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> HasLength for [T; N] {
    fn length(&self) -> usize {
        N
    }
}

impl<T> HasLength for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> HasLength for HashMap<K, V, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, S> HasLength for HashSet<T, S> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> HasLength for BTreeMap<K, V> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> HasLength for BTreeSet<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: HasLength + ?Sized> HasLength for &T {
    fn length(&self) -> usize {
        (**self).length()
    }
}

/// A constraint on a length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthBound {
    /// Exactly this length.
    Exact(usize),
    /// At least this length.
    Min(usize),
    /// At most this length.
    Max(usize),
    /// Between both lengths, inclusive.
    Between(usize, usize),
}

impl LengthBound {
    /// Returns true if `length` satisfies the bound.
    pub fn admits(self, length: usize) -> bool {
        match self {
            LengthBound::Exact(n) => length == n,
            LengthBound::Min(min) => length >= min,
            LengthBound::Max(max) => length <= max,
            LengthBound::Between(min, max) => length >= min && length <= max,
        }
    }

    fn code(self) -> &'static str {
        match self {
            LengthBound::Exact(_) => "length",
            LengthBound::Min(_) => "min_length",
            LengthBound::Max(_) => "max_length",
            LengthBound::Between(_, _) => "length_between",
        }
    }
}

impl Display for LengthBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthBound::Exact(n) => write!(f, "exactly {}", n),
            LengthBound::Min(min) => write!(f, "at least {}", min),
            LengthBound::Max(max) => write!(f, "at most {}", max),
            LengthBound::Between(min, max) => write!(f, "between {} and {}", min, max),
        }
    }
}

/// Checks `selector(value)` against `bound`.
fn check_length<'p, T: Debug>(
    value: T,
    selector: impl FnOnce(&T) -> usize,
    bound: LengthBound,
    param: impl Into<Param<'p>>,
) -> GuardResult<T> {
    let length = selector(&value);
    check(
        value,
        param,
        |_| bound.admits(length),
        |value, name| {
            argument(
                name,
                bound.code(),
                format!("{name} must have a length of {bound}, got {length}"),
                format!("length {bound}"),
                render(value),
            )
        },
    )
}

/// Checks on the built-in length of a value.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// let username = "alice".ensure_length_between(3, 16, "username").unwrap();
/// assert_eq!(username, "alice");
///
/// let err = vec![1, 2].ensure_min_length(3, "items").unwrap_err();
/// assert_eq!(err.code(), Some("min_length"));
/// ```
pub trait LengthGuards: HasLength + Debug + Sized {
    /// Requires a length of exactly `length`.
    fn ensure_length<'p>(self, length: usize, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check_length(self, Self::length, LengthBound::Exact(length), param)
    }

    /// Requires a length of at least `min`.
    fn ensure_min_length<'p>(self, min: usize, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check_length(self, Self::length, LengthBound::Min(min), param)
    }

    /// Requires a length of at most `max`.
    fn ensure_max_length<'p>(self, max: usize, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check_length(self, Self::length, LengthBound::Max(max), param)
    }

    /// Requires a length between `min` and `max`, inclusive.
    fn ensure_length_between<'p>(
        self,
        min: usize,
        max: usize,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        check_length(self, Self::length, LengthBound::Between(min, max), param)
    }
}

impl<T: HasLength + Debug> LengthGuards for T {}

/// Checks on a length chosen by the caller.
///
/// ```rust
/// use bulwark::prelude::*;
///
/// let bytes = "héllo".ensure_length_by(|s| s.len(), LengthBound::Max(5), "payload");
/// assert!(bytes.is_err());
/// ```
pub trait SelectedLengthGuards: Debug + Sized {
    /// Requires `selector(&value)` to satisfy `bound`.
    fn ensure_length_by<'p>(
        self,
        selector: impl FnOnce(&Self) -> usize,
        bound: LengthBound,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        check_length(self, selector, bound, param)
    }
}

impl<T: Debug> SelectedLengthGuards for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_string_length_counts_chars() {
        assert_eq!("héllo".length(), 5);
        assert_eq!(String::from("日本").length(), 2);
        assert!("日本".ensure_length(2, "s").is_ok());
    }

    #[test]
    fn test_collection_lengths() {
        assert_eq!([1, 2, 3].length(), 3);
        assert_eq!(vec![1].length(), 1);
        let set: HashSet<i32> = [1, 2].into_iter().collect();
        assert_eq!(set.length(), 2);
        let slice: &[u8] = &[1, 2, 3, 4];
        assert_eq!(slice.length(), 4);
    }

    #[test]
    fn test_boundary_exactness() {
        let items = vec![1, 2, 3];
        assert!(items.clone().ensure_min_length(3, "items").is_ok());
        assert!(items.clone().ensure_min_length(4, "items").is_err());
        assert!(items.clone().ensure_max_length(3, "items").is_ok());
        assert!(items.ensure_max_length(2, "items").is_err());
    }

    #[test]
    fn test_length_message() {
        let err = "abcdef".ensure_length_between(1, 3, "code").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        assert_eq!(err.code(), Some("length_between"));
        assert!(err
            .to_string()
            .contains("code must have a length of between 1 and 3, got 6"));
    }

    #[test]
    fn test_length_by_selector() {
        let pairs = vec![(1, 2), (3, 4)];
        let pairs = pairs
            .ensure_length_by(|p| p.len() * 2, LengthBound::Exact(4), "pairs")
            .unwrap();
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_length_bound_admits() {
        assert!(LengthBound::Between(2, 2).admits(2));
        assert!(!LengthBound::Between(3, 2).admits(2));
        assert!(LengthBound::Min(0).admits(0));
    }
}
