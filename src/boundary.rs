//! Inclusive/exclusive range boundaries.
//!
//! This module provides [`Boundary`], [`Bounds`] and [`Interval`], which decide
//! whether a value lies within a range whose two ends are independently
//! inclusive or exclusive.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};

/// Whether a range end admits the bound value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Boundary {
    /// The bound value is part of the range.
    #[default]
    Inclusive,
    /// The bound value is not part of the range.
    Exclusive,
}

/// The boundary kinds of both range ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    /// Boundary of the lower end.
    pub min: Boundary,
    /// Boundary of the upper end.
    pub max: Boundary,
}

impl Bounds {
    /// `[min, max]`
    pub const INCLUSIVE: Bounds = Bounds::new(Boundary::Inclusive, Boundary::Inclusive);
    /// `(min, max)`
    pub const EXCLUSIVE: Bounds = Bounds::new(Boundary::Exclusive, Boundary::Exclusive);
    /// `(min, max]`
    pub const MIN_EXCLUSIVE: Bounds = Bounds::new(Boundary::Exclusive, Boundary::Inclusive);
    /// `[min, max)`
    pub const MAX_EXCLUSIVE: Bounds = Bounds::new(Boundary::Inclusive, Boundary::Exclusive);

    /// Creates bounds from the boundary kinds of the lower and upper end.
    pub const fn new(min: Boundary, max: Boundary) -> Self {
        Self { min, max }
    }
}

/// A range between two values with per-end inclusivity.
///
/// The comparison never special-cases degenerate ranges: when `min > max`, or
/// when `min == max` with an exclusive end, no value is contained. Values that
/// are unordered against a limit (NaN) are never contained.
///
/// # Example
///
/// ```rust
/// use bulwark::{Bounds, Interval};
///
/// let interval = Interval::new(1, 10, Bounds::MAX_EXCLUSIVE);
///
/// assert!(interval.contains(&1));
/// assert!(!interval.contains(&10));
/// assert_eq!(interval.to_string(), "[1, 10)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    /// Lower limit.
    pub min: T,
    /// Upper limit.
    pub max: T,
    /// Inclusivity of both limits.
    pub bounds: Bounds,
}

impl<T: PartialOrd> Interval<T> {
    /// Creates an interval from its limits and boundary kinds.
    pub fn new(min: T, max: T, bounds: Bounds) -> Self {
        Self { min, max, bounds }
    }

    /// Creates an interval including both limits.
    pub fn inclusive(min: T, max: T) -> Self {
        Self::new(min, max, Bounds::INCLUSIVE)
    }

    /// Creates an interval excluding both limits.
    pub fn exclusive(min: T, max: T) -> Self {
        Self::new(min, max, Bounds::EXCLUSIVE)
    }

    /// Returns true if `value` falls below the lower limit.
    ///
    /// A value that does not compare with the limit, such as NaN, violates it.
    pub fn lower_violated(&self, value: &T) -> bool {
        match value.partial_cmp(&self.min) {
            None => true,
            Some(ordering) => match self.bounds.min {
                Boundary::Exclusive => ordering != Ordering::Greater,
                Boundary::Inclusive => ordering == Ordering::Less,
            },
        }
    }

    /// Returns true if `value` falls above the upper limit.
    ///
    /// A value that does not compare with the limit, such as NaN, violates it.
    pub fn upper_violated(&self, value: &T) -> bool {
        match value.partial_cmp(&self.max) {
            None => true,
            Some(ordering) => match self.bounds.max {
                Boundary::Exclusive => ordering != Ordering::Less,
                Boundary::Inclusive => ordering == Ordering::Greater,
            },
        }
    }

    /// Returns true if neither limit is violated.
    pub fn contains(&self, value: &T) -> bool {
        !self.lower_violated(value) && !self.upper_violated(value)
    }
}

/// Renders with the bracket matching each boundary, using `Debug` for the limits.
impl<T: Debug> Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = match self.bounds.min {
            Boundary::Inclusive => '[',
            Boundary::Exclusive => '(',
        };
        let close = match self.bounds.max {
            Boundary::Inclusive => ']',
            Boundary::Exclusive => ')',
        };
        write!(f, "{}{:?}, {:?}{}", open, self.min, self.max, close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inclusive_contains_limits() {
        let interval = Interval::inclusive(5, 10);
        assert!(interval.contains(&5));
        assert!(interval.contains(&7));
        assert!(interval.contains(&10));
        assert!(!interval.contains(&4));
        assert!(!interval.contains(&11));
    }

    #[test]
    fn test_exclusive_rejects_limits() {
        let interval = Interval::exclusive(5, 10);
        assert!(!interval.contains(&5));
        assert!(interval.contains(&6));
        assert!(interval.contains(&9));
        assert!(!interval.contains(&10));
    }

    #[test]
    fn test_mixed_bounds() {
        let interval = Interval::new(0.0, 1.0, Bounds::MIN_EXCLUSIVE);
        assert!(!interval.contains(&0.0));
        assert!(interval.contains(&1.0));

        let interval = Interval::new(0.0, 1.0, Bounds::MAX_EXCLUSIVE);
        assert!(interval.contains(&0.0));
        assert!(!interval.contains(&1.0));
    }

    #[test]
    fn test_violation_sides() {
        let interval = Interval::inclusive(5, 10);
        assert!(interval.lower_violated(&4));
        assert!(!interval.upper_violated(&4));
        assert!(interval.upper_violated(&11));
        assert!(!interval.lower_violated(&11));
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let interval = Interval::inclusive(10, 5);
        for value in 0..15 {
            assert!(!interval.contains(&value));
        }
    }

    #[test]
    fn test_nan_violates_both_limits() {
        let interval = Interval::inclusive(0.0, 1.0);
        assert!(interval.lower_violated(&f64::NAN));
        assert!(interval.upper_violated(&f64::NAN));
        assert!(!interval.contains(&f64::NAN));

        let unbounded = Interval::exclusive(f64::NEG_INFINITY, f64::INFINITY);
        assert!(unbounded.contains(&0.0));
        assert!(!unbounded.contains(&f64::NAN));
    }

    #[test]
    fn test_nan_limit_contains_nothing() {
        let interval = Interval::inclusive(f64::NAN, 1.0);
        assert!(!interval.contains(&0.5));
    }

    #[test]
    fn test_display_brackets() {
        assert_eq!(Interval::inclusive(1, 2).to_string(), "[1, 2]");
        assert_eq!(Interval::exclusive(1, 2).to_string(), "(1, 2)");
        assert_eq!(Interval::new(1, 2, Bounds::MIN_EXCLUSIVE).to_string(), "(1, 2]");
        assert_eq!(Interval::new(1, 2, Bounds::MAX_EXCLUSIVE).to_string(), "[1, 2)");
        assert_eq!(Interval::inclusive("a", "z").to_string(), "[\"a\", \"z\"]");
    }

    #[test]
    fn test_default_bounds_are_inclusive() {
        assert_eq!(Bounds::default(), Bounds::INCLUSIVE);
    }
}
