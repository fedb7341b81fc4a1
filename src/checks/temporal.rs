//! Date and time checks.
//!
//! This module provides [`TemporalGuards`] for strict before/after bounds, the
//! supported SQL `datetime` range, and comparisons against the wall clock.

use std::fmt::Debug;
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};

use crate::contract::{check, range, render};
use crate::error::GuardResult;
use crate::param::Param;

/// Earliest instant representable by a SQL `datetime`: 1753-01-01T00:00:00.
pub static SQL_DATETIME_MIN: LazyLock<NaiveDateTime> = LazyLock::new(|| {
    NaiveDate::from_ymd_opt(1753, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("1753-01-01T00:00:00 is a valid date-time")
});

/// Latest instant representable by a SQL `datetime`: 9999-12-31T23:59:59.997.
pub static SQL_DATETIME_MAX: LazyLock<NaiveDateTime> = LazyLock::new(|| {
    NaiveDate::from_ymd_opt(9999, 12, 31)
        .and_then(|d| d.and_hms_milli_opt(23, 59, 59, 997))
        .expect("9999-12-31T23:59:59.997 is a valid date-time")
});

/// A point in time that can be compared with the wall clock.
pub trait Timestamp: PartialOrd + Debug + Sized {
    /// Returns the current time in this representation.
    fn now() -> Self;

    /// Returns this point in time as a naive UTC date-time.
    fn to_naive_utc(&self) -> NaiveDateTime;
}

impl Timestamp for NaiveDateTime {
    fn now() -> Self {
        Utc::now().naive_utc()
    }

    fn to_naive_utc(&self) -> NaiveDateTime {
        *self
    }
}

/// Dates compare against today's UTC date, and map to midnight for range checks.
impl Timestamp for NaiveDate {
    fn now() -> Self {
        Utc::now().date_naive()
    }

    fn to_naive_utc(&self) -> NaiveDateTime {
        self.and_time(chrono::NaiveTime::MIN)
    }
}

impl Timestamp for DateTime<Utc> {
    fn now() -> Self {
        Utc::now()
    }

    fn to_naive_utc(&self) -> NaiveDateTime {
        self.naive_utc()
    }
}

impl Timestamp for DateTime<FixedOffset> {
    fn now() -> Self {
        Utc::now().fixed_offset()
    }

    fn to_naive_utc(&self) -> NaiveDateTime {
        self.naive_utc()
    }
}

impl Timestamp for DateTime<Local> {
    fn now() -> Self {
        Local::now()
    }

    fn to_naive_utc(&self) -> NaiveDateTime {
        self.naive_utc()
    }
}

fn in_sql_range<T: Timestamp>(value: &T) -> bool {
    let instant = value.to_naive_utc();
    instant >= *SQL_DATETIME_MIN && instant <= *SQL_DATETIME_MAX
}

fn sql_range() -> String {
    format!("[{:?}, {:?}]", *SQL_DATETIME_MIN, *SQL_DATETIME_MAX)
}

/// Checks on dates and times.
///
/// Every failure is a [`GuardError::Range`](crate::GuardError::Range).
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
/// use chrono::NaiveDate;
///
/// let launch = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let cutoff = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// assert!(launch.ensure_after(cutoff, "launch").is_ok());
/// assert!(launch.ensure_in_sql_range("launch").is_ok());
/// assert!(launch.ensure_past("launch").is_ok());
/// ```
pub trait TemporalGuards: Timestamp {
    /// Requires the value to be strictly after `bound`.
    fn ensure_after<'p>(self, bound: Self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| *value > bound,
            |value, name| {
                range(
                    name,
                    "after",
                    format!("{name} must be after {bound:?}, got {value:?}"),
                    format!("after {bound:?}"),
                    render(value),
                )
            },
        )
    }

    /// Requires the value to be strictly before `bound`.
    fn ensure_before<'p>(self, bound: Self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| *value < bound,
            |value, name| {
                range(
                    name,
                    "before",
                    format!("{name} must be before {bound:?}, got {value:?}"),
                    format!("before {bound:?}"),
                    render(value),
                )
            },
        )
    }

    /// Requires the value to lie within [`SQL_DATETIME_MIN`]..=[`SQL_DATETIME_MAX`].
    fn ensure_in_sql_range<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(self, param, in_sql_range::<Self>, |value, name| {
            let range_str = sql_range();
            range(
                name,
                "sql_range",
                format!("{name} must be within the SQL datetime range {range_str}, got {value:?}"),
                format!("within {range_str}"),
                render(value),
            )
        })
    }

    /// Requires the value to lie outside the SQL `datetime` range.
    fn ensure_outside_sql_range<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| !in_sql_range(value),
            |value, name| {
                let range_str = sql_range();
                range(
                    name,
                    "outside_sql_range",
                    format!(
                        "{name} must be outside the SQL datetime range {range_str}, got {value:?}"
                    ),
                    format!("outside {range_str}"),
                    render(value),
                )
            },
        )
    }

    /// Requires the value to be later than the current time.
    fn ensure_future<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        let now = Self::now();
        check(
            self,
            param,
            |value| *value > now,
            |value, name| {
                range(
                    name,
                    "future",
                    format!("{name} must be in the future, got {value:?}"),
                    format!("after {now:?}"),
                    render(value),
                )
            },
        )
    }

    /// Requires the value to be earlier than the current time.
    fn ensure_past<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        let now = Self::now();
        check(
            self,
            param,
            |value| *value < now,
            |value, name| {
                range(
                    name,
                    "past",
                    format!("{name} must be in the past, got {value:?}"),
                    format!("before {now:?}"),
                    render(value),
                )
            },
        )
    }
}

impl<T: Timestamp> TemporalGuards for T {}
