//! The fluent-through-handle calling convention.
//!
//! [`Ensure`] is a stateless handle whose methods mirror the extension traits in
//! [`crate::checks`]: `ENSURE.positive(n, "n")` behaves exactly like
//! `n.ensure_positive("n")`. The methods live on the [`EnsureThat`] trait, which
//! is implemented for anything that can [`Anchor`] a call. Besides `Ensure`
//! itself that includes `Option<Ensure>` and `Option<&Ensure>`, so a handle that
//! was never set up is representable. Calling a check through a `None` handle
//! returns [`GuardError::Misuse`] before the predicate is looked at.

use std::any::Any;
use std::fmt::Debug;
use std::ops::BitAnd;

use regex::Regex;

use crate::boundary::{Bounds, Interval};
use crate::checks::{
    DefinedGuards, EmptinessGuards, EqualityGuards, FlagGuards, FormatGuards, HasLength, Integer,
    LengthBound, LengthGuards, OptionGuards, OrderGuards, ParityGuards, PredicateGuards,
    SelectedLengthGuards, SequenceGuards, SignGuards, TextGuards, TypeGuards, TypeToken, UriKind,
};
#[cfg(feature = "temporal")]
use crate::checks::{TemporalGuards, Timestamp};
use crate::error::{GuardError, GuardResult};
use crate::param::Param;

/// The stateless guard handle.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// let port = ENSURE.between(8080, 1, 65535, Bounds::INCLUSIVE, "port").unwrap();
/// assert_eq!(port, 8080);
///
/// let err = ENSURE.not_empty(String::new(), "name").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Argument);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Ensure;

/// The shared handle instance.
pub static ENSURE: Ensure = Ensure;

/// Something a façade call can be anchored on.
pub trait Anchor {
    /// Returns the live handle, or a misuse error naming `operation`.
    fn anchor(&self, operation: &'static str) -> GuardResult<Ensure>;
}

impl Anchor for Ensure {
    fn anchor(&self, _operation: &'static str) -> GuardResult<Ensure> {
        Ok(*self)
    }
}

impl Anchor for Option<Ensure> {
    fn anchor(&self, operation: &'static str) -> GuardResult<Ensure> {
        self.ok_or_else(|| null_handle(operation))
    }
}

impl Anchor for Option<&Ensure> {
    fn anchor(&self, operation: &'static str) -> GuardResult<Ensure> {
        self.copied().ok_or_else(|| null_handle(operation))
    }
}

fn null_handle(operation: &'static str) -> GuardError {
    GuardError::misuse(operation, "the ensure handle is null")
}

/// Every check, invoked through an [`Anchor`].
///
/// Each method first anchors the call, then delegates to the matching
/// extension method.
pub trait EnsureThat: Anchor {
    // Nullness

    /// Requires `Some`, returning the inner value. See [`OptionGuards::ensure_some`].
    fn not_null<'p, T: Debug>(
        &self,
        value: Option<T>,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("not_null")?;
        value.ensure_some(param)
    }

    /// Requires `None`. See [`OptionGuards::ensure_none`].
    fn null<'p, T: Debug>(
        &self,
        value: Option<T>,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Option<T>> {
        self.anchor("null")?;
        value.ensure_none(param)
    }

    // Equality and ordering

    /// See [`EqualityGuards::ensure_eq`].
    fn equal<'p, T: PartialEq + Debug>(
        &self,
        value: T,
        target: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("equal")?;
        value.ensure_eq(target, param)
    }

    /// See [`EqualityGuards::ensure_ne`].
    fn not_equal<'p, T: PartialEq + Debug>(
        &self,
        value: T,
        target: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("not_equal")?;
        value.ensure_ne(target, param)
    }

    /// See [`OrderGuards::ensure_lt`].
    fn less_than<'p, T: PartialOrd + Debug>(
        &self,
        value: T,
        bound: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("less_than")?;
        value.ensure_lt(bound, param)
    }

    /// See [`OrderGuards::ensure_le`].
    fn at_most<'p, T: PartialOrd + Debug>(
        &self,
        value: T,
        bound: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("at_most")?;
        value.ensure_le(bound, param)
    }

    /// See [`OrderGuards::ensure_gt`].
    fn greater_than<'p, T: PartialOrd + Debug>(
        &self,
        value: T,
        bound: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("greater_than")?;
        value.ensure_gt(bound, param)
    }

    /// See [`OrderGuards::ensure_ge`].
    fn at_least<'p, T: PartialOrd + Debug>(
        &self,
        value: T,
        bound: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("at_least")?;
        value.ensure_ge(bound, param)
    }

    /// See [`OrderGuards::ensure_between`].
    fn between<'p, T: PartialOrd + Debug>(
        &self,
        value: T,
        min: T,
        max: T,
        bounds: Bounds,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("between")?;
        value.ensure_between(min, max, bounds, param)
    }

    /// See [`OrderGuards::ensure_not_between`].
    fn not_between<'p, T: PartialOrd + Debug>(
        &self,
        value: T,
        min: T,
        max: T,
        bounds: Bounds,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("not_between")?;
        value.ensure_not_between(min, max, bounds, param)
    }

    /// See [`OrderGuards::ensure_within`].
    fn within<'p, T: PartialOrd + Debug>(
        &self,
        value: T,
        interval: &Interval<T>,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("within")?;
        value.ensure_within(interval, param)
    }

    /// See [`OrderGuards::ensure_outside`].
    fn outside<'p, T: PartialOrd + Debug>(
        &self,
        value: T,
        interval: &Interval<T>,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("outside")?;
        value.ensure_outside(interval, param)
    }

    // Zero, sign and parity

    /// See [`SignGuards::ensure_zero`].
    fn zero<'p, T: PartialOrd + Default + Debug>(
        &self,
        value: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("zero")?;
        value.ensure_zero(param)
    }

    /// See [`SignGuards::ensure_not_zero`].
    fn not_zero<'p, T: PartialOrd + Default + Debug>(
        &self,
        value: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("not_zero")?;
        value.ensure_not_zero(param)
    }

    /// See [`SignGuards::ensure_positive`].
    fn positive<'p, T: PartialOrd + Default + Debug>(
        &self,
        value: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("positive")?;
        value.ensure_positive(param)
    }

    /// See [`SignGuards::ensure_negative`].
    fn negative<'p, T: PartialOrd + Default + Debug>(
        &self,
        value: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("negative")?;
        value.ensure_negative(param)
    }

    /// See [`SignGuards::ensure_non_negative`].
    fn non_negative<'p, T: PartialOrd + Default + Debug>(
        &self,
        value: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("non_negative")?;
        value.ensure_non_negative(param)
    }

    /// See [`SignGuards::ensure_non_positive`].
    fn non_positive<'p, T: PartialOrd + Default + Debug>(
        &self,
        value: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("non_positive")?;
        value.ensure_non_positive(param)
    }

    /// See [`ParityGuards::ensure_even`].
    fn even<'p, T: Integer>(&self, value: T, param: impl Into<Param<'p>>) -> GuardResult<T> {
        self.anchor("even")?;
        value.ensure_even(param)
    }

    /// See [`ParityGuards::ensure_odd`].
    fn odd<'p, T: Integer>(&self, value: T, param: impl Into<Param<'p>>) -> GuardResult<T> {
        self.anchor("odd")?;
        value.ensure_odd(param)
    }

    // Emptiness, whitespace and length

    /// See [`EmptinessGuards::ensure_empty`].
    fn empty<'p, T: PartialEq + Default + Debug>(
        &self,
        value: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("empty")?;
        value.ensure_empty(param)
    }

    /// See [`EmptinessGuards::ensure_not_empty`].
    fn not_empty<'p, T: PartialEq + Default + Debug>(
        &self,
        value: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("not_empty")?;
        value.ensure_not_empty(param)
    }

    /// See [`TextGuards::ensure_whitespace`].
    fn whitespace<'p, S: AsRef<str>>(
        &self,
        value: S,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<S> {
        self.anchor("whitespace")?;
        value.ensure_whitespace(param)
    }

    /// See [`TextGuards::ensure_not_whitespace`].
    fn not_whitespace<'p, S: AsRef<str>>(
        &self,
        value: S,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<S> {
        self.anchor("not_whitespace")?;
        value.ensure_not_whitespace(param)
    }

    /// See [`LengthGuards::ensure_length`].
    fn length<'p, T: HasLength + Debug>(
        &self,
        value: T,
        length: usize,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("length")?;
        value.ensure_length(length, param)
    }

    /// See [`LengthGuards::ensure_min_length`].
    fn min_length<'p, T: HasLength + Debug>(
        &self,
        value: T,
        min: usize,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("min_length")?;
        value.ensure_min_length(min, param)
    }

    /// See [`LengthGuards::ensure_max_length`].
    fn max_length<'p, T: HasLength + Debug>(
        &self,
        value: T,
        max: usize,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("max_length")?;
        value.ensure_max_length(max, param)
    }

    /// See [`LengthGuards::ensure_length_between`].
    fn length_between<'p, T: HasLength + Debug>(
        &self,
        value: T,
        min: usize,
        max: usize,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("length_between")?;
        value.ensure_length_between(min, max, param)
    }

    /// See [`SelectedLengthGuards::ensure_length_by`].
    fn length_by<'p, T: Debug>(
        &self,
        value: T,
        selector: impl FnOnce(&T) -> usize,
        bound: LengthBound,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("length_by")?;
        value.ensure_length_by(selector, bound, param)
    }

    // Containment

    /// See [`SequenceGuards::ensure_contains`].
    fn contains_item<'p, S, E>(
        &self,
        value: S,
        element: &E,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<S>
    where
        S: AsRef<[E]> + Debug,
        E: PartialEq + Debug,
    {
        self.anchor("contains_item")?;
        <S as SequenceGuards<E>>::ensure_contains(value, element, param)
    }

    /// See [`SequenceGuards::ensure_not_contains`].
    fn lacks_item<'p, S, E>(
        &self,
        value: S,
        element: &E,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<S>
    where
        S: AsRef<[E]> + Debug,
        E: PartialEq + Debug,
    {
        self.anchor("lacks_item")?;
        <S as SequenceGuards<E>>::ensure_not_contains(value, element, param)
    }

    /// See [`EqualityGuards::ensure_one_of`].
    fn one_of<'p, T: PartialEq + Debug>(
        &self,
        value: T,
        members: &[T],
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("one_of")?;
        value.ensure_one_of(members, param)
    }

    /// See [`EqualityGuards::ensure_not_one_of`].
    fn not_one_of<'p, T: PartialEq + Debug>(
        &self,
        value: T,
        members: &[T],
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("not_one_of")?;
        value.ensure_not_one_of(members, param)
    }

    /// See [`FlagGuards::ensure_has_flag`].
    fn has_flag<'p, T>(&self, value: T, flag: T, param: impl Into<Param<'p>>) -> GuardResult<T>
    where
        T: BitAnd<Output = T> + Copy + PartialEq + Debug,
    {
        self.anchor("has_flag")?;
        value.ensure_has_flag(flag, param)
    }

    /// See [`FlagGuards::ensure_lacks_flag`].
    fn lacks_flag<'p, T>(&self, value: T, flag: T, param: impl Into<Param<'p>>) -> GuardResult<T>
    where
        T: BitAnd<Output = T> + Copy + PartialEq + Debug,
    {
        self.anchor("lacks_flag")?;
        value.ensure_lacks_flag(flag, param)
    }

    /// See [`DefinedGuards::ensure_defined`].
    fn defined<'p, E: TryFrom<T>, T: Copy + Debug>(
        &self,
        value: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("defined")?;
        value.ensure_defined::<E>(param)
    }

    /// See [`DefinedGuards::ensure_not_defined`].
    fn not_defined<'p, E: TryFrom<T>, T: Copy + Debug>(
        &self,
        value: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("not_defined")?;
        value.ensure_not_defined::<E>(param)
    }

    // Patterns and formats

    /// See [`TextGuards::ensure_matches`].
    fn matches<'p, S: AsRef<str>>(
        &self,
        value: S,
        regex: &Regex,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<S> {
        self.anchor("matches")?;
        value.ensure_matches(regex, param)
    }

    /// See [`TextGuards::ensure_not_matches`].
    fn not_matches<'p, S: AsRef<str>>(
        &self,
        value: S,
        regex: &Regex,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<S> {
        self.anchor("not_matches")?;
        value.ensure_not_matches(regex, param)
    }

    /// See [`TextGuards::ensure_matches_pattern`].
    fn matches_pattern<'p, S: AsRef<str>>(
        &self,
        value: S,
        pattern: &str,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<S> {
        self.anchor("matches_pattern")?;
        value.ensure_matches_pattern(pattern, param)
    }

    /// See [`TextGuards::ensure_not_matches_pattern`].
    fn not_matches_pattern<'p, S: AsRef<str>>(
        &self,
        value: S,
        pattern: &str,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<S> {
        self.anchor("not_matches_pattern")?;
        value.ensure_not_matches_pattern(pattern, param)
    }

    /// See [`FormatGuards::ensure_email`].
    fn email<'p, S: AsRef<str>>(&self, value: S, param: impl Into<Param<'p>>) -> GuardResult<S> {
        self.anchor("email")?;
        value.ensure_email(param)
    }

    /// See [`FormatGuards::ensure_not_email`].
    fn not_email<'p, S: AsRef<str>>(
        &self,
        value: S,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<S> {
        self.anchor("not_email")?;
        value.ensure_not_email(param)
    }

    /// See [`FormatGuards::ensure_uri`].
    fn uri<'p, S: AsRef<str>>(
        &self,
        value: S,
        kind: UriKind,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<S> {
        self.anchor("uri")?;
        value.ensure_uri(kind, param)
    }

    /// See [`FormatGuards::ensure_not_uri`].
    fn not_uri<'p, S: AsRef<str>>(
        &self,
        value: S,
        kind: UriKind,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<S> {
        self.anchor("not_uri")?;
        value.ensure_not_uri(kind, param)
    }

    /// See [`FormatGuards::ensure_ipv4`].
    fn ipv4<'p, S: AsRef<str>>(&self, value: S, param: impl Into<Param<'p>>) -> GuardResult<S> {
        self.anchor("ipv4")?;
        value.ensure_ipv4(param)
    }

    /// See [`FormatGuards::ensure_not_ipv4`].
    fn not_ipv4<'p, S: AsRef<str>>(&self, value: S, param: impl Into<Param<'p>>) -> GuardResult<S> {
        self.anchor("not_ipv4")?;
        value.ensure_not_ipv4(param)
    }

    /// See [`FormatGuards::ensure_ipv6`].
    fn ipv6<'p, S: AsRef<str>>(&self, value: S, param: impl Into<Param<'p>>) -> GuardResult<S> {
        self.anchor("ipv6")?;
        value.ensure_ipv6(param)
    }

    /// See [`FormatGuards::ensure_not_ipv6`].
    fn not_ipv6<'p, S: AsRef<str>>(&self, value: S, param: impl Into<Param<'p>>) -> GuardResult<S> {
        self.anchor("not_ipv6")?;
        value.ensure_not_ipv6(param)
    }

    // Types

    /// See [`TypeGuards::ensure_type`].
    fn of_type<'p, U: Any + ?Sized, T: Any + Debug>(
        &self,
        value: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("of_type")?;
        value.ensure_type::<U>(param)
    }

    /// See [`TypeGuards::ensure_not_type`].
    fn not_of_type<'p, U: Any + ?Sized, T: Any + Debug>(
        &self,
        value: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("not_of_type")?;
        value.ensure_not_type::<U>(param)
    }

    /// See [`TypeGuards::ensure_type_of`].
    fn of_type_token<'p, T: Any + Debug>(
        &self,
        value: T,
        token: TypeToken,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("of_type_token")?;
        value.ensure_type_of(token, param)
    }

    /// See [`TypeGuards::ensure_not_type_of`].
    fn not_of_type_token<'p, T: Any + Debug>(
        &self,
        value: T,
        token: TypeToken,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("not_of_type_token")?;
        value.ensure_not_type_of(token, param)
    }

    // Dates and times

    /// See [`TemporalGuards::ensure_after`].
    #[cfg(feature = "temporal")]
    fn after<'p, T: Timestamp>(
        &self,
        value: T,
        bound: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("after")?;
        value.ensure_after(bound, param)
    }

    /// See [`TemporalGuards::ensure_before`].
    #[cfg(feature = "temporal")]
    fn before<'p, T: Timestamp>(
        &self,
        value: T,
        bound: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("before")?;
        value.ensure_before(bound, param)
    }

    /// See [`TemporalGuards::ensure_in_sql_range`].
    #[cfg(feature = "temporal")]
    fn within_sql_range<'p, T: Timestamp>(
        &self,
        value: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("within_sql_range")?;
        value.ensure_in_sql_range(param)
    }

    /// See [`TemporalGuards::ensure_outside_sql_range`].
    #[cfg(feature = "temporal")]
    fn outside_sql_range<'p, T: Timestamp>(
        &self,
        value: T,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("outside_sql_range")?;
        value.ensure_outside_sql_range(param)
    }

    /// See [`TemporalGuards::ensure_future`].
    #[cfg(feature = "temporal")]
    fn future<'p, T: Timestamp>(&self, value: T, param: impl Into<Param<'p>>) -> GuardResult<T> {
        self.anchor("future")?;
        value.ensure_future(param)
    }

    /// See [`TemporalGuards::ensure_past`].
    #[cfg(feature = "temporal")]
    fn past<'p, T: Timestamp>(&self, value: T, param: impl Into<Param<'p>>) -> GuardResult<T> {
        self.anchor("past")?;
        value.ensure_past(param)
    }

    // Sentinels and custom predicates

    /// See [`PredicateGuards::ensure_found`].
    fn found<'p, T: Debug>(
        &self,
        value: T,
        found: impl FnOnce(&T) -> bool,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("found")?;
        value.ensure_found(found, param)
    }

    /// See [`PredicateGuards::ensure_not_found`].
    fn not_found<'p, T: Debug>(
        &self,
        value: T,
        found: impl FnOnce(&T) -> bool,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("not_found")?;
        value.ensure_not_found(found, param)
    }

    /// See [`PredicateGuards::ensure_that`].
    fn that<'p, T: Debug>(
        &self,
        value: T,
        predicate: impl FnOnce(&T) -> bool,
        description: &str,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<T> {
        self.anchor("that")?;
        value.ensure_that(predicate, description, param)
    }
}

impl<A: Anchor + ?Sized> EnsureThat for A {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Ensure>();
    assert_sync::<Ensure>();
};
