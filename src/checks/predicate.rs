//! Caller-supplied predicate checks.
//!
//! This module provides [`PredicateGuards`], which plugs an arbitrary predicate
//! into the check contract. The sentinel forms report "not found" and "found"
//! with their own error variants so callers can match on missing-resource
//! semantics.

use std::fmt::Debug;

use crate::contract::{argument, check, render};
use crate::error::{GuardError, GuardResult, Violation};
use crate::param::Param;

/// Checks driven by a predicate supplied at the call site.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use bulwark::prelude::*;
///
/// let users = HashMap::from([(7, "alice")]);
///
/// assert_eq!(7i32.ensure_found(|id| users.contains_key(id), "user_id").unwrap(), 7);
///
/// let err = 8i32.ensure_found(|id| users.contains_key(id), "user_id").unwrap_err();
/// assert!(matches!(err, GuardError::NotFound(_)));
/// ```
pub trait PredicateGuards: Debug + Sized {
    /// Requires `predicate` to hold; `description` states what it requires.
    fn ensure_that<'p>(
        self,
        predicate: impl FnOnce(&Self) -> bool,
        description: &str,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        check(self, param, predicate, |value, name| {
            argument(
                name,
                "predicate",
                format!("{name} must satisfy: {description}"),
                description,
                render(value),
            )
        })
    }

    /// Requires `found` to report the value present.
    fn ensure_found<'p>(
        self,
        found: impl FnOnce(&Self) -> bool,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        check(self, param, found, |value, name| {
            GuardError::NotFound(
                Violation::new(name, format!("{name} {value:?} was not found"))
                    .with_code("not_found")
                    .with_expected("existing value")
                    .with_got(render(value)),
            )
        })
    }

    /// Requires `found` to report the value absent.
    fn ensure_not_found<'p>(
        self,
        found: impl FnOnce(&Self) -> bool,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| !found(value),
            |value, name| {
                GuardError::Found(
                    Violation::new(name, format!("{name} {value:?} already exists"))
                        .with_code("found")
                        .with_expected("absent value")
                        .with_got(render(value)),
                )
            },
        )
    }
}

impl<T: Debug> PredicateGuards for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_ensure_that() {
        let word = "level"
            .ensure_that(|w| w.chars().eq(w.chars().rev()), "palindrome", "word")
            .unwrap();
        assert_eq!(word, "level");

        let err = "rust"
            .ensure_that(|w| w.chars().eq(w.chars().rev()), "palindrome", "word")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        assert!(err.to_string().contains("word must satisfy: palindrome"));
    }

    #[test]
    fn test_sentinels_carry_param() {
        let existing = ["alice", "bob"];

        let err = "carol"
            .ensure_found(|n| existing.contains(n), "username")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.param(), Some("username"));

        let err = "bob"
            .ensure_not_found(|n| existing.contains(n), "username")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Found);
        assert!(err.to_string().contains("already exists"));

        assert!("carol"
            .ensure_not_found(|n| existing.contains(n), "username")
            .is_ok());
    }
}
