//! String content checks.
//!
//! This module provides [`TextGuards`] for whitespace and regular-expression
//! checks on anything that can be viewed as a `str`.

use regex::Regex;

use crate::contract::{argument, check, render};
use crate::error::{GuardError, GuardResult};
use crate::param::Param;

/// Checks on the content of a string.
pub trait TextGuards: AsRef<str> + Sized {
    /// Requires the string to consist only of whitespace.
    ///
    /// The empty string qualifies.
    fn ensure_whitespace<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(self, param, |value| is_blank(value.as_ref()), |value, name| {
            argument(
                name,
                "whitespace",
                format!("{name} must contain only whitespace"),
                "whitespace only",
                render(value.as_ref()),
            )
        })
    }

    /// Requires the string to contain at least one non-whitespace character.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulwark::prelude::*;
    ///
    /// assert!("  alice ".ensure_not_whitespace("username").is_ok());
    /// assert!(" \t\n".ensure_not_whitespace("username").is_err());
    /// assert!("".ensure_not_whitespace("username").is_err());
    /// ```
    fn ensure_not_whitespace<'p>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(self, param, |value| !is_blank(value.as_ref()), |value, name| {
            argument(
                name,
                "not_whitespace",
                format!("{name} must not be empty or whitespace"),
                "non-whitespace content",
                render(value.as_ref()),
            )
        })
    }

    /// Requires the string to match `regex`.
    fn ensure_matches<'p>(self, regex: &Regex, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| regex.is_match(value.as_ref()),
            |value, name| {
                argument(
                    name,
                    "matches",
                    format!("{name} must match pattern '{}'", regex.as_str()),
                    format!("match for /{}/", regex.as_str()),
                    render(value.as_ref()),
                )
            },
        )
    }

    /// Requires the string not to match `regex`.
    fn ensure_not_matches<'p>(
        self,
        regex: &Regex,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| !regex.is_match(value.as_ref()),
            |value, name| {
                argument(
                    name,
                    "not_matches",
                    format!("{name} must not match pattern '{}'", regex.as_str()),
                    format!("no match for /{}/", regex.as_str()),
                    render(value.as_ref()),
                )
            },
        )
    }

    /// Compiles `pattern` and requires the string to match it.
    ///
    /// An invalid pattern is a [`GuardError::Misuse`], reported whatever the
    /// string's content and whatever failure override `param` carries.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulwark::prelude::*;
    ///
    /// assert!("12345".ensure_matches_pattern(r"^\d+$", "zip").is_ok());
    ///
    /// let err = "12345".ensure_matches_pattern(r"(", "zip").unwrap_err();
    /// assert!(err.is_misuse());
    /// ```
    fn ensure_matches_pattern<'p>(
        self,
        pattern: &str,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        let regex = Regex::new(pattern).map_err(|err| {
            GuardError::misuse("ensure_matches_pattern", format!("invalid pattern: {err}"))
        })?;
        self.ensure_matches(&regex, param)
    }

    /// Compiles `pattern` and requires the string not to match it.
    ///
    /// An invalid pattern is a [`GuardError::Misuse`], as with
    /// [`ensure_matches_pattern`](TextGuards::ensure_matches_pattern).
    ///
    /// # Example
    ///
    /// ```rust
    /// use bulwark::prelude::*;
    ///
    /// assert!("alice".ensure_not_matches_pattern(r"\s", "username").is_ok());
    /// assert!("al ice".ensure_not_matches_pattern(r"\s", "username").is_err());
    /// ```
    fn ensure_not_matches_pattern<'p>(
        self,
        pattern: &str,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        let regex = Regex::new(pattern).map_err(|err| {
            GuardError::misuse("ensure_not_matches_pattern", format!("invalid pattern: {err}"))
        })?;
        self.ensure_not_matches(&regex, param)
    }
}

impl<T: AsRef<str>> TextGuards for T {}

fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_whitespace() {
        assert!("".ensure_whitespace("s").is_ok());
        assert!(" \u{00a0}\t".ensure_whitespace("s").is_ok());
        assert!(" a ".ensure_whitespace("s").is_err());
    }

    #[test]
    fn test_not_whitespace_message() {
        let err = String::from("   ").ensure_not_whitespace("title").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        assert!(err.to_string().contains("title must not be empty or whitespace"));
    }

    #[test]
    fn test_matches() {
        let regex = Regex::new(r"^[a-z]+$").unwrap();
        assert_eq!("abc".ensure_matches(&regex, "s").unwrap(), "abc");

        let err = "ABC".ensure_matches(&regex, "s").unwrap_err();
        assert_eq!(err.code(), Some("matches"));
        assert!(err.to_string().contains("^[a-z]+$"));

        assert!("ABC".ensure_not_matches(&regex, "s").is_ok());
        assert!("abc".ensure_not_matches(&regex, "s").is_err());
    }

    #[test]
    fn test_invalid_pattern_ignores_override() {
        let err = "x"
            .ensure_matches_pattern("[", Param::new("s").message("custom"))
            .unwrap_err();
        assert!(err.is_misuse());
        assert!(err.violation().is_none());
    }

    #[test]
    fn test_not_matches_pattern() {
        assert_eq!("abc".ensure_not_matches_pattern(r"\d", "s").unwrap(), "abc");

        let err = "a1c".ensure_not_matches_pattern(r"\d", "s").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        assert_eq!(err.code(), Some("not_matches"));

        let err = "abc"
            .ensure_not_matches_pattern("(", Param::new("s").message("custom"))
            .unwrap_err();
        assert!(err.is_misuse());
        assert!(err.to_string().contains("ensure_not_matches_pattern"));
    }
}
