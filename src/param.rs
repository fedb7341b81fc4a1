//! Parameter names and failure overrides.
//!
//! This module provides [`Param`], the trailing argument of every check. It names
//! the checked value for diagnostics and optionally overrides the error produced
//! on failure through a [`Failure`].

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use crate::error::{BoxError, GuardError};

/// Label used when the caller does not name the checked value.
pub const DEFAULT_PARAM_NAME: &str = "value";

/// How a failed check reports its error.
///
/// The variants are mutually exclusive: setting one on a [`Param`] replaces any
/// previous choice.
#[derive(Default)]
pub enum Failure {
    /// Use the default error and message of the check's category.
    #[default]
    Default,
    /// Use the default error of the category with this message.
    Message(String),
    /// Fail with this pre-built error.
    Error(BoxError),
    /// Fail with the error returned by this factory, called with the parameter name.
    Factory(Box<dyn FnOnce(&str) -> BoxError>),
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Default => f.write_str("Default"),
            Failure::Message(message) => f.debug_tuple("Message").field(message).finish(),
            Failure::Error(error) => f.debug_tuple("Error").field(error).finish(),
            Failure::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// The name of a checked value together with its failure override.
///
/// Any `&str` or `String` converts into a `Param` using the default failure, so
/// most calls just pass the name:
///
/// ```rust
/// use bulwark::prelude::*;
///
/// let port = 8080u16.ensure_between(1, 65535, Bounds::INCLUSIVE, "port").unwrap();
/// assert_eq!(port, 8080);
/// ```
///
/// Use the builder methods to replace the message or the whole error:
///
/// ```rust
/// use bulwark::prelude::*;
///
/// let err = 0i32
///     .ensure_positive(Param::new("retries").message("retries must be at least one"))
///     .unwrap_err();
/// assert_eq!(err.to_string().split(" (").next(), Some("retries must be at least one"));
/// ```
#[derive(Debug, Default)]
pub struct Param<'a> {
    name: Option<Cow<'a, str>>,
    failure: Failure,
}

impl<'a> Param<'a> {
    /// Creates a parameter with the given name and the default failure.
    pub fn new(name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            name: Some(name.into()),
            failure: Failure::Default,
        }
    }

    /// Returns the parameter name, or [`DEFAULT_PARAM_NAME`] when none was given.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_PARAM_NAME)
    }

    /// Returns the failure override.
    pub fn failure(&self) -> &Failure {
        &self.failure
    }

    /// Replaces the default message of the check's error.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.failure = Failure::Message(message.into());
        self
    }

    /// Fails with `error` instead of the default error.
    pub fn error<E>(mut self, error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.failure = Failure::Error(Box::new(error));
        self
    }

    /// Fails with the error built by `factory` from the parameter name.
    pub fn error_with<E, F>(mut self, factory: F) -> Self
    where
        E: Error + Send + Sync + 'static,
        F: FnOnce(&str) -> E + 'static,
    {
        self.failure =
            Failure::Factory(Box::new(move |name: &str| Box::new(factory(name)) as BoxError));
        self
    }

    /// Sets the failure override directly.
    pub fn with_failure(mut self, failure: Failure) -> Self {
        self.failure = failure;
        self
    }

    /// Resolves the error for a failed check.
    ///
    /// `default` builds the category's error from the parameter name and is only
    /// called when the override needs it.
    pub(crate) fn into_error(self, default: impl FnOnce(&str) -> GuardError) -> GuardError {
        let name = self.name.as_deref().unwrap_or(DEFAULT_PARAM_NAME);
        match self.failure {
            Failure::Factory(factory) => GuardError::Custom(factory(name)),
            Failure::Error(error) => GuardError::Custom(error),
            Failure::Message(message) => default(name).map_violation(|v| v.with_message(message)),
            Failure::Default => default(name),
        }
    }
}

impl<'a> From<&'a str> for Param<'a> {
    fn from(name: &'a str) -> Self {
        Param::new(name)
    }
}

impl From<String> for Param<'_> {
    fn from(name: String) -> Self {
        Param::new(name)
    }
}

impl<'a> From<&'a String> for Param<'a> {
    fn from(name: &'a String) -> Self {
        Param::new(name.as_str())
    }
}

impl<'a> From<Cow<'a, str>> for Param<'a> {
    fn from(name: Cow<'a, str>) -> Self {
        Param::new(name)
    }
}

/// Builds a [`Param`] named after the expression passed to it.
///
/// ```rust
/// use bulwark::{param, prelude::*};
///
/// let timeout_ms = 0u64;
/// let err = timeout_ms.ensure_positive(param!(timeout_ms)).unwrap_err();
/// assert_eq!(err.param(), Some("timeout_ms"));
/// ```
#[macro_export]
macro_rules! param {
    ($value:expr) => {
        $crate::Param::new(stringify!($value))
    };
}
