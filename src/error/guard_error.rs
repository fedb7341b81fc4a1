//! Guard failure types.
//!
//! This module provides [`Violation`] for describing a single failed predicate and
//! [`GuardError`] for classifying it by category.

use std::error::Error;
use std::fmt::{self, Display};

use thiserror::Error;

/// A boxed caller-supplied error used by the custom failure overrides.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Result alias returned by every check.
pub type GuardResult<T> = Result<T, GuardError>;

/// A single failed check with full context.
///
/// `Violation` captures everything a caller needs to diagnose the failure:
/// - **param**: The name of the checked value
/// - **message**: Human-readable description of the failure
/// - **code**: Machine-readable identifier of the check that failed
/// - **got**: The rendered value that failed (optional)
/// - **expected**: What the check required instead (optional)
///
/// # Example
///
/// ```rust
/// use bulwark::Violation;
///
/// let violation = Violation::new("email", "email must be a valid email address")
///     .with_code("email")
///     .with_got("\"not-an-email\"")
///     .with_expected("valid email address");
///
/// assert_eq!(violation.param, "email");
/// assert_eq!(violation.code, "email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The name of the checked value.
    pub param: String,
    /// Human-readable error message.
    pub message: String,
    /// The actual value that was received (rendered with `Debug`).
    pub got: Option<String>,
    /// Description of what was expected.
    pub expected: Option<String>,
    /// Machine-readable error code (e.g., `min_length`).
    pub code: String,
}

impl Violation {
    /// Creates a new violation for the given parameter and message.
    ///
    /// The error code defaults to "guard". Use `with_code` to set a more
    /// specific code.
    pub fn new(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            message: message.into(),
            got: None,
            expected: None,
            code: "guard".to_string(),
        }
    }

    /// Sets the error code and returns self for chaining.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the "got" (actual value) field and returns self for chaining.
    pub fn with_got(mut self, got: impl Into<String>) -> Self {
        self.got = Some(got.into());
        self
    }

    /// Sets the "expected" field and returns self for chaining.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Replaces the message and returns self for chaining.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(ref expected) = self.expected {
            write!(f, " (expected: {})", expected)?;
        }
        if let Some(ref got) = self.got {
            write!(f, " (got: {})", got)?;
        }

        Ok(())
    }
}

/// The category of a [`GuardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// General precondition violation.
    Argument,
    /// A value was absent where one was required.
    Null,
    /// A value fell outside an ordered or temporal bound.
    Range,
    /// A sentinel lookup reported the value missing.
    NotFound,
    /// A sentinel lookup reported the value present.
    Found,
    /// The check itself was invoked incorrectly.
    Misuse,
    /// A caller-supplied error replaced the default one.
    Custom,
}

/// Error returned by a failed check.
///
/// The variant identifies the category of the failure; the inner [`Violation`]
/// carries the parameter name and message. `Misuse` is reserved for programming
/// errors in the call itself and never reports a failed predicate.
#[derive(Debug, Error)]
pub enum GuardError {
    /// General precondition violation.
    #[error("{0}")]
    Argument(Violation),

    /// `None` where a value was required.
    #[error("{0}")]
    Null(Violation),

    /// Value outside an ordered or temporal bound.
    #[error("{0}")]
    Range(Violation),

    /// The sentinel predicate reported the value missing.
    #[error("{0}")]
    NotFound(Violation),

    /// The sentinel predicate reported the value present.
    #[error("{0}")]
    Found(Violation),

    /// Invalid use of a check, such as a null façade handle.
    #[error("misuse of `{operation}`: {reason}")]
    Misuse {
        operation: &'static str,
        reason: String,
    },

    /// Error supplied by the caller through a failure override.
    #[error(transparent)]
    Custom(BoxError),
}

impl GuardError {
    /// Creates a misuse error for the named operation.
    pub fn misuse(operation: &'static str, reason: impl Into<String>) -> Self {
        GuardError::Misuse {
            operation,
            reason: reason.into(),
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GuardError::Argument(_) => ErrorKind::Argument,
            GuardError::Null(_) => ErrorKind::Null,
            GuardError::Range(_) => ErrorKind::Range,
            GuardError::NotFound(_) => ErrorKind::NotFound,
            GuardError::Found(_) => ErrorKind::Found,
            GuardError::Misuse { .. } => ErrorKind::Misuse,
            GuardError::Custom(_) => ErrorKind::Custom,
        }
    }

    /// Returns the violation record, if this error describes a failed predicate.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            GuardError::Argument(v)
            | GuardError::Null(v)
            | GuardError::Range(v)
            | GuardError::NotFound(v)
            | GuardError::Found(v) => Some(v),
            GuardError::Misuse { .. } | GuardError::Custom(_) => None,
        }
    }

    /// Returns the name of the checked parameter, if known.
    pub fn param(&self) -> Option<&str> {
        self.violation().map(|v| v.param.as_str())
    }

    /// Returns the machine-readable code, if this error describes a failed predicate.
    pub fn code(&self) -> Option<&str> {
        self.violation().map(|v| v.code.as_str())
    }

    /// Returns true if this error reports misuse rather than a failed predicate.
    pub fn is_misuse(&self) -> bool {
        matches!(self, GuardError::Misuse { .. })
    }

    /// Downcasts a caller-supplied error to its concrete type.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        match self {
            GuardError::Custom(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Applies `f` to the inner violation, leaving other variants untouched.
    pub(crate) fn map_violation(self, f: impl FnOnce(Violation) -> Violation) -> Self {
        match self {
            GuardError::Argument(v) => GuardError::Argument(f(v)),
            GuardError::Null(v) => GuardError::Null(f(v)),
            GuardError::Range(v) => GuardError::Range(f(v)),
            GuardError::NotFound(v) => GuardError::NotFound(f(v)),
            GuardError::Found(v) => GuardError::Found(f(v)),
            other => other,
        }
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Violation>();
    assert_sync::<Violation>();
    assert_send::<GuardError>();
    assert_sync::<GuardError>();
};
