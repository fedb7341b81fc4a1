//! Sequence containment checks.

use std::fmt::Debug;

use crate::contract::{argument, check, render};
use crate::error::GuardResult;
use crate::param::Param;

/// Checks on the elements of a sequence, compared by equality.
///
/// Implemented for everything that views as a slice: `Vec<E>`, `[E; N]`,
/// `&[E]` and so on.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// let roles = vec!["admin", "editor"];
/// let roles = roles.ensure_contains(&"admin", "roles").unwrap();
/// assert!(roles.ensure_not_contains(&"admin", "roles").is_err());
/// ```
pub trait SequenceGuards<E>: AsRef<[E]> + Debug + Sized {
    /// Requires the sequence to contain `element`.
    fn ensure_contains<'p>(self, element: &E, param: impl Into<Param<'p>>) -> GuardResult<Self>;

    /// Requires the sequence not to contain `element`.
    fn ensure_not_contains<'p>(
        self,
        element: &E,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self>;
}

impl<S, E> SequenceGuards<E> for S
where
    S: AsRef<[E]> + Debug,
    E: PartialEq + Debug,
{
    fn ensure_contains<'p>(self, element: &E, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| value.as_ref().contains(element),
            |value, name| {
                argument(
                    name,
                    "contains",
                    format!("{name} must contain {element:?}"),
                    format!("sequence containing {element:?}"),
                    render(value),
                )
            },
        )
    }

    fn ensure_not_contains<'p>(
        self,
        element: &E,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        check(
            self,
            param,
            |value| !value.as_ref().contains(element),
            |value, name| {
                argument(
                    name,
                    "not_contains",
                    format!("{name} must not contain {element:?}"),
                    format!("sequence without {element:?}"),
                    render(value),
                )
            },
        )
    }
}
