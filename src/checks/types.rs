//! Type membership checks.
//!
//! The static form compares the checked value's type against a type parameter.
//! The runtime form compares it against a [`TypeToken`] captured elsewhere, and
//! [`ensure_dyn_type`] applies the same test to a `&dyn Any`.

use std::any::{type_name, Any, TypeId};
use std::fmt::{self, Debug, Display};

use crate::contract::{argument, check, render};
use crate::error::GuardResult;
use crate::param::Param;

/// A runtime handle on a type: its `TypeId` plus its name for messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    /// Returns the token of `T`.
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Returns the `TypeId` of the type.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the name of the type.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Checks on the concrete type of a value.
///
/// # Example
///
/// ```rust
/// use bulwark::prelude::*;
///
/// assert!(5u32.ensure_type::<u32>("id").is_ok());
/// assert!(5u32.ensure_type::<u64>("id").is_err());
///
/// let token = TypeToken::of::<String>();
/// assert!(String::from("x").ensure_type_of(token, "label").is_ok());
/// ```
pub trait TypeGuards: Any + Debug + Sized {
    /// Requires the value to be a `U`.
    fn ensure_type<'p, U: Any + ?Sized>(self, param: impl Into<Param<'p>>) -> GuardResult<Self> {
        self.ensure_type_of(TypeToken::of::<U>(), param)
    }

    /// Requires the value not to be a `U`.
    fn ensure_not_type<'p, U: Any + ?Sized>(
        self,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        self.ensure_not_type_of(TypeToken::of::<U>(), param)
    }

    /// Requires the value to be of the type identified by `token`.
    fn ensure_type_of<'p>(
        self,
        token: TypeToken,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        check(
            self,
            param,
            |_| TypeId::of::<Self>() == token.id,
            |value, name| {
                argument(
                    name,
                    "type",
                    format!(
                        "{name} must be of type {token}, got {}",
                        type_name::<Self>()
                    ),
                    token.name,
                    render(value),
                )
            },
        )
    }

    /// Requires the value not to be of the type identified by `token`.
    fn ensure_not_type_of<'p>(
        self,
        token: TypeToken,
        param: impl Into<Param<'p>>,
    ) -> GuardResult<Self> {
        check(
            self,
            param,
            |_| TypeId::of::<Self>() != token.id,
            |value, name| {
                argument(
                    name,
                    "not_type",
                    format!("{name} must not be of type {token}"),
                    format!("any type but {token}"),
                    render(value),
                )
            },
        )
    }
}

impl<T: Any + Debug> TypeGuards for T {}

/// Requires a type-erased value to be of the type identified by `token`.
///
/// ```rust
/// use std::any::Any;
/// use bulwark::{ensure_dyn_type, TypeToken};
///
/// let boxed: Box<dyn Any> = Box::new(7i64);
/// assert!(ensure_dyn_type(boxed.as_ref(), TypeToken::of::<i64>(), "payload").is_ok());
/// assert!(ensure_dyn_type(boxed.as_ref(), TypeToken::of::<i32>(), "payload").is_err());
/// ```
pub fn ensure_dyn_type<'a, 'p>(
    value: &'a dyn Any,
    token: TypeToken,
    param: impl Into<Param<'p>>,
) -> GuardResult<&'a dyn Any> {
    check(
        value,
        param,
        |value| Any::type_id(*value) == token.id,
        |_, name| {
            argument(
                name,
                "type",
                format!("{name} must be of type {token}"),
                token.name,
                "a value of another type".to_string(),
            )
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_static_type() {
        assert!("s".ensure_type::<&str>("s").is_ok());
        assert!("s".ensure_not_type::<String>("s").is_ok());

        let err = 1i32.ensure_type::<i64>("n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Argument);
        assert!(err.to_string().contains("n must be of type i64, got i32"));
    }

    #[test]
    fn test_not_type_failure() {
        let err = 1u8.ensure_not_type::<u8>("n").unwrap_err();
        assert_eq!(err.code(), Some("not_type"));
    }

    #[test]
    fn test_token() {
        let token = TypeToken::of::<Vec<u8>>();
        assert_eq!(token, TypeToken::of::<Vec<u8>>());
        assert_ne!(token, TypeToken::of::<Vec<i8>>());
        assert_eq!(token.id(), TypeId::of::<Vec<u8>>());
        assert!(token.name().contains("Vec<u8>"));
    }

    #[test]
    fn test_dyn_type_inspects_inner_value() {
        let value: Box<dyn Any> = Box::new(String::from("x"));
        assert!(ensure_dyn_type(value.as_ref(), TypeToken::of::<String>(), "v").is_ok());
        assert!(ensure_dyn_type(value.as_ref(), TypeToken::of::<Box<dyn Any>>(), "v").is_err());
    }
}
