//! # Bulwark
//!
//! Guard clauses for function preconditions: check a value, get it back unchanged,
//! or get a typed error naming the parameter that failed.
//!
//! ## Overview
//!
//! Every check follows one contract. It takes the value by ownership, evaluates a
//! single predicate, and on success returns the same value so that validation and
//! binding happen in one expression. On failure it returns a [`GuardError`] whose
//! variant tells the category (argument, null, range, not found, found) and whose
//! [`Violation`] carries the parameter name and a readable message.
//!
//! Checks are available in two equivalent calling conventions:
//!
//! - Extension traits: `port.ensure_between(1, 65535, Bounds::INCLUSIVE, "port")`
//! - The [`Ensure`] handle: `ENSURE.between(port, 1, 65535, Bounds::INCLUSIVE, "port")`
//!
//! ## Core Types
//!
//! - [`Param`]: The parameter name plus an optional failure override
//! - [`GuardError`]: The error returned by a failed check
//! - [`Violation`]: The parameter name, message, expected and actual value of a failure
//! - [`Bounds`] / [`Interval`]: Inclusive or exclusive range ends
//! - [`check`]: The primitive every built-in check is made of
//!
//! ## Example
//!
//! ```rust
//! use bulwark::prelude::*;
//!
//! fn open_account(owner: &str, deposit: i64) -> Result<(String, i64), GuardError> {
//!     let owner = owner.ensure_not_whitespace("owner")?.ensure_max_length(64, "owner")?;
//!     let deposit = deposit.ensure_positive("deposit")?;
//!     Ok((owner.to_string(), deposit))
//! }
//!
//! assert!(open_account("alice", 100).is_ok());
//!
//! let err = open_account("alice", 0).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Range);
//! assert_eq!(err.param(), Some("deposit"));
//! ```
//!
//! ## Failure overrides
//!
//! A [`Param`] can replace the default message or the whole error:
//!
//! ```rust
//! use bulwark::prelude::*;
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("quota exhausted")]
//! struct QuotaExhausted;
//!
//! let err = 0u32
//!     .ensure_positive(Param::new("quota").error(QuotaExhausted))
//!     .unwrap_err();
//! assert!(err.downcast_ref::<QuotaExhausted>().is_some());
//! ```

pub mod boundary;
pub mod checks;
pub mod contract;
pub mod error;
pub mod facade;
pub mod param;

pub use boundary::{Boundary, Bounds, Interval};
pub use checks::{ensure_dyn_type, HasLength, LengthBound, TypeToken, UriKind};
#[cfg(feature = "temporal")]
pub use checks::{Timestamp, SQL_DATETIME_MAX, SQL_DATETIME_MIN};
pub use contract::check;
pub use error::{BoxError, ErrorKind, GuardError, GuardResult, Violation};
pub use facade::{Anchor, Ensure, EnsureThat, ENSURE};
pub use param::{Failure, Param, DEFAULT_PARAM_NAME};

/// Everything needed to write guard clauses.
///
/// ```rust
/// use bulwark::prelude::*;
///
/// let retries = 3u8.ensure_le(5, "retries").unwrap();
/// assert_eq!(retries, 3);
/// ```
pub mod prelude {
    pub use crate::boundary::{Boundary, Bounds, Interval};
    pub use crate::checks::{
        DefinedGuards, EmptinessGuards, EqualityGuards, FlagGuards, FormatGuards, HasLength,
        LengthBound, LengthGuards, OptionGuards, OrderGuards, ParityGuards, PredicateGuards,
        SelectedLengthGuards, SequenceGuards, SignGuards, TextGuards, TypeGuards, TypeToken,
        UriKind,
    };
    #[cfg(feature = "temporal")]
    pub use crate::checks::TemporalGuards;
    pub use crate::error::{ErrorKind, GuardError, GuardResult, Violation};
    pub use crate::facade::{Ensure, EnsureThat, ENSURE};
    pub use crate::param::Param;
}
