//! Error types for failed checks.
//!
//! This module provides the [`GuardError`] taxonomy and the [`Violation`] record
//! that carries the parameter name, message and expected/actual renderings.

mod guard_error;

pub use guard_error::{BoxError, ErrorKind, GuardError, GuardResult, Violation};
