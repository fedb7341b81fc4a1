//! Extension traits implementing every check.
//!
//! Each trait is blanket-implemented for all types meeting its bounds, so
//! bringing it into scope (usually via [`crate::prelude`]) is enough to call
//! its `ensure_*` methods on a value. Method names are unique across traits.

mod collection;
mod compare;
mod emptiness;
mod enumeration;
mod format;
mod length;
mod null;
mod numeric;
mod predicate;
#[cfg(feature = "temporal")]
mod temporal;
mod text;
mod types;

pub use collection::SequenceGuards;
pub use compare::{EqualityGuards, OrderGuards};
pub use emptiness::EmptinessGuards;
pub use enumeration::{DefinedGuards, FlagGuards};
pub use format::{is_email, is_ipv4, is_ipv6, is_uri, FormatGuards, UriKind};
pub use length::{HasLength, LengthBound, LengthGuards, SelectedLengthGuards};
pub use null::OptionGuards;
pub use numeric::{Integer, ParityGuards, SignGuards};
pub use predicate::PredicateGuards;
#[cfg(feature = "temporal")]
pub use temporal::{TemporalGuards, Timestamp, SQL_DATETIME_MAX, SQL_DATETIME_MIN};
pub use text::TextGuards;
pub use types::{ensure_dyn_type, TypeGuards, TypeToken};
