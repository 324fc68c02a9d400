//! # bounded-enum
//!
//! Enumerations restricted to a declared subset of a plain Rust enum.
//!
//! ## Overview
//!
//! A *raw* enum ([`RawEnum`]) describes a whole domain, say every clothing
//! size. A *kind* ([`Restriction`]) names the subset one part of a program
//! accepts, say the sizes a shop stocks. [`BoundedEnum<K>`] is a value of
//! the raw domain that has been checked against kind `K` and can never hold
//! anything else.
//!
//! - **Construction**: [`BoundedEnum::new`] validates once and fails with
//!   [`BoundedError::OutOfRange`] for undefined values
//! - **Parsing**: [`BoundedEnum::parse`] and [`BoundedEnum::try_parse`] accept
//!   variant names
//! - **Hierarchies**: kinds may declare a parent; instances of related kinds
//!   compare equal when their raw values match
//! - **Hashing**: a per-kind [`HashPolicy`] memoizes or recomputes the hash
//!
//! ## Feature Flags
//!
//! - `derive` (default): `#[derive(RawEnum)]`
//! - `serde`: serialize instances as their variant name
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use bounded_enum::bounded_enum;
//! use bounded_enum::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, RawEnum)]
//! pub enum Size {
//!     Unknown,
//!     ExtraSmall,
//!     Small,
//!     Medium,
//!     Large,
//!     ExtraLarge,
//! }
//!
//! bounded_enum! {
//!     pub struct SmallSize(Size) { Size::Unknown, Size::ExtraSmall, Size::Small }
//!     pub struct AnySize(Size) {
//!         Size::Unknown, Size::ExtraSmall, Size::Small,
//!         Size::Medium, Size::Large, Size::ExtraLarge,
//!     }
//! }
//!
//! let small = SmallSize::new(Size::Small).unwrap();
//! assert_eq!(small.to_string(), "Small");
//! assert!(SmallSize::new(Size::Large).is_err());
//!
//! // Unrelated kinds never compare equal.
//! assert_ne!(small, AnySize::new(Size::Small).unwrap());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

extern crate self as bounded_enum;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use bounded_enum::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bounded::BoundedEnum;
    pub use crate::error::BoundedError;
    pub use crate::kind::{Kind, Restriction};
    pub use crate::policy::{HashPolicy, Memoized, Recompute};
    pub use crate::raw::RawEnum;

    #[cfg(feature = "derive")]
    pub use bounded_enum_derive::RawEnum;
}

pub mod bounded;
pub mod error;
pub mod kind;
mod macros;
mod parse;
pub mod policy;
pub mod raw;

pub use bounded::BoundedEnum;
pub use error::{BoundedError, DomainSetupError};
pub use kind::{Kind, Lineage, Restriction};
pub use policy::{HashPolicy, HashSlot, Memoized, Recompute};
pub use raw::{RawEnum, check_domain};

#[cfg(feature = "derive")]
pub use bounded_enum_derive::RawEnum;

#[doc(hidden)]
pub use paste;
