//! Derive macro for bounded-enum raw domains.
//!
//! # Available Derive Macros
//!
//! - [`RawEnum`]: implements `bounded_enum::RawEnum` for a fieldless enum
//!
//! # Example
//!
//! ```rust,ignore
//! use bounded_enum::RawEnum;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, RawEnum)]
//! enum Size {
//!     Unknown,
//!     Small = 2,
//!     Large = 4,
//! }
//!
//! assert_eq!(Size::Small.name(), "Small");
//! assert_eq!(Size::Large.discriminant(), 4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod raw_enum;

use proc_macro::TokenStream;

/// Derive macro implementing `RawEnum` for a fieldless enum.
///
/// # Requirements
///
/// - The type must be an enum with at least one variant
/// - Every variant must be a unit variant
/// - The enum must not be generic
/// - The enum must also derive (or implement) `Copy`, `Eq`, `Ord`, `Hash`
///   and `Debug`, as `RawEnum` requires them
///
/// # Generated Code
///
/// ```rust,ignore
/// impl ::bounded_enum::RawEnum for EnumName {
///     const VARIANTS: &'static [Self] = &[Self::A, Self::B];
///     fn name(self) -> &'static str { /* "A", "B" */ }
///     fn discriminant(self) -> i64 { self as i64 }
///     fn type_name() -> &'static str { "EnumName" }
///     fn check_domain() -> Result<(), ::bounded_enum::DomainSetupError> {
///         /* runs bounded_enum::check_domain once and caches the outcome */
///     }
/// }
/// ```
///
/// Raw identifiers lose their `r#` prefix in the generated names.
#[proc_macro_derive(RawEnum)]
pub fn derive_raw_enum(input: TokenStream) -> TokenStream {
    raw_enum::derive_raw_enum_impl(input)
}
