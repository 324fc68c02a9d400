//! Parsing bounded enums from their names.
//!
//! - [`BoundedEnum::try_parse`] / [`BoundedEnum::try_parse_with`] never fail
//!   loudly; any problem becomes `None` and a `debug` log line.
//! - [`BoundedEnum::parse`] (and [`FromStr`]) match ignoring case and report
//!   why parsing failed. An input naming no raw variant is returned as
//!   [`BoundedError::Malformed`]; every other failure is wrapped in
//!   [`BoundedError::OperationFailed`].
//!
//! Input is trimmed, and the decimal form of a declared discriminant is
//! accepted in place of a name.

use std::str::FromStr;

use crate::bounded::BoundedEnum;
use crate::error::BoundedError;
use crate::kind::Restriction;
use crate::raw::{self, RawEnum};

impl<K: Restriction> BoundedEnum<K> {
    /// Parses a case-sensitive name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_enum::{bounded_enum, RawEnum};
    ///
    /// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, RawEnum)]
    /// pub enum Size {
    ///     Unknown,
    ///     Small,
    ///     Large,
    /// }
    ///
    /// bounded_enum! {
    ///     pub struct SmallSize(Size) { Size::Unknown, Size::Small }
    /// }
    ///
    /// assert_eq!(SmallSize::try_parse("Small"), SmallSize::new(Size::Small).ok());
    /// assert_eq!(SmallSize::try_parse("small"), None);
    /// assert_eq!(SmallSize::try_parse("Large"), None);
    /// assert_eq!(SmallSize::try_parse("Huge"), None);
    /// ```
    pub fn try_parse(input: &str) -> Option<Self> {
        Self::try_parse_with(input, false)
    }

    /// Parses a name, optionally ignoring ASCII case.
    pub fn try_parse_with(input: &str, ignore_case: bool) -> Option<Self> {
        match Self::from_input(input, ignore_case) {
            Ok(parsed) => Some(parsed),
            Err(error) => {
                tracing::debug!(
                    kind = K::NAME,
                    input,
                    %error,
                    "try_parse failed; returning None"
                );
                None
            }
        }
    }

    /// Parses a name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// - [`BoundedError::Malformed`] if the input names no raw variant.
    /// - [`BoundedError::OperationFailed`] wrapping the cause for any other
    ///   failure, such as a variant not defined for this kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_enum::{bounded_enum, BoundedError, RawEnum};
    ///
    /// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, RawEnum)]
    /// pub enum Size {
    ///     Unknown,
    ///     Small,
    ///     Large,
    /// }
    ///
    /// bounded_enum! {
    ///     pub struct SmallSize(Size) { Size::Unknown, Size::Small }
    /// }
    ///
    /// assert_eq!(SmallSize::parse("SMALL").unwrap(), SmallSize::new(Size::Small).unwrap());
    /// assert!(matches!(SmallSize::parse("Huge"), Err(BoundedError::Malformed { .. })));
    /// assert!(matches!(SmallSize::parse("Large"), Err(BoundedError::OperationFailed { .. })));
    /// ```
    pub fn parse(input: &str) -> Result<Self, BoundedError> {
        Self::from_input(input, true).map_err(|error| match error {
            BoundedError::Malformed { .. } => error,
            cause => BoundedError::OperationFailed {
                input: input.to_owned(),
                kind: K::NAME,
                source: Box::new(cause),
            },
        })
    }

    fn from_input(input: &str, ignore_case: bool) -> Result<Self, BoundedError> {
        let value = raw::lookup::<K::Raw>(input, ignore_case).ok_or_else(|| {
            BoundedError::Malformed {
                input: input.to_owned(),
                domain: <K::Raw as RawEnum>::type_name(),
            }
        })?;
        Self::new(value)
    }
}

impl<K: Restriction> FromStr for BoundedEnum<K> {
    type Err = BoundedError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}
