//! Error types for bounded enumerations.
//!
//! Every failing operation in this crate reports a [`BoundedError`]. The
//! variants follow the lifecycle of an instance:
//!
//! - [`BoundedError::DomainSetup`]: the raw enumeration itself is unusable
//! - [`BoundedError::OutOfRange`]: a raw value outside the kind's defined subset
//! - [`BoundedError::Malformed`]: a name that matches no raw variant at all
//! - [`BoundedError::IncompatibleComparison`]: ordering across different kinds
//! - [`BoundedError::OperationFailed`]: `parse` failed for any other reason

use thiserror::Error;

/// Describes why a raw enumeration cannot back a bounded enum.
///
/// Produced by [`check_domain`](crate::raw::check_domain). A domain that fails
/// this check can never produce an instance, whatever value is supplied.
///
/// # Examples
///
/// ```rust
/// use bounded_enum::DomainSetupError;
///
/// let error = DomainSetupError::Empty { domain: "Nothing" };
/// assert_eq!(error.to_string(), "Nothing declares no variants");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainSetupError {
    /// The variant table is empty.
    #[error("{domain} declares no variants")]
    Empty {
        /// Name of the raw domain.
        domain: &'static str,
    },
    /// A variant reports a blank name.
    #[error("{domain} has a variant without a name")]
    UnnamedVariant {
        /// Name of the raw domain.
        domain: &'static str,
    },
    /// Two variants share a name, ignoring ASCII case.
    #[error("{domain} declares the name `{name}` more than once (names are matched ignoring case)")]
    DuplicateName {
        /// Name of the raw domain.
        domain: &'static str,
        /// The repeated name, as reported by the second variant.
        name: &'static str,
    },
    /// Two variants share a discriminant.
    #[error("{domain} declares discriminant {discriminant} more than once")]
    DuplicateDiscriminant {
        /// Name of the raw domain.
        domain: &'static str,
        /// The repeated discriminant.
        discriminant: i64,
    },
}

/// Errors raised by construction, comparison and parsing of bounded enums.
///
/// # Examples
///
/// ```rust
/// use bounded_enum::BoundedError;
///
/// let error = BoundedError::Malformed {
///     input: "Huge".to_string(),
///     domain: "Size",
/// };
/// assert_eq!(error.to_string(), "`Huge` is not a variant of Size");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundedError {
    /// The raw domain of `kind` failed its setup check.
    #[error("{kind} cannot be constructed: {source}")]
    DomainSetup {
        /// Name of the kind being constructed.
        kind: &'static str,
        /// What is wrong with the raw domain.
        #[source]
        source: DomainSetupError,
    },
    /// The raw value is not in the kind's defined values.
    #[error("{value} ({discriminant}) is not defined for {kind}")]
    OutOfRange {
        /// Name of the kind being constructed.
        kind: &'static str,
        /// Name of the rejected raw value.
        value: &'static str,
        /// Discriminant of the rejected raw value.
        discriminant: i64,
    },
    /// The input names no variant of the raw domain.
    #[error("`{input}` is not a variant of {domain}")]
    Malformed {
        /// The text that was parsed.
        input: String,
        /// Name of the raw domain.
        domain: &'static str,
    },
    /// An ordering was requested between two different kinds.
    #[error("cannot order {left} against {right}: ordering requires the same kind")]
    IncompatibleComparison {
        /// Kind of the left operand.
        left: &'static str,
        /// Kind of the right operand.
        right: &'static str,
    },
    /// `parse` recognised the input but could not produce an instance.
    #[error("unable to convert `{input}` to {kind}")]
    OperationFailed {
        /// The text that was parsed.
        input: String,
        /// Name of the target kind.
        kind: &'static str,
        /// The underlying failure.
        #[source]
        source: Box<BoundedError>,
    },
}

impl BoundedError {
    /// Returns `true` for [`BoundedError::OutOfRange`].
    #[inline]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Returns `true` for [`BoundedError::Malformed`].
    #[inline]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error as _;

    #[rstest]
    fn domain_setup_display_names_kind_and_reason() {
        let error = BoundedError::DomainSetup {
            kind: "SmallSize",
            source: DomainSetupError::DuplicateDiscriminant {
                domain: "Size",
                discriminant: 2,
            },
        };
        assert_eq!(
            error.to_string(),
            "SmallSize cannot be constructed: Size declares discriminant 2 more than once"
        );
    }

    #[rstest]
    fn out_of_range_display() {
        let error = BoundedError::OutOfRange {
            kind: "SmallSize",
            value: "Large",
            discriminant: 4,
        };
        assert_eq!(error.to_string(), "Large (4) is not defined for SmallSize");
        assert!(error.is_out_of_range());
        assert!(!error.is_malformed());
    }

    #[rstest]
    fn incompatible_comparison_display() {
        let error = BoundedError::IncompatibleComparison {
            left: "CombinedEnum",
            right: "DerivedCombinedEnum",
        };
        assert_eq!(
            error.to_string(),
            "cannot order CombinedEnum against DerivedCombinedEnum: ordering requires the same kind"
        );
    }

    #[rstest]
    fn operation_failed_exposes_cause_as_source() {
        let cause = BoundedError::OutOfRange {
            kind: "FirstEnum",
            value: "Second",
            discriminant: 2,
        };
        let error = BoundedError::OperationFailed {
            input: "second".to_string(),
            kind: "FirstEnum",
            source: Box::new(cause.clone()),
        };

        assert_eq!(error.to_string(), "unable to convert `second` to FirstEnum");
        let source = error.source().map(ToString::to_string);
        assert_eq!(source, Some(cause.to_string()));
    }

    #[rstest]
    fn errors_compare_by_value() {
        let first = BoundedError::Malformed {
            input: "Nope".to_string(),
            domain: "Size",
        };
        let second = first.clone();
        let third = BoundedError::Malformed {
            input: "Other".to_string(),
            domain: "Size",
        };
        assert_eq!(first, second);
        assert_ne!(first, third);
    }
}
