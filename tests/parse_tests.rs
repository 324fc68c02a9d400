//! Integration tests for parsing bounded enums from names.

mod common;

use bounded_enum::{BoundedError, RawEnum};
use common::{Combined, DerivedCombined, Size, SmallSize, TestValue};
use proptest::prelude::*;
use rstest::rstest;

// =============================================================================
// parse
// =============================================================================

#[rstest]
#[case("Small", Size::Small)]
#[case("small", Size::Small)]
#[case("EXTRASMALL", Size::ExtraSmall)]
#[case("  unknown\t", Size::Unknown)]
#[case("2", Size::Small)]
fn parse_accepts_names_ignoring_case(#[case] input: &str, #[case] expected: Size) {
    assert_eq!(SmallSize::parse(input).unwrap().value(), expected);
}

#[rstest]
#[case("Huge")]
#[case("")]
#[case("   ")]
#[case("42")]
fn parse_rejects_unknown_names_as_malformed(#[case] input: &str) {
    assert_eq!(
        SmallSize::parse(input),
        Err(BoundedError::Malformed {
            input: input.to_string(),
            domain: "Size",
        })
    );
}

#[rstest]
fn parse_wraps_undefined_values_in_operation_failed() {
    let error = SmallSize::parse("large").unwrap_err();

    assert_eq!(
        error,
        BoundedError::OperationFailed {
            input: "large".to_string(),
            kind: "SmallSize",
            source: Box::new(BoundedError::OutOfRange {
                kind: "SmallSize",
                value: "Large",
                discriminant: 4,
            }),
        }
    );
    assert_eq!(error.to_string(), "unable to convert `large` to SmallSize");
    let source = std::error::Error::source(&error).map(ToString::to_string);
    assert_eq!(
        source.as_deref(),
        Some("Large (4) is not defined for SmallSize")
    );
}

#[rstest]
fn from_str_matches_parse() {
    let parsed: DerivedCombined = "third".parse().unwrap();
    assert_eq!(parsed.value(), TestValue::Third);
    assert!("third".parse::<Combined>().is_err());
}

// =============================================================================
// try_parse
// =============================================================================

#[rstest]
#[case("First", Some(TestValue::First))]
#[case("first", None)]
#[case("Third", None)]
#[case("Fourth", None)]
#[case("", None)]
fn try_parse_is_case_sensitive_and_quiet(#[case] input: &str, #[case] expected: Option<TestValue>) {
    assert_eq!(Combined::try_parse(input).map(|value| value.value()), expected);
}

#[rstest]
#[case("first", true, Some(TestValue::First))]
#[case("first", false, None)]
#[case("SECOND", true, Some(TestValue::Second))]
#[case("third", true, None)]
fn try_parse_with_honours_ignore_case(
    #[case] input: &str,
    #[case] ignore_case: bool,
    #[case] expected: Option<TestValue>,
) {
    assert_eq!(
        Combined::try_parse_with(input, ignore_case).map(|value| value.value()),
        expected
    );
}

// =============================================================================
// Round Trips
// =============================================================================

#[rstest]
fn every_defined_value_round_trips() {
    for &value in DerivedCombined::defined_values() {
        let instance = DerivedCombined::new(value).unwrap();
        assert_eq!(DerivedCombined::parse(&instance.to_string()).unwrap(), instance);
        assert_eq!(DerivedCombined::try_parse(&instance.to_string()), Some(instance));
    }
}

proptest! {
    #[test]
    fn prop_parse_agrees_with_construction(index in 0_usize..6, upper in any::<bool>()) {
        let size = Size::VARIANTS[index];
        let name = if upper { size.name().to_uppercase() } else { size.name().to_string() };

        match SmallSize::new(size) {
            Ok(expected) => {
                prop_assert_eq!(SmallSize::parse(&name).unwrap(), expected);
            }
            Err(_) => {
                let failed = matches!(
                    SmallSize::parse(&name),
                    Err(BoundedError::OperationFailed { .. })
                );
                prop_assert!(failed);
            }
        }
    }

    #[test]
    fn prop_try_parse_never_panics(input in ".*") {
        let parsed = SmallSize::try_parse(&input);
        if let Some(size) = parsed {
            prop_assert!(SmallSize::is_defined(size.value()));
        }
    }
}
