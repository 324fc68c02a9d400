//! Shared raw domains and kinds for the integration tests.

#![allow(dead_code)]

use bounded_enum::{RawEnum, Recompute, bounded_enum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, RawEnum)]
pub enum Size {
    Unknown = 0,
    ExtraSmall = 1,
    Small = 2,
    Medium = 3,
    Large = 4,
    ExtraLarge = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, RawEnum)]
pub enum TestValue {
    Unknown,
    First,
    Second,
    Third,
}

/// Same variants as [`TestValue`], but a different raw type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, RawEnum)]
pub enum AltTestValue {
    Unknown,
    First,
    Second,
    Third,
}

bounded_enum! {
    pub struct SmallSize(Size) { Size::Unknown, Size::ExtraSmall, Size::Small }
    pub struct LargeSize(Size) { Size::Unknown, Size::ExtraLarge, Size::Large }
    pub struct AnySize(Size) {
        Size::Unknown, Size::ExtraSmall, Size::Small,
        Size::Medium, Size::ExtraLarge, Size::Large,
    }
    pub struct BasicSize(Size) { Size::Unknown, Size::Small, Size::Medium, Size::Large }
    pub struct ExtendedSize(Size): BasicSize {
        Size::Unknown, Size::ExtraSmall, Size::Small,
        Size::Medium, Size::Large, Size::ExtraLarge,
    }

    pub struct FirstSet(TestValue) { TestValue::Unknown, TestValue::First }
    pub struct SecondSet(TestValue) { TestValue::Unknown, TestValue::Second }
    pub struct Combined(TestValue) { TestValue::Unknown, TestValue::First, TestValue::Second }
    pub struct DerivedCombined(TestValue): Combined {
        TestValue::Unknown, TestValue::First, TestValue::Second, TestValue::Third,
    }
    pub struct ConcreteDerived(TestValue): Combined;
    pub struct PlainCombined(TestValue, Recompute): Combined;

    pub struct AltFirstSet(AltTestValue) { AltTestValue::Unknown, AltTestValue::First }
}
