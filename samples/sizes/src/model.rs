//! Sizes and weekdays used by the demo.

use bounded_enum::{RawEnum, Recompute, bounded_enum};

/// Every clothing size the shop knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, RawEnum)]
pub enum Size {
    Unknown = 0,
    ExtraSmall = 1,
    Small = 2,
    Medium = 3,
    Large = 4,
    ExtraLarge = 5,
}

/// Days of the week, numbered from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, RawEnum)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

bounded_enum! {
    /// Sizes up to small.
    pub struct SmallSize(Size) { Size::Unknown, Size::ExtraSmall, Size::Small }

    /// Sizes from large up.
    pub struct LargeSize(Size) { Size::Unknown, Size::ExtraLarge, Size::Large }

    /// Every size, in a hierarchy of its own.
    pub struct AnySize(Size) {
        Size::Unknown, Size::ExtraSmall, Size::Small,
        Size::Medium, Size::ExtraLarge, Size::Large,
    }

    /// The sizes stocked everywhere.
    pub struct BasicSize(Size) { Size::Unknown, Size::Small, Size::Medium, Size::Large }

    /// Basic sizes plus the extremes.
    pub struct ExtendedSize(Size): BasicSize {
        Size::Unknown, Size::ExtraSmall, Size::Small,
        Size::Medium, Size::Large, Size::ExtraLarge,
    }

    /// Monday to Friday.
    pub struct WorkDay(Weekday, Recompute) {
        Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday,
        Weekday::Thursday, Weekday::Friday,
    }
}
