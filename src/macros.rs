//! The `bounded_enum!` declaration macro.

/// Declares one or more kinds over a raw enum.
///
/// For every entry the macro generates:
///
/// 1. A zero-sized marker `{Name}Kind` implementing [`Restriction`](crate::Restriction)
/// 2. A type alias `{Name} = BoundedEnum<{Name}Kind>`, so instances are built
///    with `{Name}::new(raw)`
///
/// # Syntax
///
/// ```text
/// bounded_enum! {
///     /// Optional doc comment, attached to the alias
///     pub struct Name(RawType) { RawType::A, RawType::B }
///
///     // Custom hashing policy (defaults to `Memoized`)
///     pub struct Other(RawType, Recompute) { RawType::A }
///
///     // Declared parent, same raw domain required
///     pub struct Child(RawType): Name { RawType::A, RawType::B, RawType::C }
///
///     // Declared parent, reusing the parent's defined values
///     pub struct Alias(RawType): Name;
/// }
/// ```
///
/// An empty value list declares a kind that can never be constructed. Such a
/// kind is still useful as a common parent.
///
/// # Examples
///
/// ```rust
/// use bounded_enum::{bounded_enum, BoundedError, RawEnum, Recompute, Restriction};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, RawEnum)]
/// pub enum Size {
///     Unknown,
///     ExtraSmall,
///     Small,
///     Medium,
///     Large,
///     ExtraLarge,
/// }
///
/// bounded_enum! {
///     /// The three basic sizes.
///     pub struct BasicSize(Size) { Size::Unknown, Size::Small, Size::Medium, Size::Large }
///
///     /// Basic sizes plus the extremes.
///     pub struct ExtendedSize(Size): BasicSize {
///         Size::Unknown, Size::ExtraSmall, Size::Small,
///         Size::Medium, Size::Large, Size::ExtraLarge,
///     }
///
///     /// Same values as `BasicSize`, hashed without caching.
///     pub struct PlainSize(Size, Recompute): BasicSize;
/// }
///
/// let basic = BasicSize::new(Size::Small).unwrap();
/// let extended = ExtendedSize::new(Size::Small).unwrap();
/// assert_eq!(basic, extended);
/// assert_eq!(extended, basic);
///
/// assert_eq!(PlainSizeKind::defined_values(), BasicSizeKind::defined_values());
/// assert!(matches!(
///     BasicSize::new(Size::ExtraLarge),
///     Err(BoundedError::OutOfRange { .. })
/// ));
/// ```
#[macro_export]
macro_rules! bounded_enum {
    () => {};

    (@policy) => { $crate::Memoized };
    (@policy $policy:ty) => { $policy };

    (@parent) => { ::core::option::Option::None };
    (@parent $parent:ident) => {
        $crate::paste::paste! {
            ::core::option::Option::Some($crate::Kind::declared_parent::<Self, [<$parent Kind>]>())
        }
    };

    (@values $raw:ty; [$($value:expr),*]) => {{
        const VALUES: &[$raw] = &[$($value),*];
        VALUES
    }};
    (@values $raw:ty; inherit $parent:ident) => {
        $crate::paste::paste! {
            <[<$parent Kind>] as $crate::Restriction>::defined_values()
        }
    };

    (@declare
        [$(#[$meta:meta])*] $vis:vis $name:ident ($raw:ty) [$($policy:ty)?] [$($parent:ident)?]
        { $($values:tt)* }
    ) => {
        $crate::paste::paste! {
            #[doc = "Kind marker for [`" $name "`]."]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $vis struct [<$name Kind>];

            impl $crate::Restriction for [<$name Kind>] {
                type Raw = $raw;
                type Policy = $crate::bounded_enum!(@policy $($policy)?);
                const NAME: &'static str = stringify!($name);

                fn defined_values() -> &'static [$raw] {
                    $crate::bounded_enum!(@values $raw; $($values)*)
                }

                fn parent() -> ::core::option::Option<$crate::Kind> {
                    $crate::bounded_enum!(@parent $($parent)?)
                }
            }

            $(#[$meta])*
            $vis type $name = $crate::BoundedEnum<[<$name Kind>]>;
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident ($raw:ty $(, $policy:ty)?) $(: $parent:ident)? {
            $($value:expr),* $(,)?
        }
        $($rest:tt)*
    ) => {
        $crate::bounded_enum!(@declare
            [$(#[$meta])*] $vis $name ($raw) [$($policy)?] [$($parent)?]
            { [$($value),*] }
        );
        $crate::bounded_enum!($($rest)*);
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident ($raw:ty $(, $policy:ty)?) : $parent:ident ;
        $($rest:tt)*
    ) => {
        $crate::bounded_enum!(@declare
            [$(#[$meta])*] $vis $name ($raw) [$($policy)?] [$parent]
            { inherit $parent }
        );
        $crate::bounded_enum!($($rest)*);
    };
}
