//! The bounded enum instance type.
//!
//! [`BoundedEnum<K>`] holds one raw value that kind `K` accepts. The value is
//! checked once, in [`BoundedEnum::new`], and never changes afterwards.
//!
//! # Equality, hashing and ordering
//!
//! - `==` works across kinds that share a raw domain: two instances are equal
//!   when their kinds are type-equivalent and their raw values match.
//! - [`hash_code`](BoundedEnum::hash_code) mixes the raw value with the exact
//!   kind. Type-equivalent instances of *different* kinds can therefore be
//!   equal while hashing differently. Within one kind, which is all a typed
//!   collection ever holds, hash and equality agree.
//! - `<`, `<=`, `>`, `>=` only exist between instances of the same kind. When
//!   kinds are only known generically, [`try_cmp`](BoundedEnum::try_cmp)
//!   reports [`BoundedError::IncompatibleComparison`] for differing kinds.
//! - Comparisons against a raw value go through `Deref`: `*size < Size::Large`.

use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

use rustc_hash::FxHasher;

use crate::error::BoundedError;
use crate::kind::{Kind, Restriction};
use crate::policy::HashPolicy;
use crate::raw::RawEnum;

const HASH_PRIME: u64 = 397;

/// A raw enum value restricted to the defined values of kind `K`.
///
/// # Examples
///
/// ```rust
/// use bounded_enum::{bounded_enum, RawEnum};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, RawEnum)]
/// pub enum Size {
///     Unknown,
///     ExtraSmall,
///     Small,
///     Large,
/// }
///
/// bounded_enum! {
///     /// Sizes up to small.
///     pub struct SmallSize(Size) { Size::Unknown, Size::ExtraSmall, Size::Small }
/// }
///
/// let extra_small = SmallSize::new(Size::ExtraSmall).unwrap();
/// let small = SmallSize::new(Size::Small).unwrap();
///
/// assert!(extra_small < small);
/// assert_eq!(small.to_string(), "Small");
/// assert_eq!(i64::from(small.clone()), 2);
/// assert_eq!(*small, Size::Small);
/// assert!(SmallSize::new(Size::Large).is_err());
/// ```
pub struct BoundedEnum<K: Restriction> {
    value: K::Raw,
    hash: <K::Policy as HashPolicy>::Cache,
    kind: PhantomData<fn() -> K>,
}

impl<K: Restriction> BoundedEnum<K> {
    /// Validates `value` against `K` and wraps it.
    ///
    /// # Errors
    ///
    /// - [`BoundedError::DomainSetup`] if the raw domain fails
    ///   [`RawEnum::check_domain`].
    /// - [`BoundedError::OutOfRange`] if `value` is not defined for `K`.
    pub fn new(value: K::Raw) -> Result<Self, BoundedError> {
        <K::Raw as RawEnum>::check_domain().map_err(|source| {
            tracing::warn!(kind = K::NAME, error = %source, "raw domain failed its setup check");
            BoundedError::DomainSetup {
                kind: K::NAME,
                source,
            }
        })?;

        if !K::is_defined(value) {
            tracing::trace!(
                kind = K::NAME,
                value = value.name(),
                "value outside the defined domain"
            );
            return Err(BoundedError::OutOfRange {
                kind: K::NAME,
                value: value.name(),
                discriminant: value.discriminant(),
            });
        }

        crate::kind::register_instance_kind::<K>();
        Ok(Self {
            value,
            hash: Default::default(),
            kind: PhantomData,
        })
    }

    /// Factory form of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    #[inline]
    pub fn create(value: K::Raw) -> Result<Self, BoundedError> {
        Self::new(value)
    }

    /// The raw values this kind accepts.
    #[inline]
    pub fn defined_values() -> &'static [K::Raw] {
        K::defined_values()
    }

    /// See [`Restriction::is_defined`].
    #[inline]
    pub fn is_defined(value: K::Raw) -> bool {
        K::is_defined(value)
    }

    /// See [`Restriction::is_defined_any`].
    #[inline]
    pub fn is_defined_any(value: Option<&dyn std::any::Any>) -> bool {
        K::is_defined_any(value)
    }

    /// See [`Restriction::is_defined_bounded`].
    #[inline]
    pub fn is_defined_bounded<K2>(value: Option<&BoundedEnum<K2>>) -> bool
    where
        K2: Restriction<Raw = K::Raw>,
    {
        K::is_defined_bounded(value)
    }

    /// The wrapped raw value.
    #[inline]
    pub fn value(&self) -> K::Raw {
        self.value
    }

    /// Consumes the instance and returns the raw value.
    #[inline]
    pub fn into_raw(self) -> K::Raw {
        self.value
    }

    /// Canonical name of the raw value.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.value.name()
    }

    /// Integer discriminant of the raw value.
    #[inline]
    pub fn discriminant(&self) -> i64 {
        self.value.discriminant()
    }

    /// Descriptor of this instance's kind.
    #[inline]
    pub fn kind(&self) -> Kind {
        K::kind()
    }

    /// Returns `true` if `other`'s kind is type-equivalent to `K`.
    pub fn is_type_equivalent<K2: Restriction>(&self, other: &BoundedEnum<K2>) -> bool {
        self.kind().is_equivalent(other.kind())
    }

    /// Hash code mixing the raw value with the exact kind.
    ///
    /// Computed as `h = 0; h = h * 397 ^ hash(raw); h = h * 397 ^ hash(kind)`
    /// with wrapping arithmetic. Stable for the lifetime of the instance;
    /// kinds using [`Memoized`](crate::Memoized) compute it only once.
    pub fn hash_code(&self) -> u64 {
        <K::Policy as HashPolicy>::get_or_compute(&self.hash, || {
            [hash_part(&self.value), hash_part(&TypeId::of::<K>())]
                .into_iter()
                .fold(0_u64, |code, part| code.wrapping_mul(HASH_PRIME) ^ part)
        })
    }

    /// The memoized hash code, if it has been computed.
    ///
    /// Always `None` under [`Recompute`](crate::Recompute).
    #[inline]
    pub fn cached_hash_code(&self) -> Option<u64> {
        <K::Policy as HashPolicy>::peek(&self.hash)
    }

    /// Orders two instances of possibly different kinds.
    ///
    /// # Errors
    ///
    /// [`BoundedError::IncompatibleComparison`] unless both instances have
    /// exactly the same kind. Type-equivalence is not enough.
    pub fn try_cmp<K2>(&self, other: &BoundedEnum<K2>) -> Result<Ordering, BoundedError>
    where
        K2: Restriction<Raw = K::Raw>,
    {
        if TypeId::of::<K>() != TypeId::of::<K2>() {
            return Err(BoundedError::IncompatibleComparison {
                left: K::NAME,
                right: K2::NAME,
            });
        }
        Ok(self.discriminant().cmp(&other.discriminant()))
    }

    /// `self < other`, see [`try_cmp`](Self::try_cmp).
    ///
    /// # Errors
    ///
    /// Same as [`try_cmp`](Self::try_cmp).
    pub fn try_lt<K2>(&self, other: &BoundedEnum<K2>) -> Result<bool, BoundedError>
    where
        K2: Restriction<Raw = K::Raw>,
    {
        self.try_cmp(other).map(Ordering::is_lt)
    }

    /// `self <= other`, see [`try_cmp`](Self::try_cmp).
    ///
    /// # Errors
    ///
    /// Same as [`try_cmp`](Self::try_cmp).
    pub fn try_le<K2>(&self, other: &BoundedEnum<K2>) -> Result<bool, BoundedError>
    where
        K2: Restriction<Raw = K::Raw>,
    {
        self.try_cmp(other).map(Ordering::is_le)
    }

    /// `self > other`, see [`try_cmp`](Self::try_cmp).
    ///
    /// # Errors
    ///
    /// Same as [`try_cmp`](Self::try_cmp).
    pub fn try_gt<K2>(&self, other: &BoundedEnum<K2>) -> Result<bool, BoundedError>
    where
        K2: Restriction<Raw = K::Raw>,
    {
        self.try_cmp(other).map(Ordering::is_gt)
    }

    /// `self >= other`, see [`try_cmp`](Self::try_cmp).
    ///
    /// # Errors
    ///
    /// Same as [`try_cmp`](Self::try_cmp).
    pub fn try_ge<K2>(&self, other: &BoundedEnum<K2>) -> Result<bool, BoundedError>
    where
        K2: Restriction<Raw = K::Raw>,
    {
        self.try_cmp(other).map(Ordering::is_ge)
    }

    /// Orders this instance against a raw value by discriminant.
    #[inline]
    pub fn cmp_raw(&self, value: K::Raw) -> Ordering {
        self.discriminant().cmp(&value.discriminant())
    }
}

fn hash_part<T: Hash + ?Sized>(part: &T) -> u64 {
    let mut hasher = FxHasher::default();
    part.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Standard Traits
// =============================================================================

impl<K: Restriction> Clone for BoundedEnum<K> {
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            hash: self.hash.clone(),
            kind: PhantomData,
        }
    }
}

impl<K, K2> PartialEq<BoundedEnum<K2>> for BoundedEnum<K>
where
    K: Restriction,
    K2: Restriction<Raw = K::Raw>,
{
    fn eq(&self, other: &BoundedEnum<K2>) -> bool {
        self.is_type_equivalent(other) && self.value == other.value
    }
}

impl<K: Restriction> Eq for BoundedEnum<K> {}

impl<K: Restriction> Hash for BoundedEnum<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<K: Restriction> PartialOrd for BoundedEnum<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Restriction> Ord for BoundedEnum<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.discriminant().cmp(&other.discriminant())
    }
}

impl<K: Restriction> Deref for BoundedEnum<K> {
    type Target = K::Raw;

    fn deref(&self) -> &K::Raw {
        &self.value
    }
}

impl<K: Restriction> AsRef<K::Raw> for BoundedEnum<K> {
    fn as_ref(&self) -> &K::Raw {
        &self.value
    }
}

impl<K: Restriction> From<BoundedEnum<K>> for i64 {
    fn from(bounded: BoundedEnum<K>) -> Self {
        bounded.discriminant()
    }
}

impl<K: Restriction> fmt::Display for BoundedEnum<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl<K: Restriction> fmt::Debug for BoundedEnum<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}({})", K::NAME, self.name())
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: Restriction> serde::Serialize for BoundedEnum<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
struct BoundedEnumVisitor<K> {
    kind_marker: PhantomData<fn() -> K>,
}

#[cfg(feature = "serde")]
impl<'de, K: Restriction> serde::de::Visitor<'de> for BoundedEnumVisitor<K> {
    type Value = BoundedEnum<K>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "the name of a value defined for {}", K::NAME)
    }

    fn visit_str<E>(self, input: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        BoundedEnum::parse(input).map_err(E::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de, K: Restriction> serde::Deserialize<'de> for BoundedEnum<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(BoundedEnumVisitor {
            kind_marker: PhantomData,
        })
    }
}
