//! Kinds: the concrete subtypes of a bounded enum.
//!
//! A kind is a zero-sized marker type implementing [`Restriction`]. It picks
//! the raw domain, the subset of that domain its instances accept, the hashing
//! policy, and optionally a parent kind.
//!
//! Parents form a declared hierarchy. Two kinds are *type-equivalent* when one
//! appears in the other's lineage; equality between instances of different
//! kinds uses this relation, see [`Kind::is_equivalent`].
//!
//! Kinds are usually declared with [`bounded_enum!`](crate::bounded_enum),
//! which writes the marker and the [`Restriction`] impl.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{OnceLock, PoisonError, RwLock};

use rustc_hash::FxHashMap;

use crate::bounded::BoundedEnum;
use crate::error::BoundedError;
use crate::policy::HashPolicy;
use crate::raw::RawEnum;

/// A concrete subtype of a bounded enum.
///
/// # Examples
///
/// ```rust
/// use bounded_enum::{BoundedEnum, Memoized, RawEnum, Restriction};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, RawEnum)]
/// enum Size {
///     Unknown,
///     Small,
///     Large,
/// }
///
/// struct SmallOnly;
///
/// impl Restriction for SmallOnly {
///     type Raw = Size;
///     type Policy = Memoized;
///     const NAME: &'static str = "SmallOnly";
///
///     fn defined_values() -> &'static [Size] {
///         &[Size::Unknown, Size::Small]
///     }
/// }
///
/// assert!(SmallOnly::is_defined(Size::Small));
/// assert!(!SmallOnly::is_defined(Size::Large));
/// assert!(BoundedEnum::<SmallOnly>::new(Size::Large).is_err());
/// ```
pub trait Restriction: 'static {
    /// The raw domain this kind restricts.
    type Raw: RawEnum;

    /// How instances of this kind produce their hash code.
    type Policy: HashPolicy;

    /// Display name of the kind.
    const NAME: &'static str;

    /// The raw values instances of this kind may hold.
    ///
    /// The slice is `'static`, so the set cannot change after first use.
    fn defined_values() -> &'static [Self::Raw];

    /// The kind this one derives from, if any.
    ///
    /// Use [`Kind::declared_parent`] so the compiler checks that the parent
    /// shares the raw domain.
    fn parent() -> Option<Kind> {
        None
    }

    /// Runtime descriptor for this kind.
    fn kind() -> Kind
    where
        Self: Sized,
    {
        Kind::of::<Self>()
    }

    /// Returns `true` if `value` is one of [`defined_values`](Self::defined_values).
    fn is_defined(value: Self::Raw) -> bool {
        Self::defined_values().contains(&value)
    }

    /// Checks a dynamically typed value.
    ///
    /// Accepts the raw type itself, a primitive integer naming a declared
    /// discriminant, or a bounded enum instance. An instance is handled like
    /// [`is_defined_bounded`](Self::is_defined_bounded): its kind must be
    /// type-equivalent to this one. Anything else, including `None`, yields
    /// `false`.
    fn is_defined_any(value: Option<&dyn Any>) -> bool
    where
        Self: Sized,
    {
        let Some(value) = value else {
            return false;
        };
        if let Some(raw) = value.downcast_ref::<Self::Raw>() {
            return Self::is_defined(*raw);
        }
        if let Some(bounded) = value.downcast_ref::<BoundedEnum<Self>>() {
            return Self::is_defined(bounded.value());
        }
        if let Some((kind, discriminant)) = describe_instance(value) {
            return Self::kind().is_equivalent(kind)
                && <Self::Raw as RawEnum>::from_discriminant(discriminant)
                    .is_some_and(Self::is_defined);
        }
        integer_of(value)
            .and_then(<Self::Raw as RawEnum>::from_discriminant)
            .is_some_and(Self::is_defined)
    }

    /// Checks an instance of a possibly different kind.
    ///
    /// `true` only when `other`'s kind is type-equivalent to this one and its
    /// raw value is defined here.
    fn is_defined_bounded<K>(value: Option<&BoundedEnum<K>>) -> bool
    where
        Self: Sized,
        K: Restriction<Raw = Self::Raw>,
    {
        value.is_some_and(|other| {
            Self::kind().is_equivalent(K::kind()) && Self::is_defined(other.value())
        })
    }

    /// Constructs an instance of this kind.
    ///
    /// # Errors
    ///
    /// See [`BoundedEnum::new`].
    fn create(value: Self::Raw) -> Result<BoundedEnum<Self>, BoundedError>
    where
        Self: Sized,
    {
        BoundedEnum::new(value)
    }
}

fn integer_of(value: &dyn Any) -> Option<i64> {
    macro_rules! probe {
        ($($integer:ty),*) => {
            $(
                if let Some(integer) = value.downcast_ref::<$integer>() {
                    return i64::try_from(*integer).ok();
                }
            )*
        };
    }

    probe!(i64, i32, i16, i8, isize, u64, u32, u16, u8, usize);
    None
}

type Describe = fn(&dyn Any) -> Option<i64>;

/// Instance types seen by [`BoundedEnum::new`], keyed by the `TypeId` of
/// `BoundedEnum<K>`.
static INSTANCE_KINDS: OnceLock<RwLock<FxHashMap<TypeId, (Kind, Describe)>>> = OnceLock::new();

/// Records `BoundedEnum<K>` so type-erased instances can be recognised.
///
/// Every instance is built through `BoundedEnum::new`, so any instance that
/// reaches [`Restriction::is_defined_any`] has a registered kind.
pub(crate) fn register_instance_kind<K: Restriction>() {
    let registry = INSTANCE_KINDS.get_or_init(RwLock::default);
    let id = TypeId::of::<BoundedEnum<K>>();
    if registry
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .contains_key(&id)
    {
        return;
    }
    let describe: Describe = |value| {
        value
            .downcast_ref::<BoundedEnum<K>>()
            .map(BoundedEnum::discriminant)
    };
    registry
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .entry(id)
        .or_insert((Kind::of::<K>(), describe));
}

/// Kind and discriminant of a type-erased bounded enum instance.
fn describe_instance(value: &dyn Any) -> Option<(Kind, i64)> {
    let registry = INSTANCE_KINDS.get()?;
    let (kind, describe) = *registry
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&value.type_id())?;
    describe(value).map(|discriminant| (kind, discriminant))
}

/// Runtime descriptor of a kind.
///
/// Identity is the kind's [`TypeId`]; the name is kept for messages and the
/// parent link for type-equivalence checks.
#[derive(Clone, Copy)]
pub struct Kind {
    id: TypeId,
    name: &'static str,
    parent: fn() -> Option<Kind>,
}

impl Kind {
    /// Descriptor for `K`.
    pub fn of<K: Restriction>() -> Self {
        Self {
            id: TypeId::of::<K>(),
            name: K::NAME,
            parent: K::parent,
        }
    }

    /// Descriptor for `P`, declared as the parent of `K`.
    ///
    /// Only compiles when both kinds restrict the same raw domain.
    pub fn declared_parent<K, P>() -> Self
    where
        K: Restriction,
        P: Restriction<Raw = K::Raw>,
    {
        Self::of::<P>()
    }

    /// The kind's name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The kind's type identity.
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.id
    }

    /// The declared parent, if any.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        (self.parent)()
    }

    /// This kind followed by its ancestors, nearest first.
    ///
    /// Stops at the first repeated kind, so a cyclic declaration terminates.
    pub fn lineage(&self) -> Lineage {
        Lineage {
            next: Some(*self),
            seen: Vec::new(),
        }
    }

    /// Returns `true` if `ancestor` is this kind or appears in its lineage.
    pub fn descends_from(&self, ancestor: Self) -> bool {
        self.lineage().any(|kind| kind == ancestor)
    }

    /// Bidirectional type-equivalence.
    ///
    /// Sibling kinds, and kinds from unrelated hierarchies, are never
    /// equivalent even when their defined values overlap. The relation is not
    /// transitive: two siblings are each equivalent to their common parent
    /// but not to each other.
    pub fn is_equivalent(&self, other: Self) -> bool {
        self.descends_from(other) || other.descends_from(*self)
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Kind {}

impl Hash for Kind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Kind")
            .field("name", &self.name)
            .field("parent", &self.parent().map(|parent| parent.name))
            .finish()
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name)
    }
}

/// Iterator over a kind and its ancestors. See [`Kind::lineage`].
#[derive(Debug, Clone)]
pub struct Lineage {
    next: Option<Kind>,
    seen: Vec<TypeId>,
}

impl Iterator for Lineage {
    type Item = Kind;

    fn next(&mut self) -> Option<Kind> {
        let current = self.next.take()?;
        if self.seen.contains(&current.id) {
            return None;
        }
        self.seen.push(current.id);
        self.next = current.parent();
        Some(current)
    }
}
