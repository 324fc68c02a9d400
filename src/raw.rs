//! Raw enumeration domains.
//!
//! A bounded enum wraps a value of a plain, fieldless Rust enum. The
//! [`RawEnum`] trait gives that enum the name table, discriminants and
//! lookups the rest of the crate relies on. It is normally derived:
//!
//! ```rust
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
//! assert_eq!(Size::from_name("large", true), Some(Size::Large));
//! assert_eq!(Size::from_discriminant(0), Some(Size::Unknown));
//! ```

use std::any::TypeId;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{OnceLock, PoisonError, RwLock};

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::DomainSetupError;

/// A finite, discriminant-backed domain of values.
///
/// Implementors list every variant in [`VARIANTS`](Self::VARIANTS) and give
/// each one a canonical name and an integer discriminant. `Ord` must agree
/// with discriminant order, which is what `#[derive(PartialOrd, Ord)]`
/// produces for fieldless enums.
///
/// [`check_domain`](Self::check_domain) must succeed before any bounded enum
/// over this domain can be constructed.
pub trait RawEnum: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// Returns the canonical name of this variant.
    fn name(self) -> &'static str;

    /// Returns the integer discriminant of this variant.
    fn discriminant(self) -> i64;

    /// Returns a short name for the domain, used in error messages.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Looks up a variant by its canonical name.
    ///
    /// With `ignore_case` the comparison ignores ASCII case.
    fn from_name(name: &str, ignore_case: bool) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|variant| {
            if ignore_case {
                variant.name().eq_ignore_ascii_case(name)
            } else {
                variant.name() == name
            }
        })
    }

    /// Looks up a variant by its discriminant.
    fn from_discriminant(discriminant: i64) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.discriminant() == discriminant)
    }

    /// Validates the variant table.
    ///
    /// Runs [`check_domain`] once per type and caches the outcome. The
    /// default keeps one shared table keyed by `TypeId`; the derived
    /// implementation uses a dedicated static instead.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainSetupError`] describing the first problem found.
    fn check_domain() -> Result<(), DomainSetupError> {
        static CHECKED: OnceLock<RwLock<FxHashMap<TypeId, Result<(), DomainSetupError>>>> =
            OnceLock::new();

        let checked = CHECKED.get_or_init(RwLock::default);
        let id = TypeId::of::<Self>();
        if let Some(outcome) = checked
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
        {
            return outcome.clone();
        }

        let outcome = check_domain::<Self>();
        checked
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(id)
            .or_insert(outcome)
            .clone()
    }
}

/// Validates that `R` is a usable raw domain.
///
/// The table must be non-empty, every name must be non-blank and unique
/// ignoring ASCII case, and every discriminant must be unique.
///
/// # Errors
///
/// Returns the first [`DomainSetupError`] found, scanning in declaration order.
pub fn check_domain<R: RawEnum>() -> Result<(), DomainSetupError> {
    let domain = R::type_name();
    if R::VARIANTS.is_empty() {
        return Err(DomainSetupError::Empty { domain });
    }

    let mut names = FxHashSet::default();
    let mut discriminants = FxHashSet::default();
    for &variant in R::VARIANTS {
        let name = variant.name();
        if name.trim().is_empty() {
            return Err(DomainSetupError::UnnamedVariant { domain });
        }
        if !names.insert(name.to_ascii_lowercase()) {
            return Err(DomainSetupError::DuplicateName { domain, name });
        }
        let discriminant = variant.discriminant();
        if !discriminants.insert(discriminant) {
            return Err(DomainSetupError::DuplicateDiscriminant {
                domain,
                discriminant,
            });
        }
    }
    Ok(())
}

/// Resolves user input to a raw variant.
///
/// Surrounding whitespace is ignored. The input may be a variant name or the
/// decimal form of a declared discriminant.
pub(crate) fn lookup<R: RawEnum>(input: &str, ignore_case: bool) -> Option<R> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    R::from_name(trimmed, ignore_case).or_else(|| {
        trimmed
            .parse::<i64>()
            .ok()
            .and_then(R::from_discriminant)
    })
}
