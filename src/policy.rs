//! Hashing policies for bounded enums.
//!
//! A kind chooses how its instances produce [`hash_code`]:
//!
//! - [`Memoized`]: computed on first request and cached in the instance
//! - [`Recompute`]: computed on every request, nothing stored
//!
//! Both policies yield the same value for the same instance; they differ
//! only in whether the instance carries a cache slot.
//!
//! # Concurrency
//!
//! The [`HashSlot`] used by [`Memoized`] is lock-free. Two threads asking for
//! the hash of a fresh instance at the same time may both compute it, but the
//! computation is deterministic, so both store the same value.
//!
//! [`hash_code`]: crate::BoundedEnum::hash_code

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Strategy for producing an instance's hash code.
pub trait HashPolicy: 'static {
    /// Per-instance storage used by the policy.
    type Cache: Default + Clone + Debug + Send + Sync + 'static;

    /// Returns the hash code, computing it with `compute` when needed.
    fn get_or_compute(cache: &Self::Cache, compute: impl FnOnce() -> u64) -> u64;

    /// Returns the stored hash code, if the policy stores one and it is ready.
    fn peek(cache: &Self::Cache) -> Option<u64>;
}

/// Caches the hash code after the first computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Memoized;

/// Recomputes the hash code on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Recompute;

/// Write-once storage for a memoized hash code.
///
/// `ready` is published with `Release` after `value` is stored, and read with
/// `Acquire` before `value` is loaded.
#[derive(Debug, Default)]
pub struct HashSlot {
    ready: AtomicBool,
    value: AtomicU64,
}

impl HashSlot {
    /// Returns the stored value, if any.
    #[inline]
    pub fn get(&self) -> Option<u64> {
        if self.ready.load(Ordering::Acquire) {
            Some(self.value.load(Ordering::Relaxed))
        } else {
            None
        }
    }

    #[inline]
    fn store(&self, value: u64) {
        self.value.store(value, Ordering::Relaxed);
        self.ready.store(true, Ordering::Release);
    }
}

impl Clone for HashSlot {
    fn clone(&self) -> Self {
        let slot = Self::default();
        if let Some(value) = self.get() {
            slot.store(value);
        }
        slot
    }
}

impl HashPolicy for Memoized {
    type Cache = HashSlot;

    fn get_or_compute(cache: &Self::Cache, compute: impl FnOnce() -> u64) -> u64 {
        if let Some(value) = cache.get() {
            return value;
        }
        let value = compute();
        cache.store(value);
        value
    }

    #[inline]
    fn peek(cache: &Self::Cache) -> Option<u64> {
        cache.get()
    }
}

impl HashPolicy for Recompute {
    type Cache = ();

    #[inline]
    fn get_or_compute(_: &Self::Cache, compute: impl FnOnce() -> u64) -> u64 {
        compute()
    }

    #[inline]
    fn peek(_: &Self::Cache) -> Option<u64> {
        None
    }
}

static_assertions::assert_impl_all!(HashSlot: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::sync::Arc;
    use std::thread;

    #[rstest]
    fn memoized_computes_once() {
        let calls = Cell::new(0);
        let slot = HashSlot::default();
        let compute = || {
            calls.set(calls.get() + 1);
            42
        };

        assert_eq!(Memoized::peek(&slot), None);
        assert_eq!(Memoized::get_or_compute(&slot, compute), 42);
        assert_eq!(Memoized::get_or_compute(&slot, compute), 42);
        assert_eq!(calls.get(), 1);
        assert_eq!(Memoized::peek(&slot), Some(42));
    }

    #[rstest]
    fn memoized_stores_zero() {
        let slot = HashSlot::default();
        assert_eq!(Memoized::get_or_compute(&slot, || 0), 0);
        assert_eq!(slot.get(), Some(0));
    }

    #[rstest]
    fn recompute_calls_every_time() {
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            7
        };

        assert_eq!(Recompute::get_or_compute(&(), compute), 7);
        assert_eq!(Recompute::get_or_compute(&(), compute), 7);
        assert_eq!(calls.get(), 2);
        assert_eq!(Recompute::peek(&()), None);
    }

    #[rstest]
    fn cloned_slot_keeps_value() {
        let slot = HashSlot::default();
        let empty_clone = slot.clone();
        Memoized::get_or_compute(&slot, || 11);

        assert_eq!(slot.clone().get(), Some(11));
        assert_eq!(empty_clone.get(), None);
    }

    #[rstest]
    fn concurrent_first_computation_agrees() {
        let slot = Arc::new(HashSlot::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let slot = Arc::clone(&slot);
                thread::spawn(move || Memoized::get_or_compute(&slot, || 0xDEAD_BEEF))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 0xDEAD_BEEF);
        }
        assert_eq!(slot.get(), Some(0xDEAD_BEEF));
    }
}
