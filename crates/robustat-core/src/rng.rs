//! Portable deterministic pseudo-random number generator.
//!
//! Every implementation of robustat draws the same stream for the same seed,
//! bit for bit. The engine is xoshiro256++ whose 256-bit state is expanded
//! from a 64-bit seed by four SplitMix64 steps. String seeds are hashed with
//! FNV-1a 64 first.
//!
//! The randomized bounds procedures take a caller-owned `&mut Rng`. The
//! selection routines derive their own generator from the input values
//! ([`Rng::from_values`]), so repeated calls on the same data follow the same
//! iteration path without the caller threading a seed through.

use alloc::vec::Vec;

use rand::{RngCore, SeedableRng};
use rand_xoshiro::{SplitMix64, Xoshiro256PlusPlus};

use crate::constants::{FNV_OFFSET_BASIS, FNV_PRIME, UNIFORM_SCALE};

/// FNV-1a 64-bit hash of a byte string.
pub fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &b| {
        (hash ^ b as u64).wrapping_mul(FNV_PRIME)
    })
}

/// FNV-1a over the little-endian bytes of each value, in input order.
pub fn hash_values(values: &[f64]) -> u64 {
    values.iter().fold(FNV_OFFSET_BASIS, |hash, v| {
        v.to_bits()
            .to_le_bytes()
            .iter()
            .fold(hash, |h, &b| (h ^ b as u64).wrapping_mul(FNV_PRIME))
    })
}

/// xoshiro256++ generator with the cross-implementation seeding scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rng {
    inner: Xoshiro256PlusPlus,
}

impl Rng {
    /// Generator seeded from a 64-bit integer.
    pub fn new(seed: u64) -> Self {
        let mut expander = SplitMix64::seed_from_u64(seed);
        let mut state = [0u8; 32];
        for chunk in state.chunks_exact_mut(8) {
            chunk.copy_from_slice(&expander.next_u64().to_le_bytes());
        }
        Self {
            inner: Xoshiro256PlusPlus::from_seed(state),
        }
    }

    /// Generator seeded from the FNV-1a hash of a UTF-8 string.
    pub fn from_string(seed: &str) -> Self {
        Self::new(fnv1a(seed.as_bytes()))
    }

    /// Generator seeded from the content of a sample.
    pub fn from_values(values: &[f64]) -> Self {
        Self::new(hash_values(values))
    }

    /// Uniform float in `[0, 1)` built from the top 53 bits of one draw.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        (self.inner.next_u64() >> 11) as f64 * UNIFORM_SCALE
    }

    /// Uniform float in `[min, max)`; returns `min` when the range is empty.
    #[inline]
    pub fn uniform_range(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        min + (max - min) * self.uniform()
    }

    /// Uniform integer in `[min, max)` by modulo reduction.
    ///
    /// Returns `min` when the range is empty. Non-power-of-two ranges carry a
    /// small bias, which every implementation shares.
    #[inline]
    pub fn uniform_int(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        let range = max.wrapping_sub(min) as u64;
        min.wrapping_add((self.inner.next_u64() % range) as i64)
    }

    /// Uniform index in `[min, max)`; same stream as [`Rng::uniform_int`].
    #[inline]
    pub fn uniform_usize(&mut self, min: usize, max: usize) -> usize {
        if min >= max {
            return min;
        }
        let range = (max - min) as u64;
        min + (self.inner.next_u64() % range) as usize
    }

    /// Fair coin.
    #[inline]
    pub fn uniform_bool(&mut self) -> bool {
        self.uniform() < 0.5
    }

    /// Shuffled copy of `items` (Fisher-Yates, walking down from the end).
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        assert!(!items.is_empty(), "cannot shuffle an empty slice");
        let mut result = items.to_vec();
        for i in (1..result.len()).rev() {
            let j = self.uniform_usize(0, i + 1);
            result.swap(i, j);
        }
        result
    }

    /// `k` items without replacement, in their original relative order.
    ///
    /// Single forward pass: item `i` is kept with probability
    /// `remaining / (n - i)`. When `k >= n` a copy of `items` is returned
    /// without consuming any draws.
    pub fn sample<T: Clone>(&mut self, items: &[T], k: usize) -> Vec<T> {
        let n = items.len();
        if k >= n {
            return items.to_vec();
        }

        let mut result = Vec::with_capacity(k);
        let mut remaining = k;
        for (i, item) in items.iter().enumerate() {
            if remaining == 0 {
                break;
            }
            let available = n - i;
            if self.uniform() * (available as f64) < remaining as f64 {
                result.push(item.clone());
                remaining -= 1;
            }
        }
        result
    }

    /// `k` items drawn with replacement.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty.
    pub fn resample<T: Clone>(&mut self, items: &[T], k: usize) -> Vec<T> {
        assert!(!items.is_empty(), "cannot resample an empty slice");
        (0..k)
            .map(|_| items[self.uniform_usize(0, items.len())].clone())
            .collect()
    }
}

impl RngCore for Rng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.inner.fill_bytes(dst)
    }
}
