//! Numeric constants shared across the crate.

/// Default two-sided misrate for bounds: one miss in a thousand.
pub const DEFAULT_MISRATE: f64 = 1e-3;

/// Machine epsilon for binary64, 2^-52.
///
/// Samplers built on top of this crate use it in place of zero to keep
/// `ln(u)` finite.
pub const MACHINE_EPSILON: f64 = f64::EPSILON;

/// Smallest positive subnormal binary64 value.
pub const SMALLEST_SUBNORMAL: f64 = 5e-324;

/// Largest `n + m` for which `PairwiseMargin` enumerates the exact distribution.
pub const PAIRWISE_EXACT_LIMIT: usize = 400;

/// Largest `n` for which `SignedRankMargin` enumerates the exact distribution.
///
/// 2^63 rank-sum patterns still fit the `u64` counters.
pub const SIGNED_RANK_EXACT_LIMIT: usize = 63;

/// Refinement cap for the cross-sample quantile search.
///
/// Each step moves a bracket end onto an actual difference, so a
/// well-formed input converges far below this.
pub const MAX_SEARCH_ITERATIONS: usize = 128;

// =============================================================================
// PRNG constants
// =============================================================================
//
// `Rng::new` expands its seed through `rand_xoshiro::SplitMix64`; the three
// SplitMix64 values below are the ones that expansion must use, published
// for ports that reimplement the stream and pinned by the rng tests.

/// SplitMix64 increment (golden-ratio gamma).
pub const SPLITMIX_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// First SplitMix64 mixing multiplier.
pub const SPLITMIX_MIX1: u64 = 0xbf58_476d_1ce4_e5b9;

/// Second SplitMix64 mixing multiplier.
pub const SPLITMIX_MIX2: u64 = 0x94d0_49bb_1331_11eb;

/// FNV-1a 64-bit offset basis.
pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Scale turning the top 53 bits of a word into a float in `[0, 1)`.
pub const UNIFORM_SCALE: f64 = 1.0 / (1u64 << 53) as f64;
