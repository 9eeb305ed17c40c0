//! Exact order statistics of implicit pairwise multisets.
//!
//! None of the O(n²) or O(n·m) pairwise arrays is ever materialized:
//!
//! - [`pairwise`]: sums and absolute differences within one sample,
//!   by randomized implicit-matrix selection.
//! - [`cross`]: differences between two samples, by value-space bisection.

pub mod cross;
pub mod pairwise;

use alloc::vec::Vec;

pub use cross::{ratio_quantiles, select_kth, shift_quantiles};
pub use pairwise::{
    median_pairwise_average, median_pairwise_gap, pairwise_average_at, pairwise_gap_at,
};

/// One or two adjacent 1-based target ranks.
///
/// A single rank selects one order statistic. Two adjacent ranks select the
/// mean of both, which is how the median of an even-sized multiset is formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ranks {
    pub low: usize,
    pub high: usize,
}

impl Ranks {
    /// A single rank.
    pub fn single(rank: usize) -> Self {
        Self {
            low: rank,
            high: rank,
        }
    }

    /// The median rank(s) of a multiset of `total` elements.
    pub fn median(total: usize) -> Self {
        Self {
            low: total.div_ceil(2),
            high: (total + 2) / 2,
        }
    }

    pub(crate) fn assert_within(&self, total: usize) {
        assert!(
            self.low >= 1 && self.low <= self.high && self.high <= total,
            "ranks {}..={} outside 1..={}",
            self.low,
            self.high,
            total
        );
        assert!(
            self.high - self.low <= 1,
            "ranks {} and {} are not adjacent",
            self.low,
            self.high
        );
    }
}

/// Ascending copy of `values`.
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}
