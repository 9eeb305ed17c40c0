//! Selection among pairwise sums and absolute differences of one sample.
//!
//! The pairwise values of a sorted sample `a` form an implicit upper-triangular
//! matrix whose rows are non-decreasing: row `i` holds `a[i] + a[j]` for
//! `j >= i` (Center) or `a[j] - a[i]` for `j > i` (Spread). The selection keeps
//! one active column window per row and repeatedly partitions all values
//! around a pivot with a single two-pointer sweep (Monahan, Algorithm 616).
//!
//! Pivots after the first are the median of a row chosen with probability
//! proportional to its active window, drawn from an [`Rng`]. The generator
//! only decides how many rounds are needed; the answer is fixed by the sorted
//! input.
//!
//! # Termination
//!
//! Target ranks always stay inside the active windows. A round whose pivot
//! equals the smallest active value discards nothing and leaves the
//! below-pivot count where it was. Two equal counts in a row switch the next
//! pivot to the midrange of the active extremes, which removes at least one
//! extreme, so a stall never lasts more than one extra round.

use alloc::vec;
use alloc::vec::Vec;

use super::{sorted_copy, Ranks};
use crate::assumptions::{AssumptionError, Subject};
use crate::rng::Rng;

/// Which pairwise combination the implicit matrix holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pairing {
    /// `a[i] + a[j]` for `i <= j`, halved by the caller.
    Sums,
    /// `a[j] - a[i]` for `i < j`.
    Gaps,
}

/// Result of partitioning every pairwise value around a pivot.
#[derive(Debug, Clone, Copy)]
struct Partition {
    below: usize,
    largest_below: f64,
    smallest_at_or_above: f64,
}

impl Pairing {
    fn first_column(self, row: usize) -> usize {
        match self {
            Self::Sums => row,
            Self::Gaps => row + 1,
        }
    }

    fn total(self, n: usize) -> usize {
        match self {
            Self::Sums => n * (n + 1) / 2,
            Self::Gaps => n * n.saturating_sub(1) / 2,
        }
    }

    #[inline]
    fn value(self, a: &[f64], row: usize, col: usize) -> f64 {
        match self {
            Self::Sums => a[row] + a[col],
            Self::Gaps => a[col] - a[row],
        }
    }

    fn initial_pivot(self, a: &[f64]) -> f64 {
        let n = a.len();
        match self {
            Self::Sums => a[(n - 1) / 2] + a[n / 2],
            Self::Gaps => a[n / 2] - a[(n - 1) / 2],
        }
    }

    /// Counts values below `pivot`, row by row, in one linear sweep.
    ///
    /// The boundary column moves left as rows advance for sums and right for
    /// gaps, so the total work is O(n).
    fn partition(self, a: &[f64], pivot: f64, below_in_row: &mut [usize]) -> Partition {
        let n = a.len();
        let mut out = Partition {
            below: 0,
            largest_below: f64::NEG_INFINITY,
            smallest_at_or_above: f64::INFINITY,
        };

        match self {
            Self::Sums => {
                let mut col = n;
                for i in 0..n {
                    while col > i && a[i] + a[col - 1] >= pivot {
                        col -= 1;
                    }
                    let count = col.saturating_sub(i);
                    below_in_row[i] = count;
                    out.below += count;
                    if count > 0 {
                        out.largest_below = out.largest_below.max(a[i] + a[col - 1]);
                    }
                    let first_above = col.max(i);
                    if first_above < n {
                        out.smallest_at_or_above =
                            out.smallest_at_or_above.min(a[i] + a[first_above]);
                    }
                }
            }
            Self::Gaps => {
                let mut col = 0;
                for i in 0..n {
                    col = col.max(i + 1);
                    while col < n && a[col] - a[i] < pivot {
                        col += 1;
                    }
                    let count = col - (i + 1);
                    below_in_row[i] = count;
                    out.below += count;
                    if count > 0 {
                        out.largest_below = out.largest_below.max(a[col - 1] - a[i]);
                    }
                    if col < n {
                        out.smallest_at_or_above = out.smallest_at_or_above.min(a[col] - a[i]);
                    }
                }
            }
        }

        out
    }
}

impl Ranks {
    /// The answer, if this partition pins the target ranks.
    fn resolve(&self, p: &Partition) -> Option<f64> {
        if self.low == self.high {
            if p.below == self.low {
                return Some(p.largest_below);
            }
            if p.below + 1 == self.low {
                return Some(p.smallest_at_or_above);
            }
            None
        } else if p.below == self.low {
            Some(0.5 * (p.largest_below + p.smallest_at_or_above))
        } else {
            None
        }
    }
}

/// Smallest and largest active values.
fn active_extremes(pairing: Pairing, a: &[f64], lo: &[usize], hi: &[usize]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in 0..a.len() {
        if lo[row] >= hi[row] {
            continue;
        }
        min = min.min(pairing.value(a, row, lo[row]));
        max = max.max(pairing.value(a, row, hi[row] - 1));
    }
    (min, max)
}

/// Exhaustive answer for tiny samples (at most three pairwise values).
fn select_tiny(pairing: Pairing, a: &[f64], ranks: Ranks) -> f64 {
    let n = a.len();
    let mut values: Vec<f64> = (0..n)
        .flat_map(|i| (pairing.first_column(i)..n).map(move |j| (i, j)))
        .map(|(i, j)| pairing.value(a, i, j))
        .collect();
    values.sort_by(|x, y| x.total_cmp(y));
    0.5 * (values[ranks.low - 1] + values[ranks.high - 1])
}

fn select(pairing: Pairing, a: &[f64], ranks: Ranks, rng: &mut Rng) -> f64 {
    let n = a.len();
    ranks.assert_within(pairing.total(n));
    debug_assert!(a.windows(2).all(|w| w[0] <= w[1]), "input must be sorted");

    if n <= 2 {
        return select_tiny(pairing, a, ranks);
    }

    // Active window of row i is the half-open column range lo[i]..hi[i].
    let mut lo: Vec<usize> = (0..n).map(|i| pairing.first_column(i).min(n)).collect();
    let mut hi = vec![n; n];
    let mut below_in_row = vec![0usize; n];

    let mut pivot = pairing.initial_pivot(a);
    let mut previous_below: Option<usize> = None;

    loop {
        let partition = pairing.partition(a, pivot, &mut below_in_row);
        if let Some(value) = ranks.resolve(&partition) {
            return value;
        }

        if partition.below < ranks.low {
            for i in 0..n {
                lo[i] = lo[i].max(pairing.first_column(i) + below_in_row[i]);
            }
        } else {
            for i in 0..n {
                hi[i] = hi[i].min(pairing.first_column(i) + below_in_row[i]);
            }
        }

        let active: usize = lo.iter().zip(&hi).map(|(&l, &h)| h.saturating_sub(l)).sum();
        debug_assert!(active > 0, "target ranks left the active set");

        if active <= 2 || previous_below == Some(partition.below) {
            let (min, max) = active_extremes(pairing, a, &lo, &hi);
            if min >= max {
                return min;
            }
            let mid = 0.5 * (min + max);
            pivot = if mid > min && mid <= max { mid } else { max };
        } else {
            let target = rng.uniform_usize(0, active);
            let mut seen = 0;
            let mut row = 0;
            for i in 0..n {
                let size = hi[i].saturating_sub(lo[i]);
                if target < seen + size {
                    row = i;
                    break;
                }
                seen += size;
            }
            let col = (lo[row] + hi[row] - 1) / 2;
            pivot = pairing.value(a, row, col);
        }

        previous_below = Some(partition.below);
    }
}

/// Mean of the order statistics at `ranks` among pairwise averages
/// `(a[i] + a[j]) / 2`, `i <= j`.
///
/// # Panics
///
/// Panics if `sorted` is empty or the ranks are outside `1..=n(n+1)/2`.
pub fn pairwise_average_at(sorted: &[f64], ranks: Ranks, rng: &mut Rng) -> f64 {
    select(Pairing::Sums, sorted, ranks, rng) / 2.0
}

/// Mean of the order statistics at `ranks` among absolute differences
/// `a[j] - a[i]`, `i < j`.
///
/// # Panics
///
/// Panics if `sorted` has fewer than two values or the ranks are outside
/// `1..=n(n-1)/2`.
pub fn pairwise_gap_at(sorted: &[f64], ranks: Ranks, rng: &mut Rng) -> f64 {
    select(Pairing::Gaps, sorted, ranks, rng)
}

/// Median of all pairwise averages (the Hodges-Lehmann estimator).
///
/// The pivot generator is seeded from the values in their given order.
pub fn median_pairwise_average(values: &[f64]) -> Result<f64, AssumptionError> {
    let n = values.len();
    match n {
        0 => Err(AssumptionError::validity(Subject::X)),
        1 => Ok(values[0]),
        2 => Ok((values[0] + values[1]) / 2.0),
        _ => {
            let mut rng = Rng::from_values(values);
            let sorted = sorted_copy(values);
            let ranks = Ranks::median(Pairing::Sums.total(n));
            Ok(pairwise_average_at(&sorted, ranks, &mut rng))
        }
    }
}

/// Median of all pairwise absolute differences (the Shamos estimator).
///
/// A single value has no pairs and yields zero.
pub fn median_pairwise_gap(values: &[f64]) -> Result<f64, AssumptionError> {
    let n = values.len();
    match n {
        0 => Err(AssumptionError::validity(Subject::X)),
        1 => Ok(0.0),
        2 => Ok((values[1] - values[0]).abs()),
        _ => {
            let mut rng = Rng::from_values(values);
            let sorted = sorted_copy(values);
            let ranks = Ranks::median(Pairing::Gaps.total(n));
            Ok(pairwise_gap_at(&sorted, ranks, &mut rng))
        }
    }
}
