//! Quantiles of cross-sample differences `x[i] - y[j]`.
//!
//! The n·m differences are never listed. For a target rank the search keeps
//! a value bracket whose ends are actual differences and bisects it. Each
//! probe costs one O(n + m) two-pointer sweep that counts differences at or
//! below the midpoint and reports the nearest actual differences on either
//! side, so the bracket snaps onto real values every round.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use super::sorted_copy;
use crate::assumptions::{check_positivity, check_probability, check_validity, Subject};
use crate::constants::MAX_SEARCH_ITERATIONS;
use crate::error::{Error, Result};
use crate::math;

/// Outcome of one counting sweep.
#[derive(Debug, Clone, Copy)]
struct Probe {
    at_or_below: usize,
    largest_at_or_below: f64,
    smallest_above: f64,
}

fn probe(x: &[f64], y: &[f64], threshold: f64) -> Probe {
    let m = y.len();
    let mut at_or_below = 0;
    let mut largest_at_or_below = f64::NEG_INFINITY;
    let mut smallest_above = f64::INFINITY;

    // y[j..] are the partners of xi with xi - y[j] <= threshold. As xi grows
    // the cut only moves right.
    let mut j = 0;
    for &xi in x {
        while j < m && xi - y[j] > threshold {
            j += 1;
        }
        at_or_below += m - j;
        if j < m {
            largest_at_or_below = largest_at_or_below.max(xi - y[j]);
        }
        if j > 0 {
            smallest_above = smallest_above.min(xi - y[j - 1]);
        }
    }

    if largest_at_or_below == f64::NEG_INFINITY {
        largest_at_or_below = x[0] - y[m - 1];
    }
    if smallest_above == f64::INFINITY {
        smallest_above = x[x.len() - 1] - y[0];
    }

    Probe {
        at_or_below,
        largest_at_or_below,
        smallest_above,
    }
}

/// The `k`-th smallest (1-based) difference `x[i] - y[j]` of two sorted samples.
///
/// Fails with [`Error::Convergence`] if the bracket does not close within
/// [`MAX_SEARCH_ITERATIONS`] rounds.
///
/// # Panics
///
/// Panics if either slice is empty or `k` is outside `1..=n·m`.
pub fn select_kth(x: &[f64], y: &[f64], k: usize) -> Result<f64> {
    let total = x.len() * y.len();
    assert!(k >= 1 && k <= total, "rank {} outside 1..={}", k, total);

    let mut lo = x[0] - y[y.len() - 1];
    let mut hi = x[x.len() - 1] - y[0];
    let mut previous = (f64::NEG_INFINITY, f64::INFINITY);

    for _ in 0..MAX_SEARCH_ITERATIONS {
        if lo == hi {
            return Ok(lo);
        }

        let mut mid = lo + (hi - lo) * 0.5;
        if mid >= hi {
            // Adjacent floats: probing `hi` would count it as its own lower
            // neighbour, so probe the lower end instead.
            mid = lo;
        }
        let p = probe(x, y, mid);
        if p.largest_at_or_below == p.smallest_above {
            return Ok(p.largest_at_or_below);
        }

        // Bracket did not move last round: the answer is one of its ends.
        if (lo, hi) == previous {
            return Ok(if p.at_or_below >= k {
                p.largest_at_or_below
            } else {
                p.smallest_above
            });
        }
        previous = (lo, hi);

        if p.at_or_below >= k {
            hi = p.largest_at_or_below;
        } else {
            lo = p.smallest_above;
        }
    }

    Err(Error::Convergence {
        rank: k,
        iterations: MAX_SEARCH_ITERATIONS,
    })
}

/// Type-7 interpolation coordinates of probability `p` over `total` values.
fn type7(total: usize, p: f64) -> (usize, usize, f64) {
    let h = 1.0 + (total - 1) as f64 * p;
    let floor = math::floor(h);
    let lower = (floor as usize).max(1);
    let upper = (math::ceil(h) as usize).min(total);
    (lower, upper, h - floor)
}

/// Type-7 quantiles of all differences `x[i] - y[j]`.
///
/// Ranks shared by several probabilities are solved once. Set `assume_sorted`
/// when both inputs are already ascending to skip the copies.
pub fn shift_quantiles(
    x: &[f64],
    y: &[f64],
    probabilities: &[f64],
    assume_sorted: bool,
) -> Result<Vec<f64>> {
    check_validity(x, Subject::X)?;
    check_validity(y, Subject::Y)?;
    for &p in probabilities {
        check_probability(p)?;
    }

    let xs;
    let ys;
    let (x, y) = if assume_sorted {
        (x, y)
    } else {
        xs = sorted_copy(x);
        ys = sorted_copy(y);
        (xs.as_slice(), ys.as_slice())
    };

    let total = x.len() * y.len();
    let plan: Vec<(usize, usize, f64)> = probabilities.iter().map(|&p| type7(total, p)).collect();

    let mut solved: BTreeMap<usize, f64> = BTreeMap::new();
    for &(lower, upper, _) in &plan {
        solved.insert(lower, 0.0);
        solved.insert(upper, 0.0);
    }
    for (&rank, value) in solved.iter_mut() {
        *value = select_kth(x, y, rank)?;
    }

    Ok(plan
        .iter()
        .map(|&(lower, upper, weight)| {
            let a = solved[&lower];
            let b = solved[&upper];
            if weight == 0.0 {
                a
            } else {
                (1.0 - weight) * a + weight * b
            }
        })
        .collect())
}

/// Type-7 quantiles of all ratios `x[i] / y[j]`, computed in log space.
///
/// Requires strictly positive samples (checked `x` first).
pub fn ratio_quantiles(
    x: &[f64],
    y: &[f64],
    probabilities: &[f64],
    assume_sorted: bool,
) -> Result<Vec<f64>> {
    check_validity(x, Subject::X)?;
    check_validity(y, Subject::Y)?;
    check_positivity(x, Subject::X)?;
    check_positivity(y, Subject::Y)?;

    let log_x: Vec<f64> = x.iter().map(|&v| math::ln(v)).collect();
    let log_y: Vec<f64> = y.iter().map(|&v| math::ln(v)).collect();
    let log_quantiles = shift_quantiles(&log_x, &log_y, probabilities, assume_sorted)?;
    Ok(log_quantiles.into_iter().map(math::exp).collect())
}
