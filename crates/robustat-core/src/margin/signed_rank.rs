//! Margin for one-sample bounds from the Wilcoxon signed-rank distribution.

use alloc::vec;

use super::invert_cdf;
use super::min_misrate::min_achievable_misrate_one_sample;
use crate::assumptions::{check_misrate, AssumptionError, Subject};
use crate::constants::SIGNED_RANK_EXACT_LIMIT;
use crate::math;

/// Total margin (both tails) for bounds on pairwise averages.
///
/// For `n <= 63` the rank-sum distribution is enumerated exactly; larger
/// samples use a one-term Edgeworth correction.
///
/// # Errors
///
/// Domain errors for `n == 0` (x), a misrate that is NaN or outside `[0, 1]`,
/// or one below `2^(1-n)`.
pub fn signed_rank_margin(n: usize, misrate: f64) -> Result<usize, AssumptionError> {
    if n == 0 {
        return Err(AssumptionError::domain(Subject::X));
    }
    check_misrate(misrate)?;
    if misrate < min_achievable_misrate_one_sample(n)? {
        return Err(AssumptionError::domain(Subject::Misrate));
    }

    let one_tail = if n <= SIGNED_RANK_EXACT_LIMIT {
        exact_one_tail(n, misrate / 2.0)
    } else {
        invert_cdf(0, n * (n + 1) / 2, misrate / 2.0, |w| edgeworth_cdf(n, w))
    };
    Ok(one_tail * 2)
}

/// Smallest `w` with `P(W <= w) >= p`, by knapsack over ranks 1..=n.
fn exact_one_tail(n: usize, p: f64) -> usize {
    let total = (1u64 << n) as f64;
    let max_w = n * (n + 1) / 2;

    // counts[w]: subsets of {1..i} summing to w
    let mut counts = vec![0u64; max_w + 1];
    counts[0] = 1;
    for i in 1..=n {
        let reach = (i * (i + 1) / 2).min(max_w);
        for w in (i..=reach).rev() {
            counts[w] += counts[w - i];
        }
    }

    let mut cumulative = 0u64;
    for (w, &c) in counts.iter().enumerate() {
        cumulative += c;
        if cumulative as f64 / total >= p {
            return w;
        }
    }
    max_w
}

/// Edgeworth approximation of `P(W <= w)` with continuity correction.
fn edgeworth_cdf(n: usize, w: usize) -> f64 {
    let n = n as f64;
    let mu = n * (n + 1.0) / 4.0;
    let sigma2 = n * (n + 1.0) * (2.0 * n + 1.0) / 24.0;
    let sigma = math::sqrt(sigma2);

    let z = (w as f64 - mu + 0.5) / sigma;
    let phi = math::normal_pdf(z);
    let big_phi = math::gauss_cdf(z);

    let kappa4 = -n * (n + 1.0) * (2.0 * n + 1.0) * (3.0 * n * n + 3.0 * n - 1.0) / 240.0;
    let e3 = kappa4 / (24.0 * sigma2 * sigma2);

    let z3 = z * z * z;
    let f3 = -phi * (z3 - 3.0 * z);

    (big_phi + e3 * f3).clamp(0.0, 1.0)
}
