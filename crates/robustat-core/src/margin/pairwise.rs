//! Margin for two-sample bounds from the Mann-Whitney U distribution.
//!
//! For `n + m <= 400` the exact distribution of U is built with Löffler's
//! recurrence (1982),
//!
//! ```text
//! u · f(u) = Σ_{i<u} f(i) · σ(u - i)
//! σ(k)     = Σ_{d | k, d <= n} d  -  Σ_{d | k, m < d <= m + n} d
//! ```
//!
//! where `f(u)` counts the orderings with U = u out of `C(n+m, n)`. Counts are
//! kept as exact big integers; only the running CDF is rounded, once per step,
//! when it is compared with the target. Grouping the terms by divisor turns the
//! convolution into running residue sums, so step `u` costs O(n) instead of
//! O(u). Larger samples invert an Edgeworth expansion of U through the sixth
//! moment.

use alloc::vec;
use alloc::vec::Vec;

use num_bigint::BigInt;
use num_traits::{One, ToPrimitive, Zero};

use super::invert_cdf;
use super::min_misrate::min_achievable_misrate_two_sample;
use crate::assumptions::{check_misrate, AssumptionError, Subject};
use crate::constants::PAIRWISE_EXACT_LIMIT;
use crate::math;

/// Total margin (both tails) for bounds on cross-sample differences.
///
/// Exact for `n + m <= 400`, Edgeworth-approximated above.
///
/// # Errors
///
/// Domain errors for `n == 0` (x), `m == 0` (y), a misrate that is NaN or
/// outside `[0, 1]`, or one below `2 / C(n+m, n)`.
pub fn pairwise_margin(n: usize, m: usize, misrate: f64) -> Result<usize, AssumptionError> {
    if n == 0 {
        return Err(AssumptionError::domain(Subject::X));
    }
    if m == 0 {
        return Err(AssumptionError::domain(Subject::Y));
    }
    check_misrate(misrate)?;
    if misrate < min_achievable_misrate_two_sample(n, m)? {
        return Err(AssumptionError::domain(Subject::Misrate));
    }

    let one_tail = if n + m <= PAIRWISE_EXACT_LIMIT {
        exact_one_tail(n, m, misrate / 2.0)
    } else {
        invert_cdf(0, n * m, misrate / 2.0, |u| edgeworth_cdf(n, m, u))
    };
    Ok(one_tail * 2)
}

fn binomial_big(n: usize, k: usize) -> BigInt {
    let mut c = BigInt::one();
    for i in 0..k {
        c = c * (n - i) / (i + 1);
    }
    c
}

/// Smallest `u` whose exact CDF reaches `p`.
fn exact_one_tail(n: usize, m: usize, p: f64) -> usize {
    // U has the same distribution for (n, m) and (m, n); the residue tables
    // are smaller with the shorter sample as n.
    let (n, m) = (n.min(m), n.max(m));
    let total = binomial_big(n + m, n);
    let total_f = total.to_f64().unwrap_or(f64::INFINITY);
    let reached = |cumulative: &BigInt| cumulative.to_f64().unwrap_or(0.0) / total_f >= p;

    let mut cumulative = BigInt::one();
    if reached(&cumulative) {
        return 0;
    }

    // With n <= m the two divisor ranges are disjoint.
    let divisors: Vec<(usize, i64)> = (1..=n)
        .map(|d| (d, d as i64))
        .chain((m + 1..=m + n).map(|d| (d, -(d as i64))))
        .collect();

    // residues[k][r] = Σ f(i) over i < u with i ≡ r (mod d_k); f(0) = 1.
    let mut residues: Vec<Vec<BigInt>> = divisors
        .iter()
        .map(|&(d, _)| {
            let mut sums = vec![BigInt::zero(); d];
            sums[0] = BigInt::one();
            sums
        })
        .collect();

    let max_u = n * m;
    for u in 1..=max_u {
        let mut weighted = BigInt::zero();
        for (sums, &(d, weight)) in residues.iter().zip(&divisors) {
            let s = &sums[u % d];
            if !s.is_zero() {
                weighted += s * weight;
            }
        }
        let f = weighted / u;

        cumulative += &f;
        if reached(&cumulative) {
            return u;
        }

        for (sums, &(d, _)) in residues.iter_mut().zip(&divisors) {
            sums[u % d] += &f;
        }
    }

    max_u
}

/// Edgeworth approximation of `P(U <= u)` with continuity correction.
fn edgeworth_cdf(n: usize, m: usize, u: usize) -> f64 {
    let n = n as f64;
    let m = m as f64;
    let u = u as f64;

    let mu = (n * m) / 2.0;
    let su = math::sqrt((n * m * (n + m + 1.0)) / 12.0);
    let z = (u - mu - 0.5) / su;

    let phi = math::normal_pdf(z);
    let big_phi = math::gauss_cdf(z);

    let n2 = n * n;
    let n3 = n2 * n;
    let n4 = n2 * n2;
    let m2 = m * m;
    let m3 = m2 * m;
    let m4 = m2 * m2;

    // Central moments of U.
    let mu2 = (n * m * (n + m + 1.0)) / 12.0;
    let mu4 = (n
        * m
        * (n + m + 1.0)
        * (5.0 * m * n * (m + n) - 2.0 * (m2 + n2) + 3.0 * m * n - 2.0 * (n + m)))
        / 240.0;
    let mu6 = (n
        * m
        * (n + m + 1.0)
        * (35.0 * m2 * n2 * (m2 + n2) + 70.0 * m3 * n3
            - 42.0 * m * n * (m3 + n3)
            - 14.0 * m2 * n2 * (n + m)
            + 16.0 * (n4 + m4)
            - 52.0 * n * m * (n2 + m2)
            - 43.0 * n2 * m2
            + 32.0 * (m3 + n3)
            + 14.0 * m * n * (n + m)
            + 8.0 * (n2 + m2)
            + 16.0 * n * m
            - 8.0 * (n + m)))
        / 4032.0;

    let mu2_2 = mu2 * mu2;
    let mu2_3 = mu2_2 * mu2;
    let kurtosis = mu4 / mu2_2;

    // 4! = 24, 6! = 720, 8! = 40320
    let e3 = (kurtosis - 3.0) / 24.0;
    let e5 = (mu6 / mu2_3 - 15.0 * kurtosis + 30.0) / 720.0;
    let e7 = 35.0 * (kurtosis - 3.0) * (kurtosis - 3.0) / 40320.0;

    // f_k = -phi · He_k(z)
    let z2 = z * z;
    let z3 = z2 * z;
    let z5 = z3 * z2;
    let z7 = z5 * z2;
    let f3 = -phi * (z3 - 3.0 * z);
    let f5 = -phi * (z5 - 10.0 * z3 + 15.0 * z);
    let f7 = -phi * (z7 - 21.0 * z5 + 105.0 * z3 - 105.0 * z);

    (big_phi + e3 * f3 + e5 * f5 + e7 * f7).clamp(0.0, 1.0)
}
