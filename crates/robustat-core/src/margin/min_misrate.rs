//! Smallest misrate a bound can achieve for a given sample size.
//!
//! A one-sample rank procedure has 2^n equally likely sign patterns, so the
//! most extreme one is hit with probability 2^-n per tail. A two-sample
//! procedure has C(n+m, n) equally likely orderings.

use crate::assumptions::{AssumptionError, Subject};
use crate::math;

/// `2^(1-n)`: the floor for signed-rank and sign bounds.
pub fn min_achievable_misrate_one_sample(n: usize) -> Result<f64, AssumptionError> {
    if n == 0 {
        return Err(AssumptionError::domain(Subject::X));
    }
    Ok(math::pow(2.0, 1.0 - n as f64))
}

/// `2 / C(n+m, n)`: the floor for two-sample dominance bounds.
pub fn min_achievable_misrate_two_sample(n: usize, m: usize) -> Result<f64, AssumptionError> {
    if n == 0 {
        return Err(AssumptionError::domain(Subject::X));
    }
    if m == 0 {
        return Err(AssumptionError::domain(Subject::Y));
    }
    Ok(2.0 / binomial(n + m, n))
}

/// `C(n, k)` as a float: exact while it fits `u128`, log-gamma beyond.
pub(crate) fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    match binomial_exact(n, k) {
        Some(c) => c as f64,
        None => math::exp(
            math::ln_gamma(n as f64 + 1.0)
                - math::ln_gamma(k as f64 + 1.0)
                - math::ln_gamma((n - k) as f64 + 1.0),
        ),
    }
}

fn binomial_exact(n: usize, k: usize) -> Option<u128> {
    let mut c: u128 = 1;
    for i in 0..k {
        // c * (n - i) is divisible by i + 1 at every step.
        c = c.checked_mul((n - i) as u128)? / (i + 1) as u128;
    }
    Some(c)
}
