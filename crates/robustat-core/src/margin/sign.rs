//! Randomized margin for sign-statistic bounds.
//!
//! The sign statistic is Binomial(n, 1/2), whose CDF only takes a few values.
//! To hit a requested misrate that falls between two achievable levels, the
//! cutoff is drawn between the two neighbouring ranks with the probability
//! that makes the long-run coverage exact.

use super::min_misrate::min_achievable_misrate_one_sample;
use crate::assumptions::{check_misrate, AssumptionError, Subject};
use crate::math;
use crate::rng::Rng;

/// Where the Binomial(n, 1/2) CDF crosses a target, in log space.
#[derive(Debug, Clone, Copy)]
struct Split {
    /// Largest `r` with `CDF(r) <= target`, or 0 when even `CDF(0)` exceeds it.
    r_low: usize,
    ln_cdf: f64,
    /// `ln PMF(r_low + 1)`; `ln PMF(0)` when `CDF(0)` already exceeds the target.
    ln_pmf_next: f64,
}

fn binomial_split(n: usize, target: f64) -> Split {
    let ln_target = math::ln(target);

    let mut ln_pmf = -(n as f64) * core::f64::consts::LN_2;
    let mut ln_cdf = ln_pmf;
    if ln_cdf > ln_target {
        return Split {
            r_low: 0,
            ln_cdf,
            ln_pmf_next: ln_pmf,
        };
    }

    let mut r_low = 0;
    for k in 1..=n {
        let ln_pmf_k = ln_pmf + math::ln((n - k + 1) as f64) - math::ln(k as f64);
        let ln_cdf_k = math::log_add_exp(ln_cdf, ln_pmf_k);
        if ln_cdf_k > ln_target {
            return Split {
                r_low,
                ln_cdf,
                ln_pmf_next: ln_pmf_k,
            };
        }
        r_low = k;
        ln_pmf = ln_pmf_k;
        ln_cdf = ln_cdf_k;
    }

    Split {
        r_low,
        ln_cdf,
        ln_pmf_next: f64::NEG_INFINITY,
    }
}

/// Total margin (both tails) for sign-statistic bounds on `n` pairs.
///
/// Consumes exactly one `rng.uniform()` draw unless the target is degenerate
/// (`misrate / 2` at or beyond 0 or 1).
///
/// # Errors
///
/// Domain errors for `n == 0` (x), a misrate that is NaN or outside `[0, 1]`,
/// or one below `2^(1-n)`.
pub fn sign_margin(n: usize, misrate: f64, rng: &mut Rng) -> Result<usize, AssumptionError> {
    if n == 0 {
        return Err(AssumptionError::domain(Subject::X));
    }
    check_misrate(misrate)?;
    if misrate < min_achievable_misrate_one_sample(n)? {
        return Err(AssumptionError::domain(Subject::Misrate));
    }

    let target = misrate / 2.0;
    if target <= 0.0 {
        return Ok(0);
    }
    if target >= 1.0 {
        return Ok(n * 2);
    }

    let split = binomial_split(n, target);

    // P(step up) = (target - CDF(r_low)) / PMF(r_low + 1)
    let ln_target = math::ln(target);
    let ln_excess = if ln_target > split.ln_cdf {
        math::log_sub_exp(ln_target, split.ln_cdf)
    } else {
        f64::NEG_INFINITY
    };
    let p_up = if split.ln_pmf_next.is_finite() && ln_excess.is_finite() {
        math::exp(ln_excess - split.ln_pmf_next).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let r = if rng.uniform() < p_up {
        split.r_low + 1
    } else {
        split.r_low
    };
    Ok(r * 2)
}
