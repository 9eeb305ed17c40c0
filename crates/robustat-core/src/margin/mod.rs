//! Margins: how many extreme order statistics a bound must skip.
//!
//! A margin is the total number of order statistics excluded from both tails
//! so that the resulting two-sided bound misses the true value with
//! probability at most `misrate`. Each statistic has its own distribution:
//!
//! - [`pairwise_margin`]: Mann-Whitney dominance statistic U (Shift, Ratio)
//! - [`signed_rank_margin`]: Wilcoxon signed-rank statistic W (Center)
//! - [`sign_margin`]: Binomial(n, 1/2) sign statistic, randomized (Spread)
//!
//! Small samples use the exact distribution; large ones invert an Edgeworth
//! expansion. Every margin has a minimum achievable misrate below which no
//! bound exists ([`min_misrate`]).

pub mod min_misrate;
pub mod pairwise;
pub mod sign;
pub mod signed_rank;

pub use min_misrate::{min_achievable_misrate_one_sample, min_achievable_misrate_two_sample};
pub use pairwise::pairwise_margin;
pub use sign::sign_margin;
pub use signed_rank::signed_rank_margin;

/// Integer binary search for the largest `c` in `[lo, hi]` with `cdf(c) < target`.
///
/// Returns `lo` when no such value exists past it. Shared by the Edgeworth
/// inversions, which must agree step for step with every other
/// implementation.
fn invert_cdf(lo: usize, hi: usize, target: f64, cdf: impl Fn(usize) -> f64) -> usize {
    let mut a = lo;
    let mut b = hi;
    while a + 1 < b {
        let c = (a + b) / 2;
        if cdf(c) < target {
            a = c;
        } else {
            b = c;
        }
    }
    if cdf(b) < target {
        b
    } else {
        a
    }
}
