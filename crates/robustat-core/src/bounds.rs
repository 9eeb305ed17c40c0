//! Two-sided bounds for every estimator.
//!
//! Each procedure turns a misrate into a margin, then reads the bound off the
//! relevant pairwise multiset at the ranks the margin leaves on either side:
//!
//! | Bounds | Margin | Multiset |
//! |---|---|---|
//! | [`shift_bounds`] | [`pairwise_margin`] | cross differences |
//! | [`ratio_bounds`] | [`pairwise_margin`] | cross log-differences |
//! | [`center_bounds`] | [`signed_rank_margin`] | pairwise averages |
//! | [`spread_bounds`] | [`sign_margin`] | gaps of disjoint random pairs |
//!
//! [`avg_spread_bounds`] and [`disparity_bounds`] combine the above, splitting
//! the misrate between their parts.
//!
//! Misrate is checked after sample validity and before positivity or sparity.
//! A misrate below the smallest one the sample sizes can achieve is a domain
//! violation rather than a silently wider interval.

use alloc::vec::Vec;
use core::fmt;

use crate::assumptions::{
    check_misrate, check_positivity, check_sparity, check_validity, AssumptionError, Subject,
};
use crate::error::Result;
use crate::margin::{
    min_achievable_misrate_one_sample, min_achievable_misrate_two_sample, pairwise_margin,
    sign_margin, signed_rank_margin,
};
use crate::math;
use crate::rng::Rng;
use crate::selection::{pairwise_average_at, shift_quantiles, sorted_copy, Ranks};

/// Closed interval `[lower, upper]` expected to cover the true value.
///
/// Endpoints may be infinite (see [`disparity_bounds`]). They serialize as
/// the strings `"inf"` / `"-inf"` so the sign survives formats like JSON that
/// have no infinite numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    #[cfg_attr(feature = "std", serde(with = "endpoint"))]
    pub lower: f64,
    #[cfg_attr(feature = "std", serde(with = "endpoint"))]
    pub upper: f64,
}

// Finite endpoints as numbers, non-finite ones as strings.
#[cfg(feature = "std")]
mod endpoint {
    use alloc::string::String;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    const NAMES: &[&str] = &["inf", "-inf", "nan"];

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Name(String),
    }

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else if value.is_nan() {
            serializer.serialize_str("nan")
        } else if *value > 0.0 {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Name(name) => match name.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "nan" => Ok(f64::NAN),
                other => Err(D::Error::unknown_variant(other, NAMES)),
            },
        }
    }
}

impl Bounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Degenerate interval holding a single value.
    pub fn point(value: f64) -> Self {
        Self::new(value, value)
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.lower), f(self.upper))
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{};{}]", self.lower, self.upper)
    }
}

fn misrate_floor(misrate: f64, floor: f64) -> core::result::Result<(), AssumptionError> {
    if misrate < floor {
        return Err(AssumptionError::domain(Subject::Misrate));
    }
    Ok(())
}

/// Bounds on [`shift`](crate::estimators::shift).
pub fn shift_bounds(x: &[f64], y: &[f64], misrate: f64) -> Result<Bounds> {
    check_validity(x, Subject::X)?;
    check_validity(y, Subject::Y)?;
    check_misrate(misrate)?;
    misrate_floor(misrate, min_achievable_misrate_two_sample(x.len(), y.len())?)?;
    shift_bounds_unchecked(x, y, misrate)
}

fn shift_bounds_unchecked(x: &[f64], y: &[f64], misrate: f64) -> Result<Bounds> {
    let xs = sorted_copy(x);
    let ys = sorted_copy(y);
    let total = xs.len() * ys.len();
    if total == 1 {
        return Ok(Bounds::point(xs[0] - ys[0]));
    }

    let margin = pairwise_margin(xs.len(), ys.len(), misrate)?;
    let half = (margin / 2).min((total - 1) / 2);
    let last = (total - 1) as f64;
    let probabilities = [half as f64 / last, (total - 1 - half) as f64 / last];

    let q = shift_quantiles(&xs, &ys, &probabilities, true)?;
    Ok(Bounds::new(q[0].min(q[1]), q[0].max(q[1])))
}

/// Bounds on [`ratio`](crate::estimators::ratio), from shift bounds of the logs.
pub fn ratio_bounds(x: &[f64], y: &[f64], misrate: f64) -> Result<Bounds> {
    check_validity(x, Subject::X)?;
    check_validity(y, Subject::Y)?;
    check_misrate(misrate)?;
    misrate_floor(misrate, min_achievable_misrate_two_sample(x.len(), y.len())?)?;
    check_positivity(x, Subject::X)?;
    check_positivity(y, Subject::Y)?;

    let log_x: Vec<f64> = x.iter().map(|&v| math::ln(v)).collect();
    let log_y: Vec<f64> = y.iter().map(|&v| math::ln(v)).collect();
    Ok(shift_bounds_unchecked(&log_x, &log_y, misrate)?.map(math::exp))
}

/// Exact bounds on [`center`](crate::estimators::center).
///
/// The ranks come from the signed-rank distribution; the values are the
/// matching order statistics of the pairwise averages, selected exactly.
pub fn center_bounds(x: &[f64], misrate: f64) -> Result<Bounds> {
    check_validity(x, Subject::X)?;
    check_misrate(misrate)?;
    let n = x.len();
    if n < 2 {
        return Err(AssumptionError::domain(Subject::X).into());
    }
    misrate_floor(misrate, min_achievable_misrate_one_sample(n)?)?;

    let total = n * (n + 1) / 2;
    let margin = signed_rank_margin(n, misrate)?;
    let half = (margin / 2).min((total - 1) / 2);

    let mut rng = Rng::from_values(x);
    let sorted = sorted_copy(x);
    let lower = pairwise_average_at(&sorted, Ranks::single(half + 1), &mut rng);
    let upper = pairwise_average_at(&sorted, Ranks::single(total - half), &mut rng);
    Ok(Bounds::new(lower, upper))
}

/// Bounds on [`spread`](crate::estimators::spread) from `n / 2` disjoint pairs.
///
/// `rng` first randomizes the sign margin, then shuffles the sample into
/// pairs. Equal generators give equal bounds.
pub fn spread_bounds(x: &[f64], misrate: f64, rng: &mut Rng) -> Result<Bounds> {
    check_validity(x, Subject::X)?;
    check_misrate(misrate)?;
    let n = x.len();
    let pairs = n / 2;
    misrate_floor(misrate, min_achievable_misrate_one_sample(pairs)?)?;
    check_sparity(x, Subject::X)?;

    let margin = sign_margin(pairs, misrate, rng)?;
    let half = (margin / 2).min((pairs - 1) / 2);

    let indices: Vec<usize> = (0..n).collect();
    let order = rng.shuffle(&indices);
    let mut gaps: Vec<f64> = order
        .chunks_exact(2)
        .map(|pair| (x[pair[0]] - x[pair[1]]).abs())
        .collect();
    gaps.sort_by(|a, b| a.total_cmp(b));

    Ok(Bounds::new(gaps[half], gaps[pairs - half - 1]))
}

/// Bounds on [`avg_spread`](crate::estimators::avg_spread).
///
/// Each sample's spread bounds get half the misrate; the results are pooled
/// with the same size weights as the estimator.
pub fn avg_spread_bounds(
    x: &[f64],
    y: &[f64],
    misrate: f64,
    rng_x: &mut Rng,
    rng_y: &mut Rng,
) -> Result<Bounds> {
    check_validity(x, Subject::X)?;
    check_validity(y, Subject::Y)?;
    check_misrate(misrate)?;
    let (n, m) = (x.len(), y.len());
    if n < 2 {
        return Err(AssumptionError::domain(Subject::X).into());
    }
    if m < 2 {
        return Err(AssumptionError::domain(Subject::Y).into());
    }

    let alpha = misrate / 2.0;
    misrate_floor(alpha, min_achievable_misrate_one_sample(n / 2)?)?;
    misrate_floor(alpha, min_achievable_misrate_one_sample(m / 2)?)?;
    check_sparity(x, Subject::X)?;
    check_sparity(y, Subject::Y)?;

    let bx = spread_bounds(x, alpha, rng_x)?;
    let by = spread_bounds(y, alpha, rng_y)?;

    let wx = n as f64 / (n + m) as f64;
    let wy = m as f64 / (n + m) as f64;
    Ok(Bounds::new(
        wx * bx.lower + wy * by.lower,
        wx * bx.upper + wy * by.upper,
    ))
}

/// Bounds on [`disparity`](crate::estimators::disparity).
///
/// Both parts first receive the smallest misrate they can achieve; whatever
/// is left over is split evenly. The shift interval is then divided by the
/// avg-spread interval. When the avg-spread interval reaches down to zero the
/// quotient is unbounded on the side the shift points to.
pub fn disparity_bounds(
    x: &[f64],
    y: &[f64],
    misrate: f64,
    rng_x: &mut Rng,
    rng_y: &mut Rng,
) -> Result<Bounds> {
    check_validity(x, Subject::X)?;
    check_validity(y, Subject::Y)?;
    check_misrate(misrate)?;
    let (n, m) = (x.len(), y.len());
    if n < 2 {
        return Err(AssumptionError::domain(Subject::X).into());
    }
    if m < 2 {
        return Err(AssumptionError::domain(Subject::Y).into());
    }

    let min_shift = min_achievable_misrate_two_sample(n, m)?;
    let min_x = min_achievable_misrate_one_sample(n / 2)?;
    let min_y = min_achievable_misrate_one_sample(m / 2)?;
    let min_avg = 2.0 * min_x.max(min_y);
    misrate_floor(misrate, min_shift + min_avg)?;

    let extra = misrate - (min_shift + min_avg);
    let alpha_shift = min_shift + extra / 2.0;
    let alpha_avg = min_avg + extra / 2.0;

    check_sparity(x, Subject::X)?;
    check_sparity(y, Subject::Y)?;

    let shift = shift_bounds(x, y, alpha_shift)?;
    let avg = avg_spread_bounds(x, y, alpha_avg, rng_x, rng_y)?;
    Ok(divide(shift, avg))
}

/// Interval quotient `shift / avg` for a non-negative `avg`.
fn divide(shift: Bounds, avg: Bounds) -> Bounds {
    let (ls, us) = (shift.lower, shift.upper);
    let (la, ua) = (avg.lower, avg.upper);
    let inf = f64::INFINITY;

    if la > 0.0 {
        let r = [ls / la, ls / ua, us / la, us / ua];
        let lower = r.iter().copied().fold(inf, f64::min);
        let upper = r.iter().copied().fold(-inf, f64::max);
        return Bounds::new(lower, upper);
    }

    if ua <= 0.0 {
        // avg collapsed to zero: only the sign of the shift is known.
        return if ls == 0.0 && us == 0.0 {
            Bounds::point(0.0)
        } else if ls >= 0.0 {
            Bounds::new(0.0, inf)
        } else if us <= 0.0 {
            Bounds::new(-inf, 0.0)
        } else {
            Bounds::new(-inf, inf)
        };
    }

    if ls > 0.0 {
        Bounds::new(ls / ua, inf)
    } else if us < 0.0 {
        Bounds::new(-inf, us / ua)
    } else if ls == 0.0 && us == 0.0 {
        Bounds::point(0.0)
    } else if ls == 0.0 && us > 0.0 {
        Bounds::new(0.0, inf)
    } else if ls < 0.0 && us == 0.0 {
        Bounds::new(-inf, 0.0)
    } else {
        Bounds::new(-inf, inf)
    }
}
