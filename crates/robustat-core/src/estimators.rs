//! Slice-level robust estimators.
//!
//! | Estimator | Value |
//! |---|---|
//! | [`center`] | median of pairwise averages `(x_i + x_j) / 2`, `i <= j` |
//! | [`spread`] | median of pairwise gaps `|x_i - x_j|`, `i < j` |
//! | [`shift`] | median of cross differences `x_i - y_j` |
//! | [`ratio`] | median of cross ratios `x_i / y_j` |
//! | [`avg_spread`] | size-weighted mean of both spreads |
//! | [`disparity`] | `shift / avg_spread` |
//!
//! Inputs are checked in priority order (validity, positivity, sparity; `x`
//! before `y`) before any work is done.

use crate::assumptions::{check_validity, AssumptionError, Subject};
use crate::error::Result;
use crate::selection::{
    median_pairwise_average, median_pairwise_gap, ratio_quantiles, shift_quantiles,
};

/// Spread of an already valid sample, zero when it has fewer than two values.
pub(crate) fn raw_spread(values: &[f64]) -> f64 {
    median_pairwise_gap(values).unwrap_or(0.0)
}

/// Spread of `values` for a named argument, rejecting tie-dominant samples.
fn positive_spread(values: &[f64], subject: Subject) -> core::result::Result<f64, AssumptionError> {
    let spread = raw_spread(values);
    if spread <= 0.0 {
        return Err(AssumptionError::sparity(subject));
    }
    Ok(spread)
}

/// Hodges-Lehmann location estimate.
pub fn center(x: &[f64]) -> Result<f64> {
    check_validity(x, Subject::X)?;
    Ok(median_pairwise_average(x)?)
}

/// Shamos dispersion estimate.
///
/// A single value or a sample where more than half the pairs tie has zero
/// spread, which is reported as a sparity violation.
pub fn spread(x: &[f64]) -> Result<f64> {
    check_validity(x, Subject::X)?;
    Ok(positive_spread(x, Subject::X)?)
}

/// Median of all differences `x_i - y_j`.
pub fn shift(x: &[f64], y: &[f64]) -> Result<f64> {
    check_validity(x, Subject::X)?;
    check_validity(y, Subject::Y)?;
    Ok(shift_quantiles(x, y, &[0.5], false)?[0])
}

/// Median of all ratios `x_i / y_j`. Both samples must be strictly positive.
pub fn ratio(x: &[f64], y: &[f64]) -> Result<f64> {
    check_validity(x, Subject::X)?;
    check_validity(y, Subject::Y)?;
    Ok(ratio_quantiles(x, y, &[0.5], false)?[0])
}

/// Pooled spread `(n·spread(x) + m·spread(y)) / (n + m)`.
pub fn avg_spread(x: &[f64], y: &[f64]) -> Result<f64> {
    check_validity(x, Subject::X)?;
    check_validity(y, Subject::Y)?;
    let spread_x = positive_spread(x, Subject::X)?;
    let spread_y = positive_spread(y, Subject::Y)?;
    Ok(pooled(x.len(), spread_x, y.len(), spread_y))
}

/// Shift in units of pooled spread: a robust effect size.
pub fn disparity(x: &[f64], y: &[f64]) -> Result<f64> {
    check_validity(x, Subject::X)?;
    check_validity(y, Subject::Y)?;
    let spread_x = positive_spread(x, Subject::X)?;
    let spread_y = positive_spread(y, Subject::Y)?;
    let shift = shift_quantiles(x, y, &[0.5], false)?[0];
    Ok(shift / pooled(x.len(), spread_x, y.len(), spread_y))
}

fn pooled(n: usize, a: f64, m: usize, b: f64) -> f64 {
    (n as f64 * a + m as f64 * b) / (n + m) as f64
}
