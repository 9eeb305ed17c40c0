//! Point estimators over validated samples.

use robustat_core::selection;
use robustat_core::{estimators as slice, math, Result, Subject};
use tracing::debug;

use crate::sample::Sample;

/// Hodges-Lehmann location: median of all pairwise averages.
pub fn center(x: &Sample) -> Result<f64> {
    let value = slice::center(x.values())?;
    debug!(n = x.len(), value, "center");
    Ok(value)
}

/// Shamos dispersion: median of all pairwise absolute differences.
///
/// Tie-dominant samples fail with `sparity(x)`.
pub fn spread(x: &Sample) -> Result<f64> {
    let value = slice::spread(x.values())?;
    debug!(n = x.len(), value, "spread");
    Ok(value)
}

/// Median of all differences `x_i - y_j`.
pub fn shift(x: &Sample, y: &Sample) -> Result<f64> {
    let value = shift_quantiles(x, y, &[0.5])?[0];
    debug!(n = x.len(), m = y.len(), value, "shift");
    Ok(value)
}

/// Median of all ratios `x_i / y_j`; both samples must be positive.
pub fn ratio(x: &Sample, y: &Sample) -> Result<f64> {
    let value = ratio_quantiles(x, y, &[0.5])?[0];
    debug!(n = x.len(), m = y.len(), value, "ratio");
    Ok(value)
}

/// Size-weighted mean of both spreads.
pub fn avg_spread(x: &Sample, y: &Sample) -> Result<f64> {
    let value = slice::avg_spread(x.values(), y.values())?;
    debug!(n = x.len(), m = y.len(), value, "avg_spread");
    Ok(value)
}

/// Shift divided by avg spread.
pub fn disparity(x: &Sample, y: &Sample) -> Result<f64> {
    let value = slice::disparity(x.values(), y.values())?;
    debug!(n = x.len(), m = y.len(), value, "disparity");
    Ok(value)
}

/// Type-7 quantiles of the differences `x_i - y_j`, one per probability.
///
/// Uses the samples' cached sorted views.
pub fn shift_quantiles(x: &Sample, y: &Sample, probabilities: &[f64]) -> Result<Vec<f64>> {
    selection::shift_quantiles(x.sorted(), y.sorted(), probabilities, true)
}

/// Type-7 quantiles of the ratios `x_i / y_j`, one per probability.
pub fn ratio_quantiles(x: &Sample, y: &Sample, probabilities: &[f64]) -> Result<Vec<f64>> {
    let log_x = x.ln(Subject::X)?;
    let log_y = y.ln(Subject::Y)?;
    let logs = shift_quantiles(&log_x, &log_y, probabilities)?;
    Ok(logs.into_iter().map(math::exp).collect())
}
