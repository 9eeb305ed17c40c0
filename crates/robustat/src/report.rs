//! Serializable one-sample and two-sample reports.
//!
//! A report runs every estimator that applies and keeps going when one of
//! them does not: a tie-dominant sample still gets its center, a sample with
//! non-positive values still gets its shift. Estimates whose assumptions do
//! not hold are `None`. Only a failed quantile search aborts the report.

use robustat_core::{Bounds, Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bounds::{
    center_bounds, disparity_bounds, ratio_bounds, shift_bounds, spread_bounds,
};
use crate::config::Config;
use crate::estimators::{center, disparity, ratio, shift, spread};
use crate::sample::Sample;

/// Assumption violations become `None`; convergence failures propagate.
fn optional<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(Error::Assumption(e)) => {
            debug!(violation = %e, "estimate skipped");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Location and dispersion of one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sample size.
    pub n: usize,
    /// Misrate the bounds were computed for.
    pub misrate: f64,
    /// Hodges-Lehmann estimate.
    pub center: f64,
    /// `None` for a single value or a misrate below the achievable floor.
    pub center_bounds: Option<Bounds>,
    /// `None` for a tie-dominant sample.
    pub spread: Option<f64>,
    /// `None` when fewer than two values or a misrate below the floor for `n / 2` pairs.
    pub spread_bounds: Option<Bounds>,
}

impl Summary {
    /// Summarize `x` under `config`.
    pub fn of(x: &Sample, config: &Config) -> Result<Self> {
        let summary = Self {
            n: x.len(),
            misrate: config.misrate,
            center: center(x)?,
            center_bounds: optional(center_bounds(x, config))?,
            spread: optional(spread(x))?,
            spread_bounds: optional(spread_bounds(x, config))?,
        };
        debug!(n = summary.n, center = summary.center, "summary");
        Ok(summary)
    }
}

/// Differences between two samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Size of `x`.
    pub n: usize,
    /// Size of `y`.
    pub m: usize,
    /// Misrate the bounds were computed for.
    pub misrate: f64,
    /// Median difference `x - y`.
    pub shift: f64,
    /// `None` for a misrate below `2 / C(n+m, n)`.
    pub shift_bounds: Option<Bounds>,
    /// `None` unless both samples are strictly positive.
    pub ratio: Option<f64>,
    /// Same requirements as `ratio` plus the shift floor.
    pub ratio_bounds: Option<Bounds>,
    /// `None` when either sample is tie-dominant.
    pub disparity: Option<f64>,
    /// Also `None` when the misrate cannot cover both the shift and spread floors.
    pub disparity_bounds: Option<Bounds>,
}

impl Comparison {
    /// Compare `x` against `y` under `config`.
    pub fn of(x: &Sample, y: &Sample, config: &Config) -> Result<Self> {
        let comparison = Self {
            n: x.len(),
            m: y.len(),
            misrate: config.misrate,
            shift: shift(x, y)?,
            shift_bounds: optional(shift_bounds(x, y, config))?,
            ratio: optional(ratio(x, y))?,
            ratio_bounds: optional(ratio_bounds(x, y, config))?,
            disparity: optional(disparity(x, y))?,
            disparity_bounds: optional(disparity_bounds(x, y, config))?,
        };
        debug!(n = comparison.n, m = comparison.m, shift = comparison.shift, "comparison");
        Ok(comparison)
    }
}

/// Serialize a report to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for reports).
pub fn to_json<T: Serialize>(report: &T) -> std::result::Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for reports).
pub fn to_json_pretty<T: Serialize>(report: &T) -> std::result::Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
