//! Bounds over validated samples, driven by a [`Config`].

use robustat_core::bounds as slice;
use robustat_core::{Bounds, Result};
use tracing::debug;

use crate::config::Config;
use crate::sample::Sample;

/// Exact bounds on [`center`](crate::center).
pub fn center_bounds(x: &Sample, config: &Config) -> Result<Bounds> {
    let bounds = slice::center_bounds(x.values(), config.misrate)?;
    debug!(n = x.len(), misrate = config.misrate, %bounds, "center_bounds");
    Ok(bounds)
}

/// Randomized bounds on [`spread`](crate::spread).
pub fn spread_bounds(x: &Sample, config: &Config) -> Result<Bounds> {
    let mut rng = config.rng_for(x);
    let bounds = slice::spread_bounds(x.values(), config.misrate, &mut rng)?;
    debug!(n = x.len(), misrate = config.misrate, %bounds, "spread_bounds");
    Ok(bounds)
}

/// Bounds on [`shift`](crate::shift).
pub fn shift_bounds(x: &Sample, y: &Sample, config: &Config) -> Result<Bounds> {
    let bounds = slice::shift_bounds(x.values(), y.values(), config.misrate)?;
    debug!(n = x.len(), m = y.len(), misrate = config.misrate, %bounds, "shift_bounds");
    Ok(bounds)
}

/// Bounds on [`ratio`](crate::ratio).
pub fn ratio_bounds(x: &Sample, y: &Sample, config: &Config) -> Result<Bounds> {
    let bounds = slice::ratio_bounds(x.values(), y.values(), config.misrate)?;
    debug!(n = x.len(), m = y.len(), misrate = config.misrate, %bounds, "ratio_bounds");
    Ok(bounds)
}

/// Randomized bounds on [`avg_spread`](crate::avg_spread).
pub fn avg_spread_bounds(x: &Sample, y: &Sample, config: &Config) -> Result<Bounds> {
    let mut rng_x = config.rng_for(x);
    let mut rng_y = config.rng_for(y);
    let bounds =
        slice::avg_spread_bounds(x.values(), y.values(), config.misrate, &mut rng_x, &mut rng_y)?;
    debug!(n = x.len(), m = y.len(), misrate = config.misrate, %bounds, "avg_spread_bounds");
    Ok(bounds)
}

/// Randomized bounds on [`disparity`](crate::disparity).
pub fn disparity_bounds(x: &Sample, y: &Sample, config: &Config) -> Result<Bounds> {
    let mut rng_x = config.rng_for(x);
    let mut rng_y = config.rng_for(y);
    let bounds =
        slice::disparity_bounds(x.values(), y.values(), config.misrate, &mut rng_x, &mut rng_y)?;
    debug!(n = x.len(), m = y.len(), misrate = config.misrate, %bounds, "disparity_bounds");
    Ok(bounds)
}
