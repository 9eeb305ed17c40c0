//! Literal reference values shared with the other implementations.

use robustat::{Bounds, Config, Rng, Sample};
use robustat_core::margin::{pairwise_margin, sign_margin, signed_rank_margin};

fn seq(range: std::ops::RangeInclusive<i32>) -> Sample {
    Sample::new(range.map(f64::from).collect()).unwrap()
}

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

// =============================================================================
// ESTIMATORS
// =============================================================================

#[test]
fn sequence_estimates() {
    let x = seq(1..=30);
    let y = seq(21..=50);
    assert_eq!(robustat::center(&x).unwrap(), 15.5);
    assert_eq!(robustat::spread(&x).unwrap(), 9.0);
    assert_eq!(robustat::shift(&x, &y).unwrap(), -20.0);
    assert_eq!(robustat::avg_spread(&x, &y).unwrap(), 9.0);
}

#[test]
fn irregular_sample_estimates() {
    let x = Sample::new(vec![2.1, 3.5, 1.2, 9.8, 4.4, 7.0, 5.5]).unwrap();
    let y = Sample::new(vec![1.0, 2.0, 6.5, 3.3]).unwrap();

    assert!(close(robustat::center(&x).unwrap(), 4.525));
    assert!(close(robustat::spread(&x).unwrap(), 3.2));
    assert!(close(robustat::spread(&y).unwrap(), 2.75));
    assert!(close(robustat::shift(&x, &y).unwrap(), 1.3));
    assert!(close(robustat::ratio(&x, &y).unwrap(), 1.5851878478024344));
    assert!(close(robustat::avg_spread(&x, &y).unwrap(), 3.036363636363637));
    assert!(close(robustat::disparity(&x, &y).unwrap(), 0.4281437125748503));
}

// =============================================================================
// MARGINS
// =============================================================================

#[test]
fn pairwise_margins() {
    assert_eq!(pairwise_margin(30, 30, 1e-6).unwrap(), 276);
    assert_eq!(pairwise_margin(30, 30, 1e-5).unwrap(), 328);
    assert_eq!(pairwise_margin(30, 30, 1e-4).unwrap(), 390);
    assert_eq!(pairwise_margin(30, 30, 1e-3).unwrap(), 464);
    assert_eq!(pairwise_margin(7, 4, 0.1).unwrap(), 10);
}

#[test]
fn signed_rank_margins() {
    assert_eq!(signed_rank_margin(7, 0.1).unwrap(), 8);
    assert_eq!(signed_rank_margin(30, 1e-3).unwrap(), 158);
    assert_eq!(signed_rank_margin(100, 1e-3).unwrap(), 3156);
}

#[test]
fn sign_margin_consumes_one_draw() {
    let mut rng = Rng::from_string("a");
    assert_eq!(sign_margin(10, 0.05, &mut rng).unwrap(), 2);
    assert_eq!(rng.uniform(), 0.6006605881456257);
}

// =============================================================================
// BOUNDS
// =============================================================================

#[test]
fn sequence_bounds() {
    let x = seq(1..=30);
    let y = seq(21..=50);

    let config = Config::default();
    assert_eq!(robustat::shift_bounds(&x, &y, &config).unwrap(), Bounds::new(-28.0, -12.0));
    assert_eq!(robustat::center_bounds(&x, &config).unwrap(), Bounds::new(9.0, 22.0));

    let strict = Config::new().misrate(1e-6);
    assert_eq!(robustat::shift_bounds(&x, &y, &strict).unwrap(), Bounds::new(-33.0, -7.0));

    let seeded = Config::new().seed("spread");
    assert_eq!(robustat::spread_bounds(&x, &seeded).unwrap(), Bounds::new(2.0, 19.0));
}

#[test]
fn irregular_sample_bounds() {
    let x = Sample::new(vec![2.1, 3.5, 1.2, 9.8, 4.4, 7.0, 5.5]).unwrap();
    let y = Sample::new(vec![1.0, 2.0, 6.5, 3.3]).unwrap();
    let config = Config::new().misrate(0.1);

    let shift = robustat::shift_bounds(&x, &y, &config).unwrap();
    assert!(close(shift.lower, -1.2));
    assert!(close(shift.upper, 4.5));

    let center = robustat::center_bounds(&x, &config).unwrap();
    assert!(close(center.lower, 2.8));
    assert!(close(center.upper, 7.0));
}
