//! Tests for configuration validation and seeding.

use robustat::{Config, Sample, DEFAULT_MISRATE};

fn sample() -> Sample {
    Sample::new(vec![4.0, 9.0, 1.0, 7.0, 3.0, 8.0, 2.0, 6.0, 5.0, 10.0, 0.5, 12.0]).unwrap()
}

// =============================================================================
// MISRATE VALIDATION
// =============================================================================

#[test]
#[should_panic(expected = "misrate must be in (0, 1]")]
fn misrate_zero_panics() {
    let _ = Config::new().misrate(0.0);
}

#[test]
#[should_panic(expected = "misrate must be in (0, 1]")]
fn misrate_above_one_panics() {
    let _ = Config::new().misrate(1.5);
}

#[test]
fn misrate_one_valid() {
    let config = Config::new().misrate(1.0);
    assert_eq!(config.misrate, 1.0);
    assert!(config.validate().is_ok());
}

#[test]
fn default_misrate() {
    assert_eq!(Config::default().misrate, DEFAULT_MISRATE);
}

#[test]
fn validate_catches_direct_field_writes() {
    let mut config = Config::default();
    config.misrate = -1.0;
    assert_eq!(config.validate().unwrap_err(), "misrate must be in (0, 1]");
}

// =============================================================================
// SEEDING
// =============================================================================

#[test]
fn same_seed_same_bounds() {
    let x = sample();
    let config = Config::new().misrate(0.2).seed("alpha");
    let a = robustat::spread_bounds(&x, &config).unwrap();
    let b = robustat::spread_bounds(&x, &config.clone()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn unseeded_bounds_are_content_derived() {
    let x = sample();
    let config = Config::new().misrate(0.2);
    let a = robustat::spread_bounds(&x, &config).unwrap();
    let b = robustat::spread_bounds(&sample(), &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn seed_reaches_the_slice_level_procedure() {
    let x = sample();
    let config = Config::new().misrate(0.2).seed("alpha");
    let mut rng = robustat::Rng::from_string("alpha");
    assert_eq!(
        robustat::spread_bounds(&x, &config).unwrap(),
        robustat_core::bounds::spread_bounds(x.values(), 0.2, &mut rng).unwrap()
    );
}
