//! Violation reporting: which assumption is named when several break at once.
//!
//! Priority is validity, then domain, then positivity, then sparity; within a
//! kind, `x` is reported before `y`.

use robustat::{AssumptionError, AssumptionId, Config, Error, Sample, Subject};
use robustat_core::{bounds, estimators};

fn sample(values: &[f64]) -> Sample {
    Sample::try_from(values).unwrap()
}

fn violation<T: std::fmt::Debug>(result: Result<T, Error>) -> (AssumptionId, Subject) {
    match result {
        Err(Error::Assumption(e)) => (e.id(), e.subject()),
        other => panic!("expected a violation, got {other:?}"),
    }
}

// =============================================================================
// DISPLAY
// =============================================================================

#[test]
fn violation_display() {
    let err = AssumptionError::sparity(Subject::Y);
    assert_eq!(err.to_string(), "sparity(y)");
    assert_eq!(err.violation().to_string(), "sparity(y)");
    assert_eq!(Error::from(err).to_string(), "assumption violated: sparity(y)");
}

// =============================================================================
// VALIDITY
// =============================================================================

#[test]
fn validity_is_checked_first() {
    assert_eq!(
        violation(estimators::ratio(&[f64::NAN], &[-1.0])),
        (AssumptionId::Validity, Subject::X)
    );
    assert_eq!(
        violation(bounds::shift_bounds(&[1.0], &[], -1.0)),
        (AssumptionId::Validity, Subject::Y)
    );
    assert_eq!(
        violation(bounds::center_bounds(&[f64::INFINITY], 2.0)),
        (AssumptionId::Validity, Subject::X)
    );
}

#[test]
fn sample_rejects_invalid_values() {
    assert_eq!(
        Sample::new(vec![1.0, f64::NAN]).unwrap_err(),
        AssumptionError::validity(Subject::X)
    );
    assert_eq!(
        Sample::with_subject(vec![], Subject::Y).unwrap_err(),
        AssumptionError::validity(Subject::Y)
    );
    assert_eq!(
        Sample::y(vec![2.0, f64::INFINITY]).unwrap_err(),
        AssumptionError::validity(Subject::Y)
    );
    assert!(Sample::y(vec![2.0, 3.0]).is_ok());
}

// =============================================================================
// DOMAIN
// =============================================================================

#[test]
fn misrate_outside_unit_interval() {
    let x = [1.0, 2.0, 3.0];
    for misrate in [f64::NAN, -0.01, 1.01] {
        assert_eq!(
            violation(bounds::center_bounds(&x, misrate)),
            (AssumptionId::Domain, Subject::Misrate)
        );
    }
}

#[test]
fn misrate_below_floor() {
    let x = sample(&[1.0, 2.0, 3.0, 4.0]);
    let y = sample(&[2.0, 3.0, 5.0]);
    // 2 / C(7, 3) = 2 / 35
    let config = Config::new().misrate(0.05);
    assert_eq!(
        violation(robustat::shift_bounds(&x, &y, &config)),
        (AssumptionId::Domain, Subject::Misrate)
    );
    assert!(robustat::shift_bounds(&x, &y, &Config::new().misrate(0.06)).is_ok());
}

#[test]
fn domain_before_positivity() {
    let x = sample(&[-1.0, 2.0]);
    let y = sample(&[1.0, 3.0]);
    assert_eq!(
        violation(robustat::ratio_bounds(&x, &y, &Config::default())),
        (AssumptionId::Domain, Subject::Misrate)
    );
}

#[test]
fn too_few_values_for_bounds() {
    let one = sample(&[1.0]);
    let two = sample(&[1.0, 2.0]);
    let config = Config::new().misrate(1.0);
    assert_eq!(
        violation(robustat::center_bounds(&one, &config)),
        (AssumptionId::Domain, Subject::X)
    );
    assert_eq!(
        violation(robustat::avg_spread_bounds(&two, &one, &config)),
        (AssumptionId::Domain, Subject::Y)
    );
}

// =============================================================================
// POSITIVITY
// =============================================================================

#[test]
fn positivity_x_before_y() {
    let neg = sample(&[-1.0, 2.0]);
    let zero = sample(&[0.0, 2.0]);
    assert_eq!(
        violation(robustat::ratio(&neg, &zero)),
        (AssumptionId::Positivity, Subject::X)
    );
    assert_eq!(
        violation(robustat::ratio(&sample(&[1.0]), &zero)),
        (AssumptionId::Positivity, Subject::Y)
    );
}

// =============================================================================
// SPARITY
// =============================================================================

#[test]
fn sparity_for_tie_dominant_samples() {
    let ties = sample(&[5.0, 5.0, 5.0, 5.0, 6.0]);
    let fine = sample(&[1.0, 2.0, 3.0]);
    assert_eq!(
        violation(robustat::spread(&ties)),
        (AssumptionId::Sparity, Subject::X)
    );
    assert_eq!(
        violation(robustat::disparity(&fine, &ties)),
        (AssumptionId::Sparity, Subject::Y)
    );
    assert_eq!(
        violation(robustat::avg_spread(&ties, &ties)),
        (AssumptionId::Sparity, Subject::X)
    );
}

#[test]
fn sparity_after_domain_in_bounds() {
    let ties = sample(&[3.0; 10]);
    assert_eq!(
        violation(robustat::spread_bounds(&ties, &Config::new().misrate(1e-6))),
        (AssumptionId::Domain, Subject::Misrate)
    );
    assert_eq!(
        violation(robustat::spread_bounds(&ties, &Config::new().misrate(0.5))),
        (AssumptionId::Sparity, Subject::X)
    );
}
