//! Equivariance and invariance properties of the estimators.
//!
//! Integer-valued inputs and power-of-two scale factors keep every pairwise
//! value exact, so most properties hold bit for bit.

use proptest::prelude::*;
use robustat::{Config, Sample};

fn sample(values: &[i32]) -> Sample {
    Sample::new(values.iter().map(|&v| f64::from(v)).collect()).unwrap()
}

fn mapped(values: &[i32], f: impl Fn(f64) -> f64) -> Sample {
    Sample::new(values.iter().map(|&v| f(f64::from(v))).collect()).unwrap()
}

fn values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-500i32..500, 3..=40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn center_is_location_and_scale_equivariant(x in values(), c in -100i32..100) {
        let base = robustat::center(&sample(&x)).unwrap();
        let moved = robustat::center(&mapped(&x, |v| v + f64::from(c))).unwrap();
        let scaled = robustat::center(&mapped(&x, |v| v * -4.0)).unwrap();
        prop_assert_eq!(moved, base + f64::from(c));
        prop_assert_eq!(scaled, base * -4.0);
    }

    #[test]
    fn spread_ignores_location_and_follows_scale(x in values(), c in -100i32..100) {
        let s = sample(&x);
        prop_assume!(robustat::spread(&s).is_ok());
        let base = robustat::spread(&s).unwrap();
        let moved = robustat::spread(&mapped(&x, |v| v + f64::from(c))).unwrap();
        let scaled = robustat::spread(&mapped(&x, |v| v * -2.0)).unwrap();
        prop_assert_eq!(moved, base);
        prop_assert_eq!(scaled, base * 2.0);
    }

    #[test]
    fn center_and_spread_ignore_order(x in values()) {
        let mut reversed = x.clone();
        reversed.reverse();
        prop_assert_eq!(
            robustat::center(&sample(&x)).unwrap(),
            robustat::center(&sample(&reversed)).unwrap()
        );
        prop_assert_eq!(
            robustat::spread(&sample(&x)).ok(),
            robustat::spread(&sample(&reversed)).ok()
        );
    }

    #[test]
    fn shift_is_antisymmetric_and_location_invariant(
        x in values(),
        y in values(),
        c in -100i32..100,
    ) {
        let base = robustat::shift(&sample(&x), &sample(&y)).unwrap();
        let swapped = robustat::shift(&sample(&y), &sample(&x)).unwrap();
        let moved = robustat::shift(
            &mapped(&x, |v| v + f64::from(c)),
            &mapped(&y, |v| v + f64::from(c)),
        )
        .unwrap();
        prop_assert_eq!(swapped, -base);
        prop_assert_eq!(moved, base);
    }

    #[test]
    fn disparity_is_antisymmetric(x in values(), y in values()) {
        let (xs, ys) = (sample(&x), sample(&y));
        prop_assume!(robustat::disparity(&xs, &ys).is_ok());
        let forward = robustat::disparity(&xs, &ys).unwrap();
        let backward = robustat::disparity(&ys, &xs).unwrap();
        prop_assert!((forward + backward).abs() <= 1e-12 * forward.abs().max(1.0));
    }

    #[test]
    fn ratio_follows_scale(
        x in prop::collection::vec(1i32..1000, 2..=20),
        y in prop::collection::vec(1i32..1000, 2..=20),
    ) {
        let base = robustat::ratio(&sample(&x), &sample(&y)).unwrap();
        let scaled = robustat::ratio(&mapped(&x, |v| v * 3.0), &sample(&y)).unwrap();
        prop_assert!((scaled - 3.0 * base).abs() <= 1e-9 * scaled.abs());
    }

    #[test]
    fn disparity_is_scale_invariant(x in values(), y in values()) {
        let (xs, ys) = (sample(&x), sample(&y));
        prop_assume!(robustat::disparity(&xs, &ys).is_ok());
        let base = robustat::disparity(&xs, &ys).unwrap();
        let scaled = robustat::disparity(
            &mapped(&x, |v| v * 8.0),
            &mapped(&y, |v| v * 8.0),
        )
        .unwrap();
        prop_assert!((scaled - base).abs() <= 1e-12 * base.abs().max(1.0));
    }

    #[test]
    fn randomized_bounds_are_reproducible(x in values()) {
        let s = sample(&x);
        prop_assume!(robustat::spread(&s).is_ok());
        let config = Config::new().misrate(0.5);
        prop_assert_eq!(
            robustat::spread_bounds(&s, &config).ok(),
            robustat::spread_bounds(&s, &config).ok()
        );
    }
}
