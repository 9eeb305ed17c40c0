//! Report construction and JSON serialization.

use robustat::{Bounds, Comparison, Config, Sample, Summary};

fn seq(range: std::ops::RangeInclusive<i32>) -> Sample {
    Sample::new(range.map(f64::from).collect()).unwrap()
}

#[test]
fn summary_json_fields() {
    let summary = Summary::of(&seq(1..=30), &Config::new().seed("spread")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&robustat::to_json(&summary).unwrap()).unwrap();

    assert_eq!(json["n"], 30);
    assert_eq!(json["misrate"], 1e-3);
    assert_eq!(json["center"], 15.5);
    assert_eq!(json["center_bounds"]["lower"], 9.0);
    assert_eq!(json["center_bounds"]["upper"], 22.0);
    assert_eq!(json["spread"], 9.0);
    assert_eq!(json["spread_bounds"]["lower"], 2.0);
    assert_eq!(json["spread_bounds"]["upper"], 19.0);
}

#[test]
fn summary_round_trip() {
    let summary = Summary::of(&seq(1..=12), &Config::new().misrate(0.05)).unwrap();
    let json = robustat::to_json_pretty(&summary).unwrap();
    let parsed: Summary = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, summary);
}

#[test]
fn missing_estimates_serialize_as_null() {
    let summary = Summary::of(&Sample::new(vec![2.0, 2.0, 2.0]).unwrap(), &Config::default()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&robustat::to_json(&summary).unwrap()).unwrap();
    assert_eq!(json["center"], 2.0);
    assert!(json["spread"].is_null());
    assert!(json["spread_bounds"].is_null());
}

#[test]
fn comparison_of_sequences() {
    let x = seq(1..=30);
    let y = seq(21..=50);
    let comparison = Comparison::of(&x, &y, &Config::default()).unwrap();

    assert_eq!(comparison.shift, -20.0);
    assert_eq!(comparison.shift_bounds, Some(Bounds::new(-28.0, -12.0)));
    assert!(comparison.ratio.is_some_and(|r| r < 1.0));
    assert!(comparison.ratio_bounds.is_some_and(|b| b.upper < 1.0));
    assert_eq!(comparison.disparity, Some(-20.0 / 9.0));
    // shift bounds [-29, -11] over avg-spread bounds [1, 23]
    assert_eq!(
        comparison.disparity_bounds,
        Some(Bounds::new(-29.0, -11.0 / 23.0))
    );

    let json: serde_json::Value =
        serde_json::from_str(&robustat::to_json(&comparison).unwrap()).unwrap();
    assert_eq!(json["m"], 30);
    assert_eq!(json["shift_bounds"]["lower"], -28.0);
}

#[test]
fn infinite_endpoints_keep_their_sign() {
    let bounds = Bounds::new(f64::NEG_INFINITY, 2.5);
    let json = robustat::to_json(&bounds).unwrap();
    assert_eq!(json, r#"{"lower":"-inf","upper":2.5}"#);
    assert_eq!(serde_json::from_str::<Bounds>(&json).unwrap(), bounds);

    let upper: Bounds = serde_json::from_str(r#"{"lower":-3,"upper":"inf"}"#).unwrap();
    assert_eq!(upper, Bounds::new(-3.0, f64::INFINITY));
    assert!(serde_json::from_str::<Bounds>(r#"{"lower":"huge","upper":1}"#).is_err());
}

#[test]
fn unbounded_disparity_round_trip() {
    let mut x = vec![1.0; 4];
    x.extend((2..=9).map(f64::from));
    let mut y = vec![1.0; 4];
    y.extend((2..=8).map(f64::from));
    y.push(10.0);
    let (x, y) = (Sample::new(x).unwrap(), Sample::new(y).unwrap());

    let config = Config::new().misrate(0.9).seed("e");
    let comparison = Comparison::of(&x, &y, &config).unwrap();
    assert_eq!(
        comparison.disparity_bounds,
        Some(Bounds::new(f64::NEG_INFINITY, f64::INFINITY))
    );

    let json = robustat::to_json(&comparison).unwrap();
    assert!(json.contains(r#""disparity_bounds":{"lower":"-inf","upper":"inf"}"#));
    let parsed: Comparison = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.disparity_bounds, comparison.disparity_bounds);
    assert_eq!(parsed.shift_bounds, comparison.shift_bounds);
    assert_eq!((parsed.n, parsed.m), (12, 12));
}
