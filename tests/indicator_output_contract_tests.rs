use indicator_rs::core::{IndicatorOutput, IndicatorSeries};
use serde_json::json;

#[test]
fn serialized_output_carries_shape_tag() {
    let single = IndicatorOutput::Single(vec![1.0, 2.0]);
    assert_eq!(
        serde_json::to_value(&single).expect("serialize"),
        json!({ "shape": "single", "lines": [1.0, 2.0] })
    );

    let triple = IndicatorOutput::Triple(vec![1.0], vec![2.0], vec![3.0]);
    assert_eq!(
        serde_json::to_value(&triple).expect("serialize"),
        json!({ "shape": "triple", "lines": [[1.0], [2.0], [3.0]] })
    );
}

#[test]
fn series_deserializes_back_to_equal_value() {
    let series = IndicatorSeries::new(
        7,
        IndicatorOutput::Double(vec![1.0, 2.0], vec![3.0, 4.0]),
    )
    .expect("series");

    let text = serde_json::to_string(&series).expect("serialize");
    let parsed: IndicatorSeries = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(parsed, series);
}

#[test]
fn construction_rejects_misaligned_lines() {
    let result = IndicatorSeries::new(
        0,
        IndicatorOutput::Double(vec![1.0, 2.0], vec![3.0]),
    );
    assert!(result.is_err());
}
