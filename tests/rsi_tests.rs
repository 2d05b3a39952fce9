use approx::assert_relative_eq;
use indicator_rs::error::IndicatorError;
use indicator_rs::indicators::rsi;

#[test]
fn flat_market_yields_neutral_fifty() {
    // Five identical closes, period 4: one valid value, no gains or losses.
    let result = rsi(&[100.0, 100.0, 100.0, 100.0, 100.0], 4).expect("rsi");
    assert_eq!(result.begin_index(), 4);
    assert_eq!(result.lines()[0], &[50.0]);
}

#[test]
fn strictly_rising_closes_pin_rsi_at_one_hundred() {
    let closes: Vec<f64> = (1..=30).map(|i| i as f64).collect();
    let result = rsi(&closes, 14).expect("rsi");
    for value in result.lines()[0] {
        assert_relative_eq!(*value, 100.0, max_relative = 1e-10);
    }
}

#[test]
fn strictly_falling_closes_pin_rsi_at_zero() {
    let closes: Vec<f64> = (1..=30).rev().map(|i| i as f64).collect();
    let result = rsi(&closes, 14).expect("rsi");
    for value in result.lines()[0] {
        assert!(value.abs() < 1e-10, "expected 0.0, got {value}");
    }
}

#[test]
fn output_stays_inside_unit_percent_range() {
    let closes = [
        44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08, 45.89, 46.03,
        44.18, 44.22, 44.57, 43.42, 42.66, 43.13,
    ];
    let result = rsi(&closes, 14).expect("rsi");
    assert_eq!(result.begin_index(), 14);
    assert_eq!(result.line_len(), closes.len() - 14);
    for value in result.lines()[0] {
        assert!((0.0..=100.0).contains(value), "rsi {value} out of range");
    }
}

#[test]
fn insufficient_closes_are_rejected() {
    // period deltas require period + 1 closes.
    let closes: Vec<f64> = (1..=14).map(|i| i as f64).collect();
    assert!(matches!(
        rsi(&closes, 14),
        Err(IndicatorError::InsufficientData {
            required: 15,
            actual: 14
        })
    ));
}

#[test]
fn zero_period_is_rejected() {
    assert!(matches!(
        rsi(&[1.0, 2.0, 3.0], 0),
        Err(IndicatorError::InvalidParameter(_))
    ));
}
