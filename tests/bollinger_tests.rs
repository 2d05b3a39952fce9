use approx::assert_relative_eq;
use indicator_rs::core::IndicatorOutput;
use indicator_rs::error::IndicatorError;
use indicator_rs::indicators::{MaKind, bollinger};

fn sample_closes(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| 50.0 + (i as f64 * 0.9).cos() * 3.0)
        .collect()
}

#[test]
fn bands_keep_upper_middle_lower_ordering() {
    let closes = sample_closes(80);
    let result = bollinger(&closes, 20, 2.0, 2.0, MaKind::Sma).expect("bollinger");

    let IndicatorOutput::Triple(upper, middle, lower) = result.output() else {
        panic!("bollinger must produce three lines");
    };
    for ((up, mid), low) in upper.iter().zip(middle).zip(lower) {
        assert!(up >= mid, "upper {up} < middle {mid}");
        assert!(mid >= low, "middle {mid} < lower {low}");
    }
}

#[test]
fn asymmetric_multipliers_are_applied_per_band() {
    let closes = sample_closes(40);
    let wide = bollinger(&closes, 10, 3.0, 1.0, MaKind::Sma).expect("bollinger");
    let IndicatorOutput::Triple(upper, middle, lower) = wide.output() else {
        panic!("bollinger must produce three lines");
    };

    for ((up, mid), low) in upper.iter().zip(middle).zip(lower) {
        let up_spread = up - mid;
        let down_spread = mid - low;
        assert_relative_eq!(up_spread, 3.0 * down_spread, epsilon = 1e-9);
    }
}

#[test]
fn zero_deviation_collapses_bands_onto_middle() {
    let closes = sample_closes(30);
    let result = bollinger(&closes, 10, 0.0, 0.0, MaKind::Sma).expect("bollinger");
    let IndicatorOutput::Triple(upper, middle, lower) = result.output() else {
        panic!("bollinger must produce three lines");
    };
    assert_eq!(upper, middle);
    assert_eq!(middle, lower);
}

#[test]
fn flat_input_produces_flat_bands() {
    let result = bollinger(&[75.0; 25], 20, 2.0, 2.0, MaKind::Sma).expect("bollinger");
    let IndicatorOutput::Triple(upper, middle, lower) = result.output() else {
        panic!("bollinger must produce three lines");
    };
    for ((up, mid), low) in upper.iter().zip(middle).zip(lower) {
        assert_eq!(*up, 75.0);
        assert_eq!(*mid, 75.0);
        assert_eq!(*low, 75.0);
    }
}

#[test]
fn negative_or_non_finite_multipliers_are_rejected() {
    let closes = sample_closes(30);
    assert!(matches!(
        bollinger(&closes, 20, -1.0, 2.0, MaKind::Sma),
        Err(IndicatorError::InvalidParameter(_))
    ));
    assert!(matches!(
        bollinger(&closes, 20, 2.0, f64::NAN, MaKind::Sma),
        Err(IndicatorError::InvalidParameter(_))
    ));
}

#[test]
fn ema_middle_band_shifts_alignment_only_when_needed() {
    let closes = sample_closes(60);

    let sma_bands = bollinger(&closes, 20, 2.0, 2.0, MaKind::Sma).expect("bollinger");
    assert_eq!(sma_bands.begin_index(), 19);

    // DEMA consumes 2*(N-1) samples, so the stddev line is truncated to match.
    let dema_bands = bollinger(&closes, 20, 2.0, 2.0, MaKind::Dema).expect("bollinger");
    assert_eq!(dema_bands.begin_index(), 38);
    assert_eq!(dema_bands.line_len(), closes.len() - 38);
}

#[test]
fn insufficient_input_is_rejected() {
    assert!(matches!(
        bollinger(&sample_closes(19), 20, 2.0, 2.0, MaKind::Sma),
        Err(IndicatorError::InsufficientData { .. })
    ));
}
