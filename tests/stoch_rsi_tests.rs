use indicator_rs::core::IndicatorOutput;
use indicator_rs::error::IndicatorError;
use indicator_rs::indicators::{FlatWindowPolicy, MaKind, stoch_rsi};

fn sample_closes(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| 30.0 + (i as f64 * 0.8).sin() * 4.0 + (i as f64 * 0.13).cos() * 2.0)
        .collect()
}

#[test]
fn produces_two_aligned_lines_in_percent_range() {
    let closes = sample_closes(100);
    let result = stoch_rsi(
        &closes,
        14,
        14,
        3,
        MaKind::Sma,
        FlatWindowPolicy::default(),
    )
    .expect("stochrsi");

    let IndicatorOutput::Double(fast_k, fast_d) = result.output() else {
        panic!("stochrsi must produce two lines");
    };
    assert_eq!(fast_k.len(), fast_d.len());
    for value in fast_k.iter().chain(fast_d) {
        assert!((0.0..=100.0).contains(value), "stochrsi {value} out of range");
    }
}

#[test]
fn begin_index_stacks_rsi_and_stochastic_lookbacks() {
    let closes = sample_closes(60);
    let result = stoch_rsi(&closes, 14, 9, 3, MaKind::Sma, FlatWindowPolicy::default())
        .expect("stochrsi");

    // RSI consumes 14 bars, %K another 8, %D smoothing another 2.
    assert_eq!(result.begin_index(), 14 + 8 + 2);
    assert_eq!(result.line_len(), closes.len() - (14 + 8 + 2));
}

#[test]
fn flat_closes_follow_flat_window_policy() {
    // A flat market pins RSI at 50, so every %K window is degenerate.
    let closes = vec![100.0; 40];
    let result = stoch_rsi(&closes, 14, 9, 3, MaKind::Sma, FlatWindowPolicy::Midpoint)
        .expect("stochrsi");
    for line in result.lines() {
        for value in line {
            assert_eq!(*value, 50.0);
        }
    }

    assert!(matches!(
        stoch_rsi(&closes, 14, 9, 3, MaKind::Sma, FlatWindowPolicy::Reject),
        Err(IndicatorError::DegenerateWindow { .. })
    ));
}

#[test]
fn insufficient_closes_are_rejected_upfront() {
    let closes = sample_closes(24);
    assert!(matches!(
        stoch_rsi(&closes, 14, 9, 3, MaKind::Sma, FlatWindowPolicy::default()),
        Err(IndicatorError::InsufficientData {
            required: 25,
            actual: 24
        })
    ));
}

#[test]
fn unsupported_smoothing_kind_is_flagged() {
    let closes = sample_closes(60);
    assert!(matches!(
        stoch_rsi(&closes, 14, 9, 3, MaKind::Kama, FlatWindowPolicy::default()),
        Err(IndicatorError::UnsupportedMaKind(MaKind::Kama))
    ));
}
