use crate::core::IndicatorSeries;
use crate::error::{IndicatorError, IndicatorResult};
use crate::indicators::ma::ema_raw;
use crate::indicators::{require_samples, validate_period};

/// Moving Average Convergence/Divergence.
///
/// `macd = EMA(fast) - EMA(slow)`, `signal = EMA(macd, signal_period)`,
/// `histogram = macd - signal`. The three lines are truncated to a common
/// alignment with `begin_index = slow + signal_period - 2`, so the histogram
/// identity holds pointwise across the whole output.
pub fn macd(
    close: &[f64],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> IndicatorResult<IndicatorSeries> {
    validate_period(fast, "macd fast period")?;
    validate_period(slow, "macd slow period")?;
    validate_period(signal_period, "macd signal period")?;
    if fast >= slow {
        return Err(IndicatorError::InvalidParameter(format!(
            "macd fast period {fast} must be < slow period {slow}"
        )));
    }
    require_samples(slow + signal_period - 1, close.len())?;

    let fast_ema = ema_raw(close, fast);
    let slow_ema = ema_raw(close, slow);

    // Both EMAs end at the final close; the slow one starts later.
    let offset = slow - fast;
    let macd_line: Vec<f64> = slow_ema
        .iter()
        .enumerate()
        .map(|(index, slow_value)| fast_ema[index + offset] - slow_value)
        .collect();

    let signal_line = ema_raw(&macd_line, signal_period);
    let aligned_macd = macd_line[signal_period - 1..].to_vec();
    let histogram: Vec<f64> = aligned_macd
        .iter()
        .zip(signal_line.iter())
        .map(|(macd_value, signal_value)| macd_value - signal_value)
        .collect();

    IndicatorSeries::triple(
        slow + signal_period - 2,
        aligned_macd,
        signal_line,
        histogram,
    )
}
