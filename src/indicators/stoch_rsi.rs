use crate::core::IndicatorSeries;
use crate::error::{IndicatorError, IndicatorResult};
use crate::indicators::ma::{MaKind, moving_average_parts};
use crate::indicators::rsi::rsi_values;
use crate::indicators::stochastic::{FlatWindowPolicy, fast_k_values};
use crate::indicators::{require_samples, validate_period};

/// Stochastic RSI: the stochastic %K formula applied to an RSI series
/// instead of raw price, then smoothed into a %D line.
///
/// Lines are output as (fastK, fastD) with
/// `begin_index = rsi_period + fast_k - 1 + MA lookback(fast_d)`.
/// Both lines lie in `[0, 100]`. A flat RSI stretch produces a zero-range
/// window, handled per `policy` with midpoint 50.0.
pub fn stoch_rsi(
    close: &[f64],
    rsi_period: usize,
    fast_k: usize,
    fast_d: usize,
    kind: MaKind,
    policy: FlatWindowPolicy,
) -> IndicatorResult<IndicatorSeries> {
    validate_period(rsi_period, "stochrsi rsi period")?;
    validate_period(fast_k, "stochrsi fastK period")?;
    validate_period(fast_d, "stochrsi fastD period")?;
    let fast_d_lookback = kind
        .lookback(fast_d)
        .ok_or(IndicatorError::UnsupportedMaKind(kind))?;
    require_samples(rsi_period + fast_k + fast_d_lookback, close.len())?;

    let rsi_line = rsi_values(close, rsi_period)?;
    // The RSI series plays all three stochastic input roles.
    let k_line = fast_k_values(&rsi_line, &rsi_line, &rsi_line, fast_k, policy)?;
    let (d_offset, d_line) = moving_average_parts(&k_line, fast_d, kind)?;

    let begin_index = rsi_period + fast_k - 1 + d_offset;
    let aligned_k = k_line[d_offset..].to_vec();
    IndicatorSeries::double(begin_index, aligned_k, d_line)
}
