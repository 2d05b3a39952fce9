use crate::core::IndicatorSeries;
use crate::error::{IndicatorError, IndicatorResult};
use crate::indicators::stochastic::FlatWindowPolicy;
use crate::indicators::{require_samples, validate_hlc, validate_period};

/// Williams %R over the trailing `period` window.
///
/// `%R = (highestHigh - close) / (highestHigh - lowestLow) * -100`, in
/// `[-100, 0]`; `begin_index = period - 1`. Zero-range windows follow
/// `policy` with midpoint -50.0.
pub fn williams_r(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
    policy: FlatWindowPolicy,
) -> IndicatorResult<IndicatorSeries> {
    validate_period(period, "williams %r period")?;
    validate_hlc(high, low, close)?;
    require_samples(period, close.len())?;

    let mut out = Vec::with_capacity(close.len() - period + 1);
    for end in period - 1..close.len() {
        let window_start = end + 1 - period;
        let highest = high[window_start..=end]
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let lowest = low[window_start..=end]
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);

        let range = highest - lowest;
        let value = if range == 0.0 {
            match policy {
                FlatWindowPolicy::Midpoint => -50.0,
                FlatWindowPolicy::Reject => {
                    return Err(IndicatorError::DegenerateWindow { index: end });
                }
            }
        } else {
            (highest - close[end]) / range * -100.0
        };
        out.push(value);
    }

    Ok(IndicatorSeries::single(period - 1, out))
}
