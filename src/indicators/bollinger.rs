use crate::core::IndicatorSeries;
use crate::error::{IndicatorError, IndicatorResult};
use crate::indicators::ma::{MaKind, moving_average_parts, stddev_raw};
use crate::indicators::validate_period;

/// Bollinger Bands: `middle = MA(period, kind)`, `upper/lower = middle ±
/// dev * stddev(period)` with population standard deviation.
///
/// `dev_up` and `dev_dn` must be finite and >= 0, which guarantees
/// `upper >= middle >= lower` pointwise. Lines are output as
/// (upper, middle, lower); `begin_index` is the later of the MA and stddev
/// alignment offsets.
pub fn bollinger(
    close: &[f64],
    period: usize,
    dev_up: f64,
    dev_dn: f64,
    kind: MaKind,
) -> IndicatorResult<IndicatorSeries> {
    validate_period(period, "bollinger period")?;
    if !dev_up.is_finite() || !dev_dn.is_finite() || dev_up < 0.0 || dev_dn < 0.0 {
        return Err(IndicatorError::InvalidParameter(
            "bollinger deviation multipliers must be finite and >= 0".to_owned(),
        ));
    }

    let (ma_begin, ma_values) = moving_average_parts(close, period, kind)?;
    let stddev_begin = period - 1;
    let stddev_values = stddev_raw(close, period);

    let begin_index = ma_begin.max(stddev_begin);
    let middle = &ma_values[begin_index - ma_begin..];
    let deviation = &stddev_values[begin_index - stddev_begin..];

    let mut upper = Vec::with_capacity(middle.len());
    let mut lower = Vec::with_capacity(middle.len());
    for (mid, dev) in middle.iter().zip(deviation.iter()) {
        upper.push(mid + dev_up * dev);
        lower.push(mid - dev_dn * dev);
    }

    IndicatorSeries::triple(begin_index, upper, middle.to_vec(), lower)
}
