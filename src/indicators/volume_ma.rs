use crate::core::IndicatorSeries;
use crate::error::IndicatorResult;
use crate::indicators::ma::sma_raw;
use crate::indicators::{require_samples, validate_period};

/// Two simple moving averages over traded volume, e.g. the classic 5/10 pair.
///
/// Lines are output as (short-period SMA, long-period SMA), truncated to the
/// longer lookback so both align at `begin_index = max(p1, p2) - 1`.
pub fn volume_ma(
    volume: &[f64],
    short_period: usize,
    long_period: usize,
) -> IndicatorResult<IndicatorSeries> {
    validate_period(short_period, "volume ma short period")?;
    validate_period(long_period, "volume ma long period")?;
    let longest = short_period.max(long_period);
    require_samples(longest, volume.len())?;

    let short_line = sma_raw(volume, short_period);
    let long_line = sma_raw(volume, long_period);

    let begin_index = longest - 1;
    let aligned_short = short_line[begin_index - (short_period - 1)..].to_vec();
    let aligned_long = long_line[begin_index - (long_period - 1)..].to_vec();

    IndicatorSeries::double(begin_index, aligned_short, aligned_long)
}
