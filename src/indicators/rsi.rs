use crate::core::IndicatorSeries;
use crate::error::IndicatorResult;
use crate::indicators::{require_samples, validate_period};

/// Relative Strength Index over `period` bars using Wilder smoothing.
///
/// Average gain/loss are seeded with the SMA of the first `period` deltas,
/// then smoothed as `avg = (avg * (period - 1) + current) / period`. Output
/// values lie in `[0, 100]`; `begin_index = period` (one extra bar is
/// consumed producing deltas).
///
/// Flat-market policy: when both averages are zero the value is 50.0
/// (neutral); when only the average loss is zero the value is 100.0.
pub fn rsi(close: &[f64], period: usize) -> IndicatorResult<IndicatorSeries> {
    let values = rsi_values(close, period)?;
    Ok(IndicatorSeries::single(period, values))
}

/// RSI values alone, reused by [`stoch_rsi`](crate::indicators::stoch_rsi).
pub(crate) fn rsi_values(close: &[f64], period: usize) -> IndicatorResult<Vec<f64>> {
    validate_period(period, "rsi period")?;
    require_samples(period + 1, close.len())?;

    let deltas: Vec<f64> = close.windows(2).map(|pair| pair[1] - pair[0]).collect();

    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;
    for &delta in &deltas[..period] {
        if delta > 0.0 {
            gain_sum += delta;
        } else {
            loss_sum += delta.abs();
        }
    }

    let period_f = period as f64;
    let mut avg_gain = gain_sum / period_f;
    let mut avg_loss = loss_sum / period_f;

    let mut out = Vec::with_capacity(deltas.len() - period + 1);
    out.push(rsi_point(avg_gain, avg_loss));

    for &delta in &deltas[period..] {
        let gain = delta.max(0.0);
        let loss = (-delta).max(0.0);
        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;
        out.push(rsi_point(avg_gain, avg_loss));
    }

    Ok(out)
}

fn rsi_point(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 && avg_gain == 0.0 {
        return 50.0;
    }
    if avg_loss == 0.0 {
        return 100.0;
    }
    100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
}
