use serde::{Deserialize, Serialize};

use crate::core::IndicatorSeries;
use crate::error::{IndicatorError, IndicatorResult};
use crate::indicators::{require_samples, validate_period};

/// Moving-average family selector.
///
/// `Sma` through `Trima` are computed natively. The adaptive variants
/// (`Kama`, `Mesa`, `T3`) are declared for parameter compatibility but not
/// implemented; selecting one yields
/// [`UnsupportedMaKind`](crate::error::IndicatorError::UnsupportedMaKind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MaKind {
    #[default]
    Sma,
    Ema,
    Wma,
    Dema,
    Tema,
    Trima,
    Kama,
    Mesa,
    T3,
}

impl MaKind {
    /// Number of leading input samples consumed before the first output value.
    ///
    /// Returns `None` for kinds without a native implementation.
    #[must_use]
    pub fn lookback(self, period: usize) -> Option<usize> {
        match self {
            Self::Sma | Self::Ema | Self::Wma | Self::Trima => Some(period.saturating_sub(1)),
            Self::Dema => Some(2 * period.saturating_sub(1)),
            Self::Tema => Some(3 * period.saturating_sub(1)),
            Self::Kama | Self::Mesa | Self::T3 => None,
        }
    }
}

/// Simple moving average: mean over the trailing `period` window.
///
/// `begin_index = period - 1`, output length `len - period + 1`.
pub fn sma(values: &[f64], period: usize) -> IndicatorResult<IndicatorSeries> {
    validate_period(period, "sma period")?;
    require_samples(period, values.len())?;
    Ok(IndicatorSeries::single(period - 1, sma_raw(values, period)))
}

/// Exponential moving average with smoothing factor `2 / (period + 1)`,
/// seeded with the SMA of the first `period` values.
///
/// `begin_index = period - 1`.
pub fn ema(values: &[f64], period: usize) -> IndicatorResult<IndicatorSeries> {
    validate_period(period, "ema period")?;
    require_samples(period, values.len())?;
    Ok(IndicatorSeries::single(period - 1, ema_raw(values, period)))
}

/// Linearly weighted moving average with weights `1..=period`.
pub fn wma(values: &[f64], period: usize) -> IndicatorResult<IndicatorSeries> {
    validate_period(period, "wma period")?;
    require_samples(period, values.len())?;
    Ok(IndicatorSeries::single(period - 1, wma_raw(values, period)))
}

/// Population standard deviation over the trailing `period` window.
///
/// `begin_index = period - 1`.
pub fn rolling_stddev(values: &[f64], period: usize) -> IndicatorResult<IndicatorSeries> {
    validate_period(period, "stddev period")?;
    require_samples(period, values.len())?;
    Ok(IndicatorSeries::single(
        period - 1,
        stddev_raw(values, period),
    ))
}

/// Dispatches to the moving-average implementation selected by `kind`.
pub fn moving_average(
    values: &[f64],
    period: usize,
    kind: MaKind,
) -> IndicatorResult<IndicatorSeries> {
    let (begin_index, out) = moving_average_parts(values, period, kind)?;
    Ok(IndicatorSeries::single(begin_index, out))
}

/// Computes a moving average as `(begin_index, values)` for internal
/// composition by multi-stage indicators.
pub(crate) fn moving_average_parts(
    values: &[f64],
    period: usize,
    kind: MaKind,
) -> IndicatorResult<(usize, Vec<f64>)> {
    validate_period(period, "moving-average period")?;
    let lookback = kind
        .lookback(period)
        .ok_or(IndicatorError::UnsupportedMaKind(kind))?;
    require_samples(lookback + 1, values.len())?;

    let out = match kind {
        MaKind::Sma => sma_raw(values, period),
        MaKind::Ema => ema_raw(values, period),
        MaKind::Wma => wma_raw(values, period),
        MaKind::Dema => dema_raw(values, period),
        MaKind::Tema => tema_raw(values, period),
        MaKind::Trima => trima_raw(values, period),
        MaKind::Kama | MaKind::Mesa | MaKind::T3 => {
            return Err(IndicatorError::UnsupportedMaKind(kind));
        }
    };
    Ok((lookback, out))
}

// Raw helpers assume `period >= 1` and `values` long enough for at least one
// window; callers validate.

pub(crate) fn sma_raw(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len() - period + 1);
    let mut window_sum: f64 = values[..period].iter().sum();
    out.push(window_sum / period as f64);
    for index in period..values.len() {
        window_sum += values[index] - values[index - period];
        out.push(window_sum / period as f64);
    }
    out
}

pub(crate) fn ema_raw(values: &[f64], period: usize) -> Vec<f64> {
    let alpha = 2.0 / (period as f64 + 1.0);
    let seed = values[..period].iter().sum::<f64>() / period as f64;

    let mut out = Vec::with_capacity(values.len() - period + 1);
    out.push(seed);
    let mut previous = seed;
    for &value in &values[period..] {
        previous = alpha * value + (1.0 - alpha) * previous;
        out.push(previous);
    }
    out
}

fn wma_raw(values: &[f64], period: usize) -> Vec<f64> {
    let denominator = (period * (period + 1)) as f64 / 2.0;
    let mut out = Vec::with_capacity(values.len() - period + 1);
    for end in period - 1..values.len() {
        let window = &values[end + 1 - period..=end];
        let weighted: f64 = window
            .iter()
            .enumerate()
            .map(|(offset, value)| value * (offset + 1) as f64)
            .sum();
        out.push(weighted / denominator);
    }
    out
}

fn dema_raw(values: &[f64], period: usize) -> Vec<f64> {
    let first = ema_raw(values, period);
    let second = ema_raw(&first, period);
    let offset = period - 1;
    second
        .iter()
        .enumerate()
        .map(|(index, smoothed)| 2.0 * first[index + offset] - smoothed)
        .collect()
}

fn tema_raw(values: &[f64], period: usize) -> Vec<f64> {
    let first = ema_raw(values, period);
    let second = ema_raw(&first, period);
    let third = ema_raw(&second, period);
    let offset = period - 1;
    third
        .iter()
        .enumerate()
        .map(|(index, triple)| {
            3.0 * first[index + 2 * offset] - 3.0 * second[index + offset] + triple
        })
        .collect()
}

fn trima_raw(values: &[f64], period: usize) -> Vec<f64> {
    // Split the triangular window into two SMA passes whose combined lookback
    // equals `period - 1` for both parities.
    let (first_period, second_period) = if period % 2 == 0 {
        (period / 2, period / 2 + 1)
    } else {
        ((period + 1) / 2, (period + 1) / 2)
    };
    let first = sma_raw(values, first_period);
    sma_raw(&first, second_period)
}

pub(crate) fn stddev_raw(values: &[f64], period: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len() - period + 1);
    for end in period - 1..values.len() {
        let window = &values[end + 1 - period..=end];
        let mean = window.iter().sum::<f64>() / period as f64;
        let variance = window
            .iter()
            .map(|value| (value - mean) * (value - mean))
            .sum::<f64>()
            / period as f64;
        out.push(variance.sqrt());
    }
    out
}
