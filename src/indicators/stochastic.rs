use serde::{Deserialize, Serialize};

use crate::core::IndicatorSeries;
use crate::error::{IndicatorError, IndicatorResult};
use crate::indicators::ma::{MaKind, moving_average_parts};
use crate::indicators::{require_samples, validate_hlc, validate_period};

/// Behavior when a trailing high/low window has zero range
/// (`highest high == lowest low`), where the raw %K formula divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FlatWindowPolicy {
    /// Emit the oscillator midpoint: 50.0 for the stochastic family,
    /// -50.0 for Williams %R.
    #[default]
    Midpoint,
    /// Surface [`DegenerateWindow`](crate::error::IndicatorError::DegenerateWindow)
    /// instead of inventing a value.
    Reject,
}

/// Tuning controls shared by the stochastic family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OscillatorTuning {
    pub flat_window_policy: FlatWindowPolicy,
    /// Moving-average kind used for the slow %K and slow %D smoothing stages.
    pub smoothing: MaKind,
}

/// Stochastic oscillator.
///
/// `fastK[i] = (close[i] - lowestLow) / (highestHigh - lowestLow) * 100`
/// over the trailing `fast_k` window, `slowK = MA(fastK, slow_k)`,
/// `slowD = MA(slowK, slow_d)`. Lines are output as (fastK, slowK, slowD),
/// truncated to the slowD alignment.
pub fn stochastic(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    fast_k: usize,
    slow_k: usize,
    slow_d: usize,
    tuning: OscillatorTuning,
) -> IndicatorResult<IndicatorSeries> {
    let (begin_index, fast_k_line, slow_k_line, slow_d_line) =
        stochastic_parts(high, low, close, fast_k, slow_k, slow_d, tuning)?;
    IndicatorSeries::triple(begin_index, fast_k_line, slow_k_line, slow_d_line)
}

/// KDJ oscillator: `k`/`d` are the stochastic slow %K / slow %D and
/// `j = 3k - 2d`. `j` may leave `[0, 100]` by construction.
pub fn kdj(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    fast_k: usize,
    slow_k: usize,
    slow_d: usize,
    tuning: OscillatorTuning,
) -> IndicatorResult<IndicatorSeries> {
    let (begin_index, _, k_line, d_line) =
        stochastic_parts(high, low, close, fast_k, slow_k, slow_d, tuning)?;
    let j_line: Vec<f64> = k_line
        .iter()
        .zip(d_line.iter())
        .map(|(k, d)| 3.0 * k - 2.0 * d)
        .collect();
    IndicatorSeries::triple(begin_index, k_line, d_line, j_line)
}

type StochasticParts = (usize, Vec<f64>, Vec<f64>, Vec<f64>);

fn stochastic_parts(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    fast_k: usize,
    slow_k: usize,
    slow_d: usize,
    tuning: OscillatorTuning,
) -> IndicatorResult<StochasticParts> {
    validate_period(fast_k, "stochastic fastK period")?;
    validate_period(slow_k, "stochastic slowK period")?;
    validate_period(slow_d, "stochastic slowD period")?;
    validate_hlc(high, low, close)?;

    let slow_k_lookback = tuning
        .smoothing
        .lookback(slow_k)
        .ok_or(IndicatorError::UnsupportedMaKind(tuning.smoothing))?;
    let slow_d_lookback = tuning
        .smoothing
        .lookback(slow_d)
        .ok_or(IndicatorError::UnsupportedMaKind(tuning.smoothing))?;
    require_samples(fast_k + slow_k_lookback + slow_d_lookback, close.len())?;

    let fast_k_line = fast_k_values(high, low, close, fast_k, tuning.flat_window_policy)?;
    let fast_k_begin = fast_k - 1;

    let (slow_k_offset, slow_k_line) =
        moving_average_parts(&fast_k_line, slow_k, tuning.smoothing)?;
    let (slow_d_offset, slow_d_line) =
        moving_average_parts(&slow_k_line, slow_d, tuning.smoothing)?;

    let begin_index = fast_k_begin + slow_k_offset + slow_d_offset;
    let aligned_fast_k = fast_k_line[slow_k_offset + slow_d_offset..].to_vec();
    let aligned_slow_k = slow_k_line[slow_d_offset..].to_vec();

    Ok((begin_index, aligned_fast_k, aligned_slow_k, slow_d_line))
}

/// Raw %K line, shared with Williams %R and StochRSI.
///
/// Window extremes are scanned per output index; zero-range windows follow
/// `policy` with midpoint 50.0.
pub(crate) fn fast_k_values(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
    policy: FlatWindowPolicy,
) -> IndicatorResult<Vec<f64>> {
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
                FlatWindowPolicy::Midpoint => 50.0,
                FlatWindowPolicy::Reject => {
                    return Err(IndicatorError::DegenerateWindow { index: end });
                }
            }
        } else {
            (close[end] - lowest) / range * 100.0
        };
        out.push(value);
    }
    Ok(out)
}
