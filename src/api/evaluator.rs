use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

#[cfg(feature = "parallel-eval")]
use rayon::prelude::*;

use crate::api::visible_window::clip_to_visible;
use crate::core::{CandleSeries, IndicatorSeries, VisibleRange};
use crate::error::{IndicatorError, IndicatorResult};
use crate::indicators::{
    DEFAULT_BOLLINGER_DEV, DEFAULT_MA_PERIOD, DEFAULT_MACD_FAST, DEFAULT_MACD_SIGNAL,
    DEFAULT_MACD_SLOW, DEFAULT_RSI_PERIOD, DEFAULT_STOCH_FAST_K, DEFAULT_STOCH_SLOW_D,
    DEFAULT_STOCH_SLOW_K, DEFAULT_VOLUME_MA_LONG, DEFAULT_VOLUME_MA_SHORT,
    DEFAULT_WILLIAMS_R_PERIOD, FlatWindowPolicy, MaKind, OscillatorTuning, bollinger, kdj, macd,
    moving_average, rsi, stoch_rsi, stochastic, volume_ma, williams_r,
};

/// One indicator request: which transform to run and with which parameters.
///
/// The enum is the wire between a presentation layer's per-indicator
/// configuration and the pure math underneath; display concerns (colors,
/// fonts, legends) stay on the caller's side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum IndicatorSpec {
    MovingAverage {
        period: usize,
        kind: MaKind,
    },
    Rsi {
        period: usize,
    },
    Macd {
        fast: usize,
        slow: usize,
        signal: usize,
    },
    Bollinger {
        period: usize,
        dev_up: f64,
        dev_dn: f64,
        kind: MaKind,
    },
    Stochastic {
        fast_k: usize,
        slow_k: usize,
        slow_d: usize,
        tuning: OscillatorTuning,
    },
    Kdj {
        fast_k: usize,
        slow_k: usize,
        slow_d: usize,
        tuning: OscillatorTuning,
    },
    WilliamsR {
        period: usize,
        policy: FlatWindowPolicy,
    },
    StochRsi {
        rsi_period: usize,
        fast_k: usize,
        fast_d: usize,
        kind: MaKind,
        policy: FlatWindowPolicy,
    },
    VolumeMa {
        short_period: usize,
        long_period: usize,
    },
}

/// Conventional parameterizations, used when a caller adds an indicator
/// without explicit configuration.
impl IndicatorSpec {
    #[must_use]
    pub fn default_moving_average(kind: MaKind) -> Self {
        Self::MovingAverage {
            period: DEFAULT_MA_PERIOD,
            kind,
        }
    }

    #[must_use]
    pub fn default_rsi() -> Self {
        Self::Rsi {
            period: DEFAULT_RSI_PERIOD,
        }
    }

    #[must_use]
    pub fn default_macd() -> Self {
        Self::Macd {
            fast: DEFAULT_MACD_FAST,
            slow: DEFAULT_MACD_SLOW,
            signal: DEFAULT_MACD_SIGNAL,
        }
    }

    #[must_use]
    pub fn default_bollinger() -> Self {
        Self::Bollinger {
            period: DEFAULT_MA_PERIOD,
            dev_up: DEFAULT_BOLLINGER_DEV,
            dev_dn: DEFAULT_BOLLINGER_DEV,
            kind: MaKind::Sma,
        }
    }

    #[must_use]
    pub fn default_stochastic() -> Self {
        Self::Stochastic {
            fast_k: DEFAULT_STOCH_FAST_K,
            slow_k: DEFAULT_STOCH_SLOW_K,
            slow_d: DEFAULT_STOCH_SLOW_D,
            tuning: OscillatorTuning::default(),
        }
    }

    #[must_use]
    pub fn default_kdj() -> Self {
        Self::Kdj {
            fast_k: DEFAULT_STOCH_FAST_K,
            slow_k: DEFAULT_STOCH_SLOW_K,
            slow_d: DEFAULT_STOCH_SLOW_D,
            tuning: OscillatorTuning::default(),
        }
    }

    #[must_use]
    pub fn default_williams_r() -> Self {
        Self::WilliamsR {
            period: DEFAULT_WILLIAMS_R_PERIOD,
            policy: FlatWindowPolicy::default(),
        }
    }

    #[must_use]
    pub fn default_stoch_rsi() -> Self {
        Self::StochRsi {
            rsi_period: DEFAULT_RSI_PERIOD,
            fast_k: DEFAULT_STOCH_FAST_K,
            fast_d: DEFAULT_STOCH_SLOW_D,
            kind: MaKind::Sma,
            policy: FlatWindowPolicy::default(),
        }
    }

    #[must_use]
    pub fn default_volume_ma() -> Self {
        Self::VolumeMa {
            short_period: DEFAULT_VOLUME_MA_SHORT,
            long_period: DEFAULT_VOLUME_MA_LONG,
        }
    }
}

/// Evaluates one indicator over a full candle series.
///
/// Results are recomputed from scratch on every call; callers wanting to
/// avoid redundant work cache by (series version, spec) on their side.
pub fn evaluate(series: &CandleSeries, spec: IndicatorSpec) -> IndicatorResult<IndicatorSeries> {
    trace!(?spec, series_len = series.len(), "evaluate indicator");
    match spec {
        IndicatorSpec::MovingAverage { period, kind } => {
            moving_average(&series.closes(), period, kind)
        }
        IndicatorSpec::Rsi { period } => rsi(&series.closes(), period),
        IndicatorSpec::Macd { fast, slow, signal } => macd(&series.closes(), fast, slow, signal),
        IndicatorSpec::Bollinger {
            period,
            dev_up,
            dev_dn,
            kind,
        } => bollinger(&series.closes(), period, dev_up, dev_dn, kind),
        IndicatorSpec::Stochastic {
            fast_k,
            slow_k,
            slow_d,
            tuning,
        } => stochastic(
            &series.highs(),
            &series.lows(),
            &series.closes(),
            fast_k,
            slow_k,
            slow_d,
            tuning,
        ),
        IndicatorSpec::Kdj {
            fast_k,
            slow_k,
            slow_d,
            tuning,
        } => kdj(
            &series.highs(),
            &series.lows(),
            &series.closes(),
            fast_k,
            slow_k,
            slow_d,
            tuning,
        ),
        IndicatorSpec::WilliamsR { period, policy } => williams_r(
            &series.highs(),
            &series.lows(),
            &series.closes(),
            period,
            policy,
        ),
        IndicatorSpec::StochRsi {
            rsi_period,
            fast_k,
            fast_d,
            kind,
            policy,
        } => stoch_rsi(&series.closes(), rsi_period, fast_k, fast_d, kind, policy),
        IndicatorSpec::VolumeMa {
            short_period,
            long_period,
        } => volume_ma(&series.volumes()?, short_period, long_period),
    }
}

/// Evaluates a batch of indicators and clips each to the visible range.
///
/// The output vector preserves the order of `specs`. Any indicator failure
/// aborts the batch; partially evaluated output is never returned.
pub fn evaluate_visible(
    series: &CandleSeries,
    range: VisibleRange,
    specs: &[IndicatorSpec],
) -> IndicatorResult<Vec<IndicatorSeries>> {
    if range.end() > series.len() {
        return Err(IndicatorError::InvalidParameter(format!(
            "visible range end {} exceeds series length {}",
            range.end(),
            series.len()
        )));
    }

    debug!(
        spec_count = specs.len(),
        visible_start = range.start(),
        visible_end = range.end(),
        "evaluate visible indicators"
    );

    // For many indicators over large series, optional parallel evaluation
    // keeps API behavior stable while reducing wall-clock time.
    #[cfg(feature = "parallel-eval")]
    {
        specs
            .par_iter()
            .map(|spec| Ok(clip_to_visible(&evaluate(series, *spec)?, range)))
            .collect()
    }

    #[cfg(not(feature = "parallel-eval"))]
    {
        let mut out = Vec::with_capacity(specs.len());
        for spec in specs {
            out.push(clip_to_visible(&evaluate(series, *spec)?, range));
        }
        Ok(out)
    }
}
