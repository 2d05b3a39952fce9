//! Pure indicator transforms over plain numeric series.
//!
//! Every function here is a stateless transform from owned input slices to an
//! [`IndicatorSeries`](crate::core::IndicatorSeries); there is no caching, no
//! I/O and no shared mutable state, so calls may run concurrently as long as
//! each call owns its inputs. Failures are typed and surfaced to the caller;
//! no function partially fills output on error.

pub mod bollinger;
pub mod ma;
pub mod macd;
pub mod rsi;
pub mod stoch_rsi;
pub mod stochastic;
pub mod volume_ma;
pub mod williams_r;

pub use bollinger::bollinger;
pub use ma::{MaKind, ema, moving_average, rolling_stddev, sma, wma};
pub use macd::macd;
pub use rsi::rsi;
pub use stoch_rsi::stoch_rsi;
pub use stochastic::{FlatWindowPolicy, OscillatorTuning, kdj, stochastic};
pub use volume_ma::volume_ma;
pub use williams_r::williams_r;

pub const DEFAULT_MA_PERIOD: usize = 20;
pub const DEFAULT_RSI_PERIOD: usize = 14;
pub const DEFAULT_MACD_FAST: usize = 12;
pub const DEFAULT_MACD_SLOW: usize = 26;
pub const DEFAULT_MACD_SIGNAL: usize = 9;
pub const DEFAULT_BOLLINGER_DEV: f64 = 2.0;
pub const DEFAULT_WILLIAMS_R_PERIOD: usize = 14;
pub const DEFAULT_STOCH_FAST_K: usize = 9;
pub const DEFAULT_STOCH_SLOW_K: usize = 3;
pub const DEFAULT_STOCH_SLOW_D: usize = 3;
pub const DEFAULT_VOLUME_MA_SHORT: usize = 5;
pub const DEFAULT_VOLUME_MA_LONG: usize = 10;

use crate::error::{IndicatorError, IndicatorResult};

pub(crate) fn validate_period(period: usize, name: &str) -> IndicatorResult<()> {
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(format!(
            "{name} must be > 0"
        )));
    }
    Ok(())
}

pub(crate) fn require_samples(required: usize, actual: usize) -> IndicatorResult<()> {
    if actual < required {
        return Err(IndicatorError::InsufficientData { required, actual });
    }
    Ok(())
}

pub(crate) fn validate_hlc(high: &[f64], low: &[f64], close: &[f64]) -> IndicatorResult<()> {
    if high.len() != low.len() || low.len() != close.len() {
        return Err(IndicatorError::MismatchedInputs {
            high_len: high.len(),
            low_len: low.len(),
            close_len: close.len(),
        });
    }
    Ok(())
}
