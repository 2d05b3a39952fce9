use serde::{Deserialize, Serialize};

use crate::api::visible_window::clip_to_visible;
use crate::core::{CandleSeries, IndicatorSeries, VisibleRange};
use crate::error::{IndicatorError, IndicatorResult};

/// Inclusive value extent used to scale a plot's Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotBounds {
    pub min: f64,
    pub max: f64,
}

impl PlotBounds {
    #[must_use]
    pub fn merged(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Folds the extent of every line of every series, skipping non-finite
/// values. Returns `None` when no finite value exists.
#[must_use]
pub fn indicator_bounds(series: &[IndicatorSeries]) -> Option<PlotBounds> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for entry in series {
        for line in entry.lines() {
            for &value in line {
                if value.is_finite() {
                    min = min.min(value);
                    max = max.max(value);
                }
            }
        }
    }

    if min.is_finite() && max.is_finite() {
        Some(PlotBounds { min, max })
    } else {
        None
    }
}

/// Low/high envelope of the candles inside a visible range.
pub fn candle_envelope(
    series: &CandleSeries,
    range: VisibleRange,
) -> IndicatorResult<PlotBounds> {
    if range.end() > series.len() {
        return Err(IndicatorError::InvalidParameter(format!(
            "visible range end {} exceeds series length {}",
            range.end(),
            series.len()
        )));
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for candle in &series.candles()[range.start()..range.end()] {
        min = min.min(candle.low);
        max = max.max(candle.high);
    }

    Ok(PlotBounds { min, max })
}

/// Combined Y extent of the visible candle envelope and the visible portion
/// of each indicator, the value a caller scales a shared price pane with.
pub fn visible_bounds(
    series: &CandleSeries,
    range: VisibleRange,
    indicators: &[IndicatorSeries],
) -> IndicatorResult<PlotBounds> {
    let envelope = candle_envelope(series, range)?;
    let clipped: Vec<IndicatorSeries> = indicators
        .iter()
        .map(|entry| clip_to_visible(entry, range))
        .collect();

    Ok(match indicator_bounds(&clipped) {
        Some(bounds) => envelope.merged(bounds),
        None => envelope,
    })
}
