use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::{IndicatorError, IndicatorResult};

/// Canonical OHLCV candle consumed by indicator computations.
///
/// `low <= min(open, close)` and `high >= max(open, close)` are expected but
/// deliberately not enforced: malformed feeds are tolerated by this layer and
/// flow through the math unchanged. Only finiteness and volume sign are
/// validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: Option<f64>,
}

impl Candle {
    /// Builds a validated candle without volume from raw floating values.
    pub fn new(time: f64, open: f64, high: f64, low: f64, close: f64) -> IndicatorResult<Self> {
        if !time.is_finite()
            || !open.is_finite()
            || !high.is_finite()
            || !low.is_finite()
            || !close.is_finite()
        {
            return Err(IndicatorError::InvalidData(
                "ohlc values must be finite".to_owned(),
            ));
        }

        Ok(Self {
            time,
            open,
            high,
            low,
            close,
            volume: None,
        })
    }

    /// Builds a validated candle carrying a traded-volume figure.
    pub fn with_volume(
        time: f64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> IndicatorResult<Self> {
        let mut candle = Self::new(time, open, high, low, close)?;
        if !volume.is_finite() || volume < 0.0 {
            return Err(IndicatorError::InvalidData(
                "volume must be finite and >= 0".to_owned(),
            ));
        }
        candle.volume = Some(volume);
        Ok(candle)
    }

    /// Converts strongly-typed temporal/decimal input into a validated candle.
    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> IndicatorResult<Self> {
        Self::new(
            datetime_to_unix_seconds(time),
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    /// Returns `true` when close price is greater than or equal to open price.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }
}

/// Chronologically ordered candle collection.
///
/// Insertion order is chronological order: `push` rejects candles whose time
/// does not strictly advance, so index positions stay stable identifiers for
/// downstream indicator alignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    candles: Vec<Candle>,
}

impl CandleSeries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a series from pre-collected candles, validating time ordering.
    pub fn from_candles(candles: Vec<Candle>) -> IndicatorResult<Self> {
        for pair in candles.windows(2) {
            if pair[1].time <= pair[0].time {
                return Err(IndicatorError::InvalidData(
                    "candle times must be strictly increasing".to_owned(),
                ));
            }
        }
        debug!(count = candles.len(), "set candle series");
        Ok(Self { candles })
    }

    /// Appends a streaming candle; its time must strictly advance the series.
    pub fn push(&mut self, candle: Candle) -> IndicatorResult<()> {
        if let Some(last) = self.candles.last() {
            if candle.time <= last.time {
                return Err(IndicatorError::InvalidData(
                    "candle time must be greater than latest series time".to_owned(),
                ));
            }
        }
        self.candles.push(candle);
        trace!(count = self.candles.len(), "append candle");
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    #[must_use]
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Candle> {
        self.candles.get(index).copied()
    }

    #[must_use]
    pub fn opens(&self) -> Vec<f64> {
        self.candles.iter().map(|candle| candle.open).collect()
    }

    #[must_use]
    pub fn highs(&self) -> Vec<f64> {
        self.candles.iter().map(|candle| candle.high).collect()
    }

    #[must_use]
    pub fn lows(&self) -> Vec<f64> {
        self.candles.iter().map(|candle| candle.low).collect()
    }

    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|candle| candle.close).collect()
    }

    /// Extracts the volume column; fails when any candle lacks volume.
    pub fn volumes(&self) -> IndicatorResult<Vec<f64>> {
        self.candles
            .iter()
            .map(|candle| {
                candle.volume.ok_or_else(|| {
                    IndicatorError::InvalidData(
                        "series contains candles without volume".to_owned(),
                    )
                })
            })
            .collect()
    }
}
