use serde::{Deserialize, Serialize};

use crate::error::{IndicatorError, IndicatorResult};

/// Half-open index interval `[start, end)` into a candle series.
///
/// A visible window must contain at least two bars to be meaningful for
/// rendering or scaling, so `end - start > 1` is enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRange {
    start: usize,
    end: usize,
}

impl VisibleRange {
    /// Builds a validated visible range for a series of `series_len` bars.
    pub fn new(start: usize, end: usize, series_len: usize) -> IndicatorResult<Self> {
        if start >= end || end > series_len {
            return Err(IndicatorError::InvalidParameter(format!(
                "visible range [{start}, {end}) must satisfy start < end <= {series_len}"
            )));
        }
        if end - start < 2 {
            return Err(IndicatorError::InvalidParameter(
                "visible range must span at least two bars".to_owned(),
            ));
        }

        Ok(Self { start, end })
    }

    /// Builds the range covering an entire series.
    pub fn full(series_len: usize) -> IndicatorResult<Self> {
        Self::new(0, series_len, series_len)
    }

    #[must_use]
    pub fn start(self) -> usize {
        self.start
    }

    #[must_use]
    pub fn end(self) -> usize {
        self.end
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.end - self.start
    }

    /// A valid range always spans at least two bars.
    #[must_use]
    pub fn is_empty(self) -> bool {
        false
    }
}
