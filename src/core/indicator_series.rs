use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{IndicatorError, IndicatorResult};

/// Aligned output lines produced by one indicator evaluation.
///
/// The variant encodes the indicator's shape at compile time: single-line
/// (moving averages, RSI, Williams %R), two-line (StochRSI, volume MA) or
/// three-line (MACD, Bollinger Bands, Stochastic, KDJ). All lines of one
/// value share the same length and the same alignment offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "lines", rename_all = "snake_case")]
pub enum IndicatorOutput {
    Single(Vec<f64>),
    Double(Vec<f64>, Vec<f64>),
    Triple(Vec<f64>, Vec<f64>, Vec<f64>),
}

impl IndicatorOutput {
    #[must_use]
    pub fn line_count(&self) -> usize {
        match self {
            Self::Single(..) => 1,
            Self::Double(..) => 2,
            Self::Triple(..) => 3,
        }
    }

    /// Shared length of every line in this output.
    #[must_use]
    pub fn line_len(&self) -> usize {
        match self {
            Self::Single(first) | Self::Double(first, _) | Self::Triple(first, _, _) => first.len(),
        }
    }

    /// Borrowed view over all lines, in declaration order.
    #[must_use]
    pub fn lines(&self) -> SmallVec<[&[f64]; 3]> {
        match self {
            Self::Single(first) => SmallVec::from_slice(&[first.as_slice()]),
            Self::Double(first, second) => {
                SmallVec::from_slice(&[first.as_slice(), second.as_slice()])
            }
            Self::Triple(first, second, third) => {
                SmallVec::from_slice(&[first.as_slice(), second.as_slice(), third.as_slice()])
            }
        }
    }

    /// Applies `transform` to every line, preserving the shape tag.
    pub(crate) fn map_lines<F>(&self, transform: F) -> Self
    where
        F: Fn(&[f64]) -> Vec<f64>,
    {
        match self {
            Self::Single(first) => Self::Single(transform(first)),
            Self::Double(first, second) => Self::Double(transform(first), transform(second)),
            Self::Triple(first, second, third) => {
                Self::Triple(transform(first), transform(second), transform(third))
            }
        }
    }

    fn lines_aligned(&self) -> bool {
        match self {
            Self::Single(..) => true,
            Self::Double(first, second) => first.len() == second.len(),
            Self::Triple(first, second, third) => {
                first.len() == second.len() && second.len() == third.len()
            }
        }
    }
}

/// One indicator evaluation: equal-length output lines plus the offset into
/// the original series at which the first value aligns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    begin_index: usize,
    output: IndicatorOutput,
}

impl IndicatorSeries {
    /// Builds a series value, validating that all lines share one length.
    pub fn new(begin_index: usize, output: IndicatorOutput) -> IndicatorResult<Self> {
        if !output.lines_aligned() {
            return Err(IndicatorError::InvalidData(
                "indicator output lines must share one length".to_owned(),
            ));
        }

        Ok(Self {
            begin_index,
            output,
        })
    }

    pub(crate) fn single(begin_index: usize, values: Vec<f64>) -> Self {
        Self {
            begin_index,
            output: IndicatorOutput::Single(values),
        }
    }

    pub(crate) fn double(
        begin_index: usize,
        first: Vec<f64>,
        second: Vec<f64>,
    ) -> IndicatorResult<Self> {
        Self::new(begin_index, IndicatorOutput::Double(first, second))
    }

    pub(crate) fn triple(
        begin_index: usize,
        first: Vec<f64>,
        second: Vec<f64>,
        third: Vec<f64>,
    ) -> IndicatorResult<Self> {
        Self::new(begin_index, IndicatorOutput::Triple(first, second, third))
    }

    /// Offset into the source series of the first valid output value.
    #[must_use]
    pub fn begin_index(&self) -> usize {
        self.begin_index
    }

    #[must_use]
    pub fn output(&self) -> &IndicatorOutput {
        &self.output
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.output.line_count()
    }

    #[must_use]
    pub fn line_len(&self) -> usize {
        self.output.line_len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.output.line_len() == 0
    }

    /// Borrowed view over all output lines.
    #[must_use]
    pub fn lines(&self) -> SmallVec<[&[f64]; 3]> {
        self.output.lines()
    }

    /// Rebuilds the value with transformed lines and a new alignment offset.
    pub(crate) fn map_with_begin<F>(&self, begin_index: usize, transform: F) -> Self
    where
        F: Fn(&[f64]) -> Vec<f64>,
    {
        Self {
            begin_index,
            output: self.output.map_lines(transform),
        }
    }
}
