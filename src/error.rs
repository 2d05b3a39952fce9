use thiserror::Error;

use crate::indicators::MaKind;

pub type IndicatorResult<T> = Result<T, IndicatorError>;

#[derive(Debug, Error)]
pub enum IndicatorError {
    /// The input series is shorter than the indicator's minimum window.
    ///
    /// Recoverable: callers typically render nothing until enough bars
    /// accumulate.
    #[error("insufficient data: need {required} samples, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("mismatched inputs: high={high_len}, low={low_len}, close={close_len}")]
    MismatchedInputs {
        high_len: usize,
        low_len: usize,
        close_len: usize,
    },

    /// A zero-range high/low window inside an oscillator, surfaced only under
    /// [`FlatWindowPolicy::Reject`](crate::indicators::FlatWindowPolicy).
    #[error("degenerate high/low window at index {index}: highest high equals lowest low")]
    DegenerateWindow { index: usize },

    #[error("moving-average kind {0:?} is not implemented")]
    UnsupportedMaKind(MaKind),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
