pub mod candle;
pub mod indicator_series;
pub mod primitives;
pub mod visible_range;

pub use candle::{Candle, CandleSeries};
pub use indicator_series::{IndicatorOutput, IndicatorSeries};
pub use visible_range::VisibleRange;
