//! indicator-rs: technical indicator math for candle charts.
//!
//! This crate provides pure, synchronous indicator computation over OHLCV
//! candle series plus a windowed evaluation layer that clips results to a
//! visible index range and derives plot bounds and axis tick values. It has
//! no rendering, gesture or platform dependencies.

pub mod api;
pub mod core;
pub mod error;
pub mod indicators;
pub mod telemetry;

pub use api::{IndicatorSpec, clip_to_visible, evaluate, evaluate_visible};
pub use core::{Candle, CandleSeries, IndicatorOutput, IndicatorSeries, VisibleRange};
pub use error::{IndicatorError, IndicatorResult};
