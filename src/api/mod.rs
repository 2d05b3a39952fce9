//! Windowed evaluation layer consumed by presentation code.
//!
//! Computes indicators over a full series, clips results to the visible
//! index range and derives Y-axis bounds and tick values for plot scaling.

pub mod axis_ticks;
pub mod evaluator;
pub mod plot_bounds;
pub mod visible_window;

pub use axis_ticks::{nice_step, nice_ticks};
pub use evaluator::{IndicatorSpec, evaluate, evaluate_visible};
pub use plot_bounds::{PlotBounds, candle_envelope, indicator_bounds, visible_bounds};
pub use visible_window::clip_to_visible;
