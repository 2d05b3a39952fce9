use tracing::trace;

use crate::core::{IndicatorSeries, VisibleRange};

/// Clips indicator output to the intersection with a visible range.
///
/// Local indices are derived as `start = max(range.start - begin, 0)` and
/// `end = min(range.end - begin, line_len)`; the clipped result keeps the
/// original shape and carries `begin_index = begin + start`, so a renderer
/// can map values back to bar positions without re-deriving offsets.
///
/// An empty intersection yields empty lines (never an error), and clipping
/// an already-clipped result to the same range is a no-op.
#[must_use]
pub fn clip_to_visible(series: &IndicatorSeries, range: VisibleRange) -> IndicatorSeries {
    let begin = series.begin_index();
    let local_start = range.start().saturating_sub(begin);
    let local_end = range.end().saturating_sub(begin).min(series.line_len());

    if local_start >= local_end {
        trace!(
            begin_index = begin,
            visible_start = range.start(),
            visible_end = range.end(),
            "visible range misses indicator output"
        );
        return series.map_with_begin(range.start(), |_| Vec::new());
    }

    series.map_with_begin(begin + local_start, |line| {
        line[local_start..local_end].to_vec()
    })
}
