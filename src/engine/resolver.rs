use serde::{Deserialize, Serialize};

use crate::engine::ViewportState;

/// Integer render window resolved from the fractional viewport state.
///
/// `start_index..end_index` is the half-open slice to draw, already widened by
/// the trailing render buffer and clamped to the series. The fractional part
/// of the window survives as `sub_pixel_offset_px`, a leftward shift in
/// `[0, spacing_px)` applied at draw time so panning stays smooth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedViewport {
    pub start_index: usize,
    pub end_index: usize,
    /// Horizontal pixels per candle at the current zoom level.
    pub spacing_px: f64,
    pub sub_pixel_offset_px: f64,
}

impl ResolvedViewport {
    #[must_use]
    pub fn len(self) -> usize {
        self.end_index - self.start_index
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.start_index == self.end_index
    }
}

/// Resolves the fractional state into an integer window over the series.
///
/// Total by construction: every input, including a state corrupted by
/// non-finite arithmetic upstream, resolves to some window rather than
/// panicking mid-frame. Degenerate inputs collapse to an empty window.
#[must_use]
pub fn resolve_viewport(
    state: ViewportState,
    series_len: usize,
    bounded_width: f64,
    horizontal_padding_px: f64,
) -> ResolvedViewport {
    if series_len == 0
        || !state.candles_in_view.is_finite()
        || state.candles_in_view <= 0.0
        || !state.end_index.is_finite()
        || !bounded_width.is_finite()
        || bounded_width <= 0.0
    {
        return ResolvedViewport {
            start_index: 0,
            end_index: 0,
            spacing_px: 0.0,
            sub_pixel_offset_px: 0.0,
        };
    }

    let spacing_px = bounded_width / state.candles_in_view;
    let exact_start = (state.end_index - state.candles_in_view).max(0.0);
    let start_index = exact_start.floor() as usize;

    let padding_px = if horizontal_padding_px.is_finite() {
        horizontal_padding_px.max(0.0)
    } else {
        0.0
    };
    let trailing_buffer = 1 + (padding_px / spacing_px).ceil() as usize;
    let end_index = series_len.min(state.end_index.max(0.0).ceil() as usize + trailing_buffer);

    let start_index = start_index.min(end_index);
    let sub_pixel_offset_px = (exact_start - start_index as f64) * spacing_px;

    ResolvedViewport {
        start_index,
        end_index,
        spacing_px,
        sub_pixel_offset_px,
    }
}
