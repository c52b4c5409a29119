use serde::{Deserialize, Serialize};

/// Fractional view window over a candle series.
///
/// Both fields are fractional on purpose: zoom factors and pan deltas produce
/// non-integer windows, and rounding is deferred to the resolver so repeated
/// small gestures accumulate instead of being swallowed. The invariant
/// `candles_in_view <= end_index <= series_len` holds after every transition
/// whenever the series is at least as long as the minimum window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    /// Window width in candles, fractional.
    pub candles_in_view: f64,
    /// Exclusive end of the window as a fractional series index.
    pub end_index: f64,
}

/// Limits that transitions clamp against. Derived from the engine config and
/// the current series, not stored in the state itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    pub series_len: f64,
    pub bounded_width: f64,
    pub default_candles_in_view: f64,
    pub min_candles_in_view: f64,
    pub max_view_factor: f64,
}

/// A single user gesture applied to the viewport state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Multiplicative window change; factor > 1 narrows the window.
    Zoom { factor: f64 },
    /// Horizontal pointer movement in pixels; positive pans toward older data.
    Pan { delta_px: f64 },
    /// Snap back to the latest data at the default window.
    Reset,
}

impl ViewportState {
    /// Initial state: the default window anchored at the latest candle.
    #[must_use]
    pub fn initial(bounds: &ViewportBounds) -> Self {
        let candles_in_view = bounds
            .min_candles_in_view
            .max(bounds.series_len.min(bounds.default_candles_in_view));
        Self {
            candles_in_view,
            end_index: bounds.series_len,
        }
    }

    /// Applies a transition, producing the next state. Pure; clamping happens
    /// here so every caller observes the same invariant.
    #[must_use]
    pub fn apply(self, transition: Transition, bounds: &ViewportBounds) -> Self {
        let next = match transition {
            Transition::Zoom { factor } => self.zoom(factor, bounds),
            Transition::Pan { delta_px } => self.pan(delta_px, bounds),
            Transition::Reset => Self::initial(bounds),
        };
        debug_assert!(next.candles_in_view >= bounds.min_candles_in_view.min(bounds.series_len));
        debug_assert!(next.end_index <= bounds.series_len);
        next
    }

    fn zoom(self, factor: f64, bounds: &ViewportBounds) -> Self {
        let zoom_out_cap = bounds
            .series_len
            .min(bounds.default_candles_in_view * bounds.max_view_factor);
        let requested = self.candles_in_view / factor;
        // min wins when the caps cross on short series.
        let candles_in_view = bounds.min_candles_in_view.max(zoom_out_cap.min(requested));

        let min_end = candles_in_view.min(bounds.series_len);
        let end_index = min_end.max(bounds.series_len.min(self.end_index));
        Self {
            candles_in_view,
            end_index,
        }
    }

    fn pan(self, delta_px: f64, bounds: &ViewportBounds) -> Self {
        let spacing_px = bounds.bounded_width / self.candles_in_view;
        if !spacing_px.is_finite() || spacing_px <= 0.0 {
            return self;
        }

        let index_delta = -delta_px / spacing_px;
        let min_end = self.candles_in_view.min(bounds.series_len);
        let end_index = min_end.max(bounds.series_len.min(self.end_index + index_delta));
        Self {
            candles_in_view: self.candles_in_view,
            end_index,
        }
    }
}
