use serde::{Deserialize, Serialize};

use crate::core::{Candle, LinearScale};
use crate::error::{ChartError, ChartResult};

/// Time axis mapping visible candle timestamps to x pixels.
///
/// The domain covers the first and last visible timestamps; the range covers
/// `[0, (visible_len - 1) * spacing]`, so consecutive candles land exactly one
/// spacing apart. Slices of length 0 or 1 collapse to a degenerate scale that
/// maps every time to 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    domain_start: f64,
    domain_end: f64,
    span_px: f64,
}

impl TimeScale {
    /// Fits the scale to the visible slice at the given per-candle spacing.
    pub fn from_visible(visible: &[Candle], spacing_px: f64) -> ChartResult<Self> {
        if !spacing_px.is_finite() || spacing_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "time scale spacing must be finite and > 0".to_owned(),
            ));
        }

        let (Some(first), Some(last)) = (visible.first(), visible.last()) else {
            return Ok(Self::degenerate(0.0));
        };
        if visible.len() == 1 || first.time == last.time {
            return Ok(Self::degenerate(first.time));
        }

        Ok(Self {
            domain_start: first.time,
            domain_end: last.time,
            span_px: (visible.len() - 1) as f64 * spacing_px,
        })
    }

    fn degenerate(time: f64) -> Self {
        Self {
            domain_start: time,
            domain_end: time,
            span_px: 0.0,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn span_px(self) -> f64 {
        self.span_px
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    pub fn time_to_pixel(self, time: f64) -> ChartResult<f64> {
        if !time.is_finite() {
            return Err(ChartError::InvalidData("time must be finite".to_owned()));
        }
        match self.linear() {
            Some(linear) => linear?.map(time),
            None => Ok(0.0),
        }
    }

    pub fn pixel_to_time(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        match self.linear() {
            Some(linear) => linear?.invert(pixel),
            None => Ok(self.domain_start),
        }
    }

    fn linear(self) -> Option<ChartResult<LinearScale>> {
        if self.is_degenerate() {
            return None;
        }
        Some(LinearScale::new(
            (self.domain_start, self.domain_end),
            (0.0, self.span_px),
        ))
    }
}
