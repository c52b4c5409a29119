use serde::{Deserialize, Serialize};

use crate::core::{Candle, LinearScale};
use crate::error::{ChartError, ChartResult};

/// Fallback span applied when the visible low/high envelope is flat.
const MIN_PRICE_SPAN_ABSOLUTE: f64 = 1.0;

/// Price axis mapping the visible low/high envelope to an inverted y axis.
///
/// The domain is local to the viewport: it is recomputed from the visible
/// slice every resolution cycle, so the price axis auto-scales to whatever is
/// currently on screen. Larger prices map to smaller y values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScale {
    domain_min: f64,
    domain_max: f64,
    height_px: f64,
}

impl PriceScale {
    /// Creates a price scale from explicit min/max values.
    pub fn new(price_min: f64, price_max: f64, height_px: f64) -> ChartResult<Self> {
        if !height_px.is_finite() || height_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "price scale height must be finite and > 0".to_owned(),
            ));
        }

        let (domain_min, domain_max) =
            normalize_range(price_min, price_max, MIN_PRICE_SPAN_ABSOLUTE)?;
        Ok(Self {
            domain_min,
            domain_max,
            height_px,
        })
    }

    /// Fits the scale to the low/high envelope of the visible slice.
    ///
    /// An empty slice falls back to a unit domain; a flat envelope expands to
    /// the minimum span around the price. Neither case errors.
    pub fn from_visible(visible: &[Candle], height_px: f64) -> ChartResult<Self> {
        if visible.is_empty() {
            return Self::new(0.0, 1.0, height_px);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for candle in visible {
            min = min.min(candle.low);
            max = max.max(candle.high);
        }

        Self::new(min, max, height_px)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        self.height_px
    }

    /// Maps a raw price to pixel y. The mapping is inverted: the domain
    /// maximum lands at 0 and the domain minimum at the full height.
    pub fn price_to_pixel(self, price: f64) -> ChartResult<f64> {
        let inverted = self.linear()?.map(price)?;
        Ok(self.height_px - inverted)
    }

    pub fn pixel_to_price(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        self.linear()?.invert(self.height_px - pixel)
    }

    fn linear(self) -> ChartResult<LinearScale> {
        LinearScale::new((self.domain_min, self.domain_max), (0.0, self.height_px))
    }
}

fn normalize_range(start: f64, end: f64, min_span: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}
