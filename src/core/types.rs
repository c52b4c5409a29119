use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixels reserved on the right edge of the surface for price-axis labels.
pub const PRICE_AXIS_GUTTER_PX: f64 = 35.0;
/// Pixels reserved on the bottom edge of the surface for time-axis labels.
pub const TIME_AXIS_GUTTER_PX: f64 = 10.0;

/// Raw drawing-surface size in pixels, supplied by the host each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Drawable plot area after reserving the axis gutters.
///
/// All windowing and scale math runs against this bounded area, not the raw
/// viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundedSurface {
    pub width: f64,
    pub height: f64,
}

impl BoundedSurface {
    pub fn from_viewport(viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let width = f64::from(viewport.width) - PRICE_AXIS_GUTTER_PX;
        let height = f64::from(viewport.height) - TIME_AXIS_GUTTER_PX;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        Ok(Self { width, height })
    }

    /// How many candles fit across the bounded width at the given unit width.
    #[must_use]
    pub fn default_candle_count(self, candle_unit_width_px: f64) -> f64 {
        if !candle_unit_width_px.is_finite() || candle_unit_width_px <= 0.0 {
            return 0.0;
        }
        (self.width / candle_unit_width_px).floor()
    }
}
