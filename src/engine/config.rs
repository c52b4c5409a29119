use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. All tunables are validated once
/// at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub viewport: Viewport,
    /// Candle body width in pixels.
    #[serde(default = "default_candle_width_px")]
    pub candle_width_px: f64,
    /// Gap between adjacent candles in pixels.
    #[serde(default = "default_candle_gap_px")]
    pub candle_gap_px: f64,
    /// Zoom speed per wheel notch; the window scales by `exp(±intensity)`.
    #[serde(default = "default_zoom_intensity")]
    pub zoom_intensity: f64,
    /// Smallest window the user can zoom into.
    #[serde(default = "default_min_candles_in_view")]
    pub min_candles_in_view: f64,
    /// Zoom-out cap as a multiple of the width-derived default window.
    #[serde(default = "default_max_view_factor")]
    pub max_view_factor: f64,
    /// Extra horizontal room covered by the trailing render buffer.
    #[serde(default = "default_horizontal_padding_px")]
    pub horizontal_padding_px: f64,
    /// Pixel inset applied to the price envelope at the top and bottom edges.
    #[serde(default)]
    pub vertical_padding_px: f64,
    /// Floor for pixels per price unit when sizing price ticks.
    #[serde(default = "default_min_px_per_price_tick")]
    pub min_px_per_price_tick: f64,
    /// Minimum number of price-axis ticks regardless of range.
    #[serde(default = "default_min_price_tick_count")]
    pub min_price_tick_count: usize,
    /// Smallest allowed pixel distance between time-axis ticks.
    #[serde(default = "default_time_tick_min_spacing_px")]
    pub time_tick_min_spacing_px: f64,
}

impl EngineConfig {
    /// Creates a config with default tunables for the given surface.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            candle_width_px: default_candle_width_px(),
            candle_gap_px: default_candle_gap_px(),
            zoom_intensity: default_zoom_intensity(),
            min_candles_in_view: default_min_candles_in_view(),
            max_view_factor: default_max_view_factor(),
            horizontal_padding_px: default_horizontal_padding_px(),
            vertical_padding_px: 0.0,
            min_px_per_price_tick: default_min_px_per_price_tick(),
            min_price_tick_count: default_min_price_tick_count(),
            time_tick_min_spacing_px: default_time_tick_min_spacing_px(),
        }
    }

    /// Total width per data point: body plus gap.
    #[must_use]
    pub fn candle_unit_width_px(self) -> f64 {
        self.candle_width_px + self.candle_gap_px
    }

    /// Sets candle body width and inter-candle gap.
    #[must_use]
    pub fn with_candle_metrics(mut self, width_px: f64, gap_px: f64) -> Self {
        self.candle_width_px = width_px;
        self.candle_gap_px = gap_px;
        self
    }

    /// Sets zoom speed per wheel notch.
    #[must_use]
    pub fn with_zoom_intensity(mut self, intensity: f64) -> Self {
        self.zoom_intensity = intensity;
        self
    }

    /// Sets the zoom window limits.
    #[must_use]
    pub fn with_view_limits(mut self, min_candles_in_view: f64, max_view_factor: f64) -> Self {
        self.min_candles_in_view = min_candles_in_view;
        self.max_view_factor = max_view_factor;
        self
    }

    /// Sets horizontal and vertical render paddings.
    #[must_use]
    pub fn with_paddings(mut self, horizontal_px: f64, vertical_px: f64) -> Self {
        self.horizontal_padding_px = horizontal_px;
        self.vertical_padding_px = vertical_px;
        self
    }

    /// Sets price-axis tick tuning.
    #[must_use]
    pub fn with_price_tick_tuning(mut self, min_px_per_price: f64, min_tick_count: usize) -> Self {
        self.min_px_per_price_tick = min_px_per_price;
        self.min_price_tick_count = min_tick_count;
        self
    }

    /// Sets the minimum pixel spacing between time-axis ticks.
    #[must_use]
    pub fn with_time_tick_min_spacing_px(mut self, spacing_px: f64) -> Self {
        self.time_tick_min_spacing_px = spacing_px;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        if !self.candle_width_px.is_finite() || self.candle_width_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "candle width must be finite and > 0".to_owned(),
            ));
        }
        if !self.candle_gap_px.is_finite() || self.candle_gap_px < 0.0 {
            return Err(ChartError::InvalidData(
                "candle gap must be finite and >= 0".to_owned(),
            ));
        }
        if !self.zoom_intensity.is_finite() || self.zoom_intensity <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom intensity must be finite and > 0".to_owned(),
            ));
        }
        if !self.min_candles_in_view.is_finite() || self.min_candles_in_view < 1.0 {
            return Err(ChartError::InvalidData(
                "min candles in view must be finite and >= 1".to_owned(),
            ));
        }
        if !self.max_view_factor.is_finite() || self.max_view_factor < 1.0 {
            return Err(ChartError::InvalidData(
                "max view factor must be finite and >= 1".to_owned(),
            ));
        }
        if !self.horizontal_padding_px.is_finite()
            || !self.vertical_padding_px.is_finite()
            || self.horizontal_padding_px < 0.0
            || self.vertical_padding_px < 0.0
        {
            return Err(ChartError::InvalidData(
                "render paddings must be finite and >= 0".to_owned(),
            ));
        }
        if !self.min_px_per_price_tick.is_finite() || self.min_px_per_price_tick <= 0.0 {
            return Err(ChartError::InvalidData(
                "min px per price tick must be finite and > 0".to_owned(),
            ));
        }
        if self.min_price_tick_count == 0 {
            return Err(ChartError::InvalidData(
                "min price tick count must be >= 1".to_owned(),
            ));
        }
        if !self.time_tick_min_spacing_px.is_finite() || self.time_tick_min_spacing_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "time tick min spacing must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_candle_width_px() -> f64 {
    10.0
}

fn default_candle_gap_px() -> f64 {
    5.0
}

fn default_zoom_intensity() -> f64 {
    0.1
}

fn default_min_candles_in_view() -> f64 {
    10.0
}

fn default_max_view_factor() -> f64 {
    3.0
}

fn default_horizontal_padding_px() -> f64 {
    5.0
}

fn default_min_px_per_price_tick() -> f64 {
    80.0
}

fn default_min_price_tick_count() -> usize {
    3
}

fn default_time_tick_min_spacing_px() -> f64 {
    56.0
}
