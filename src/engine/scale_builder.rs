use serde::{Deserialize, Serialize};

use crate::core::{BoundedSurface, Candle, PriceScale, TimeScale};
use crate::error::ChartResult;

/// Time and price scales calibrated to one resolved render window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalePair {
    pub time: TimeScale,
    pub price: PriceScale,
}

/// Builds both axis scales for the visible slice.
///
/// The time scale spans the slice at the resolved per-candle spacing. The
/// price scale auto-fits the low/high envelope of the same slice; a non-zero
/// vertical padding widens the price domain so the envelope extremes sit that
/// many pixels inside the surface edges.
pub fn build_scales(
    visible: &[Candle],
    spacing_px: f64,
    surface: BoundedSurface,
    vertical_padding_px: f64,
) -> ChartResult<ScalePair> {
    let time = TimeScale::from_visible(visible, spacing_px)?;
    let price = build_price_scale(visible, surface.height, vertical_padding_px)?;
    Ok(ScalePair { time, price })
}

fn build_price_scale(
    visible: &[Candle],
    height_px: f64,
    vertical_padding_px: f64,
) -> ChartResult<PriceScale> {
    if visible.is_empty() {
        return PriceScale::from_visible(visible, height_px);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for candle in visible {
        min = min.min(candle.low);
        max = max.max(candle.high);
    }

    if vertical_padding_px > 0.0 && height_px > 2.0 * vertical_padding_px {
        let pad = (max - min) * vertical_padding_px / (height_px - 2.0 * vertical_padding_px);
        min -= pad;
        max += pad;
    }

    PriceScale::new(min, max, height_px)
}

#[cfg(test)]
mod tests {
    use super::build_scales;
    use crate::core::{BoundedSurface, Candle, Viewport};

    fn surface() -> BoundedSurface {
        BoundedSurface::from_viewport(Viewport::new(635, 410)).expect("surface")
    }

    fn candle(time: f64, low: f64, high: f64) -> Candle {
        Candle::new(time, low, high, low, high, 1.0).expect("candle")
    }

    #[test]
    fn envelope_fills_full_height_without_padding() {
        let visible = vec![candle(0.0, 100.0, 110.0), candle(60.0, 95.0, 105.0)];
        let scales = build_scales(&visible, 15.0, surface(), 0.0).expect("scales");

        assert_eq!(scales.price.domain(), (95.0, 110.0));
        assert_eq!(scales.price.price_to_pixel(110.0).expect("px"), 0.0);
        assert_eq!(scales.price.price_to_pixel(95.0).expect("px"), 400.0);
    }

    #[test]
    fn vertical_padding_insets_envelope_extremes() {
        let visible = vec![candle(0.0, 100.0, 110.0), candle(60.0, 95.0, 105.0)];
        let scales = build_scales(&visible, 15.0, surface(), 20.0).expect("scales");

        let top = scales.price.price_to_pixel(110.0).expect("px");
        let bottom = scales.price.price_to_pixel(95.0).expect("px");
        assert!((top - 20.0).abs() <= 1e-9);
        assert!((bottom - 380.0).abs() <= 1e-9);
    }

    #[test]
    fn padding_wider_than_surface_is_ignored() {
        let visible = vec![candle(0.0, 100.0, 110.0)];
        let scales = build_scales(&visible, 15.0, surface(), 500.0).expect("scales");
        assert_eq!(scales.price.domain(), (100.0, 110.0));
    }

    #[test]
    fn empty_slice_builds_fallback_scales() {
        let scales = build_scales(&[], 15.0, surface(), 0.0).expect("scales");
        assert!(scales.time.is_degenerate());
        assert_eq!(scales.price.domain(), (0.0, 1.0));
    }
}
