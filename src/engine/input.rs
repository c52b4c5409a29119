use crate::error::{ChartError, ChartResult};

/// Converts a wheel notch into a multiplicative zoom factor.
///
/// Scrolling up (negative `delta_y`) zooms in with factor `exp(intensity)`,
/// scrolling down zooms out with `exp(-intensity)`. A zero delta is a no-op
/// and resolves to `None`; a non-finite delta is a caller error.
pub fn normalize_wheel(delta_y: f64, zoom_intensity: f64) -> ChartResult<Option<f64>> {
    if !delta_y.is_finite() {
        return Err(ChartError::InvalidData(
            "wheel delta must be finite".to_owned(),
        ));
    }
    if !zoom_intensity.is_finite() || zoom_intensity <= 0.0 {
        return Err(ChartError::InvalidData(
            "zoom intensity must be finite and > 0".to_owned(),
        ));
    }
    if delta_y == 0.0 {
        return Ok(None);
    }

    let direction = if delta_y < 0.0 { 1.0 } else { -1.0 };
    let factor = (direction * zoom_intensity).exp();
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ChartError::InvalidData(
            "zoom factor must be finite and > 0".to_owned(),
        ));
    }
    Ok(Some(factor))
}

/// Validates a horizontal drag delta in pixels.
///
/// A zero delta is a no-op and resolves to `None`. The sign convention is the
/// pointer's: positive means the pointer moved right, which pans the view
/// toward older data.
pub fn normalize_drag(delta_x: f64) -> ChartResult<Option<f64>> {
    if !delta_x.is_finite() {
        return Err(ChartError::InvalidData(
            "drag delta must be finite".to_owned(),
        ));
    }
    if delta_x == 0.0 {
        return Ok(None);
    }
    Ok(Some(delta_x))
}
