use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear domain-to-range interpolation over explicit pixel bounds.
///
/// Both axis scales reduce to this primitive; the resolver decides the pixel
/// span (for example `(visible_len - 1) * spacing` on the time axis), so the
/// range is carried explicitly instead of being derived from a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() || domain.0 == domain.1 {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn map(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn invert(self, position: f64) -> ChartResult<f64> {
        if !position.is_finite() {
            return Err(ChartError::InvalidData(
                "position must be finite".to_owned(),
            ));
        }

        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Err(ChartError::InvalidData(
                "scale range is collapsed, cannot invert".to_owned(),
            ));
        }
        let normalized = (position - self.range_start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}
