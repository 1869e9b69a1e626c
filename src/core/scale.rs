use crate::error::{GraphError, GraphResult};

/// Affine map from a finite data domain onto an arbitrary pixel interval.
///
/// The pixel interval is passed per call so the same scale can serve both
/// axis orientations, including the inverted Y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> GraphResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(GraphError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, pixel_start: f64, pixel_end: f64) -> GraphResult<f64> {
        validate_pixel_interval(pixel_start, pixel_end)?;
        if !value.is_finite() {
            return Err(GraphError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(pixel_start + normalized * (pixel_end - pixel_start))
    }

    pub fn pixel_to_domain(self, pixel: f64, pixel_start: f64, pixel_end: f64) -> GraphResult<f64> {
        validate_pixel_interval(pixel_start, pixel_end)?;
        if !pixel.is_finite() {
            return Err(GraphError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (pixel - pixel_start) / (pixel_end - pixel_start);
        Ok(self.domain_start + normalized * span)
    }
}

fn validate_pixel_interval(pixel_start: f64, pixel_end: f64) -> GraphResult<()> {
    if !pixel_start.is_finite() || !pixel_end.is_finite() || pixel_start == pixel_end {
        return Err(GraphError::InvalidData(
            "pixel interval must be finite and non-zero".to_owned(),
        ));
    }
    Ok(())
}

/// Orders a range and widens degenerate ones to `min_span` around the value.
pub(crate) fn normalize_range(start: f64, end: f64, min_span: f64) -> GraphResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(GraphError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}
