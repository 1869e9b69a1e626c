use serde::{Deserialize, Serialize};

use crate::core::scale::{normalize_range, LinearScale};
use crate::core::time_scale::bounds_checked;
use crate::core::types::{PixelBounds, Sample};
use crate::error::{GraphError, GraphResult};

/// Tuning controls for the temperature display range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TempScaleTuning {
    /// Factor by which the observed range is widened around its midpoint.
    pub expansion_factor: f64,
    pub min_span_absolute: f64,
}

impl Default for TempScaleTuning {
    fn default() -> Self {
        Self {
            expansion_factor: 1.2,
            min_span_absolute: 1.0,
        }
    }
}

impl TempScaleTuning {
    fn validate(self) -> GraphResult<Self> {
        if !self.expansion_factor.is_finite() || self.expansion_factor < 1.0 {
            return Err(GraphError::InvalidData(
                "temperature expansion factor must be finite and >= 1".to_owned(),
            ));
        }

        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(GraphError::InvalidData(
                "temperature scale min span must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Temperature axis model mapped to an inverted Y pixel axis.
///
/// The display domain is wider than the observed extremes so the curve never
/// touches the plot edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TempScale {
    domain_min: f64,
    domain_max: f64,
}

impl TempScale {
    /// Creates a scale from an explicit, already-expanded display domain.
    pub fn new(temp_min: f64, temp_max: f64) -> GraphResult<Self> {
        let normalized = normalize_range(temp_min, temp_max, 1.0)?;
        Ok(Self {
            domain_min: normalized.0,
            domain_max: normalized.1,
        })
    }

    /// Derives the display domain from observed extremes.
    ///
    /// The observed range is widened around its midpoint by the tuning's
    /// expansion factor, then degenerate ranges are padded to the minimum span.
    pub fn from_observed(observed_min: f64, observed_max: f64) -> GraphResult<Self> {
        Self::from_observed_tuned(observed_min, observed_max, TempScaleTuning::default())
    }

    pub fn from_observed_tuned(
        observed_min: f64,
        observed_max: f64,
        tuning: TempScaleTuning,
    ) -> GraphResult<Self> {
        let tuning = tuning.validate()?;
        if !observed_min.is_finite() || !observed_max.is_finite() {
            return Err(GraphError::InvalidData(
                "observed temperatures must be finite".to_owned(),
            ));
        }

        let (low, high) = if observed_min <= observed_max {
            (observed_min, observed_max)
        } else {
            (observed_max, observed_min)
        };
        let midpoint = (low + high) / 2.0;
        let expanded_min = midpoint + tuning.expansion_factor * (low - midpoint);
        let expanded_max = midpoint + tuning.expansion_factor * (high - midpoint);
        let normalized = normalize_range(expanded_min, expanded_max, tuning.min_span_absolute)?;

        Ok(Self {
            domain_min: normalized.0,
            domain_max: normalized.1,
        })
    }

    pub fn from_samples(samples: &[Sample]) -> GraphResult<Self> {
        Self::from_samples_tuned(samples, TempScaleTuning::default())
    }

    /// Derives the display domain from the temperatures of a sample window.
    pub fn from_samples_tuned(samples: &[Sample], tuning: TempScaleTuning) -> GraphResult<Self> {
        if samples.is_empty() {
            return Err(GraphError::InvalidData(
                "temperature scale cannot be built from empty data".to_owned(),
            ));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for sample in samples {
            if !sample.temperature.is_finite() {
                return Err(GraphError::InvalidData(
                    "temperature values must be finite".to_owned(),
                ));
            }
            min = min.min(sample.temperature);
            max = max.max(sample.temperature);
        }

        Self::from_observed_tuned(min, max, tuning)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.domain_max - self.domain_min
    }

    /// Maps a temperature onto the plot's vertical span. Warmer is higher,
    /// so the domain maximum lands at the plot top.
    pub fn temperature_to_pixel(self, temperature: f64, bounds: PixelBounds) -> GraphResult<f64> {
        let bounds = bounds_checked(bounds)?;
        self.linear()?
            .domain_to_pixel(temperature, bounds.plot_bottom(), bounds.plot_top())
    }

    pub fn pixel_to_temperature(self, pixel: f64, bounds: PixelBounds) -> GraphResult<f64> {
        let bounds = bounds_checked(bounds)?;
        self.linear()?
            .pixel_to_domain(pixel, bounds.plot_bottom(), bounds.plot_top())
    }

    /// Vertical pixel density of the display domain, in pixels per degree.
    pub fn pixels_per_degree(self, bounds: PixelBounds) -> GraphResult<f64> {
        let bounds = bounds_checked(bounds)?;
        Ok(bounds.plot_height() / self.span())
    }

    fn linear(self) -> GraphResult<LinearScale> {
        LinearScale::new(self.domain_min, self.domain_max)
    }
}
