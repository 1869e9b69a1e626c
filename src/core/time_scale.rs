use serde::{Deserialize, Serialize};

use crate::core::scale::{normalize_range, LinearScale};
use crate::core::series::SampleSeries;
use crate::core::types::PixelBounds;
use crate::error::{GraphError, GraphResult};

/// Tuning controls for time range fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScaleTuning {
    pub min_span_absolute: f64,
}

impl Default for TimeScaleTuning {
    fn default() -> Self {
        Self {
            min_span_absolute: 1.0,
        }
    }
}

impl TimeScaleTuning {
    fn validate(self) -> GraphResult<Self> {
        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(GraphError::InvalidData(
                "time scale min span must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Time axis model with separate full and visible ranges.
///
/// `full_*` tracks the span of the underlying series.
/// `visible_*` is the plotted window, moved by zoom and reset operations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    full_start: f64,
    full_end: f64,
    visible_start: f64,
    visible_end: f64,
}

impl TimeScale {
    /// Creates a scale with matching full and visible ranges.
    pub fn new(time_start: f64, time_end: f64) -> GraphResult<Self> {
        let normalized = normalize_range(time_start, time_end, 1.0)?;
        Ok(Self {
            full_start: normalized.0,
            full_end: normalized.1,
            visible_start: normalized.0,
            visible_end: normalized.1,
        })
    }

    pub fn from_series(series: &SampleSeries) -> GraphResult<Self> {
        Self::from_series_tuned(series, TimeScaleTuning::default())
    }

    /// Fits full and visible ranges to the observed span of a series.
    pub fn from_series_tuned(series: &SampleSeries, tuning: TimeScaleTuning) -> GraphResult<Self> {
        let tuning = tuning.validate()?;
        let (first, last) = series.full_span();
        let (full_start, full_end) = normalize_range(first, last, tuning.min_span_absolute)?;

        Ok(Self {
            full_start,
            full_end,
            visible_start: full_start,
            visible_end: full_end,
        })
    }

    #[must_use]
    pub fn full_range(self) -> (f64, f64) {
        (self.full_start, self.full_end)
    }

    #[must_use]
    pub fn visible_range(self) -> (f64, f64) {
        (self.visible_start, self.visible_end)
    }

    #[must_use]
    pub fn visible_span(self) -> f64 {
        self.visible_end - self.visible_start
    }

    /// Overrides the visible window without modifying the full fitted range.
    pub fn set_visible_range(&mut self, start: f64, end: f64) -> GraphResult<()> {
        let normalized = normalize_range(start, end, 1e-9)?;
        self.visible_start = normalized.0;
        self.visible_end = normalized.1;
        Ok(())
    }

    pub fn reset_visible_range_to_full(&mut self) {
        self.visible_start = self.full_start;
        self.visible_end = self.full_end;
    }

    /// Maps an instant in the visible window onto the plot's horizontal span.
    pub fn time_to_pixel(self, time: f64, bounds: PixelBounds) -> GraphResult<f64> {
        self.visible_linear()?
            .domain_to_pixel(time, bounds_checked(bounds)?.plot_left(), bounds.plot_right())
    }

    pub fn pixel_to_time(self, pixel: f64, bounds: PixelBounds) -> GraphResult<f64> {
        self.visible_linear()?
            .pixel_to_domain(pixel, bounds_checked(bounds)?.plot_left(), bounds.plot_right())
    }

    /// Horizontal pixel density of the visible window, in pixels per hour.
    pub fn pixels_per_hour(self, bounds: PixelBounds) -> GraphResult<f64> {
        let bounds = bounds_checked(bounds)?;
        Ok(bounds.plot_width() / (self.visible_span() / 3_600.0))
    }

    fn visible_linear(self) -> GraphResult<LinearScale> {
        LinearScale::new(self.visible_start, self.visible_end)
    }
}

pub(crate) fn bounds_checked(bounds: PixelBounds) -> GraphResult<PixelBounds> {
    if !bounds.is_valid() {
        return Err(GraphError::InvalidBounds {
            width: bounds.width,
            height: bounds.height,
        });
    }
    Ok(bounds)
}
