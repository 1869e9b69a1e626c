use tracing::{debug, trace};

use crate::core::{
    PixelBounds, Sample, SampleSeries, SunTimes, TempScale, TempScaleTuning, TimeScale,
    TimeScaleTuning, visible_window,
};
use crate::error::{GraphError, GraphResult};
use crate::render::Renderer;

mod frame_builder;
mod snap;
mod snapshot;
mod style;

pub use frame_builder::{DAY_LINE_TOP_INSET_PX, LABEL_PAD_PX, build_frame};
pub use snap::SampleSnap;
pub use snapshot::EngineSnapshot;
pub use style::GraphStyle;

/// Construction parameters for a [`GraphEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphEngineConfig {
    pub bounds: PixelBounds,
    pub sun: SunTimes,
    pub style: GraphStyle,
    pub time_tuning: TimeScaleTuning,
    pub temp_tuning: TempScaleTuning,
}

impl GraphEngineConfig {
    #[must_use]
    pub fn new(bounds: PixelBounds, sun: SunTimes) -> Self {
        Self {
            bounds,
            sun,
            style: GraphStyle::default(),
            time_tuning: TimeScaleTuning::default(),
            temp_tuning: TempScaleTuning::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: GraphStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_time_tuning(mut self, tuning: TimeScaleTuning) -> Self {
        self.time_tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_temp_tuning(mut self, tuning: TempScaleTuning) -> Self {
        self.temp_tuning = tuning;
        self
    }
}

/// Synchronous graph facade owning the dataset, both scales and a renderer.
///
/// Every state mutation redraws before returning, so the renderer always
/// reflects the last accepted call. Nothing is cached between redraws; each
/// frame is recomputed from the series and the current viewport.
pub struct GraphEngine<R: Renderer> {
    renderer: R,
    series: SampleSeries,
    sun: SunTimes,
    time_scale: TimeScale,
    temp_scale: TempScale,
    bounds: PixelBounds,
    style: GraphStyle,
    time_tuning: TimeScaleTuning,
    temp_tuning: TempScaleTuning,
}

impl<R: Renderer> GraphEngine<R> {
    /// Validates the config and derives both scales from the series.
    ///
    /// The visible window starts at the full data span, and the temperature
    /// domain is fitted to the windowed samples.
    pub fn new(renderer: R, series: SampleSeries, config: GraphEngineConfig) -> GraphResult<Self> {
        if !config.bounds.is_valid() {
            return Err(GraphError::InvalidBounds {
                width: config.bounds.width,
                height: config.bounds.height,
            });
        }
        config.style.validate()?;

        let time_scale = TimeScale::from_series_tuned(&series, config.time_tuning)?;
        let (visible_start, visible_end) = time_scale.visible_range();
        let windowed = visible_window(&series, visible_start, visible_end);
        let temp_scale = TempScale::from_samples_tuned(&windowed, config.temp_tuning)?;

        debug!(
            sample_count = series.len(),
            visible_start, visible_end, "initialized graph engine"
        );

        Ok(Self {
            renderer,
            series,
            sun: config.sun,
            time_scale,
            temp_scale,
            bounds: config.bounds,
            style: config.style,
            time_tuning: config.time_tuning,
            temp_tuning: config.temp_tuning,
        })
    }

    /// Replaces the visible time window and synchronously redraws.
    ///
    /// The temperature domain is refitted to the samples inside the new
    /// window, so the vertical scale always reflects what is on screen.
    pub fn rescale(&mut self, new_min: f64, new_max: f64) -> GraphResult<()> {
        self.time_scale.set_visible_range(new_min, new_max)?;
        self.refit_temp_scale()?;
        let (visible_start, visible_end) = self.time_scale.visible_range();
        debug!(visible_start, visible_end, "rescaled visible window");
        self.render()
    }

    /// Adopts new pixel bounds and synchronously redraws. The visible window
    /// and the fitted temperature domain are unchanged.
    pub fn resize(&mut self, bounds: PixelBounds) -> GraphResult<()> {
        if !bounds.is_valid() {
            return Err(GraphError::InvalidBounds {
                width: bounds.width,
                height: bounds.height,
            });
        }
        self.bounds = bounds;
        debug!(
            width = bounds.width,
            height = bounds.height,
            "resized graph surface"
        );
        self.render()
    }

    /// Restores the visible window captured at initialization and redraws.
    pub fn reset_to_full_span(&mut self) -> GraphResult<()> {
        self.time_scale.reset_visible_range_to_full();
        self.refit_temp_scale()?;
        debug!("reset visible window to full span");
        self.render()
    }

    /// Replaces the dataset, re-initializes the window to the new full span
    /// and redraws.
    pub fn set_series(&mut self, series: SampleSeries) -> GraphResult<()> {
        let time_scale = TimeScale::from_series_tuned(&series, self.time_tuning)?;
        self.series = series;
        self.time_scale = time_scale;
        self.refit_temp_scale()?;
        debug!(sample_count = self.series.len(), "replaced sample series");
        self.render()
    }

    pub fn set_style(&mut self, style: GraphStyle) -> GraphResult<()> {
        style.validate()?;
        self.style = style;
        self.render()
    }

    /// Rebuilds the frame for the current state and hands it to the renderer.
    pub fn render(&mut self) -> GraphResult<()> {
        let frame = self.build_render_frame()?;
        trace!(
            rect_count = frame.rects.len(),
            line_count = frame.lines.len(),
            text_count = frame.texts.len(),
            curve_count = frame.curves.len(),
            marker_count = frame.markers.len(),
            "rendering frame"
        );
        self.renderer.render(&frame)
    }

    /// Samples covering the current visible window, synthesized boundary
    /// samples included.
    #[must_use]
    pub fn visible_samples(&self) -> Vec<Sample> {
        let (visible_start, visible_end) = self.time_scale.visible_range();
        visible_window(&self.series, visible_start, visible_end)
    }

    #[must_use]
    pub fn series(&self) -> &SampleSeries {
        &self.series
    }

    #[must_use]
    pub fn sun_times(&self) -> SunTimes {
        self.sun
    }

    #[must_use]
    pub fn bounds(&self) -> PixelBounds {
        self.bounds
    }

    #[must_use]
    pub fn style(&self) -> GraphStyle {
        self.style
    }

    #[must_use]
    pub fn full_time_range(&self) -> (f64, f64) {
        self.time_scale.full_range()
    }

    #[must_use]
    pub fn visible_time_range(&self) -> (f64, f64) {
        self.time_scale.visible_range()
    }

    #[must_use]
    pub fn temperature_domain(&self) -> (f64, f64) {
        self.temp_scale.domain()
    }

    pub fn map_time_to_pixel(&self, time: f64) -> GraphResult<f64> {
        self.time_scale.time_to_pixel(time, self.bounds)
    }

    pub fn map_pixel_to_time(&self, pixel: f64) -> GraphResult<f64> {
        self.time_scale.pixel_to_time(pixel, self.bounds)
    }

    pub fn map_temperature_to_pixel(&self, temperature: f64) -> GraphResult<f64> {
        self.temp_scale.temperature_to_pixel(temperature, self.bounds)
    }

    pub fn map_pixel_to_temperature(&self, pixel: f64) -> GraphResult<f64> {
        self.temp_scale.pixel_to_temperature(pixel, self.bounds)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn refit_temp_scale(&mut self) -> GraphResult<()> {
        let (visible_start, visible_end) = self.time_scale.visible_range();
        let windowed = visible_window(&self.series, visible_start, visible_end);
        self.temp_scale = TempScale::from_samples_tuned(&windowed, self.temp_tuning)?;
        Ok(())
    }
}
