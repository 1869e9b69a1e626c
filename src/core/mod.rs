pub mod curve;
pub mod instant;
pub mod scale;
pub mod series;
pub mod shading;
pub mod temp_scale;
pub mod ticks;
pub mod time_scale;
pub mod types;
pub mod windowing;

pub use curve::{
    CurveSegment, MarkerPoint, estimate_slopes, project_curve_segments, project_sample_markers,
};
pub use scale::LinearScale;
pub use series::SampleSeries;
pub use shading::{ShadeBand, SunTimes, shade_bands};
pub use temp_scale::{TempScale, TempScaleTuning};
pub use ticks::{DayTick, HourTick, TempTick, day_ticks, hour_ticks, temperature_ticks};
pub use time_scale::{TimeScale, TimeScaleTuning};
pub use types::{Margins, PixelBounds, Sample};
pub use windowing::visible_window;
