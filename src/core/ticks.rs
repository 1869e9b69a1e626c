use crate::core::instant::{floor_local_day, local_day_name, SECONDS_PER_DAY, SECONDS_PER_HOUR};
use crate::core::temp_scale::TempScale;
use crate::core::time_scale::TimeScale;
use crate::core::types::PixelBounds;
use crate::error::GraphResult;

pub(crate) const MIN_VERTICAL_TICK_SPACING_PX: f64 = 25.0;
pub(crate) const MIN_HORIZONTAL_TICK_SPACING_PX: f64 = 33.0;

const TEMP_STEPS_CELSIUS: [f64; 3] = [1.0, 2.0, 5.0];
const HOUR_STEPS: [i64; 2] = [2, 6];

/// One horizontal temperature gridline and its label text.
#[derive(Debug, Clone, PartialEq)]
pub struct TempTick {
    pub temperature: f64,
    pub label: String,
}

/// One vertical gridline at a local midnight, labelled with the starting
/// day's name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTick {
    pub time: f64,
    pub label: &'static str,
}

/// One vertical gridline at a whole local hour, labelled `HH:00`.
#[derive(Debug, Clone, PartialEq)]
pub struct HourTick {
    pub time: f64,
    pub label: String,
}

/// Plans horizontal gridlines at whole-degree multiples of an adaptive step.
///
/// Ticks run from the first multiple at or above the domain minimum up to,
/// but excluding, the domain maximum.
pub fn temperature_ticks(
    temp_scale: TempScale,
    bounds: PixelBounds,
) -> GraphResult<Vec<TempTick>> {
    let step = temperature_step(temp_scale.pixels_per_degree(bounds)?);
    let (domain_min, domain_max) = temp_scale.domain();

    let mut ticks = Vec::new();
    let mut index = (domain_min / step).ceil() as i64;
    loop {
        let value = index as f64 * step;
        if value >= domain_max {
            break;
        }
        ticks.push(TempTick {
            temperature: value,
            label: format!("{value:.0}°C"),
        });
        index += 1;
    }
    Ok(ticks)
}

/// Plans vertical gridlines at every local-midnight boundary strictly inside
/// the visible window. A boundary coinciding exactly with the window start is
/// skipped.
pub fn day_ticks(time_scale: TimeScale, utc_offset_seconds: i32) -> GraphResult<Vec<DayTick>> {
    let (min_x, max_x) = time_scale.visible_range();

    let mut ticks = Vec::new();
    let mut boundary = floor_local_day(min_x, utc_offset_seconds) + SECONDS_PER_DAY;
    while boundary < max_x {
        ticks.push(DayTick {
            time: boundary,
            label: local_day_name(boundary, utc_offset_seconds)?,
        });
        boundary += SECONDS_PER_DAY;
    }
    Ok(ticks)
}

/// Plans vertical gridlines at whole-hour multiples of an adaptive step.
///
/// Unlike the temperature axis there is no fallback step: when even the
/// coarsest step would crowd the axis, no hour gridlines are drawn.
pub fn hour_ticks(
    time_scale: TimeScale,
    bounds: PixelBounds,
    utc_offset_seconds: i32,
) -> GraphResult<Vec<HourTick>> {
    let Some(step) = hour_step(time_scale.pixels_per_hour(bounds)?) else {
        return Ok(Vec::new());
    };

    let (min_x, max_x) = time_scale.visible_range();
    let day_start = floor_local_day(min_x, utc_offset_seconds);
    let start_hour = (min_x - day_start) / SECONDS_PER_HOUR;

    // First line sits at the smallest step multiple strictly past the start hour.
    let mut hour = ((start_hour / step as f64).floor() as i64 + 1) * step;
    let mut ticks = Vec::new();
    loop {
        let time = day_start + hour as f64 * SECONDS_PER_HOUR;
        if time >= max_x {
            break;
        }
        ticks.push(HourTick {
            time,
            label: format!("{:02}:00", hour.rem_euclid(24)),
        });
        hour += step;
    }
    Ok(ticks)
}

fn temperature_step(pixels_per_degree: f64) -> f64 {
    TEMP_STEPS_CELSIUS
        .iter()
        .copied()
        .find(|step| step * pixels_per_degree >= MIN_VERTICAL_TICK_SPACING_PX)
        // The coarsest step applies even when it cannot clear the minimum spacing.
        .unwrap_or(5.0)
}

fn hour_step(pixels_per_hour: f64) -> Option<i64> {
    HOUR_STEPS
        .iter()
        .copied()
        .find(|step| *step as f64 * pixels_per_hour >= MIN_HORIZONTAL_TICK_SPACING_PX)
}

#[cfg(test)]
mod tests {
    use super::{
        day_ticks, hour_step, hour_ticks, temperature_step, temperature_ticks, SECONDS_PER_DAY,
    };
    use crate::core::temp_scale::TempScale;
    use crate::core::time_scale::TimeScale;
    use crate::core::types::PixelBounds;

    #[test]
    fn temperature_step_prefers_smallest_legible_step() {
        assert_eq!(temperature_step(30.0), 1.0);
        assert_eq!(temperature_step(13.0), 2.0);
        assert_eq!(temperature_step(10.0), 5.0);
    }

    #[test]
    fn temperature_step_falls_back_to_coarsest_step() {
        assert_eq!(temperature_step(2.0), 5.0);
    }

    #[test]
    fn hour_step_selection_matches_density() {
        assert_eq!(hour_step(20.0), Some(2));
        assert_eq!(hour_step(6.0), Some(6));
        assert_eq!(hour_step(4.0), None);
    }

    #[test]
    fn temperature_ticks_cover_step_multiples_inside_domain() {
        let scale = TempScale::new(8.0, 32.0).expect("scale");
        // 240px of plot height over 24 degrees: 10px per degree, step 5.
        let bounds = PixelBounds::with_default_margins(400, 270);

        let ticks = temperature_ticks(scale, bounds).expect("ticks");
        let values: Vec<f64> = ticks.iter().map(|tick| tick.temperature).collect();
        assert_eq!(values, vec![10.0, 15.0, 20.0, 25.0, 30.0]);
        assert_eq!(ticks[0].label, "10°C");
        assert_eq!(ticks[4].label, "30°C");
    }

    #[test]
    fn day_ticks_skip_boundary_coinciding_with_window_start() {
        let scale = TimeScale::new(0.0, 3.0 * SECONDS_PER_DAY).expect("scale");

        let ticks = day_ticks(scale, 0).expect("ticks");
        assert_eq!(ticks.len(), 2);
        assert!((ticks[0].time - SECONDS_PER_DAY).abs() <= 1e-9);
        assert!((ticks[1].time - 2.0 * SECONDS_PER_DAY).abs() <= 1e-9);
        // The unix epoch fell on a Thursday.
        assert_eq!(ticks[0].label, "Fri");
        assert_eq!(ticks[1].label, "Sat");
    }

    #[test]
    fn day_ticks_respect_fixed_utc_offset() {
        let scale = TimeScale::new(0.0, SECONDS_PER_DAY).expect("scale");

        let ticks = day_ticks(scale, 7_200).expect("ticks");
        assert_eq!(ticks.len(), 1);
        assert!((ticks[0].time - 79_200.0).abs() <= 1e-9);
        assert_eq!(ticks[0].label, "Fri");
    }

    #[test]
    fn hour_ticks_start_strictly_after_window_start() {
        let scale = TimeScale::new(0.0, SECONDS_PER_DAY).expect("scale");
        // 480px of plot width over 24 hours: 20px per hour, step 2.
        let bounds = PixelBounds::with_default_margins(530, 150);

        let ticks = hour_ticks(scale, bounds, 0).expect("ticks");
        assert_eq!(ticks.len(), 11);
        assert!((ticks[0].time - 7_200.0).abs() <= 1e-9);
        assert_eq!(ticks[0].label, "02:00");
        assert_eq!(ticks[10].label, "22:00");
    }

    #[test]
    fn hour_ticks_wrap_labels_across_midnight() {
        let scale = TimeScale::new(43_200.0, 129_600.0).expect("scale");
        // 144px of plot width over 24 hours: 6px per hour, step 6.
        let bounds = PixelBounds::with_default_margins(194, 150);

        let ticks = hour_ticks(scale, bounds, 0).expect("ticks");
        let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
        assert_eq!(labels, vec!["18:00", "00:00", "06:00"]);
    }

    #[test]
    fn hour_ticks_are_absent_when_even_six_hours_is_too_dense() {
        let scale = TimeScale::new(0.0, SECONDS_PER_DAY).expect("scale");
        // 96px of plot width over 24 hours: 4px per hour, below the minimum.
        let bounds = PixelBounds::with_default_margins(146, 150);

        let ticks = hour_ticks(scale, bounds, 0).expect("ticks");
        assert!(ticks.is_empty());
    }
}
