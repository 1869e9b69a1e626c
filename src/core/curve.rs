use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::temp_scale::TempScale;
use crate::core::time_scale::TimeScale;
use crate::core::types::{PixelBounds, Sample};
use crate::error::GraphResult;

/// Projected cubic Bezier segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSegment {
    pub x0: f64,
    pub y0: f64,
    pub cx1: f64,
    pub cy1: f64,
    pub cx2: f64,
    pub cy2: f64,
    pub x1: f64,
    pub y1: f64,
}

/// Projected sample marker centre in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPoint {
    pub x: f64,
    pub y: f64,
}

/// Estimates one tangent slope per sample.
///
/// Interior samples that are strict local extrema get a zero slope so the
/// curve stays flat at peaks and troughs instead of overshooting. Other
/// interior samples use the secant slope between their neighbours; endpoints
/// use the one-sided secant to their single neighbour.
#[must_use]
pub fn estimate_slopes(samples: &[Sample]) -> Vec<f64> {
    if samples.len() < 2 {
        return vec![0.0; samples.len()];
    }

    let last = samples.len() - 1;
    let mut slopes = Vec::with_capacity(samples.len());
    slopes.push(secant(samples[0], samples[1]));
    for index in 1..last {
        let previous = samples[index - 1];
        let current = samples[index];
        let next = samples[index + 1];

        let is_peak =
            current.temperature > previous.temperature && current.temperature > next.temperature;
        let is_trough =
            current.temperature < previous.temperature && current.temperature < next.temperature;
        if is_peak || is_trough {
            slopes.push(0.0);
        } else {
            slopes.push(secant(previous, next));
        }
    }
    slopes.push(secant(samples[last - 1], samples[last]));
    slopes
}

/// Projects windowed samples into drawable cubic segments.
///
/// Control points sit at the one-third marks of each interval, which makes
/// the emitted Beziers exactly the Hermite spline through the samples with
/// the estimated tangents. The function is deterministic and side-effect
/// free so both rendering and tests consume the exact same geometry output.
pub fn project_curve_segments(
    samples: &[Sample],
    time_scale: TimeScale,
    temp_scale: TempScale,
    bounds: PixelBounds,
) -> GraphResult<Vec<CurveSegment>> {
    if samples.len() < 2 {
        return Ok(Vec::new());
    }

    let slopes = estimate_slopes(samples);

    // For large windows, optional parallel projection keeps API behavior
    // stable while reducing wall-clock projection time.
    #[cfg(feature = "parallel-projection")]
    {
        let projected: Vec<GraphResult<CurveSegment>> = (0..samples.len() - 1)
            .into_par_iter()
            .map(|index| {
                project_single_segment(
                    samples[index],
                    slopes[index],
                    samples[index + 1],
                    slopes[index + 1],
                    time_scale,
                    temp_scale,
                    bounds,
                )
            })
            .collect();
        projected.into_iter().collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        let mut out = Vec::with_capacity(samples.len() - 1);
        for index in 0..samples.len() - 1 {
            out.push(project_single_segment(
                samples[index],
                slopes[index],
                samples[index + 1],
                slopes[index + 1],
                time_scale,
                temp_scale,
                bounds,
            )?);
        }
        Ok(out)
    }
}

/// Projects each sample onto its marker centre.
pub fn project_sample_markers(
    samples: &[Sample],
    time_scale: TimeScale,
    temp_scale: TempScale,
    bounds: PixelBounds,
) -> GraphResult<Vec<MarkerPoint>> {
    let mut mapped = Vec::with_capacity(samples.len());
    for sample in samples {
        mapped.push(MarkerPoint {
            x: time_scale.time_to_pixel(sample.time, bounds)?,
            y: temp_scale.temperature_to_pixel(sample.temperature, bounds)?,
        });
    }
    Ok(mapped)
}

fn project_single_segment(
    start: Sample,
    start_slope: f64,
    end: Sample,
    end_slope: f64,
    time_scale: TimeScale,
    temp_scale: TempScale,
    bounds: PixelBounds,
) -> GraphResult<CurveSegment> {
    let third = (end.time - start.time) / 3.0;
    let control_one = Sample::new(start.time + third, start.temperature + third * start_slope);
    let control_two = Sample::new(end.time - third, end.temperature - third * end_slope);

    Ok(CurveSegment {
        x0: time_scale.time_to_pixel(start.time, bounds)?,
        y0: temp_scale.temperature_to_pixel(start.temperature, bounds)?,
        cx1: time_scale.time_to_pixel(control_one.time, bounds)?,
        cy1: temp_scale.temperature_to_pixel(control_one.temperature, bounds)?,
        cx2: time_scale.time_to_pixel(control_two.time, bounds)?,
        cy2: temp_scale.temperature_to_pixel(control_two.temperature, bounds)?,
        x1: time_scale.time_to_pixel(end.time, bounds)?,
        y1: temp_scale.temperature_to_pixel(end.temperature, bounds)?,
    })
}

fn secant(from: Sample, to: Sample) -> f64 {
    (to.temperature - from.temperature) / (to.time - from.time)
}
