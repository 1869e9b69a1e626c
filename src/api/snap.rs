use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::Sample;
use crate::render::Renderer;

use super::GraphEngine;

/// Nearest visible sample resolved from a pointer x position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSnap {
    pub x: f64,
    pub y: f64,
    pub time: f64,
    pub temperature: f64,
}

impl<R: Renderer> GraphEngine<R> {
    /// Resolves the visible sample whose mapped x coordinate is closest to
    /// `pointer_x`.
    ///
    /// Only the two samples bracketing the pointer time are candidates, so
    /// resolution cost is one binary search regardless of window size.
    #[must_use]
    pub fn nearest_sample(&self, pointer_x: f64) -> Option<SampleSnap> {
        if !pointer_x.is_finite() {
            return None;
        }
        let samples = self.visible_samples();
        let pointer_time = self.map_pixel_to_time(pointer_x).ok()?;

        let upper = samples.partition_point(|sample| sample.time < pointer_time);
        let mut candidates: SmallVec<[(OrderedFloat<f64>, SampleSnap); 2]> = SmallVec::new();
        if upper > 0 {
            if let Some(candidate) = self.snap_candidate(samples[upper - 1], pointer_x) {
                candidates.push(candidate);
            }
        }
        if let Some(sample) = samples.get(upper) {
            if let Some(candidate) = self.snap_candidate(*sample, pointer_x) {
                candidates.push(candidate);
            }
        }

        candidates
            .into_iter()
            .min_by_key(|item| item.0)
            .map(|(_, snap)| snap)
    }

    fn snap_candidate(
        &self,
        sample: Sample,
        pointer_x: f64,
    ) -> Option<(OrderedFloat<f64>, SampleSnap)> {
        let x_px = self.map_time_to_pixel(sample.time).ok()?;
        let y_px = self.map_temperature_to_pixel(sample.temperature).ok()?;
        let dist = OrderedFloat((x_px - pointer_x).abs());
        Some((
            dist,
            SampleSnap {
                x: x_px,
                y: y_px,
                time: sample.time,
                temperature: sample.temperature,
            },
        ))
    }
}
