use crate::core::series::SampleSeries;
use crate::core::types::Sample;

/// Returns the samples plotted for a visible window.
///
/// Observations strictly inside the window are kept as-is. Both window edges
/// are always covered by synthesized boundary samples interpolated from the
/// series, so the result starts exactly at `start` and ends exactly at `end`.
#[must_use]
pub fn visible_window(series: &SampleSeries, start: f64, end: f64) -> Vec<Sample> {
    let (min_t, max_t) = if start <= end {
        (start, end)
    } else {
        (end, start)
    };

    let mut windowed = Vec::with_capacity(series.len() + 2);
    windowed.push(Sample::new(min_t, series.sample_at(min_t)));
    windowed.extend(
        series
            .samples()
            .iter()
            .copied()
            .filter(|sample| sample.time > min_t && sample.time < max_t),
    );
    windowed.push(Sample::new(max_t, series.sample_at(max_t)));
    windowed
}
