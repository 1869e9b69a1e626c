use std::cmp::Ordering;

use indexmap::IndexMap;
use tracing::warn;

use crate::core::types::Sample;
use crate::error::{GraphError, GraphResult};

const MAX_UTC_OFFSET_SECONDS: i32 = 86_400;

/// Canonical, time-ordered temperature observations plus the fixed UTC offset
/// of the station that recorded them.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    samples: Vec<Sample>,
    utc_offset_seconds: i32,
    metadata: IndexMap<String, String>,
}

impl SampleSeries {
    /// Builds a series from raw observations.
    ///
    /// Non-finite samples are dropped and duplicate instants collapse to the
    /// last occurrence, mirroring how feeds overwrite corrected readings.
    pub fn new(samples: Vec<Sample>, utc_offset_seconds: i32) -> GraphResult<Self> {
        if utc_offset_seconds.abs() >= MAX_UTC_OFFSET_SECONDS {
            return Err(GraphError::InvalidData(format!(
                "utc offset {utc_offset_seconds}s must stay within +/- 24 hours"
            )));
        }

        let samples = canonicalize_samples(samples);
        if samples.is_empty() {
            return Err(GraphError::InvalidData(
                "series requires at least one finite sample".to_owned(),
            ));
        }

        Ok(Self {
            samples,
            utc_offset_seconds,
            metadata: IndexMap::new(),
        })
    }

    /// Attaches descriptive key/value pairs (station name, source feed, units).
    /// Entries keep their insertion order in snapshots.
    #[must_use]
    pub fn with_metadata(mut self, metadata: IndexMap<String, String>) -> Self {
        self.metadata = metadata;
        self
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn utc_offset_seconds(&self) -> i32 {
        self.utc_offset_seconds
    }

    #[must_use]
    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.metadata
    }

    /// First and last observed instants.
    #[must_use]
    pub fn full_span(&self) -> (f64, f64) {
        (
            self.samples[0].time,
            self.samples[self.samples.len() - 1].time,
        )
    }

    /// Temperature at an arbitrary instant: linear between neighbouring
    /// observations, held flat outside the observed span.
    #[must_use]
    pub fn sample_at(&self, time: f64) -> f64 {
        let first = self.samples[0];
        let last = self.samples[self.samples.len() - 1];
        if time <= first.time {
            return first.temperature;
        }
        if time >= last.time {
            return last.temperature;
        }

        let upper = self.samples.partition_point(|sample| sample.time < time);
        let left = self.samples[upper - 1];
        let right = self.samples[upper];
        let fraction = (time - left.time) / (right.time - left.time);
        left.temperature + fraction * (right.temperature - left.temperature)
    }
}

fn canonicalize_samples(mut samples: Vec<Sample>) -> Vec<Sample> {
    let original_len = samples.len();
    samples.retain(|sample| sample.is_finite());
    samples.sort_by(|a, b| a.time.total_cmp(&b.time));

    let mut deduped: Vec<Sample> = Vec::with_capacity(samples.len());
    let mut duplicate_count = 0_usize;
    for sample in samples {
        if let Some(last) = deduped.last_mut() {
            if sample.time.total_cmp(&last.time) == Ordering::Equal {
                *last = sample;
                duplicate_count += 1;
                continue;
            }
        }
        deduped.push(sample);
    }

    let filtered_count = original_len.saturating_sub(deduped.len() + duplicate_count);
    if filtered_count > 0 || duplicate_count > 0 {
        warn!(
            filtered_count,
            duplicate_count,
            canonical_count = deduped.len(),
            "canonicalized samples on series construction"
        );
    }
    deduped
}
