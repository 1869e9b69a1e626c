use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{PixelBounds, Sample};
use crate::error::{GraphError, GraphResult};
use crate::render::Renderer;

use super::GraphEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub bounds: PixelBounds,
    pub time_full_range: (f64, f64),
    pub time_visible_range: (f64, f64),
    pub temperature_domain: (f64, f64),
    pub sunrise_time: f64,
    pub sunset_time: f64,
    pub utc_offset_seconds: i32,
    pub samples: Vec<Sample>,
    pub series_metadata: IndexMap<String, String>,
}

impl<R: Renderer> GraphEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            bounds: self.bounds,
            time_full_range: self.time_scale.full_range(),
            time_visible_range: self.time_scale.visible_range(),
            temperature_domain: self.temp_scale.domain(),
            sunrise_time: self.sun.sunrise(),
            sunset_time: self.sun.sunset(),
            utc_offset_seconds: self.series.utc_offset_seconds(),
            samples: self.series.samples().to_vec(),
            series_metadata: self.series.metadata().clone(),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based regression
    /// checks.
    pub fn snapshot_json_pretty(&self) -> GraphResult<String> {
        let snapshot = self.snapshot();
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| GraphError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
