use serde::{Deserialize, Serialize};

use crate::core::instant::SECONDS_PER_DAY;
use crate::core::time_scale::TimeScale;
use crate::error::{GraphError, GraphResult};

/// Sunrise and sunset instants for one reference day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    sunrise: f64,
    sunset: f64,
}

impl SunTimes {
    /// Validates that the pair describes a single reference day: sunrise
    /// precedes sunset and the daylight portion is shorter than a full day.
    pub fn new(sunrise: f64, sunset: f64) -> GraphResult<Self> {
        if !sunrise.is_finite() || !sunset.is_finite() {
            return Err(GraphError::InvalidData(
                "sun times must be finite".to_owned(),
            ));
        }
        if sunrise >= sunset {
            return Err(GraphError::InvalidData(
                "sunrise must precede sunset".to_owned(),
            ));
        }
        if sunset - sunrise >= SECONDS_PER_DAY {
            return Err(GraphError::InvalidData(
                "daylight must be shorter than one day".to_owned(),
            ));
        }

        Ok(Self { sunrise, sunset })
    }

    #[must_use]
    pub fn sunrise(self) -> f64 {
        self.sunrise
    }

    #[must_use]
    pub fn sunset(self) -> f64 {
        self.sunset
    }
}

/// One contiguous day- or night-coloured interval of the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadeBand {
    pub start: f64,
    pub end: f64,
    pub is_day: bool,
}

/// Tiles the visible window with alternating day and night bands.
///
/// The reference sun times are shifted by whole day-lengths to land near the
/// window start, then band edges leapfrog forward one day-length at a time.
/// The result covers exactly the visible window: bands are non-empty,
/// contiguous, strictly alternating, and each is shorter than one day.
#[must_use]
pub fn shade_bands(sun: SunTimes, time_scale: TimeScale) -> Vec<ShadeBand> {
    let (min_x, max_x) = time_scale.visible_range();

    let day_offset = ((min_x - sun.sunrise) / SECONDS_PER_DAY).floor();
    let mut sunrise = sun.sunrise + day_offset * SECONDS_PER_DAY;
    let mut sunset = sun.sunset + day_offset * SECONDS_PER_DAY;
    let mut is_day = sunrise <= min_x && min_x < sunset;

    // Move any sun event at or before the window start one day forward so
    // both events bracket the start from the right.
    if sunrise <= min_x {
        sunrise += SECONDS_PER_DAY;
    }
    if sunset <= min_x {
        sunset += SECONDS_PER_DAY;
    }

    let mut start = sunrise.min(sunset);
    let mut end = sunrise.max(sunset);

    let mut bands = Vec::new();
    if start >= max_x {
        bands.push(ShadeBand {
            start: min_x,
            end: max_x,
            is_day,
        });
        return bands;
    }

    bands.push(ShadeBand {
        start: min_x,
        end: start,
        is_day,
    });
    is_day = !is_day;
    while end < max_x {
        bands.push(ShadeBand { start, end, is_day });
        is_day = !is_day;
        (start, end) = (end, start + SECONDS_PER_DAY);
    }
    bands.push(ShadeBand {
        start,
        end: max_x,
        is_day,
    });
    bands
}
