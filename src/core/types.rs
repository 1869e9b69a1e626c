use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::instant::datetime_to_unix_seconds;

/// One temperature observation: a unix-seconds instant and degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: f64,
    pub temperature: f64,
}

impl Sample {
    #[must_use]
    pub fn new(time: f64, temperature: f64) -> Self {
        Self { time, temperature }
    }

    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>, temperature: f64) -> Self {
        Self {
            time: datetime_to_unix_seconds(time),
            temperature,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.time.is_finite() && self.temperature.is_finite()
    }
}

/// Blank space reserved around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Margins {
    #[must_use]
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.top, self.left, self.bottom, self.right]
            .iter()
            .all(|m| m.is_finite() && *m >= 0.0)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            left: 40.0,
            bottom: 10.0,
            right: 10.0,
        }
    }
}

/// Canvas size plus margins; the plot area is what remains inside them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelBounds {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
}

impl PixelBounds {
    #[must_use]
    pub fn new(width: u32, height: u32, margins: Margins) -> Self {
        Self {
            width,
            height,
            margins,
        }
    }

    #[must_use]
    pub fn with_default_margins(width: u32, height: u32) -> Self {
        Self::new(width, height, Margins::default())
    }

    #[must_use]
    pub fn plot_left(self) -> f64 {
        self.margins.left
    }

    #[must_use]
    pub fn plot_right(self) -> f64 {
        f64::from(self.width) - self.margins.right
    }

    #[must_use]
    pub fn plot_top(self) -> f64 {
        self.margins.top
    }

    #[must_use]
    pub fn plot_bottom(self) -> f64 {
        f64::from(self.height) - self.margins.bottom
    }

    #[must_use]
    pub fn plot_width(self) -> f64 {
        self.plot_right() - self.plot_left()
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.plot_bottom() - self.plot_top()
    }

    /// True when the margins leave a plot area with positive extent.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0
            && self.height > 0
            && self.margins.is_valid()
            && self.plot_width() > 0.0
            && self.plot_height() > 0.0
    }
}
