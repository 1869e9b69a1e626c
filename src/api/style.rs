use crate::error::{GraphError, GraphResult};
use crate::render::Color;

/// Style contract for one graph draw pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphStyle {
    /// Fill for daylight shade bands, expected translucent.
    pub day_band_color: Color,
    /// Fill for night shade bands, expected translucent.
    pub night_band_color: Color,
    pub grid_line_color: Color,
    pub axis_label_color: Color,
    pub curve_color: Color,
    pub marker_color: Color,
    pub grid_line_width: f64,
    pub curve_stroke_width: f64,
    pub marker_size_px: f64,
    pub axis_label_font_size_px: f64,
    pub day_label_font_size_px: f64,
    pub show_shade_bands: bool,
    pub show_sample_markers: bool,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            day_band_color: Color::rgba(0.99, 0.95, 0.74, 0.45),
            night_band_color: Color::rgba(0.32, 0.38, 0.52, 0.25),
            grid_line_color: Color::rgb(0.82, 0.84, 0.88),
            axis_label_color: Color::rgb(0.10, 0.12, 0.16),
            curve_color: Color::rgb(0.85, 0.23, 0.18),
            marker_color: Color::rgb(0.62, 0.13, 0.10),
            grid_line_width: 1.0,
            curve_stroke_width: 2.0,
            marker_size_px: 4.0,
            axis_label_font_size_px: 11.0,
            day_label_font_size_px: 12.0,
            show_shade_bands: true,
            show_sample_markers: true,
        }
    }
}

impl GraphStyle {
    pub fn validate(self) -> GraphResult<()> {
        self.day_band_color.validate()?;
        self.night_band_color.validate()?;
        self.grid_line_color.validate()?;
        self.axis_label_color.validate()?;
        self.curve_color.validate()?;
        self.marker_color.validate()?;

        for (name, value) in [
            ("grid line width", self.grid_line_width),
            ("curve stroke width", self.curve_stroke_width),
            ("marker size", self.marker_size_px),
            ("axis label font size", self.axis_label_font_size_px),
            ("day label font size", self.day_label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GraphError::InvalidData(format!(
                    "style {name} must be finite and > 0, got {value}"
                )));
            }
        }

        Ok(())
    }
}
