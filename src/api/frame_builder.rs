use crate::core::{
    PixelBounds, SampleSeries, SunTimes, TempScale, TimeScale, day_ticks, hour_ticks,
    project_curve_segments, project_sample_markers, shade_bands, temperature_ticks, visible_window,
};
use crate::error::GraphResult;
use crate::render::{
    CurvePrimitive, LinePrimitive, MarkerPrimitive, RectPrimitive, RenderFrame, Renderer,
    TextHAlign, TextPrimitive, TextVAlign,
};

use super::{GraphEngine, GraphStyle};

/// Vertical inset of day boundary lines below the plot top edge, leaving room
/// for the day-name label beside the line.
pub const DAY_LINE_TOP_INSET_PX: f64 = 12.0;
/// Gap between an axis line and its label anchor.
pub const LABEL_PAD_PX: f64 = 4.0;

/// Materializes backend-agnostic primitives for one draw pass.
///
/// This keeps geometry computation deterministic and centralized in the API
/// layer while renderer backends only execute drawing commands. Primitive
/// group order inside the frame is the draw order: shade rects, then axis
/// lines and labels, then curve segments, then sample markers.
pub fn build_frame(
    series: &SampleSeries,
    sun: SunTimes,
    time_scale: TimeScale,
    temp_scale: TempScale,
    bounds: PixelBounds,
    style: GraphStyle,
) -> GraphResult<RenderFrame> {
    style.validate()?;
    let mut frame = RenderFrame::new(bounds);

    let plot_left = bounds.plot_left();
    let plot_right = bounds.plot_right();
    let plot_top = bounds.plot_top();
    let plot_bottom = bounds.plot_bottom();

    if style.show_shade_bands {
        for band in shade_bands(sun, time_scale) {
            let band_left = time_scale.time_to_pixel(band.start, bounds)?;
            let band_right = time_scale.time_to_pixel(band.end, bounds)?;
            let fill = if band.is_day {
                style.day_band_color
            } else {
                style.night_band_color
            };
            frame = frame.with_rect(RectPrimitive::new(
                band_left,
                plot_top,
                band_right - band_left,
                plot_bottom - plot_top,
                fill,
            ));
        }
    }

    for tick in temperature_ticks(temp_scale, bounds)? {
        let line_y = temp_scale.temperature_to_pixel(tick.temperature, bounds)?;
        frame = frame
            .with_line(LinePrimitive::new(
                plot_left,
                line_y,
                plot_right,
                line_y,
                style.grid_line_width,
                style.grid_line_color,
            ))
            .with_text(TextPrimitive::new(
                tick.label,
                plot_left - LABEL_PAD_PX,
                line_y,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Right,
                TextVAlign::Middle,
            ));
    }

    for tick in day_ticks(time_scale, series.utc_offset_seconds())? {
        let line_x = time_scale.time_to_pixel(tick.time, bounds)?;
        frame = frame
            .with_line(LinePrimitive::new(
                line_x,
                plot_top + DAY_LINE_TOP_INSET_PX,
                line_x,
                plot_bottom,
                style.grid_line_width,
                style.grid_line_color,
            ))
            .with_text(TextPrimitive::new(
                tick.label,
                line_x + LABEL_PAD_PX,
                plot_top,
                style.day_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Left,
                TextVAlign::Bottom,
            ));
    }

    for tick in hour_ticks(time_scale, bounds, series.utc_offset_seconds())? {
        let line_x = time_scale.time_to_pixel(tick.time, bounds)?;
        frame = frame
            .with_line(LinePrimitive::new(
                line_x,
                plot_top,
                line_x,
                plot_bottom,
                style.grid_line_width,
                style.grid_line_color,
            ))
            .with_text(TextPrimitive::new(
                tick.label,
                line_x,
                plot_top + LABEL_PAD_PX,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
                TextVAlign::Top,
            ));
    }

    let (visible_start, visible_end) = time_scale.visible_range();
    let samples = visible_window(series, visible_start, visible_end);

    for segment in project_curve_segments(&samples, time_scale, temp_scale, bounds)? {
        frame = frame.with_curve(CurvePrimitive {
            x0: segment.x0,
            y0: segment.y0,
            cx1: segment.cx1,
            cy1: segment.cy1,
            cx2: segment.cx2,
            cy2: segment.cy2,
            x1: segment.x1,
            y1: segment.y1,
            stroke_width: style.curve_stroke_width,
            color: style.curve_color,
        });
    }

    if style.show_sample_markers {
        for marker in project_sample_markers(&samples, time_scale, temp_scale, bounds)? {
            frame = frame.with_marker(MarkerPrimitive::new(
                marker.x,
                marker.y,
                style.marker_size_px,
                style.marker_color,
            ));
        }
    }

    frame.validate()?;
    Ok(frame)
}

impl<R: Renderer> GraphEngine<R> {
    /// Builds the primitive frame for the current engine state without
    /// drawing it, for headless assertions on geometry.
    pub fn build_render_frame(&self) -> GraphResult<RenderFrame> {
        build_frame(
            &self.series,
            self.sun,
            self.time_scale,
            self.temp_scale,
            self.bounds,
            self.style,
        )
    }
}
