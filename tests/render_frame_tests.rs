use thermograph::core::{Margins, PixelBounds};
use thermograph::render::{
    Color, CurvePrimitive, LinePrimitive, MarkerPrimitive, NullRenderer, RectPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive, TextVAlign,
};

fn bounds() -> PixelBounds {
    PixelBounds::with_default_margins(850, 430)
}

fn grey() -> Color {
    Color::rgb(0.5, 0.5, 0.5)
}

fn curve_primitive() -> CurvePrimitive {
    CurvePrimitive {
        x0: 40.0,
        y0: 100.0,
        cx1: 60.0,
        cy1: 90.0,
        cx2: 80.0,
        cy2: 110.0,
        x1: 100.0,
        y1: 105.0,
        stroke_width: 2.0,
        color: grey(),
    }
}

#[test]
fn empty_frame_validates_and_reports_empty() {
    let frame = RenderFrame::new(bounds());
    frame.validate().expect("empty frame");
    assert!(frame.is_empty());
}

#[test]
fn populated_frame_validates() {
    let frame = RenderFrame::new(bounds())
        .with_rect(RectPrimitive::new(40.0, 20.0, 300.0, 400.0, grey()))
        .with_line(LinePrimitive::new(40.0, 220.0, 840.0, 220.0, 1.0, grey()))
        .with_text(TextPrimitive::new(
            "20\u{b0}",
            36.0,
            220.0,
            11.0,
            grey(),
            TextHAlign::Right,
            TextVAlign::Middle,
        ))
        .with_curve(curve_primitive())
        .with_marker(MarkerPrimitive::new(40.0, 100.0, 4.0, grey()));

    frame.validate().expect("populated frame");
    assert!(!frame.is_empty());
}

#[test]
fn non_finite_line_coordinates_are_rejected() {
    let frame = RenderFrame::new(bounds()).with_line(LinePrimitive::new(
        40.0,
        f64::NAN,
        840.0,
        220.0,
        1.0,
        grey(),
    ));
    assert!(frame.validate().is_err());
}

#[test]
fn zero_extent_rect_is_rejected() {
    let flat = RectPrimitive::new(40.0, 20.0, 120.0, 0.0, grey());
    assert!(flat.validate().is_err());

    let negative = RectPrimitive::new(40.0, 20.0, -5.0, 400.0, grey());
    assert!(negative.validate().is_err());
}

#[test]
fn zero_stroke_width_is_rejected() {
    let line = LinePrimitive::new(40.0, 220.0, 840.0, 220.0, 0.0, grey());
    assert!(line.validate().is_err());

    let mut curve = curve_primitive();
    curve.stroke_width = -1.0;
    assert!(curve.validate().is_err());
}

#[test]
fn empty_label_text_is_rejected() {
    let text = TextPrimitive::new(
        "",
        36.0,
        220.0,
        11.0,
        grey(),
        TextHAlign::Right,
        TextVAlign::Middle,
    );
    assert!(text.validate().is_err());
}

#[test]
fn out_of_range_color_channel_is_rejected() {
    let marker = MarkerPrimitive::new(40.0, 100.0, 4.0, Color::rgba(0.2, 0.2, 0.2, 1.5));
    assert!(marker.validate().is_err());

    assert!(Color::rgb(-0.1, 0.0, 0.0).validate().is_err());
    assert!(Color::rgb(0.1, 0.2, 0.3).validate().is_ok());
}

#[test]
fn frame_with_degenerate_bounds_is_rejected() {
    let no_width = RenderFrame::new(PixelBounds::with_default_margins(0, 430));
    assert!(no_width.validate().is_err());

    // margins swallow the whole canvas
    let swallowed = RenderFrame::new(PixelBounds::new(
        40,
        430,
        Margins::new(20.0, 40.0, 10.0, 10.0),
    ));
    assert!(swallowed.validate().is_err());
}

#[test]
fn null_renderer_records_group_counts() {
    let frame = RenderFrame::new(bounds())
        .with_rect(RectPrimitive::new(40.0, 20.0, 300.0, 400.0, grey()))
        .with_rect(RectPrimitive::new(340.0, 20.0, 300.0, 400.0, grey()))
        .with_line(LinePrimitive::new(40.0, 220.0, 840.0, 220.0, 1.0, grey()))
        .with_text(TextPrimitive::new(
            "12:00",
            440.0,
            24.0,
            11.0,
            grey(),
            TextHAlign::Center,
            TextVAlign::Top,
        ))
        .with_curve(curve_primitive())
        .with_marker(MarkerPrimitive::new(40.0, 100.0, 4.0, grey()))
        .with_marker(MarkerPrimitive::new(100.0, 105.0, 4.0, grey()));

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");

    assert_eq!(renderer.last_rect_count, 2);
    assert_eq!(renderer.last_line_count, 1);
    assert_eq!(renderer.last_text_count, 1);
    assert_eq!(renderer.last_curve_count, 1);
    assert_eq!(renderer.last_marker_count, 2);
}

#[test]
fn null_renderer_leaves_counts_untouched_on_invalid_frames() {
    let frame = RenderFrame::new(bounds()).with_marker(MarkerPrimitive::new(
        f64::INFINITY,
        100.0,
        4.0,
        grey(),
    ));

    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.last_marker_count, 0);
}
