use thermograph::core::{PixelBounds, Sample, SampleSeries, SunTimes};
use thermograph::render::NullRenderer;
use thermograph::{GraphEngine, GraphEngineConfig, GraphError};

const HOUR: f64 = 3_600.0;

fn two_day_series() -> SampleSeries {
    let samples: Vec<Sample> = (0..=48)
        .map(|hour| Sample::new(f64::from(hour) * HOUR, 10.0 + f64::from(hour % 24)))
        .collect();
    SampleSeries::new(samples, 0).expect("series")
}

fn short_series() -> SampleSeries {
    let samples: Vec<Sample> = (0..=6)
        .map(|hour| Sample::new(f64::from(hour) * HOUR, 10.0 + f64::from(hour)))
        .collect();
    SampleSeries::new(samples, 0).expect("series")
}

fn fixture_config() -> GraphEngineConfig {
    let bounds = PixelBounds::with_default_margins(850, 430);
    let sun = SunTimes::new(21_600.0, 64_800.0).expect("sun times");
    GraphEngineConfig::new(bounds, sun)
}

fn fixture_engine() -> GraphEngine<NullRenderer> {
    GraphEngine::new(NullRenderer::default(), two_day_series(), fixture_config()).expect("engine")
}

#[test]
fn construction_spans_the_full_series_and_fits_the_temperature_domain() {
    let engine = fixture_engine();

    assert_eq!(engine.full_time_range(), (0.0, 48.0 * HOUR));
    assert_eq!(engine.visible_time_range(), (0.0, 48.0 * HOUR));

    // observed 10..33, midpoint 21.5, both extremes pushed out by factor 1.2
    let (low, high) = engine.temperature_domain();
    assert!((low - 7.7).abs() <= 1e-9);
    assert!((high - 35.3).abs() <= 1e-9);
}

#[test]
fn construction_rejects_degenerate_bounds() {
    let sun = SunTimes::new(21_600.0, 64_800.0).expect("sun times");
    let config = GraphEngineConfig::new(PixelBounds::with_default_margins(0, 430), sun);

    let result = GraphEngine::new(NullRenderer::default(), two_day_series(), config);
    assert!(matches!(result, Err(GraphError::InvalidBounds { .. })));
}

#[test]
fn render_flow_populates_every_primitive_group() {
    let mut engine = fixture_engine();
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    // night, day, night, day, night across the 48h span
    assert_eq!(renderer.last_rect_count, 5);
    assert_eq!(renderer.last_curve_count, 48);
    assert_eq!(renderer.last_marker_count, 49);
    // every gridline carries exactly one label
    assert!(renderer.last_line_count > 0);
    assert_eq!(renderer.last_line_count, renderer.last_text_count);
}

#[test]
fn rescale_refits_the_temperature_domain_to_the_window() {
    let mut engine = fixture_engine();
    engine.rescale(10.0 * HOUR, 12.0 * HOUR).expect("rescale");

    assert_eq!(engine.visible_time_range(), (10.0 * HOUR, 12.0 * HOUR));

    // windowed temps 20..22, midpoint 21, expanded to 19.8..22.2
    let (low, high) = engine.temperature_domain();
    assert!((low - 19.8).abs() <= 1e-9);
    assert!((high - 22.2).abs() <= 1e-9);

    let frame = engine.build_render_frame().expect("frame");
    assert_eq!(frame.curves.len(), 2);
    assert_eq!(frame.markers.len(), 3);
}

#[test]
fn rescale_reorders_a_swapped_window() {
    let mut engine = fixture_engine();
    engine.rescale(12.0 * HOUR, 10.0 * HOUR).expect("rescale");
    assert_eq!(engine.visible_time_range(), (10.0 * HOUR, 12.0 * HOUR));
}

#[test]
fn reset_restores_the_full_span_and_its_domain() {
    let mut engine = fixture_engine();
    engine.rescale(10.0 * HOUR, 12.0 * HOUR).expect("rescale");
    engine.reset_to_full_span().expect("reset");

    assert_eq!(engine.visible_time_range(), (0.0, 48.0 * HOUR));
    let (low, high) = engine.temperature_domain();
    assert!((low - 7.7).abs() <= 1e-9);
    assert!((high - 35.3).abs() <= 1e-9);
}

#[test]
fn resize_keeps_window_and_domain_but_remaps_pixels() {
    let mut engine = fixture_engine();
    let domain_before = engine.temperature_domain();

    engine
        .resize(PixelBounds::with_default_margins(1000, 500))
        .expect("resize");

    assert_eq!(engine.visible_time_range(), (0.0, 48.0 * HOUR));
    assert_eq!(engine.temperature_domain(), domain_before);

    let left = engine.map_time_to_pixel(0.0).expect("left edge");
    let right = engine.map_time_to_pixel(48.0 * HOUR).expect("right edge");
    assert!((left - 40.0).abs() <= 1e-9);
    assert!((right - 990.0).abs() <= 1e-9);

    assert!(engine
        .resize(PixelBounds::with_default_margins(0, 500))
        .is_err());
}

#[test]
fn set_series_reinitializes_the_window_to_the_new_span() {
    let mut engine = fixture_engine();
    engine.rescale(10.0 * HOUR, 12.0 * HOUR).expect("rescale");

    engine.set_series(short_series()).expect("set series");

    assert_eq!(engine.full_time_range(), (0.0, 6.0 * HOUR));
    assert_eq!(engine.visible_time_range(), (0.0, 6.0 * HOUR));

    // observed 10..16, midpoint 13, expanded to 9.4..16.6
    let (low, high) = engine.temperature_domain();
    assert!((low - 9.4).abs() <= 1e-9);
    assert!((high - 16.6).abs() <= 1e-9);
}

#[test]
fn mapping_round_trips_through_the_engine() {
    let engine = fixture_engine();

    let time = 17.0 * HOUR;
    let pixel = engine.map_time_to_pixel(time).expect("to pixel");
    let back = engine.map_pixel_to_time(pixel).expect("to time");
    assert!((back - time).abs() <= 1e-9);

    let pixel = engine.map_temperature_to_pixel(21.0).expect("to pixel");
    let back = engine.map_pixel_to_temperature(pixel).expect("to temp");
    assert!((back - 21.0).abs() <= 1e-9);
}

#[test]
fn visible_samples_synthesize_window_boundaries() {
    let mut engine = fixture_engine();
    engine.rescale(10.5 * HOUR, 11.5 * HOUR).expect("rescale");

    let samples = engine.visible_samples();
    assert_eq!(samples.len(), 3);
    assert!((samples[0].time - 10.5 * HOUR).abs() <= 1e-9);
    assert!((samples[0].temperature - 20.5).abs() <= 1e-9);
    assert!((samples[2].time - 11.5 * HOUR).abs() <= 1e-9);
    assert!((samples[2].temperature - 21.5).abs() <= 1e-9);
}

#[test]
fn style_toggles_suppress_their_primitive_groups() {
    let mut style = fixture_config().style;
    style.show_shade_bands = false;
    style.show_sample_markers = false;

    let config = fixture_config().with_style(style);
    let engine =
        GraphEngine::new(NullRenderer::default(), two_day_series(), config).expect("engine");

    let frame = engine.build_render_frame().expect("frame");
    assert!(frame.rects.is_empty());
    assert!(frame.markers.is_empty());
    assert_eq!(frame.curves.len(), 48);
}

#[test]
fn set_style_rejects_invalid_styles_and_keeps_the_current_one() {
    let mut engine = fixture_engine();
    let before = engine.style();

    let mut bad = before;
    bad.curve_stroke_width = 0.0;
    assert!(engine.set_style(bad).is_err());
    assert_eq!(engine.style(), before);
}

#[test]
fn nearest_sample_snaps_to_the_closest_visible_sample() {
    let engine = fixture_engine();

    // hour 1 maps near x = 56.7; a pointer at 60 is closer to it than hour 2
    let snap = engine.nearest_sample(60.0).expect("snap");
    assert!((snap.time - HOUR).abs() <= 1e-9);
    assert!((snap.temperature - 11.0).abs() <= 1e-9);

    let expected_x = engine.map_time_to_pixel(HOUR).expect("x");
    let expected_y = engine.map_temperature_to_pixel(11.0).expect("y");
    assert!((snap.x - expected_x).abs() <= 1e-9);
    assert!((snap.y - expected_y).abs() <= 1e-9);

    assert!(engine.nearest_sample(f64::NAN).is_none());
}
