use chart_core::{
    AxisEdge, CoordinateRange, FontSpec, HorizontalAxis, PixelRect, PixelSize, TextMeasurer, Tick,
    TickGenerator,
};

/// Deterministic measurer: 6 px per character wide, font-size tall.
struct FixedMeasurer;

impl TextMeasurer for FixedMeasurer {
    fn measure_string(&self, text: &str, font: &FontSpec) -> PixelSize {
        PixelSize::new(text.len() as f32 * 6.0, font.size)
    }
}

struct FixedTicks(Vec<Tick>);

impl TickGenerator for FixedTicks {
    fn get_visible_ticks(&self, _range: CoordinateRange) -> Vec<Tick> {
        self.0.clone()
    }
}

fn axis_with_range(min: f64, max: f64) -> HorizontalAxis {
    let mut axis = HorizontalAxis::new(AxisEdge::Bottom);
    axis.set_min(min);
    axis.set_max(max);
    axis
}

#[test]
fn test_get_pixel_linear_map() {
    let axis = axis_with_range(0.0, 100.0);
    let area = PixelRect::new(50.0, 250.0, 300.0, 100.0);

    assert_eq!(axis.get_pixel(0.0, area), 50.0);
    assert_eq!(axis.get_pixel(50.0, area), 150.0);
    assert_eq!(axis.get_pixel(100.0, area), 250.0);
}

#[test]
fn test_pixel_coordinate_round_trip() {
    let axis = axis_with_range(-40.0, 260.0);
    let area = PixelRect::new(10.0, 710.0, 400.0, 20.0);

    for position in [-40.0, -1.25, 0.0, 33.3, 259.9] {
        let pixel = axis.get_pixel(position, area);
        let restored = axis.get_coordinate(pixel, area);
        assert!(
            (restored - position).abs() < 1e-3,
            "round trip failed for {position}: got {restored}"
        );
    }
}

#[test]
fn test_distance_conversions_are_inverses() {
    let axis = axis_with_range(0.0, 100.0);
    let area = PixelRect::new(0.0, 200.0, 100.0, 0.0);

    // 100 units across 200 px: 2 px per unit
    assert_eq!(axis.get_pixel_distance(30.0, area), 60.0);
    assert_eq!(axis.get_coordinate_distance(60.0, area), 30.0);

    for distance in [0.5, 7.0, 123.0] {
        let there = axis.get_pixel_distance(distance, area);
        let back = axis.get_coordinate_distance(there, area);
        assert!((back - distance).abs() < 1e-9);
    }
}

#[test]
fn test_zero_span_range_is_not_finite() {
    let axis = axis_with_range(5.0, 5.0);
    let area = PixelRect::new(0.0, 100.0, 100.0, 0.0);
    assert!(!axis.get_pixel(7.0, area).is_finite());
}

#[test]
fn test_panel_rect_bottom_edge() {
    let axis = HorizontalAxis::new(AxisEdge::Bottom);
    let data_rect = PixelRect::new(0.0, 100.0, 200.0, 0.0);

    let panel = axis.get_panel_rect(data_rect, 40.0, 0.0);
    assert_eq!(panel, PixelRect::new(0.0, 100.0, 240.0, 200.0));

    // Stacked below another 40 px panel
    let stacked = axis.get_panel_rect(data_rect, 40.0, 40.0);
    assert_eq!(stacked, PixelRect::new(0.0, 100.0, 280.0, 240.0));
}

#[test]
fn test_panel_rect_top_edge() {
    let axis = HorizontalAxis::new(AxisEdge::Top);
    let data_rect = PixelRect::new(0.0, 100.0, 200.0, 50.0);

    let panel = axis.get_panel_rect(data_rect, 30.0, 0.0);
    assert_eq!(panel, PixelRect::new(0.0, 100.0, 50.0, 20.0));

    let stacked = axis.get_panel_rect(data_rect, 30.0, 10.0);
    assert_eq!(stacked, PixelRect::new(0.0, 100.0, 40.0, 10.0));
}

#[test]
fn test_measure_accounts_for_ticks_label_and_gap() {
    let mut axis = axis_with_range(0.0, 1.0).with_label("time");
    axis.tick_font = FontSpec::sized(12.0);

    let ticks = FixedTicks(vec![Tick::major(0.0, "0.00"), Tick::major(1.0, "1.00")]);

    // tallest tick label (12) + padding (10) + label height (16) + gap (15)
    let measured = axis.measure(&ticks, &FixedMeasurer);
    assert_eq!(measured, 12.0 + 10.0 + 16.0 + 15.0);
}

#[test]
fn test_measure_with_no_ticks() {
    let axis = axis_with_range(0.0, 1.0).with_label("time");
    let ticks = FixedTicks(Vec::new());

    // label height (16) + gap (15), no tick contribution
    let measured = axis.measure(&ticks, &FixedMeasurer);
    assert_eq!(measured, 16.0 + 15.0);
}
