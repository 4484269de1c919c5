use chart_core::ticks::format_tick;
use chart_core::{CoordinateRange, NumericTickGenerator, Tick, TickGenerator};

#[test]
fn test_numeric_ticks_stay_within_range() {
    let generator = NumericTickGenerator::default();
    let range = CoordinateRange::new(0.0, 100.0);

    let ticks = generator.get_visible_ticks(range);
    assert!(!ticks.is_empty());
    for tick in &ticks {
        assert!(range.contains(tick.position), "tick {} out of range", tick.position);
        assert!(tick.is_major);
        assert!(!tick.label.is_empty());
    }
}

#[test]
fn test_numeric_ticks_are_ordered() {
    let generator = NumericTickGenerator::default();
    let ticks = generator.get_visible_ticks(CoordinateRange::new(-3.0, 17.0));

    for pair in ticks.windows(2) {
        assert!(pair[0].position < pair[1].position);
    }
}

#[test]
fn test_numeric_ticks_not_set_range_is_empty() {
    let generator = NumericTickGenerator::default();
    assert!(generator.get_visible_ticks(CoordinateRange::NOT_SET).is_empty());
}

#[test]
fn test_numeric_ticks_zero_span_is_empty() {
    let generator = NumericTickGenerator::default();
    assert!(generator.get_visible_ticks(CoordinateRange::new(5.0, 5.0)).is_empty());
}

#[test]
fn test_tick_label_formatting() {
    assert_eq!(format_tick(0.000123), "0.0001");
    assert_eq!(format_tick(123.456), "123.46");
    assert_eq!(format_tick(1234.56), "1235");
}

#[test]
fn test_minor_ticks_have_no_label() {
    let tick = Tick::minor(2.5);
    assert!(!tick.is_major);
    assert!(tick.label.is_empty());

    let tick = Tick::major(2.5, "2.50");
    assert!(tick.is_major);
    assert_eq!(tick.label, "2.50");
}
