//! Tick generation strategies.

use d3rs::scale::{LinearScale, Scale};

use crate::data_types::CoordinateRange;

/// A labeled position marked along an axis. Minor ticks carry no label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
    pub is_major: bool,
}

impl Tick {
    pub fn major(position: f64, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
            is_major: true,
        }
    }

    pub fn minor(position: f64) -> Self {
        Self {
            position,
            label: String::new(),
            is_major: false,
        }
    }
}

/// Pluggable strategy producing the ticks visible within an axis range.
/// Queried on every measure/render pass; the axis never computes ticks itself.
pub trait TickGenerator {
    fn get_visible_ticks(&self, range: CoordinateRange) -> Vec<Tick>;
}

/// Default tick strategy for numeric axes.
#[derive(Clone, Copy, Debug)]
pub struct NumericTickGenerator {
    /// Target tick count; the scale may return slightly fewer or more to land
    /// on round values.
    pub target_count: usize,
}

impl Default for NumericTickGenerator {
    fn default() -> Self {
        Self { target_count: 10 }
    }
}

impl TickGenerator for NumericTickGenerator {
    fn get_visible_ticks(&self, range: CoordinateRange) -> Vec<Tick> {
        if range.is_not_set() || range.span() <= 0.0 {
            return Vec::new();
        }

        let positions = LinearScale::new()
            .domain(range.min, range.max)
            .range(0.0, 1.0)
            .ticks(self.target_count);

        positions
            .into_iter()
            .filter(|position| range.contains(*position))
            .map(|position| Tick::major(position, format_tick(position)))
            .collect()
    }
}

/// Numeric tick label formatting: more digits near zero, none past 1000.
pub fn format_tick(value: f64) -> String {
    if value.abs() < 0.001 && value.abs() > 0.0 {
        format!("{:.4}", value)
    } else if value.abs() > 1000.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
