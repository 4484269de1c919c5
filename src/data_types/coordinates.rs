use serde::{Deserialize, Serialize};

/// An (X, Y) pair in data space.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A 1-D range in data units.
///
/// An axis that has never been assigned a range holds [`CoordinateRange::NOT_SET`],
/// which is also the `Default`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRange {
    pub min: f64,
    pub max: f64,
}

impl CoordinateRange {
    /// Sentinel for an uninitialized range (min above max).
    pub const NOT_SET: Self = Self {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_not_set(&self) -> bool {
        self.min > self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for CoordinateRange {
    fn default() -> Self {
        Self::NOT_SET
    }
}

/// A rectangle in data units. Default is fully degenerate (all zeros, no area).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct CoordinateRect {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl CoordinateRect {
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn has_area(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    pub fn x_range(&self) -> CoordinateRange {
        CoordinateRange::new(self.left, self.right)
    }

    pub fn y_range(&self) -> CoordinateRange {
        CoordinateRange::new(self.bottom, self.top)
    }
}
