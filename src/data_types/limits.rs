use serde::{Deserialize, Serialize};

use super::coordinates::{CoordinateRange, CoordinateRect, Coordinates};

/// Axis-aligned bounding box of a point set, one range per axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub x_range: CoordinateRange,
    pub y_range: CoordinateRange,
}

impl AxisLimits {
    pub const NOT_SET: Self = Self {
        x_range: CoordinateRange::NOT_SET,
        y_range: CoordinateRange::NOT_SET,
    };

    pub const fn new(x_range: CoordinateRange, y_range: CoordinateRange) -> Self {
        Self { x_range, y_range }
    }

    pub fn rect(&self) -> CoordinateRect {
        CoordinateRect::new(
            self.x_range.min,
            self.x_range.max,
            self.y_range.min,
            self.y_range.max,
        )
    }
}

impl Default for AxisLimits {
    fn default() -> Self {
        Self::NOT_SET
    }
}

/// Accumulator that grows [`AxisLimits`] as points are folded in.
///
/// Starts at [`AxisLimits::NOT_SET`]; folding nothing leaves it there, which
/// is how an empty visible window reports its limits.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExpandingAxisLimits {
    limits: AxisLimits,
}

impl ExpandingAxisLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expand(&mut self, point: Coordinates) {
        self.limits.x_range.min = self.limits.x_range.min.min(point.x);
        self.limits.x_range.max = self.limits.x_range.max.max(point.x);
        self.limits.y_range.min = self.limits.y_range.min.min(point.y);
        self.limits.y_range.max = self.limits.y_range.max.max(point.y);
    }

    pub fn expand_all<I>(&mut self, points: I)
    where
        I: IntoIterator<Item = Coordinates>,
    {
        for point in points {
            self.expand(point);
        }
    }

    pub fn axis_limits(&self) -> AxisLimits {
        self.limits
    }
}
