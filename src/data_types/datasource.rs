use std::ops::Range;

use crate::transform::RenderDetails;

use super::coordinates::{CoordinateRange, Coordinates};
use super::data::DataPoint;
use super::limits::{AxisLimits, ExpandingAxisLimits};

/// Default hit-test radius for nearest-point queries, in pixels.
pub const DEFAULT_HIT_RADIUS: f32 = 15.0;

/// Trait for data sources that provide scatter points for the chart.
pub trait ScatterSource {
    /// Points of the visible window, in original order.
    fn get_scatter_points(&self) -> Vec<Coordinates>;

    /// Bounding box of the visible window. [`AxisLimits::NOT_SET`] when the
    /// window is empty.
    fn get_limits(&self) -> AxisLimits;

    fn get_limits_x(&self) -> CoordinateRange {
        self.get_limits().rect().x_range()
    }

    fn get_limits_y(&self) -> CoordinateRange {
        self.get_limits().rect().y_range()
    }

    /// Nearest point to `query` under the pixel-weighted distance metric of
    /// the supplied render pass. `None` when no point lies within
    /// `max_distance` pixels.
    fn get_nearest(
        &self,
        query: Coordinates,
        render: &RenderDetails,
        max_distance: f32,
    ) -> Option<DataPoint>;
}

/// Data source that manages X/Y points as a fixed array of coordinates.
///
/// `min_render_index` / `max_render_index` define an inclusive window over the
/// array; both are clamped against the array bounds at read time, so
/// out-of-range values silently yield an empty window instead of panicking.
pub struct CoordinateArraySource {
    coordinates: Vec<Coordinates>,
    pub min_render_index: usize,
    pub max_render_index: usize,
}

impl CoordinateArraySource {
    pub fn new(coordinates: Vec<Coordinates>) -> Self {
        Self {
            coordinates,
            min_render_index: 0,
            max_render_index: usize::MAX,
        }
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Index range of the visible window, clamped to the array bounds.
    fn visible_range(&self) -> Range<usize> {
        let len = self.coordinates.len();
        if len == 0 || self.min_render_index >= len {
            return 0..0;
        }
        let last = self.max_render_index.min(len - 1);
        if last < self.min_render_index {
            return 0..0;
        }
        self.min_render_index..last + 1
    }
}

impl ScatterSource for CoordinateArraySource {
    fn get_scatter_points(&self) -> Vec<Coordinates> {
        self.coordinates[self.visible_range()].to_vec()
    }

    fn get_limits(&self) -> AxisLimits {
        let mut limits = ExpandingAxisLimits::new();
        limits.expand_all(self.coordinates[self.visible_range()].iter().copied());
        limits.axis_limits()
    }

    /// Linear scan of the visible window, O(window size) per query. Fine for
    /// typical series lengths; large point sets would need a spatial index.
    fn get_nearest(
        &self,
        query: Coordinates,
        render: &RenderDetails,
        max_distance: f32,
    ) -> Option<DataPoint> {
        let max_distance_squared = max_distance as f64 * max_distance as f64;
        let mut closest_distance_squared = f64::INFINITY;
        let mut closest = DataPoint::new(f64::INFINITY, f64::INFINITY, 0);

        for i in self.visible_range() {
            let dx = (self.coordinates[i].x - query.x) * render.px_per_unit_x;
            let dy = (self.coordinates[i].y - query.y) * render.px_per_unit_y;
            let distance_squared = dx * dx + dy * dy;

            // `<=` keeps the later of two equidistant points; interactive
            // selection depends on this ordering.
            if distance_squared <= closest_distance_squared {
                closest_distance_squared = distance_squared;
                closest = DataPoint::new(self.coordinates[i].x, self.coordinates[i].y, i);
            }
        }

        (closest_distance_squared <= max_distance_squared).then_some(closest)
    }
}
