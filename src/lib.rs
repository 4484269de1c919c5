//! chart_core: coordinate mapping, axis layout and scatter data sources

pub mod axis;
pub mod data_types;
pub mod rendering;
pub mod theme;
pub mod ticks;
pub mod transform;

pub use axis::{AxisEdge, AxisLabel, AxisStyle, HorizontalAxis, TickStyle};
pub use data_types::{
    AxisLimits, CoordinateArraySource, CoordinateRange, CoordinateRect, Coordinates, DataPoint,
    ExpandingAxisLimits, Pixel, PixelRect, PixelSize, ScatterSource, DEFAULT_HIT_RADIUS,
};
pub use rendering::{Alignment, DrawSurface, TextMeasurer};
pub use theme::{Color, FontSpec};
pub use ticks::{NumericTickGenerator, Tick, TickGenerator};
pub use transform::RenderDetails;
