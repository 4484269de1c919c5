//! Projection details of a render pass, consumed by hit-testing.

use crate::data_types::{CoordinateRange, PixelRect};

/// Snapshot of the data-to-pixel scale factors from the latest render pass.
///
/// Nearest-point queries weight data-space deltas by these factors so that
/// "nearest" matches visual proximity under the current zoom/pan state, even
/// when the two axes use very different units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderDetails {
    pub data_rect: PixelRect,
    pub px_per_unit_x: f64,
    pub px_per_unit_y: f64,
}

impl RenderDetails {
    /// Derive the scale factors from the plotted area and the axis ranges.
    /// Zero-span ranges produce infinite factors; callers guard, as with the
    /// axis pixel mapping.
    pub fn new(data_rect: PixelRect, x_range: CoordinateRange, y_range: CoordinateRange) -> Self {
        Self {
            data_rect,
            px_per_unit_x: data_rect.width() as f64 / x_range.span(),
            px_per_unit_y: data_rect.height() as f64 / y_range.span(),
        }
    }

    pub fn from_px_per_unit(data_rect: PixelRect, px_per_unit_x: f64, px_per_unit_y: f64) -> Self {
        Self {
            data_rect,
            px_per_unit_x,
            px_per_unit_y,
        }
    }
}
