//! Horizontal axis: data/pixel mapping, layout measurement and panel drawing.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::data_types::{CoordinateRange, Pixel, PixelRect};
use crate::rendering::{self, Alignment, DrawSurface, TextMeasurer};
use crate::theme::{hex_color, Color, FontSpec};
use crate::ticks::TickGenerator;

/// Which edge of the data area the axis panel is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisEdge {
    Top,
    Bottom,
}

/// Resolved style for one family of tick marks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickStyle {
    pub length: f32,
    pub line_width: f32,
    pub color: Color,
}

/// Tick and frame styling with the stock defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub major_tick_length: f32,
    pub minor_tick_length: f32,
    pub major_tick_line_width: f32,
    pub minor_tick_line_width: f32,
    #[serde(with = "hex_color")]
    pub major_tick_color: Color,
    #[serde(with = "hex_color")]
    pub minor_tick_color: Color,
    pub frame_line_width: f32,
    #[serde(with = "hex_color")]
    pub frame_color: Color,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            major_tick_length: 4.0,
            minor_tick_length: 2.0,
            major_tick_line_width: 1.0,
            minor_tick_line_width: 1.0,
            major_tick_color: Color::BLACK,
            minor_tick_color: Color::BLACK,
            frame_line_width: 1.0,
            frame_color: Color::BLACK,
        }
    }
}

impl AxisStyle {
    pub fn major_tick_style(&self) -> TickStyle {
        TickStyle {
            length: self.major_tick_length,
            line_width: self.major_tick_line_width,
            color: self.major_tick_color,
        }
    }

    pub fn minor_tick_style(&self) -> TickStyle {
        TickStyle {
            length: self.minor_tick_length,
            line_width: self.minor_tick_line_width,
            color: self.minor_tick_color,
        }
    }
}

/// Title text attached to an axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub text: String,
    pub font: FontSpec,
    #[serde(with = "hex_color")]
    pub color: Color,
}

impl Default for AxisLabel {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: FontSpec {
                size: 16.0,
                bold: true,
                ..FontSpec::default()
            },
            color: Color::BLACK,
        }
    }
}

/// Extra height reserved above each tick label when measuring.
pub const TICK_LABEL_PADDING: f32 = 10.0;
/// Space between the tick labels and the axis label.
pub const AXIS_LABEL_GAP: f32 = 15.0;
const LABEL_EDGE_DISTANCE: f32 = 10.0;

/// An X axis bound to the top or bottom edge of the data area.
///
/// Holds the mutable coordinate range (default [`CoordinateRange::NOT_SET`])
/// and styling. The tick generator, drawing surface and text measurer are
/// injected into each measure/render call rather than stored here.
pub struct HorizontalAxis {
    pub range: CoordinateRange,
    pub edge: AxisEdge,
    pub label: AxisLabel,
    pub tick_font: FontSpec,
    pub style: AxisStyle,
    pub show_debug_information: bool,
}

impl HorizontalAxis {
    pub fn new(edge: AxisEdge) -> Self {
        Self {
            range: CoordinateRange::NOT_SET,
            edge,
            label: AxisLabel::default(),
            tick_font: FontSpec::default(),
            style: AxisStyle::default(),
            show_debug_information: false,
        }
    }

    pub fn with_label(mut self, text: impl Into<String>) -> Self {
        self.label.text = text.into();
        self
    }

    pub fn min(&self) -> f64 {
        self.range.min
    }

    pub fn max(&self) -> f64 {
        self.range.max
    }

    pub fn set_min(&mut self, min: f64) {
        self.range.min = min;
    }

    pub fn set_max(&mut self, max: f64) {
        self.range.max = max;
    }

    /// Span of the axis range in data units.
    pub fn width(&self) -> f64 {
        self.range.span()
    }

    /// Linear map of a data-space position onto the horizontal pixel span of
    /// `data_area`. A zero-span range yields infinite/NaN pixels; callers
    /// must guard against degenerate ranges.
    pub fn get_pixel(&self, position: f64, data_area: PixelRect) -> f32 {
        let px_per_unit = data_area.width() as f64 / self.width();
        let units_from_left_edge = position - self.range.min;
        data_area.left + (units_from_left_edge * px_per_unit) as f32
    }

    /// Inverse of [`Self::get_pixel`].
    pub fn get_coordinate(&self, pixel: f32, data_area: PixelRect) -> f64 {
        let px_per_unit = data_area.width() as f64 / self.width();
        let px_from_left_edge = pixel - data_area.left;
        self.range.min + px_from_left_edge as f64 / px_per_unit
    }

    /// Scale-only conversion of a data-space length to pixels (no offset).
    pub fn get_pixel_distance(&self, distance: f64, data_area: PixelRect) -> f64 {
        distance * data_area.width() as f64 / self.width()
    }

    /// Scale-only conversion of a pixel length to data units (no offset).
    pub fn get_coordinate_distance(&self, distance: f64, data_area: PixelRect) -> f64 {
        distance / (data_area.width() as f64 / self.width())
    }

    /// Total panel thickness this axis needs: the tallest tick label plus the
    /// axis label height plus a fixed gap.
    pub fn measure(&self, ticks: &dyn TickGenerator, text: &dyn TextMeasurer) -> f32 {
        let largest_tick_size = self.measure_ticks(ticks, text);
        let label_size = text.measure_string(&self.label.text, &self.label.font).height;
        largest_tick_size + label_size + AXIS_LABEL_GAP
    }

    fn measure_ticks(&self, ticks: &dyn TickGenerator, text: &dyn TextMeasurer) -> f32 {
        let mut largest_tick_height: f32 = 0.0;
        for tick in ticks.get_visible_ticks(self.range) {
            let label_size = text.measure_string(&tick.label, &self.tick_font);
            largest_tick_height = largest_tick_height.max(label_size.height + TICK_LABEL_PADDING);
        }
        largest_tick_height
    }

    fn panel_rect_bottom(data_rect: PixelRect, size: f32, offset: f32) -> PixelRect {
        PixelRect::new(
            data_rect.left,
            data_rect.right,
            data_rect.bottom + offset + size,
            data_rect.bottom + offset,
        )
    }

    fn panel_rect_top(data_rect: PixelRect, size: f32, offset: f32) -> PixelRect {
        PixelRect::new(
            data_rect.left,
            data_rect.right,
            data_rect.top - offset,
            data_rect.top - offset - size,
        )
    }

    /// Rectangle occupied by this axis's panel. `offset` stacks multiple
    /// panels away from the data area.
    pub fn get_panel_rect(&self, data_rect: PixelRect, size: f32, offset: f32) -> PixelRect {
        match self.edge {
            AxisEdge::Bottom => Self::panel_rect_bottom(data_rect, size, offset),
            AxisEdge::Top => Self::panel_rect_top(data_rect, size, offset),
        }
    }

    /// Draw the axis label, tick marks, tick labels and frame line into the
    /// panel. Mutates only the surface.
    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        ticks: &dyn TickGenerator,
        text: &dyn TextMeasurer,
        data_rect: PixelRect,
        size: f32,
        offset: f32,
    ) {
        let panel_rect = self.get_panel_rect(data_rect, size, offset);
        trace!("rendering axis panel {:?}", panel_rect);

        let label_point = Pixel::new(
            panel_rect.horizontal_center(),
            panel_rect.bottom - LABEL_EDGE_DISTANCE,
        );

        if self.show_debug_information {
            rendering::draw_debug_rectangle(surface, panel_rect, label_point, self.label.color);
        }

        rendering::draw_text_aligned(
            surface,
            text,
            &self.label.text,
            &self.label.font,
            self.label.color,
            label_point,
            Alignment::LowerCenter,
        );

        let visible_ticks = ticks.get_visible_ticks(self.range);
        rendering::draw_ticks(
            surface,
            text,
            &self.tick_font,
            panel_rect,
            &visible_ticks,
            self,
            self.style.major_tick_style(),
            self.style.minor_tick_style(),
        );
        rendering::draw_frame(
            surface,
            panel_rect,
            self.edge,
            self.style.frame_line_width,
            self.style.frame_color,
        );
    }
}
