//! Drawing capability traits and axis drawing helpers.
//!
//! The crate never owns a canvas or a font engine. Rendering backends
//! implement [`DrawSurface`] and [`TextMeasurer`]; the helpers here issue
//! draw commands against those capabilities.

use crate::axis::{AxisEdge, HorizontalAxis, TickStyle};
use crate::data_types::{Pixel, PixelRect, PixelSize};
use crate::theme::{Color, FontSpec};
use crate::ticks::Tick;

/// Capability to draw primitives at pixel coordinates. Text positions are the
/// top-left corner of the text box.
pub trait DrawSurface {
    fn draw_line(&mut self, start: Pixel, end: Pixel, line_width: f32, color: Color);
    fn draw_text(&mut self, text: &str, font: &FontSpec, position: Pixel, color: Color);
    fn draw_rectangle(&mut self, rect: PixelRect, line_width: f32, color: Color);
}

/// Capability to measure rendered text, used to size tick labels and the
/// axis label during layout.
pub trait TextMeasurer {
    fn measure_string(&self, text: &str, font: &FontSpec) -> PixelSize;
}

/// Vertical placement of text relative to its anchor point. Both variants
/// center horizontally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// Anchor marks the top of the text box.
    UpperCenter,
    /// Anchor marks the bottom of the text box.
    LowerCenter,
}

/// Draw `text` centered on `anchor.x`, above or below `anchor.y` per the
/// alignment. Empty text draws nothing.
pub fn draw_text_aligned(
    surface: &mut dyn DrawSurface,
    text_measurer: &dyn TextMeasurer,
    text: &str,
    font: &FontSpec,
    color: Color,
    anchor: Pixel,
    alignment: Alignment,
) {
    if text.is_empty() {
        return;
    }
    let size = text_measurer.measure_string(text, font);
    let x = anchor.x - size.width / 2.0;
    let y = match alignment {
        Alignment::UpperCenter => anchor.y,
        Alignment::LowerCenter => anchor.y - size.height,
    };
    surface.draw_text(text, font, Pixel::new(x, y), color);
}

/// Draw tick marks and their labels along the data-facing edge of the panel.
#[allow(clippy::too_many_arguments)]
pub fn draw_ticks(
    surface: &mut dyn DrawSurface,
    text: &dyn TextMeasurer,
    tick_font: &FontSpec,
    panel_rect: PixelRect,
    ticks: &[Tick],
    axis: &HorizontalAxis,
    major_style: TickStyle,
    minor_style: TickStyle,
) {
    for tick in ticks {
        let style = if tick.is_major { major_style } else { minor_style };
        let x = axis.get_pixel(tick.position, panel_rect);

        match axis.edge {
            AxisEdge::Bottom => {
                // Marks grow down from the panel's top edge, labels below them.
                let start = Pixel::new(x, panel_rect.top);
                let end = Pixel::new(x, panel_rect.top + style.length);
                surface.draw_line(start, end, style.line_width, style.color);
                if !tick.label.is_empty() {
                    draw_text_aligned(
                        surface,
                        text,
                        &tick.label,
                        tick_font,
                        style.color,
                        end,
                        Alignment::UpperCenter,
                    );
                }
            }
            AxisEdge::Top => {
                let start = Pixel::new(x, panel_rect.bottom);
                let end = Pixel::new(x, panel_rect.bottom - style.length);
                surface.draw_line(start, end, style.line_width, style.color);
                if !tick.label.is_empty() {
                    draw_text_aligned(
                        surface,
                        text,
                        &tick.label,
                        tick_font,
                        style.color,
                        end,
                        Alignment::LowerCenter,
                    );
                }
            }
        }
    }
}

/// Draw the frame line along the edge of the panel facing the data area.
pub fn draw_frame(
    surface: &mut dyn DrawSurface,
    panel_rect: PixelRect,
    edge: AxisEdge,
    line_width: f32,
    color: Color,
) {
    let y = match edge {
        AxisEdge::Bottom => panel_rect.top,
        AxisEdge::Top => panel_rect.bottom,
    };
    surface.draw_line(
        Pixel::new(panel_rect.left, y),
        Pixel::new(panel_rect.right, y),
        line_width,
        color,
    );
}

/// Overlay the panel bounding box and a small cross at the label anchor.
pub fn draw_debug_rectangle(
    surface: &mut dyn DrawSurface,
    rect: PixelRect,
    anchor: Pixel,
    color: Color,
) {
    const CROSS_ARM: f32 = 3.0;
    surface.draw_rectangle(rect, 1.0, color);
    surface.draw_line(
        Pixel::new(anchor.x - CROSS_ARM, anchor.y),
        Pixel::new(anchor.x + CROSS_ARM, anchor.y),
        1.0,
        color,
    );
    surface.draw_line(
        Pixel::new(anchor.x, anchor.y - CROSS_ARM),
        Pixel::new(anchor.x, anchor.y + CROSS_ARM),
        1.0,
        color,
    );
}
