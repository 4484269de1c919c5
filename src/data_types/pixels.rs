use serde::{Deserialize, Serialize};

/// A position on the rendering surface. Y grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Pixel {
    pub x: f32,
    pub y: f32,
}

impl Pixel {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Measured size of a drawn element, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: f32,
    pub height: f32,
}

impl PixelSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A rectangle on the rendering surface. Screen convention: `top <= bottom`.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl PixelRect {
    pub const fn new(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn horizontal_center(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn vertical_center(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    pub fn contains(&self, pixel: Pixel) -> bool {
        pixel.x >= self.left && pixel.x <= self.right && pixel.y >= self.top && pixel.y <= self.bottom
    }
}
