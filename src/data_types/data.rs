use serde::{Deserialize, Serialize};

use super::coordinates::Coordinates;

/// A resolved nearest-match result: the coordinates of the matched point and
/// its index in the source array. "No match" is `Option::<DataPoint>::None`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    pub index: usize,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64, index: usize) -> Self {
        Self { x, y, index }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.x, self.y)
    }
}
