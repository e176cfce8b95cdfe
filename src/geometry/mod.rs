mod converter;

pub use converter::*;

/// Bounding rectangle of a source element in DOM pixels.
///
/// The origin is the top-left corner of the viewport and Y grows downward,
/// so `bottom >= top` for every rectangle the DOM reports.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DomRect {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl DomRect {
    pub const fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.top + dy, self.bottom + dy, self.left + dx, self.right + dx)
    }
}

/// Center-pivot position of an element in scene units, Y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConvertedPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub width: f32,
    pub height: f32,
}
