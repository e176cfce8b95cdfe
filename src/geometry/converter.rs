use glam::Vec3;

use super::{ConvertedPosition, DomRect};

/// Turns DOM bounding rectangles into scene coordinates for one element.
///
/// `z` is not derived from the rectangle: it always carries the depth
/// modifier the element was created with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converter {
    rect: DomRect,
    position: ConvertedPosition,
    depth_modifier: f32,
    scale: f32,
}

impl Converter {
    pub fn new(rect: DomRect, depth_modifier: f32, pixels_per_unit: f32) -> Self {
        let mut converter = Self {
            rect,
            position: ConvertedPosition::default(),
            depth_modifier,
            scale: 1.0 / pixels_per_unit,
        };
        converter.recompute(rect);
        converter
    }

    pub fn recompute(&mut self, rect: DomRect) {
        self.rect = rect;
        self.position = convert_rect(&rect, self.scale);
        self.position.z = self.depth_modifier;
    }

    /// Exact comparison: DOM measurements are discrete, so no epsilon.
    pub fn unchanged(&self, rect: &DomRect) -> bool {
        self.rect.top == rect.top
            && self.rect.bottom == rect.bottom
            && self.rect.left == rect.left
            && self.rect.right == rect.right
    }

    pub fn rect(&self) -> DomRect {
        self.rect
    }

    pub fn position(&self) -> ConvertedPosition {
        self.position
    }

    pub fn depth_modifier(&self) -> f32 {
        self.depth_modifier
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn z(&self) -> f32 {
        self.position.z
    }

    pub fn width(&self) -> f32 {
        self.position.width
    }

    pub fn height(&self) -> f32 {
        self.position.height
    }

    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.position.x, self.position.y, self.position.z)
    }
}

pub fn convert_rect(rect: &DomRect, scale: f32) -> ConvertedPosition {
    let width = rect.width();
    let height = rect.height();
    ConvertedPosition {
        x: (rect.left + width / 2.0) * scale,
        y: -(rect.top + height / 2.0) * scale,
        z: 0.0,
        width: width * scale,
        height: height * scale,
    }
}
