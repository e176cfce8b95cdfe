use crate::clipping::{ClippingContextId, PlaneSide};
use crate::style::Color;

/// Names one plane of a shared clipping context.
///
/// Materials hold these instead of plane copies; renderers resolve them
/// through [`ClippingArena::resolve`](crate::ClippingArena::resolve) so a
/// plane moved by the authority is seen by every material at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipPlaneRef {
    pub context: ClippingContextId,
    pub side: PlaneSide,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStroke {
    pub visible: bool,
    pub line_width: f32,
    pub color: Color,
    /// `color` in linear light, what shaders consume.
    pub linear_rgba: [f32; 4],
}

impl BorderStroke {
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.linear_rgba = color.to_linear_rgba();
    }
}

impl Default for BorderStroke {
    fn default() -> Self {
        Self {
            visible: false,
            line_width: 0.0,
            color: Color::black(),
            linear_rgba: Color::black().to_linear_rgba(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Material {
    pub clipping: bool,
    pub clipping_planes: Vec<ClipPlaneRef>,
    /// Outline drawn around the renderable; created on first border update.
    pub border: Option<BorderStroke>,
    pub needs_update: bool,
}

impl Material {
    pub fn mark_needs_update(&mut self) {
        self.needs_update = true;
    }
}
