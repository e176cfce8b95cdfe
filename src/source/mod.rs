use std::fmt;
use std::hash::Hash;

use crate::geometry::DomRect;
use crate::style::{ComputedStyle, PropertyId, compute_style};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::*;

/// Read access to the observed element tree.
///
/// The mirror never mutates source nodes; it keeps its own side table from
/// `NodeId` to element.
pub trait SourceTree {
    type NodeId: Copy + Eq + Hash + fmt::Debug;

    fn bounding_rect(&self, node: Self::NodeId) -> DomRect;
    fn parent(&self, node: Self::NodeId) -> Option<Self::NodeId>;
    /// Raw computed value of a CSS property, e.g. `"0.5"` for `opacity`.
    fn style_property(&self, node: Self::NodeId, property: PropertyId) -> Option<String>;

    fn computed_style(&self, node: Self::NodeId) -> ComputedStyle {
        compute_style(|property| self.style_property(node, property))
    }
}

/// Signals the host forwards from the source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEvent {
    AttributesChanged,
    CharacterDataChanged,
    Input,
    ListenerAdded,
    ListenerRemoved,
    AnimationStart,
    AnimationEnd,
    TransitionStart,
    TransitionEnd,
}
