//! Keeps a 3D scene in sync with a live DOM subtree.
//!
//! Each mirrored DOM element gets an [`ElementNode`] that converts its
//! bounding rectangle into scene space, copies opacity and borders onto a
//! scene proxy, and places the clipping planes of `overflow: hidden`
//! containers. [`SceneMirror`] owns the node tree and runs the resync passes.

pub mod animation;
pub mod clipping;
pub mod element;
mod error;
pub mod geometry;
pub mod mirror;
pub mod scene;
mod settings;
pub mod source;
pub mod style;

#[cfg(test)]
pub(crate) mod test_support;

pub use animation::*;
pub use clipping::*;
pub use element::*;
pub use error::*;
pub use geometry::*;
pub use mirror::*;
pub use scene::*;
pub use settings::*;
pub use source::*;
pub use style::*;
