use std::fmt;

use glam::Vec3;

mod assets;
mod material;

pub use assets::*;
pub use material::*;

/// Where an element's renderable sits in the scene container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub width: f32,
    pub height: f32,
}

/// Write access to the mirrored scene.
pub trait SceneBackend {
    type ProxyId: Copy + Eq + fmt::Debug;

    fn set_opacity(&mut self, proxy: Self::ProxyId, opacity: f32);

    /// Material of the proxy's renderable, `None` until it is materialized.
    fn material_mut(&mut self, proxy: Self::ProxyId) -> Option<&mut Material>;

    /// World-space offset of the container all proxies live in.
    fn container_offset(&self) -> Vec3;

    fn set_placement(&mut self, _proxy: Self::ProxyId, _placement: Placement) {}

    fn register_asset(&mut self, _id: &AssetId, _path: &str, _kind: AssetKind) {}
}
