//! Hand-written source tree and scene used by the unit tests.

use std::collections::HashMap;

use glam::Vec3;

use crate::geometry::DomRect;
use crate::scene::{AssetId, AssetKind, Material, Placement, SceneBackend};
use crate::source::SourceTree;
use crate::style::PropertyId;

#[derive(Debug, Default)]
struct FakeNode {
    rect: DomRect,
    parent: Option<u32>,
    styles: HashMap<PropertyId, String>,
}

#[derive(Debug, Default)]
pub struct FakeTree {
    nodes: HashMap<u32, FakeNode>,
}

impl FakeTree {
    pub fn add(&mut self, id: u32, parent: Option<u32>, rect: DomRect) {
        self.nodes.insert(
            id,
            FakeNode {
                rect,
                parent,
                styles: HashMap::new(),
            },
        );
    }

    pub fn set_rect(&mut self, id: u32, rect: DomRect) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.rect = rect;
        }
    }

    pub fn set_style(&mut self, id: u32, property: PropertyId, value: &str) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.styles.insert(property, value.to_string());
        }
    }
}

impl SourceTree for FakeTree {
    type NodeId = u32;

    fn bounding_rect(&self, node: u32) -> DomRect {
        self.nodes.get(&node).map(|n| n.rect).unwrap_or_default()
    }

    fn parent(&self, node: u32) -> Option<u32> {
        self.nodes.get(&node).and_then(|n| n.parent)
    }

    fn style_property(&self, node: u32, property: PropertyId) -> Option<String> {
        self.nodes
            .get(&node)
            .and_then(|n| n.styles.get(&property).cloned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeProxyId(usize);

#[derive(Debug, Default)]
pub struct FakeProxy {
    pub opacity: Option<f32>,
    pub opacity_writes: usize,
    pub placement: Option<Placement>,
    pub material: Option<Material>,
}

#[derive(Debug, Default)]
pub struct FakeScene {
    pub proxies: Vec<FakeProxy>,
    pub container_offset: Vec3,
    pub assets: Vec<(AssetId, String, AssetKind)>,
}

impl FakeScene {
    pub fn spawn(&mut self) -> FakeProxyId {
        self.proxies.push(FakeProxy::default());
        FakeProxyId(self.proxies.len() - 1)
    }

    pub fn spawn_materialized(&mut self) -> FakeProxyId {
        let proxy = self.spawn();
        self.materialize(proxy);
        proxy
    }

    pub fn materialize(&mut self, proxy: FakeProxyId) {
        self.proxies[proxy.0].material = Some(Material::default());
    }

    pub fn proxy(&self, proxy: FakeProxyId) -> &FakeProxy {
        &self.proxies[proxy.0]
    }

    pub fn material(&self, proxy: FakeProxyId) -> Option<&Material> {
        self.proxies[proxy.0].material.as_ref()
    }

    pub fn total_writes(&self) -> usize {
        self.proxies.iter().map(|p| p.opacity_writes).sum()
    }
}

impl SceneBackend for FakeScene {
    type ProxyId = FakeProxyId;

    fn set_opacity(&mut self, proxy: FakeProxyId, opacity: f32) {
        let proxy = &mut self.proxies[proxy.0];
        proxy.opacity = Some(opacity);
        proxy.opacity_writes += 1;
    }

    fn material_mut(&mut self, proxy: FakeProxyId) -> Option<&mut Material> {
        self.proxies.get_mut(proxy.0)?.material.as_mut()
    }

    fn container_offset(&self) -> Vec3 {
        self.container_offset
    }

    fn set_placement(&mut self, proxy: FakeProxyId, placement: Placement) {
        self.proxies[proxy.0].placement = Some(placement);
    }

    fn register_asset(&mut self, id: &AssetId, path: &str, kind: AssetKind) {
        self.assets.push((id.clone(), path.to_string(), kind));
    }
}
