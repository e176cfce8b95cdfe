use crate::clipping::{ClippingContextId, PlaneSide};
use crate::element::ElementId;
use crate::error::MirrorError;
use crate::scene::{ClipPlaneRef, SceneBackend};
use crate::source::SourceTree;

use super::SceneMirror;

impl<S: SourceTree, B: SceneBackend> SceneMirror<S, B> {
    /// Clipping context `id` falls under.
    ///
    /// A parent that already clips wins and its context is shared as is.
    /// Otherwise an `overflow: hidden` element opens a new context with
    /// itself as authority. Nested clip regions are not supported: only the
    /// nearest clipping ancestor is honoured. An element that already holds a
    /// context gets that same handle back.
    pub fn clipping_context_for(
        &mut self,
        id: ElementId,
    ) -> Result<Option<ClippingContextId>, MirrorError> {
        let node = self.node(id)?;
        if node.clipping.is_some() {
            return Ok(node.clipping);
        }
        let source = node.source;

        let inherited = self
            .source
            .parent(source)
            .and_then(|parent| self.element_for(parent))
            .and_then(|parent| self.elements.get(parent))
            .and_then(|parent| parent.clipping);
        if inherited.is_some() {
            return Ok(inherited);
        }

        if self.source.computed_style(source).clips_overflow() {
            return Ok(Some(self.clipping.create(id)));
        }
        Ok(None)
    }

    /// Runs once from init. The `overflow` value is not re-read afterwards.
    pub(crate) fn setup_clipping(&mut self, id: ElementId) -> Result<(), MirrorError> {
        if !self.settings.clipping_enabled {
            return Ok(());
        }
        let Some(context) = self.clipping_context_for(id)? else {
            return Ok(());
        };
        self.node_mut(id)?.clipping = Some(context);

        if self.install_clipping(id)? {
            self.update_clipping(id)?;
        }
        Ok(())
    }

    /// Puts the context's active planes on the element's material.
    fn install_clipping(&mut self, id: ElementId) -> Result<bool, MirrorError> {
        let node = self
            .elements
            .get_mut(id)
            .ok_or(MirrorError::UnknownElement(id))?;
        let Some(context) = node.clipping else {
            return Ok(false);
        };
        let Some(material) = node.proxy.and_then(|proxy| self.scene.material_mut(proxy)) else {
            log::warn!(
                target: "dom2scene",
                "{id:?} needs clipping but its renderable is not materialized yet"
            );
            return Ok(false);
        };

        material.clipping = true;
        material.clipping_planes = PlaneSide::ACTIVE
            .iter()
            .map(|side| ClipPlaneRef {
                context,
                side: *side,
            })
            .collect();
        material.mark_needs_update();
        node.clipping_installed = true;
        Ok(true)
    }

    /// Moves the shared planes to follow `id`. Does nothing unless `id` is
    /// the authority of its context; returns whether the planes moved.
    pub fn update_clipping(&mut self, id: ElementId) -> Result<bool, MirrorError> {
        let node = self.node(id)?;
        let Some(context) = node.clipping else {
            return Ok(false);
        };
        if !node.clipping_installed && !self.install_clipping(id)? {
            return Ok(false);
        }
        if !self.clipping.is_authority(context, id) {
            return Ok(false);
        }

        let node = self.node(id)?;
        let point = node.converter.xyz() + self.scene.container_offset();
        let proxy = node.proxy;
        if !self.clipping.reposition_bottom(context, id, point) {
            return Ok(false);
        }
        if let Some(material) = proxy.and_then(|proxy| self.scene.material_mut(proxy)) {
            material.mark_needs_update();
        }
        log::debug!(target: "dom2scene", "{id:?} moved bottom clipping plane through {point}");
        Ok(true)
    }
}
