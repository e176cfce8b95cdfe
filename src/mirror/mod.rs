use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::animation::{AnimationScheduler, Instant};
use crate::clipping::{ClippingArena, ClippingContextId};
use crate::element::{ElementBehavior, ElementId, ElementNode, ObservedEvents, VisualContext};
use crate::error::MirrorError;
use crate::scene::{AssetId, AssetKind, AssetRegistry, SceneBackend};
use crate::settings::MirrorSettings;
use crate::source::{SourceEvent, SourceTree};

mod clipping;

/// Owns the mirrored element tree and keeps the scene in step with the
/// source tree.
///
/// Every mutation signal resyncs the whole tree from the root. Subtrees whose
/// rectangle did not move and that are not dirty stop at the first check, so
/// an idle pass costs one rectangle query per element.
pub struct SceneMirror<S: SourceTree, B: SceneBackend> {
    source: S,
    scene: B,
    settings: MirrorSettings,
    elements: SlotMap<ElementId, ElementNode<S, B>>,
    by_source: FxHashMap<S::NodeId, ElementId>,
    root: Option<ElementId>,
    clipping: ClippingArena,
    animations: AnimationScheduler,
    assets: AssetRegistry,
    dirty: bool,
}

impl<S: SourceTree, B: SceneBackend> SceneMirror<S, B> {
    pub fn new(source: S, scene: B, settings: MirrorSettings) -> Result<Self, MirrorError> {
        settings.validate()?;
        Ok(Self {
            source,
            scene,
            settings,
            elements: SlotMap::with_key(),
            by_source: FxHashMap::default(),
            root: None,
            clipping: ClippingArena::new(),
            animations: AnimationScheduler::new(),
            assets: AssetRegistry::new(),
            dirty: false,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn scene(&self) -> &B {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut B {
        &mut self.scene
    }

    pub fn settings(&self) -> &MirrorSettings {
        &self.settings
    }

    pub fn clipping(&self) -> &ClippingArena {
        &self.clipping
    }

    pub fn animations(&self) -> &AnimationScheduler {
        &self.animations
    }

    pub fn root(&self) -> Option<ElementId> {
        self.root
    }

    /// Set by any mutation signal, cleared when a full pass completes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn element(&self, id: ElementId) -> Option<&ElementNode<S, B>> {
        self.elements.get(id)
    }

    /// Reverse lookup from a source node to the element mirroring it.
    pub fn element_for(&self, source: S::NodeId) -> Option<ElementId> {
        self.by_source.get(&source).copied()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Mirrors `source_node`. The first element added without a parent
    /// becomes the root of the resync passes.
    pub fn add_element<E>(
        &mut self,
        source_node: S::NodeId,
        parent: Option<ElementId>,
        depth_modifier: f32,
        behavior: E,
    ) -> Result<ElementId, MirrorError>
    where
        E: ElementBehavior<B> + 'static,
    {
        if let Some(existing) = self.element_for(source_node) {
            return Err(MirrorError::DuplicateSource(existing));
        }
        match parent {
            None => {
                if let Some(root) = self.root {
                    return Err(MirrorError::RootAlreadySet(root));
                }
            }
            Some(parent) => {
                if !self.elements.contains_key(parent) {
                    return Err(MirrorError::UnknownElement(parent));
                }
            }
        }

        let rect = self.source.bounding_rect(source_node);
        let mut node = ElementNode::new(
            source_node,
            rect,
            depth_modifier,
            self.settings.dom_pixels_per_unit,
            Box::new(behavior),
        );
        node.parent = parent;
        let id = self.elements.insert(node);
        self.by_source.insert(source_node, id);

        match parent {
            Some(parent) => {
                if let Some(parent) = self.elements.get_mut(parent) {
                    parent.add_child(id);
                }
            }
            None => self.root = Some(id),
        }
        Ok(id)
    }

    /// Assigns the scene proxy. The element is marked dirty so the next pass
    /// writes the fresh proxy even if the rectangle did not move.
    pub fn attach_proxy(&mut self, id: ElementId, proxy: B::ProxyId) -> Result<(), MirrorError> {
        let node = self.node_mut(id)?;
        node.proxy = Some(proxy);
        node.dirty = true;
        Ok(())
    }

    /// Starts reacting to source events for `id`.
    pub fn setup_event_handlers(&mut self, id: ElementId) -> Result<(), MirrorError> {
        let node = self.node_mut(id)?;
        if node.proxy.is_none() {
            return Err(MirrorError::Precondition(
                "event handlers require an attached scene proxy",
            ));
        }
        node.observed = ObservedEvents::all();
        Ok(())
    }

    /// Post-mount setup for the whole tree, parents before children.
    ///
    /// Elements that were already initialized are skipped, so calling this
    /// again after adding elements only sets up the new ones.
    pub fn init(&mut self) -> Result<(), MirrorError> {
        let root = self
            .root
            .ok_or(MirrorError::Precondition("init requires a root element"))?;
        self.init_element(root)
    }

    pub fn init_element(&mut self, id: ElementId) -> Result<(), MirrorError> {
        if !self.node(id)?.initialized {
            self.setup_clipping(id)?;
            self.node_mut(id)?.initialized = true;
        }
        let children = self.node(id)?.children.clone();
        for child in children {
            self.init_element(child)?;
        }
        Ok(())
    }

    pub fn mark_dirty(&mut self, id: ElementId) -> Result<(), MirrorError> {
        self.node_mut(id)?.dirty = true;
        Ok(())
    }

    /// Resyncs `id`, after its children when `update_children` is set.
    ///
    /// Children always finish before their parent writes anything, so a
    /// parent's clipping pass sees a fully resolved subtree.
    pub fn update(
        &mut self,
        id: ElementId,
        force_update: bool,
        update_children: bool,
    ) -> Result<(), MirrorError> {
        if update_children {
            let children = self.node(id)?.children.clone();
            for child in children {
                self.update(child, force_update, update_children)?;
            }
        }

        let node = self
            .elements
            .get_mut(id)
            .ok_or(MirrorError::UnknownElement(id))?;

        // Layout changes elsewhere move elements without a mutation on them,
        // so the rectangle is checked on every pass.
        let rect = self.source.bounding_rect(node.source);
        if node.converter.unchanged(&rect) && !node.dirty && !force_update {
            return Ok(());
        }

        node.converter.recompute(rect);

        let Some(proxy) = node.proxy else {
            log::debug!(target: "dom2scene", "{id:?} has no scene proxy yet, keeping it dirty");
            node.dirty = true;
            return Ok(());
        };

        let style = self.source.computed_style(node.source);
        self.scene.set_opacity(proxy, style.effective_opacity());

        let mut cx = VisualContext {
            scene: &mut self.scene,
            proxy,
            converter: &node.converter,
        };
        node.behavior.element_specific_update(&mut cx, &style);

        self.update_clipping(id)?;

        self.node_mut(id)?.dirty = false;
        Ok(())
    }

    /// One full pass from the root.
    pub fn update_all(&mut self) -> Result<(), MirrorError> {
        if let Some(root) = self.root {
            self.update(root, false, true)?;
        }
        self.dirty = false;
        Ok(())
    }

    /// Like [`update_all`](Self::update_all) but rewrites every element.
    pub fn force_update_all(&mut self) -> Result<(), MirrorError> {
        if let Some(root) = self.root {
            self.update(root, true, true)?;
        }
        self.dirty = false;
        Ok(())
    }

    /// Marks `id` dirty and resyncs the whole tree.
    pub fn handle_mutation(&mut self, id: ElementId) -> Result<(), MirrorError> {
        self.mark_dirty(id)?;
        self.dirty = true;
        self.update_all()
    }

    /// Polls `id` at the configured frame rate until the animation ends.
    pub fn start_animation(&mut self, id: ElementId, now: Instant) -> Result<(), MirrorError> {
        self.node(id)?;
        let interval = self.settings.frame_interval();
        self.animations.start(id, interval, now);
        log::debug!(target: "dom2scene", "animation started on {id:?}, polling every {interval:?}");
        Ok(())
    }

    /// Stops polling `id` and runs one last resync for the final frame.
    pub fn stop_animation(&mut self, id: ElementId) -> Result<(), MirrorError> {
        self.node(id)?;
        self.animations.cancel(id);
        log::debug!(target: "dom2scene", "animation stopped on {id:?}");
        self.handle_mutation(id)
    }

    /// Fires due animation timers. Returns how many fired.
    ///
    /// All elements whose timer fired are marked dirty and share one pass.
    pub fn tick(&mut self, now: Instant) -> Result<usize, MirrorError> {
        let fired = self.animations.due(now);
        if fired.is_empty() {
            return Ok(0);
        }
        for id in &fired {
            self.mark_dirty(*id)?;
        }
        self.dirty = true;
        self.update_all()?;
        Ok(fired.len())
    }

    /// Routes a source-tree event to the element mirroring `source_node`.
    ///
    /// Returns `false` when the node is not mirrored or its handlers are not
    /// set up for this kind of event.
    pub fn dispatch(
        &mut self,
        source_node: S::NodeId,
        event: SourceEvent,
        now: Instant,
    ) -> Result<bool, MirrorError> {
        let Some(id) = self.element_for(source_node) else {
            log::debug!(target: "dom2scene", "{event:?} on unmirrored node {source_node:?}");
            return Ok(false);
        };
        if !self.node(id)?.observed.covers(event) {
            return Ok(false);
        }

        match event {
            SourceEvent::AnimationStart | SourceEvent::TransitionStart => {
                self.start_animation(id, now)?
            }
            SourceEvent::AnimationEnd | SourceEvent::TransitionEnd => self.stop_animation(id)?,
            SourceEvent::AttributesChanged
            | SourceEvent::CharacterDataChanged
            | SourceEvent::Input
            | SourceEvent::ListenerAdded
            | SourceEvent::ListenerRemoved => self.handle_mutation(id)?,
        }
        Ok(true)
    }

    /// Removes `id` and its subtree, cancelling timers and dropping any
    /// clipping context one of them was authority of.
    pub fn remove_element(&mut self, id: ElementId) -> Result<(), MirrorError> {
        let children = self.node(id)?.children.clone();
        for child in children {
            self.remove_element(child)?;
        }

        let node = self
            .elements
            .remove(id)
            .ok_or(MirrorError::UnknownElement(id))?;
        self.by_source.remove(&node.source);
        self.animations.cancel(id);
        if let Some(context) = node.clipping {
            if self.clipping.is_authority(context, id) {
                self.clipping.remove(context);
                self.detach_clipping_context(context);
            }
        }
        if let Some(parent) = node.parent.and_then(|parent| self.elements.get_mut(parent)) {
            parent.remove_child(id);
        }
        if self.root == Some(id) {
            self.root = None;
        }
        Ok(())
    }

    /// Strips a dropped context from every element still sharing it, so no
    /// material keeps handles into a removed arena slot.
    fn detach_clipping_context(&mut self, context: ClippingContextId) {
        let mut proxies = Vec::new();
        for (_, node) in self.elements.iter_mut() {
            if node.clipping != Some(context) {
                continue;
            }
            node.clipping = None;
            node.clipping_installed = false;
            proxies.extend(node.proxy);
        }
        for proxy in proxies {
            if let Some(material) = self.scene.material_mut(proxy) {
                material.clipping = false;
                material.clipping_planes.clear();
                material.mark_needs_update();
            }
        }
    }

    /// Stable asset id for `path`, registering it with the scene on first use.
    pub fn get_asset(&mut self, path: &str, kind: AssetKind) -> AssetId {
        let (id, created) = self.assets.get_or_register(path, kind);
        if created {
            self.scene.register_asset(&id, path, kind);
        }
        id
    }

    fn node(&self, id: ElementId) -> Result<&ElementNode<S, B>, MirrorError> {
        self.elements.get(id).ok_or(MirrorError::UnknownElement(id))
    }

    fn node_mut(&mut self, id: ElementId) -> Result<&mut ElementNode<S, B>, MirrorError> {
        self.elements
            .get_mut(id)
            .ok_or(MirrorError::UnknownElement(id))
    }
}
