use bitflags::bitflags;
use slotmap::new_key_type;

use crate::clipping::ClippingContextId;
use crate::geometry::{Converter, DomRect};
use crate::scene::SceneBackend;
use crate::source::{SourceEvent, SourceTree};

mod behavior;

pub use behavior::*;

new_key_type! {
    pub struct ElementId;
}

bitflags! {
    /// Source-tree signals an element reacts to once its handlers are set up.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ObservedEvents: u8 {
        const MUTATIONS = 1 << 0;
        const INPUT = 1 << 1;
        const LISTENERS = 1 << 2;
        const ANIMATIONS = 1 << 3;
    }
}

impl ObservedEvents {
    pub fn covers(self, event: SourceEvent) -> bool {
        let needed = match event {
            SourceEvent::AttributesChanged | SourceEvent::CharacterDataChanged => Self::MUTATIONS,
            SourceEvent::Input => Self::INPUT,
            SourceEvent::ListenerAdded | SourceEvent::ListenerRemoved => Self::LISTENERS,
            SourceEvent::AnimationStart
            | SourceEvent::AnimationEnd
            | SourceEvent::TransitionStart
            | SourceEvent::TransitionEnd => Self::ANIMATIONS,
        };
        self.contains(needed)
    }
}

/// Mirror-side state of one source element.
pub struct ElementNode<S: SourceTree, B: SceneBackend> {
    pub(crate) source: S::NodeId,
    pub(crate) proxy: Option<B::ProxyId>,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
    pub(crate) dirty: bool,
    pub(crate) initialized: bool,
    pub(crate) converter: Converter,
    pub(crate) clipping: Option<ClippingContextId>,
    pub(crate) clipping_installed: bool,
    pub(crate) observed: ObservedEvents,
    pub(crate) behavior: Box<dyn ElementBehavior<B>>,
}

impl<S: SourceTree, B: SceneBackend> ElementNode<S, B> {
    pub(crate) fn new(
        source: S::NodeId,
        rect: DomRect,
        depth_modifier: f32,
        pixels_per_unit: f32,
        behavior: Box<dyn ElementBehavior<B>>,
    ) -> Self {
        Self {
            source,
            proxy: None,
            parent: None,
            children: Vec::new(),
            dirty: false,
            initialized: false,
            converter: Converter::new(rect, depth_modifier, pixels_per_unit),
            clipping: None,
            clipping_installed: false,
            observed: ObservedEvents::empty(),
            behavior,
        }
    }

    pub fn source(&self) -> S::NodeId {
        self.source
    }

    pub fn proxy(&self) -> Option<B::ProxyId> {
        self.proxy
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Child membership; the order carries no meaning.
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    pub fn clipping_context(&self) -> Option<ClippingContextId> {
        self.clipping
    }

    pub fn observed_events(&self) -> ObservedEvents {
        self.observed
    }

    pub(crate) fn add_child(&mut self, child: ElementId) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }

    pub(crate) fn remove_child(&mut self, child: ElementId) {
        self.children.retain(|id| *id != child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_events_cover_their_signals() {
        let observed = ObservedEvents::MUTATIONS | ObservedEvents::ANIMATIONS;
        assert!(observed.covers(SourceEvent::AttributesChanged));
        assert!(observed.covers(SourceEvent::TransitionEnd));
        assert!(!observed.covers(SourceEvent::Input));
        assert!(!ObservedEvents::empty().covers(SourceEvent::CharacterDataChanged));
        assert!(ObservedEvents::all().covers(SourceEvent::ListenerRemoved));
    }
}
