use glam::Vec3;
use slotmap::{SlotMap, new_key_type};

use crate::element::ElementId;

mod plane;

pub use plane::*;

new_key_type! {
    pub struct ClippingContextId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneSide {
    Bottom,
    Top,
    Left,
    Right,
}

impl PlaneSide {
    pub const ALL: [PlaneSide; 4] = [Self::Bottom, Self::Top, Self::Left, Self::Right];

    /// Sides installed on materials and moved on update. Only the bottom
    /// plane is wired up; the other three stay parked at the origin.
    pub const ACTIVE: [PlaneSide; 1] = [Self::Bottom];

    pub const fn normal(self) -> Vec3 {
        match self {
            Self::Bottom => Vec3::Y,
            Self::Top => Vec3::NEG_Y,
            Self::Left => Vec3::X,
            Self::Right => Vec3::NEG_X,
        }
    }
}

/// One `overflow: hidden` boundary shared by a whole clipped subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct ClippingContext {
    authority: ElementId,
    bottom: Plane,
    top: Plane,
    left: Plane,
    right: Plane,
}

impl ClippingContext {
    pub fn new(authority: ElementId) -> Self {
        Self {
            authority,
            bottom: Plane::new(PlaneSide::Bottom.normal(), 0.0),
            top: Plane::new(PlaneSide::Top.normal(), 0.0),
            left: Plane::new(PlaneSide::Left.normal(), 0.0),
            right: Plane::new(PlaneSide::Right.normal(), 0.0),
        }
    }

    pub fn authority(&self) -> ElementId {
        self.authority
    }

    pub fn plane(&self, side: PlaneSide) -> Plane {
        match side {
            PlaneSide::Bottom => self.bottom,
            PlaneSide::Top => self.top,
            PlaneSide::Left => self.left,
            PlaneSide::Right => self.right,
        }
    }

    pub fn planes(&self) -> [Plane; 4] {
        [self.bottom, self.top, self.left, self.right]
    }
}

/// Owns every clipping context; elements hold [`ClippingContextId`]s.
///
/// Plane positions change only through [`ClippingArena::reposition_bottom`],
/// which checks the caller against the context's authority.
#[derive(Debug, Default)]
pub struct ClippingArena {
    contexts: SlotMap<ClippingContextId, ClippingContext>,
}

impl ClippingArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, authority: ElementId) -> ClippingContextId {
        self.contexts.insert(ClippingContext::new(authority))
    }

    pub fn get(&self, id: ClippingContextId) -> Option<&ClippingContext> {
        self.contexts.get(id)
    }

    pub fn remove(&mut self, id: ClippingContextId) -> Option<ClippingContext> {
        self.contexts.remove(id)
    }

    pub fn is_authority(&self, id: ClippingContextId, element: ElementId) -> bool {
        self.contexts
            .get(id)
            .is_some_and(|context| context.authority == element)
    }

    pub fn resolve(&self, plane: crate::scene::ClipPlaneRef) -> Option<Plane> {
        self.contexts
            .get(plane.context)
            .map(|context| context.plane(plane.side))
    }

    /// Moves the bottom plane through `point` with an upward normal.
    ///
    /// Returns `false` without touching the planes when `requester` is not
    /// the authority or the context no longer exists.
    pub fn reposition_bottom(
        &mut self,
        id: ClippingContextId,
        requester: ElementId,
        point: Vec3,
    ) -> bool {
        let Some(context) = self.contexts.get_mut(id) else {
            return false;
        };
        if context.authority != requester {
            return false;
        }
        context
            .bottom
            .set_from_normal_and_coplanar_point(PlaneSide::Bottom.normal(), point)
            .normalize();
        true
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}
