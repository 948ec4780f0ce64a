//! Point-mass bodies and the ordered set that owns them

use glam::Vec2;

use crate::render::RenderTag;

/// Stable identifier for a spawned body. Not an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub u32);

/// A simulated point mass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub id: BodyHandle,
    /// Always > 0 (checked at spawn)
    pub mass: f32,
    pub position: Vec2,
    /// Displacement per step
    pub velocity: Vec2,
    /// Last computed acceleration (recomputed from scratch every step)
    pub acceleration: Vec2,
    /// Anchors are gravity sources only: never integrated, never despawned
    pub is_anchor: bool,
    pub render: RenderTag,
}

impl Body {
    pub fn new(
        id: BodyHandle,
        mass: f32,
        position: Vec2,
        velocity: Vec2,
        is_anchor: bool,
        render: RenderTag,
    ) -> Self {
        Self {
            id,
            mass,
            position,
            velocity,
            acceleration: Vec2::ZERO,
            is_anchor,
            render,
        }
    }
}

/// All live bodies in insertion order
///
/// Stored as one contiguous array so the per-step loops index straight into
/// it. Indices shift on removal; hold a [`BodyHandle`] instead.
#[derive(Debug, Clone, Default)]
pub struct BodySet {
    bodies: Vec<Body>,
    /// Start-of-step copy used by snapshot integration
    pub(crate) snapshot: Vec<Body>,
    next_id: u32,
}

impl BodySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a handle. Handles are never reused within a set.
    pub(crate) fn next_handle(&mut self) -> BodyHandle {
        let id = self.next_id;
        self.next_id += 1;
        BodyHandle(id)
    }

    pub(crate) fn push(&mut self, body: Body) -> BodyHandle {
        let id = body.id;
        self.bodies.push(body);
        id
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Remove a body by handle, keeping the order of the rest
    pub(crate) fn remove(&mut self, handle: BodyHandle) -> Option<Body> {
        let index = self.index_of(handle)?;
        Some(self.bodies.remove(index))
    }

    pub(crate) fn clear(&mut self) {
        self.bodies.clear();
        self.snapshot.clear();
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    /// Body 0: the preview's only gravity source
    pub fn first(&self) -> Option<&Body> {
        self.bodies.first()
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == handle)
    }

    pub fn index_of(&self, handle: BodyHandle) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == handle)
    }
}

impl<'a> IntoIterator for &'a BodySet {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
