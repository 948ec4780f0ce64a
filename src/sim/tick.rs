//! Fixed step integration
//!
//! One call to [`step_all`] advances every non-anchor body by one discrete
//! step using semi-implicit Euler: acceleration from current positions, then
//! `velocity += acceleration`, then `position += velocity`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, BodySet};
use super::vector::{delta, pull};

/// Whether a body's own mass appears in its force sum
///
/// The self term has a zero offset, so after the distance clamp it
/// contributes exactly zero either way. `Exclude` just skips the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfInteraction {
    #[default]
    Include,
    Exclude,
}

/// Which positions a body sees while a step is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateOrder {
    /// Every body reads the positions from the start of the step
    #[default]
    Snapshot,
    /// Bodies later in the set see earlier bodies' already-advanced positions
    InPlace,
}

impl UpdateOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateOrder::Snapshot => "snapshot",
            UpdateOrder::InPlace => "in_place",
        }
    }
}

/// Parameters for one integration step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    pub min_distance_sq: f32,
    pub self_interaction: SelfInteraction,
    pub update_order: UpdateOrder,
}

/// Net acceleration at `target` from every body in `sources`
///
/// `self_index` names the body being integrated so it can be skipped under
/// [`SelfInteraction::Exclude`].
#[inline]
pub fn acceleration_at(
    target: Vec2,
    self_index: usize,
    sources: &[Body],
    min_distance_sq: f32,
    self_interaction: SelfInteraction,
) -> Vec2 {
    let mut acc = Vec2::ZERO;
    for (j, source) in sources.iter().enumerate() {
        if j == self_index && self_interaction == SelfInteraction::Exclude {
            continue;
        }
        acc += pull(source.mass, delta(target, source.position), min_distance_sq);
    }
    acc
}

/// Apply a freshly computed acceleration to one body
#[inline]
fn integrate(body: &mut Body, acceleration: Vec2) {
    body.acceleration = acceleration;
    body.velocity += acceleration;
    body.position += body.velocity;
}

/// Advance every non-anchor body by one step
pub fn step_all(set: &mut BodySet, integrator: Integrator) {
    match integrator.update_order {
        UpdateOrder::Snapshot => step_snapshot(set, integrator),
        UpdateOrder::InPlace => step_in_place(set.bodies_mut(), integrator),
    }
    log::trace!(
        "Stepped {} bodies ({})",
        set.len(),
        integrator.update_order.as_str()
    );
}

fn step_snapshot(set: &mut BodySet, integrator: Integrator) {
    let mut snapshot = std::mem::take(&mut set.snapshot);
    snapshot.clear();
    snapshot.extend_from_slice(set.as_slice());

    for (i, body) in set.bodies_mut().iter_mut().enumerate() {
        if body.is_anchor {
            continue;
        }
        let acceleration = acceleration_at(
            body.position,
            i,
            &snapshot,
            integrator.min_distance_sq,
            integrator.self_interaction,
        );
        integrate(body, acceleration);
    }

    set.snapshot = snapshot;
}

fn step_in_place(bodies: &mut [Body], integrator: Integrator) {
    for i in 0..bodies.len() {
        if bodies[i].is_anchor {
            continue;
        }
        let acceleration = acceleration_at(
            bodies[i].position,
            i,
            bodies,
            integrator.min_distance_sq,
            integrator.self_interaction,
        );
        integrate(&mut bodies[i], acceleration);
    }
}
