//! Seeded starting layouts

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::BodyHandle;
use super::launch::Launch;
use super::state::Simulation;
use crate::{orbit_tangent, polar_to_cartesian};

/// Spawn `count` default planets on near-circular orbits around body 0
///
/// Radii are drawn from `inner..outer` and angles uniformly. Each planet gets
/// the tangential speed `sqrt(M / r)` for a circular orbit at its radius. The
/// same seed always yields the same layout. Non-finite or non-positive
/// radii spawn nothing.
pub fn orbital_ring(
    sim: &mut Simulation,
    seed: u64,
    count: usize,
    inner: f32,
    outer: f32,
) -> Vec<BodyHandle> {
    let Some(center) = sim.bodies().first().copied() else {
        return Vec::new();
    };
    if !(inner.is_finite() && outer.is_finite() && inner > 0.0 && outer > 0.0) {
        log::warn!("Ignoring orbital ring with radii {}..{}", inner, outer);
        return Vec::new();
    }
    let mut rng = Pcg32::seed_from_u64(seed);
    let scale = sim.config().velocity_scale;
    let (inner, outer) = if inner < outer { (inner, outer) } else { (outer, inner) };

    let handles: Vec<BodyHandle> = (0..count)
        .map(|_| {
            let r = if inner < outer {
                rng.random_range(inner..outer)
            } else {
                inner
            };
            let theta = rng.random_range(0.0..std::f32::consts::TAU);
            let position = polar_to_cartesian(center.position, r, theta);
            let speed = (center.mass / r).sqrt();
            let velocity = orbit_tangent(position - center.position) * speed;
            // velocity / 0 would come back as NaN after scaling
            let impulse = if scale != 0.0 { velocity / scale } else { Vec2::ZERO };
            sim.launch(Launch::new(position, impulse))
        })
        .collect();

    log::info!(
        "Seeded {} bodies between r={} and r={} (seed {})",
        handles.len(),
        inner,
        outer,
        seed
    );
    handles
}
