//! 2D vector primitives used by the integration and preview loops
//!
//! Thin wrappers over `glam::Vec2` so the force law reads the same in both
//! hot loops.

use glam::Vec2;

/// Vector pointing from `from` to `to`
#[inline]
pub fn delta(from: Vec2, to: Vec2) -> Vec2 {
    to - from
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.dot(b)
}

#[inline]
pub fn scale(v: Vec2, s: f32) -> Vec2 {
    v * s
}

/// `acc += v * s`
#[inline]
pub fn accumulate(acc: &mut Vec2, v: Vec2, s: f32) {
    *acc += v * s;
}

/// Squared length of `delta`, never below `min`
#[inline]
pub fn clamped_distance_sq(delta: Vec2, min: f32) -> f32 {
    dot(delta, delta).max(min)
}

/// Inverse-square acceleration toward a source of `mass` at offset `delta`
#[inline]
pub fn pull(mass: f32, delta: Vec2, min_distance_sq: f32) -> Vec2 {
    let distance_sq = clamped_distance_sq(delta, min_distance_sq);
    scale(delta, mass / distance_sq.powf(1.5))
}
