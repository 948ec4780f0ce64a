//! Render hand-off types
//!
//! Nothing here draws. These are the plain-old-data shapes a renderer pulls
//! out of the simulation each frame.

use bytemuck::{Pod, Zeroable};

use crate::consts::PATH_RADIUS;
use crate::sim::{Body, Trajectory};

/// Per-body presentation data. Carried by the core, never read by it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTag {
    pub color: [f32; 4],
    pub radius: f32,
}

impl RenderTag {
    pub const fn new(color: [f32; 4], radius: f32) -> Self {
        Self { color, radius }
    }
}

/// One circle to draw: GPU-uploadable as-is
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    pub position: [f32; 2],
    pub radius: f32,
    pub color: [f32; 4],
}

impl BodyInstance {
    pub const fn new(x: f32, y: f32, radius: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            radius,
            color,
        }
    }
}

/// Instances for every live body, in registry order
pub fn instances(bodies: &[Body]) -> Vec<BodyInstance> {
    bodies
        .iter()
        .map(|b| BodyInstance::new(b.position.x, b.position.y, b.render.radius, b.render.color))
        .collect()
}

/// Sparse dots along a preview path
pub fn path_instances(path: &Trajectory, stride: usize) -> Vec<BodyInstance> {
    path.sparse(stride)
        .map(|p| BodyInstance::new(p.x, p.y, PATH_RADIUS, colors::PATH))
        .collect()
}

/// Default palette
pub mod colors {
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const PLANET: [f32; 4] = rgb(100, 177, 92);
    pub const ANCHOR: [f32; 4] = rgb(254, 131, 35);
    pub const PATH: [f32; 4] = rgb(105, 151, 188);
}
