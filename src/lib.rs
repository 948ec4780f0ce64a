//! Gravity Well - point-mass gravity toy simulation
//!
//! Core modules:
//! - `sim`: Frame-stepped N-body integration and trajectory preview
//! - `render`: Plain-data hand-off to whatever draws the bodies
//! - `settings`: Start-of-run simulation configuration
//! - `error`: Error types for spawning and configuration

pub mod error;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, InvalidMassError};
pub use settings::SimConfig;
pub use sim::{Body, BodyHandle, BodySet, Launch, PathPreview, Simulation, Trajectory};

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    use glam::Vec2;

    /// Target step rate (steps per second of wall time)
    pub const FRAME_RATE: f32 = 60.0;
    /// Maximum steps per `advance` call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta `advance` will accept (seconds)
    pub const MAX_FRAME_DELTA: f32 = 0.1;

    /// Center of a 1280x768 view, one simulation unit per pixel
    pub const WORLD_CENTER: Vec2 = Vec2::new(640.0, 384.0);

    /// Anchor ("sun") defaults
    pub const ANCHOR_MASS: f32 = 3000.0;
    pub const ANCHOR_RADIUS: f32 = 10.0;

    /// Planet defaults
    pub const BODY_MASS: f32 = 50.0;
    pub const BODY_RADIUS: f32 = 5.0;

    /// Lower bound on squared separation in the force law
    pub const MIN_DISTANCE_SQ: f32 = 20.0;
    /// Drag impulse (pixels) to velocity (pixels/step)
    pub const VELOCITY_SCALE: f32 = 0.04;

    /// Trajectory preview length in steps
    pub const PATH_LENGTH: usize = 1000;
    /// Render every Nth preview sample
    pub const PATH_STRIDE: usize = 5;
    pub const PATH_RADIUS: f32 = 2.0;
}

/// Convert polar (r, theta) around `center` to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(center: Vec2, r: f32, theta: f32) -> Vec2 {
    center + Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Unit tangent (counter-clockwise) of the circle through `offset` around the origin
#[inline]
pub fn orbit_tangent(offset: Vec2) -> Vec2 {
    offset.perp().normalize_or_zero()
}
