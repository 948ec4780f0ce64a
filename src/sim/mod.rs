//! Gravity simulation core
//!
//! Pure and frame-stepped:
//! - Single thread of control, no suspension points
//! - Stable iteration order (insertion order)
//! - No rendering, input or platform dependencies
//! - Identical inputs produce identical outputs

pub mod body;
pub mod launch;
pub mod predict;
pub mod scenario;
pub mod state;
pub mod tick;
pub mod vector;

pub use body::{Body, BodyHandle, BodySet};
pub use launch::Launch;
pub use predict::{GravitySource, PathPreview, Trajectory, TrajectorySample, predict};
pub use scenario::orbital_ring;
pub use state::Simulation;
pub use tick::{Integrator, SelfInteraction, UpdateOrder, acceleration_at, step_all};
