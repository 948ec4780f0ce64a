//! Trajectory preview
//!
//! Runs the live step rule forward from a candidate launch, but against a
//! single gravity source (body 0, normally the anchor). Cheaper than the full
//! N-body step and deliberately less accurate. Never touches live state.

use glam::Vec2;

use super::launch::Launch;
use super::state::Simulation;
use super::vector::{delta, pull};

/// The one body the preview integrates against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravitySource {
    pub mass: f32,
    pub position: Vec2,
}

/// One point on a predicted path
pub type TrajectorySample = Vec2;

/// Fixed-length predicted path, oldest sample first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn last(&self) -> Option<TrajectorySample> {
        self.samples.last().copied()
    }

    /// Every `stride`-th sample starting with the first. A zero stride is
    /// treated as 1.
    pub fn sparse(&self, stride: usize) -> impl Iterator<Item = TrajectorySample> + '_ {
        self.samples.iter().step_by(stride.max(1)).copied()
    }
}

/// Predict `samples` positions starting at `start` with per-step `velocity`
///
/// Each sample is the position after one more step, so sample 0 is already
/// one step past `start`. With no source the path is a straight line.
pub fn predict(
    source: Option<GravitySource>,
    start: Vec2,
    velocity: Vec2,
    samples: usize,
    min_distance_sq: f32,
) -> Trajectory {
    let mut position = start;
    let mut velocity = velocity;
    let mut out = Vec::with_capacity(samples);

    for _ in 0..samples {
        let acceleration = match source {
            Some(s) => pull(s.mass, delta(position, s.position), min_distance_sq),
            None => Vec2::ZERO,
        };
        velocity += acceleration;
        position += velocity;
        out.push(position);
    }

    Trajectory { samples: out }
}

/// Drag-to-launch preview tracking
///
/// Holds only the press origin between calls; the path itself is rebuilt
/// from scratch on every update.
#[derive(Debug, Clone, Default)]
pub struct PathPreview {
    origin: Option<Vec2>,
    path: Trajectory,
}

impl PathPreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag at `origin`
    pub fn begin(&mut self, origin: Vec2) {
        self.origin = Some(origin);
        self.path = Trajectory::default();
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    pub fn origin(&self) -> Option<Vec2> {
        self.origin
    }

    /// Recompute the path for the cursor's current position
    pub fn update(&mut self, sim: &Simulation, cursor: Vec2) -> Option<&Trajectory> {
        let origin = self.origin?;
        let launch = Launch::from_drag(origin, cursor);
        self.path =
            sim.predict_trajectory(launch.position, launch.impulse, sim.config().path_length);
        Some(&self.path)
    }

    /// Last computed path (empty until the first update)
    pub fn trajectory(&self) -> &Trajectory {
        &self.path
    }

    /// End the drag and hand back the launch it describes
    pub fn release(&mut self, cursor: Vec2) -> Option<Launch> {
        let origin = self.origin.take()?;
        self.path = Trajectory::default();
        Some(Launch::from_drag(origin, cursor))
    }

    /// Abandon the drag without launching
    pub fn cancel(&mut self) {
        self.origin = None;
        self.path = Trajectory::default();
    }
}
