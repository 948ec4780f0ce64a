//! Simulation configuration
//!
//! Fixed at start of run: a [`crate::Simulation`] copies its config on
//! construction and never exposes a way to change it afterwards.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::tick::{Integrator, SelfInteraction, UpdateOrder};

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Anchor ===
    /// Mass of the anchor spawned by `reset_simulation`
    pub anchor_mass: f32,
    /// Where the anchor sits
    pub anchor_position: Vec2,
    /// Render radius of the anchor
    pub anchor_radius: f32,

    // === Planets ===
    /// Mass of gesture-launched bodies
    pub body_mass: f32,
    /// Render radius of gesture-launched bodies
    pub body_radius: f32,

    // === Integration ===
    /// Lower bound on squared separation in the force law
    pub min_distance_sq: f32,
    /// Drag impulse to velocity conversion
    pub velocity_scale: f32,
    /// Whether a body's own mass is part of its force sum
    pub self_interaction: SelfInteraction,
    /// Which positions a step reads while integrating
    pub update_order: UpdateOrder,
    /// Steps per second of wall time for `advance`
    pub frame_rate: f32,

    // === Preview ===
    /// Number of samples in a trajectory preview
    pub path_length: usize,
    /// Sample stride when handing the preview to a renderer
    pub path_stride: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            anchor_mass: ANCHOR_MASS,
            anchor_position: WORLD_CENTER,
            anchor_radius: ANCHOR_RADIUS,

            body_mass: BODY_MASS,
            body_radius: BODY_RADIUS,

            min_distance_sq: MIN_DISTANCE_SQ,
            velocity_scale: VELOCITY_SCALE,
            self_interaction: SelfInteraction::default(),
            update_order: UpdateOrder::default(),
            frame_rate: FRAME_RATE,

            path_length: PATH_LENGTH,
            path_stride: PATH_STRIDE,
        }
    }
}

impl SimConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default config");
            return Self::default();
        };

        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the values the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("anchor_mass", self.anchor_mass)?;
        positive("body_mass", self.body_mass)?;
        positive("min_distance_sq", self.min_distance_sq)?;
        positive("frame_rate", self.frame_rate)?;
        if !self.velocity_scale.is_finite() {
            return Err(ConfigError::invalid("velocity_scale", "must be finite"));
        }
        if !self.anchor_position.is_finite() {
            return Err(ConfigError::invalid("anchor_position", "must be finite"));
        }
        if self.path_stride == 0 {
            return Err(ConfigError::invalid("path_stride", "must be at least 1"));
        }
        Ok(())
    }

    /// Integration parameters for [`crate::sim::tick::step_all`]
    pub fn integrator(&self) -> Integrator {
        Integrator {
            min_distance_sq: self.min_distance_sq,
            self_interaction: self.self_interaction,
            update_order: self.update_order,
        }
    }

    /// Wall-clock seconds per simulation step
    pub fn step_interval(&self) -> f32 {
        1.0 / self.frame_rate
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must be positive and finite, got {value}"),
        ))
    }
}
