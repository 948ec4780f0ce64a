//! Simulation state and body registry
//!
//! A [`Simulation`] owns the body set and the configuration it was built with.
//! Callers spawn, despawn and reset between steps, never during one.

use glam::Vec2;

use super::body::{Body, BodyHandle, BodySet};
use super::launch::Launch;
use super::predict::{GravitySource, Trajectory, predict};
use super::tick::step_all;
use crate::consts::{MAX_FRAME_DELTA, MAX_SUBSTEPS};
use crate::error::{ConfigError, InvalidMassError};
use crate::render::{RenderTag, colors};
use crate::settings::SimConfig;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    bodies: BodySet,
    /// Steps taken since the last reset
    steps: u64,
    /// Unspent wall time for `advance` (seconds)
    accumulator: f32,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::from_valid_config(SimConfig::default())
    }
}

impl Simulation {
    /// Create a simulation holding just the configured anchor
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: SimConfig) -> Self {
        let mut sim = Self {
            config,
            bodies: BodySet::new(),
            steps: 0,
            accumulator: 0.0,
        };
        sim.reset_simulation();
        sim
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Live bodies in insertion order
    pub fn bodies(&self) -> &[Body] {
        self.bodies.as_slice()
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.bodies.get(handle)
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Spawn a body with the default tag for its kind
    pub fn spawn_body(
        &mut self,
        position: Vec2,
        mass: f32,
        impulse: Vec2,
        is_anchor: bool,
    ) -> Result<BodyHandle, InvalidMassError> {
        let render = if is_anchor {
            RenderTag::new(colors::ANCHOR, self.config.anchor_radius)
        } else {
            RenderTag::new(colors::PLANET, self.config.body_radius)
        };
        self.spawn_tagged(position, mass, impulse, is_anchor, render)
    }

    /// Spawn a body. `impulse` is scaled by `velocity_scale` to get the
    /// starting velocity.
    pub fn spawn_tagged(
        &mut self,
        position: Vec2,
        mass: f32,
        impulse: Vec2,
        is_anchor: bool,
        render: RenderTag,
    ) -> Result<BodyHandle, InvalidMassError> {
        if mass.is_nan() || mass <= 0.0 {
            return Err(InvalidMassError { mass });
        }
        Ok(self.insert(position, mass, impulse, is_anchor, render))
    }

    /// Spawn a default planet from a slingshot gesture
    ///
    /// Infallible: `body_mass` is checked when the config is validated.
    pub fn launch(&mut self, launch: Launch) -> BodyHandle {
        let render = RenderTag::new(colors::PLANET, self.config.body_radius);
        self.insert(launch.position, self.config.body_mass, launch.impulse, false, render)
    }

    /// Single insertion path; `mass` must already be known positive
    fn insert(
        &mut self,
        position: Vec2,
        mass: f32,
        impulse: Vec2,
        is_anchor: bool,
        render: RenderTag,
    ) -> BodyHandle {
        let id = self.bodies.next_handle();
        let velocity = impulse * self.config.velocity_scale;
        log::debug!(
            "Spawned {} {:?} mass={} at {} vel={}",
            if is_anchor { "anchor" } else { "body" },
            id,
            mass,
            position,
            velocity
        );
        self.bodies
            .push(Body::new(id, mass, position, velocity, is_anchor, render))
    }

    /// Remove a non-anchor body. Anchors stay put.
    pub fn despawn(&mut self, handle: BodyHandle) -> Option<Body> {
        match self.bodies.get(handle) {
            Some(body) if body.is_anchor => {
                log::warn!("Refusing to despawn anchor {:?}", handle);
                None
            }
            Some(_) => {
                log::debug!("Despawned {:?}", handle);
                self.bodies.remove(handle)
            }
            None => None,
        }
    }

    /// Clear everything and respawn the configured anchor
    pub fn reset_simulation(&mut self) {
        self.bodies.clear();
        self.steps = 0;
        self.accumulator = 0.0;

        let render = RenderTag::new(colors::ANCHOR, self.config.anchor_radius);
        self.insert(
            self.config.anchor_position,
            self.config.anchor_mass,
            Vec2::ZERO,
            true,
            render,
        );
        log::info!(
            "Simulation reset: anchor mass={} at {}",
            self.config.anchor_mass,
            self.config.anchor_position
        );
    }

    /// Advance every non-anchor body by one step
    pub fn step_all(&mut self) {
        step_all(&mut self.bodies, self.config.integrator());
        self.steps += 1;
    }

    /// Run as many steps as `elapsed` seconds of wall time cover at the
    /// configured frame rate. Returns the number of steps taken.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        let interval = self.config.step_interval();
        // max/min rather than clamp: a NaN delta counts as no time at all
        self.accumulator += elapsed.max(0.0).min(MAX_FRAME_DELTA);

        let mut substeps = 0;
        while self.accumulator >= interval && substeps < MAX_SUBSTEPS {
            self.step_all();
            self.accumulator -= interval;
            substeps += 1;
        }
        // Drop time we could not catch up on
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(interval);
        }
        substeps
    }

    /// Preview where a launch from `start` with raw `impulse` would go,
    /// pulled by body 0 alone
    pub fn predict_trajectory(&self, start: Vec2, impulse: Vec2, samples: usize) -> Trajectory {
        let source = self.bodies.first().map(|b| GravitySource {
            mass: b.mass,
            position: b.position,
        });
        predict(
            source,
            start,
            impulse * self.config.velocity_scale,
            samples,
            self.config.min_distance_sq,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::UpdateOrder;
    use proptest::prelude::*;

    fn origin_sim() -> Simulation {
        Simulation::new(SimConfig {
            anchor_position: Vec2::ZERO,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_new_has_single_anchor() {
        let sim = Simulation::default();
        assert_eq!(sim.bodies().len(), 1);
        let anchor = sim.bodies()[0];
        assert!(anchor.is_anchor);
        assert_eq!(anchor.mass, 3000.0);
        assert_eq!(anchor.position, Vec2::new(640.0, 384.0));
        assert_eq!(anchor.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let result = Simulation::new(SimConfig {
            anchor_mass: -5.0,
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_spawn_scales_impulse() {
        let mut sim = Simulation::default();
        let handle = sim
            .spawn_body(Vec2::new(1.0, 2.0), 10.0, Vec2::new(100.0, -50.0), false)
            .unwrap();
        let body = sim.body(handle).unwrap();
        assert_eq!(body.velocity, Vec2::new(4.0, -2.0));
        assert_eq!(body.acceleration, Vec2::ZERO);
        assert_eq!(body.render.color, colors::PLANET);
    }

    #[test]
    fn test_spawn_rejects_bad_mass_without_mutation() {
        let mut sim = Simulation::default();
        let before = sim.bodies().to_vec();
        for mass in [0.0, -1.0, f32::NAN, f32::NEG_INFINITY] {
            let err = sim.spawn_body(Vec2::ZERO, mass, Vec2::ZERO, false);
            assert!(err.is_err());
        }
        assert_eq!(sim.bodies(), before.as_slice());

        // A failed spawn does not burn a handle either
        let next = sim.spawn_body(Vec2::ZERO, 1.0, Vec2::ZERO, false).unwrap();
        assert_eq!(next, BodyHandle(1));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut sim = origin_sim();
        for i in 0..5 {
            sim.spawn_body(Vec2::new(50.0 * i as f32, 10.0), 5.0, Vec2::ZERO, i == 0)
                .unwrap();
        }
        sim.step_all();
        sim.reset_simulation();

        assert_eq!(sim.bodies().len(), 1);
        assert_eq!(sim.steps(), 0);
        let anchor = sim.bodies()[0];
        assert!(anchor.is_anchor);
        assert_eq!(anchor.mass, 3000.0);
        assert_eq!(anchor.position, Vec2::ZERO);
    }

    #[test]
    fn test_despawn() {
        let mut sim = Simulation::default();
        let anchor = sim.bodies()[0].id;
        let planet = sim.spawn_body(Vec2::ZERO, 1.0, Vec2::ZERO, false).unwrap();

        assert!(sim.despawn(anchor).is_none());
        assert_eq!(sim.despawn(planet).map(|b| b.id), Some(planet));
        assert!(sim.despawn(planet).is_none());
        assert_eq!(sim.bodies().len(), 1);
    }

    #[test]
    fn test_end_to_end_single_step() {
        let mut sim = origin_sim();
        let handle = sim
            .spawn_body(Vec2::new(100.0, 0.0), 50.0, Vec2::ZERO, false)
            .unwrap();
        sim.step_all();

        let body = sim.body(handle).unwrap();
        // Coefficient 3000 / 100^3 on the 100-unit offset to the anchor
        let coefficient = 3000.0 / 100.0_f32.powi(3);
        let expected = Vec2::new(-100.0, 0.0) * coefficient;
        assert!((body.acceleration - expected).length() < 1e-6);
        assert_eq!(body.velocity, body.acceleration);
        assert!((body.position - Vec2::new(100.0 + expected.x, 0.0)).length() < 1e-5);
        assert_eq!(sim.steps(), 1);
    }

    #[test]
    fn test_launched_body_orbits() {
        let mut sim = origin_sim();
        // Circular speed sqrt(M / r) = sqrt(3000 / 200) per step
        let speed = (3000.0_f32 / 200.0).sqrt();
        let impulse = Vec2::new(0.0, speed / sim.config().velocity_scale);
        let handle = sim.launch(Launch::new(Vec2::new(200.0, 0.0), impulse));

        for _ in 0..500 {
            sim.step_all();
            let r = sim.body(handle).unwrap().position.length();
            assert!(r > 150.0 && r < 250.0, "orbit drifted to r={r}");
        }
    }

    #[test]
    fn test_advance_fixed_rate() {
        let mut sim = Simulation::default();
        assert_eq!(sim.advance(0.0), 0);
        // Slightly over three intervals at 60 Hz
        assert_eq!(sim.advance(3.5 / 60.0), 3);
        assert_eq!(sim.advance(0.6 / 60.0), 1);
        assert_eq!(sim.steps(), 4);

        // Long stalls are capped
        let taken = sim.advance(10.0);
        assert!(taken <= MAX_SUBSTEPS);
        assert_eq!(sim.advance(-1.0), 0);
    }

    #[test]
    fn test_advance_recovers_from_nan_delta() {
        let mut sim = Simulation::default();
        assert_eq!(sim.advance(f32::NAN), 0);
        assert!(sim.advance(f32::INFINITY) <= MAX_SUBSTEPS);

        let taken: u32 = (0..60).map(|_| sim.advance(1.0 / 60.0)).sum();
        assert!((59..=61).contains(&taken), "took {taken} steps");
    }

    #[test]
    fn test_launch_uses_spawn_defaults() {
        let mut sim = Simulation::default();
        let launch = Launch::from_drag(Vec2::new(100.0, 100.0), Vec2::new(50.0, 100.0));
        let launched = sim.launch(launch);
        let spawned = sim
            .spawn_body(launch.position, sim.config().body_mass, launch.impulse, false)
            .unwrap();

        let launched = *sim.body(launched).unwrap();
        let spawned = *sim.body(spawned).unwrap();
        assert_eq!(launched.mass, 50.0);
        assert_eq!(launched.velocity, Vec2::new(2.0, 0.0));
        assert_eq!(Body { id: spawned.id, ..launched }, spawned);
    }

    #[test]
    fn test_in_place_order_config() {
        let mut sim = Simulation::new(SimConfig {
            anchor_position: Vec2::ZERO,
            update_order: UpdateOrder::InPlace,
            ..Default::default()
        })
        .unwrap();
        let a = sim.spawn_body(Vec2::new(100.0, 0.0), 500.0, Vec2::ZERO, false).unwrap();
        let b = sim.spawn_body(Vec2::new(-100.0, 0.0), 500.0, Vec2::ZERO, false).unwrap();
        sim.step_all();
        let ax = sim.body(a).unwrap().acceleration.x;
        let bx = sim.body(b).unwrap().acceleration.x;
        assert!(ax < 0.0 && bx > 0.0);
        assert_ne!(ax, -bx);
    }

    proptest! {
        #[test]
        fn prop_positive_mass_always_spawns(
            mass in 1e-6f32..1e9,
            x in -1e4f32..1e4,
            y in -1e4f32..1e4,
        ) {
            let mut sim = Simulation::default();
            let handle = sim.spawn_body(Vec2::new(x, y), mass, Vec2::ZERO, false);
            prop_assert!(handle.is_ok());
            prop_assert_eq!(sim.bodies().len(), 2);
        }

        #[test]
        fn prop_non_positive_mass_never_spawns(mass in -1e9f32..=0.0) {
            let mut sim = Simulation::default();
            prop_assert_eq!(
                sim.spawn_body(Vec2::ZERO, mass, Vec2::ZERO, false),
                Err(InvalidMassError { mass })
            );
            prop_assert_eq!(sim.bodies().len(), 1);
        }

        #[test]
        fn prop_anchor_bit_identical(
            steps in 1usize..60,
            bodies in proptest::collection::vec((-400f32..400.0, -400f32..400.0, 1f32..500.0), 0..6),
        ) {
            let mut sim = Simulation::default();
            for (x, y, m) in bodies {
                sim.spawn_body(Vec2::new(x, y), m, Vec2::new(y, x), false).unwrap();
            }
            let before = sim.bodies()[0];
            for _ in 0..steps {
                sim.step_all();
            }
            let after = sim.bodies()[0];
            prop_assert_eq!(after.position.x.to_bits(), before.position.x.to_bits());
            prop_assert_eq!(after.position.y.to_bits(), before.position.y.to_bits());
            prop_assert_eq!(after.velocity.x.to_bits(), before.velocity.x.to_bits());
            prop_assert_eq!(after.velocity.y.to_bits(), before.velocity.y.to_bits());
        }
    }
}
