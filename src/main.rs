//! Gravity Well headless driver
//!
//! Seeds a ring of planets, previews and fires one slingshot launch, then
//! runs ten seconds of simulated frames and logs what happened. Rendering
//! and input live elsewhere; this only exercises the core.

use std::path::PathBuf;

use anyhow::Context;
use glam::Vec2;

use gravity_well::consts::FRAME_RATE;
use gravity_well::render::{instances, path_instances};
use gravity_well::sim::{PathPreview, orbital_ring};
use gravity_well::{SimConfig, Simulation};

const DEMO_SEED: u64 = 2024;
const DEMO_SECONDS: u32 = 10;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Gravity Well (headless) starting...");

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = SimConfig::load_or_default(config_path.as_deref());
    let mut sim = Simulation::new(config).context("invalid simulation config")?;

    orbital_ring(&mut sim, DEMO_SEED, 12, 120.0, 320.0);

    // Pull back from just left of the anchor and let go
    let anchor = sim.bodies()[0].position;
    let press = anchor + Vec2::new(-250.0, 0.0);
    let release = press + Vec2::new(0.0, 90.0);

    let mut preview = PathPreview::new();
    preview.begin(press);
    if let Some(path) = preview.update(&sim, release) {
        let dots = path_instances(path, sim.config().path_stride);
        log::info!(
            "Preview: {} samples, {} dots, ends at {:?}",
            path.len(),
            dots.len(),
            path.last()
        );
    }
    if let Some(launch) = preview.release(release) {
        let handle = sim.launch(launch);
        log::info!("Launched {:?} with impulse {}", handle, launch.impulse);
    }

    let frame = 1.0 / FRAME_RATE;
    for second in 1..=DEMO_SECONDS {
        for _ in 0..FRAME_RATE as u32 {
            sim.advance(frame);
        }
        let planets: Vec<f32> = sim
            .bodies()
            .iter()
            .filter(|b| !b.is_anchor)
            .map(|b| (b.position - anchor).length())
            .collect();
        let mean = planets.iter().sum::<f32>() / planets.len().max(1) as f32;
        log::info!(
            "t={}s steps={} bodies={} mean anchor distance={:.1}",
            second,
            sim.steps(),
            sim.bodies().len(),
            mean
        );
    }

    let buffer = instances(sim.bodies());
    log::info!(
        "Final instance buffer: {} bodies, {} bytes",
        buffer.len(),
        bytemuck::cast_slice::<_, u8>(&buffer).len()
    );
    Ok(())
}
