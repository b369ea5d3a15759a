//! Headless fountain effect.
//!
//! Builds a classic fountain: particles spray upward from a point, fall
//! under gravity, and fade out over their lifetime. Runs for a few
//! seconds of simulated frames against a counting canvas and prints
//! what each second would have drawn.
//!
//! ```sh
//! cargo run --example fountain
//! ```

use hanabi_core::{Color4, Vector3};
use hanabi_fx::emitter::RateEmitter;
use hanabi_fx::generator::{ColorGenerator, LifetimeGenerator, PointGenerator, VelocityGenerator};
use hanabi_fx::render::{Canvas, ClipRect, PointRenderer, RenderContext, Renderer};
use hanabi_fx::updater::{ColorFadeUpdater, ForceUpdater, LifetimeUpdater, MovementUpdater};
use hanabi_fx::{attr, Effect, ParticleSystem};

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 600.0;

/// Counts drawing calls instead of rasterizing them.
#[derive(Default)]
struct CountingCanvas {
    clears: usize,
    circles: usize,
}

impl Canvas for CountingCanvas {
    fn clear(&mut self, _region: &ClipRect) {
        self.clears += 1;
    }

    fn fill_circle(&mut self, _x: f32, _y: f32, _radius: f32, _color: [u8; 4]) {
        self.circles += 1;
    }
}

fn fountain_system() -> hanabi_fx::Result<ParticleSystem> {
    let spout = Vector3::new(WIDTH / 2.0, HEIGHT - 20.0, 0.0);
    let up = Vector3::new(0.0, -1.0, 0.0);

    Ok(ParticleSystem::new(4096)
        .with_buffer(attr::POSITION, 4)?
        .with_buffer(attr::VELOCITY, 4)?
        .with_buffer(attr::COLOR, 4)?
        .with_buffer(attr::LIFE, 4)?
        .with_emitter(
            RateEmitter::new(600.0)
                .with_generator(PointGenerator::new(spout, 1).with_jitter(Vector3::new(4.0, 0.0, 0.0)))
                .with_generator(VelocityGenerator::new(up, 250.0..350.0, 2).with_spread(0.15))
                .with_generator(ColorGenerator::new(
                    Color4::rgb(0.4, 0.7, 1.0),
                    Color4::rgb(0.8, 0.95, 1.0),
                    3,
                ))
                .with_generator(LifetimeGenerator::new(2.0..3.0, 4)),
        )
        .with_updater(ForceUpdater::gravity(200.0))
        .with_updater(MovementUpdater::new())
        .with_updater(ColorFadeUpdater::new(
            Color4::rgb(0.4, 0.7, 1.0),
            Color4::new(0.8, 0.95, 1.0, 0.0),
        ))
        .with_updater(LifetimeUpdater::new()))
}

fn main() -> hanabi_fx::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut effect = Effect::new("fountain").with_system(fountain_system()?);
    let mut renderer = PointRenderer::new(2.0);
    let mut ctx = RenderContext::new(WIDTH, HEIGHT, Box::new(CountingCanvas::default()))?;

    let dt = 1.0 / 60.0;
    for frame in 1..=300 {
        effect.update(dt)?;
        effect.render(&mut renderer, &mut ctx)?;

        if frame % 60 == 0 {
            let alive = effect.systems()[0].pool().num_alive();
            println!("t = {:>2}s  alive particles: {alive}", frame / 60);
        }
    }

    Ok(())
}
