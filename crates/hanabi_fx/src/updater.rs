//! Per-frame particle updaters
//!
//! Updaters mutate the alive range of a pool once per frame: integrating
//! motion, fading color, aging particles. The lifetime updater is also
//! the strategy that retires expired particles, keeping the pool's
//! alive/dead partition honest for everything that runs after it.
//!
//! All updaters here expect to run after the frame's emitters, so fresh
//! spawns receive a full tick of aging and motion in the frame they
//! appear.

use hanabi_core::{Color4, ParticlePool, Tuple4, Vector3};

use crate::attr;
use crate::error::Result;

/// A strategy that mutates alive particle state each frame.
pub trait ParticleUpdater {
    /// Updates the alive range of `pool` for a frame of `dt` seconds.
    ///
    /// Implementations that retire particles must leave `[0, num_alive)`
    /// holding only live particles when they return.
    fn update(&mut self, dt: f32, pool: &mut ParticlePool) -> Result<()>;
}

/// Integrates `"pos"` by `"vel"` over the frame.
#[derive(Default)]
pub struct MovementUpdater {
    // Velocity snapshot, reused across frames to avoid reallocation.
    scratch: Vec<Vector3>,
}

impl MovementUpdater {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParticleUpdater for MovementUpdater {
    fn update(&mut self, dt: f32, pool: &mut ParticlePool) -> Result<()> {
        let alive = pool.num_alive();

        self.scratch.clear();
        let velocities = pool.buffer(attr::VELOCITY)?;
        for slot in 0..alive {
            self.scratch.push(Vector3::marshal(slot, velocities)?);
        }

        let positions = pool.buffer_mut(attr::POSITION)?;
        for (slot, velocity) in self.scratch.iter().enumerate() {
            let position = Vector3::marshal(slot, positions)?;
            (position + *velocity * dt).unmarshal(slot, positions)?;
        }

        Ok(())
    }
}

/// Applies a constant acceleration (gravity, wind) to `"vel"`.
pub struct ForceUpdater {
    acceleration: Vector3,
}

impl ForceUpdater {
    pub fn new(acceleration: Vector3) -> Self {
        Self { acceleration }
    }

    /// Standard downward gravity in screen-space pixels.
    pub fn gravity(strength: f32) -> Self {
        Self::new(Vector3::new(0.0, strength, 0.0))
    }
}

impl ParticleUpdater for ForceUpdater {
    fn update(&mut self, dt: f32, pool: &mut ParticlePool) -> Result<()> {
        let alive = pool.num_alive();
        let delta = self.acceleration * dt;

        let velocities = pool.buffer_mut(attr::VELOCITY)?;
        for slot in 0..alive {
            let velocity = Vector3::marshal(slot, velocities)?;
            (velocity + delta).unmarshal(slot, velocities)?;
        }

        Ok(())
    }
}

/// Rewrites `"color"` as a lerp between two endpoint colors driven by
/// normalized particle age from `"life"`.
pub struct ColorFadeUpdater {
    start: Color4,
    end: Color4,
    // Normalized ages, reused across frames.
    scratch: Vec<f32>,
}

impl ColorFadeUpdater {
    pub fn new(start: Color4, end: Color4) -> Self {
        Self {
            start,
            end,
            scratch: Vec::new(),
        }
    }
}

impl ParticleUpdater for ColorFadeUpdater {
    fn update(&mut self, _dt: f32, pool: &mut ParticlePool) -> Result<()> {
        let alive = pool.num_alive();

        self.scratch.clear();
        let life = pool.buffer(attr::LIFE)?;
        for slot in 0..alive {
            let block = Tuple4::marshal(slot, life)?;
            let t = if block.y > 0.0 {
                (block.x / block.y).clamp(0.0, 1.0)
            } else {
                1.0
            };
            self.scratch.push(t);
        }

        let colors = pool.buffer_mut(attr::COLOR)?;
        for (slot, t) in self.scratch.iter().enumerate() {
            self.start.lerp(*t, self.end).unmarshal(slot, colors)?;
        }

        Ok(())
    }
}

/// Ages particles and retires the ones whose lifetime has expired.
///
/// Run this after the updaters that still need the expiring particles;
/// once it returns, `[0, num_alive)` holds only live particles.
#[derive(Default)]
pub struct LifetimeUpdater;

impl LifetimeUpdater {
    pub fn new() -> Self {
        Self
    }
}

impl ParticleUpdater for LifetimeUpdater {
    fn update(&mut self, dt: f32, pool: &mut ParticlePool) -> Result<()> {
        let alive = pool.num_alive();

        let life = pool.buffer_mut(attr::LIFE)?;
        for slot in 0..alive {
            let mut block = Tuple4::marshal(slot, life)?;
            block.x += dt;
            block.unmarshal(slot, life)?;
        }

        // Sleeping swaps the tail particle into the current slot, so the
        // index only advances when the occupant survives.
        let mut slot = 0;
        while slot < pool.num_alive() {
            let block = Tuple4::marshal(slot, pool.buffer(attr::LIFE)?)?;
            if block.x >= block.y {
                pool.sleep(slot)?;
            } else {
                slot += 1;
            }
        }

        Ok(())
    }
}
