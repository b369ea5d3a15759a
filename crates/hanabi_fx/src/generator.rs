//! Particle state generators
//!
//! A generator initializes one aspect of freshly woken particles --
//! position, velocity, color, lifetime -- over a slot range an emitter
//! hands it. Woken slots contain stale data from previous occupants, so
//! every attribute a system reads must be covered by some generator.

use std::ops::Range;

use hanabi_core::{Color4, ParticlePool, Tuple4, Vector3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::attr;
use crate::error::Result;

/// A strategy that initializes particle state for a slot range.
pub trait ParticleGenerator {
    /// Initializes particle data in `pool` for slots `[first, last)`.
    ///
    /// `dt` is the elapsed frame time in seconds, for generators whose
    /// output depends on it.
    fn generate(
        &mut self,
        dt: f32,
        pool: &mut ParticlePool,
        first: usize,
        last: usize,
    ) -> Result<()>;
}

/// Samples a range, tolerating degenerate (empty) ranges by returning the
/// start.
fn sample(rng: &mut SmallRng, range: &Range<f32>) -> f32 {
    if range.start < range.end {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}

/// A uniformly random direction.
fn random_unit_vector(rng: &mut SmallRng) -> Vector3 {
    let theta = rng.gen_range(0.0..std::f32::consts::TAU);
    let z: f32 = rng.gen_range(-1.0..1.0);
    let r = (1.0 - z * z).sqrt();
    Vector3::new(r * theta.cos(), r * theta.sin(), z)
}

/// Places spawns at a fixed origin, optionally jittered within a box
/// half-extent. Writes the `"pos"` attribute.
pub struct PointGenerator {
    origin: Vector3,
    jitter: Vector3,
    rng: SmallRng,
}

impl PointGenerator {
    /// A generator spawning exactly at `origin`.
    pub fn new(origin: Vector3, seed: u64) -> Self {
        Self {
            origin,
            jitter: Vector3::ZERO,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Spreads spawns uniformly within `half_extents` of the origin.
    pub fn with_jitter(mut self, half_extents: Vector3) -> Self {
        self.jitter = half_extents;
        self
    }
}

impl ParticleGenerator for PointGenerator {
    fn generate(
        &mut self,
        _dt: f32,
        pool: &mut ParticlePool,
        first: usize,
        last: usize,
    ) -> Result<()> {
        for slot in first..last {
            let offset = Vector3::new(
                self.rng.gen_range(-1.0..=1.0) * self.jitter.x,
                self.rng.gen_range(-1.0..=1.0) * self.jitter.y,
                self.rng.gen_range(-1.0..=1.0) * self.jitter.z,
            );
            let position = self.origin + offset;
            position.unmarshal(slot, pool.buffer_mut(attr::POSITION)?)?;
        }

        Ok(())
    }
}

/// Assigns velocities around a base direction with a spread factor.
/// Writes the `"vel"` attribute.
pub struct VelocityGenerator {
    direction: Vector3,
    speed: Range<f32>,
    spread: f32,
    rng: SmallRng,
}

impl VelocityGenerator {
    /// Velocities along `direction` with magnitudes drawn from `speed`.
    ///
    /// `direction` is normalized once here; the zero vector leaves spread
    /// as the only contribution.
    pub fn new(direction: Vector3, speed: Range<f32>, seed: u64) -> Self {
        Self {
            direction: direction.normalize(),
            speed,
            spread: 0.0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Blends each velocity with a random direction; 0 keeps the base
    /// direction exactly, 1 scatters uniformly.
    pub fn with_spread(mut self, spread: f32) -> Self {
        self.spread = spread;
        self
    }
}

impl ParticleGenerator for VelocityGenerator {
    fn generate(
        &mut self,
        _dt: f32,
        pool: &mut ParticlePool,
        first: usize,
        last: usize,
    ) -> Result<()> {
        for slot in first..last {
            let scatter = random_unit_vector(&mut self.rng);
            let direction =
                (self.direction * (1.0 - self.spread) + scatter * self.spread).normalize();
            let velocity = direction * sample(&mut self.rng, &self.speed);
            velocity.unmarshal(slot, pool.buffer_mut(attr::VELOCITY)?)?;
        }

        Ok(())
    }
}

/// Assigns each spawn a random blend between two colors. Writes the
/// `"color"` attribute.
pub struct ColorGenerator {
    start: Color4,
    end: Color4,
    rng: SmallRng,
}

impl ColorGenerator {
    pub fn new(start: Color4, end: Color4, seed: u64) -> Self {
        Self {
            start,
            end,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl ParticleGenerator for ColorGenerator {
    fn generate(
        &mut self,
        _dt: f32,
        pool: &mut ParticlePool,
        first: usize,
        last: usize,
    ) -> Result<()> {
        for slot in first..last {
            let t: f32 = self.rng.gen_range(0.0..=1.0);
            let color = self.start.lerp(t, self.end);
            color.unmarshal(slot, pool.buffer_mut(attr::COLOR)?)?;
        }

        Ok(())
    }
}

/// Assigns each spawn a random lifetime and zero age. Writes the
/// `"life"` attribute (`x` = age, `y` = lifetime).
pub struct LifetimeGenerator {
    lifetime: Range<f32>,
    rng: SmallRng,
}

impl LifetimeGenerator {
    pub fn new(lifetime: Range<f32>, seed: u64) -> Self {
        Self {
            lifetime,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl ParticleGenerator for LifetimeGenerator {
    fn generate(
        &mut self,
        _dt: f32,
        pool: &mut ParticlePool,
        first: usize,
        last: usize,
    ) -> Result<()> {
        for slot in first..last {
            let lifetime = sample(&mut self.rng, &self.lifetime);
            let life = Tuple4::new(0.0, lifetime, 0.0, 0.0);
            life.unmarshal(slot, pool.buffer_mut(attr::LIFE)?)?;
        }

        Ok(())
    }
}
