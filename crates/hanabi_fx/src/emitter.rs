//! Particle emitters
//!
//! An emitter decides how many particles wake up each frame and runs its
//! generator list over the newly woken slot range, in insertion order.
//! Emission is always clamped to the pool's free capacity; running a
//! full pool is normal steady-state for a looping effect, not an error.

use hanabi_core::ParticlePool;

use crate::error::Result;
use crate::generator::ParticleGenerator;

/// A strategy that emits new particles into a pool.
pub trait ParticleEmitter {
    /// Wakes this frame's worth of particles and initializes them.
    ///
    /// `dt` is the elapsed frame time in seconds.
    fn emit(&mut self, dt: f32, pool: &mut ParticlePool) -> Result<()>;
}

/// Wakes `count` particles (clamped to free capacity) and runs every
/// generator over the woken range.
fn wake_and_generate(
    dt: f32,
    pool: &mut ParticlePool,
    count: usize,
    generators: &mut [Box<dyn ParticleGenerator>],
) -> Result<()> {
    let available = pool.num_dead();
    let count = if count > available {
        tracing::debug!(
            requested = count,
            available,
            "emission clamped to pool capacity"
        );
        available
    } else {
        count
    };

    if count == 0 {
        return Ok(());
    }

    let first = pool.num_alive();
    pool.wake(count)?;
    let last = pool.num_alive();

    for generator in generators {
        generator.generate(dt, pool, first, last)?;
    }

    Ok(())
}

/// Emits a steady stream of particles at a fixed rate.
///
/// Fractional emission accumulates across frames, so a rate of 90/s at
/// 60 fps alternates between waking one and two particles instead of
/// rounding the remainder away.
pub struct RateEmitter {
    rate: f32,
    accumulator: f32,
    generators: Vec<Box<dyn ParticleGenerator>>,
}

impl RateEmitter {
    /// An emitter producing `rate` particles per second.
    pub fn new(rate: f32) -> Self {
        Self {
            rate,
            accumulator: 0.0,
            generators: Vec::new(),
        }
    }

    /// Appends a generator; generators run in insertion order.
    pub fn with_generator(mut self, generator: impl ParticleGenerator + 'static) -> Self {
        self.generators.push(Box::new(generator));
        self
    }

    /// The configured emission rate in particles per second.
    pub fn rate(&self) -> f32 {
        self.rate
    }
}

impl ParticleEmitter for RateEmitter {
    fn emit(&mut self, dt: f32, pool: &mut ParticlePool) -> Result<()> {
        self.accumulator += self.rate * dt;
        let count = self.accumulator.floor();
        self.accumulator -= count;

        wake_and_generate(dt, pool, count as usize, &mut self.generators)
    }
}

/// Emits a fixed-size burst of particles on a repeating timer.
///
/// An interval of zero fires exactly once, on the first tick.
pub struct BurstEmitter {
    count: usize,
    interval: f32,
    timer: f32,
    fired: bool,
    generators: Vec<Box<dyn ParticleGenerator>>,
}

impl BurstEmitter {
    /// An emitter producing `count` particles every `interval` seconds.
    pub fn new(count: usize, interval: f32) -> Self {
        Self {
            count,
            interval,
            timer: 0.0,
            fired: false,
            generators: Vec::new(),
        }
    }

    /// Appends a generator; generators run in insertion order.
    pub fn with_generator(mut self, generator: impl ParticleGenerator + 'static) -> Self {
        self.generators.push(Box::new(generator));
        self
    }
}

impl ParticleEmitter for BurstEmitter {
    fn emit(&mut self, dt: f32, pool: &mut ParticlePool) -> Result<()> {
        if self.interval <= 0.0 {
            if self.fired {
                return Ok(());
            }
            self.fired = true;
            return wake_and_generate(dt, pool, self.count, &mut self.generators);
        }

        self.timer += dt;
        if self.timer < self.interval {
            return Ok(());
        }

        // One division instead of repeated subtraction: an interval below
        // the timer's float precision would otherwise never pay the timer
        // back down.
        let bursts = (self.timer / self.interval) as usize;
        self.timer = (self.timer - bursts as f32 * self.interval).max(0.0);

        for _ in 0..bursts {
            // Further bursts cannot wake anything.
            if self.count == 0 || pool.num_dead() == 0 {
                break;
            }
            wake_and_generate(dt, pool, self.count, &mut self.generators)?;
        }

        Ok(())
    }
}
