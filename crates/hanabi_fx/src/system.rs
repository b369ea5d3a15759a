//! Particle systems
//!
//! A system ties one [`ParticlePool`] to ordered emitter and updater
//! lists and drives them through one simulation step per frame.

use hanabi_core::ParticlePool;

use crate::emitter::ParticleEmitter;
use crate::error::Result;
use crate::updater::ParticleUpdater;

/// One complete particle simulation: a pool plus the strategies that
/// fill and evolve it.
///
/// Emitters and updaters run in insertion order, emitters first. Because
/// emission precedes updating, particles spawned this frame receive a
/// full update tick before they are ever rendered; updaters are written
/// against that contract.
pub struct ParticleSystem {
    pool: ParticlePool,
    emitters: Vec<Box<dyn ParticleEmitter>>,
    updaters: Vec<Box<dyn ParticleUpdater>>,
}

impl ParticleSystem {
    /// A system whose pool supports `max_particles` particles.
    pub fn new(max_particles: usize) -> Self {
        Self {
            pool: ParticlePool::new(max_particles),
            emitters: Vec::new(),
            updaters: Vec::new(),
        }
    }

    /// The underlying pool, for renderers and inspection.
    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    /// Mutable pool access, for attribute setup.
    pub fn pool_mut(&mut self) -> &mut ParticlePool {
        &mut self.pool
    }

    /// Appends an emitter; emitters run in insertion order.
    pub fn add_emitter(&mut self, emitter: impl ParticleEmitter + 'static) {
        self.emitters.push(Box::new(emitter));
    }

    /// Builder form of [`add_emitter`](Self::add_emitter).
    pub fn with_emitter(mut self, emitter: impl ParticleEmitter + 'static) -> Self {
        self.add_emitter(emitter);
        self
    }

    /// Appends an updater; updaters run in insertion order, after all
    /// emitters.
    pub fn add_updater(&mut self, updater: impl ParticleUpdater + 'static) {
        self.updaters.push(Box::new(updater));
    }

    /// Builder form of [`add_updater`](Self::add_updater).
    pub fn with_updater(mut self, updater: impl ParticleUpdater + 'static) -> Self {
        self.add_updater(updater);
        self
    }

    /// Builder form of pool attribute registration.
    pub fn with_buffer(mut self, name: impl Into<String>, stride: usize) -> Result<Self> {
        self.pool.add_buffer(name, stride)?;
        Ok(self)
    }

    /// Advances the simulation by one frame of `dt` seconds: all
    /// emitters, then all updaters.
    pub fn update(&mut self, dt: f32) -> Result<()> {
        for emitter in &mut self.emitters {
            emitter.emit(dt, &mut self.pool)?;
        }

        for updater in &mut self.updaters {
            updater.update(dt, &mut self.pool)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr;
    use crate::emitter::RateEmitter;
    use crate::generator::{LifetimeGenerator, PointGenerator};
    use crate::updater::{LifetimeUpdater, MovementUpdater};
    use hanabi_core::Vector3;

    /// An updater that records the alive count it observed.
    struct AliveProbe {
        seen: std::rc::Rc<std::cell::Cell<usize>>,
    }

    impl ParticleUpdater for AliveProbe {
        fn update(&mut self, _dt: f32, pool: &mut ParticlePool) -> Result<()> {
            self.seen.set(pool.num_alive());
            Ok(())
        }
    }

    #[test]
    fn test_emitters_run_before_updaters() {
        let seen = std::rc::Rc::new(std::cell::Cell::new(usize::MAX));
        let mut system = ParticleSystem::new(100)
            .with_buffer(attr::POSITION, 4)
            .unwrap()
            .with_emitter(RateEmitter::new(60.0))
            .with_updater(AliveProbe { seen: seen.clone() });

        system.update(1.0 / 60.0).unwrap();

        // The probe ran after emission and saw the new particle.
        assert_eq!(seen.get(), 1);
        assert_eq!(system.pool().num_alive(), 1);
    }

    #[test]
    fn test_full_pipeline_spawns_moves_and_retires() {
        let mut system = ParticleSystem::new(50)
            .with_buffer(attr::POSITION, 4)
            .unwrap()
            .with_buffer(attr::VELOCITY, 4)
            .unwrap()
            .with_buffer(attr::LIFE, 4)
            .unwrap()
            .with_emitter(
                RateEmitter::new(600.0)
                    .with_generator(PointGenerator::new(Vector3::ZERO, 1))
                    .with_generator(LifetimeGenerator::new(0.05..0.051, 2)),
            )
            .with_updater(MovementUpdater::new())
            .with_updater(LifetimeUpdater::new());

        let dt = 1.0 / 60.0;
        system.update(dt).unwrap();
        let after_one = system.pool().num_alive();
        assert!(after_one > 0);

        // Lifetimes are ~0.05s, so after a quarter second of frames the
        // population has reached steady state below capacity.
        for _ in 0..15 {
            system.update(dt).unwrap();
        }
        let alive = system.pool().num_alive();
        assert!(alive > 0);
        assert!(alive < 50);
        assert_eq!(
            system.pool().num_alive() + system.pool().num_dead(),
            system.pool().max_particles()
        );
    }

    #[test]
    fn test_update_propagates_missing_attribute_errors() {
        // Emitter generates into "pos" but the pool never registered it.
        let mut system = ParticleSystem::new(10).with_emitter(
            RateEmitter::new(600.0).with_generator(PointGenerator::new(Vector3::ZERO, 1)),
        );

        assert!(system.update(1.0 / 60.0).is_err());
    }
}
