//! Particle effect composition
//!
//! Builds on [`hanabi_core`]'s storage layer with the pieces that turn a
//! pool of floats into a living effect: emitters that decide when
//! particles spawn, generators that give them their starting state,
//! updaters that evolve them frame to frame, and renderers that draw
//! them. A [`ParticleSystem`] wires one pool to its strategies; an
//! [`Effect`] groups systems under a name.
//!
//! ```
//! use hanabi_core::Vector3;
//! use hanabi_fx::emitter::RateEmitter;
//! use hanabi_fx::generator::{LifetimeGenerator, PointGenerator};
//! use hanabi_fx::updater::{LifetimeUpdater, MovementUpdater};
//! use hanabi_fx::{attr, Effect, ParticleSystem};
//!
//! # fn main() -> hanabi_fx::Result<()> {
//! let system = ParticleSystem::new(1000)
//!     .with_buffer(attr::POSITION, 4)?
//!     .with_buffer(attr::VELOCITY, 4)?
//!     .with_buffer(attr::LIFE, 4)?
//!     .with_emitter(
//!         RateEmitter::new(120.0)
//!             .with_generator(PointGenerator::new(Vector3::ZERO, 42))
//!             .with_generator(LifetimeGenerator::new(1.0..2.0, 43)),
//!     )
//!     .with_updater(MovementUpdater::new())
//!     .with_updater(LifetimeUpdater::new());
//!
//! let mut effect = Effect::new("sparks").with_system(system);
//! effect.update(1.0 / 60.0)?;
//! # Ok(())
//! # }
//! ```

pub mod effect;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod render;
pub mod system;
pub mod updater;

pub use effect::Effect;
pub use emitter::{BurstEmitter, ParticleEmitter, RateEmitter};
pub use error::{FxError, Result};
pub use generator::{
    ColorGenerator, LifetimeGenerator, ParticleGenerator, PointGenerator, VelocityGenerator,
};
pub use render::{Canvas, ClipRect, PointRenderer, RenderContext, Renderer};
pub use system::ParticleSystem;
pub use updater::{ColorFadeUpdater, ForceUpdater, LifetimeUpdater, MovementUpdater, ParticleUpdater};

/// Attribute names the built-in strategies agree on.
///
/// Nothing in the pool enforces these; they are the vocabulary shared by
/// the generators, updaters, and renderers in this crate. Custom
/// strategies may define their own attributes alongside them.
pub mod attr {
    /// Particle position, marshaled as a [`Vector3`](hanabi_core::Vector3).
    pub const POSITION: &str = "pos";

    /// Particle velocity, marshaled as a [`Vector3`](hanabi_core::Vector3).
    pub const VELOCITY: &str = "vel";

    /// Particle color, marshaled as a [`Color4`](hanabi_core::Color4).
    pub const COLOR: &str = "color";

    /// Lifetime bookkeeping: `x` holds the age in seconds, `y` the total
    /// lifetime. `z` and `w` are unused.
    pub const LIFE: &str = "life";
}
