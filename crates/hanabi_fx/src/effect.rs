//! Named multi-system effects

use crate::error::Result;
use crate::render::{RenderContext, Renderer};
use crate::system::ParticleSystem;

/// A named collection of particle systems driven as one unit.
///
/// A firework, for example, composes a launch trail system and a burst
/// system under one effect. Systems update and render in insertion
/// order, so later systems draw over earlier ones.
pub struct Effect {
    name: String,
    systems: Vec<ParticleSystem>,
}

impl Effect {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        tracing::debug!(name = %name, "created effect");
        Self {
            name,
            systems: Vec::new(),
        }
    }

    /// The effect's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a system; systems update and draw in insertion order.
    pub fn add_system(&mut self, system: ParticleSystem) {
        self.systems.push(system);
    }

    /// Builder form of [`add_system`](Self::add_system).
    pub fn with_system(mut self, system: ParticleSystem) -> Self {
        self.add_system(system);
        self
    }

    /// The owned systems, in update/render order.
    pub fn systems(&self) -> &[ParticleSystem] {
        &self.systems
    }

    /// Advances every system by one frame of `dt` seconds.
    ///
    /// Always call this before [`render`](Self::render) each frame.
    pub fn update(&mut self, dt: f32) -> Result<()> {
        for system in &mut self.systems {
            system.update(dt)?;
        }

        Ok(())
    }

    /// Draws every system with `renderer`, in insertion order.
    pub fn render(&self, renderer: &mut dyn Renderer, ctx: &mut RenderContext) -> Result<()> {
        for system in &self.systems {
            renderer.render(system, ctx)?;
        }

        Ok(())
    }
}
