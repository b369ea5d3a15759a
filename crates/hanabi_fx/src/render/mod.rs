//! Rendering contracts
//!
//! Renderers are collaborators, not owners: an [`Effect`] drives its
//! systems through a [`Renderer`] each frame, and the renderer draws
//! onto whatever [`Canvas`] the embedding application supplies.
//!
//! [`Effect`]: crate::effect::Effect

mod clip;
mod context;
mod point;

pub use clip::ClipRect;
pub use context::{Canvas, RenderContext};
pub use point::PointRenderer;

use crate::error::Result;
use crate::system::ParticleSystem;

/// Draws particle systems onto a render context.
///
/// [`render`](Self::render) runs once per system per frame. The
/// lifecycle hooks bracket it: `initialize` once when the renderer is
/// attached, `initialize_system` once per system before its first
/// frame, and the `cleanup` pair in reverse when tearing down. The
/// defaults do nothing, so simple renderers only implement `render`.
///
/// An [`Effect`](crate::effect::Effect) invokes only `render`; the
/// embedding application owns the lifecycle calls, since it knows when
/// renderers attach to a surface and when that surface goes away.
pub trait Renderer {
    /// One-time setup before any system renders.
    fn initialize(&mut self, _ctx: &mut RenderContext) -> Result<()> {
        Ok(())
    }

    /// Per-system setup, called before the system's first frame.
    fn initialize_system(
        &mut self,
        _system: &ParticleSystem,
        _ctx: &mut RenderContext,
    ) -> Result<()> {
        Ok(())
    }

    /// Draws one system's alive particles for the current frame.
    fn render(&mut self, system: &ParticleSystem, ctx: &mut RenderContext) -> Result<()>;

    /// Per-system teardown, called when the system is detached.
    fn cleanup_system(
        &mut self,
        _system: &ParticleSystem,
        _ctx: &mut RenderContext,
    ) -> Result<()> {
        Ok(())
    }

    /// One-time teardown after all systems are cleaned up.
    fn cleanup(&mut self, _ctx: &mut RenderContext) -> Result<()> {
        Ok(())
    }
}
