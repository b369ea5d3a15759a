//! Point sprite rendering

use hanabi_core::{Color4, Vector3};

use crate::attr;
use crate::error::Result;
use crate::render::{RenderContext, Renderer};
use crate::system::ParticleSystem;

/// Draws each particle as a constant-size filled circle.
///
/// Reads the `"pos"` and `"color"` attributes of every alive particle;
/// circles outside the context's clipping bounds are skipped before they
/// reach the canvas.
pub struct PointRenderer {
    /// The radius of each point.
    pub size: f32,
}

impl PointRenderer {
    pub fn new(size: f32) -> Self {
        Self { size }
    }
}

impl Default for PointRenderer {
    fn default() -> Self {
        Self { size: 5.0 }
    }
}

impl Renderer for PointRenderer {
    fn render(&mut self, system: &ParticleSystem, ctx: &mut RenderContext) -> Result<()> {
        let clip = ctx.clip;
        let pool = system.pool();
        let positions = pool.buffer(attr::POSITION)?;
        let colors = pool.buffer(attr::COLOR)?;

        let canvas = ctx.canvas_mut();
        canvas.clear(&clip);

        for slot in 0..pool.num_alive() {
            let position = Vector3::marshal(slot, positions)?;
            if !clip.contains_circle(position.x, position.y, self.size) {
                continue;
            }

            let color = Color4::marshal(slot, colors)?;
            canvas.fill_circle(position.x, position.y, self.size, color.to_rgba8());
        }

        Ok(())
    }
}
