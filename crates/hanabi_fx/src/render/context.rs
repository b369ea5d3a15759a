//! Drawing surface abstraction

use crate::error::{FxError, Result};
use crate::render::clip::ClipRect;

/// The minimal drawing surface a renderer needs.
///
/// A windowing backend implements this over its 2D canvas; tests use a
/// recording implementation. Colors arrive as packed 8-bit RGBA, already
/// converted and clamped by [`Color4::to_rgba8`].
///
/// [`Color4::to_rgba8`]: hanabi_core::Color4::to_rgba8
pub trait Canvas {
    /// Clears a rectangular region to the background.
    fn clear(&mut self, region: &ClipRect);

    /// Fills a circle of `radius` centered at (`x`, `y`).
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: [u8; 4]);
}

/// System-level rendering resources: surface dimensions, the clipping
/// bounds derived from them, and the drawing surface itself.
pub struct RenderContext {
    width: f32,
    height: f32,
    /// Clipping bounds; initialized to the full surface.
    pub clip: ClipRect,
    canvas: Box<dyn Canvas>,
}

impl RenderContext {
    /// A context for a `width` by `height` surface.
    ///
    /// Fails with [`FxError::InvalidArgument`] unless both dimensions are
    /// positive.
    pub fn new(width: f32, height: f32, canvas: Box<dyn Canvas>) -> Result<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(FxError::InvalidArgument(format!(
                "render surface dimensions must be positive, got {width}x{height}"
            )));
        }

        Ok(Self {
            width,
            height,
            clip: ClipRect::new(0.0, 0.0, width, height),
            canvas,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// The drawing surface.
    pub fn canvas_mut(&mut self) -> &mut dyn Canvas {
        self.canvas.as_mut()
    }
}
