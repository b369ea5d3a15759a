//! Clipping bounds

/// An axis-aligned clipping area used as a rendering optimization:
/// particles inside the bounds are drawn, everything else is discarded
/// before touching the canvas.
///
/// By convention, containment includes the boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ClipRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The x coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// The y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether the point lies within the bounds, boundary included.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        (x >= self.x && x <= self.right()) && (y >= self.y && y <= self.bottom())
    }

    /// Whether any part of a circle overlaps the bounds, boundary
    /// included.
    ///
    /// Compares the squared distance from the circle's center to the
    /// nearest point of the rectangle against the squared radius.
    pub fn contains_circle(&self, x: f32, y: f32, radius: f32) -> bool {
        let dx = x - x.clamp(self.x, self.right());
        let dy = y - y.clamp(self.y, self.bottom());
        dx * dx + dy * dy <= radius * radius
    }
}
