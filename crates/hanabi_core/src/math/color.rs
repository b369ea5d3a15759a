//! RGBA colors in particle storage layout

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use crate::error::Result;
use crate::math::slot_offset;
use crate::ParticleBuffer;

/// Converts one floating point channel to its 8-bit representation.
///
/// The channel is clamped to `[0, 1]` first; exactly 1.0 maps to 255
/// rather than letting `floor(256 * 1.0)` run past the byte range.
fn channel_to_u8(channel: f32) -> u8 {
    let clamped = channel.clamp(0.0, 1.0);
    if clamped == 1.0 {
        255
    } else {
        (256.0 * clamped).floor() as u8
    }
}

/// An RGBA color in linear floating point, one channel per storage
/// element.
///
/// The same four-slot block a [`Vector3`](crate::math::Vector3) occupies,
/// reinterpreted: x, y, z, w become red, green, blue, alpha. Unlike
/// vectors, color arithmetic treats all four channels uniformly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color4 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color4 {
    pub const WHITE: Color4 = Color4::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color4 = Color4::new(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color4 = Color4::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Reads the particle at `index` from a stride-4 buffer in r, g, b, a
    /// order.
    ///
    /// Same preconditions as [`Tuple4::marshal`](crate::math::Tuple4::marshal).
    pub fn marshal(index: usize, buffer: &ParticleBuffer) -> Result<Self> {
        let offset = slot_offset(index, buffer)?;
        Ok(Self {
            r: buffer[offset],
            g: buffer[offset + 1],
            b: buffer[offset + 2],
            a: buffer[offset + 3],
        })
    }

    /// Writes this color into the particle at `index` of a stride-4
    /// buffer. Exact inverse of [`marshal`](Self::marshal).
    pub fn unmarshal(&self, index: usize, buffer: &mut ParticleBuffer) -> Result<()> {
        let offset = slot_offset(index, buffer)?;
        buffer[offset] = self.r;
        buffer[offset + 1] = self.g;
        buffer[offset + 2] = self.b;
        buffer[offset + 3] = self.a;
        Ok(())
    }

    /// Linear interpolation toward `end` at parametric time `t`.
    pub fn lerp(&self, t: f32, end: Color4) -> Color4 {
        Color4::new(
            self.r + (end.r - self.r) * t,
            self.g + (end.g - self.g) * t,
            self.b + (end.b - self.b) * t,
            self.a + (end.a - self.a) * t,
        )
    }

    /// Converts to packed 8-bit RGBA for a drawing backend, clamping each
    /// channel to `[0, 1]`.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Add for Color4 {
    type Output = Color4;

    fn add(self, rhs: Color4) -> Color4 {
        Color4::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

impl AddAssign for Color4 {
    fn add_assign(&mut self, rhs: Color4) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
        self.a += rhs.a;
    }
}

impl Sub for Color4 {
    type Output = Color4;

    fn sub(self, rhs: Color4) -> Color4 {
        Color4::new(
            self.r - rhs.r,
            self.g - rhs.g,
            self.b - rhs.b,
            self.a - rhs.a,
        )
    }
}

impl SubAssign for Color4 {
    fn sub_assign(&mut self, rhs: Color4) {
        self.r -= rhs.r;
        self.g -= rhs.g;
        self.b -= rhs.b;
        self.a -= rhs.a;
    }
}

impl Mul<f32> for Color4 {
    type Output = Color4;

    fn mul(self, scalar: f32) -> Color4 {
        Color4::new(
            self.r * scalar,
            self.g * scalar,
            self.b * scalar,
            self.a * scalar,
        )
    }
}

impl MulAssign<f32> for Color4 {
    fn mul_assign(&mut self, scalar: f32) {
        self.r *= scalar;
        self.g *= scalar;
        self.b *= scalar;
        self.a *= scalar;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_covers_all_channels() {
        let a = Color4::new(0.25, 0.5, 0.75, 1.0);
        let b = Color4::new(0.5, 0.25, 0.125, 0.0);

        assert_eq!(a + b, Color4::new(0.75, 0.75, 0.875, 1.0));
        assert_eq!(a - b, Color4::new(-0.25, 0.25, 0.625, 1.0));
        assert_eq!(a * 2.0, Color4::new(0.5, 1.0, 1.5, 2.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        c -= b;
        assert_eq!(c, a);
        c *= 2.0;
        assert_eq!(c, a * 2.0);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let start = Color4::new(1.0, 0.0, 0.0, 1.0);
        let end = Color4::new(0.0, 0.0, 1.0, 0.0);

        assert_eq!(start.lerp(0.0, end), start);
        assert_eq!(start.lerp(1.0, end), end);
        assert_eq!(start.lerp(0.5, end), Color4::new(0.5, 0.0, 0.5, 0.5));
    }

    #[test]
    fn test_to_rgba8_clamps_and_caps() {
        // Exactly 1.0 must hit 255, not floor(256).
        assert_eq!(Color4::WHITE.to_rgba8(), [255, 255, 255, 255]);
        // Out-of-gamut values clamp before conversion.
        assert_eq!(
            Color4::new(-0.5, 1.5, 0.0, 0.5).to_rgba8(),
            [0, 255, 0, 128]
        );
        // In-range values floor onto the 256-wide scale.
        assert_eq!(Color4::new(0.999, 0.25, 0.75, 0.0).to_rgba8()[0], 255);
        assert_eq!(Color4::new(0.999, 0.25, 0.75, 0.0).to_rgba8()[1], 64);
    }

    #[test]
    fn test_marshal_round_trip() {
        let color = Color4::new(0.25, 0.5, 0.75, 1.0);
        let mut buffer = ParticleBuffer::vec4(2);

        color.unmarshal(0, &mut buffer).unwrap();
        let back = Color4::marshal(0, &buffer).unwrap();

        assert_eq!(color, back);
        assert_eq!(&buffer.as_slice()[..4], &[0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_vector_and_color_share_layout() {
        use crate::math::Tuple4;

        let mut buffer = ParticleBuffer::vec4(1);
        Color4::new(0.1, 0.2, 0.3, 0.4).unmarshal(0, &mut buffer).unwrap();

        let tuple = Tuple4::marshal(0, &buffer).unwrap();
        assert_eq!(tuple, Tuple4::new(0.1, 0.2, 0.3, 0.4));
    }
}
