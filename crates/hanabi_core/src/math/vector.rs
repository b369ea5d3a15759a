//! Three-dimensional vectors in homogeneous storage

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::Result;
use crate::math::slot_offset;
use crate::ParticleBuffer;

/// A 3D vector stored as a homogeneous point.
///
/// The buffer representation is a four-element block whose fourth
/// component is pinned to one: [`unmarshal`](Self::unmarshal) always
/// writes it and [`marshal`](Self::marshal) never reads it, so the block
/// stays a valid homogeneous point no matter which vector operations run
/// in between. The four-slot layout keeps particle blocks aligned on
/// power-of-two boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The homogeneous w component every stored vector carries.
    pub const W: f32 = 1.0;

    /// Reads the particle at `index` from a stride-4 buffer, ignoring the
    /// buffered fourth component.
    ///
    /// Same preconditions as [`Tuple4::marshal`](crate::math::Tuple4::marshal).
    pub fn marshal(index: usize, buffer: &ParticleBuffer) -> Result<Self> {
        let offset = slot_offset(index, buffer)?;
        Ok(Self {
            x: buffer[offset],
            y: buffer[offset + 1],
            z: buffer[offset + 2],
        })
    }

    /// Writes this vector into the particle at `index` of a stride-4
    /// buffer, pinning the fourth component to one.
    pub fn unmarshal(&self, index: usize, buffer: &mut ParticleBuffer) -> Result<()> {
        let offset = slot_offset(index, buffer)?;
        buffer[offset] = self.x;
        buffer[offset + 1] = self.y;
        buffer[offset + 2] = self.z;
        buffer[offset + 3] = Self::W;
        Ok(())
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn dot(&self, other: Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Scales this vector to unit length; the zero vector stays zero.
    pub fn normalize(&self) -> Vector3 {
        let len = self.length();
        if len > 0.0 {
            *self * (1.0 / len)
        } else {
            Vector3::ZERO
        }
    }

    /// The component-wise reciprocal.
    ///
    /// Zero components follow IEEE-754 signed-zero division: `1 / +0`
    /// yields positive infinity and `1 / -0` negative infinity, so the
    /// direction a zero component came from is not lost.
    pub fn invert(&self) -> Vector3 {
        Vector3::new(1.0 / self.x, 1.0 / self.y, 1.0 / self.z)
    }

    pub fn to_array(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f32) -> Vector3 {
        Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, scalar: f32) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
    }
}
