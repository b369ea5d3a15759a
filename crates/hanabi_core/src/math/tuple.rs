//! Untyped four-component values

use crate::error::Result;
use crate::math::slot_offset;
use crate::ParticleBuffer;

/// A general four-component value in particle storage layout.
///
/// This is the raw view of one stride-4 particle block; [`Vector3`] and
/// [`Color4`] are its typed reinterpretations. Marshal and unmarshal are
/// exact inverses: a round trip reproduces all four components
/// bit-for-bit.
///
/// [`Vector3`]: crate::math::Vector3
/// [`Color4`]: crate::math::Color4
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tuple4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Tuple4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Reads the four components of the particle at `index` from a
    /// stride-4 buffer, in x, y, z, w order.
    ///
    /// Fails with [`InvalidArgument`] unless the buffer stride is four,
    /// and with [`IndexOutOfRange`] if `index` is not a valid slot.
    ///
    /// [`InvalidArgument`]: crate::PoolError::InvalidArgument
    /// [`IndexOutOfRange`]: crate::PoolError::IndexOutOfRange
    pub fn marshal(index: usize, buffer: &ParticleBuffer) -> Result<Self> {
        let offset = slot_offset(index, buffer)?;
        Ok(Self {
            x: buffer[offset],
            y: buffer[offset + 1],
            z: buffer[offset + 2],
            w: buffer[offset + 3],
        })
    }

    /// Writes the four components into the particle at `index` of a
    /// stride-4 buffer. Exact inverse of [`marshal`](Self::marshal), with
    /// the same preconditions.
    pub fn unmarshal(&self, index: usize, buffer: &mut ParticleBuffer) -> Result<()> {
        let offset = slot_offset(index, buffer)?;
        buffer[offset] = self.x;
        buffer[offset + 1] = self.y;
        buffer[offset + 2] = self.z;
        buffer[offset + 3] = self.w;
        Ok(())
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl From<[f32; 4]> for Tuple4 {
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self { x, y, z, w }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PoolError;

    fn sequential_buffer(particles: usize) -> ParticleBuffer {
        let mut buffer = ParticleBuffer::vec4(particles);
        for i in 0..buffer.len() {
            buffer[i] = i as f32 * 0.25;
        }
        buffer
    }

    #[test]
    fn test_marshal_reads_slot_in_component_order() {
        let buffer = sequential_buffer(3);

        let tuple = Tuple4::marshal(1, &buffer).unwrap();

        assert_eq!(tuple, Tuple4::new(1.0, 1.25, 1.5, 1.75));
    }

    #[test]
    fn test_unmarshal_writes_slot_in_component_order() {
        let mut buffer = ParticleBuffer::vec4(3);
        let tuple = Tuple4::new(5.0, 6.0, 7.0, 8.0);

        tuple.unmarshal(2, &mut buffer).unwrap();

        assert_eq!(&buffer.as_slice()[8..12], &[5.0, 6.0, 7.0, 8.0]);
        // Other slots untouched.
        assert!(buffer.as_slice()[..8].iter().all(|e| *e == 0.0));
    }

    #[test]
    fn test_round_trip_is_bit_exact() {
        // Include values equality would mangle: negative zero and
        // subnormals survive the trip bit-for-bit.
        let tuple = Tuple4::new(-0.0, f32::MIN_POSITIVE / 2.0, 1.0e-38, -3.5);
        let mut buffer = ParticleBuffer::vec4(2);

        tuple.unmarshal(1, &mut buffer).unwrap();
        let back = Tuple4::marshal(1, &buffer).unwrap();

        for (a, b) in tuple.to_array().iter().zip(back.to_array()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_marshal_requires_stride_four() {
        let buffer = ParticleBuffer::new(4, 3).unwrap();
        assert!(matches!(
            Tuple4::marshal(0, &buffer),
            Err(PoolError::InvalidArgument(_))
        ));

        let mut buffer = ParticleBuffer::new(4, 3).unwrap();
        assert!(matches!(
            Tuple4::default().unmarshal(0, &mut buffer),
            Err(PoolError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_marshal_checks_slot_bounds() {
        let buffer = ParticleBuffer::vec4(2);
        assert!(matches!(
            Tuple4::marshal(2, &buffer),
            Err(PoolError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }
}
