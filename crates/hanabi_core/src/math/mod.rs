//! Structured value types for stride-4 particle data
//!
//! Particle attributes live in raw [`ParticleBuffer`]s; these types are
//! the transient, typed views a simulation or renderer materializes on
//! demand. All three share the same four-slot storage layout:
//! [`Tuple4`] is the untyped form, [`Vector3`] treats the block as a
//! homogeneous point with the fourth component pinned to one, and
//! [`Color4`] reinterprets it as RGBA.
//!
//! [`ParticleBuffer`]: crate::ParticleBuffer

mod color;
mod tuple;
mod vector;

pub use color::Color4;
pub use tuple::Tuple4;
pub use vector::Vector3;

use crate::error::{PoolError, Result};
use crate::ParticleBuffer;

/// Elements per particle required by all structured value types.
pub const VALUE_STRIDE: usize = 4;

/// Validates a buffer/index pair for a stride-4 marshal or unmarshal and
/// returns the element offset of the slot.
fn slot_offset(index: usize, buffer: &ParticleBuffer) -> Result<usize> {
    if buffer.stride() != VALUE_STRIDE {
        return Err(PoolError::InvalidArgument(format!(
            "structured values require stride {VALUE_STRIDE}, buffer has stride {}",
            buffer.stride()
        )));
    }

    if index >= buffer.particle_count() {
        return Err(PoolError::IndexOutOfRange {
            index,
            len: buffer.particle_count(),
        });
    }

    Ok(index * VALUE_STRIDE)
}
