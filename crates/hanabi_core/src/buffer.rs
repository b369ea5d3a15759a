//! Struct-of-arrays attribute storage
//!
//! A [`ParticleBuffer`] holds one named particle attribute (position,
//! color, velocity, ...) as a single contiguous run of `f32` elements,
//! `stride` elements per particle. Buffers never reallocate: capacity and
//! stride are fixed at construction and every particle ever simulated
//! lives in a slot allocated up front.

use std::ops::{Index, IndexMut};

use crate::error::{PoolError, Result};

/// A fixed-capacity, fixed-stride array of scalar particle data.
///
/// The buffer invariant `len() % stride() == 0` holds for the whole
/// lifetime of the buffer. Slot `i` occupies elements
/// `[i * stride, (i + 1) * stride)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleBuffer {
    data: Vec<f32>,
    stride: usize,
}

impl ParticleBuffer {
    /// Creates a buffer for `particles` slots of `stride` elements each,
    /// zero-initialized.
    ///
    /// Fails with [`PoolError::InvalidArgument`] if `stride` is zero.
    pub fn new(particles: usize, stride: usize) -> Result<Self> {
        if stride == 0 {
            return Err(PoolError::InvalidArgument(
                "buffer stride must be positive".into(),
            ));
        }

        Ok(Self {
            data: vec![0.0; particles * stride],
            stride,
        })
    }

    /// Creates a stride-4 buffer, the standard block size for anything
    /// consumed as a [`Tuple4`](crate::math::Tuple4).
    pub fn vec4(particles: usize) -> Self {
        Self {
            data: vec![0.0; particles * 4],
            stride: 4,
        }
    }

    /// The number of elements assigned per particle.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The total number of data elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer holds no elements at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The number of particle slots (`len() / stride()`).
    pub fn particle_count(&self) -> usize {
        self.data.len() / self.stride
    }

    /// Checked element read.
    ///
    /// Fails with [`PoolError::IndexOutOfRange`] if `index >= len()`.
    /// The [`Index`] impl offers the panicking alternative.
    pub fn get(&self, index: usize) -> Result<f32> {
        self.data
            .get(index)
            .copied()
            .ok_or(PoolError::IndexOutOfRange {
                index,
                len: self.data.len(),
            })
    }

    /// Checked element write.
    ///
    /// Fails with [`PoolError::IndexOutOfRange`] if `index >= len()`.
    pub fn set(&mut self, index: usize, value: f32) -> Result<()> {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(PoolError::IndexOutOfRange { index, len }),
        }
    }

    /// Assigns every element in the buffer to `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Exchanges the `stride`-length data blocks of two particle slots.
    ///
    /// Every element in slot `slot_a` trades places with the matching
    /// element in slot `slot_b`; this is a true per-element exchange, not
    /// a copy-over. Swapping a slot with itself is a no-op.
    ///
    /// Fails with [`PoolError::IndexOutOfRange`] if either slot is
    /// outside `[0, particle_count())`.
    pub fn swap(&mut self, slot_a: usize, slot_b: usize) -> Result<()> {
        let count = self.particle_count();
        for slot in [slot_a, slot_b] {
            if slot >= count {
                return Err(PoolError::IndexOutOfRange {
                    index: slot,
                    len: count,
                });
            }
        }

        if slot_a == slot_b {
            return Ok(());
        }

        let a = slot_a * self.stride;
        let b = slot_b * self.stride;
        for i in 0..self.stride {
            self.data.swap(a + i, b + i);
        }

        Ok(())
    }

    /// The raw element sequence, for read-only consumers such as
    /// renderers.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Iterates over all data elements in order.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.data.iter().copied()
    }
}

impl Index<usize> for ParticleBuffer {
    type Output = f32;

    /// Raw element read. Panics on out-of-bounds access; use
    /// [`ParticleBuffer::get`] for the checked form.
    fn index(&self, index: usize) -> &f32 {
        &self.data[index]
    }
}

impl IndexMut<usize> for ParticleBuffer {
    /// Raw element write. Panics on out-of-bounds access; use
    /// [`ParticleBuffer::set`] for the checked form.
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.data[index]
    }
}
