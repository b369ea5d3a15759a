//! Particle pool with alive/dead partitioning
//!
//! A [`ParticlePool`] owns every attribute buffer of one particle system
//! and the single partition index that splits each of them into an alive
//! prefix and a dead suffix. Waking and sleeping particles are O(1) in
//! the particle count: the pool never moves more than one slot's worth of
//! data per attribute.

use indexmap::IndexMap;

use crate::buffer::ParticleBuffer;
use crate::error::{PoolError, Result};

/// A named collection of [`ParticleBuffer`]s sharing one capacity and one
/// alive/dead partition.
///
/// Slot indices below [`num_alive`](Self::num_alive) hold live particles
/// and are the range updaters and renderers operate on; slots at or above
/// it are retired scratch space. Buffers iterate in insertion order, so
/// pool-wide operations apply to every attribute deterministically.
#[derive(Clone, Debug)]
pub struct ParticlePool {
    buffers: IndexMap<String, ParticleBuffer>,
    max_particles: usize,
    num_alive: usize,
}

impl ParticlePool {
    /// Creates an empty pool supporting at most `max_particles` particles
    /// per attribute buffer.
    pub fn new(max_particles: usize) -> Self {
        Self {
            buffers: IndexMap::new(),
            max_particles,
            num_alive: 0,
        }
    }

    /// The total number of particles this pool can support.
    pub fn max_particles(&self) -> usize {
        self.max_particles
    }

    /// The number of particles currently active.
    pub fn num_alive(&self) -> usize {
        self.num_alive
    }

    /// The number of retired or never-woken particles.
    pub fn num_dead(&self) -> usize {
        self.max_particles - self.num_alive
    }

    /// The number of attribute buffers in the pool.
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Attribute names in insertion order.
    pub fn buffer_names(&self) -> impl Iterator<Item = &str> {
        self.buffers.keys().map(String::as_str)
    }

    /// Attribute buffers with their names, in insertion order.
    pub fn buffers(&self) -> impl Iterator<Item = (&str, &ParticleBuffer)> {
        self.buffers.iter().map(|(name, buffer)| (name.as_str(), buffer))
    }

    /// Creates a new zeroed buffer with the given stride and adds it under
    /// `name`.
    ///
    /// Fails with [`PoolError::InvalidArgument`] if `stride` is zero and
    /// [`PoolError::DuplicateBuffer`] if the name is already taken.
    pub fn add_buffer(&mut self, name: impl Into<String>, stride: usize) -> Result<()> {
        let buffer = ParticleBuffer::new(self.max_particles, stride)?;
        self.insert_buffer(name, buffer)
    }

    /// Adds an existing buffer under `name`.
    ///
    /// The buffer must have exactly [`max_particles`](Self::max_particles)
    /// slots; every attribute in a pool shares the same capacity.
    ///
    /// Fails with [`PoolError::DuplicateBuffer`] if the name is already
    /// taken and [`PoolError::InvalidArgument`] on a capacity mismatch.
    pub fn insert_buffer(&mut self, name: impl Into<String>, buffer: ParticleBuffer) -> Result<()> {
        let name = name.into();

        if self.buffers.contains_key(&name) {
            return Err(PoolError::DuplicateBuffer(name));
        }

        if buffer.particle_count() != self.max_particles {
            return Err(PoolError::InvalidArgument(format!(
                "buffer {:?} holds {} particles but the pool requires {}",
                name,
                buffer.particle_count(),
                self.max_particles
            )));
        }

        tracing::debug!(name = %name, stride = buffer.stride(), "added attribute buffer");
        self.buffers.insert(name, buffer);
        Ok(())
    }

    /// Removes and returns the buffer registered under `name`.
    ///
    /// Fails with [`PoolError::UnknownBuffer`] if no such buffer exists.
    /// The insertion order of the remaining buffers is preserved.
    pub fn remove_buffer(&mut self, name: &str) -> Result<ParticleBuffer> {
        match self.buffers.shift_remove(name) {
            Some(buffer) => {
                tracing::debug!(name = %name, "removed attribute buffer");
                Ok(buffer)
            }
            None => Err(PoolError::UnknownBuffer(name.into())),
        }
    }

    /// Looks up the buffer registered under `name`.
    ///
    /// Fails with [`PoolError::UnknownBuffer`] if no such buffer exists.
    pub fn buffer(&self, name: &str) -> Result<&ParticleBuffer> {
        self.buffers
            .get(name)
            .ok_or_else(|| PoolError::UnknownBuffer(name.into()))
    }

    /// Mutable variant of [`buffer`](Self::buffer).
    pub fn buffer_mut(&mut self, name: &str) -> Result<&mut ParticleBuffer> {
        self.buffers
            .get_mut(name)
            .ok_or_else(|| PoolError::UnknownBuffer(name.into()))
    }

    /// Activates `amount` particles by extending the alive range.
    ///
    /// The newly woken slots `[old_alive, old_alive + amount)` contain
    /// whatever stale data previous occupants left behind; callers are
    /// responsible for initializing them before use.
    ///
    /// Fails with [`PoolError::InvalidArgument`] if the pool cannot hold
    /// that many more alive particles.
    pub fn wake(&mut self, amount: usize) -> Result<()> {
        // Checked form so a huge `amount` cannot overflow the addition.
        if amount > self.max_particles - self.num_alive {
            return Err(PoolError::InvalidArgument(format!(
                "cannot wake {} particles with {} alive of {} total",
                amount, self.num_alive, self.max_particles
            )));
        }

        self.num_alive += amount;
        Ok(())
    }

    /// Retires the particle at `index`, shrinking the alive range by one.
    ///
    /// The last alive slot's data moves into `index` in every buffer, so
    /// the alive prefix stays packed at the cost of particle ordering.
    ///
    /// Fails with [`PoolError::InvalidArgument`] if `index` is not an
    /// alive slot.
    pub fn sleep(&mut self, index: usize) -> Result<()> {
        if index >= self.num_alive {
            return Err(PoolError::InvalidArgument(format!(
                "cannot sleep slot {} with only {} particles alive",
                index, self.num_alive
            )));
        }

        let tail = self.num_alive - 1;
        for buffer in self.buffers.values_mut() {
            buffer.swap(index, tail)?;
        }

        self.num_alive -= 1;
        Ok(())
    }

    /// Retires every particle in the slot range `[first, last)`.
    ///
    /// Surviving particles are pulled down from the tail of the alive
    /// range into the freed slots, and the alive count drops by exactly
    /// `last - first` -- the same final partition and survivor set as
    /// sleeping each index one at a time against the shrinking range.
    ///
    /// Fails with [`PoolError::InvalidArgument`] if `first > last` or
    /// `last >= num_alive`.
    pub fn sleep_range(&mut self, first: usize, last: usize) -> Result<()> {
        if first > last {
            return Err(PoolError::InvalidArgument(format!(
                "range start {first} exceeds range end {last}"
            )));
        }

        if last >= self.num_alive {
            return Err(PoolError::InvalidArgument(format!(
                "range end {} exceeds the {} particles alive",
                last, self.num_alive
            )));
        }

        // Fill each freed slot from the tail while the tail still holds
        // survivors. Once the tail enters [first, last) every remaining
        // occupant of the range is already doomed and no data needs to
        // move.
        let mut tail = self.num_alive;
        for slot in first..last {
            tail -= 1;
            if tail < last {
                break;
            }

            for buffer in self.buffers.values_mut() {
                buffer.swap(slot, tail)?;
            }
        }

        self.num_alive -= last - first;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A pool with `"pos"` and `"color"` buffers whose slots carry
    /// distinct sentinel blocks (slot i holds i in every element, offset
    /// by buffer).
    fn sentinel_pool(max_particles: usize) -> ParticlePool {
        let mut pool = ParticlePool::new(max_particles);
        for (offset, name) in [(0.0f32, "pos"), (1000.0, "color")] {
            let mut buffer = ParticleBuffer::vec4(max_particles);
            for slot in 0..max_particles {
                for i in 0..4 {
                    buffer[slot * 4 + i] = offset + slot as f32;
                }
            }
            pool.insert_buffer(name, buffer).unwrap();
        }
        pool
    }

    /// The sentinel value stored at `slot` of `name`.
    fn slot_value(pool: &ParticlePool, name: &str, slot: usize) -> f32 {
        pool.buffer(name).unwrap()[slot * 4]
    }

    /// The multiset of alive sentinel values (sorted) for one buffer.
    fn alive_values(pool: &ParticlePool, name: &str) -> Vec<f32> {
        let mut values: Vec<f32> = (0..pool.num_alive())
            .map(|slot| slot_value(pool, name, slot))
            .collect();
        values.sort_by(f32::total_cmp);
        values
    }

    #[test]
    fn test_add_buffer_rejects_duplicates() {
        let mut pool = ParticlePool::new(10);
        pool.add_buffer("pos", 4).unwrap();
        assert!(matches!(
            pool.add_buffer("pos", 4),
            Err(PoolError::DuplicateBuffer(name)) if name == "pos"
        ));
    }

    #[test]
    fn test_add_buffer_rejects_zero_stride() {
        let mut pool = ParticlePool::new(10);
        assert!(matches!(
            pool.add_buffer("pos", 0),
            Err(PoolError::InvalidArgument(_))
        ));
        assert_eq!(pool.buffer_count(), 0);
    }

    #[test]
    fn test_insert_buffer_rejects_capacity_mismatch() {
        let mut pool = ParticlePool::new(10);
        let buffer = ParticleBuffer::vec4(5);
        assert!(matches!(
            pool.insert_buffer("pos", buffer),
            Err(PoolError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_buffer_lookup() {
        let mut pool = ParticlePool::new(4);
        pool.add_buffer("pos", 4).unwrap();

        assert_eq!(pool.buffer("pos").unwrap().stride(), 4);
        assert!(matches!(
            pool.buffer("vel"),
            Err(PoolError::UnknownBuffer(name)) if name == "vel"
        ));
    }

    #[test]
    fn test_remove_buffer_preserves_order() {
        let mut pool = ParticlePool::new(4);
        for name in ["pos", "vel", "color", "life"] {
            pool.add_buffer(name, 4).unwrap();
        }

        pool.remove_buffer("vel").unwrap();

        let names: Vec<&str> = pool.buffer_names().collect();
        assert_eq!(names, ["pos", "color", "life"]);
        assert!(matches!(
            pool.remove_buffer("vel"),
            Err(PoolError::UnknownBuffer(_))
        ));
    }

    #[test]
    fn test_wake_increments_alive_count() {
        let mut pool = ParticlePool::new(10);
        pool.wake(3).unwrap();
        assert_eq!(pool.num_alive(), 3);
        assert_eq!(pool.num_dead(), 7);
    }

    #[test]
    fn test_wake_fails_at_capacity() {
        let mut pool = ParticlePool::new(10);
        pool.wake(10).unwrap();
        assert_eq!(pool.num_alive(), 10);

        assert!(matches!(
            pool.wake(1),
            Err(PoolError::InvalidArgument(_))
        ));
        assert_eq!(pool.num_alive(), 10);
    }

    #[test]
    fn test_wake_rejects_amount_that_would_overflow() {
        let mut pool = ParticlePool::new(10);
        pool.wake(4).unwrap();

        assert!(matches!(
            pool.wake(usize::MAX),
            Err(PoolError::InvalidArgument(_))
        ));
        assert_eq!(pool.num_alive(), 4);
    }

    #[test]
    fn test_sleep_moves_tail_into_freed_slot() {
        let mut pool = sentinel_pool(6);
        pool.wake(5).unwrap();

        pool.sleep(1).unwrap();

        assert_eq!(pool.num_alive(), 4);
        // The particle previously at the last alive slot (4) now lives at
        // slot 1, in every buffer.
        assert_eq!(slot_value(&pool, "pos", 1), 4.0);
        assert_eq!(slot_value(&pool, "color", 1), 1004.0);
        // The retired particle parks in the dead region.
        assert_eq!(slot_value(&pool, "pos", 4), 1.0);
    }

    #[test]
    fn test_sleep_rejects_dead_slots() {
        let mut pool = sentinel_pool(6);
        pool.wake(2).unwrap();

        assert!(matches!(pool.sleep(2), Err(PoolError::InvalidArgument(_))));
        assert_eq!(pool.num_alive(), 2);
    }

    #[test]
    fn test_wake_sleep_conservation() {
        let mut pool = sentinel_pool(8);

        pool.wake(6).unwrap();
        pool.sleep(0).unwrap();
        pool.sleep(3).unwrap();
        pool.wake(2).unwrap();
        pool.sleep(5).unwrap();

        assert_eq!(pool.num_alive() + pool.num_dead(), pool.max_particles());
        assert_eq!(pool.num_alive(), 5);
    }

    #[test]
    fn test_sleep_range_drops_alive_count_once_per_particle() {
        let mut pool = sentinel_pool(10);
        pool.wake(10).unwrap();

        // last must stay below num_alive, so retire [0, 9).
        pool.sleep_range(0, 9).unwrap();
        assert_eq!(pool.num_alive(), 1);
        // The only survivor is the old tail particle, compacted to slot 0.
        assert_eq!(slot_value(&pool, "pos", 0), 9.0);
        assert_eq!(slot_value(&pool, "color", 0), 1009.0);
    }

    #[test]
    fn test_sleep_range_retires_exactly_the_requested_particles() {
        // Disjoint hole and tail: [2, 5) retired out of 8 alive. The
        // survivors must be every particle outside the range, compacted
        // into the alive prefix.
        let mut pool = sentinel_pool(8);
        pool.wake(8).unwrap();

        pool.sleep_range(2, 5).unwrap();

        assert_eq!(pool.num_alive(), 5);
        assert_eq!(alive_values(&pool, "pos"), vec![0.0, 1.0, 5.0, 6.0, 7.0]);
        assert_eq!(
            alive_values(&pool, "color"),
            vec![1000.0, 1001.0, 1005.0, 1006.0, 1007.0]
        );
        assert_eq!(pool.num_alive() + pool.num_dead(), 8);
    }

    #[test]
    fn test_sleep_range_overlapping_tail() {
        // Hole [2, 5) with only 6 alive: the tail enters the hole while
        // compacting.
        let mut pool = sentinel_pool(6);
        pool.wake(6).unwrap();

        pool.sleep_range(2, 5).unwrap();

        assert_eq!(pool.num_alive(), 3);
        assert_eq!(alive_values(&pool, "pos"), vec![0.0, 1.0, 5.0]);
        assert_eq!(alive_values(&pool, "color"), vec![1000.0, 1001.0, 1005.0]);
    }

    #[test]
    fn test_sleep_range_empty_range_is_noop() {
        let mut pool = sentinel_pool(6);
        pool.wake(4).unwrap();

        pool.sleep_range(2, 2).unwrap();
        assert_eq!(pool.num_alive(), 4);
    }

    #[test]
    fn test_sleep_range_validates_bounds() {
        let mut pool = sentinel_pool(6);
        pool.wake(4).unwrap();

        assert!(matches!(
            pool.sleep_range(3, 2),
            Err(PoolError::InvalidArgument(_))
        ));
        assert!(matches!(
            pool.sleep_range(0, 4),
            Err(PoolError::InvalidArgument(_))
        ));
        assert_eq!(pool.num_alive(), 4);
    }

    #[test]
    fn test_pool_wide_swap_covers_every_buffer() {
        let mut pool = sentinel_pool(4);
        pool.wake(4).unwrap();

        pool.sleep(0).unwrap();

        for name in ["pos", "color"] {
            let buffer = pool.buffer(name).unwrap();
            // All four elements of the slot moved together.
            let base = buffer[0];
            assert!((0..4).all(|i| buffer[i] == base));
        }
    }
}
