//! Hanabi Particle Storage Engine
//!
//! This crate provides the storage primitives every hanabi particle
//! system is built on:
//!
//! - **Attribute Buffers**: fixed-capacity struct-of-arrays storage, one
//!   contiguous `f32` run per named attribute
//! - **Particle Pool**: a named buffer collection with an alive/dead
//!   partition supporting O(1) particle activation and retirement
//! - **Structured Values**: `Tuple4`/`Vector3`/`Color4` views marshalled
//!   on demand against stride-4 storage
//!
//! # Example
//!
//! ```rust
//! use hanabi_core::math::Vector3;
//! use hanabi_core::ParticlePool;
//!
//! let mut pool = ParticlePool::new(1024);
//! pool.add_buffer("pos", 4).unwrap();
//! pool.add_buffer("vel", 4).unwrap();
//!
//! // Activate a particle and initialize its position.
//! pool.wake(1).unwrap();
//! let spawn = Vector3::new(10.0, 20.0, 0.0);
//! spawn.unmarshal(0, pool.buffer_mut("pos").unwrap()).unwrap();
//!
//! // Retire it again; the alive prefix stays packed.
//! pool.sleep(0).unwrap();
//! assert_eq!(pool.num_alive(), 0);
//! assert_eq!(pool.num_dead(), 1024);
//! ```

pub mod buffer;
pub mod error;
pub mod math;
pub mod pool;

pub use buffer::ParticleBuffer;
pub use error::{PoolError, Result};
pub use math::{Color4, Tuple4, Vector3};
pub use pool::ParticlePool;
