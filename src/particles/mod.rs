//! A fixed-capacity particle system.
//!
//! The pool allocates all of its slots once, and a slot is either dead
//! (`life <= 0`) or alive. Every tick a bounded number of slots is respawned
//! with fresh random state, then every slot ages by the frame time and the
//! survivors move with constant acceleration.
//!
//! Finding a dead slot starts from the slot recycled last and wraps around the
//! pool. When every slot is alive, the search settles on slot 0 and the live
//! particle there is overwritten. Spawn requests never fail and the pool never
//! grows, so a saturated pool keeps a constant particle count at the cost of
//! cutting some lives short.

mod particle;
pub use self::particle::Particle;

mod pool;
pub use self::pool::ParticlePool;

use cgmath::Vector3;

/// Setup of a particle pool. Copied into the pool on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleParams {
    /// Number of particle slots.
    pub capacity: usize,
    /// Number of particles respawned per tick.
    pub spawn_per_tick: usize,
    /// Lifespan of a freshly respawned particle, in seconds.
    pub lifespan: f32,
    /// Size of a freshly respawned particle.
    pub size: f32,
    /// Constant acceleration applied to every particle.
    pub acceleration: Vector3<f32>,
}

impl Default for ParticleParams {
    fn default() -> Self {
        ParticleParams {
            capacity: 100,
            spawn_per_tick: 2,
            lifespan: 1.0,
            size: 0.05,
            acceleration: Vector3::new(0.0, -0.2, 0.0),
        }
    }
}
