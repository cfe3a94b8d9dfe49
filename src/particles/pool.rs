use std::slice::Iter;

use rand::rngs::ThreadRng;
use rand::Rng;

use super::{Particle, ParticleParams};

/// A fixed number of particle slots, recycled in a ring.
pub struct ParticlePool<R: Rng = ThreadRng> {
    particles: Vec<Particle>,
    cursor: usize,
    params: ParticleParams,
    rng: R,
}

impl ParticlePool<ThreadRng> {
    /// Creates a pool drawing its randomness from the thread-local generator.
    pub fn new(params: ParticleParams) -> Self {
        ParticlePool::with_rng(params, rand::thread_rng())
    }
}

impl<R: Rng> ParticlePool<R> {
    /// Creates a pool with `params.capacity` dead particles.
    pub fn with_rng(params: ParticleParams, rng: R) -> Self {
        assert!(
            params.capacity > 0,
            "The capacity of particle pool cannot be zero."
        );

        debug!(
            "Creates particle pool with {} slots, {} respawns per tick.",
            params.capacity, params.spawn_per_tick
        );

        ParticlePool {
            particles: vec![Particle::default(); params.capacity],
            cursor: 0,
            params,
            rng,
        }
    }

    /// Respawns `spawn_count` particles, then ages every slot by `dt` seconds and
    /// moves the ones still alive.
    pub fn tick(&mut self, dt: f32, spawn_count: usize) {
        for _ in 0..spawn_count {
            let index = self.find_dead_slot();
            if self.particles[index].is_alive() {
                trace!("Particle pool saturated, overwrites live slot {}.", index);
            }

            self.respawn(index);
        }

        for v in &mut self.particles {
            v.update(dt);
        }
    }

    /// Finds a dead slot, starting at the slot recycled last and wrapping around
    /// the pool. The cursor moves to the found slot.
    ///
    /// If every slot is alive, the cursor is reset and slot 0 is returned even
    /// though it holds a live particle.
    pub fn find_dead_slot(&mut self) -> usize {
        let start = self.cursor;
        let found = (start..self.particles.len())
            .chain(0..start)
            .find(|&i| !self.particles[i].is_alive());

        self.cursor = found.unwrap_or(0);
        self.cursor
    }

    /// Resets the particle at `index` into a freshly spawned state.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of the capacity of this pool.
    pub fn respawn(&mut self, index: usize) {
        let params = self.params;
        self.particles[index].respawn(&params, &mut self.rng);
    }

    /// Returns the index of the slot recycled last.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn params(&self) -> &ParticleParams {
        &self.params
    }

    /// Returns all slots, dead ones included.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    #[cfg(test)]
    fn get_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }

    /// Returns an iterator over the particles that should be drawn.
    pub fn alive(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(|v| v.is_alive())
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    #[inline]
    pub fn iter(&self) -> Iter<Particle> {
        self.particles.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(capacity: usize) -> ParticlePool<StdRng> {
        let params = ParticleParams {
            capacity,
            ..Default::default()
        };

        ParticlePool::with_rng(params, StdRng::from_seed([11; 32]))
    }

    #[test]
    fn cursor_scan() {
        let mut pool = pool(4);
        assert_eq!(pool.find_dead_slot(), 0);

        pool.get_mut(0).unwrap().life = 1.0;
        pool.get_mut(1).unwrap().life = 1.0;
        assert_eq!(pool.find_dead_slot(), 2);
        assert_eq!(pool.cursor(), 2);

        pool.get_mut(2).unwrap().life = 1.0;
        pool.get_mut(3).unwrap().life = 1.0;
        pool.get_mut(0).unwrap().life = 0.0;
        assert_eq!(pool.find_dead_slot(), 0);
        assert_eq!(pool.cursor(), 0);
    }

    #[test]
    fn saturated() {
        let mut pool = pool(4);
        for i in 0..4 {
            pool.get_mut(i).unwrap().life = 1.0;
        }

        pool.cursor = 3;
        assert_eq!(pool.find_dead_slot(), 0);
        assert_eq!(pool.cursor(), 0);
    }

    #[test]
    #[should_panic]
    fn zero_capacity() {
        pool(0);
    }
}
