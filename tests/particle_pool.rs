extern crate cgkit;
extern crate env_logger;
extern crate rand;

use cgkit::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn params(capacity: usize) -> ParticleParams {
    ParticleParams {
        capacity,
        spawn_per_tick: 2,
        lifespan: 1.0,
        size: 0.05,
        acceleration: Vector3::new(0.0, -0.2, 0.0),
    }
}

fn pool(capacity: usize) -> ParticlePool<StdRng> {
    let _ = env_logger::try_init();
    ParticlePool::with_rng(params(capacity), StdRng::from_seed([5; 32]))
}

#[test]
fn initialize() {
    let pool = pool(16);
    assert_eq!(pool.capacity(), 16);
    assert_eq!(pool.particles().len(), 16);
    assert_eq!(pool.alive_count(), 0);

    for v in pool.iter() {
        assert!(v.life <= 0.0);
        assert_eq!(*v, Particle::default());
    }
}

#[test]
fn fill() {
    let mut pool = pool(16);
    pool.tick(0.016, 16);
    assert_eq!(pool.alive_count(), 16);
    assert!(pool.iter().all(|v| v.is_alive()));
}

#[test]
fn steady_state() {
    let mut pool = pool(8);

    // Lifespan of 1s at 0.25s per tick, two spawns per tick: three generations
    // of two particles survive every tick.
    for i in 1..=3 {
        pool.tick(0.25, 2);
        assert_eq!(pool.alive_count(), 2 * i);
    }

    for _ in 0..16 {
        pool.tick(0.25, 2);
        assert_eq!(pool.alive_count(), 6);
    }
}

#[test]
fn saturated() {
    let mut pool = pool(4);
    pool.tick(0.1, 4);
    assert_eq!(pool.cursor(), 3);

    let before: Vec<_> = pool.iter().cloned().collect();
    pool.tick(0.1, 1);

    // No dead slot left, slot 0 is overwritten with a fresh particle.
    assert_eq!(pool.cursor(), 0);
    assert_eq!(pool.alive_count(), 4);
    assert!((pool.particles()[0].life - 0.9).abs() < 1e-6);
    assert!((pool.particles()[1].life - 0.8).abs() < 1e-6);
    assert_ne!(pool.particles()[0].position, before[0].position);
}

#[test]
fn recycle_from_cursor() {
    let mut pool = pool(4);
    pool.tick(0.1, 4);

    // Everything dies, the next search starts where the last one stopped.
    pool.tick(2.0, 0);
    assert_eq!(pool.alive_count(), 0);
    assert_eq!(pool.find_dead_slot(), 3);

    pool.tick(0.1, 2);
    assert_eq!(pool.alive_count(), 2);
    assert!(pool.particles()[3].is_alive());
    assert!(pool.particles()[0].is_alive());
}

#[test]
fn expiring_particle_keeps_state() {
    let mut pool = pool(4);
    pool.tick(0.5, 1);

    let before = pool.particles()[0];
    assert!((before.life - 0.5).abs() < 1e-6);

    pool.tick(0.5, 0);
    let after = pool.particles()[0];
    assert!(!after.is_alive());
    assert_eq!(after.position, before.position);
    assert_eq!(after.velocity, before.velocity);
}

#[test]
fn integrate() {
    let mut pool = pool(2);
    pool.tick(0.0, 1);

    let before = pool.particles()[0];
    pool.tick(0.5, 0);

    let p = pool.particles()[0];
    let dt = 0.5;
    assert_eq!(p.life, 0.5);
    assert_eq!(
        p.position,
        before.position + (before.velocity * dt + before.acceleration * (0.5 * dt * dt))
    );
    assert_eq!(p.velocity, before.velocity + before.acceleration * dt);
}

#[test]
fn respawned_state() {
    let mut pool = pool(32);
    pool.tick(0.0, 32);

    for v in pool.alive() {
        assert_eq!(v.life, 1.0);
        assert_eq!(v.size, 0.05);
        assert_eq!(v.acceleration, Vector3::new(0.0, -0.2, 0.0));
        assert!(v.color.is_opaque());
        assert!(v.position.x.abs() <= 1.0 && v.position.y.abs() <= 1.0 && v.position.z.abs() <= 1.0);
        assert!(v.velocity.x.abs() <= 1.0 && v.velocity.y.abs() <= 1.0 && v.velocity.z.abs() <= 1.0);
    }
}
