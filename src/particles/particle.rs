use cgmath::prelude::*;
use cgmath::{Point3, Vector3};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use super::ParticleParams;
use crate::math::Color;

/// A short-lived point with kinematic and visual state.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Point3<f32>,
    pub velocity: Vector3<f32>,
    pub acceleration: Vector3<f32>,
    pub color: Color<f32>,
    pub size: f32,
    /// Remaining life in seconds.
    pub life: f32,
}

impl Default for Particle {
    fn default() -> Self {
        Particle {
            position: Point3::origin(),
            velocity: Vector3::zero(),
            acceleration: Vector3::zero(),
            color: Color::transparent(),
            size: 0.0,
            life: 0.0,
        }
    }
}

impl Particle {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Resets this particle into a freshly spawned, fully alive state.
    ///
    /// Position and velocity are drawn per axis from `[-1, 1]`, the color is a
    /// random opaque RGB. The remaining attributes come from `params`.
    pub fn respawn<R: Rng + ?Sized>(&mut self, params: &ParticleParams, rng: &mut R) {
        let unit = Uniform::new_inclusive(-1.0f32, 1.0);

        self.position = Point3::new(unit.sample(rng), unit.sample(rng), unit.sample(rng));
        self.velocity = Vector3::new(unit.sample(rng), unit.sample(rng), unit.sample(rng));
        self.acceleration = params.acceleration;
        self.color = Color::random_opaque(rng);
        self.size = params.size;
        self.life = params.lifespan;
    }

    /// Ages the particle by `dt` seconds. If it is still alive afterwards, it
    /// also moves with its constant acceleration. A dead particle keeps its
    /// stale position and velocity until respawned.
    pub fn update(&mut self, dt: f32) {
        self.life -= dt;
        if self.life > 0.0 {
            self.position += self.velocity * dt + self.acceleration * (0.5 * dt * dt);
            self.velocity += self.acceleration * dt;
        }
    }
}
