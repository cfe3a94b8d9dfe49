use cgmath::{Point3, Vector3};
use rand::rngs::ThreadRng;
use rand::Rng;

use super::camera::{CameraParams, FlyCamera};
use crate::math::Cube;
use crate::particles::{ParticleParams, ParticlePool};

/// Setup of the flight scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightParams {
    /// Rest positions of the treasure chests.
    pub chest_positions: Vec<Point3<f32>>,
    /// Half edge length of the collision cube around a chest.
    pub chest_size: f32,
    /// Half edge length of the collision cube around the aircraft.
    pub aircraft_size: f32,
    /// Number of frames a chest takes to blow apart after being hit.
    pub chest_max_offset: u32,
    /// Distance the chest fragments travel per frame.
    pub explode_step: f32,
}

impl Default for FlightParams {
    fn default() -> Self {
        FlightParams {
            chest_positions: vec![
                Point3::new(0.0, 0.0, -5.0),
                Point3::new(5.0, 0.0, -3.0),
                Point3::new(5.0, 0.0, 3.0),
                Point3::new(0.0, 0.0, 5.0),
                Point3::new(-5.0, 0.0, 3.0),
                Point3::new(-5.0, 0.0, -3.0),
            ],
            chest_size: 0.5,
            aircraft_size: 0.2,
            chest_max_offset: 100,
            explode_step: 0.1,
        }
    }
}

/// A treasure chest which explodes once the aircraft flies into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chest {
    pub position: Point3<f32>,
    offset: u32,
    max_offset: u32,
    step: f32,
}

impl Chest {
    /// Frames elapsed since the chest was hit, zero if it is intact.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[inline]
    pub fn is_exploding(&self) -> bool {
        self.offset > 0
    }

    /// A chest disappears once its explosion has run its course.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.offset < self.max_offset
    }

    /// Distance the fragments have travelled from their rest position.
    #[inline]
    pub fn explode_offset(&self) -> f32 {
        self.offset as f32 * self.step
    }

    /// Vertical displacement of the floating animation at `elapsed` seconds.
    #[inline]
    pub fn bob_height(elapsed: f32) -> f32 {
        elapsed.sin()
    }
}

/// The mutable state of the flight scene, advanced once per frame.
pub struct FlightScene<R: Rng = ThreadRng> {
    camera: FlyCamera,
    chests: Vec<Chest>,
    particles: ParticlePool<R>,
    spawn_per_tick: usize,
    chest_bounds: f32,
    aircraft_bounds: f32,
    elapsed: f32,
}

impl FlightScene<ThreadRng> {
    pub fn new(flight: &FlightParams, camera: CameraParams, particles: ParticleParams) -> Self {
        FlightScene::with_rng(flight, camera, particles, rand::thread_rng())
    }
}

impl<R: Rng> FlightScene<R> {
    pub fn with_rng(
        flight: &FlightParams,
        camera: CameraParams,
        particles: ParticleParams,
        rng: R,
    ) -> Self {
        let chests = flight
            .chest_positions
            .iter()
            .map(|&position| Chest {
                position,
                offset: 0,
                max_offset: flight.chest_max_offset,
                step: flight.explode_step,
            })
            .collect();

        FlightScene {
            camera: FlyCamera::new(camera),
            chests,
            particles: ParticlePool::with_rng(particles, rng),
            spawn_per_tick: particles.spawn_per_tick,
            chest_bounds: flight.chest_size,
            aircraft_bounds: flight.aircraft_size,
            elapsed: 0.0,
        }
    }

    #[inline]
    pub fn camera(&self) -> &FlyCamera {
        &self.camera
    }

    #[inline]
    pub fn camera_mut(&mut self) -> &mut FlyCamera {
        &mut self.camera
    }

    #[inline]
    pub fn chests(&self) -> &[Chest] {
        &self.chests
    }

    #[inline]
    pub fn particles(&self) -> &ParticlePool<R> {
        &self.particles
    }

    /// Seconds accumulated over all frames so far.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// The aircraft flies two units ahead of the camera, slightly below it.
    pub fn aircraft_position(&self) -> Point3<f32> {
        self.camera.position + self.camera.front() * 2.0 + Vector3::new(0.0, -0.5, 0.0)
    }

    /// Advances the scene by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;

        let aircraft = Cube::new(self.aircraft_position(), self.aircraft_bounds);
        for chest in &mut self.chests {
            if !chest.is_visible() {
                continue;
            }

            if chest.is_exploding() {
                chest.offset += 1;
            } else if aircraft.intersects(&Cube::new(chest.position, self.chest_bounds)) {
                debug!("Aircraft hits the chest at {:?}.", chest.position);
                chest.offset += 1;
            }
        }

        self.particles.tick(dt, self.spawn_per_tick);
    }

    /// Puts every chest back in one piece.
    pub fn reset_chests(&mut self) {
        info!("Resets {} chests.", self.chests.len());
        for chest in &mut self.chests {
            chest.offset = 0;
        }
    }
}
