//! A free-flying camera steered by euler angles.

use cgmath::prelude::*;
use cgmath::{Deg, Matrix4, Point3, Vector2, Vector3};

/// Directions the camera can be moved in with the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Setup of a `FlyCamera`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraParams {
    pub position: Point3<f32>,
    pub world_up: Vector3<f32>,
    /// Yaw in degrees. -90 looks down the negative z-axis.
    pub yaw: f32,
    /// Pitch in degrees.
    pub pitch: f32,
    /// Movement speed in units per second.
    pub speed: f32,
    /// Degrees of rotation per pixel of mouse movement.
    pub sensitivity: f32,
    /// Vertical field of view in degrees.
    pub zoom: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        CameraParams {
            position: Point3::new(0.0, 0.0, 3.0),
            world_up: Vector3::unit_y(),
            yaw: -90.0,
            pitch: 0.0,
            speed: 2.5,
            sensitivity: 0.1,
            zoom: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// A camera with a position and an orientation derived from yaw and pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyCamera {
    pub position: Point3<f32>,
    front: Vector3<f32>,
    up: Vector3<f32>,
    right: Vector3<f32>,
    world_up: Vector3<f32>,
    yaw: f32,
    pitch: f32,
    speed: f32,
    sensitivity: f32,
    zoom: f32,
    clip: Vector2<f32>,
}

impl FlyCamera {
    pub const MAX_PITCH: f32 = 89.0;
    pub const MIN_ZOOM: f32 = 1.0;
    pub const MAX_ZOOM: f32 = 45.0;

    pub fn new(params: CameraParams) -> Self {
        let mut camera = FlyCamera {
            position: params.position,
            front: -Vector3::unit_z(),
            up: params.world_up,
            right: Vector3::unit_x(),
            world_up: params.world_up,
            yaw: params.yaw,
            pitch: params.pitch,
            speed: params.speed,
            sensitivity: params.sensitivity,
            zoom: params.zoom.max(Self::MIN_ZOOM).min(Self::MAX_ZOOM),
            clip: Vector2::new(params.near, params.far),
        };

        camera.update_vectors();
        camera
    }

    #[inline]
    pub fn front(&self) -> Vector3<f32> {
        self.front
    }

    #[inline]
    pub fn up(&self) -> Vector3<f32> {
        self.up
    }

    #[inline]
    pub fn right(&self) -> Vector3<f32> {
        self.right
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Moves the camera along its own axes, `dt` seconds at full speed.
    pub fn process_keyboard(&mut self, direction: Movement, dt: f32) {
        let velocity = self.speed * dt;
        match direction {
            Movement::Forward => self.position += self.front * velocity,
            Movement::Backward => self.position -= self.front * velocity,
            Movement::Left => self.position -= self.right * velocity,
            Movement::Right => self.position += self.right * velocity,
        }
    }

    /// Turns the camera by a mouse offset in pixels. With `constrain_pitch`, the
    /// pitch stays within `[-89, 89]` degrees so the view never flips over.
    pub fn process_mouse_movement(&mut self, offset: Vector2<f32>, constrain_pitch: bool) {
        self.yaw += offset.x * self.sensitivity;
        self.pitch += offset.y * self.sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.max(-Self::MAX_PITCH).min(Self::MAX_PITCH);
        }

        self.update_vectors();
    }

    /// Zooms in by the scrolled amount, within `[1, 45]` degrees of field of view.
    pub fn process_mouse_scroll(&mut self, offset: f32) {
        self.zoom = (self.zoom - offset).max(Self::MIN_ZOOM).min(Self::MAX_ZOOM);
    }

    /// Gets the view matrix looking from the camera position along `front`.
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at(self.position, self.position + self.front, self.up)
    }

    /// Gets the perspective projection matrix with the current zoom as
    /// vertical field of view.
    pub fn projection_matrix(&self, aspect: f32) -> Matrix4<f32> {
        cgmath::perspective(Deg(self.zoom), aspect, self.clip.x, self.clip.y)
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let front = Vector3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos());

        self.front = front.normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        FlyCamera::new(CameraParams::default())
    }
}

/// Turns absolute cursor positions into per-event offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseTracker {
    last: Option<Vector2<f64>>,
}

impl MouseTracker {
    pub fn new() -> Self {
        MouseTracker { last: None }
    }

    /// Returns the movement since the previous cursor position. The y-axis is
    /// reversed since window coordinates go from top to bottom. The very first
    /// position produces no movement.
    pub fn offset(&mut self, cursor: Vector2<f64>) -> Vector2<f32> {
        let last = self.last.unwrap_or(cursor);
        self.last = Some(cursor);

        Vector2::new((cursor.x - last.x) as f32, (last.y - cursor.y) as f32)
    }

    /// Forgets the previous cursor position, eg. after the cursor was recaptured.
    #[inline]
    pub fn reset(&mut self) {
        self.last = None;
    }
}
