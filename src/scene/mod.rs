//! Explicit per-frame state of the 3D demos.
//!
//! The host render loop owns a scene value, feeds it input and frame time, and
//! reads back matrices, chest states and particles for drawing.

pub mod camera;
pub use self::camera::{CameraParams, FlyCamera, MouseTracker, Movement};

pub mod flight;
pub use self::flight::{Chest, FlightParams, FlightScene};
