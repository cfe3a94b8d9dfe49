pub use crate::math;
pub use crate::math::prelude::{EuclideanSpace, InnerSpace, Matrix, One, SquareMatrix, Zero};
pub use crate::math::{Color, Cube, Point2, Point3, Vector2, Vector3};

pub use crate::curve;
pub use crate::curve::{ControlPoints, CurveAnimator, CurveParams, SubdivisionLevels};

pub use crate::particles;
pub use crate::particles::{Particle, ParticleParams, ParticlePool};

pub use crate::scene;
pub use crate::scene::{CameraParams, Chest, FlightParams, FlightScene, FlyCamera, MouseTracker, Movement};

pub use crate::application;
pub use crate::application::{ClockParams, FrameClock, Settings, SettingsError};

pub use crate::errors::Result;
