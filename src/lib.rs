//! # What is This?
//!
//! `cgkit` collects the small pieces of real computation behind a handful of
//! OpenGL coursework demos: the Bezier curve evaluator and its de Casteljau
//! construction, a fixed-capacity particle pool, and the explicit per-frame
//! state of the flight scene (fly camera, chest collisions, frame clock).
//!
//! Nothing in here talks to a graphics API. Every module exposes plain data
//! (points, particle records, matrices) which the host render loop turns into
//! vertex buffers and draw calls.
//!
//! ## Curves
//!
//! ```rust
//! use cgkit::curve::{self, ControlPoints};
//! use cgkit::math::Point2;
//!
//! let mut points = ControlPoints::new();
//! points.append(Point2::new(0.0, 0.0));
//! points.append(Point2::new(1.0, 2.0));
//!
//! let p = curve::evaluate_curve_point(points.as_slice(), 0.5).unwrap();
//! assert_eq!(p, Point2::new(0.5, 1.0));
//! assert_eq!(curve::subdivision_levels(points.as_slice(), 0.5).count(), 2);
//! ```
//!
//! ## Particles
//!
//! ```rust
//! use cgkit::particles::{ParticleParams, ParticlePool};
//!
//! let params = ParticleParams::default();
//! let mut pool = ParticlePool::new(params);
//! pool.tick(0.016, params.spawn_per_tick);
//! assert_eq!(pool.alive_count(), params.spawn_per_tick);
//! ```

#[macro_use]
pub extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde;
extern crate serde_json;

pub extern crate cgmath;
pub extern crate rand;

#[macro_use]
pub mod errors;
pub mod math;

pub mod curve;
pub mod particles;
pub mod scene;

pub mod application;
pub mod prelude;
