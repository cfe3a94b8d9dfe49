//! This module contains the math utils that mainly comes from `cgmath`, plus the
//! small geometric helpers shared by the demos.

pub use cgmath::*;

pub mod color;
pub use self::color::Color;

pub mod bounds;
pub use self::bounds::{check_collision, Cube};
