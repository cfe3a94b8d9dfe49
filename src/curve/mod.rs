//! Bezier curves and their de Casteljau construction.
//!
//! A curve is defined by an ordered list of 2D control points `P_0..P_n`. A
//! point on the curve is the Bernstein-weighted sum of the control points, see
//! [`evaluate_curve_point`](fn.evaluate_curve_point.html). For visualizing how
//! that point comes to be, [`subdivision_levels`](fn.subdivision_levels.html)
//! yields every intermediate polyline of the de Casteljau construction, each
//! level one point shorter than the previous, down to the single curve point.
//!
//! The control points themselves are edited through
//! [`ControlPoints`](struct.ControlPoints.html), and
//! [`CurveAnimator`](struct.CurveAnimator.html) sweeps the curve parameter
//! once per frame.

pub mod bernstein;
pub use self::bernstein::{binomial, evaluate_bernstein, evaluate_curve_point, sample_curve};

pub mod subdivision;
pub use self::subdivision::{subdivision_levels, SubdivisionLevels};

mod control_points;
pub use self::control_points::ControlPoints;

mod animator;
pub use self::animator::{CurveAnimator, CurveParams};
