pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Magnitude below which the normalized cross product of a point offset and
/// an edge direction counts as collinear.
pub const COLLINEAR_EPSILON: f64 = 1e-9;
