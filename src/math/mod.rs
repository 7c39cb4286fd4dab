pub mod center_2d;
pub mod comparison;
pub mod quadratic_form;

pub use comparison::{Comparison, Epsilon};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2x2 matrix type, used for the quadratic part of a conic.
pub type Matrix2 = nalgebra::Matrix2<f64>;

/// Default geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
