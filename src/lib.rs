pub mod error;
pub mod geometry;
pub mod math;
pub mod report;

pub use error::{ConicError, GeometryError, Result, ValidationError};
pub use geometry::{
    Circle, Conic, ConicCoefficients, ConicVariant, CurveModel, Ellipse, Hyperbola, Parabola,
};
pub use math::{Comparison, Epsilon, Point2};
pub use report::{Feature, GeometricDescriptor};
