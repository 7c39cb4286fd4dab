pub mod coefficients;
pub mod curve;
pub mod variant;

pub use coefficients::ConicCoefficients;
pub use curve::{Circle, Conic, CurveModel, Ellipse, Hyperbola, Parabola};
pub use variant::ConicVariant;
