use thiserror::Error;

use crate::geometry::ConicVariant;

/// Top-level error type for conic classification and queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConicError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised while constructing a curve model from coefficients.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error(
        "coefficients do not describe a {variant}: discriminant B^2 - 4AC = {discriminant}, expected {expected}"
    )]
    ShapeMismatch {
        variant: ConicVariant,
        discriminant: f64,
        expected: &'static str,
    },

    #[error("coefficient {name} is not finite")]
    NonFinite { name: &'static str },

    #[error("comparison tolerance {0} must be finite and non-negative")]
    InvalidTolerance(f64),
}

/// Errors raised by geometric queries on a curve model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("degenerate curve: {0}")]
    DegenerateCurve(String),

    #[error("no real circle exists: radius^2 = {radius_squared}")]
    ImaginaryRadius { radius_squared: f64 },

    #[error("{quantity} is undefined: negative radicand {radicand}")]
    InvalidDomain {
        quantity: &'static str,
        radicand: f64,
    },
}

/// Convenience type alias for results using [`ConicError`].
pub type Result<T> = std::result::Result<T, ConicError>;
