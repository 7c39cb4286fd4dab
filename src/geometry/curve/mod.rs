mod circle;
mod ellipse;
mod hyperbola;
mod parabola;


pub use circle::Circle;
pub use ellipse::Ellipse;
pub use hyperbola::Hyperbola;
pub use parabola::Parabola;

use crate::error::Result;
use crate::math::{Comparison, Point2};
use crate::report::GeometricDescriptor;

use super::{ConicCoefficients, ConicVariant};

/// Trait for validated second-degree curves.
///
/// Implementors hold only their coefficients and the comparison policy they
/// were validated with; every query recomputes from those.
pub trait Conic {
    /// The variant whose rule the coefficients satisfy.
    const VARIANT: ConicVariant;

    /// Returns the validated coefficients.
    fn coefficients(&self) -> &ConicCoefficients;

    /// Returns the comparison policy used for validation and guards.
    fn comparison(&self) -> Comparison;

    /// Computes the center, or the vertex for a parabola.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateCurve` if the point is undefined for these coefficients.
    fn center_or_vertex(&self) -> Result<Point2>;

    /// Computes the point and the variant-specific descriptor.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by the underlying queries.
    fn describe(&self) -> Result<GeometricDescriptor>;
}

/// A validated curve of one of the four variants.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveModel {
    Circle(Circle),
    Parabola(Parabola),
    Ellipse(Ellipse),
    Hyperbola(Hyperbola),
}

impl CurveModel {
    /// Validates `coeffs` against `variant` using exact comparison.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the coefficients do not satisfy the variant's rule.
    pub fn new(variant: ConicVariant, coeffs: ConicCoefficients) -> Result<Self> {
        Self::with_comparison(variant, coeffs, Comparison::Exact)
    }

    /// Validates `coeffs` against `variant` using `cmp`.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the coefficients do not satisfy the variant's rule.
    pub fn with_comparison(
        variant: ConicVariant,
        coeffs: ConicCoefficients,
        cmp: Comparison,
    ) -> Result<Self> {
        Ok(match variant {
            ConicVariant::Circle => Self::Circle(Circle::with_comparison(coeffs, cmp)?),
            ConicVariant::Parabola => Self::Parabola(Parabola::with_comparison(coeffs, cmp)?),
            ConicVariant::Ellipse => Self::Ellipse(Ellipse::with_comparison(coeffs, cmp)?),
            ConicVariant::Hyperbola => Self::Hyperbola(Hyperbola::with_comparison(coeffs, cmp)?),
        })
    }

    /// Validates raw `[A, B, C, D, E, F]` against `variant` using exact comparison.
    ///
    /// # Errors
    ///
    /// Returns `NonFinite` for NaN or infinite input and `ShapeMismatch` if the
    /// coefficients do not satisfy the variant's rule.
    pub fn from_array(variant: ConicVariant, values: [f64; 6]) -> Result<Self> {
        Self::new(variant, ConicCoefficients::from_array(values)?)
    }

    /// Classifies `coeffs` and builds the matching model.
    ///
    /// # Errors
    ///
    /// Does not fail for finite coefficients; the error path is shared with
    /// [`CurveModel::with_comparison`].
    pub fn classify(coeffs: ConicCoefficients, cmp: Comparison) -> Result<Self> {
        let variant = ConicVariant::classify(&coeffs, cmp);
        Self::with_comparison(variant, coeffs, cmp)
    }

    /// Returns the variant of this model.
    #[must_use]
    pub fn variant(&self) -> ConicVariant {
        match self {
            Self::Circle(_) => Circle::VARIANT,
            Self::Parabola(_) => Parabola::VARIANT,
            Self::Ellipse(_) => Ellipse::VARIANT,
            Self::Hyperbola(_) => Hyperbola::VARIANT,
        }
    }

    /// Returns the validated coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &ConicCoefficients {
        match self {
            Self::Circle(c) => c.coefficients(),
            Self::Parabola(p) => p.coefficients(),
            Self::Ellipse(e) => e.coefficients(),
            Self::Hyperbola(h) => h.coefficients(),
        }
    }

    /// Computes the center, or the vertex for a parabola.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateCurve` if the point is undefined for these coefficients.
    pub fn center_or_vertex(&self) -> Result<Point2> {
        match self {
            Self::Circle(c) => c.center_or_vertex(),
            Self::Parabola(p) => p.center_or_vertex(),
            Self::Ellipse(e) => e.center_or_vertex(),
            Self::Hyperbola(h) => h.center_or_vertex(),
        }
    }

    /// Computes the point and the variant-specific descriptor.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by the underlying queries.
    pub fn describe(&self) -> Result<GeometricDescriptor> {
        match self {
            Self::Circle(c) => c.describe(),
            Self::Parabola(p) => p.describe(),
            Self::Ellipse(e) => e.describe(),
            Self::Hyperbola(h) => h.describe(),
        }
    }

    /// Renders the human-readable summary for this curve.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised while computing the descriptor.
    pub fn report(&self) -> Result<String> {
        Ok(self.describe()?.to_string())
    }

    /// Returns the circle, if this is one.
    #[must_use]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Self::Circle(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the parabola, if this is one.
    #[must_use]
    pub fn as_parabola(&self) -> Option<&Parabola> {
        match self {
            Self::Parabola(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the ellipse, if this is one.
    #[must_use]
    pub fn as_ellipse(&self) -> Option<&Ellipse> {
        match self {
            Self::Ellipse(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the hyperbola, if this is one.
    #[must_use]
    pub fn as_hyperbola(&self) -> Option<&Hyperbola> {
        match self {
            Self::Hyperbola(h) => Some(h),
            _ => None,
        }
    }
}

impl From<Circle> for CurveModel {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

impl From<Parabola> for CurveModel {
    fn from(p: Parabola) -> Self {
        Self::Parabola(p)
    }
}

impl From<Ellipse> for CurveModel {
    fn from(e: Ellipse) -> Self {
        Self::Ellipse(e)
    }
}

impl From<Hyperbola> for CurveModel {
    fn from(h: Hyperbola) -> Self {
        Self::Hyperbola(h)
    }
}
