use crate::error::{GeometryError, Result};
use crate::geometry::{ConicCoefficients, ConicVariant};
use crate::math::center_2d::vertical_parabola_vertex;
use crate::math::{Comparison, Point2};
use crate::report::{Feature, GeometricDescriptor};

use super::Conic;

/// A parabola, `B² - 4AC = 0`.
///
/// Vertex and directrix are only modeled for a vertical axis,
/// `A x² + D x + E y + F = 0`, i.e. `(x - x0)² = 4p(y - y0)`. Any other
/// orientation, including `y² = 4x`, passes validation but fails those
/// queries with `DegenerateCurve`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parabola {
    coeffs: ConicCoefficients,
    cmp: Comparison,
}

impl Parabola {
    /// Creates a new parabola using exact comparison.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless `B² - 4AC = 0`.
    pub fn new(coeffs: ConicCoefficients) -> Result<Self> {
        Self::with_comparison(coeffs, Comparison::Exact)
    }

    /// Creates a new parabola using `cmp` for the rule and for later guards.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless `B² - 4AC = 0` under `cmp`.
    pub fn with_comparison(coeffs: ConicCoefficients, cmp: Comparison) -> Result<Self> {
        Self::VARIANT.validate(&coeffs, cmp)?;
        Ok(Self { coeffs, cmp })
    }

    fn nonzero_a(&self) -> Result<f64> {
        let a = self.coeffs.a();
        if self.cmp.is_zero(a) {
            return Err(GeometryError::DegenerateCurve(
                "coefficient A is zero, the parabola does not have a vertical axis".into(),
            )
            .into());
        }
        Ok(a)
    }

    /// Computes the directrix `y = y0 - p` with `p = 1 / 4A`.
    ///
    /// This treats the equation as if it were normalized to `E = -1`; for
    /// other `E` the line is not the true directrix. See
    /// [`Parabola::directrix_exact`].
    ///
    /// # Errors
    ///
    /// Returns `DegenerateCurve` if the vertex is undefined or `A` is zero.
    pub fn directrix(&self) -> Result<f64> {
        let vertex = self.center_or_vertex()?;
        let p = 1.0 / (4.0 * self.nonzero_a()?);
        let y = vertex.y - p;
        tracing::trace!(directrix = y, "parabola directrix");
        Ok(y)
    }

    /// Computes the directrix from the true focal parameter `p = -E / 4A`.
    ///
    /// Distinct from [`Parabola::directrix`]; the two agree only when `E = -1`.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateCurve` if the vertex is undefined or `A` is zero.
    pub fn directrix_exact(&self) -> Result<f64> {
        let vertex = self.center_or_vertex()?;
        let p = -self.coeffs.e() / (4.0 * self.nonzero_a()?);
        Ok(vertex.y - p)
    }
}

impl Conic for Parabola {
    const VARIANT: ConicVariant = ConicVariant::Parabola;

    fn coefficients(&self) -> &ConicCoefficients {
        &self.coeffs
    }

    fn comparison(&self) -> Comparison {
        self.cmp
    }

    fn center_or_vertex(&self) -> Result<Point2> {
        let [a, b, c, d, e, f] = self.coeffs.to_array();
        vertical_parabola_vertex(a, b, c, d, e, f, self.cmp)
    }

    fn describe(&self) -> Result<GeometricDescriptor> {
        Ok(GeometricDescriptor {
            variant: Self::VARIANT,
            anchor: self.center_or_vertex()?,
            feature: Feature::Directrix(self.directrix()?),
        })
    }
}
