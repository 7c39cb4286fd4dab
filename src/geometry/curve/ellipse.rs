use crate::error::{GeometryError, Result};
use crate::geometry::{ConicCoefficients, ConicVariant};
use crate::math::center_2d::conic_center;
use crate::math::quadratic_form::eigenvalues;
use crate::math::{Comparison, Point2};
use crate::report::{Feature, GeometricDescriptor};

use super::Conic;

/// An ellipse, `B² - 4AC < 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    coeffs: ConicCoefficients,
    cmp: Comparison,
}

impl Ellipse {
    /// Creates a new ellipse using exact comparison.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless `B² - 4AC < 0`.
    pub fn new(coeffs: ConicCoefficients) -> Result<Self> {
        Self::with_comparison(coeffs, Comparison::Exact)
    }

    /// Creates a new ellipse using `cmp` for the rule and for later guards.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless `B² - 4AC < 0` under `cmp`.
    pub fn with_comparison(coeffs: ConicCoefficients, cmp: Comparison) -> Result<Self> {
        Self::VARIANT.validate(&coeffs, cmp)?;
        Ok(Self { coeffs, cmp })
    }

    /// Computes the simplified eccentricity `sqrt(1 - C / A)`.
    ///
    /// This reads the axis ratio straight off the raw coefficients. It is not
    /// the eccentricity of the curve, and for `C > A` (major axis along y) it
    /// has no real value. See [`Ellipse::eccentricity_exact`].
    ///
    /// The model's comparison is applied to `A` as an absolute epsilon, so
    /// under a tolerance an accepted ellipse with `|A| <= eps` (e.g. `A = 1e-11`,
    /// `C = 1e3`) has no simplified eccentricity.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateCurve` if `A` is zero under the model's comparison
    /// and `InvalidDomain` if `1 - C / A` is negative.
    pub fn eccentricity(&self) -> Result<f64> {
        let a = self.coeffs.a();
        if self.cmp.is_zero(a) {
            return Err(GeometryError::DegenerateCurve(
                "coefficient A is zero, C / A is undefined".into(),
            )
            .into());
        }
        let radicand = 1.0 - self.coeffs.c() / a;
        if self.cmp.is_negative(radicand) {
            return Err(GeometryError::InvalidDomain {
                quantity: "eccentricity",
                radicand,
            }
            .into());
        }
        let e = radicand.max(0.0).sqrt();
        tracing::trace!(eccentricity = e, "ellipse eccentricity");
        Ok(e)
    }

    /// Computes the eccentricity from the semi-axes of the canonical form.
    ///
    /// The squared semi-axes are `-F' / λ` for the eigenvalues `λ` of the
    /// quadratic part, `F'` being the equation's value at the center, so
    /// `e = sqrt(1 - |λ|min / |λ|max)`. Handles rotated ellipses.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateCurve` if the ellipse collapses to a point and
    /// `InvalidDomain` if it has no real points.
    pub fn eccentricity_exact(&self) -> Result<f64> {
        let center = self.center_or_vertex()?;
        let value_at_center = self.coeffs.evaluate(&center);
        if self.cmp.is_zero(value_at_center) {
            return Err(GeometryError::DegenerateCurve(
                "the ellipse collapses to its center".into(),
            )
            .into());
        }

        let (l1, l2) = eigenvalues(self.coeffs.a(), self.coeffs.b(), self.coeffs.c());
        let semi_axis_squared = -value_at_center / l1;
        if semi_axis_squared < 0.0 {
            return Err(GeometryError::InvalidDomain {
                quantity: "semi-axis",
                radicand: semi_axis_squared,
            }
            .into());
        }

        let (small, large) = if l1.abs() <= l2.abs() {
            (l1.abs(), l2.abs())
        } else {
            (l2.abs(), l1.abs())
        };
        Ok((1.0 - small / large).max(0.0).sqrt())
    }
}

impl Conic for Ellipse {
    const VARIANT: ConicVariant = ConicVariant::Ellipse;

    fn coefficients(&self) -> &ConicCoefficients {
        &self.coeffs
    }

    fn comparison(&self) -> Comparison {
        self.cmp
    }

    fn center_or_vertex(&self) -> Result<Point2> {
        let k = &self.coeffs;
        conic_center(k.a(), k.b(), k.c(), k.d(), k.e(), self.cmp)
    }

    fn describe(&self) -> Result<GeometricDescriptor> {
        Ok(GeometricDescriptor {
            variant: Self::VARIANT,
            anchor: self.center_or_vertex()?,
            feature: Feature::Eccentricity(self.eccentricity()?),
        })
    }
}
