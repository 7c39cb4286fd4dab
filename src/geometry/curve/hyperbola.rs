use crate::error::{GeometryError, Result};
use crate::geometry::{ConicCoefficients, ConicVariant};
use crate::math::center_2d::conic_center;
use crate::math::quadratic_form::eigenvalues;
use crate::math::{Comparison, Point2};
use crate::report::{Feature, GeometricDescriptor};

use super::Conic;

/// A hyperbola, `B² - 4AC > 0`. Reports only its center.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperbola {
    coeffs: ConicCoefficients,
    cmp: Comparison,
}

impl Hyperbola {
    /// Creates a new hyperbola using exact comparison.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless `B² - 4AC > 0`.
    pub fn new(coeffs: ConicCoefficients) -> Result<Self> {
        Self::with_comparison(coeffs, Comparison::Exact)
    }

    /// Creates a new hyperbola using `cmp` for the rule and for later guards.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless `B² - 4AC > 0` under `cmp`.
    pub fn with_comparison(coeffs: ConicCoefficients, cmp: Comparison) -> Result<Self> {
        Self::VARIANT.validate(&coeffs, cmp)?;
        Ok(Self { coeffs, cmp })
    }

    /// Computes the eccentricity from the canonical form.
    ///
    /// The transverse axis belongs to the eigenvalue `λt` whose sign is
    /// opposite to the equation's value at the center; with `λc` the other
    /// one, `e = sqrt(1 + |λt| / |λc|)`.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateCurve` if the equation describes two crossing lines.
    pub fn eccentricity_exact(&self) -> Result<f64> {
        let center = self.center_or_vertex()?;
        let value_at_center = self.coeffs.evaluate(&center);
        if self.cmp.is_zero(value_at_center) {
            return Err(GeometryError::DegenerateCurve(
                "the hyperbola collapses to its asymptotes".into(),
            )
            .into());
        }

        // l1 < 0 < l2 since the determinant of the quadratic part is negative.
        let (l1, l2) = eigenvalues(self.coeffs.a(), self.coeffs.b(), self.coeffs.c());
        let (transverse, conjugate) = if value_at_center > 0.0 { (l1, l2) } else { (l2, l1) };
        Ok((1.0 + transverse.abs() / conjugate.abs()).sqrt())
    }
}

impl Conic for Hyperbola {
    const VARIANT: ConicVariant = ConicVariant::Hyperbola;

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
            feature: Feature::None,
        })
    }
}
