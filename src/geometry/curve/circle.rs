use crate::error::{GeometryError, Result};
use crate::geometry::{ConicCoefficients, ConicVariant};
use crate::math::center_2d::circle_center;
use crate::math::{Comparison, Point2};
use crate::report::{Feature, GeometricDescriptor};

use super::Conic;

/// A circle `A(x² + y²) + D x + E y + F = 0` with `A ≠ 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    coeffs: ConicCoefficients,
    cmp: Comparison,
}

impl Circle {
    /// Creates a new circle using exact comparison.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless `A = C`, `B = 0` and `A ≠ 0`.
    pub fn new(coeffs: ConicCoefficients) -> Result<Self> {
        Self::with_comparison(coeffs, Comparison::Exact)
    }

    /// Creates a new circle using `cmp` for the rule and for later guards.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless `A = C`, `B = 0` and `A ≠ 0` under `cmp`.
    pub fn with_comparison(coeffs: ConicCoefficients, cmp: Comparison) -> Result<Self> {
        Self::VARIANT.validate(&coeffs, cmp)?;
        Ok(Self { coeffs, cmp })
    }

    /// Returns `(D² + E²) / 4A² - F / A`.
    ///
    /// # Errors
    ///
    /// Returns `DegenerateCurve` if `A` is zero.
    pub fn radius_squared(&self) -> Result<f64> {
        let k = &self.coeffs;
        let a = k.a();
        if self.cmp.is_zero(a) {
            return Err(GeometryError::DegenerateCurve(
                "coefficient A is zero, the circle has no radius".into(),
            )
            .into());
        }
        Ok((k.d() * k.d() + k.e() * k.e()) / (4.0 * a * a) - k.f() / a)
    }

    /// Computes the radius.
    ///
    /// # Errors
    ///
    /// Returns `ImaginaryRadius` if the squared radius is negative, i.e. no
    /// real point satisfies the equation.
    pub fn radius(&self) -> Result<f64> {
        let radius_squared = self.radius_squared()?;
        if self.cmp.is_negative(radius_squared) {
            return Err(GeometryError::ImaginaryRadius { radius_squared }.into());
        }
        let r = radius_squared.max(0.0).sqrt();
        tracing::trace!(radius = r, "circle radius");
        Ok(r)
    }
}

impl Conic for Circle {
    const VARIANT: ConicVariant = ConicVariant::Circle;

    fn coefficients(&self) -> &ConicCoefficients {
        &self.coeffs
    }

    fn comparison(&self) -> Comparison {
        self.cmp
    }

    fn center_or_vertex(&self) -> Result<Point2> {
        circle_center(self.coeffs.a(), self.coeffs.d(), self.coeffs.e(), self.cmp)
    }

    fn describe(&self) -> Result<GeometricDescriptor> {
        Ok(GeometricDescriptor {
            variant: Self::VARIANT,
            anchor: self.center_or_vertex()?,
            feature: Feature::Radius(self.radius()?),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ConicError, ValidationError};
    use approx::assert_relative_eq;

    fn circle(values: [f64; 6]) -> Circle {
        Circle::new(ConicCoefficients::from_array(values).unwrap()).unwrap()
    }

    #[test]
    fn unit_circle() {
        let c = circle([1.0, 0.0, 1.0, 0.0, 0.0, -1.0]);
        let p = c.center_or_vertex().unwrap();
        assert_relative_eq!(p.x, 0.0);
        assert_relative_eq!(p.y, 0.0);
        assert_relative_eq!(c.radius().unwrap(), 1.0);
    }

    #[test]
    fn scaled_equation_has_same_radius() {
        // 3(x² + y²) - 12x - 18y + 27 = 0  ~  (x-2)² + (y-3)² = 4
        let c = circle([3.0, 0.0, 3.0, -12.0, -18.0, 27.0]);
        assert_relative_eq!(c.radius().unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn imaginary_radius() {
        // x² + y² + 1 = 0 has no real points.
        let c = circle([1.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(
            c.radius(),
            Err(ConicError::Geometry(GeometryError::ImaginaryRadius {
                radius_squared: -1.0
            }))
        );
        assert!(c.describe().is_err());
    }

    #[test]
    fn point_circle_has_zero_radius() {
        let c = circle([1.0, 0.0, 1.0, -2.0, 0.0, 1.0]);
        assert_relative_eq!(c.radius().unwrap(), 0.0);
    }

    #[test]
    fn rejects_unequal_axes() {
        let k = ConicCoefficients::new(1.0, 0.0, 2.0, 0.0, 0.0, -1.0).unwrap();
        let r = Circle::new(k);
        assert!(matches!(
            r,
            Err(ConicError::Validation(ValidationError::ShapeMismatch {
                variant: ConicVariant::Circle,
                ..
            }))
        ));
    }

    #[test]
    fn rejects_zero_a() {
        let k = ConicCoefficients::new(0.0, 0.0, 0.0, 1.0, 1.0, 0.0).unwrap();
        assert!(Circle::new(k).is_err());
    }

    #[test]
    fn tolerance_accepts_near_circle() {
        let k = ConicCoefficients::new(1.0, 1e-13, 1.0 + 1e-13, 0.0, 0.0, -4.0).unwrap();
        assert!(Circle::new(k).is_err());
        let c = Circle::with_comparison(k, Comparison::tolerant()).unwrap();
        assert_relative_eq!(c.radius().unwrap(), 2.0, epsilon = 1e-9);
    }
}
