use std::fmt;

use crate::error::{Result, ValidationError};
use crate::math::center_2d::discriminant;
use crate::math::Point2;

/// Coefficients of the general second-degree equation
/// `A x² + B xy + C y² + D x + E y + F = 0`.
///
/// Immutable once constructed; every coefficient is finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConicCoefficients {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

impl ConicCoefficients {
    /// Creates a new coefficient set.
    ///
    /// # Errors
    ///
    /// Returns `NonFinite` if any coefficient is NaN or infinite.
    #[allow(clippy::many_single_char_names)]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Result<Self> {
        Self::from_array([a, b, c, d, e, f])
    }

    /// Creates a coefficient set from `[A, B, C, D, E, F]`.
    ///
    /// # Errors
    ///
    /// Returns `NonFinite` if any coefficient is NaN or infinite.
    #[allow(clippy::many_single_char_names)]
    pub fn from_array(values: [f64; 6]) -> Result<Self> {
        if let Some((name, _)) = NAMES.iter().zip(values).find(|(_, v)| !v.is_finite()) {
            return Err(ValidationError::NonFinite { name: *name }.into());
        }
        let [a, b, c, d, e, f] = values;
        Ok(Self { a, b, c, d, e, f })
    }

    /// Returns `[A, B, C, D, E, F]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// Coefficient of `x²`.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Coefficient of `xy`.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Coefficient of `y²`.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Coefficient of `x`.
    #[must_use]
    pub fn d(&self) -> f64 {
        self.d
    }

    /// Coefficient of `y`.
    #[must_use]
    pub fn e(&self) -> f64 {
        self.e
    }

    /// Constant term.
    #[must_use]
    pub fn f(&self) -> f64 {
        self.f
    }

    /// Returns the discriminant `B² - 4AC`.
    #[must_use]
    pub fn discriminant(&self) -> f64 {
        discriminant(self.a, self.b, self.c)
    }

    /// Multiplies every coefficient by `k`. The described curve is unchanged
    /// for any nonzero `k`.
    ///
    /// # Errors
    ///
    /// Returns `NonFinite` if scaling overflows or `k` is not finite.
    pub fn scaled(&self, k: f64) -> Result<Self> {
        Self::from_array(self.to_array().map(|v| v * k))
    }

    /// Evaluates the left-hand side at `p`. Zero means `p` lies on the curve.
    #[must_use]
    pub fn evaluate(&self, p: &Point2) -> f64 {
        let (x, y) = (p.x, p.y);
        self.a * x * x + self.b * x * y + self.c * y * y + self.d * x + self.e * y + self.f
    }
}

impl fmt::Display for ConicCoefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x^2 + {}xy + {}y^2 + {}x + {}y + {} = 0",
            self.a, self.b, self.c, self.d, self.e, self.f
        )
    }
}
