use crate::error::{Result, ValidationError};

use super::TOLERANCE;

/// How scalar quantities are compared against zero and against each other.
///
/// `Exact` reproduces plain `==` / `<` semantics, which is fragile for
/// computed inputs: `0.1 * 0.1 * 4.0 - 4.0 * 0.01` is not exactly zero.
/// `Tolerance(eps)` treats values within `eps` (absolute) as equal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Comparison {
    /// Exact floating-point comparison.
    #[default]
    Exact,
    /// Absolute-epsilon comparison.
    Tolerance(Epsilon),
}

/// A finite, non-negative absolute epsilon.
///
/// Only [`Comparison::tolerance`] and [`Comparison::tolerant`] build one, so
/// the sign tests of a `Comparison` never overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Epsilon(f64);

impl Epsilon {
    /// Returns the epsilon value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Comparison {
    /// Creates a tolerance-based comparison.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is negative, NaN, or infinite.
    pub fn tolerance(eps: f64) -> Result<Self> {
        if !eps.is_finite() || eps < 0.0 {
            return Err(ValidationError::InvalidTolerance(eps).into());
        }
        Ok(Self::Tolerance(Epsilon(eps)))
    }

    /// Tolerance-based comparison using [`TOLERANCE`].
    #[must_use]
    pub fn tolerant() -> Self {
        Self::Tolerance(Epsilon(TOLERANCE))
    }

    fn eps(self) -> f64 {
        match self {
            Self::Exact => 0.0,
            Self::Tolerance(eps) => eps.value(),
        }
    }

    /// Returns whether `value` counts as zero.
    #[must_use]
    pub fn is_zero(self, value: f64) -> bool {
        value.abs() <= self.eps()
    }

    /// Returns whether `lhs` and `rhs` count as equal.
    #[must_use]
    pub fn is_equal(self, lhs: f64, rhs: f64) -> bool {
        self.is_zero(lhs - rhs)
    }

    /// Returns whether `value` is strictly positive beyond the tolerance band.
    #[must_use]
    pub fn is_positive(self, value: f64) -> bool {
        value > self.eps()
    }

    /// Returns whether `value` is strictly negative beyond the tolerance band.
    #[must_use]
    pub fn is_negative(self, value: f64) -> bool {
        value < -self.eps()
    }
}
