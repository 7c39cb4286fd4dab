use std::fmt;

use crate::error::{Result, ValidationError};
use crate::math::Comparison;

use super::ConicCoefficients;

/// The four curve kinds a second-degree equation is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConicVariant {
    /// `A = C`, `B = 0`, `A ≠ 0`.
    Circle,
    /// `B² - 4AC = 0`.
    Parabola,
    /// `B² - 4AC < 0`.
    Ellipse,
    /// `B² - 4AC > 0`.
    Hyperbola,
}

impl ConicVariant {
    /// Every variant, in classification order.
    pub const ALL: [Self; 4] = [Self::Circle, Self::Parabola, Self::Ellipse, Self::Hyperbola];

    /// Lowercase name used in messages.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Parabola => "parabola",
            Self::Ellipse => "ellipse",
            Self::Hyperbola => "hyperbola",
        }
    }

    /// Capitalized name used as a report heading.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Circle => "Circle",
            Self::Parabola => "Parabola",
            Self::Ellipse => "Ellipse",
            Self::Hyperbola => "Hyperbola",
        }
    }

    /// The condition the coefficients must satisfy, as text.
    #[must_use]
    pub fn expected_condition(self) -> &'static str {
        match self {
            Self::Circle => "A = C != 0 and B = 0",
            Self::Parabola => "B^2 - 4AC = 0",
            Self::Ellipse => "B^2 - 4AC < 0",
            Self::Hyperbola => "B^2 - 4AC > 0",
        }
    }

    /// Returns whether `coeffs` satisfy this variant's rule under `cmp`.
    #[must_use]
    pub fn accepts(self, coeffs: &ConicCoefficients, cmp: Comparison) -> bool {
        let disc = coeffs.discriminant();
        match self {
            Self::Circle => {
                cmp.is_equal(coeffs.a(), coeffs.c())
                    && cmp.is_zero(coeffs.b())
                    && !cmp.is_zero(coeffs.a())
            }
            Self::Parabola => cmp.is_zero(disc),
            Self::Ellipse => cmp.is_negative(disc),
            Self::Hyperbola => cmp.is_positive(disc),
        }
    }

    /// Checks `coeffs` against this variant's rule.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` carrying the computed discriminant if the rule
    /// does not hold.
    pub fn validate(self, coeffs: &ConicCoefficients, cmp: Comparison) -> Result<()> {
        let discriminant = coeffs.discriminant();
        if self.accepts(coeffs, cmp) {
            tracing::debug!(variant = self.name(), discriminant, "accepted coefficients");
            return Ok(());
        }

        tracing::debug!(
            variant = self.name(),
            discriminant,
            %coeffs,
            "rejected coefficients"
        );
        Err(ValidationError::ShapeMismatch {
            variant: self,
            discriminant,
            expected: self.expected_condition(),
        }
        .into())
    }

    /// Picks the variant whose rule `coeffs` satisfy.
    ///
    /// The circle rule is tried first since every circle also satisfies the
    /// ellipse rule. Exactly one of the remaining three always holds.
    #[must_use]
    pub fn classify(coeffs: &ConicCoefficients, cmp: Comparison) -> Self {
        if Self::Circle.accepts(coeffs, cmp) {
            return Self::Circle;
        }
        let disc = coeffs.discriminant();
        if cmp.is_negative(disc) {
            Self::Ellipse
        } else if cmp.is_positive(disc) {
            Self::Hyperbola
        } else {
            Self::Parabola
        }
    }
}

impl fmt::Display for ConicVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ConicError;

    fn k(values: [f64; 6]) -> ConicCoefficients {
        ConicCoefficients::from_array(values).unwrap()
    }

    #[test]
    fn circle_rule() {
        let cmp = Comparison::Exact;
        assert!(ConicVariant::Circle.accepts(&k([1.0, 0.0, 1.0, -4.0, -6.0, 9.0]), cmp));
        assert!(!ConicVariant::Circle.accepts(&k([1.0, 0.0, 2.0, 0.0, 0.0, -1.0]), cmp));
        assert!(!ConicVariant::Circle.accepts(&k([1.0, 0.5, 1.0, 0.0, 0.0, -1.0]), cmp));
        // A = C = 0 is not a circle.
        assert!(!ConicVariant::Circle.accepts(&k([0.0, 0.0, 0.0, 1.0, 1.0, 0.0]), cmp));
    }

    #[test]
    fn discriminant_rules() {
        let cmp = Comparison::Exact;
        let parabola = k([0.0, 0.0, 1.0, -4.0, 0.0, 0.0]);
        let ellipse = k([4.0, 0.0, 9.0, -16.0, -18.0, -11.0]);
        let hyperbola = k([1.0, 0.0, -1.0, -2.0, 4.0, -4.0]);

        assert!(ConicVariant::Parabola.accepts(&parabola, cmp));
        assert!(!ConicVariant::Ellipse.accepts(&parabola, cmp));
        assert!(!ConicVariant::Hyperbola.accepts(&parabola, cmp));

        assert!(ConicVariant::Ellipse.accepts(&ellipse, cmp));
        assert!(!ConicVariant::Parabola.accepts(&ellipse, cmp));

        assert!(ConicVariant::Hyperbola.accepts(&hyperbola, cmp));
        assert!(!ConicVariant::Ellipse.accepts(&hyperbola, cmp));
    }

    #[test]
    fn mismatch_carries_discriminant() {
        let hyperbola = k([1.0, 0.0, -1.0, -2.0, 4.0, -4.0]);
        let err = ConicVariant::Ellipse
            .validate(&hyperbola, Comparison::Exact)
            .unwrap_err();
        match err {
            ConicError::Validation(ValidationError::ShapeMismatch {
                variant,
                discriminant,
                expected,
            }) => {
                assert_eq!(variant, ConicVariant::Ellipse);
                assert!((discriminant - 4.0).abs() < 1e-12);
                assert_eq!(expected, "B^2 - 4AC < 0");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn classify_prefers_circle() {
        let cmp = Comparison::Exact;
        assert_eq!(
            ConicVariant::classify(&k([2.0, 0.0, 2.0, 1.0, 1.0, -5.0]), cmp),
            ConicVariant::Circle
        );
        assert_eq!(
            ConicVariant::classify(&k([4.0, 0.0, 9.0, 0.0, 0.0, -36.0]), cmp),
            ConicVariant::Ellipse
        );
        assert_eq!(
            ConicVariant::classify(&k([1.0, 2.0, 1.0, 0.0, 0.0, 0.0]), cmp),
            ConicVariant::Parabola
        );
        assert_eq!(
            ConicVariant::classify(&k([0.0, 1.0, 0.0, 0.0, 0.0, -1.0]), cmp),
            ConicVariant::Hyperbola
        );
    }

    #[test]
    fn tolerance_accepts_near_parabola() {
        // B² - 4AC = (0.2)² - 4 * 0.1 * 0.1 need not round to exactly zero.
        let near = k([0.1, 0.2, 0.1, 0.0, 1.0, 0.0]);
        assert!(ConicVariant::Parabola.accepts(&near, Comparison::tolerant()));
        assert_eq!(
            ConicVariant::classify(&near, Comparison::tolerant()),
            ConicVariant::Parabola
        );
    }

    #[test]
    fn classification_lands_in_all() {
        let coeffs = k([3.0, 1.0, -2.0, 0.0, 0.0, 1.0]);
        let variant = ConicVariant::classify(&coeffs, Comparison::Exact);
        assert!(ConicVariant::ALL.contains(&variant));
        let accepted: Vec<_> = ConicVariant::ALL
            .into_iter()
            .filter(|v| v.accepts(&coeffs, Comparison::Exact))
            .collect();
        assert_eq!(accepted, vec![ConicVariant::Hyperbola]);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(ConicVariant::Hyperbola.to_string(), "hyperbola");
        assert_eq!(ConicVariant::Hyperbola.title(), "Hyperbola");
    }
}
