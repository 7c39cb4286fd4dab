//! Centers and vertices of second-degree curves.
//!
//! All functions take the raw coefficients of
//! `A x² + B xy + C y² + D x + E y + F = 0` and guard their own divisions,
//! so they are safe to call on coefficients that were never validated.

use crate::error::{GeometryError, Result};

use super::{Comparison, Point2};

/// Returns the discriminant `B² - 4AC`.
#[must_use]
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Solves the gradient system
///
/// ```text
/// 2A·x + B·y + D = 0
/// B·x + 2C·y + E = 0
/// ```
///
/// giving `x0 = (2CD - BE) / Δ`, `y0 = (2AE - BD) / Δ` with `Δ = B² - 4AC`.
///
/// # Errors
///
/// Returns `DegenerateCurve` if `Δ` is zero under `cmp` (no unique center).
#[allow(clippy::many_single_char_names)]
pub fn conic_center(a: f64, b: f64, c: f64, d: f64, e: f64, cmp: Comparison) -> Result<Point2> {
    let disc = discriminant(a, b, c);
    if cmp.is_zero(disc) {
        return Err(GeometryError::DegenerateCurve(
            "discriminant is zero, the curve has no unique center".into(),
        )
        .into());
    }

    let x0 = (2.0 * c * d - b * e) / disc;
    let y0 = (2.0 * a * e - b * d) / disc;
    finite_point(x0, y0)
}

/// Center of `A(x² + y²) + D x + E y + F = 0`: `(-D / 2A, -E / 2A)`.
///
/// # Errors
///
/// Returns `DegenerateCurve` if `A` is zero under `cmp`.
pub fn circle_center(a: f64, d: f64, e: f64, cmp: Comparison) -> Result<Point2> {
    if cmp.is_zero(a) {
        return Err(GeometryError::DegenerateCurve(
            "coefficient A is zero, the circle has no center".into(),
        )
        .into());
    }

    let x0 = -d / (2.0 * a);
    let y0 = -e / (2.0 * a);
    finite_point(x0, y0)
}

/// Vertex of a parabola with a vertical axis, `A x² + D x + E y + F = 0`.
///
/// Completing the square gives `x0 = -D / 2A` and `y0 = (D² - 4AF) / 4AE`.
///
/// # Errors
///
/// Returns `DegenerateCurve` if `A` is zero (the parabola does not open
/// vertically), if `B` or `C` is nonzero (the axis is not vertical), or if
/// `E` is zero (the equation degenerates to parallel lines).
#[allow(clippy::many_single_char_names)]
pub fn vertical_parabola_vertex(
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
    cmp: Comparison,
) -> Result<Point2> {
    if cmp.is_zero(a) {
        return Err(GeometryError::DegenerateCurve(
            "coefficient A is zero, the parabola does not have a vertical axis".into(),
        )
        .into());
    }
    if !cmp.is_zero(b) || !cmp.is_zero(c) {
        return Err(GeometryError::DegenerateCurve(
            "coefficients B and C must be zero for a vertical-axis parabola".into(),
        )
        .into());
    }
    if cmp.is_zero(e) {
        return Err(GeometryError::DegenerateCurve(
            "coefficient E is zero, the equation has no linear y term".into(),
        )
        .into());
    }

    let x0 = -d / (2.0 * a);
    let y0 = (d * d - 4.0 * a * f) / (4.0 * a * e);
    finite_point(x0, y0)
}

fn finite_point(x: f64, y: f64) -> Result<Point2> {
    if !x.is_finite() || !y.is_finite() {
        return Err(GeometryError::DegenerateCurve(format!(
            "center ({x}, {y}) is not finite"
        ))
        .into());
    }
    Ok(Point2::new(x, y))
}
