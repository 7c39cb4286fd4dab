use super::Matrix2;

/// Eigenvalues of the quadratic part `[[A, B/2], [B/2, C]]`, ascending.
///
/// Their reciprocals scale the squared semi-axes of a central conic, so
/// their ratio fixes its eccentricity independently of translation.
#[must_use]
pub fn eigenvalues(a: f64, b: f64, c: f64) -> (f64, f64) {
    let m = Matrix2::new(a, b * 0.5, b * 0.5, c);
    let ev = m.symmetric_eigenvalues();
    if ev.x <= ev.y {
        (ev.x, ev.y)
    } else {
        (ev.y, ev.x)
    }
}
