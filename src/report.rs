//! Human-readable summaries of validated curves.
//!
//! Formatting lives here so the geometric queries stay free of presentation.

use std::fmt;

use crate::geometry::ConicVariant;
use crate::math::Point2;

/// The one variant-specific quantity reported alongside the center/vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Feature {
    /// Circle radius.
    Radius(f64),
    /// Parabola directrix, the line `y = value`.
    Directrix(f64),
    /// Ellipse eccentricity (simplified form, see [`crate::Ellipse::eccentricity`]).
    Eccentricity(f64),
    /// Hyperbolas report only their center.
    None,
}

/// Center or vertex of a curve plus its variant-specific feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricDescriptor {
    pub variant: ConicVariant,
    /// Center for circles, ellipses and hyperbolas; vertex for parabolas.
    pub anchor: Point2,
    pub feature: Feature,
}

impl GeometricDescriptor {
    /// Label for [`GeometricDescriptor::anchor`].
    #[must_use]
    pub fn anchor_label(&self) -> &'static str {
        match self.variant {
            ConicVariant::Parabola => "vertex",
            _ => "center",
        }
    }
}

impl fmt::Display for GeometricDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.variant.title())?;
        write!(
            f,
            "  {}: ({}, {})",
            self.anchor_label(),
            self.anchor.x,
            self.anchor.y
        )?;
        match self.feature {
            Feature::Radius(r) => write!(f, "\n  radius: {r}"),
            Feature::Directrix(y) => write!(f, "\n  directrix: y = {y}"),
            Feature::Eccentricity(e) => write!(f, "\n  eccentricity: {e}"),
            Feature::None => Ok(()),
        }
    }
}
