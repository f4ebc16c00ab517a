//! # Coordinate Representation Module
//!
//! Alternate representations of a vector's tip: polar magnitude/angle,
//! cylindrical, and spherical coordinates. Each variant stores the
//! coordinate parameters it was constructed from (so its display shows
//! what the caller wrote down), derives canonicalized cartesian
//! components on demand via `to_vector()`, and renders angles through
//! the exact-form pi recognizer.
//!
//! Angles are [`Angle`] values rather than bare floats: the unit
//! (degrees or radians) is chosen at construction and resolved only
//! inside the trigonometric projection.

pub mod angle;
pub mod cylindrical;
pub mod polar;
pub mod spherical;

pub use angle::{Angle, AngleFormat};
pub use cylindrical::Cylindrical;
pub use polar::{MagAngle, Polar};
pub use spherical::Spherical;

use crate::{ExactVecError, Result};

// Shared construction-time validation for coordinate parameters.
pub(crate) fn ensure_finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ExactVecError::NonFiniteComponent(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector3;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_cylindrical_round_trip() {
        let original = Vector3::new(1.0, 1.0, 1.0).unwrap();
        let cylindrical = original.to_cylindrical();
        let back = cylindrical.to_vector();

        assert_relative_eq!(back.x(), original.x(), epsilon = 1e-9);
        assert_relative_eq!(back.y(), original.y(), epsilon = 1e-9);
        assert_eq!(back.z(), original.z());
    }

    #[test]
    fn test_spherical_round_trip() {
        let original = Vector3::new(1.0, 2.0, 3.0).unwrap();
        let spherical = original.to_spherical().unwrap();
        let back = spherical.to_vector();

        assert_relative_eq!(back.x(), original.x(), epsilon = 1e-9);
        assert_relative_eq!(back.y(), original.y(), epsilon = 1e-9);
        assert_relative_eq!(back.z(), original.z(), epsilon = 1e-9);
    }

    #[test]
    fn test_polar_and_magangle_agree() {
        let angle = Angle::from_radians(PI / 3.0);
        let from_polar = Polar::new(4.0, angle).unwrap().to_vector();
        let from_magangle = MagAngle::new(4.0, angle).unwrap().to_vector();
        assert_eq!(from_polar, from_magangle);
    }
}
