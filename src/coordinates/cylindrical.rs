//! # Cylindrical-Form Constructors
//!
//! A 3D vector written down as cylindrical coordinates: planar radius
//! `r`, azimuth `theta`, and height `z`. Display shows the stored
//! parameters with the azimuth in exact form; the cartesian projection
//! is derived through canonicalization.

use std::fmt;

use crate::canonical::canonicalize;
use crate::coordinates::{ensure_finite, Angle};
use crate::exact::render_pi_multiple;
use crate::vector::Vector3;
use crate::Result;

/// Cylindrical coordinates of a vector's tip.
///
/// `r` is the radius in the XY plane, `theta` the azimuth from the
/// +x axis, `z` the unchanged height. Values constructed directly store
/// the caller's parameters; values produced by
/// [`Vector3::to_cylindrical`] carry canonicalized derived coordinates.
///
/// # Examples
///
/// ```rust
/// use exactvec::{Cylindrical, Angle, Vector3};
///
/// let c = Cylindrical::new(2.0, Angle::from_degrees(90.0), 3.0).unwrap();
/// assert_eq!(c.to_vector(), Vector3::new(0.0, 2.0, 3.0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylindrical {
    r: f64,
    theta: Angle,
    z: f64,
}

impl Cylindrical {
    /// Creates a cylindrical triple, rejecting non-finite parameters.
    pub fn new(r: f64, theta: Angle, z: f64) -> Result<Self> {
        ensure_finite(r)?;
        ensure_finite(theta.to_radians())?;
        ensure_finite(z)?;
        Ok(Cylindrical { r, theta, z })
    }

    pub(crate) fn from_parts(r: f64, theta: Angle, z: f64) -> Self {
        Cylindrical { r, theta, z }
    }

    /// The stored planar radius.
    pub fn r(&self) -> f64 {
        self.r
    }

    /// The stored azimuth.
    pub fn theta(&self) -> Angle {
        self.theta
    }

    /// The stored height.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Projects onto cartesian axes, canonicalizing each derived
    /// component. The height passes through untouched.
    pub fn to_vector(&self) -> Vector3 {
        let radians = self.theta.to_radians();
        Vector3::from_parts(
            canonicalize(self.r * radians.cos()),
            canonicalize(self.r * radians.sin()),
            self.z,
        )
    }
}

impl fmt::Display for Cylindrical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.r,
            render_pi_multiple(self.theta.to_radians()),
            self.z
        )
    }
}
