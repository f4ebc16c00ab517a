//! # Polar-Form Constructors
//!
//! Two ways to write down the same 2D vector: [`MagAngle`] (a magnitude
//! and an angle with the horizon) and [`Polar`] (the same projection in
//! conventional `(r, theta)` notation). They are semantically
//! identical and differ only in display: `MagAngle` shows the derived
//! cartesian pair, `Polar` shows the stored polar parameters with the
//! angle in exact form.

use std::fmt;

use crate::canonical::canonicalize;
use crate::coordinates::{ensure_finite, Angle};
use crate::exact::render_pi_multiple;
use crate::vector::Vector3;
use crate::Result;

/// A 2D vector written down as a magnitude and an angle with the
/// horizon.
///
/// The parameters are stored as given; the cartesian components are
/// derived through canonicalization by [`MagAngle::to_vector`], so a
/// right-angle projection lands on an exact axis.
///
/// # Examples
///
/// ```rust
/// use exactvec::{MagAngle, Angle, Vector3};
///
/// let v = MagAngle::new(10.0, Angle::from_degrees(90.0)).unwrap().to_vector();
/// assert_eq!(v, Vector3::new(0.0, 10.0, 0.0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagAngle {
    norm: f64,
    angle: Angle,
}

impl MagAngle {
    /// Creates a magnitude/angle pair, rejecting non-finite parameters.
    pub fn new(norm: f64, angle: Angle) -> Result<Self> {
        ensure_finite(norm)?;
        ensure_finite(angle.to_radians())?;
        Ok(MagAngle { norm, angle })
    }

    /// The stored magnitude.
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// The stored angle.
    pub fn angle(&self) -> Angle {
        self.angle
    }

    /// Projects onto cartesian axes, canonicalizing each component. The
    /// result is planar: its z-component is 0.
    pub fn to_vector(&self) -> Vector3 {
        let radians = self.angle.to_radians();
        Vector3::from_parts(
            canonicalize(self.norm * radians.cos()),
            canonicalize(self.norm * radians.sin()),
            0.0,
        )
    }
}

impl fmt::Display for MagAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vector = self.to_vector();
        write!(f, "({}, {})", vector.x(), vector.y())
    }
}

/// Polar form of a 2D vector: the same projection as [`MagAngle`] in
/// `(r, theta)` notation.
///
/// # Examples
///
/// ```rust
/// use exactvec::{Polar, Angle};
/// use std::f64::consts::PI;
///
/// let polar = Polar::new(2.0, Angle::from_radians(PI / 2.0)).unwrap();
/// assert_eq!(format!("{}", polar), "(2, 1/2 pi)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    r: f64,
    theta: Angle,
}

impl Polar {
    /// Creates a polar pair, rejecting non-finite parameters.
    pub fn new(r: f64, theta: Angle) -> Result<Self> {
        ensure_finite(r)?;
        ensure_finite(theta.to_radians())?;
        Ok(Polar { r, theta })
    }

    /// The stored radius.
    pub fn r(&self) -> f64 {
        self.r
    }

    /// The stored azimuth.
    pub fn theta(&self) -> Angle {
        self.theta
    }

    /// Projects onto cartesian axes; identical to the [`MagAngle`]
    /// projection.
    pub fn to_vector(&self) -> Vector3 {
        MagAngle {
            norm: self.r,
            angle: self.theta,
        }
        .to_vector()
    }
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            self.r,
            render_pi_multiple(self.theta.to_radians())
        )
    }
}
