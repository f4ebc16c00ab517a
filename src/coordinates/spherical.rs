//! # Spherical-Form Constructors
//!
//! A 3D vector written down as spherical coordinates in the physics
//! convention: radial distance `rho`, azimuth `theta` in the XY plane,
//! polar angle `phi` measured from the +z axis.

use std::fmt;

use crate::canonical::canonicalize;
use crate::coordinates::{ensure_finite, Angle};
use crate::exact::render_pi_multiple;
use crate::vector::Vector3;
use crate::Result;

/// Spherical coordinates of a vector's tip.
///
/// Both angles are [`Angle`] values, so degree input never touches the
/// radius: the unit conversion happens inside the projection, per
/// angle.
///
/// # Examples
///
/// ```rust
/// use exactvec::{Spherical, Angle, Vector3};
///
/// let s = Spherical::new(
///     2.0,
///     Angle::from_degrees(0.0),
///     Angle::from_degrees(90.0),
/// )
/// .unwrap();
/// assert_eq!(s.to_vector(), Vector3::new(2.0, 0.0, 0.0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    rho: f64,
    theta: Angle,
    phi: Angle,
}

impl Spherical {
    /// Creates a spherical triple, rejecting non-finite parameters.
    pub fn new(rho: f64, theta: Angle, phi: Angle) -> Result<Self> {
        ensure_finite(rho)?;
        ensure_finite(theta.to_radians())?;
        ensure_finite(phi.to_radians())?;
        Ok(Spherical { rho, theta, phi })
    }

    pub(crate) fn from_parts(rho: f64, theta: Angle, phi: Angle) -> Self {
        Spherical { rho, theta, phi }
    }

    /// The stored radial distance.
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// The stored azimuth.
    pub fn theta(&self) -> Angle {
        self.theta
    }

    /// The stored polar angle.
    pub fn phi(&self) -> Angle {
        self.phi
    }

    /// Projects onto cartesian axes:
    ///
    /// - `x = rho * sin(phi) * cos(theta)`
    /// - `y = rho * sin(phi) * sin(theta)`
    /// - `z = rho * cos(phi)`
    ///
    /// Each component is canonicalized.
    pub fn to_vector(&self) -> Vector3 {
        let theta = self.theta.to_radians();
        let phi = self.phi.to_radians();
        Vector3::from_parts(
            canonicalize(self.rho * phi.sin() * theta.cos()),
            canonicalize(self.rho * phi.sin() * theta.sin()),
            canonicalize(self.rho * phi.cos()),
        )
    }
}

impl fmt::Display for Spherical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.rho,
            render_pi_multiple(self.theta.to_radians()),
            render_pi_multiple(self.phi.to_radians())
        )
    }
}
