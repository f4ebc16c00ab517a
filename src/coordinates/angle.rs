//! # Angle Representation Module
//!
//! This module provides an angle value that preserves the original
//! unit (degrees vs radians) of angular measurements.
//!
//! ## Design Philosophy
//!
//! The `Angle` type maintains the exact numerical value and unit as
//! provided by the caller, avoiding the precision loss that would occur
//! from immediate conversion. Every constructor in this crate that the
//! original-notation world would hand a "degrees flag" takes an `Angle`
//! instead: the unit is decided where the number is written down, and
//! conversion happens only when a projection explicitly asks for
//! radians.
//!
//! ## Examples
//!
//! ```rust
//! use exactvec::coordinates::Angle;
//!
//! // Stored exactly as 45.0 degrees
//! let deg = Angle::from_degrees(45.0);
//! assert_eq!(deg.to_degrees(), 45.0);
//!
//! // Stored exactly as pi/4 radians
//! let rad = Angle::from_radians(std::f64::consts::PI / 4.0);
//! assert_eq!(rad.to_radians(), std::f64::consts::PI / 4.0);
//! ```

use std::f64::consts::PI;

/// Internal representation unit for angle values
///
/// This enum allows the `Angle` struct to keep the exact numerical
/// value in its original unit, preventing precision loss from
/// unnecessary conversions during construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleFormat {
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in radians
    Radians(f64),
}

/// An angular measurement that remembers the unit it was written in
///
/// Values provided in degrees are stored as degrees, values provided in
/// radians as radians; conversion only occurs when explicitly requested
/// via [`Angle::to_degrees`] or [`Angle::to_radians`], using
/// `std::f64::consts::PI`. Round trips through the original unit are
/// exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    angle: AngleFormat,
}

impl Angle {
    /// Creates an angle from a value in degrees.
    ///
    /// The value is stored exactly as provided.
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    /// Creates an angle from a value in radians.
    ///
    /// The value is stored exactly as provided.
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    /// Returns the angle value in degrees.
    ///
    /// Exact when the angle was stored in degrees; otherwise converted
    /// as `radians * (180 / pi)`.
    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Radians(rad) => rad * (180.0 / PI),
        }
    }

    /// Returns the angle value in radians.
    ///
    /// Exact when the angle was stored in radians; otherwise converted
    /// as `degrees * (pi / 180)`.
    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg * (PI / 180.0),
            AngleFormat::Radians(rad) => rad,
        }
    }

    /// Returns the internal unit of this angle.
    pub fn format(&self) -> AngleFormat {
        self.angle
    }
}
