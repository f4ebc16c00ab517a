//! # Vector Algebra Module
//!
//! This module provides the 3-component vector value type the
//! canonicalization layer operates on. Every numeric result an
//! operation produces (summed components, dot products, norms,
//! normalized components) passes through
//! [`canonicalize`](crate::canonical::canonicalize) before it is stored,
//! so chained arithmetic cannot accumulate visible float noise.
//!
//! ## Design Philosophy
//!
//! `Vector3` is an immutable value: operations return fresh instances
//! and nothing mutates a receiver. Components are validated as finite at
//! every construction boundary, which is why the fields are private:
//! a public field would let `NaN` bypass the check.
//!
//! Equality is exact component-tuple equality. Ordering is deliberately
//! **not** implemented as comparison operators: vectors order by norm,
//! which is inconsistent with component equality (two distinct vectors
//! of equal norm compare as neither smaller nor larger), so the norm
//! order is exposed only as the explicit [`Vector3::compare_by_norm`].
//!
//! ## Examples
//!
//! ```rust
//! use exactvec::Vector3;
//!
//! let a = Vector3::new(1.0, 2.0, 3.0).unwrap();
//! let b = Vector3::new(4.0, 5.0, 6.0).unwrap();
//!
//! assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0).unwrap());
//! assert_eq!(a.dot(&b), 32.0);
//! assert_eq!(Vector3::new(3.0, 4.0, 0.0).unwrap().norm(), 5.0);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::canonical::canonicalize;
use crate::coordinates::{Angle, Cylindrical, Spherical};
use crate::exact::{render_pi_multiple, simplify_radical};
use crate::{ExactVecError, Result};

/// How far past 1 the cosine argument may drift (from canonicalization
/// rounding at exactly parallel vectors) before it is an error instead
/// of a clamp.
const COSINE_DOMAIN_TOLERANCE: f64 = 1e-9;

/// Three-dimensional vector with canonicalized arithmetic
///
/// Represents a point or direction in 3D space. Components are `f64`,
/// validated finite at construction, and exactly preserved: equality
/// compares the raw component tuple, never a canonicalized copy.
///
/// Vectors with fewer components embed naturally: omitted trailing
/// components default to 0 (see [`Vector3::from_components`]), and
/// [`Vector3::dimension`] reports the minimal embedding dimension
/// rather than the component count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new vector, rejecting non-finite components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactvec::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0).unwrap();
    /// assert_eq!(v.x(), 1.0);
    ///
    /// assert!(Vector3::new(f64::NAN, 0.0, 0.0).is_err());
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        for component in [x, y, z] {
            if !component.is_finite() {
                return Err(ExactVecError::NonFiniteComponent(component));
            }
        }
        Ok(Vector3 { x, y, z })
    }

    /// Creates a vector from up to three components, defaulting omitted
    /// trailing components to 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactvec::Vector3;
    ///
    /// let planar = Vector3::from_components(&[3.0, 4.0]).unwrap();
    /// assert_eq!(planar, Vector3::new(3.0, 4.0, 0.0).unwrap());
    /// assert!(Vector3::from_components(&[1.0, 2.0, 3.0, 4.0]).is_err());
    /// ```
    pub fn from_components(components: &[f64]) -> Result<Self> {
        if components.len() > 3 {
            return Err(ExactVecError::TooManyComponents(components.len()));
        }
        let mut filled = [0.0; 3];
        filled[..components.len()].copy_from_slice(components);
        Self::new(filled[0], filled[1], filled[2])
    }

    // Components here are already validated and canonicalized.
    pub(crate) fn from_parts(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// X-component.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-component.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z-component.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Components as an array, in `(x, y, z)` order.
    pub fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// The minimal embedding dimension: the count of non-zero
    /// components (0 through 3), not the component count.
    ///
    /// `(1, 0, 2)` looks three-dimensional but lives in the XZ plane,
    /// so its dimension is 2.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactvec::Vector3;
    ///
    /// assert_eq!(Vector3::new(3.0, 0.0, 0.0).unwrap().dimension(), 1);
    /// assert_eq!(Vector3::new(1.0, 0.0, 2.0).unwrap().dimension(), 2);
    /// assert_eq!(Vector3::ZERO.dimension(), 0);
    /// ```
    pub fn dimension(&self) -> usize {
        self.components()
            .iter()
            .filter(|&&component| component != 0.0)
            .count()
    }

    /// Euclidean magnitude, canonicalized.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactvec::Vector3;
    ///
    /// assert_eq!(Vector3::new(3.0, 4.0, 0.0).unwrap().norm(), 5.0);
    /// ```
    pub fn norm(&self) -> f64 {
        canonicalize((self.x * self.x + self.y * self.y + self.z * self.z).sqrt())
    }

    /// Dot product, canonicalized.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactvec::Vector3;
    ///
    /// let a = Vector3::new(1.0, 2.0, 3.0).unwrap();
    /// let b = Vector3::new(4.0, 5.0, 6.0).unwrap();
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    pub fn dot(&self, other: &Vector3) -> f64 {
        canonicalize(self.x * other.x + self.y * other.y + self.z * other.z)
    }

    /// Cross product by the standard determinant formula, each output
    /// component canonicalized independently. Defined for the
    /// 3-component model only; there is no generalization to other
    /// dimensions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactvec::Vector3;
    ///
    /// let x_axis = Vector3::new(1.0, 0.0, 0.0).unwrap();
    /// let y_axis = Vector3::new(0.0, 1.0, 0.0).unwrap();
    /// let z_axis = x_axis.cross(&y_axis);
    /// assert_eq!(z_axis, Vector3::new(0.0, 0.0, 1.0).unwrap());
    /// ```
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::from_parts(
            canonicalize(self.y * other.z - self.z * other.y),
            canonicalize(self.z * other.x - self.x * other.z),
            canonicalize(self.x * other.y - self.y * other.x),
        )
    }

    /// Returns the unit vector with the same direction.
    ///
    /// Fails for the zero vector, which has no direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactvec::Vector3;
    ///
    /// let unit = Vector3::new(1.0, 1.0, 1.0).unwrap().normalize().unwrap();
    /// assert_eq!(unit.norm(), 1.0);
    /// assert!(Vector3::ZERO.normalize().is_err());
    /// ```
    pub fn normalize(&self) -> Result<Vector3> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(ExactVecError::ZeroVector("normalization"));
        }
        Ok(Vector3::from_parts(
            canonicalize(self.x / norm),
            canonicalize(self.y / norm),
            canonicalize(self.z / norm),
        ))
    }

    /// Angle between two vectors.
    ///
    /// Computed as `acos(dot / (|a| * |b|))` and canonicalized, so
    /// parallel vectors report an exact 0. Fails when either vector is
    /// zero, or when canonicalization rounding pushes the cosine
    /// argument outside `[-1, 1]` by more than float tolerance; inside
    /// that tolerance the argument is clamped before `acos`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactvec::Vector3;
    ///
    /// let a = Vector3::new(1.0, 2.0, 3.0).unwrap();
    /// let b = Vector3::new(2.0, 4.0, 6.0).unwrap();
    /// assert_eq!(a.angle_to(&b).unwrap().to_radians(), 0.0);
    /// ```
    pub fn angle_to(&self, other: &Vector3) -> Result<Angle> {
        let norms = self.norm() * other.norm();
        if norms == 0.0 {
            return Err(ExactVecError::ZeroVector("angle measurement"));
        }

        let cosine = self.dot(other) / norms;
        if cosine.abs() > 1.0 + COSINE_DOMAIN_TOLERANCE {
            return Err(ExactVecError::CosineOutOfDomain(cosine));
        }

        let radians = canonicalize(cosine.clamp(-1.0, 1.0).acos());
        Ok(Angle::from_radians(radians))
    }

    /// Formats the angle to `other` in degrees, e.g. `"45.00º"`.
    pub fn angle_degrees_display(&self, other: &Vector3) -> Result<String> {
        let angle = self.angle_to(other)?;
        Ok(format!("{:.2}º", angle.to_degrees()))
    }

    /// Formats the angle to `other` in radians with the pi-multiple
    /// recognizer, e.g. `"1/2 pi rad"`.
    pub fn angle_radians_display(&self, other: &Vector3) -> Result<String> {
        let angle = self.angle_to(other)?;
        Ok(format!("{} rad", render_pi_multiple(angle.to_radians())))
    }

    /// Scalar division. A zero divisor is a domain error rather than a
    /// silent infinity, which is why this is not a `Div` operator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactvec::Vector3;
    ///
    /// let v = Vector3::new(3.0, 6.0, 9.0).unwrap();
    /// assert_eq!(v.try_div(3.0).unwrap(), Vector3::new(1.0, 2.0, 3.0).unwrap());
    /// assert!(v.try_div(0.0).is_err());
    /// ```
    pub fn try_div(&self, divisor: f64) -> Result<Vector3> {
        if divisor == 0.0 {
            return Err(ExactVecError::ZeroDivisor);
        }
        Ok(Vector3::from_parts(
            canonicalize(self.x / divisor),
            canonicalize(self.y / divisor),
            canonicalize(self.z / divisor),
        ))
    }

    /// Orders two vectors by canonicalized norm.
    ///
    /// This is the only ordering surface the type offers: norm order is
    /// not consistent with component equality, so overloading `<` would
    /// silently violate total-order expectations in consuming code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactvec::Vector3;
    /// use std::cmp::Ordering;
    ///
    /// let long = Vector3::new(1.0, 2.0, 3.0).unwrap();
    /// let short = Vector3::new(1.0, 2.0, 2.0).unwrap();
    /// assert_eq!(long.compare_by_norm(&short), Ordering::Greater);
    /// ```
    pub fn compare_by_norm(&self, other: &Vector3) -> Ordering {
        self.norm().total_cmp(&other.norm())
    }

    /// Cylindrical coordinates of this vector's tip: `r` in the XY
    /// plane, azimuth `theta` from `atan2`, `z` unchanged. A fresh
    /// value every call; nothing is cached on the vector.
    pub fn to_cylindrical(&self) -> Cylindrical {
        let r = canonicalize((self.x * self.x + self.y * self.y).sqrt());
        let theta = canonicalize(self.y.atan2(self.x));
        Cylindrical::from_parts(r, Angle::from_radians(theta), self.z)
    }

    /// Spherical coordinates of this vector's tip (physics convention:
    /// `theta` azimuth, `phi` polar angle from +z). Fails for the zero
    /// vector, whose direction is undefined.
    pub fn to_spherical(&self) -> Result<Spherical> {
        let rho = canonicalize((self.x * self.x + self.y * self.y + self.z * self.z).sqrt());
        if rho == 0.0 {
            return Err(ExactVecError::ZeroVector("spherical conversion"));
        }

        let theta = canonicalize(self.y.atan2(self.x));
        // Snapping rho can leave z/rho a rounding step past 1.
        let polar_cosine = (self.z / rho).clamp(-1.0, 1.0);
        let phi = canonicalize(polar_cosine.acos());

        Ok(Spherical::from_parts(
            rho,
            Angle::from_radians(theta),
            Angle::from_radians(phi),
        ))
    }

    /// Cylindrical coordinates rendered in exact form: the radius as a
    /// simplified radical of the squared planar sum, the azimuth as a
    /// pi-multiple, `z` verbatim.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactvec::Vector3;
    ///
    /// let v = Vector3::new(1.0, 1.0, 1.0).unwrap();
    /// assert_eq!(v.cylindrical_string(), "(sqrt(2), 1/4 pi, 1)");
    /// ```
    pub fn cylindrical_string(&self) -> String {
        let planar_square = canonicalize(self.x * self.x + self.y * self.y);
        let theta = canonicalize(self.y.atan2(self.x));
        format!(
            "({}, {}, {})",
            simplify_radical(planar_square),
            render_pi_multiple(theta),
            self.z
        )
    }

    /// Spherical coordinates rendered in exact form. Fails for the zero
    /// vector.
    pub fn spherical_string(&self) -> Result<String> {
        let radial_square = canonicalize(self.x * self.x + self.y * self.y + self.z * self.z);
        let spherical = self.to_spherical()?;
        Ok(format!(
            "({}, {}, {})",
            simplify_radical(radial_square),
            render_pi_multiple(spherical.theta().to_radians()),
            render_pi_multiple(spherical.phi().to_radians())
        ))
    }

    /// Converts to a nalgebra vector for linear algebra operations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exactvec::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0).unwrap();
    /// let na = v.to_nalgebra();
    /// assert_eq!(na.x, 1.0);
    /// ```
    pub fn to_nalgebra(&self) -> nalgebra::Vector3<f64> {
        nalgebra::Vector3::new(self.x, self.y, self.z)
    }

    /// Creates a vector from a nalgebra vector, applying the same
    /// finiteness validation as [`Vector3::new`].
    pub fn from_nalgebra(vector: nalgebra::Vector3<f64>) -> Result<Self> {
        Self::new(vector.x, vector.y, vector.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3::from_parts(
            canonicalize(self.x + other.x),
            canonicalize(self.y + other.y),
            canonicalize(self.z + other.z),
        )
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::from_parts(
            canonicalize(self.x - other.x),
            canonicalize(self.y - other.y),
            canonicalize(self.z - other.z),
        )
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        self * -1.0
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Vector3 {
        Vector3::from_parts(
            canonicalize(self.x * scalar),
            canonicalize(self.y * scalar),
            canonicalize(self.z * scalar),
        )
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vector: Vector3) -> Vector3 {
        vector * self
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("component index out of range: {}", index),
        }
    }
}

// Coercion boundary: raw sequences convert through one validated step,
// never inside the operations themselves.
impl TryFrom<[f64; 3]> for Vector3 {
    type Error = ExactVecError;

    fn try_from(components: [f64; 3]) -> Result<Self> {
        Self::new(components[0], components[1], components[2])
    }
}

impl TryFrom<(f64, f64, f64)> for Vector3 {
    type Error = ExactVecError;

    fn try_from((x, y, z): (f64, f64, f64)) -> Result<Self> {
        Self::new(x, y, z)
    }
}

impl TryFrom<(f64, f64)> for Vector3 {
    type Error = ExactVecError;

    fn try_from((x, y): (f64, f64)) -> Result<Self> {
        Self::new(x, y, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn vec3(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z).unwrap()
    }

    #[test]
    fn test_construction_rejects_non_finite() {
        assert!(matches!(
            Vector3::new(f64::NAN, 0.0, 0.0),
            Err(ExactVecError::NonFiniteComponent(c)) if c.is_nan()
        ));
        assert_eq!(
            Vector3::new(0.0, f64::INFINITY, 0.0),
            Err(ExactVecError::NonFiniteComponent(f64::INFINITY))
        );
        assert!(Vector3::new(0.0, 0.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_from_components_defaults_trailing_zeros() {
        assert_eq!(Vector3::from_components(&[]).unwrap(), Vector3::ZERO);
        assert_eq!(Vector3::from_components(&[2.0]).unwrap(), vec3(2.0, 0.0, 0.0));
        assert_eq!(Vector3::from_components(&[3.0, 4.0]).unwrap(), vec3(3.0, 4.0, 0.0));
        assert_eq!(
            Vector3::from_components(&[1.0, 2.0, 3.0, 4.0]),
            Err(ExactVecError::TooManyComponents(4))
        );
    }

    #[test]
    fn test_dimension_counts_nonzero_components() {
        assert_eq!(Vector3::ZERO.dimension(), 0);
        assert_eq!(vec3(3.0, 0.0, 0.0).dimension(), 1);
        assert_eq!(vec3(1.0, 0.0, 2.0).dimension(), 2);
        assert_eq!(vec3(1.0, 2.0, 3.0).dimension(), 3);
    }

    #[test]
    fn test_norm() {
        assert_eq!(vec3(3.0, 4.0, 0.0).norm(), 5.0);
        assert_eq!(vec3(1.0, 2.0, 2.0).norm(), 3.0);
        assert_eq!(Vector3::ZERO.norm(), 0.0);
    }

    #[test]
    fn test_addition_subtraction_round_trip() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, 5.0, 6.0);

        assert_eq!(a + b, vec3(5.0, 7.0, 9.0));
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn test_arithmetic_canonicalizes_components() {
        // 0.1 + 0.2 leaves binary residue that must not be stored.
        let sum = vec3(0.1, 0.0, 0.0) + vec3(0.2, 0.0, 0.0);
        assert_eq!(sum.x(), 0.3);
    }

    #[test]
    fn test_scalar_multiplication() {
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(v * 2.0, vec3(2.0, 4.0, 6.0));
        assert_eq!(2.0 * v, vec3(2.0, 4.0, 6.0));
        assert_eq!(-v, vec3(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_scalar_division() {
        let v = vec3(3.0, 6.0, 9.0);
        assert_eq!(v.try_div(3.0).unwrap(), vec3(1.0, 2.0, 3.0));
        assert_eq!(v.try_div(0.0), Err(ExactVecError::ZeroDivisor));
    }

    #[test]
    fn test_dot_product_commutes() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, 5.0, 6.0);
        assert_eq!(a.dot(&b), 32.0);
        assert_eq!(a.dot(&b), b.dot(&a));
    }

    #[test]
    fn test_cross_product_right_hand_rule() {
        let x_axis = vec3(1.0, 0.0, 0.0);
        let y_axis = vec3(0.0, 1.0, 0.0);
        let z_axis = vec3(0.0, 0.0, 1.0);

        assert_eq!(x_axis.cross(&y_axis), z_axis);
        assert_eq!(y_axis.cross(&z_axis), x_axis);
        assert_eq!(z_axis.cross(&x_axis), y_axis);
    }

    #[test]
    fn test_cross_product_antisymmetry() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(-2.0, 0.5, 4.0);
        assert_eq!(a.cross(&b), -(b.cross(&a)));
    }

    #[test]
    fn test_normalize() {
        let unit = vec3(1.0, 1.0, 1.0).normalize().unwrap();
        assert_eq!(unit.norm(), 1.0);

        let simple = vec3(2.0, 0.0, 0.0).normalize().unwrap();
        assert_eq!(simple, vec3(1.0, 0.0, 0.0));

        assert_eq!(
            Vector3::ZERO.normalize(),
            Err(ExactVecError::ZeroVector("normalization"))
        );
    }

    #[test]
    fn test_angle_between_parallel_vectors_is_exact_zero() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(2.0, 4.0, 6.0);
        assert_eq!(a.angle_to(&b).unwrap().to_radians(), 0.0);
    }

    #[test]
    fn test_angle_between_perpendicular_vectors() {
        let angle = vec3(1.0, 0.0, 0.0).angle_to(&vec3(0.0, 1.0, 0.0)).unwrap();
        assert_relative_eq!(angle.to_radians(), PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(angle.to_degrees(), 90.0, epsilon = 1e-10);
    }

    #[test]
    fn test_angle_antiparallel_clamps_cosine() {
        let a = vec3(1.0, 1.0, 1.0);
        let angle = a.angle_to(&(-a)).unwrap();
        assert_relative_eq!(angle.to_radians(), PI, epsilon = 1e-9);
    }

    #[test]
    fn test_angle_with_zero_vector_fails() {
        assert_eq!(
            vec3(1.0, 0.0, 0.0).angle_to(&Vector3::ZERO),
            Err(ExactVecError::ZeroVector("angle measurement"))
        );
    }

    #[test]
    fn test_angle_displays() {
        let x_axis = vec3(1.0, 0.0, 0.0);
        let y_axis = vec3(0.0, 1.0, 0.0);
        assert_eq!(x_axis.angle_degrees_display(&y_axis).unwrap(), "90.00º");
        assert_eq!(x_axis.angle_radians_display(&y_axis).unwrap(), "1/2 pi rad");
    }

    #[test]
    fn test_compare_by_norm() {
        let longer = vec3(1.0, 2.0, 3.0);
        let shorter = vec3(1.0, 2.0, 2.0);

        assert_eq!(longer.compare_by_norm(&shorter), Ordering::Greater);
        assert_eq!(shorter.compare_by_norm(&longer), Ordering::Less);

        // Distinct vectors of equal norm: equal in the norm order while
        // unequal as values.
        let swapped = vec3(2.0, 1.0, 2.0);
        assert_eq!(shorter.compare_by_norm(&swapped), Ordering::Equal);
        assert_ne!(shorter, swapped);
    }

    #[test]
    fn test_equality_is_exact_components() {
        assert_eq!(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.0));
        assert_ne!(vec3(1.0, 2.0, 3.0), vec3(1.0, 3.0, 2.0));
    }

    #[test]
    fn test_indexing() {
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
        assert_eq!(v.components(), [1.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "component index out of range")]
    fn test_indexing_out_of_range_panics() {
        let _ = vec3(1.0, 2.0, 3.0)[3];
    }

    #[test]
    fn test_try_from_coercions() {
        assert_eq!(Vector3::try_from([1.0, 2.0, 3.0]).unwrap(), vec3(1.0, 2.0, 3.0));
        assert_eq!(Vector3::try_from((1.0, 2.0, 3.0)).unwrap(), vec3(1.0, 2.0, 3.0));
        assert_eq!(Vector3::try_from((3.0, 4.0)).unwrap(), vec3(3.0, 4.0, 0.0));
        assert!(Vector3::try_from([f64::NAN, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_nalgebra_round_trip() {
        let v = vec3(1.0, 2.0, 3.0);
        let na = v.to_nalgebra();
        assert_eq!(na, nalgebra::Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector3::from_nalgebra(na).unwrap(), v);
    }

    #[test]
    fn test_display_is_component_tuple() {
        assert_eq!(format!("{}", vec3(1.0, 2.0, 3.0)), "(1, 2, 3)");
        assert_eq!(format!("{}", vec3(0.5, -1.0, 0.0)), "(0.5, -1, 0)");
    }
}
