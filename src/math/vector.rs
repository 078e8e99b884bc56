use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::{Point3, Vector3, TOLERANCE};

/// A point or displacement in 3D space.
///
/// Equality is absolute-tolerance equality: two vectors are equal when every
/// coordinate differs by strictly less than [`TOLERANCE`]. This relation is
/// reflexive and symmetric but only approximately transitive near the
/// tolerance boundary.
#[derive(Debug, Clone, Copy)]
pub struct Vector3D {
    coords: Vector3,
}

impl Vector3D {
    /// The zero vector.
    pub const ZERO: Self = Self {
        coords: Vector3::new(0.0, 0.0, 0.0),
    };

    /// Creates a vector from its three coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            coords: Vector3::new(x, y, z),
        }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Returns the z coordinate.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.coords.z
    }

    /// Replaces the x coordinate.
    pub fn set_x(&mut self, x: f64) {
        self.coords.x = x;
    }

    /// Replaces the y coordinate.
    pub fn set_y(&mut self, y: f64) {
        self.coords.y = y;
    }

    /// Replaces the z coordinate.
    pub fn set_z(&mut self, z: f64) {
        self.coords.z = z;
    }

    /// Multiplies every component by `k`.
    #[must_use]
    pub fn scale(&self, k: f64) -> Self {
        *self * k
    }

    /// Tolerance equality, same as `==`.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        (self.coords.x - other.coords.x).abs() < TOLERANCE
            && (self.coords.y - other.coords.y).abs() < TOLERANCE
            && (self.coords.z - other.coords.z).abs() < TOLERANCE
    }

    /// Negation of [`equals`](Self::equals).
    #[must_use]
    pub fn not_equals(&self, other: &Self) -> bool {
        !self.equals(other)
    }

    /// Euclidean norm.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.coords.norm()
    }

    /// Returns `true` when `x ≈ y` and `y ≈ z`.
    ///
    /// Only the adjacent pairs are compared, so `x` and `z` may differ by up
    /// to twice [`TOLERANCE`] and still count as uniform.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        (self.coords.x - self.coords.y).abs() < TOLERANCE
            && (self.coords.y - self.coords.z).abs() < TOLERANCE
    }

    /// Right-handed cross product `self × other`.
    ///
    /// Zero when either operand is zero or the two are parallel.
    #[must_use]
    pub fn cross_product(&self, other: &Self) -> Self {
        Self {
            coords: self.coords.cross(&other.coords),
        }
    }

    /// Dot product `self · other`.
    #[must_use]
    pub fn dot_product(&self, other: &Self) -> f64 {
        self.coords.dot(&other.coords)
    }

    /// Returns the underlying nalgebra vector.
    #[must_use]
    pub fn as_vector(&self) -> &Vector3 {
        &self.coords
    }
}

impl Default for Vector3D {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Vector3D {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}}}", self.coords.x, self.coords.y, self.coords.z)
    }
}

impl Add for Vector3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            coords: self.coords + rhs.coords,
        }
    }
}

impl Sub for Vector3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            coords: self.coords - rhs.coords,
        }
    }
}

impl Neg for Vector3D {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            coords: -self.coords,
        }
    }
}

impl Mul<f64> for Vector3D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            coords: self.coords * rhs,
        }
    }
}

impl Mul<Vector3D> for f64 {
    type Output = Vector3D;

    fn mul(self, rhs: Vector3D) -> Vector3D {
        rhs * self
    }
}

impl From<Vector3> for Vector3D {
    fn from(coords: Vector3) -> Self {
        Self { coords }
    }
}

impl From<Vector3D> for Vector3 {
    fn from(v: Vector3D) -> Self {
        v.coords
    }
}

impl From<Point3> for Vector3D {
    fn from(p: Point3) -> Self {
        Self { coords: p.coords }
    }
}

impl From<Vector3D> for Point3 {
    fn from(v: Vector3D) -> Self {
        Point3::from(v.coords)
    }
}

impl From<[f64; 3]> for Vector3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}
