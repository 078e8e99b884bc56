use std::fmt;

use crate::math::{Vector3D, TOLERANCE};

/// A finite line segment from `start` to `end`.
///
/// Endpoints are stored by value. Zero-length segments are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Segment3D {
    start: Vector3D,
    end: Vector3D,
}

impl Segment3D {
    /// Creates a segment from its two endpoints.
    #[must_use]
    pub fn new(start: Vector3D, end: Vector3D) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Vector3D {
        self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Vector3D {
        self.end
    }

    /// Replaces the start point.
    pub fn set_start(&mut self, start: Vector3D) {
        self.start = start;
    }

    /// Replaces the end point.
    pub fn set_end(&mut self, end: Vector3D) {
        self.end = end;
    }

    /// Order-sensitive equality: start matches start and end matches end.
    ///
    /// A segment compared with its own reversal is not equal.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn directional_vector(&self) -> Vector3D {
        self.end - self.start
    }

    /// Returns the length of the directional vector.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.directional_vector().length()
    }

    /// Evaluates `start + t * (end - start)`. `t` is not clamped.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Vector3D {
        self.start + self.directional_vector() * t
    }

    /// Returns `true` if the segment is shorter than [`TOLERANCE`].
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length() < TOLERANCE
    }
}

impl From<(Vector3D, Vector3D)> for Segment3D {
    fn from((start, end): (Vector3D, Vector3D)) -> Self {
        Self::new(start, end)
    }
}

impl fmt::Display for Segment3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}
