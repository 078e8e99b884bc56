use thiserror::Error;

use crate::math::Vector3D;

/// Top-level error type for the segsect kernel.
#[derive(Debug, Error)]
pub enum SegsectError {
    #[error(transparent)]
    Intersection(#[from] IntersectionError),
}

/// Every outcome of a segment intersection that is not a single point.
///
/// These are expected results of the classifier, not contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IntersectionError {
    #[error("segments are the same and the intersection is an interval with start {start} and end {end}")]
    IdenticalSegments { start: Vector3D, end: Vector3D },

    #[error("segments are on the same line and do not intersect")]
    SameLineNoOverlap,

    #[error("segments intersection is an interval with start {start} and end {end}")]
    CollinearOverlap { start: Vector3D, end: Vector3D },

    #[error("segments are parallel and do not intersect")]
    Parallel,

    #[error("segments do not intersect")]
    Skew,
}

/// Convenience type alias for results using [`SegsectError`].
pub type Result<T> = std::result::Result<T, SegsectError>;
