use tracing::trace;

use crate::error::{IntersectionError, Result};
use crate::geometry::Segment3D;

use super::{Vector3D, TOLERANCE};

/// Relationship between two finite segments in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentRelation {
    /// Segments meet in exactly one point.
    Point(Vector3D),
    /// Both segments have the same start and the same end.
    Identical { start: Vector3D, end: Vector3D },
    /// Segments lie on the same line but their x-extents are disjoint.
    SameLineNoOverlap,
    /// Segments lie on the same line and share the interval `start..end`.
    CollinearOverlap { start: Vector3D, end: Vector3D },
    /// Directions are parallel but the lines are distinct.
    Parallel,
    /// Segments do not meet.
    Skew,
}

impl SegmentRelation {
    /// Returns the intersection point, if there is exactly one.
    #[must_use]
    pub fn point(&self) -> Option<Vector3D> {
        match self {
            Self::Point(p) => Some(*p),
            _ => None,
        }
    }

    /// Returns `true` for a single-point intersection.
    #[must_use]
    pub fn is_point(&self) -> bool {
        matches!(self, Self::Point(_))
    }

    /// Converts into a `Result`, mapping every non-point outcome to the
    /// matching [`IntersectionError`].
    ///
    /// # Errors
    ///
    /// Returns an error for every relation other than [`SegmentRelation::Point`].
    pub fn into_result(self) -> std::result::Result<Vector3D, IntersectionError> {
        match self {
            Self::Point(p) => Ok(p),
            Self::Identical { start, end } => {
                Err(IntersectionError::IdenticalSegments { start, end })
            }
            Self::SameLineNoOverlap => Err(IntersectionError::SameLineNoOverlap),
            Self::CollinearOverlap { start, end } => {
                Err(IntersectionError::CollinearOverlap { start, end })
            }
            Self::Parallel => Err(IntersectionError::Parallel),
            Self::Skew => Err(IntersectionError::Skew),
        }
    }
}

/// Classifies how two segments intersect.
///
/// Rules are evaluated in order and the first match wins:
///
/// 1. Equal segments (order-sensitive) are [`Identical`](SegmentRelation::Identical).
/// 2. If both `second.start - first.start` and `second.end - first.end` are
///    uniform vectors, the segments are treated as lying on one line. This is
///    a narrow heuristic that only recognises lines displaced along `(1, 1, 1)`.
///    Disjoint x-extents give [`SameLineNoOverlap`](SegmentRelation::SameLineNoOverlap);
///    otherwise the overlap is the per-axis max of the starts and min of the
///    ends, which is only meaningful when both segments run with non-decreasing
///    coordinates.
/// 3. A shared endpoint is returned directly.
/// 4. Otherwise the lines are solved through their mutual cross product.
///    Parameters outside `[0, 1]` give [`Skew`](SegmentRelation::Skew). There
///    is no coplanarity check, so non-coplanar lines whose closest points both
///    fall inside the segments are reported as a point on `first`.
#[must_use]
pub fn intersect(first: &Segment3D, second: &Segment3D) -> SegmentRelation {
    let relation = classify(first, second);
    trace!(%first, %second, ?relation, "segment intersection classified");
    relation
}

/// Like [`intersect`], but reports every non-point outcome as an error.
///
/// # Errors
///
/// Returns [`IntersectionError`] (wrapped) when the segments do not meet in
/// exactly one point.
pub fn try_intersect(first: &Segment3D, second: &Segment3D) -> Result<Vector3D> {
    intersect(first, second).into_result().map_err(Into::into)
}

fn classify(first: &Segment3D, second: &Segment3D) -> SegmentRelation {
    if first == second {
        return SegmentRelation::Identical {
            start: first.start(),
            end: second.end(),
        };
    }

    let start_diff = second.start() - first.start();
    let end_diff = second.end() - first.end();

    if start_diff.is_uniform() && end_diff.is_uniform() {
        return collinear_relation(first, second);
    }

    if first.start() == second.start() || first.start() == second.end() {
        return SegmentRelation::Point(first.start());
    }
    if first.end() == second.end() || first.end() == second.start() {
        return SegmentRelation::Point(first.end());
    }

    let d1 = first.directional_vector();
    let d2 = second.directional_vector();
    let n = d1.cross_product(&d2);

    if n.length() < TOLERANCE {
        return SegmentRelation::Parallel;
    }

    let nn = n.dot_product(&n);
    let t1 = start_diff.cross_product(&d2).dot_product(&n) / nn;
    let t2 = start_diff.cross_product(&d1).dot_product(&n) / nn;

    if (0.0..=1.0).contains(&t1) && (0.0..=1.0).contains(&t2) {
        SegmentRelation::Point(first.start() + d1 * t1)
    } else {
        SegmentRelation::Skew
    }
}

fn collinear_relation(first: &Segment3D, second: &Segment3D) -> SegmentRelation {
    let (a0, a1) = (first.start(), first.end());
    let (b0, b1) = (second.start(), second.end());

    if a1.x() < b0.x() || a0.x() > b1.x() {
        return SegmentRelation::SameLineNoOverlap;
    }

    SegmentRelation::CollinearOverlap {
        start: Vector3D::new(a0.x().max(b0.x()), a0.y().max(b0.y()), a0.z().max(b0.z())),
        end: Vector3D::new(a1.x().min(b1.x()), a1.y().min(b1.y()), a1.z().min(b1.z())),
    }
}
