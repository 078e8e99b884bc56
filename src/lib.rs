pub mod error;
pub mod geometry;
pub mod math;

pub use error::{IntersectionError, Result, SegsectError};
pub use geometry::Segment3D;
pub use math::intersect_3d::{intersect, try_intersect, SegmentRelation};
pub use math::{Vector3D, TOLERANCE};
