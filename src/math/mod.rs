pub mod intersect_3d;
pub mod vector;

pub use vector::Vector3D;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Shared by vector equality, [`Vector3D::is_uniform`] and the parallel test
/// in [`intersect_3d::intersect`].
pub const TOLERANCE: f64 = 1e-10;
