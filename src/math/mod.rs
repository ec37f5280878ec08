pub mod segment;

/// 3D point type. Planar geometries carry `z = 0`.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 matrix, used as a 2D homogeneous transformation.
pub type Matrix3 = nalgebra::Matrix3<f64>;
