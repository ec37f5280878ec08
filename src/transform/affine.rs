use std::fmt;

use crate::error::TransformError;
use crate::math::{Matrix3, Point3, Vector3};

/// A forward/inverse coordinate transform between two reference systems.
pub trait CoordinateTransform: fmt::Debug {
    /// Returns `true` if the transform can be applied.
    fn is_valid(&self) -> bool;

    /// Maps a point from the source into the destination system.
    fn apply(&self, point: &Point3) -> Point3;

    /// Maps a point from the destination back into the source system.
    fn apply_inverse(&self, point: &Point3) -> Point3;
}

/// A planar affine transform. The z coordinate passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    forward: Matrix3,
    inverse: Matrix3,
}

impl AffineTransform {
    /// Creates a transform from a 2D homogeneous matrix.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::NotInvertible`] if the matrix is singular.
    pub fn new(forward: Matrix3) -> Result<Self, TransformError> {
        let inverse = forward.try_inverse().ok_or(TransformError::NotInvertible)?;
        Ok(Self { forward, inverse })
    }

    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            forward: Matrix3::identity(),
            inverse: Matrix3::identity(),
        }
    }

    /// A pure translation by `(dx, dy)`.
    #[must_use]
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            forward: Matrix3::new_translation(&nalgebra::Vector2::new(dx, dy)),
            inverse: Matrix3::new_translation(&nalgebra::Vector2::new(-dx, -dy)),
        }
    }

    /// Returns the transform going the opposite way.
    #[must_use]
    pub fn inverted(self) -> Self {
        Self {
            forward: self.inverse,
            inverse: self.forward,
        }
    }

    /// Returns the forward matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix3 {
        &self.forward
    }
}

impl CoordinateTransform for AffineTransform {
    fn is_valid(&self) -> bool {
        self.forward.iter().all(|v| v.is_finite()) && self.inverse.iter().all(|v| v.is_finite())
    }

    fn apply(&self, point: &Point3) -> Point3 {
        transform_point(&self.forward, point)
    }

    fn apply_inverse(&self, point: &Point3) -> Point3 {
        transform_point(&self.inverse, point)
    }
}

fn transform_point(matrix: &Matrix3, point: &Point3) -> Point3 {
    let v = matrix * Vector3::new(point.x, point.y, 1.0);
    Point3::new(v.x / v.z, v.y / v.z, point.z)
}
