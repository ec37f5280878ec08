use std::collections::HashMap;
use std::fmt;

use super::{AffineTransform, CoordinateTransform, Crs};
use crate::error::TransformError;
use crate::math::Matrix3;

/// Registry of the affine operations known between pairs of reference systems.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformContext {
    operations: HashMap<(Crs, Crs), Matrix3>,
}

impl TransformContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the operation mapping `from` coordinates into `to`.
    ///
    /// Replaces any operation previously registered for the same pair.
    pub fn add_operation(&mut self, from: Crs, to: Crs, matrix: Matrix3) {
        self.operations.insert((from, to), matrix);
    }

    /// Builder form of [`TransformContext::add_operation`].
    #[must_use]
    pub fn with_operation(mut self, from: Crs, to: Crs, matrix: Matrix3) -> Self {
        self.add_operation(from, to, matrix);
        self
    }

    /// Returns the operation registered for `from` → `to`, if any.
    #[must_use]
    pub fn operation(&self, from: &Crs, to: &Crs) -> Option<&Matrix3> {
        self.operations.get(&(from.clone(), to.clone()))
    }
}

/// Builds coordinate transforms between reference systems.
pub trait TransformProvider: fmt::Debug {
    /// Creates the transform from `source` to `destination`.
    ///
    /// # Errors
    ///
    /// Returns an error if no usable transform exists for the pair.
    fn create_transform(
        &self,
        source: &Crs,
        destination: &Crs,
        context: &TransformContext,
    ) -> Result<Box<dyn CoordinateTransform>, TransformError>;
}

/// Resolves transforms from the operations registered in a [`TransformContext`].
///
/// Identical systems yield the identity. A registered reverse operation is
/// used inverted when no direct one exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextTransformProvider;

impl TransformProvider for ContextTransformProvider {
    fn create_transform(
        &self,
        source: &Crs,
        destination: &Crs,
        context: &TransformContext,
    ) -> Result<Box<dyn CoordinateTransform>, TransformError> {
        for crs in [source, destination] {
            if !crs.is_valid() {
                return Err(TransformError::InvalidCrs(crs.clone()));
            }
        }

        if source == destination {
            return Ok(Box::new(AffineTransform::identity()));
        }

        if let Some(matrix) = context.operation(source, destination) {
            return Ok(Box::new(AffineTransform::new(*matrix)?));
        }

        if let Some(matrix) = context.operation(destination, source) {
            return Ok(Box::new(AffineTransform::new(*matrix)?.inverted()));
        }

        Err(TransformError::NoOperation {
            from: source.clone(),
            to: destination.clone(),
        })
    }
}
