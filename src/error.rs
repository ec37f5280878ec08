use thiserror::Error;

use crate::transform::Crs;

/// Top-level error type for the vertex editor.
#[derive(Debug, Error)]
pub enum VertexEditError {
    #[error(transparent)]
    Crs(#[from] CrsError),

    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Errors raised while parsing a coordinate reference system identifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CrsError {
    #[error("empty CRS identifier")]
    Empty,

    #[error("malformed CRS identifier: {0}")]
    Malformed(String),
}

/// Errors raised while building a coordinate transform.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("invalid CRS: {0}")]
    InvalidCrs(Crs),

    #[error("no known operation from {from} to {to}")]
    NoOperation { from: Crs, to: Crs },

    #[error("transform matrix is not invertible")]
    NotInvertible,
}

/// Convenience type alias for results using [`VertexEditError`].
pub type Result<T> = std::result::Result<T, VertexEditError>;
