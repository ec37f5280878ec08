mod kind;
mod polygon;
mod traverse;

pub use kind::{Geometry, GeometryType};
pub use polygon::Polygon;
pub use traverse::VertexId;
