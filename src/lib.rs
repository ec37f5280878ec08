pub mod editor;
pub mod error;
pub mod geometry;
pub mod math;
pub mod transform;

pub use editor::{EditingMode, EditorEvent, SegmentCentroid, Vertex, VertexEditor};
pub use error::{Result, VertexEditError};
