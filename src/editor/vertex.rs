use crate::math::Point3;

/// One row of the editor's vertex list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub(super) point: Point3,
    pub(super) current: bool,
    pub(super) segment: bool,
}

impl Vertex {
    pub(super) fn new(point: Point3) -> Self {
        Self {
            point,
            current: false,
            segment: false,
        }
    }

    /// A not yet committed vertex placed on a segment while adding.
    pub(super) fn segment(point: Point3) -> Self {
        Self {
            point,
            current: false,
            segment: true,
        }
    }

    /// Position in the editing reference system.
    #[must_use]
    pub fn point(&self) -> Point3 {
        self.point
    }

    /// Whether this is the selected vertex.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.current
    }

    /// Whether this is the floating vertex of add-vertex mode.
    #[must_use]
    pub fn is_segment_vertex(&self) -> bool {
        self.segment
    }
}
