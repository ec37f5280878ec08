use super::{signed, VertexEditor};
use crate::geometry::GeometryType;
use crate::math::segment::{extend_beyond, midpoint};
use crate::math::Point3;

/// Result of [`VertexEditor::segment_centroid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentCentroid {
    pub point: Point3,
    /// `true` if the point lies past an open end of a line rather than
    /// between two vertices.
    pub is_extension: bool,
}

impl VertexEditor {
    /// Computes the point on the segment between vertices `a` and `b`.
    ///
    /// The pair is unordered and collapsed to adjacent indices ending at the
    /// higher one. Indices past either end wrap around for polygons. For
    /// lines they clamp to the first or last segment; with
    /// `allow_extension` the result is then pushed past that end of the
    /// line instead.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two vertices are loaded.
    #[must_use]
    pub fn segment_centroid(&self, a: isize, b: isize, allow_extension: bool) -> SegmentCentroid {
        let count = self.vertices.len();
        assert!(
            count >= 2,
            "segment centroid needs at least two vertices, have {count}"
        );
        let last = signed(count) - 1;
        let polygon = self.geometry_type == GeometryType::Polygon;

        let (mut first, mut second) = if a <= b { (a, b) } else { (b, a) };
        if second - first > 1 {
            first = second - 1;
        }

        let mut is_extension = false;
        if first < 0 {
            if polygon {
                (first, second) = (last, 0);
            } else {
                is_extension = allow_extension;
                (first, second) = (0, 1);
            }
        }
        if second > last {
            if polygon {
                (first, second) = (0, last);
            } else {
                // The open end comes first so the extension is anchored on it.
                is_extension = allow_extension;
                (first, second) = (last, last - 1);
            }
        }

        let p0 = self.point_at(first);
        let p1 = self.point_at(second);
        let mid = midpoint(&p0, &p1);
        let point = if is_extension {
            extend_beyond(&p0, &mid)
        } else {
            mid
        };

        SegmentCentroid {
            point,
            is_extension,
        }
    }

    fn point_at(&self, index: isize) -> Point3 {
        match usize::try_from(index).ok().and_then(|i| self.vertices.get(i)) {
            Some(vertex) => vertex.point,
            None => panic!(
                "segment index {index} outside of {} vertices",
                self.vertices.len()
            ),
        }
    }
}
