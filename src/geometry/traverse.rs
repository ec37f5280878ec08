use super::{Geometry, Polygon};
use crate::math::Point3;

/// Position of a vertex within a geometry's traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VertexId {
    /// Part index, zero for single geometries.
    pub part: usize,
    /// Ring index within the part, zero for exterior rings and non-polygons.
    pub ring: usize,
    /// Vertex index within the ring.
    pub vertex: usize,
}

impl VertexId {
    #[must_use]
    pub fn new(part: usize, ring: usize, vertex: usize) -> Self {
        Self { part, ring, vertex }
    }
}

impl Geometry {
    /// Returns every vertex in traversal order: parts, then rings, then points.
    ///
    /// Polygon rings include their closing point. Members of a collection
    /// are numbered as consecutive parts.
    #[must_use]
    pub fn vertices(&self) -> Vec<(VertexId, Point3)> {
        let mut out = Vec::new();
        self.collect_vertices(0, &mut out);
        out
    }

    /// Appends this geometry's vertices starting at part `first_part`,
    /// returning the number of parts consumed.
    fn collect_vertices(&self, first_part: usize, out: &mut Vec<(VertexId, Point3)>) -> usize {
        match self {
            Self::Empty => 0,
            Self::Point(p) => {
                out.push((VertexId::new(first_part, 0, 0), *p));
                1
            }
            Self::LineString(points) => {
                push_ring(first_part, 0, points, out);
                1
            }
            Self::Polygon(polygon) => {
                push_polygon(first_part, polygon, out);
                1
            }
            Self::MultiPoint(points) => {
                for (i, p) in points.iter().enumerate() {
                    out.push((VertexId::new(first_part + i, 0, 0), *p));
                }
                points.len()
            }
            Self::MultiLineString(lines) => {
                for (i, line) in lines.iter().enumerate() {
                    push_ring(first_part + i, 0, line, out);
                }
                lines.len()
            }
            Self::MultiPolygon(polygons) => {
                for (i, polygon) in polygons.iter().enumerate() {
                    push_polygon(first_part + i, polygon, out);
                }
                polygons.len()
            }
            Self::Collection(members) => members
                .iter()
                .fold(0, |parts, member| parts + member.collect_vertices(first_part + parts, out)),
        }
    }
}

fn push_polygon(part: usize, polygon: &Polygon, out: &mut Vec<(VertexId, Point3)>) {
    for (ring, points) in polygon.rings().enumerate() {
        push_ring(part, ring, points, out);
    }
}

fn push_ring(part: usize, ring: usize, points: &[Point3], out: &mut Vec<(VertexId, Point3)>) {
    out.extend(
        points
            .iter()
            .enumerate()
            .map(|(vertex, p)| (VertexId::new(part, ring, vertex), *p)),
    );
}
