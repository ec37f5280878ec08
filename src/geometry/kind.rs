use super::Polygon;
use crate::math::Point3;

/// Coarse classification of a geometry, shared by single and multi variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeometryType {
    Point,
    Line,
    Polygon,
    #[default]
    Null,
    Unknown,
}

impl GeometryType {
    /// Minimum number of vertices a geometry of this type must keep.
    ///
    /// `None` means vertices can never be removed.
    #[must_use]
    pub fn min_vertex_count(self) -> Option<usize> {
        match self {
            Self::Line => Some(2),
            Self::Polygon => Some(3),
            Self::Point | Self::Null | Self::Unknown => None,
        }
    }
}

/// A planar geometry value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Geometry {
    #[default]
    Empty,
    Point(Point3),
    LineString(Vec<Point3>),
    Polygon(Polygon),
    MultiPoint(Vec<Point3>),
    MultiLineString(Vec<Vec<Point3>>),
    MultiPolygon(Vec<Polygon>),
    Collection(Vec<Geometry>),
}

impl Geometry {
    /// Creates a polygon geometry from a single exterior ring.
    #[must_use]
    pub fn polygon(exterior: Vec<Point3>) -> Self {
        Self::Polygon(Polygon::new(exterior, Vec::new()))
    }

    /// Returns the type classification of this geometry.
    #[must_use]
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Empty => GeometryType::Null,
            Self::Point(_) | Self::MultiPoint(_) => GeometryType::Point,
            Self::LineString(_) | Self::MultiLineString(_) => GeometryType::Line,
            Self::Polygon(_) | Self::MultiPolygon(_) => GeometryType::Polygon,
            Self::Collection(_) => GeometryType::Unknown,
        }
    }

    /// Returns `true` if the geometry is made of more than one part or ring.
    ///
    /// Multi variants and collections always count as multi-part, whatever
    /// their member count. A polygon with interior rings counts as well.
    #[must_use]
    pub fn is_multi_part(&self) -> bool {
        match self {
            Self::Empty | Self::Point(_) | Self::LineString(_) => false,
            Self::Polygon(polygon) => !polygon.interiors().is_empty(),
            Self::MultiPoint(_)
            | Self::MultiLineString(_)
            | Self::MultiPolygon(_)
            | Self::Collection(_) => true,
        }
    }

    /// Returns a copy of this geometry with `f` applied to every point.
    #[must_use]
    pub fn map_points(&self, f: impl Fn(&Point3) -> Point3) -> Self {
        self.map_points_ref(&f)
    }

    fn map_points_ref(&self, f: &impl Fn(&Point3) -> Point3) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Point(p) => Self::Point(f(p)),
            Self::LineString(points) => Self::LineString(points.iter().map(f).collect()),
            Self::Polygon(polygon) => Self::Polygon(polygon.map_points(f)),
            Self::MultiPoint(points) => Self::MultiPoint(points.iter().map(f).collect()),
            Self::MultiLineString(lines) => Self::MultiLineString(
                lines
                    .iter()
                    .map(|line| line.iter().map(f).collect())
                    .collect(),
            ),
            Self::MultiPolygon(polygons) => {
                Self::MultiPolygon(polygons.iter().map(|poly| poly.map_points(f)).collect())
            }
            Self::Collection(members) => {
                Self::Collection(members.iter().map(|g| g.map_points_ref(f)).collect())
            }
        }
    }
}
