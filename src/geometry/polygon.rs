use crate::math::Point3;

/// A planar polygon: one exterior ring and any number of interior rings.
///
/// Rings are stored closed, i.e. the last point repeats the first.
/// [`Polygon::new`] closes open rings.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: Vec<Point3>,
    interiors: Vec<Vec<Point3>>,
}

impl Polygon {
    /// Creates a polygon, closing every ring that is not already closed.
    #[must_use]
    pub fn new(exterior: Vec<Point3>, interiors: Vec<Vec<Point3>>) -> Self {
        Self {
            exterior: close_ring(exterior),
            interiors: interiors.into_iter().map(close_ring).collect(),
        }
    }

    /// Returns the closed exterior ring.
    #[must_use]
    pub fn exterior(&self) -> &[Point3] {
        &self.exterior
    }

    /// Returns the closed interior rings.
    #[must_use]
    pub fn interiors(&self) -> &[Vec<Point3>] {
        &self.interiors
    }

    /// Iterates over all rings, exterior first.
    pub fn rings(&self) -> impl Iterator<Item = &[Point3]> {
        std::iter::once(self.exterior.as_slice()).chain(self.interiors.iter().map(Vec::as_slice))
    }

    pub(crate) fn map_points(&self, f: &impl Fn(&Point3) -> Point3) -> Self {
        Self {
            exterior: self.exterior.iter().map(f).collect(),
            interiors: self
                .interiors
                .iter()
                .map(|ring| ring.iter().map(f).collect())
                .collect(),
        }
    }
}

fn close_ring(mut ring: Vec<Point3>) -> Vec<Point3> {
    if let (Some(first), Some(last)) = (ring.first(), ring.last()) {
        if first != last {
            ring.push(*first);
        }
    }
    ring
}
