use super::Point3;

/// Returns the midpoint of the segment from `a` to `b`.
#[must_use]
pub fn midpoint(a: &Point3, b: &Point3) -> Point3 {
    nalgebra::center(a, b)
}

/// Returns a point beyond `anchor`, on the opposite side from `mid`.
///
/// The result sits at half the distance between `anchor` and `mid`:
/// `anchor - (mid - anchor) / 2`. With `mid` being the midpoint of the
/// segment ending at `anchor`, this places a point a quarter segment
/// length past the open end of a line.
#[must_use]
pub fn extend_beyond(anchor: &Point3, mid: &Point3) -> Point3 {
    anchor - (mid - anchor) / 2.0
}
