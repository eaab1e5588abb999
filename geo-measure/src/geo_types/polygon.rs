use geo_types::{Coord, Polygon};

use crate::contour::ClosedContour;

/// Only the exterior ring of the polygon is used, interior rings are ignored.
impl ClosedContour for Polygon<f64> {
    type Point = Coord<f64>;

    fn points(&self) -> &[Coord<f64>] {
        let ring = &self.exterior().0;
        if self.exterior().is_closed() {
            &ring[..(ring.len().max(1) - 1)]
        } else {
            ring
        }
    }
}
