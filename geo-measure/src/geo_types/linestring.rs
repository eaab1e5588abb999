use geo_types::{Coord, LineString};

use crate::contour::Contour;

impl Contour for LineString<f64> {
    type Point = Coord<f64>;

    fn points(&self) -> &[Coord<f64>] {
        if LineString::is_closed(self) {
            &self.0[..(self.0.len().max(1) - 1)]
        } else {
            &self.0
        }
    }

    fn is_closed(&self) -> bool {
        LineString::is_closed(self)
    }
}
