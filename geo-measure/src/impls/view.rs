use crate::contour::{ClosedContour, Contour};
use crate::point::GeoPoint;

/// Open contour borrowing its points from a slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylineRef<'a, P>(pub &'a [P]);

/// Closed contour borrowing its points from a slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonRef<'a, P>(pub &'a [P]);

impl<P: GeoPoint> Contour for PolylineRef<'_, P> {
    type Point = P;

    fn points(&self) -> &[P] {
        self.0
    }

    fn is_closed(&self) -> bool {
        false
    }
}

impl<P: GeoPoint> ClosedContour for PolygonRef<'_, P> {
    type Point = P;

    fn points(&self) -> &[P] {
        self.0
    }
}
