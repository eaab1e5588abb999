//! Free function interface over point slices.
//!
//! These functions are thin wrappers around the trait methods of the crate, for callers that keep points in plain
//! slices. Slices are treated as open polylines by `polyline` functions and as closed rings by `polygon` functions.

use crate::circle::Circle;
use crate::error::Result;
use crate::impls::{PolygonRef, PolylineRef};
use crate::point::GeoPoint;
use crate::polygon::GeoPolygon;
use crate::polyline::GeoContour;
use crate::rect::Rect;

/// Returns true if the coordinates of the points differ by no more than
/// [`POINT_EPSILON`](crate::constants::POINT_EPSILON).
pub fn equals(a: &(impl GeoPoint + ?Sized), b: &(impl GeoPoint + ?Sized)) -> bool {
    a.equals(b)
}

/// Smallest rectangle containing all the points. Fails with
/// [`GeoMeasureError::InvalidInput`](crate::GeoMeasureError::InvalidInput) if `points` is empty.
pub fn bounds<P: GeoPoint>(points: &[P]) -> Result<Rect> {
    PolylineRef(points).bounds()
}

/// Returns true if the point lies inside the rectangle or on its border.
pub fn point_in_rect(point: &(impl GeoPoint + ?Sized), rect: &Rect) -> bool {
    rect.contains(point)
}

/// Returns true if the point is not further from the center of the circle than its radius.
pub fn point_in_circle(point: &(impl GeoPoint + ?Sized), circle: &Circle) -> bool {
    circle.contains(point)
}

/// Returns true if the point lies on the polyline.
pub fn point_on_polyline<P: GeoPoint>(point: &(impl GeoPoint + ?Sized), polyline: &[P]) -> bool {
    PolylineRef(polyline).is_point_on_line(point)
}

/// Returns true if the point lies inside the polygon ring, on its side or in its vertex.
pub fn point_in_polygon<P: GeoPoint>(point: &(impl GeoPoint + ?Sized), polygon: &[P]) -> bool {
    PolygonRef(polygon).contains_point(point)
}

/// Length of the polyline in meters. Zero for less than 2 points.
pub fn polyline_length<P: GeoPoint>(polyline: &[P]) -> f64 {
    PolylineRef(polyline).length()
}

/// Area of the polygon ring in square meters. Zero for less than 3 points.
pub fn polygon_area<P: GeoPoint>(polygon: &[P]) -> f64 {
    PolygonRef(polygon).area()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::LonLat;
    use crate::GeoMeasureError;

    #[test]
    fn empty_slices() {
        let empty: [LonLat; 0] = [];
        let p = LonLat::new(0.0, 0.0);
        assert!(matches!(bounds(&empty), Err(GeoMeasureError::InvalidInput(_))));
        assert!(!point_on_polyline(&p, &empty));
        assert!(!point_in_polygon(&p, &empty));
        assert_eq!(polyline_length(&empty), 0.0);
        assert_eq!(polygon_area(&empty), 0.0);
    }

    #[test]
    fn slice_is_open_for_polylines_and_closed_for_polygons() {
        let points = [
            LonLat::new(0.0, 0.0),
            LonLat::new(2.0, 2.0),
            LonLat::new(4.0, 0.0),
        ];
        let on_closing_side = LonLat::new(2.0, 0.0);
        assert!(!point_on_polyline(&on_closing_side, &points));
        assert!(point_in_polygon(&on_closing_side, &points));
    }

    #[test]
    fn wrappers() {
        let a = LonLat::new(80.0, 22.0);
        assert!(equals(&a, &LonLat::new(80.0, 22.0)));
        assert!(point_in_rect(&a, &Rect::from_point(&a)));
        assert!(point_in_circle(&a, &Circle::new(a, 0.0)));
    }
}
