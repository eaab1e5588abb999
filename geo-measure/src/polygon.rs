//! Point-in-polygon test and area of polygons.

use crate::area::ring_area;
use crate::constants::POINT_EPSILON;
use crate::contour::ClosedContour;
use crate::point::GeoPoint;
use crate::rect::Rect;

/// Polygon in geographic coordinates. This trait is auto-implemented for all closed contours.
pub trait GeoPolygon: ClosedContour {
    /// Returns true if the `point` lies inside the polygon, on one of its sides or in one of its vertices.
    ///
    /// Points outside of the bounding box of the polygon are rejected right away. The rest are checked by casting a
    /// ray from the point along its latitude towards the east and counting the sides the ray crosses. Raw
    /// coordinates are compared, no normalization is applied. An empty polygon does not contain any point.
    fn contains_point(&self, point: &(impl GeoPoint + ?Sized)) -> bool {
        let points = ClosedContour::points(self);
        if points.is_empty() {
            return false;
        }

        match Rect::from_points(points) {
            Ok(bounds) if bounds.contains(point) => {}
            _ => return false,
        }

        let count = points.len();
        let mut crossings = 0;
        for i in 0..count {
            let from = &points[i];
            if point.equals(from) {
                return true;
            }

            let to = &points[(i + 1) % count];
            let after = &points[(i + 2) % count];
            match cast_ray(point, from, to, after) {
                RayCrossing::Boundary => return true,
                RayCrossing::Crossings(n) => crossings += n,
            }
        }

        crossings % 2 == 1
    }

    /// Area of the polygon on the spherical Earth model in square meters.
    ///
    /// Polygons with less than 3 points have zero area. The result does not depend on the winding direction of the
    /// polygon. Self-intersecting polygons are not supported. See [`crate::area`] for the details of the algorithm.
    fn area(&self) -> f64 {
        ring_area(ClosedContour::points(self))
    }
}

impl<T: ClosedContour> GeoPolygon for T {}

/// Interaction of a ray cast from a point towards the east with one side of a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RayCrossing {
    /// The point lies on the side.
    Boundary,
    /// Number of times the ray crosses the side.
    Crossings(usize),
}

/// Checks the ray from `point` against the side `from`-`to`. `after` is the vertex following `to` in the ring, it is
/// needed when the ray passes exactly through `to`.
fn cast_ray(
    point: &(impl GeoPoint + ?Sized),
    from: &impl GeoPoint,
    to: &impl GeoPoint,
    after: &impl GeoPoint,
) -> RayCrossing {
    let (lon, lat) = (point.lon(), point.lat());
    let lat_min = from.lat().min(to.lat());
    let lat_max = from.lat().max(to.lat());

    if lat < lat_min || lat > lat_max {
        return RayCrossing::Crossings(0);
    }

    if lat > lat_min && lat < lat_max {
        if lon > from.lon().max(to.lon()) {
            return RayCrossing::Crossings(0);
        }

        if from.lat() == to.lat() && lon >= from.lon().min(to.lon()) {
            return RayCrossing::Boundary;
        }

        if from.lon() == to.lon() {
            return if from.lon() == lon {
                RayCrossing::Boundary
            } else {
                RayCrossing::Crossings(1)
            };
        }

        let x_intersect =
            (lat - from.lat()) * (to.lon() - from.lon()) / (to.lat() - from.lat()) + from.lon();
        if (lon - x_intersect).abs() < POINT_EPSILON {
            return RayCrossing::Boundary;
        }

        return RayCrossing::Crossings(if lon < x_intersect { 1 } else { 0 });
    }

    // The ray passes through an end of the side. Passing through `to` counts as one crossing if `from` and `after`
    // are on different sides of the ray, and as two otherwise.
    if lat == to.lat() && lon <= to.lon() {
        let lat_min = from.lat().min(after.lat());
        let lat_max = from.lat().max(after.lat());
        if lat >= lat_min && lat <= lat_max {
            RayCrossing::Crossings(1)
        } else {
            RayCrossing::Crossings(2)
        }
    } else {
        RayCrossing::Crossings(0)
    }
}
