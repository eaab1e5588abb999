//! Straight line segments between two points.

use crate::constants::POINT_EPSILON;
use crate::point::GeoPoint;

/// A straight line segment between two points in longitude/latitude space.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P: GeoPoint> Segment<'_, P> {
    /// Returns true if the point lies inside the bounding rectangle of the segment (borders included).
    pub fn envelope_contains(&self, point: &(impl GeoPoint + ?Sized)) -> bool {
        let (a, b) = (self.0, self.1);
        point.lon() >= a.lon().min(b.lon())
            && point.lon() <= a.lon().max(b.lon())
            && point.lat() >= a.lat().min(b.lat())
            && point.lat() <= a.lat().max(b.lat())
    }

    /// Cross product of the vectors from `point` to the ends of the segment. Zero value means that the point is
    /// collinear with the segment.
    pub fn cross_product(&self, point: &(impl GeoPoint + ?Sized)) -> f64 {
        let (a, b) = (self.0, self.1);
        (a.lon() - point.lon()) * (b.lat() - point.lat())
            - (b.lon() - point.lon()) * (a.lat() - point.lat())
    }

    /// Returns true if the point lies on the segment.
    ///
    /// The point must be inside the segment's envelope and its cross product with the segment must be closer to
    /// zero than [`POINT_EPSILON`].
    pub fn contains_point(&self, point: &(impl GeoPoint + ?Sized)) -> bool {
        self.envelope_contains(point) && self.cross_product(point).abs() < POINT_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::LonLat;

    #[test]
    fn contains_point() {
        let a = LonLat::new(0.0, 0.0);
        let b = LonLat::new(2.0, 1.0);
        let segment = Segment(&a, &b);

        assert!(segment.contains_point(&a));
        assert!(segment.contains_point(&b));
        assert!(segment.contains_point(&LonLat::new(1.0, 0.5)));
        assert!(!segment.contains_point(&LonLat::new(1.0, 0.6)));
        assert!(!segment.contains_point(&LonLat::new(4.0, 2.0)));
        assert!(!segment.contains_point(&LonLat::new(-2.0, -1.0)));
    }

    #[test]
    fn axis_aligned() {
        let a = LonLat::new(10.0, 5.0);
        let b = LonLat::new(10.0, -5.0);
        let segment = Segment(&a, &b);

        assert!(segment.contains_point(&LonLat::new(10.0, 0.0)));
        assert!(!segment.contains_point(&LonLat::new(10.0 + 1e-9, 0.0)));
        assert!(!segment.contains_point(&LonLat::new(10.0, 5.5)));
    }

    #[test]
    fn cross_product_sign() {
        let a = LonLat::new(0.0, 0.0);
        let b = LonLat::new(1.0, 0.0);
        let segment = Segment(&a, &b);

        assert_eq!(segment.cross_product(&LonLat::new(0.5, 0.0)), 0.0);
        assert!(segment.cross_product(&LonLat::new(0.5, 1.0)) > 0.0);
        assert!(segment.cross_product(&LonLat::new(0.5, -1.0)) < 0.0);
    }
}
