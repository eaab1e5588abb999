//! Great circle distance on the spherical Earth model.

use crate::constants::EARTH_RADIUS;
use crate::normalize::normalized;
use crate::point::{GeoPoint, LonLat};

/// Great circle distance between two points in meters, calculated with the spherical law of cosines.
///
/// Both points are normalized first (see [`crate::normalize`]): longitude is wrapped into `[-180, 180]` and latitude
/// is clamped into `[-74, 74]`. The input points are not modified.
///
/// ```
/// use geo_measure::{distance, LonLat};
///
/// let a = LonLat::new(82.0, 22.0);
/// assert!(distance(&a, &a) < 1e-3);
/// ```
pub fn distance<A, B>(p1: &A, p2: &B) -> f64
where
    A: GeoPoint + ?Sized,
    B: GeoPoint + ?Sized,
{
    let p1: LonLat = normalized(p1);
    let p2: LonLat = normalized(p2);

    if p1.lon() == p2.lon() && p1.lat() == p2.lat() {
        return 0.0;
    }

    let x1 = p1.lon_rad();
    let y1 = p1.lat_rad();
    let x2 = p2.lon_rad();
    let y2 = p2.lat_rad();

    // Rounding can push the cosine slightly out of [-1, 1] for nearly identical points.
    let cos = (y1.sin() * y2.sin() + y1.cos() * y2.cos() * (x2 - x1).cos()).clamp(-1.0, 1.0);
    EARTH_RADIUS * cos.acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::degrees_to_radians;
    use approx::assert_relative_eq;

    #[test]
    fn same_point() {
        let p = LonLat::new(82.0, 22.0);
        assert_eq!(distance(&p, &p), 0.0);
        assert_eq!(distance(&p, &LonLat::new(442.0, 22.0)), 0.0);
        assert_eq!(distance(&LonLat::new(0.0, 80.0), &LonLat::new(0.0, 89.0)), 0.0);
        assert!(!distance(&p, &LonLat::new(82.0, 22.0 + 1e-12)).is_nan());
    }

    #[test]
    fn latitude_is_clamped() {
        let p1 = LonLat::new(82.0, 22.0);
        let p3 = LonLat::new(82.0, 102.0);
        let d = distance(&p3, &p1);
        assert_relative_eq!(d, 5.782133290364891e6, max_relative = 1e-9);
        assert_relative_eq!(d, distance(&p1, &LonLat::new(82.0, 74.0)));
        assert_eq!(p3.lat(), 102.0);
    }

    #[test]
    fn along_meridian() {
        let d = distance(&LonLat::new(10.0, 0.0), &LonLat::new(10.0, 1.0));
        assert_relative_eq!(d, EARTH_RADIUS * degrees_to_radians(1.0), max_relative = 1e-9);
    }

    #[test]
    fn longitude_is_wrapped() {
        let a = LonLat::new(179.5, 10.0);
        let b = LonLat::new(-179.5, 10.0);
        let wrapped = LonLat::new(180.5, 10.0);
        assert_relative_eq!(distance(&a, &wrapped), distance(&a, &b), max_relative = 1e-6);
        assert!(distance(&a, &b) < 120_000.0);
    }

    #[test]
    fn trait_method() {
        let a = LonLat::new(116.300306, 40.059295);
        let b = LonLat::new(116.310906, 40.059019);
        assert_eq!(a.distance(&b), distance(&a, &b));
    }
}
