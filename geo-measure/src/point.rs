//! Points in geographic coordinates.
//!
//! Every operation of the crate accepts any type implementing [`GeoPoint`], so points from other geometry libraries
//! can be used directly. [`LonLat`] is the simple implementation provided by the crate.

use crate::angle::degrees_to_radians;
use crate::constants::POINT_EPSILON;
use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

/// A point on the surface of the Earth given by longitude and latitude in degrees.
pub trait GeoPoint {
    /// Latitude in degrees.
    fn lat(&self) -> f64;
    /// Longitude in degrees.
    fn lon(&self) -> f64;

    /// Latitude in radians.
    fn lat_rad(&self) -> f64 {
        degrees_to_radians(self.lat())
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> f64 {
        degrees_to_radians(self.lon())
    }

    /// Returns true if both coordinates of the points differ by no more than [`POINT_EPSILON`].
    fn equals(&self, other: &(impl GeoPoint + ?Sized)) -> bool {
        (self.lat() - other.lat()).abs() <= POINT_EPSILON
            && (self.lon() - other.lon()).abs() <= POINT_EPSILON
    }

    /// Great circle distance to the `other` point in meters. See [`crate::distance()`].
    fn distance(&self, other: &(impl GeoPoint + ?Sized)) -> f64 {
        crate::distance::distance(self, other)
    }
}

/// Geographic point type that can be constructed from coordinates.
pub trait NewGeoPoint: GeoPoint + Sized {
    /// Creates a point from longitude and latitude (in this order).
    fn lonlat(lon: f64, lat: f64) -> Self;

    /// Creates a point from latitude and longitude (in this order).
    fn latlon(lat: f64, lon: f64) -> Self {
        Self::lonlat(lon, lat)
    }
}

impl<T: GeoPoint + ?Sized> GeoPoint for &T {
    fn lat(&self) -> f64 {
        (*self).lat()
    }

    fn lon(&self) -> f64 {
        (*self).lon()
    }
}

/// Longitude/latitude pair in degrees.
///
/// Comparison with `==` is approximate, see [`GeoPoint::equals`].
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct LonLat {
    lon: f64,
    lat: f64,
}

impl LonLat {
    /// Creates a new point.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Creates a new point from the coordinates of another one.
    pub fn from_point(other: &(impl GeoPoint + ?Sized)) -> Self {
        Self {
            lon: other.lon(),
            lat: other.lat(),
        }
    }
}

impl GeoPoint for LonLat {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint for LonLat {
    fn lonlat(lon: f64, lat: f64) -> Self {
        Self::new(lon, lat)
    }
}

impl PartialEq for LonLat {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl AbsDiffEq for LonLat {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        POINT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lon.abs_diff_eq(&other.lon, epsilon) && self.lat.abs_diff_eq(&other.lat, epsilon)
    }
}

impl From<(f64, f64)> for LonLat {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

/// Creates a new [`LonLat`] from longitude and latitude values (in degrees).
///
/// ```
/// use geo_measure::{lonlat, GeoPoint};
///
/// let point = lonlat!(116.395, 39.91);
/// assert_eq!(point.lat(), 39.91);
/// ```
#[macro_export]
macro_rules! lonlat {
    ($lon:expr, $lat:expr) => {
        <$crate::LonLat as $crate::NewGeoPoint>::lonlat($lon, $lat)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn equality_is_approximate() {
        let p1 = LonLat::new(22.4, 22.3);
        assert_eq!(p1, LonLat::new(22.4, 22.3));
        assert_eq!(p1, LonLat::new(22.4 + 1e-10, 22.3 - 1e-10));
        assert_ne!(p1, LonLat::new(22.6, 22.3));
        assert_ne!(p1, LonLat::new(22.4, 22.3 + 1e-9));
    }

    #[test]
    fn equals_across_point_types() {
        let p = LonLat::new(1.0, 2.0);
        assert!(p.equals(&&p));
        assert!(!p.equals(&LonLat::new(2.0, 1.0)));
    }

    #[test]
    fn constructors_agree() {
        let a = LonLat::new(116.3, 40.05);
        assert_eq!(LonLat::latlon(40.05, 116.3), a);
        assert_eq!(lonlat!(116.3, 40.05), a);
        assert_eq!(LonLat::from((116.3, 40.05)), a);
        assert_eq!(LonLat::from_point(&a), a);
    }

    #[test]
    fn custom_epsilon() {
        let a = LonLat::new(10.0, 10.0);
        let b = LonLat::new(10.001, 9.999);
        assert_ne!(a, b);
        assert_abs_diff_eq!(a, b, epsilon = 0.01);
    }

    #[test]
    fn serialized_field_names() {
        let json = serde_json::to_value(LonLat::new(1.5, -2.5)).expect("serializable");
        assert_eq!(json, serde_json::json!({"lon": 1.5, "lat": -2.5}));
    }
}
