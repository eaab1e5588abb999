//! Correction of raw coordinates into the canonical domain used by distance calculation.
//!
//! * longitude is *wrapped* into `[-180, 180]` by adding or subtracting full turns;
//! * latitude is *clamped* into `[-74, 74]`.
//!
//! Out of range values are never rejected, the correction is always applied.

use crate::constants::{LAT_LIMIT, LON_LIMIT};
use crate::point::{GeoPoint, LonLat, NewGeoPoint};

/// Number of full turns above which longitude is reduced with a remainder operation before the wrapping loop.
const MAX_WRAP_TURNS: f64 = 1024.0;

/// Wraps longitude into `[-180, 180]`. Values already inside the range (including both limits) are returned as is.
///
/// Non-finite values are returned unchanged.
pub fn wrap_longitude(lon: f64) -> f64 {
    if !lon.is_finite() {
        return lon;
    }

    let turn = 2.0 * LON_LIMIT;
    let mut lon = if lon.abs() > turn * MAX_WRAP_TURNS {
        lon % turn
    } else {
        lon
    };

    while lon > LON_LIMIT {
        lon -= turn;
    }
    while lon < -LON_LIMIT {
        lon += turn;
    }

    lon
}

/// Clamps latitude into `[-74, 74]`. `NaN` stays `NaN`.
pub fn clamp_latitude(lat: f64) -> f64 {
    lat.clamp(-LAT_LIMIT, LAT_LIMIT)
}

/// Returns a copy of the `point` with wrapped longitude and clamped latitude.
pub fn normalized<P: NewGeoPoint>(point: &(impl GeoPoint + ?Sized)) -> P {
    let lon = wrap_longitude(point.lon());
    let lat = clamp_latitude(point.lat());

    if lon != point.lon() || lat != point.lat() {
        log::trace!(
            "Coordinates ({}, {}) corrected to ({lon}, {lat})",
            point.lon(),
            point.lat()
        );
    }

    P::lonlat(lon, lat)
}

impl LonLat {
    /// Returns a copy of the point with coordinates corrected the same way as before distance calculation.
    pub fn normalized(&self) -> Self {
        normalized(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn longitude_is_wrapped() {
        assert_eq!(wrap_longitude(0.0), 0.0);
        assert_eq!(wrap_longitude(180.0), 180.0);
        assert_eq!(wrap_longitude(-180.0), -180.0);
        assert_eq!(wrap_longitude(190.0), -170.0);
        assert_eq!(wrap_longitude(-190.0), 170.0);
        assert_eq!(wrap_longitude(540.0), 180.0);
        assert_eq!(wrap_longitude(-900.0), -180.0);
        assert_abs_diff_eq!(wrap_longitude(116.395 + 720.0), 116.395, epsilon = 1e-10);
    }

    #[test]
    fn huge_longitude_terminates() {
        let lon = wrap_longitude(1e300);
        assert!((-180.0..=180.0).contains(&lon));
        let lon = wrap_longitude(-3.6e9 - 10.0);
        assert_abs_diff_eq!(lon, -10.0, epsilon = 1e-6);
    }

    #[test]
    fn non_finite_longitude() {
        assert!(wrap_longitude(f64::NAN).is_nan());
        assert_eq!(wrap_longitude(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn latitude_is_clamped() {
        assert_eq!(clamp_latitude(22.0), 22.0);
        assert_eq!(clamp_latitude(74.0), 74.0);
        assert_eq!(clamp_latitude(102.0), 74.0);
        assert_eq!(clamp_latitude(-89.9), -74.0);
        assert!(clamp_latitude(f64::NAN).is_nan());
    }

    #[test]
    fn normalized_copy() {
        let point = LonLat::new(200.0, -80.0);
        let corrected = point.normalized();
        assert_eq!(corrected, LonLat::new(-160.0, -74.0));
        assert_eq!(point, LonLat::new(200.0, -80.0));
    }
}
