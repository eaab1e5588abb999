use geo_types::{coord, Coord};

use crate::point::{GeoPoint, NewGeoPoint};

impl GeoPoint for Coord<f64> {
    fn lat(&self) -> f64 {
        self.y
    }

    fn lon(&self) -> f64 {
        self.x
    }
}

impl NewGeoPoint for Coord<f64> {
    fn lonlat(lon: f64, lat: f64) -> Self {
        coord!(x: lon, y: lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance;
    use crate::normalize::normalized;

    #[test]
    fn coord_as_point() {
        let c = coord!(x: 82.0, y: 22.0);
        assert_eq!(c.lon(), 82.0);
        assert_eq!(c.lat(), 22.0);
        assert_eq!(distance(&c, &crate::LonLat::new(82.0, 22.0)), 0.0);

        let corrected: Coord<f64> = normalized(&coord!(x: 190.0, y: 80.0));
        assert_eq!(corrected, coord!(x: -170.0, y: 74.0));
    }
}
