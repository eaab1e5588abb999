use geo_types::{point, Point};

use crate::point::{GeoPoint, NewGeoPoint};

impl GeoPoint for Point<f64> {
    fn lat(&self) -> f64 {
        self.y()
    }

    fn lon(&self) -> f64 {
        self.x()
    }
}

impl NewGeoPoint for Point<f64> {
    fn lonlat(lon: f64, lat: f64) -> Self {
        point!(x: lon, y: lat)
    }
}
