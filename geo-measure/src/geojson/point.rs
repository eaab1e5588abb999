use geojson::Position;

use crate::error::GeoMeasureError;
use crate::point::{GeoPoint, NewGeoPoint};

/// GeoJSON position with at least two coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonPoint(Position);

impl TryFrom<Position> for GeoJsonPoint {
    type Error = GeoMeasureError;

    fn try_from(value: Position) -> Result<Self, Self::Error> {
        if value.len() < 2 {
            Err(GeoMeasureError::Conversion(
                "point must contain at least 2 dimensions".to_string(),
            ))
        } else {
            Ok(GeoJsonPoint(value))
        }
    }
}

impl GeoPoint for GeoJsonPoint {
    fn lat(&self) -> f64 {
        self.0[1]
    }

    fn lon(&self) -> f64 {
        self.0[0]
    }
}

impl NewGeoPoint for GeoJsonPoint {
    fn lonlat(lon: f64, lat: f64) -> Self {
        Self(vec![lon, lat])
    }
}
