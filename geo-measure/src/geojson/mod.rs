//! Conversion of [`geojson`] geometries into the geometries of the crate.
//!
//! GeoJSON positions are `[longitude, latitude, ...]`. Extra dimensions are ignored.

use geojson::{Geometry, Position, Value};

use crate::error::GeoMeasureError;
use crate::impls::{Polygon, Polyline};
use crate::point::{GeoPoint, LonLat};

mod point;

pub use point::GeoJsonPoint;

impl TryFrom<&Geometry> for LonLat {
    type Error = GeoMeasureError;

    fn try_from(geometry: &Geometry) -> Result<Self, Self::Error> {
        match &geometry.value {
            Value::Point(position) => convert_position(position),
            other => Err(unexpected_type("Point", other)),
        }
    }
}

impl TryFrom<&Geometry> for Polyline<LonLat> {
    type Error = GeoMeasureError;

    fn try_from(geometry: &Geometry) -> Result<Self, Self::Error> {
        match &geometry.value {
            Value::LineString(positions) => Ok(Polyline::new(convert_positions(positions)?)),
            other => Err(unexpected_type("LineString", other)),
        }
    }
}

/// Only the exterior ring of a GeoJSON polygon is converted. The closing position of the ring is dropped.
impl TryFrom<&Geometry> for Polygon<LonLat> {
    type Error = GeoMeasureError;

    fn try_from(geometry: &Geometry) -> Result<Self, Self::Error> {
        let Value::Polygon(rings) = &geometry.value else {
            return Err(unexpected_type("Polygon", &geometry.value));
        };
        let Some(exterior) = rings.first() else {
            return Err(GeoMeasureError::Conversion(
                "polygon must have an exterior ring".to_string(),
            ));
        };

        let mut points = convert_positions(exterior)?;
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        Ok(Polygon::new(points))
    }
}

fn convert_position(position: &Position) -> Result<LonLat, GeoMeasureError> {
    let point = GeoJsonPoint::try_from(position.clone())?;
    Ok(LonLat::new(point.lon(), point.lat()))
}

fn convert_positions(positions: &[Position]) -> Result<Vec<LonLat>, GeoMeasureError> {
    positions.iter().map(convert_position).collect()
}

fn unexpected_type(expected: &str, value: &Value) -> GeoMeasureError {
    let actual = match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    };
    GeoMeasureError::Conversion(format!("expected {expected} geometry, got {actual}"))
}
