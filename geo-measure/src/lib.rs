//! Distances, containment predicates, lengths and areas for geographic coordinates.
//!
//! All calculations assume a spherical Earth with radius [`EARTH_RADIUS`](constants::EARTH_RADIUS). Coordinates are
//! longitude and latitude in degrees. Any type implementing [`GeoPoint`] can be used as a point; [`LonLat`] is the
//! default implementation.
//!
//! ```
//! use geo_measure::{lonlat, GeoContour, GeoPolygon, Polygon, Polyline};
//!
//! let ring = vec![
//!     lonlat!(116.395, 39.910),
//!     lonlat!(116.394, 39.918),
//!     lonlat!(116.396, 39.919),
//!     lonlat!(116.404, 39.920),
//!     lonlat!(116.406, 39.913),
//! ];
//!
//! let polygon = Polygon::new(ring.clone());
//! assert!(polygon.contains_point(&lonlat!(116.4, 39.915)));
//! assert!((polygon.area() - 810876.6).abs() < 0.1);
//!
//! let polyline = Polyline::new(ring);
//! assert!(polyline.length() > 2_000.0);
//! ```

pub mod angle;
pub mod area;
pub mod constants;
pub mod contour;
pub mod impls;
pub mod normalize;

mod circle;
mod distance;
mod error;
mod ops;
mod point;
mod polygon;
mod polyline;
mod rect;
mod segment;

#[cfg(feature = "geo-types")]
mod geo_types;

#[cfg(feature = "geojson")]
pub mod geojson;

pub use angle::{degrees_to_radians, radians_to_degrees};
pub use circle::Circle;
pub use contour::{ClosedContour, Contour};
pub use distance::distance;
pub use error::{GeoMeasureError, Result};
pub use impls::{Polygon, PolygonRef, Polyline, PolylineRef};
pub use ops::{
    bounds, equals, point_in_circle, point_in_polygon, point_in_rect, point_on_polyline,
    polygon_area, polyline_length,
};
pub use point::{GeoPoint, LonLat, NewGeoPoint};
pub use polygon::GeoPolygon;
pub use polyline::GeoContour;
pub use rect::Rect;
pub use segment::Segment;
