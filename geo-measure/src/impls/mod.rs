//! Simple implementations of the geometry traits of the crate.

mod polygon;
mod polyline;
mod view;

pub use polygon::Polygon;
pub use polyline::Polyline;
pub use view::{PolygonRef, PolylineRef};
