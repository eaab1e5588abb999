use serde::{Deserialize, Serialize};

use crate::contour::ClosedContour;
use crate::impls::Polyline;
use crate::point::GeoPoint;

/// Polygon given by its boundary ring.
///
/// The last point is implicitly connected to the first one and should not duplicate it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Polygon<P> {
    /// Points of the boundary ring.
    pub points: Vec<P>,
}

impl<P> Polygon<P> {
    /// Creates a new polygon.
    pub fn new(points: Vec<P>) -> Self {
        Self { points }
    }

    /// Points of the boundary ring.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Converts the polygon into an open polyline with the same points.
    pub fn into_polyline(self) -> Polyline<P> {
        Polyline::new(self.points)
    }
}

impl<P: GeoPoint> ClosedContour for Polygon<P> {
    type Point = P;

    fn points(&self) -> &[P] {
        &self.points
    }
}

impl<P> From<Vec<P>> for Polygon<P> {
    fn from(points: Vec<P>) -> Self {
        Self::new(points)
    }
}

impl<P> From<Polyline<P>> for Polygon<P> {
    fn from(polyline: Polyline<P>) -> Self {
        polyline.into_polygon()
    }
}

impl<P> FromIterator<P> for Polygon<P> {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
