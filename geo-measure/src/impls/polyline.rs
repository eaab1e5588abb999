use serde::{Deserialize, Serialize};

use crate::contour::Contour;
use crate::impls::Polygon;
use crate::point::GeoPoint;

/// Open sequence of points. The order of the points defines how they are connected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Polyline<P> {
    points: Vec<P>,
}

impl<P> Polyline<P> {
    /// Creates a new polyline.
    pub fn new(points: Vec<P>) -> Self {
        Self { points }
    }

    /// Points of the polyline.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Consumes the polyline returning its points.
    pub fn into_points(self) -> Vec<P> {
        self.points
    }

    /// Converts the polyline into a polygon with the same points. The last point becomes connected to the first one.
    pub fn into_polygon(self) -> Polygon<P> {
        Polygon::new(self.points)
    }
}

impl<P: GeoPoint> Contour for Polyline<P> {
    type Point = P;

    fn points(&self) -> &[P] {
        &self.points
    }

    fn is_closed(&self) -> bool {
        false
    }
}

impl<P> From<Vec<P>> for Polyline<P> {
    fn from(points: Vec<P>) -> Self {
        Self::new(points)
    }
}

impl<P> FromIterator<P> for Polyline<P> {
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
