//! Circles on the surface of the Earth.

use crate::distance::distance;
use crate::error::{GeoMeasureError, Result};
use crate::point::{GeoPoint, LonLat};
use serde::{Deserialize, Serialize};

/// Set of points not further than `radius` meters (great circle distance) from the `center`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center of the circle.
    pub center: LonLat,
    /// Radius of the circle in meters.
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle. A circle with negative radius does not contain any point.
    pub fn new(center: LonLat, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Creates a new circle, returning [`GeoMeasureError::InvalidInput`] if the radius is negative or not finite.
    pub fn try_new(center: LonLat, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeoMeasureError::InvalidInput(format!(
                "circle radius must be a non-negative number of meters, got {radius}"
            )));
        }

        Ok(Self::new(center, radius))
    }

    /// Returns true if the distance between the point and the center of the circle does not exceed the radius.
    ///
    /// Distance is calculated with [`crate::distance()`], so both points are normalized before comparison.
    pub fn contains(&self, point: &(impl GeoPoint + ?Sized)) -> bool {
        distance(point, &self.center) <= self.radius
    }
}
