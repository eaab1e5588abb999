//! Axis aligned rectangles and bounding box calculation.

use crate::error::{GeoMeasureError, Result};
use crate::point::{GeoPoint, LonLat};
use serde::{Deserialize, Serialize};

/// Axis aligned rectangle in longitude/latitude space.
///
/// Rectangles produced by [`Rect::from_points`] always have `south_west` coordinates not greater than the `north_east`
/// ones. A rectangle constructed with inverted corners does not contain any point.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Corner with minimum longitude and latitude.
    pub south_west: LonLat,
    /// Corner with maximum longitude and latitude.
    pub north_east: LonLat,
}

impl Rect {
    /// Creates a new rectangle from its corners.
    pub fn new(south_west: LonLat, north_east: LonLat) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Minimum longitude.
    pub fn lon_min(&self) -> f64 {
        self.south_west.lon()
    }

    /// Maximum longitude.
    pub fn lon_max(&self) -> f64 {
        self.north_east.lon()
    }

    /// Minimum latitude.
    pub fn lat_min(&self) -> f64 {
        self.south_west.lat()
    }

    /// Maximum latitude.
    pub fn lat_max(&self) -> f64 {
        self.north_east.lat()
    }

    /// Extent along longitude axis in degrees.
    pub fn width(&self) -> f64 {
        self.lon_max() - self.lon_min()
    }

    /// Extent along latitude axis in degrees.
    pub fn height(&self) -> f64 {
        self.lat_max() - self.lat_min()
    }

    /// Middle point of the rectangle in longitude/latitude space.
    pub fn center(&self) -> LonLat {
        LonLat::new(
            (self.lon_min() + self.lon_max()) / 2.0,
            (self.lat_min() + self.lat_max()) / 2.0,
        )
    }

    /// Degenerate rectangle containing only the given point.
    pub fn from_point(p: &(impl GeoPoint + ?Sized)) -> Self {
        let corner = LonLat::from_point(p);
        Self {
            south_west: corner,
            north_east: corner,
        }
    }

    /// Smallest rectangle containing all the `points`.
    ///
    /// Returns [`GeoMeasureError::InvalidInput`] if the iterator is empty.
    pub fn from_points<'a, P: GeoPoint + 'a>(points: impl IntoIterator<Item = &'a P>) -> Result<Self> {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            log::debug!("Bounding rectangle requested for an empty point sequence");
            return Err(GeoMeasureError::InvalidInput(
                "cannot calculate bounding rectangle of an empty point sequence".to_string(),
            ));
        };

        let mut lon_min = first.lon();
        let mut lat_min = first.lat();
        let mut lon_max = first.lon();
        let mut lat_max = first.lat();

        for p in points {
            lon_min = lon_min.min(p.lon());
            lat_min = lat_min.min(p.lat());
            lon_max = lon_max.max(p.lon());
            lat_max = lat_max.max(p.lat());
        }

        Ok(Self {
            south_west: LonLat::new(lon_min, lat_min),
            north_east: LonLat::new(lon_max, lat_max),
        })
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            south_west: LonLat::new(
                self.lon_min().min(other.lon_min()),
                self.lat_min().min(other.lat_min()),
            ),
            north_east: LonLat::new(
                self.lon_max().max(other.lon_max()),
                self.lat_max().max(other.lat_max()),
            ),
        }
    }

    /// Returns true if the point lies inside the rectangle or on its border.
    ///
    /// Raw coordinates are compared, no normalization is applied.
    pub fn contains(&self, point: &(impl GeoPoint + ?Sized)) -> bool {
        point.lon() >= self.lon_min()
            && point.lon() <= self.lon_max()
            && point.lat() >= self.lat_min()
            && point.lat() <= self.lat_max()
    }
}
