//! Measurements and predicates shared by all contours.

use crate::contour::Contour;
use crate::distance::distance;
use crate::error::Result;
use crate::point::GeoPoint;
use crate::rect::Rect;
use crate::segment::Segment;

/// Bounding box, length and point-on-line test for any [`Contour`]. This trait is auto-implemented for all
/// contours.
pub trait GeoContour: Contour {
    /// Smallest rectangle containing all the points of the contour.
    ///
    /// Returns [`GeoMeasureError::InvalidInput`](crate::GeoMeasureError::InvalidInput) for an empty contour.
    fn bounds(&self) -> Result<Rect> {
        Rect::from_points(self.iter_points())
    }

    /// Returns true if the point lies on one of the segments of the contour.
    ///
    /// Points outside of the bounding box of the contour are rejected without looking at individual segments. An
    /// empty contour does not contain any point.
    fn is_point_on_line(&self, point: &(impl GeoPoint + ?Sized)) -> bool {
        if self.points().is_empty() {
            return false;
        }

        match self.bounds() {
            Ok(bounds) if bounds.contains(point) => self
                .iter_segments()
                .any(|segment| segment.contains_point(point)),
            _ => false,
        }
    }

    /// Total length of the contour in meters, calculated with [`crate::distance()`].
    ///
    /// Contours with less than 2 points have zero length. For closed contours the closing segment is included, so
    /// the result is the perimeter.
    fn length(&self) -> f64 {
        self.iter_segments()
            .map(|Segment(from, to)| distance(from, to))
            .sum()
    }
}

impl<T: Contour> GeoContour for T {}
