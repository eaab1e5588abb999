//! Contour is a sequence of points.
//!
//! Contours can be:
//! * **open** - the first and the last points are not connected. A [`Polyline`](crate::Polyline) is an open contour.
//! * **closed** - the last point is connected back to the first one. A [`Polygon`](crate::Polygon) is a closed
//!   contour.
//!
//! A closed contour does not repeat its first point at the end. The closing segment is produced by
//! [`Contour::iter_points_closing`] and [`Contour::iter_segments`] instead.

use crate::point::GeoPoint;
use crate::segment::Segment;

/// Sequence of points. See module level documentation for details.
pub trait Contour {
    /// Type of the points the contour consists of.
    type Point: GeoPoint;

    /// Points of the contour in order.
    fn points(&self) -> &[Self::Point];

    /// Whether the contour is closed.
    fn is_closed(&self) -> bool;

    /// Iterates over the points of the contour.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        self.points().iter()
    }

    /// Same as [`Contour::iter_points`], but for closed contours repeats the first point again at the end.
    fn iter_points_closing(&self) -> impl Iterator<Item = &'_ Self::Point> {
        let closing = if self.is_closed() {
            self.points().first()
        } else {
            None
        };
        self.points().iter().chain(closing)
    }

    /// Iterates over segments of the contour. For closed contours this includes the segment between the last and the
    /// first points.
    fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Self::Point>> {
        self.iter_points_closing()
            .zip(self.iter_points_closing().skip(1))
            .map(|(from, to)| Segment(from, to))
    }
}

/// A closed contour. Every closed contour is also a [`Contour`].
pub trait ClosedContour {
    /// Type of the points the contour consists of.
    type Point: GeoPoint;

    /// Points of the contour in order, without repeating the first point at the end.
    fn points(&self) -> &[Self::Point];
}

impl<P: GeoPoint, T: ClosedContour<Point = P>> Contour for T {
    type Point = P;

    fn points(&self) -> &[P] {
        ClosedContour::points(self)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
