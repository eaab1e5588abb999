//! Area of a polygon on the spherical Earth model.
//!
//! The area is found as the spherical excess of the polygon: the difference between the sum of its interior angles
//! and the sum of the interior angles of a planar polygon with the same number of vertices, `(N - 2)π`, multiplied by
//! the squared radius of the sphere.
//!
//! The angle at every vertex is measured between the neighbouring vertices projected onto the tangent plane at that
//! vertex. The projection does not tell whether the measured angle is the interior or the exterior one, so angles
//! are accumulated in two tallies by the turn direction at the vertex. Both possible interior sums are then computed
//! and the one consistent with the expected planar sum is chosen (see [`AngleSumCandidates`]).

use std::f64::consts::PI;

use nalgebra::Vector3;

use crate::constants::{AREA_SELECTION_THRESHOLD, EARTH_RADIUS};
use crate::point::GeoPoint;

/// Direction of the turn at a polygon vertex, relative to the outward direction at that vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnSide {
    /// Normal of the tangent angle points away from the center of the sphere.
    Positive,
    /// Normal of the tangent angle points towards the center of the sphere (or is degenerate).
    Negative,
}

impl TurnSide {
    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

/// Sum and number of vertex angles with the same turn side.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AngleTally {
    /// Sum of the angles in radians.
    pub sum: f64,
    /// Number of the angles.
    pub count: usize,
}

impl AngleTally {
    fn add(&mut self, angle: f64) {
        self.sum += angle;
        self.count += 1;
    }

    /// Sum of the explementary angles (`2π - angle`) of all the angles of the tally.
    fn explement_sum(&self) -> f64 {
        2.0 * PI * self.count as f64 - self.sum
    }
}

/// Two candidates for the sum of interior angles of a polygon.
///
/// The `positive` candidate treats angles at positive turns as interior and angles at negative turns as exterior,
/// the `negative` candidate does the opposite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSumCandidates {
    /// Interior angle sum if the positive turns are the interior ones.
    pub positive: f64,
    /// Interior angle sum if the negative turns are the interior ones.
    pub negative: f64,
    /// Side with the larger raw angle sum. Its candidate is checked first.
    pub preferred: TurnSide,
}

impl AngleSumCandidates {
    /// Builds the candidates from the angle tallies of both turn sides.
    pub fn new(positive: AngleTally, negative: AngleTally) -> Self {
        Self {
            positive: positive.sum + negative.explement_sum(),
            negative: positive.explement_sum() + negative.sum,
            preferred: if positive.sum > negative.sum {
                TurnSide::Positive
            } else {
                TurnSide::Negative
            },
        }
    }

    /// Candidate sum for the given side.
    pub fn candidate(&self, side: TurnSide) -> f64 {
        match side {
            TurnSide::Positive => self.positive,
            TurnSide::Negative => self.negative,
        }
    }

    /// Chooses the interior angle sum.
    ///
    /// The preferred candidate is taken if it exceeds the `planar_sum` by less than [`AREA_SELECTION_THRESHOLD`],
    /// otherwise the other candidate is taken.
    pub fn resolve(&self, planar_sum: f64) -> (TurnSide, f64) {
        let preferred = self.candidate(self.preferred);
        if preferred - planar_sum < AREA_SELECTION_THRESHOLD {
            return (self.preferred, preferred);
        }

        let fallback = self.preferred.opposite();
        log::debug!(
            "Angle sum {preferred} of {:?} turns is too far from planar sum {planar_sum}, using {:?} turns",
            self.preferred,
            fallback
        );
        (fallback, self.candidate(fallback))
    }
}

/// Area of the polygon with the given boundary ring in square meters.
///
/// Rings with less than 3 points have zero area. Self-intersecting rings are not supported. Coordinates are used as
/// is, without normalization.
pub(crate) fn ring_area<P: GeoPoint>(points: &[P]) -> f64 {
    let count = points.len();
    if count < 3 {
        return 0.0;
    }

    let mut positive = AngleTally::default();
    let mut negative = AngleTally::default();

    for i in 0..count {
        let low = &points[(i + count - 1) % count];
        let middle = &points[i];
        let high = &points[(i + 1) % count];

        let (side, angle) = vertex_angle(low, middle, high);
        match side {
            TurnSide::Positive => positive.add(angle),
            TurnSide::Negative => negative.add(angle),
        }
    }

    let planar_sum = (count - 2) as f64 * PI;
    let (_, sum) = AngleSumCandidates::new(positive, negative).resolve(planar_sum);

    (sum - planar_sum) * EARTH_RADIUS * EARTH_RADIUS
}

/// Angle at the `middle` vertex between the directions to `low` and `high` in the tangent plane, and the turn side
/// of the vertex.
fn vertex_angle(
    low: &impl GeoPoint,
    middle: &impl GeoPoint,
    high: &impl GeoPoint,
) -> (TurnSide, f64) {
    let m = unit_vector(middle);
    let l = tangent(&m, &unit_vector(low));
    let h = tangent(&m, &unit_vector(high));

    let cos = (h.dot(&l) / (h.norm() * l.norm())).clamp(-1.0, 1.0);
    let angle = cos.acos();

    let normal = h.cross(&l);
    let orientation = if m.x != 0.0 {
        normal.x / m.x
    } else if m.y != 0.0 {
        normal.y / m.y
    } else {
        normal.z / m.z
    };

    let side = if orientation > 0.0 {
        TurnSide::Positive
    } else {
        TurnSide::Negative
    };

    (side, angle)
}

fn unit_vector(point: &impl GeoPoint) -> Vector3<f64> {
    let lon = point.lon_rad();
    let lat = point.lat_rad();
    Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
}

/// Vector from `m` to the projection of `x` onto the plane tangent to the sphere at `m`, along the line through the
/// center of the sphere.
fn tangent(m: &Vector3<f64>, x: &Vector3<f64>) -> Vector3<f64> {
    let k = m.dot(m) / m.dot(x);
    x * k - m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::LonLat;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn beijing_block() -> Vec<LonLat> {
        vec![
            LonLat::new(116.395, 39.910),
            LonLat::new(116.394, 39.918),
            LonLat::new(116.396, 39.919),
            LonLat::new(116.404, 39.920),
            LonLat::new(116.406, 39.913),
        ]
    }

    #[test]
    fn known_area() {
        assert_abs_diff_eq!(ring_area(&beijing_block()), 810876.60, epsilon = 0.1);
    }

    #[test]
    fn winding_does_not_matter() {
        let mut points = beijing_block();
        let forward = ring_area(&points);
        points.reverse();
        assert_relative_eq!(ring_area(&points), forward, max_relative = 1e-6);
        assert!(ring_area(&points) > 0.0);
    }

    #[test]
    fn degenerate_rings() {
        assert_eq!(ring_area::<LonLat>(&[]), 0.0);
        assert_eq!(ring_area(&[LonLat::new(1.0, 1.0)]), 0.0);
        assert_eq!(
            ring_area(&[LonLat::new(1.0, 1.0), LonLat::new(2.0, 2.0)]),
            0.0
        );
    }

    #[test]
    fn one_degree_square_at_equator() {
        let square = [
            LonLat::new(0.0, 0.0),
            LonLat::new(1.0, 0.0),
            LonLat::new(1.0, 1.0),
            LonLat::new(0.0, 1.0),
        ];
        let side = EARTH_RADIUS * PI / 180.0;
        assert_relative_eq!(ring_area(&square), side * side, max_relative = 1e-3);
    }

    #[test]
    fn tally() {
        let mut tally = AngleTally::default();
        tally.add(1.0);
        tally.add(0.5);
        assert_eq!(tally, AngleTally { sum: 1.5, count: 2 });
        assert_abs_diff_eq!(tally.explement_sum(), 4.0 * PI - 1.5);
    }

    #[test]
    fn resolve_preferred_candidate() {
        let candidates = AngleSumCandidates::new(
            AngleTally { sum: 3.0, count: 3 },
            AngleTally::default(),
        );
        assert_eq!(candidates.preferred, TurnSide::Positive);
        assert_eq!(candidates.positive, 3.0);
        assert_abs_diff_eq!(candidates.negative, 6.0 * PI - 3.0);
        assert_eq!(candidates.resolve(PI), (TurnSide::Positive, 3.0));
    }

    #[test]
    fn resolve_falls_back_to_other_candidate() {
        let candidates = AngleSumCandidates::new(
            AngleTally { sum: 9.0, count: 3 },
            AngleTally::default(),
        );
        let (side, sum) = candidates.resolve(PI);
        assert_eq!(side, TurnSide::Negative);
        assert_abs_diff_eq!(sum, 6.0 * PI - 9.0);
    }

    #[test]
    fn equal_sums_prefer_negative() {
        let tally = AngleTally { sum: 1.0, count: 1 };
        let candidates = AngleSumCandidates::new(tally, tally);
        assert_eq!(candidates.preferred, TurnSide::Negative);
        assert_eq!(candidates.candidate(TurnSide::Negative), candidates.negative);
    }
}
