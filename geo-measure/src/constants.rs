//! Fixed physical and tolerance parameters shared by all the algorithms of the crate.

/// Radius of the spherical Earth model, in meters.
pub const EARTH_RADIUS: f64 = 6_370_996.81;

/// Tolerance used for approximate comparisons of coordinates (degrees) and collinearity tests.
pub const POINT_EPSILON: f64 = 2e-10;

/// Latitude values are clamped into `[-LAT_LIMIT, LAT_LIMIT]` before distance calculation.
pub const LAT_LIMIT: f64 = 74.0;

/// Longitude values are wrapped into `[-LON_LIMIT, LON_LIMIT]` before distance calculation.
pub const LON_LIMIT: f64 = 180.0;

/// Maximum difference (in radians) between the chosen angle sum of a polygon and the planar angle sum `(N - 2)π`
/// for the preferred orientation to be accepted by the area calculation.
pub const AREA_SELECTION_THRESHOLD: f64 = 1.0;
