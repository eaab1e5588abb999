//! Conversions between degrees and radians.
//!
//! Both are computed as `π * value / 180` and `180 * value / π`. The results may differ from [`f64::to_radians`] and
//! [`f64::to_degrees`] in the last bits.

use std::f64::consts::PI;

/// Converts an angle in degrees into radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    PI * degrees / 180.0
}

/// Converts an angle in radians into degrees.
pub fn radians_to_degrees(radians: f64) -> f64 {
    180.0 * radians / PI
}
