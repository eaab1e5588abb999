//! Implementations of the crate traits for [`geo_types`] geometries. Geo-types `x` is longitude and `y` is latitude.

mod coord;
mod linestring;
mod point;
mod polygon;
