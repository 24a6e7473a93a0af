//! Process-wide, read-only tables of named ellipsoids and map grids.
//!
//! Each table is a `static` array built at compile time. Lookups are a
//! linear scan by exact name.

pub mod ellipsoids;
pub mod map_grids;

use serde::Serialize;

/// Defining parameters of a reference ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EllipsoidParameters {
    pub name: &'static str,
    /// Semi-major axis (metres)
    pub semi_major_axis: f64,
    /// 1 / flattening
    pub inverse_flattening: f64,
}

/// Defining parameters of a zoned transverse Mercator grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MapGridParameters {
    pub name: &'static str,
    /// False easting (metres)
    pub false_easting: f64,
    /// False northing applied in the southern hemisphere (metres)
    pub false_northing: f64,
    /// Central scale factor K0
    pub central_scale_factor: f64,
    /// Zone width (degrees)
    pub zone_width: f64,
    /// Central meridian of zone 1 (degrees)
    pub central_meridian_zone1: f64,
}

/// Name of the all-zero sentinel entry present in both tables.
pub const UNDEFINED: &str = "Undefined";
