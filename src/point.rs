//! Value types passed in and out of the conversions. Angles are in degrees,
//! lengths in metres.

use serde::{Deserialize, Serialize};

/// Latitude, longitude and ellipsoidal height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeodeticPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub height: f64,
}

impl GeodeticPoint {
    pub fn new(latitude: f64, longitude: f64, height: f64) -> Self {
        Self {
            latitude,
            longitude,
            height,
        }
    }
}

/// Earth-centred, Earth-fixed Cartesian coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Grid coordinates of a point together with the local projection properties.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridPoint {
    /// Zone designator, e.g. "55H".
    pub zone: String,
    pub easting: f64,
    pub northing: f64,
    /// Angle from true north to grid north (degrees).
    pub grid_convergence: f64,
    /// Linear scale factor of the projection at the point.
    pub point_scale: f64,
}

/// Geographic coordinates recovered from a grid point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeographicCoordinates {
    pub latitude: f64,
    pub longitude: f64,
    /// Angle from true north to grid north (degrees).
    pub grid_convergence: f64,
    pub point_scale: f64,
}

/// Offsets from a local projection origin (metres).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapCoordinates {
    pub easting: f64,
    pub northing: f64,
}
