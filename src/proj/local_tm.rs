//! Local Cartesian map frame on a WGS84 transverse Mercator projection.
//!
//! The projection's central meridian is the origin longitude and map
//! coordinates are grid offsets from the origin, so the origin maps to (0, 0).
//! Accuracy is best near the origin. For maps handed to other parties a
//! standard UTM zone is usually the better choice.

use crate::error::GeoError;
use crate::point::MapCoordinates;
use crate::proj::local_redfearn::{LocalRedfearn, LOCAL_GRID};
use crate::proj::zone::Hemisphere;
use crate::proj::GridProjection;

const LOCAL_TM_ELLIPSOID: &str = "WGS84";

#[derive(Clone, Debug)]
pub struct LocalTmProjection {
    projection: LocalRedfearn,
    origin_zone: String,
    origin_hemisphere: Hemisphere,
    origin_easting: f64,
    origin_northing: f64,
}

impl LocalTmProjection {
    /// Map frame on WGS84 with its origin at (`origin_latitude`, `origin_longitude`).
    pub fn new(origin_latitude: f64, origin_longitude: f64) -> Result<Self, GeoError> {
        Self::with_ellipsoid(LOCAL_TM_ELLIPSOID, origin_latitude, origin_longitude)
    }

    pub fn with_ellipsoid(
        ellipsoid_name: &str,
        origin_latitude: f64,
        origin_longitude: f64,
    ) -> Result<Self, GeoError> {
        let projection = LocalRedfearn::new(ellipsoid_name, LOCAL_GRID, origin_longitude)?;
        let origin = projection.grid_coordinates(origin_latitude, origin_longitude)?;
        tracing::debug!(
            zone = %origin.zone,
            easting = origin.easting,
            northing = origin.northing,
            "local map origin"
        );
        Ok(Self {
            projection,
            origin_zone: origin.zone,
            origin_hemisphere: Hemisphere::of_latitude(origin_latitude),
            origin_easting: origin.easting,
            origin_northing: origin.northing,
        })
    }

    /// Zone designator of the origin, e.g. "1H".
    pub fn origin_zone(&self) -> &str {
        &self.origin_zone
    }

    pub fn projection(&self) -> &LocalRedfearn {
        &self.projection
    }

    /// Geographic (degrees) -> map offsets from the origin (metres).
    pub fn map_coordinates(&self, latitude: f64, longitude: f64) -> Result<MapCoordinates, GeoError> {
        let grid = self.projection.grid_coordinates(latitude, longitude)?;
        // Keep one false northing across the whole map so the frame stays
        // continuous over the equator.
        let false_northing = self.projection.map_grid().false_northing();
        let origin_north = self.origin_hemisphere.is_north();
        let northing = match (origin_north, Hemisphere::of_latitude(latitude).is_north()) {
            (false, true) => grid.northing + false_northing,
            (true, false) => grid.northing - false_northing,
            _ => grid.northing,
        };
        Ok(MapCoordinates {
            easting: grid.easting - self.origin_easting,
            northing: northing - self.origin_northing,
        })
    }

    /// Map offsets (metres) -> geographic `(latitude, longitude)` in degrees.
    pub fn geographic_coordinates(&self, map: MapCoordinates) -> Result<(f64, f64), GeoError> {
        let easting = map.easting + self.origin_easting;
        let northing = map.northing + self.origin_northing;
        let geo = self
            .projection
            .geographic_coordinates(&self.origin_zone, easting, northing)?;
        Ok((geo.latitude, geo.longitude))
    }
}
