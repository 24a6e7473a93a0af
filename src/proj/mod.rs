pub mod common;
pub mod ellipsoid;
pub mod local_redfearn;
pub mod local_tm;
pub mod map_grid;
pub mod redfearn;
pub mod zone;

use crate::error::GeoError;
use crate::point::{GeographicCoordinates, GridPoint};

/// Trait for zoned grids converting between geographic (degrees) and grid
/// (metres) coordinates.
pub trait GridProjection: Send + Sync {
    /// Geographic -> grid, in the zone the point falls in.
    fn grid_coordinates(&self, latitude: f64, longitude: f64) -> Result<GridPoint, GeoError>;

    /// Geographic -> grid, in the caller's zone (number only is used).
    fn zone_grid_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
        zone: &str,
    ) -> Result<GridPoint, GeoError>;

    /// Grid -> geographic, zone given with a latitude band letter ("55H").
    fn geographic_coordinates(
        &self,
        zone: &str,
        easting: f64,
        northing: f64,
    ) -> Result<GeographicCoordinates, GeoError>;

    /// Grid -> geographic, zone given with a hemisphere letter ("55S").
    fn geographic_coordinates_ns(
        &self,
        zone_hemisphere: &str,
        easting: f64,
        northing: f64,
    ) -> Result<GeographicCoordinates, GeoError>;

    /// Batch geographic -> grid; stops at the first failing point.
    fn grid_coordinates_batch(&self, points: &[(f64, f64)]) -> Result<Vec<GridPoint>, GeoError> {
        points
            .iter()
            .map(|&(lat, lon)| self.grid_coordinates(lat, lon))
            .collect()
    }

    /// Batch grid -> geographic for points sharing one band-letter zone.
    fn geographic_coordinates_batch(
        &self,
        zone: &str,
        points: &[(f64, f64)],
    ) -> Result<Vec<GeographicCoordinates>, GeoError> {
        points
            .iter()
            .map(|&(e, n)| self.geographic_coordinates(zone, e, n))
            .collect()
    }

    fn ellipsoid(&self) -> &ellipsoid::Ellipsoid;

    fn map_grid(&self) -> &map_grid::MapGrid;
}
