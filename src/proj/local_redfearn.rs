//! Redfearn on a single synthetic UTM zone centred on an arbitrary meridian.
//!
//! Zone 1 of the UTM grid is moved onto the chosen meridian, so grid north
//! stays close to true north over the mapped area. Every conversion must
//! stay in that zone; points outside it fail with
//! [`GeoError::ZoneConstraint`] and can be re-dispatched to a plain
//! [`Redfearn`].

use crate::error::GeoError;
use crate::point::{GeographicCoordinates, GridPoint};
use crate::proj::common::normalize_longitude;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::map_grid::MapGrid;
use crate::proj::redfearn::Redfearn;
use crate::proj::zone::{parse_zone_number, utm_letter_designator, GridZone};
use crate::proj::GridProjection;

/// The only grid a local meridian can be applied to.
pub const LOCAL_GRID: &str = "UTM";

const LOCAL_ZONE: i32 = 1;

#[derive(Clone, Debug, PartialEq)]
pub struct LocalRedfearn {
    inner: Redfearn,
    central_meridian: f64,
}

impl LocalRedfearn {
    pub fn new(
        ellipsoid_name: &str,
        grid_name: &str,
        central_meridian: f64,
    ) -> Result<Self, GeoError> {
        if grid_name != LOCAL_GRID {
            return Err(GeoError::UnsupportedGrid(grid_name.to_string()));
        }
        let mut inner = Redfearn::new(ellipsoid_name, grid_name)?;
        let central_meridian = normalize_longitude(central_meridian);
        inner
            .grid_mut()
            .relocate_zone1(central_meridian, format!("UTMLocalMeridian_{central_meridian:.6}"));
        tracing::debug!(
            map_grid = inner.map_grid().name(),
            central_meridian,
            "bound local grid"
        );
        Ok(Self {
            inner,
            central_meridian,
        })
    }

    pub fn set_ellipsoid(&mut self, name: &str) -> Result<(), GeoError> {
        self.inner.set_ellipsoid(name)
    }

    /// Central meridian of the local zone (degrees, in [-180, 180)).
    pub fn central_meridian(&self) -> f64 {
        self.central_meridian
    }

    pub fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }

    /// Local zone of `longitude`, measured from the local meridian so the
    /// zone does not split at the antimeridian.
    pub fn zone_number(&self, longitude: f64) -> i32 {
        let width = self.inner.map_grid().zone_width();
        let offset = normalize_longitude(longitude - self.central_meridian);
        ((offset + width / 2.0) / width).floor() as i32 + LOCAL_ZONE
    }

    fn check_zone(&self, zone: i32) -> Result<(), GeoError> {
        if zone != LOCAL_ZONE {
            tracing::debug!(
                zone,
                central_meridian = self.central_meridian,
                "point outside local zone"
            );
            return Err(GeoError::ZoneConstraint { zone });
        }
        Ok(())
    }
}

impl GridProjection for LocalRedfearn {
    fn grid_coordinates(&self, latitude: f64, longitude: f64) -> Result<GridPoint, GeoError> {
        self.check_zone(self.zone_number(longitude))?;
        let designator = format!("{}{}", LOCAL_ZONE, utm_letter_designator(latitude));
        Ok(self
            .inner
            .solve_grid(latitude, normalize_longitude(longitude), LOCAL_ZONE)
            .into_point(designator))
    }

    fn zone_grid_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
        zone: &str,
    ) -> Result<GridPoint, GeoError> {
        self.check_zone(parse_zone_number(zone)?)?;
        self.inner.zone_grid_coordinates(latitude, longitude, zone)
    }

    fn geographic_coordinates(
        &self,
        zone: &str,
        easting: f64,
        northing: f64,
    ) -> Result<GeographicCoordinates, GeoError> {
        let parsed: GridZone = zone.parse()?;
        self.check_zone(parsed.number)?;
        self.inner.geographic_coordinates(zone, easting, northing)
    }

    fn geographic_coordinates_ns(
        &self,
        zone_hemisphere: &str,
        easting: f64,
        northing: f64,
    ) -> Result<GeographicCoordinates, GeoError> {
        let parsed: GridZone = zone_hemisphere.parse()?;
        self.check_zone(parsed.number)?;
        self.inner
            .geographic_coordinates_ns(zone_hemisphere, easting, northing)
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        self.inner.ellipsoid()
    }

    fn map_grid(&self) -> &MapGrid {
        self.inner.map_grid()
    }
}
