use crate::error::GeoError;
use crate::registry::{map_grids, UNDEFINED};

/// A zoned transverse Mercator grid bound to a named registry entry.
#[derive(Clone, Debug, PartialEq)]
pub struct MapGrid {
    name: String,
    /// Registry entry the parameters came from; differs from `name` for
    /// synthetic local grids.
    source: &'static str,
    false_easting: f64,
    false_northing: f64,
    central_scale_factor: f64,
    zone_width: f64,
    central_meridian_zone1: f64,
}

impl MapGrid {
    /// Bind to the named map grid. Fails if the name is not in the registry
    /// or names the all-zero "Undefined" sentinel.
    pub fn new(name: &str) -> Result<Self, GeoError> {
        if name == UNDEFINED {
            return Err(GeoError::MapGridNotFound(name.to_string()));
        }
        let params = map_grids::lookup(name)?;
        tracing::debug!(
            map_grid = name,
            k0 = params.central_scale_factor,
            zone_width = params.zone_width,
            cm_zone1 = params.central_meridian_zone1,
            "bound map grid"
        );
        Ok(Self {
            name: params.name.to_string(),
            source: params.name,
            false_easting: params.false_easting,
            false_northing: params.false_northing,
            central_scale_factor: params.central_scale_factor,
            zone_width: params.zone_width,
            central_meridian_zone1: params.central_meridian_zone1,
        })
    }

    /// Rebind to another map grid. On failure the current binding is kept.
    pub fn set_map_grid(&mut self, name: &str) -> Result<(), GeoError> {
        *self = Self::new(name)?;
        Ok(())
    }

    /// Move zone 1 onto `meridian` (degrees) and relabel the grid.
    pub(crate) fn relocate_zone1(&mut self, meridian: f64, name: String) {
        self.central_meridian_zone1 = meridian;
        self.name = name;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True while the registry entry this grid was bound from still exists.
    pub fn is_valid(&self) -> bool {
        map_grids::exists(self.source)
    }

    /// False easting (metres).
    pub fn false_easting(&self) -> f64 {
        self.false_easting
    }

    /// False northing (metres).
    pub fn false_northing(&self) -> f64 {
        self.false_northing
    }

    /// K0
    pub fn central_scale_factor(&self) -> f64 {
        self.central_scale_factor
    }

    /// Zone width (degrees).
    pub fn zone_width(&self) -> f64 {
        self.zone_width
    }

    /// Central meridian of zone 1 (degrees).
    pub fn central_meridian_zone1(&self) -> f64 {
        self.central_meridian_zone1
    }

    /// Longitude of the western edge of zone zero (degrees).
    pub fn lwe_zone0(&self) -> f64 {
        self.central_meridian_zone1 - 1.5 * self.zone_width
    }

    /// Central meridian of zone zero (degrees).
    pub fn cm_zone0(&self) -> f64 {
        self.lwe_zone0() + self.zone_width / 2.0
    }

    /// Central meridian of `zone` (degrees).
    pub fn central_meridian(&self, zone: i32) -> f64 {
        zone as f64 * self.zone_width + self.cm_zone0()
    }
}
