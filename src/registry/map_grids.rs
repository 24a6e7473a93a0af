//! Built-in map grids. UTM and MGA share the same zoning and constants.

use super::{MapGridParameters, UNDEFINED};
use crate::error::GeoError;

const fn entry(
    name: &'static str,
    false_easting: f64,
    false_northing: f64,
    central_scale_factor: f64,
    zone_width: f64,
    central_meridian_zone1: f64,
) -> MapGridParameters {
    MapGridParameters {
        name,
        false_easting,
        false_northing,
        central_scale_factor,
        zone_width,
        central_meridian_zone1,
    }
}

static MAP_GRIDS: [MapGridParameters; 3] = [
    entry(UNDEFINED, 0.0, 0.0, 0.0, 0.0, 0.0),
    entry("MGA", 500_000.0, 10_000_000.0, 0.9996, 6.0, -177.0),
    entry("UTM", 500_000.0, 10_000_000.0, 0.9996, 6.0, -177.0),
];

/// Look up a map grid by name.
pub fn lookup(name: &str) -> Result<&'static MapGridParameters, GeoError> {
    MAP_GRIDS
        .iter()
        .find(|g| g.name == name)
        .ok_or_else(|| GeoError::MapGridNotFound(name.to_string()))
}

/// True if `name` is a built-in map grid.
pub fn exists(name: &str) -> bool {
    MAP_GRIDS.iter().any(|g| g.name == name)
}

/// Names of all built-in map grids, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    MAP_GRIDS.iter().map(|g| g.name)
}

/// All built-in map grids, in table order.
pub fn all() -> &'static [MapGridParameters] {
    &MAP_GRIDS
}

/// Look up a map grid, falling back to the all-zero "Undefined" entry.
pub fn get_or_undefined(name: &str) -> &'static MapGridParameters {
    lookup(name).unwrap_or(&MAP_GRIDS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utm_and_mga_identical() {
        let utm = lookup("UTM").unwrap();
        let mga = lookup("MGA").unwrap();
        assert_eq!(utm.false_easting, 500_000.0);
        assert_eq!(utm.false_northing, 10_000_000.0);
        assert_eq!(utm.central_scale_factor, 0.9996);
        assert_eq!(utm.zone_width, 6.0);
        assert_eq!(utm.central_meridian_zone1, -177.0);
        assert_eq!(
            (utm.false_easting, utm.false_northing, utm.central_scale_factor),
            (mga.false_easting, mga.false_northing, mga.central_scale_factor)
        );
        assert_eq!(
            (utm.zone_width, utm.central_meridian_zone1),
            (mga.zone_width, mga.central_meridian_zone1)
        );
    }

    #[test]
    fn test_unknown_grid() {
        assert!(matches!(lookup("OSGB36"), Err(GeoError::MapGridNotFound(_))));
        assert!(!exists("OSGB36"));
        assert_eq!(get_or_undefined("OSGB36").name, UNDEFINED);
    }

    #[test]
    fn test_names() {
        assert_eq!(names().collect::<Vec<_>>(), vec![UNDEFINED, "MGA", "UTM"]);
    }
}
