//! Built-in reference ellipsoids.
//!
//! The "Sphere" entry uses the radius of a sphere on which one nautical mile
//! (1852 m) is one minute of arc: 1852 * 21600 / 2π = 6366707.019 m. Its
//! inverse flattening is large enough that f is zero for all practical purposes.

use super::{EllipsoidParameters, UNDEFINED};
use crate::error::GeoError;

const fn entry(name: &'static str, semi_major_axis: f64, inverse_flattening: f64) -> EllipsoidParameters {
    EllipsoidParameters {
        name,
        semi_major_axis,
        inverse_flattening,
    }
}

static ELLIPSOIDS: [EllipsoidParameters; 26] = [
    entry(UNDEFINED, 0.0, 0.0),
    entry("Airy 1830", 6_377_563.396, 299.324_964_6),
    entry("Modified Airy", 6_377_340.189, 299.324_964_6),
    // Australian Geodetic Datum 1984
    entry("AMG84", 6_378_160.0, 298.25),
    entry("Bessel 1841 (Namibia)", 6_377_483.865, 299.152_812_8),
    entry("Bessel 1841", 6_377_397.155, 299.152_812_8),
    entry("Clarke 1866", 6_378_206.4, 294.978_698_2),
    entry("Clarke 1880", 6_378_249.145, 293.465),
    entry("Everest (India 1830)", 6_377_276.345, 300.8017),
    entry("Everest (Sabah Sarawak)", 6_377_298.556, 300.8017),
    entry("Everest (India 1956)", 6_377_301.243, 300.8017),
    entry("Everest (Malaysia 1969)", 6_377_295.664, 300.8017),
    entry("Everest (Malaya and Singapore)", 6_377_304.063, 300.8017),
    entry("Everest (Pakistan)", 6_377_309.613, 300.8017),
    entry("Modified Fischer 1960", 6_378_155.0, 298.3),
    entry("Helmert 1906", 6_378_200.0, 298.3),
    entry("Hough 1960", 6_378_270.0, 297.0),
    entry("Indonesian 1974", 6_378_160.0, 298.247),
    entry("International 1924", 6_378_388.0, 297.0),
    entry("Krassovsky 1940", 6_378_245.0, 298.3),
    entry("GDA94", 6_378_137.0, 298.257_222_101),
    entry("GRS80", 6_378_137.0, 298.257_222_101),
    entry("South American 1969", 6_378_160.0, 298.25),
    entry("Sphere", 6_366_707.019, 999_999_999_999.999),
    entry("WGS72", 6_378_135.0, 298.26),
    entry("WGS84", 6_378_137.0, 298.257_223_563),
];

/// Look up an ellipsoid by name.
pub fn lookup(name: &str) -> Result<&'static EllipsoidParameters, GeoError> {
    ELLIPSOIDS
        .iter()
        .find(|e| e.name == name)
        .ok_or_else(|| GeoError::EllipsoidNotFound(name.to_string()))
}

/// True if `name` is a built-in ellipsoid.
pub fn exists(name: &str) -> bool {
    ELLIPSOIDS.iter().any(|e| e.name == name)
}

/// Names of all built-in ellipsoids, in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    ELLIPSOIDS.iter().map(|e| e.name)
}

/// All built-in ellipsoids, in table order.
pub fn all() -> &'static [EllipsoidParameters] {
    &ELLIPSOIDS
}

/// Look up an ellipsoid, falling back to the all-zero "Undefined" entry.
///
/// Only for bulk listing. Binding an [`Ellipsoid`](crate::proj::ellipsoid::Ellipsoid)
/// goes through [`lookup`] and fails on unknown names instead.
pub fn get_or_undefined(name: &str) -> &'static EllipsoidParameters {
    lookup(name).unwrap_or(&ELLIPSOIDS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lookup_wgs84() {
        let e = lookup("WGS84").unwrap();
        assert_relative_eq!(e.semi_major_axis, 6_378_137.0);
        assert_relative_eq!(e.inverse_flattening, 298.257_223_563);
    }

    #[test]
    fn test_unknown_name() {
        assert!(matches!(lookup("Mars 2000"), Err(GeoError::EllipsoidNotFound(n)) if n == "Mars 2000"));
        assert!(!exists("Mars 2000"));
    }

    #[test]
    fn test_undefined_fallback() {
        let e = get_or_undefined("Mars 2000");
        assert_eq!(e.name, UNDEFINED);
        assert_eq!(e.semi_major_axis, 0.0);
        assert_eq!(e.inverse_flattening, 0.0);
    }

    #[test]
    fn test_names_in_table_order() {
        let names: Vec<_> = names().collect();
        assert_eq!(names[0], UNDEFINED);
        assert_eq!(*names.last().unwrap(), "WGS84");
        assert!(names.contains(&"Clarke 1866"));
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = names().collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(before, names.len());
    }

    #[test]
    fn test_parameters_are_sane() {
        for e in all().iter().filter(|e| e.name != UNDEFINED) {
            assert!(e.semi_major_axis > 6_000_000.0, "{}", e.name);
            assert!(e.inverse_flattening > 1.0, "{}", e.name);
        }
    }

    #[test]
    fn test_gda94_matches_grs80() {
        assert_eq!(
            lookup("GDA94").unwrap().semi_major_axis,
            lookup("GRS80").unwrap().semi_major_axis
        );
        assert_eq!(
            lookup("GDA94").unwrap().inverse_flattening,
            lookup("GRS80").unwrap().inverse_flattening
        );
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_string(lookup("GRS80").unwrap()).unwrap();
        assert!(json.contains("\"name\":\"GRS80\""), "{json}");
        assert!(json.contains("\"semi_major_axis\":6378137.0"), "{json}");
    }
}
