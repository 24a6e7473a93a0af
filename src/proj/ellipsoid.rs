use crate::error::GeoError;
use crate::registry::{ellipsoids, UNDEFINED};

/// A reference ellipsoid bound to a named registry entry.
///
/// All derived quantities are computed from the semi-major axis and inverse
/// flattening on demand.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    name: String,
    /// Semi-major axis (metres)
    semi_major_axis: f64,
    /// 1 / flattening
    inverse_flattening: f64,
}

impl Ellipsoid {
    /// Bind to the named ellipsoid. Fails if the name is not in the registry
    /// or names the all-zero "Undefined" sentinel.
    pub fn new(name: &str) -> Result<Self, GeoError> {
        if name == UNDEFINED {
            return Err(GeoError::EllipsoidNotFound(name.to_string()));
        }
        let params = ellipsoids::lookup(name)?;
        tracing::debug!(
            ellipsoid = name,
            a = params.semi_major_axis,
            inv_f = params.inverse_flattening,
            "bound ellipsoid"
        );
        Ok(Self {
            name: params.name.to_string(),
            semi_major_axis: params.semi_major_axis,
            inverse_flattening: params.inverse_flattening,
        })
    }

    /// Rebind to another ellipsoid. On failure the current binding is kept.
    pub fn set_ellipsoid(&mut self, name: &str) -> Result<(), GeoError> {
        *self = Self::new(name)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True while the bound name is still present in the registry.
    pub fn is_valid(&self) -> bool {
        ellipsoids::exists(&self.name)
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn inverse_flattening(&self) -> f64 {
        self.inverse_flattening
    }

    pub fn flattening(&self) -> f64 {
        1.0 / self.inverse_flattening
    }

    /// b = a(1 - f)
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.flattening())
    }

    /// e² = (2 - f)f
    pub fn eccentricity_sq(&self) -> f64 {
        let f = self.flattening();
        (2.0 - f) * f
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_sq().sqrt()
    }

    /// e' = sqrt(e² / (1 - e²))
    pub fn second_eccentricity(&self) -> f64 {
        let e2 = self.eccentricity_sq();
        (e2 / (1.0 - e2)).sqrt()
    }

    /// n = (a - b) / (a + b)
    pub fn n(&self) -> f64 {
        let a = self.semi_major_axis();
        let b = self.semi_minor_axis();
        (a - b) / (a + b)
    }

    /// e'² = (a² - b²) / b²
    pub fn e_dash_sq(&self) -> f64 {
        let a = self.semi_major_axis();
        let b = self.semi_minor_axis();
        (a * a - b * b) / (b * b)
    }

    /// Mean length of one degree of latitude (metres).
    pub fn g(&self) -> f64 {
        let n = self.n();
        let n2 = n * n;
        let n4 = n2 * n2;
        self.semi_major_axis
            * (1.0 - n)
            * (1.0 - n2)
            * (1.0 + 9.0 * n2 / 4.0 + 225.0 * n4 / 64.0)
            * 1.0_f64.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wgs84_constants() {
        let wgs84 = Ellipsoid::new("WGS84").unwrap();
        assert_relative_eq!(wgs84.semi_major_axis(), 6_378_137.0);
        assert_relative_eq!(wgs84.semi_minor_axis(), 6_356_752.314_245_179, epsilon = 0.001);
        assert_relative_eq!(wgs84.eccentricity(), 0.081_819_190_842_622, epsilon = 1e-12);
        assert_relative_eq!(wgs84.n(), 0.001_679_220_386_383_705, epsilon = 1e-12);
    }

    #[test]
    fn test_second_eccentricity_consistent() {
        let grs80 = Ellipsoid::new("GRS80").unwrap();
        let ep = grs80.second_eccentricity();
        assert_relative_eq!(ep * ep, grs80.e_dash_sq(), epsilon = 1e-15);
    }

    #[test]
    fn test_grs80_close_to_wgs84() {
        // WGS84 and GRS80 differ only slightly
        let wgs84 = Ellipsoid::new("WGS84").unwrap();
        let grs80 = Ellipsoid::new("GRS80").unwrap();
        assert_relative_eq!(wgs84.semi_major_axis(), grs80.semi_major_axis());
        assert!((wgs84.flattening() - grs80.flattening()).abs() < 1e-8);
        assert_ne!(wgs84, grs80);
    }

    #[test]
    fn test_degree_length() {
        // One degree of meridian arc averages about 111.13 km on GRS80
        let grs80 = Ellipsoid::new("GRS80").unwrap();
        assert_relative_eq!(grs80.g(), 111_132.95, epsilon = 0.1);
    }

    #[test]
    fn test_sphere_is_nearly_round() {
        let sphere = Ellipsoid::new("Sphere").unwrap();
        assert!(sphere.eccentricity_sq() < 1e-11);
        assert_relative_eq!(
            sphere.semi_minor_axis(),
            sphere.semi_major_axis(),
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_unknown_name_fails() {
        let err = Ellipsoid::new("Undefinable").unwrap_err();
        assert!(matches!(err, GeoError::EllipsoidNotFound(_)));
        assert!(Ellipsoid::new(UNDEFINED).is_err());
    }

    #[test]
    fn test_rebind() {
        let mut e = Ellipsoid::new("WGS84").unwrap();
        e.set_ellipsoid("International 1924").unwrap();
        assert_eq!(e.name(), "International 1924");
        assert_relative_eq!(e.semi_major_axis(), 6_378_388.0);
        assert!(e.is_valid());
    }

    #[test]
    fn test_failed_rebind_keeps_binding() {
        let mut e = Ellipsoid::new("WGS84").unwrap();
        assert!(e.set_ellipsoid("Nope").is_err());
        assert_eq!(e.name(), "WGS84");
        assert!(e.is_valid());
    }
}
