//! Geodetic <-> Earth-centred, Earth-fixed (ECEF) Cartesian coordinates.
//!
//! Two inverse solutions are provided: Borkowski's closed form (exact) and
//! Bowring's single-step approximation, which is cheaper. Bowring stays
//! within a millimetre in height and 1e-6 degrees in latitude from the
//! surface up to 10 km, poles included, and within a centimetre up to
//! 1000 km altitude.

use crate::error::GeoError;
use crate::point::{CartesianPoint, GeodeticPoint};
use crate::proj::ellipsoid::Ellipsoid;

#[derive(Clone, Debug, PartialEq)]
pub struct Ecef {
    ellipsoid: Ellipsoid,
}

impl Ecef {
    pub fn new(ellipsoid_name: &str) -> Result<Self, GeoError> {
        Ok(Self {
            ellipsoid: Ellipsoid::new(ellipsoid_name)?,
        })
    }

    pub fn set_ellipsoid(&mut self, name: &str) -> Result<(), GeoError> {
        self.ellipsoid.set_ellipsoid(name)
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Latitude, longitude (degrees) and ellipsoidal height (metres) to ECEF.
    pub fn to_ecef(&self, latitude: f64, longitude: f64, height: f64) -> CartesianPoint {
        let lat = latitude.to_radians();
        let lon = longitude.to_radians();
        let slat = lat.sin();
        let clat = lat.cos();
        let e2 = self.ellipsoid.eccentricity_sq();

        // Radius of curvature in the prime vertical
        let n = self.ellipsoid.semi_major_axis() / (1.0 - e2 * slat * slat).sqrt();

        CartesianPoint::new(
            (n + height) * clat * lon.cos(),
            (n + height) * clat * lon.sin(),
            (n * (1.0 - e2) + height) * slat,
        )
    }

    /// ECEF to geodetic using Bowring's approximation.
    pub fn from_ecef_inexact(&self, x: f64, y: f64, z: f64) -> GeodeticPoint {
        let a = self.ellipsoid.semi_major_axis();
        let b = self.ellipsoid.semi_minor_axis();
        let p = x.hypot(y);
        if let Some(point) = self.degenerate(p, x, y, z) {
            return point;
        }

        let t = (z * a / (p * b)).atan();
        let st = t.sin();
        let ct = t.cos();
        let e2 = self.ellipsoid.eccentricity_sq();
        let ep2 = self.ellipsoid.e_dash_sq();

        // atan2 here yields the colatitude.
        let colat = (p - e2 * a * ct * ct * ct).atan2(z + ep2 * b * st * st * st);
        let lat = std::f64::consts::FRAC_PI_2 - colat;

        let slat = lat.sin();
        let rn = a / (1.0 - e2 * slat * slat).sqrt();

        GeodeticPoint::new(lat.to_degrees(), y.atan2(x).to_degrees(), p / lat.cos() - rn)
    }

    /// ECEF to geodetic using Borkowski's exact closed-form solution.
    pub fn from_ecef(&self, x: f64, y: f64, z: f64) -> GeodeticPoint {
        let a = self.ellipsoid.semi_major_axis();
        let mut b = self.ellipsoid.semi_minor_axis();
        let r = x.hypot(y);
        if let Some(point) = self.degenerate(r, x, y, z) {
            return point;
        }

        // Southern hemisphere
        if z < 0.0 {
            b = -b;
        }

        let e = (b * z - (a * a - b * b)) / (a * r);
        let f = (b * z + (a * a - b * b)) / (a * r);
        let p = (e * f + 1.0) * 4.0 / 3.0;
        let q = (e * e - f * f) * 2.0;
        let d = p * p * p + q * q;

        let v = if d >= 0.0 {
            let s1 = (d.sqrt() - q).cbrt();
            let s2 = (d.sqrt() + q).cbrt();
            let v = s1 - s2;
            // One Newton-style step removes the cancellation error in s1 - s2.
            -(v * v * v + 2.0 * q) / (3.0 * p)
        } else {
            2.0 * (-p).sqrt() * ((q / p / (-p).sqrt()).acos() / 3.0).cos()
        };

        let g = 0.5 * (e + (e * e + v).sqrt());
        let t = (g * g + (f - v * g) / (g + g - e)).sqrt() - g;
        let lat = ((1.0 - t * t) * a / (2.0 * b * t)).atan();

        GeodeticPoint::new(
            lat.to_degrees(),
            y.atan2(x).to_degrees(),
            (r - a * t) * lat.cos() + (z - b) * lat.sin(),
        )
    }

    /// Points on the polar axis or in the equatorial plane.
    fn degenerate(&self, p: f64, x: f64, y: f64, z: f64) -> Option<GeodeticPoint> {
        if p == 0.0 {
            let b = self.ellipsoid.semi_minor_axis();
            let (latitude, height) = if z < 0.0 { (-90.0, -z - b) } else { (90.0, z - b) };
            return Some(GeodeticPoint::new(latitude, 0.0, height));
        }
        if z == 0.0 {
            return Some(GeodeticPoint::new(
                0.0,
                y.atan2(x).to_degrees(),
                p - self.ellipsoid.semi_major_axis(),
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const WGS84_A: f64 = 6378137.0;

    fn sample_points() -> Vec<(f64, f64, f64)> {
        let mut points = Vec::new();
        for &lat in &[-89.5, -60.0, -33.8, -1.0, 0.5, 27.0, 45.0, 75.0, 89.9] {
            for &lon in &[-179.0, -90.0, 0.0, 33.3, 151.2] {
                for &h in &[-100.0, 0.0, 1025.456, 8848.0] {
                    points.push((lat, lon, h));
                }
            }
        }
        points
    }

    #[test]
    fn test_exact_roundtrip() {
        let ecef = Ecef::new("WGS84").unwrap();
        for (lat, lon, h) in sample_points() {
            let c = ecef.to_ecef(lat, lon, h);
            let g = ecef.from_ecef(c.x, c.y, c.z);
            assert_abs_diff_eq!(g.latitude, lat, epsilon = 1e-8);
            assert_abs_diff_eq!(g.longitude, lon, epsilon = 1e-9);
            assert_abs_diff_eq!(g.height, h, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_inexact_roundtrip() {
        let ecef = Ecef::new("GRS80").unwrap();
        for (lat, lon, h) in sample_points() {
            let c = ecef.to_ecef(lat, lon, h);
            let g = ecef.from_ecef_inexact(c.x, c.y, c.z);
            assert_abs_diff_eq!(g.latitude, lat, epsilon = 1e-6);
            assert_abs_diff_eq!(g.longitude, lon, epsilon = 1e-9);
            assert_abs_diff_eq!(g.height, h, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_high_altitude_southern_point() {
        let ecef = Ecef::new("WGS84").unwrap();
        let c = ecef.to_ecef(-42.0, 147.0, 1.0e6);
        assert!(c.z < 0.0);

        let exact = ecef.from_ecef(c.x, c.y, c.z);
        assert_abs_diff_eq!(exact.latitude, -42.0, epsilon = 1e-9);
        assert_abs_diff_eq!(exact.height, 1.0e6, epsilon = 1e-3);

        let inexact = ecef.from_ecef_inexact(c.x, c.y, c.z);
        assert_abs_diff_eq!(inexact.latitude, -42.0, epsilon = 1e-6);
        assert_abs_diff_eq!(inexact.height, 1.0e6, epsilon = 1e-2);
    }

    #[test]
    fn test_inexact_at_orbital_altitude() {
        let ecef = Ecef::new("WGS84").unwrap();
        let mut lat = -89.5;
        while lat <= 89.5 {
            let c = ecef.to_ecef(lat, 147.0, 1.0e6);
            let g = ecef.from_ecef_inexact(c.x, c.y, c.z);
            assert_abs_diff_eq!(g.latitude, lat, epsilon = 1e-6);
            assert_abs_diff_eq!(g.height, 1.0e6, epsilon = 1e-2);
            lat += 0.1;
        }
    }

    #[test]
    fn test_equator_point() {
        let ecef = Ecef::new("WGS84").unwrap();
        let c = ecef.to_ecef(0.0, -90.0, 1025.456);
        assert_abs_diff_eq!(c.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(c.y, -(WGS84_A + 1025.456), epsilon = 1e-6);
        assert_eq!(c.z, 0.0);

        let g = ecef.from_ecef(0.0, 6_379_162.456, 0.0);
        assert_eq!(g.latitude, 0.0);
        assert_abs_diff_eq!(g.longitude, 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(g.height, 1025.456, epsilon = 1e-6);

        let g = ecef.from_ecef_inexact(0.0, 6_379_162.456, 0.0);
        assert_abs_diff_eq!(g.height, 1025.456, epsilon = 1e-6);
    }

    #[test]
    fn test_polar_axis() {
        let ecef = Ecef::new("WGS84").unwrap();
        let b = ecef.ellipsoid().semi_minor_axis();

        for g in [ecef.from_ecef(0.0, 0.0, b + 10.0), ecef.from_ecef_inexact(0.0, 0.0, b + 10.0)] {
            assert_eq!(g.latitude, 90.0);
            assert_eq!(g.longitude, 0.0);
            assert_abs_diff_eq!(g.height, 10.0, epsilon = 1e-6);
        }

        let g = ecef.from_ecef(0.0, 0.0, -b - 20.0);
        assert_eq!(g.latitude, -90.0);
        assert_abs_diff_eq!(g.height, 20.0, epsilon = 1e-6);
    }

    #[test]
    fn test_known_cartesian() {
        let ecef = Ecef::new("WGS84").unwrap();
        let c = ecef.to_ecef(0.0, 0.0, 0.0);
        assert_abs_diff_eq!(c.x, WGS84_A, epsilon = 1e-9);
        assert_abs_diff_eq!(c.y, 0.0, epsilon = 1e-9);

        // 45°N 0°E on the surface: N = a / sqrt(1 - e2/2)
        let e2 = ecef.ellipsoid().eccentricity_sq();
        let n = WGS84_A / (1.0 - e2 / 2.0).sqrt();
        let c = ecef.to_ecef(45.0, 0.0, 0.0);
        assert_abs_diff_eq!(c.x, n * std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-6);
        assert_abs_diff_eq!(c.z, n * (1.0 - e2) * std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-6);
    }

    #[test]
    fn test_rebind_ellipsoid() {
        let mut ecef = Ecef::new("WGS84").unwrap();
        let before = ecef.to_ecef(-33.0, 151.0, 0.0);
        ecef.set_ellipsoid("Clarke 1866").unwrap();
        let after = ecef.to_ecef(-33.0, 151.0, 0.0);
        assert!((before.x - after.x).abs() > 1.0);
        assert!(ecef.set_ellipsoid("Nowhere").is_err());
        assert_eq!(ecef.ellipsoid().name(), "Clarke 1866");
    }
}
