//! Geographic <-> grid coordinates with Redfearn's formulae.
//!
//! The series are those published for the Map Grid of Australia and are
//! accurate to better than a millimetre anywhere within a zone. Accuracy
//! degrades smoothly with distance from the central meridian; nothing is
//! rejected for lying outside a zone, so explicit-zone conversions can be
//! used to match coordinates across zone edges.

use crate::error::GeoError;
use crate::point::{GeographicCoordinates, GridPoint};
use crate::proj::common::{
    foot_point_latitude, meridian_distance, normalize_longitude, radii_of_curvature,
};
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::map_grid::MapGrid;
use crate::proj::zone::{
    parse_zone_number, utm_letter_designator, utm_zone_exception, GridZone, Hemisphere,
};
use crate::proj::GridProjection;

/// Redfearn conversions on one ellipsoid and one map grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Redfearn {
    ellipsoid: Ellipsoid,
    grid: MapGrid,
}

/// Grid easting/northing with convergence (degrees) and point scale.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GridSolution {
    pub easting: f64,
    pub northing: f64,
    pub grid_convergence: f64,
    pub point_scale: f64,
}

impl GridSolution {
    pub(crate) fn into_point(self, zone: String) -> GridPoint {
        GridPoint {
            zone,
            easting: self.easting,
            northing: self.northing,
            grid_convergence: self.grid_convergence,
            point_scale: self.point_scale,
        }
    }
}

impl Redfearn {
    pub fn new(ellipsoid_name: &str, grid_name: &str) -> Result<Self, GeoError> {
        Ok(Self {
            ellipsoid: Ellipsoid::new(ellipsoid_name)?,
            grid: MapGrid::new(grid_name)?,
        })
    }

    pub fn set_ellipsoid(&mut self, name: &str) -> Result<(), GeoError> {
        self.ellipsoid.set_ellipsoid(name)
    }

    pub fn set_map_grid(&mut self, name: &str) -> Result<(), GeoError> {
        self.grid.set_map_grid(name)
    }

    pub(crate) fn grid_mut(&mut self) -> &mut MapGrid {
        &mut self.grid
    }

    /// True if both the ellipsoid and the map grid are still bound.
    pub fn is_valid(&self) -> bool {
        self.ellipsoid.is_valid() && self.grid.is_valid()
    }

    /// Zone number from the zone formula alone, without UTM exceptions.
    pub fn plain_zone_number(&self, longitude: f64) -> i32 {
        let lon = normalize_longitude(longitude);
        ((lon - self.grid.lwe_zone0()) / self.grid.zone_width()).floor() as i32
    }

    /// Zone number of a point, including the Norway and Svalbard exceptions.
    pub fn zone_number(&self, latitude: f64, longitude: f64) -> i32 {
        let lon = normalize_longitude(longitude);
        let zone = self.plain_zone_number(lon);
        match utm_zone_exception(latitude, lon) {
            Some(special) if special != zone => {
                tracing::trace!(latitude, longitude = lon, zone, special, "UTM zone exception");
                special
            }
            _ => zone,
        }
    }

    /// Forward series for a point in an explicit zone.
    pub(crate) fn solve_grid(&self, latitude: f64, longitude: f64, zone: i32) -> GridSolution {
        let lat = latitude.to_radians();
        let k0 = self.grid.central_scale_factor();

        let m = meridian_distance(&self.ellipsoid, lat);

        let s = lat.sin();
        let (rho, nu) = radii_of_curvature(&self.ellipsoid, s);
        let psi = nu / rho;
        let psi2 = psi * psi;
        let psi3 = psi * psi2;
        let psi4 = psi * psi3;

        let w = normalize_longitude(longitude - self.grid.central_meridian(zone)).to_radians();
        let w2 = w * w;
        let w3 = w * w2;
        let w4 = w * w3;
        let w5 = w * w4;
        let w6 = w * w5;
        let w7 = w * w6;
        let w8 = w * w7;

        let c = lat.cos();
        let c2 = c * c;
        let c3 = c * c2;
        let c4 = c * c3;
        let c5 = c * c4;
        let c6 = c * c5;
        let c7 = c * c6;

        let t = lat.tan();
        let t2 = t * t;
        let t4 = t2 * t2;
        let t6 = t4 * t2;

        // Northing
        let term1 = w2 * c / 2.0;
        let term2 = w4 * c3 * (4.0 * psi2 + psi - t2) / 24.0;
        let term3 = w6
            * c5
            * (8.0 * psi4 * (11.0 - 24.0 * t2) - 28.0 * psi3 * (1.0 - 6.0 * t2)
                + psi2 * (1.0 - 32.0 * t2)
                - psi * (2.0 * t2)
                + t4)
            / 720.0;
        let term4 = w8 * c7 * (1385.0 - 3111.0 * t2 + 543.0 * t4 - t6) / 40320.0;
        let mut northing = k0 * (m + nu * s * (term1 + term2 + term3 + term4));
        // False northing is applied in the southern hemisphere only.
        if latitude < 0.0 {
            northing += self.grid.false_northing();
        }

        // Easting
        let term1 = w * c;
        let term2 = w3 * c3 * (psi - t2) / 6.0;
        let term3 = w5
            * c5
            * (4.0 * psi3 * (1.0 - 6.0 * t2) + psi2 * (1.0 + 8.0 * t2) - psi * (2.0 * t2) + t4)
            / 120.0;
        let term4 = w7 * c7 * (61.0 - 479.0 * t2 + 179.0 * t4 - t6) / 5040.0;
        let easting = nu * k0 * (term1 + term2 + term3 + term4) + self.grid.false_easting();

        // Grid convergence
        let term1 = -w;
        let term2 = -w3 * c2 * (2.0 * psi2 - psi) / 3.0;
        let term3 = -w5
            * c4
            * (psi4 * (11.0 - 24.0 * t2) - psi3 * (11.0 - 36.0 * t2)
                + 2.0 * psi2 * (1.0 - 7.0 * t2)
                + psi * t2)
            / 15.0;
        let term4 = w7 * c6 * (17.0 - 26.0 * t2 + 2.0 * t4) / 315.0;
        let grid_convergence = (s * (term1 + term2 + term3 + term4)).to_degrees();

        // Point scale
        let term1 = 1.0 + w2 * c2 * psi / 2.0;
        let term2 = w4
            * c4
            * (4.0 * psi3 * (1.0 - 6.0 * t2) + psi2 * (1.0 + 24.0 * t2) - 4.0 * psi * t2)
            / 24.0;
        let term3 = w6 * c6 * (61.0 - 148.0 * t2 + 16.0 * t4) / 720.0;
        let point_scale = k0 * (term1 + term2 + term3);

        GridSolution {
            easting,
            northing,
            grid_convergence,
            point_scale,
        }
    }

    /// Inverse series for a grid point in an explicit zone and hemisphere.
    pub(crate) fn solve_geographic(
        &self,
        zone: i32,
        hemisphere: Hemisphere,
        easting: f64,
        northing: f64,
    ) -> GeographicCoordinates {
        let k0 = self.grid.central_scale_factor();
        // Mirrors the forward series: false northing only in the south.
        let m = match hemisphere {
            Hemisphere::North => northing / k0,
            Hemisphere::South => (northing - self.grid.false_northing()) / k0,
        };

        let fpl = foot_point_latitude(&self.ellipsoid, m);

        let s = fpl.sin();
        let (rho, nu) = radii_of_curvature(&self.ellipsoid, s);
        let psi = nu / rho;
        let psi2 = psi * psi;
        let psi3 = psi * psi2;
        let psi4 = psi * psi3;

        let sec = 1.0 / fpl.cos();

        let t = fpl.tan();
        let t2 = t * t;
        let t4 = t2 * t2;
        let t6 = t4 * t2;

        let e = easting - self.grid.false_easting();
        let ek = e / k0;

        let x = ek / nu;
        let x2 = x * x;
        let x3 = x * x2;
        let x5 = x3 * x2;
        let x7 = x5 * x2;

        let y = ek * ek / (nu * rho);
        let y2 = y * y;
        let y3 = y * y2;

        // Latitude
        let term1 = x * e / 2.0;
        let term2 = (x3 * e / 24.0) * (-4.0 * psi2 + 9.0 * psi * (1.0 - t2) + 12.0 * t2);
        let term3 = (x5 * e / 720.0)
            * (8.0 * psi4 * (11.0 - 24.0 * t2) - 12.0 * psi3 * (21.0 - 71.0 * t2)
                + 15.0 * psi2 * (15.0 - 98.0 * t2 + 15.0 * t4)
                + 180.0 * psi * (5.0 * t2 - 3.0 * t4)
                + 360.0 * t4);
        let term4 = (x7 * e / 40320.0) * (1385.0 + 3633.0 * t2 + 4095.0 * t4 + 1575.0 * t6);
        let latitude = (fpl + (t / (k0 * rho)) * (-term1 + term2 - term3 + term4)).to_degrees();

        // Longitude
        let term1 = x;
        let term2 = (x3 / 6.0) * (psi + 2.0 * t2);
        let term3 = (x5 / 120.0)
            * (-4.0 * psi3 * (1.0 - 6.0 * t2) + psi2 * (9.0 - 68.0 * t2) + 72.0 * psi * t2
                + 24.0 * t4);
        let term4 = (x7 / 5040.0) * (61.0 + 662.0 * t2 + 1320.0 * t4 + 720.0 * t6);
        let longitude = normalize_longitude(
            self.grid.central_meridian(zone)
                + (sec * (term1 - term2 + term3 - term4)).to_degrees(),
        );

        // Grid convergence
        let term1 = -t * x;
        let term2 = (t * x3 / 3.0) * (-2.0 * psi2 + 3.0 * psi + t2);
        let term3 = -(t * x5 / 15.0)
            * (psi4 * (11.0 - 24.0 * t2) - 3.0 * psi3 * (8.0 - 23.0 * t2)
                + 5.0 * psi2 * (3.0 - 14.0 * t2)
                + 30.0 * psi * t2
                + 3.0 * t4);
        let term4 = (t * x7 / 315.0) * (17.0 + 77.0 * t2 + 105.0 * t4 + 45.0 * t6);
        let grid_convergence = (term1 + term2 + term3 + term4).to_degrees();

        // Point scale
        let term1 = 1.0 + y / 2.0;
        let term2 = (y2 / 24.0)
            * (4.0 * psi * (1.0 - 6.0 * t2) - 3.0 * (1.0 - 16.0 * t2) - 24.0 * t2 / psi);
        let term3 = y3 / 720.0;
        let point_scale = k0 * (term1 + term2 + term3);

        GeographicCoordinates {
            latitude,
            longitude,
            grid_convergence,
            point_scale,
        }
    }
}

impl GridProjection for Redfearn {
    fn grid_coordinates(&self, latitude: f64, longitude: f64) -> Result<GridPoint, GeoError> {
        let lon = normalize_longitude(longitude);
        let zone = self.zone_number(latitude, lon);
        let designator = format!("{}{}", zone, utm_letter_designator(latitude));
        Ok(self.solve_grid(latitude, lon, zone).into_point(designator))
    }

    fn zone_grid_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
        zone: &str,
    ) -> Result<GridPoint, GeoError> {
        let number = parse_zone_number(zone)?;
        let lon = normalize_longitude(longitude);
        Ok(self
            .solve_grid(latitude, lon, number)
            .into_point(zone.trim().to_string()))
    }

    fn geographic_coordinates(
        &self,
        zone: &str,
        easting: f64,
        northing: f64,
    ) -> Result<GeographicCoordinates, GeoError> {
        let zone: GridZone = zone.parse()?;
        Ok(self.solve_geographic(zone.number, zone.band_hemisphere(), easting, northing))
    }

    fn geographic_coordinates_ns(
        &self,
        zone_hemisphere: &str,
        easting: f64,
        northing: f64,
    ) -> Result<GeographicCoordinates, GeoError> {
        let zone: GridZone = zone_hemisphere.parse()?;
        Ok(self.solve_geographic(zone.number, zone.ns_hemisphere()?, easting, northing))
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    fn map_grid(&self) -> &MapGrid {
        &self.grid
    }
}
