//! Common helpers for projection math (angle wrapping, meridian distance, radii of curvature).

use super::ellipsoid::Ellipsoid;

/// Floored modulo: the result has the sign of `y`.
pub fn floored_mod(x: f64, y: f64) -> f64 {
    x - y * (x / y).floor()
}

/// Wrap a longitude in degrees into [-180, 180).
pub fn normalize_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

/// Meridian distance from the equator to latitude `phi` (radians), using the
/// series in e², e⁴, e⁶.
pub fn meridian_distance(ellipsoid: &Ellipsoid, phi: f64) -> f64 {
    let a = ellipsoid.semi_major_axis();
    let e2 = ellipsoid.eccentricity_sq();
    let e4 = e2 * e2;
    let e6 = e4 * e2;

    let a0 = 1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0;
    let a2 = 3.0 / 8.0 * (e2 + e4 / 4.0 + 15.0 * e6 / 128.0);
    let a4 = 15.0 / 256.0 * (e4 + 3.0 * e6 / 4.0);
    let a6 = 35.0 * e6 / 3072.0;

    a * (a0 * phi - a2 * (2.0 * phi).sin() + a4 * (4.0 * phi).sin() - a6 * (6.0 * phi).sin())
}

/// Foot-point latitude (radians): the latitude whose meridian distance is `m`.
pub fn foot_point_latitude(ellipsoid: &Ellipsoid, m: f64) -> f64 {
    let n = ellipsoid.n();
    let n2 = n * n;
    let n3 = n2 * n;
    let n4 = n3 * n;

    let sigma = (m / ellipsoid.g()).to_radians();

    sigma
        + (3.0 * n / 2.0 - 27.0 * n3 / 32.0) * (2.0 * sigma).sin()
        + (21.0 * n2 / 16.0 - 55.0 * n4 / 32.0) * (4.0 * sigma).sin()
        + (151.0 * n3 / 96.0) * (6.0 * sigma).sin()
        + (1097.0 * n4 / 512.0) * (8.0 * sigma).sin()
}

/// Radii of curvature (ρ meridian, ν prime vertical) at a latitude with sine `s`.
pub fn radii_of_curvature(ellipsoid: &Ellipsoid, s: f64) -> (f64, f64) {
    let a = ellipsoid.semi_major_axis();
    let e2 = ellipsoid.eccentricity_sq();
    let w2 = 1.0 - e2 * s * s;
    let rho = a * (1.0 - e2) / w2.powf(1.5);
    let nu = a / w2.sqrt();
    (rho, nu)
}
