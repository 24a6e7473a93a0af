//! Geodesics on the ellipsoid with Vincenty's iterative formulae.
//!
//! Both solvers iterate until the correction falls below the configured
//! tolerance or the iteration cap is reached. By default the estimate from
//! the last iteration is returned either way; [`InverseSolution::converged`]
//! and [`DirectSolution::converged`] say which happened.
//!
//! Nearly antipodal points are where the inverse solver stops at the cap,
//! and there the best-effort estimate is poor. With the default 15
//! iterations on WGS84, (0, 0) to (0.5, 179.7) does not converge: running
//! the direct solver along the reported distance and azimuth lands about
//! 50 km from the target. For the exact equatorial antipode (0, 0) to
//! (0, 180) the reported distance is about 100 km short of the true half
//! meridian. Callers that cannot accept this should check `converged` or
//! set [`VincentyConfig::fail_on_non_convergence`].

use std::f64::consts::{PI, TAU};

use serde::Serialize;

use crate::config::VincentyConfig;
use crate::error::GeoError;
use crate::proj::common::{floored_mod, normalize_longitude};
use crate::proj::ellipsoid::Ellipsoid;

/// Points closer than this (radians) in both latitude and longitude are
/// treated as identical, and longitudes this close as one meridian.
const SAME_POINT_TOLERANCE: f64 = 5.0e-14;

/// Azimuths of geodesics shorter than this (metres) are reported as 0.
const SHORT_LINE: f64 = 5.0e-5;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct InverseSolution {
    /// Ellipsoidal distance (metres).
    pub distance: f64,
    /// Azimuth at the first point towards the second (degrees, [0, 360)).
    pub forward_azimuth: f64,
    /// Azimuth at the second point back towards the first (degrees, [0, 360)).
    pub reverse_azimuth: f64,
    pub iterations: u32,
    pub converged: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DirectSolution {
    pub latitude: f64,
    pub longitude: f64,
    /// Azimuth at the end point back towards the start (degrees, [0, 360)).
    pub reverse_azimuth: f64,
    pub iterations: u32,
    pub converged: bool,
}

/// Outcome of one of the iteration loops.
struct Iteration {
    count: u32,
    converged: bool,
    last_correction: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Vincenty {
    ellipsoid: Ellipsoid,
    config: VincentyConfig,
}

impl Vincenty {
    pub fn new(ellipsoid_name: &str) -> Result<Self, GeoError> {
        Self::with_config(ellipsoid_name, VincentyConfig::default())
    }

    pub fn with_config(ellipsoid_name: &str, config: VincentyConfig) -> Result<Self, GeoError> {
        config.validate()?;
        Ok(Self {
            ellipsoid: Ellipsoid::new(ellipsoid_name)?,
            config,
        })
    }

    pub fn set_ellipsoid(&mut self, name: &str) -> Result<(), GeoError> {
        self.ellipsoid.set_ellipsoid(name)
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    pub fn config(&self) -> &VincentyConfig {
        &self.config
    }

    /// Distance and azimuths between two points given in degrees.
    pub fn inverse(
        &self,
        lat1: f64,
        lon1: f64,
        lat2: f64,
        lon2: f64,
    ) -> Result<InverseSolution, GeoError> {
        let p1 = lat1.to_radians();
        let p2 = lat2.to_radians();
        let e1 = lon1.to_radians().rem_euclid(TAU);
        let e2 = lon2.to_radians().rem_euclid(TAU);

        if (e1 - e2).abs() < SAME_POINT_TOLERANCE && (p1 - p2).abs() < SAME_POINT_TOLERANCE {
            return Ok(InverseSolution {
                distance: 0.0,
                forward_azimuth: 0.0,
                reverse_azimuth: 0.0,
                iterations: 0,
                converged: true,
            });
        }

        let (distance, mut az1, mut az2, iteration) = self.solve_inverse(p1, e1, p2, e2);
        self.check_convergence("inverse", &iteration)?;

        if distance < SHORT_LINE {
            az1 = 0.0;
            az2 = 0.0;
        }

        // On a meridian the general formulae can produce either orientation.
        if (e1 - e2).abs() < SAME_POINT_TOLERANCE {
            if p1 > p2 {
                az1 = PI;
                az2 = 0.0;
            } else {
                az1 = 0.0;
                az2 = PI;
            }
        }

        Ok(InverseSolution {
            distance,
            forward_azimuth: floored_mod(az1.to_degrees(), 360.0),
            reverse_azimuth: floored_mod(az2.to_degrees(), 360.0),
            iterations: iteration.count,
            converged: iteration.converged,
        })
    }

    /// End point and reverse azimuth after travelling `distance` metres from
    /// (`lat1`, `lon1`) along `forward_azimuth` (all angles in degrees).
    pub fn direct(
        &self,
        lat1: f64,
        lon1: f64,
        distance: f64,
        forward_azimuth: f64,
    ) -> Result<DirectSolution, GeoError> {
        let f = self.ellipsoid.flattening();
        let b = self.ellipsoid.semi_minor_axis();

        let az1 = forward_azimuth.to_radians();
        let tu1 = (1.0 - f) * lat1.to_radians().tan();
        let u1 = tu1.atan();
        let su1 = u1.sin();
        let cu1 = u1.cos();
        let saz1 = az1.sin();
        let caz1 = az1.cos();

        let salf = cu1 * saz1;
        let c2alf = 1.0 - salf * salf;
        let (a_coef, b_coef) = self.helmert_coefficients(c2alf);

        let sig1 = tu1.atan2(caz1);
        let sig0 = distance / (b * a_coef);
        let mut sig = sig0;

        let mut iteration = Iteration {
            count: 0,
            converged: false,
            last_correction: f64::INFINITY,
        };
        while iteration.count < self.config.max_iterations {
            iteration.count += 1;
            let c2sigm = (2.0 * sig1 + sig).cos();
            let dsig = sigma_correction(b_coef, sig.sin(), sig.cos(), c2sigm);
            let previous = sig;
            sig = sig0 + dsig;
            iteration.last_correction = sig - previous;
            if iteration.last_correction.abs() <= self.config.tolerance {
                iteration.converged = true;
                break;
            }
        }
        self.check_convergence("direct", &iteration)?;

        let ssig = sig.sin();
        let csig = sig.cos();
        let c2sigm = (2.0 * sig1 + sig).cos();

        let t0 = su1 * csig + cu1 * ssig * caz1;
        let t1 = su1 * ssig - cu1 * csig * caz1;
        let latitude = t0.atan2((1.0 - f) * (salf * salf + t1 * t1).sqrt());

        let l = (ssig * saz1).atan2(cu1 * csig - su1 * ssig * caz1);
        let c = (f / 16.0) * c2alf * (4.0 + f * (4.0 - 3.0 * c2alf));
        let w = l
            - (1.0 - c)
                * f
                * salf
                * (sig + c * ssig * (c2sigm + c * csig * (-1.0 + 2.0 * c2sigm * c2sigm)));
        let longitude = normalize_longitude(lon1 + w.to_degrees());

        let az2 = salf.atan2(-su1 * ssig + cu1 * csig * caz1) + PI;

        Ok(DirectSolution {
            latitude: latitude.to_degrees(),
            longitude,
            reverse_azimuth: floored_mod(az2.to_degrees(), 360.0),
            iterations: iteration.count,
            converged: iteration.converged,
        })
    }

    /// Inverse iteration on the auxiliary sphere. Angles in radians;
    /// returns (distance, az1, az2, iteration).
    fn solve_inverse(&self, p1: f64, e1: f64, p2: f64, e2: f64) -> (f64, f64, f64, Iteration) {
        let f = self.ellipsoid.flattening();
        let b = self.ellipsoid.semi_minor_axis();

        let u1 = ((1.0 - f) * p1.tan()).atan();
        let u2 = ((1.0 - f) * p2.tan()).atan();
        let su1 = u1.sin();
        let cu1 = u1.cos();
        let su2 = u2.sin();
        let cu2 = u2.cos();

        let w = e2 - e1;
        let mut dlon = w;
        let mut ssig = 0.0;
        let mut csig = 0.0;
        let mut sig = 0.0;
        let mut c2alf = 1.0;
        let mut c2sigm = 0.0;

        let mut iteration = Iteration {
            count: 0,
            converged: false,
            last_correction: f64::INFINITY,
        };
        while iteration.count < self.config.max_iterations {
            iteration.count += 1;
            let previous = dlon;
            let clon = dlon.cos();
            let slon = dlon.sin();

            let t1 = cu2 * slon;
            let t2 = cu1 * su2 - su1 * cu2 * clon;
            ssig = (t1 * t1 + t2 * t2).sqrt();
            csig = su1 * su2 + cu1 * cu2 * clon;
            sig = ssig.atan2(csig);

            let salf = if ssig == 0.0 { 0.0 } else { cu1 * cu2 * slon / ssig };
            c2alf = 1.0 - salf * salf;
            // Both points on the equator
            c2sigm = if c2alf == 0.0 {
                0.0
            } else {
                csig - 2.0 * su1 * su2 / c2alf
            };

            let c = (f / 16.0) * c2alf * (4.0 + f * (4.0 - 3.0 * c2alf));
            dlon = w
                + (1.0 - c)
                    * f
                    * salf
                    * (sig + c * ssig * (c2sigm + c * csig * (-1.0 + 2.0 * c2sigm * c2sigm)));

            iteration.last_correction = dlon - previous;
            if iteration.last_correction.abs() <= self.config.tolerance {
                iteration.converged = true;
                break;
            }
        }

        let (a_coef, b_coef) = self.helmert_coefficients(c2alf);
        let dsig = sigma_correction(b_coef, ssig, csig, c2sigm);
        let distance = b * a_coef * (sig - dsig);

        let clon = dlon.cos();
        let slon = dlon.sin();
        let az1 = (cu2 * slon).atan2(cu1 * su2 - su1 * cu2 * clon);
        let az2 = (cu1 * slon).atan2(-su1 * cu2 + cu1 * su2 * clon) + PI;

        (distance, az1, az2, iteration)
    }

    /// Helmert's series coefficients A and B for cos²α.
    fn helmert_coefficients(&self, c2alf: f64) -> (f64, f64) {
        let u2 = c2alf * self.ellipsoid.e_dash_sq();
        let a = 1.0 + (u2 / 16384.0) * (4096.0 + u2 * (-768.0 + u2 * (320.0 - 175.0 * u2)));
        let b = (u2 / 1024.0) * (256.0 + u2 * (-128.0 + u2 * (74.0 - 47.0 * u2)));
        (a, b)
    }

    fn check_convergence(&self, solver: &'static str, iteration: &Iteration) -> Result<(), GeoError> {
        if iteration.converged {
            return Ok(());
        }
        tracing::warn!(
            solver,
            iterations = iteration.count,
            last_correction = iteration.last_correction,
            "Vincenty iteration cap reached"
        );
        if self.config.fail_on_non_convergence {
            return Err(GeoError::NonConvergence {
                iterations: iteration.count,
            });
        }
        Ok(())
    }
}

/// Δσ of Vincenty's distance series.
fn sigma_correction(b: f64, ssig: f64, csig: f64, c2sigm: f64) -> f64 {
    b * ssig
        * (c2sigm
            + (b / 4.0)
                * (csig * (-1.0 + 2.0 * c2sigm * c2sigm)
                    - (b / 6.0)
                        * c2sigm
                        * (-3.0 + 4.0 * ssig * ssig)
                        * (-3.0 + 4.0 * c2sigm * c2sigm)))
}
