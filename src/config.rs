use serde::{Deserialize, Serialize};

use crate::ecef::Ecef;
use crate::error::GeoError;
use crate::proj::redfearn::Redfearn;
use crate::vincenty::Vincenty;

/// Iteration policy for the Vincenty solvers.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VincentyConfig {
    pub max_iterations: u32,
    /// Convergence threshold on successive corrections (radians).
    pub tolerance: f64,
    /// Return [`GeoError::NonConvergence`] instead of the best estimate when
    /// the cap is reached.
    pub fail_on_non_convergence: bool,
}

impl VincentyConfig {
    /// Rejects settings the solvers cannot iterate with.
    pub fn validate(&self) -> Result<(), GeoError> {
        if self.max_iterations == 0 {
            return Err(GeoError::InvalidSetting(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(GeoError::InvalidSetting(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

impl Default for VincentyConfig {
    fn default() -> Self {
        Self {
            max_iterations: 15,
            tolerance: 5.0e-15,
            fail_on_non_convergence: false,
        }
    }
}

/// Names of the ellipsoid and map grid to bind plus solver settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ellipsoid: String,
    pub map_grid: String,
    pub vincenty: VincentyConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ellipsoid: "WGS84".to_string(),
            map_grid: "UTM".to_string(),
            vincenty: VincentyConfig::default(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, GeoError> {
        let config: Self = serde_json::from_str(json)?;
        config.vincenty.validate()?;
        Ok(config)
    }

    pub fn with_ellipsoid(mut self, name: impl Into<String>) -> Self {
        self.ellipsoid = name.into();
        self
    }

    pub fn with_map_grid(mut self, name: impl Into<String>) -> Self {
        self.map_grid = name.into();
        self
    }

    pub fn with_vincenty(mut self, vincenty: VincentyConfig) -> Self {
        self.vincenty = vincenty;
        self
    }

    pub fn redfearn(&self) -> Result<Redfearn, GeoError> {
        Redfearn::new(&self.ellipsoid, &self.map_grid)
    }

    pub fn ecef(&self) -> Result<Ecef, GeoError> {
        Ecef::new(&self.ellipsoid)
    }

    pub fn vincenty(&self) -> Result<Vincenty, GeoError> {
        Vincenty::with_config(&self.ellipsoid, self.vincenty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::proj::GridProjection;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ellipsoid, "WGS84");
        assert_eq!(config.map_grid, "UTM");
        assert_eq!(config.vincenty.max_iterations, 15);
        assert_eq!(config.vincenty.tolerance, 5.0e-15);
        assert!(!config.vincenty.fail_on_non_convergence);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = Config::from_json(r#"{"ellipsoid": "GRS80", "vincenty": {"max_iterations": 200}}"#)
            .unwrap();
        assert_eq!(config.ellipsoid, "GRS80");
        assert_eq!(config.map_grid, "UTM");
        assert_eq!(config.vincenty.max_iterations, 200);
        assert_eq!(config.vincenty.tolerance, 5.0e-15);

        let empty = Config::from_json("{}").unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = Config::from_json(r#"{"ellipsoid": 3}"#).unwrap_err();
        assert!(matches!(err, GeoError::Config(_)));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_rejects_unusable_vincenty_settings() {
        for json in [
            r#"{"vincenty": {"max_iterations": 0}}"#,
            r#"{"vincenty": {"tolerance": -1e-12}}"#,
        ] {
            let err = Config::from_json(json).unwrap_err();
            assert!(matches!(err, GeoError::InvalidSetting(_)), "{json}: {err}");
            assert_eq!(err.kind(), ErrorKind::Configuration);
        }

        let nan = VincentyConfig {
            tolerance: f64::NAN,
            ..VincentyConfig::default()
        };
        assert!(nan.validate().is_err());
        assert!(VincentyConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builds_components() {
        let config = Config::default().with_ellipsoid("GRS80").with_map_grid("MGA");
        let redfearn = config.redfearn().unwrap();
        assert_eq!(redfearn.map_grid().name(), "MGA");
        assert_eq!(config.ecef().unwrap().ellipsoid().name(), "GRS80");
        assert_eq!(config.vincenty().unwrap().config().max_iterations, 15);
    }

    #[test]
    fn test_unknown_names_fail_when_building() {
        let config = Config::default().with_ellipsoid("Nowhere");
        assert!(matches!(config.redfearn(), Err(GeoError::EllipsoidNotFound(_))));
        assert!(config.ecef().is_err());
        assert!(config.vincenty().is_err());

        let config = Config::default().with_map_grid("Nowhere");
        assert!(matches!(config.redfearn(), Err(GeoError::MapGridNotFound(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = Config::default().with_vincenty(VincentyConfig {
            max_iterations: 50,
            tolerance: 1e-12,
            fail_on_non_convergence: true,
        });
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }
}
