use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("The ellipsoid {0} does not exist.")]
    EllipsoidNotFound(String),

    #[error("The map grid {0} does not exist.")]
    MapGridNotFound(String),

    #[error("LocalRedfearn can only work with the UTM grid, got {0}")]
    UnsupportedGrid(String),

    #[error("LocalRedfearn is only able to operate in local zone 1, got zone {zone}")]
    ZoneConstraint { zone: i32 },

    #[error("Invalid zone designator: {0:?}")]
    InvalidZone(String),

    #[error("Vincenty solution did not converge after {iterations} iterations")]
    NonConvergence { iterations: u32 },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid solver setting: {0}")]
    InvalidSetting(String),
}

/// Coarse classification of a [`GeoError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An ellipsoid or map grid name is unknown, or the configuration is malformed.
    Configuration,
    /// A local projection was requested on a grid other than UTM.
    UnsupportedGrid,
    /// A point falls outside the single zone of a local projection.
    ZoneConstraint,
    /// A zone designator could not be parsed.
    InvalidInput,
    /// An iterative solver hit its cap and was asked to report it.
    NonConvergence,
}

impl GeoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeoError::EllipsoidNotFound(_)
            | GeoError::MapGridNotFound(_)
            | GeoError::Config(_)
            | GeoError::InvalidSetting(_) => ErrorKind::Configuration,
            GeoError::UnsupportedGrid(_) => ErrorKind::UnsupportedGrid,
            GeoError::ZoneConstraint { .. } => ErrorKind::ZoneConstraint,
            GeoError::InvalidZone(_) => ErrorKind::InvalidInput,
            GeoError::NonConvergence { .. } => ErrorKind::NonConvergence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(
            GeoError::EllipsoidNotFound("Mars".into()).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            GeoError::MapGridNotFound("OSGB".into()).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            GeoError::UnsupportedGrid("MGA".into()).kind(),
            ErrorKind::UnsupportedGrid
        );
        assert_eq!(
            GeoError::ZoneConstraint { zone: 2 }.kind(),
            ErrorKind::ZoneConstraint
        );
        assert_eq!(GeoError::InvalidZone("".into()).kind(), ErrorKind::InvalidInput);
        assert_eq!(
            GeoError::InvalidSetting("max_iterations".into()).kind(),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn test_messages_name_the_culprit() {
        let msg = GeoError::EllipsoidNotFound("Mars".into()).to_string();
        assert!(msg.contains("Mars"), "{msg}");
        let msg = GeoError::ZoneConstraint { zone: 7 }.to_string();
        assert!(msg.contains("zone 7"), "{msg}");
    }
}
