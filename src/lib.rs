//! Geographic coordinate conversions on named reference ellipsoids:
//! Redfearn's formulae for zoned transverse Mercator grids (UTM, MGA),
//! Vincenty geodesics and Earth-centred Cartesian coordinates.

pub mod config;
pub mod ecef;
pub mod error;
pub mod point;
pub mod proj;
pub mod registry;
pub mod vincenty;

pub use config::{Config, VincentyConfig};
pub use ecef::Ecef;
pub use error::{ErrorKind, GeoError};
pub use point::{CartesianPoint, GeodeticPoint, GeographicCoordinates, GridPoint, MapCoordinates};
pub use proj::ellipsoid::Ellipsoid;
pub use proj::local_redfearn::LocalRedfearn;
pub use proj::local_tm::LocalTmProjection;
pub use proj::map_grid::MapGrid;
pub use proj::redfearn::Redfearn;
pub use proj::GridProjection;
pub use vincenty::{DirectSolution, InverseSolution, Vincenty};
