//! skyforest-geodesy - Spherical navigation math for Rust
//!
//! skyforest-geodesy provides stateless bearing, distance and destination-point
//! calculations on latitude/longitude pairs in degrees, using a spherical
//! Earth model.
//!
//! # Examples
//!
//! ## Distance and Bearing
//!
//! ```
//! use skyforest_geodesy::{bearing_degrees, distance, DistanceUnit};
//!
//! let km = distance(0.0, 0.0, 0.0, 1.0, DistanceUnit::Kilometres);
//! assert!((km - 111.19).abs() < 0.01);
//!
//! let bearing = bearing_degrees(0.0, 0.0, 0.0, 10.0);
//! assert!((bearing - 90.0).abs() < 1e-9);
//! ```
//!
//! ## Projecting a Destination
//!
//! ```
//! use skyforest_geodesy::{find_point_at_distance, Coordinate};
//!
//! let vancouver = Coordinate::new(49.2827, -123.1207);
//! let end = find_point_at_distance(vancouver, 90f64.to_radians(), 100.0);
//! assert!(end.longitude > vancouver.longitude);
//! ```
//!
//! ## Configuration
//!
//! ```
//! use skyforest_geodesy::{Coordinate, DistanceUnit, GeodesyConfig};
//!
//! let config = GeodesyConfig::from_json_str(r#"{"default_unit": "K"}"#)?;
//! assert_eq!(config.default_unit, DistanceUnit::Kilometres);
//!
//! let km = config.distance(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0));
//! assert!((km - 111.19).abs() < 0.01);
//! # Ok::<(), skyforest_geodesy::Error>(())
//! ```
//!
//! Out-of-domain inputs are never rejected: they surface as NaN or infinity
//! in the returned values.

pub mod error;
pub mod types;
pub mod config;
pub mod geodesy;

pub use error::{Error, Result};
pub use types::DistanceUnit;
pub use config::GeodesyConfig;
pub use geodesy::{
    bearing_degrees, degree_back, degrees_to_radians, distance, distance_with_code,
    find_point_at_distance, find_point_at_distance_on_sphere, is_degree_dest_left_of_cartesian,
    normalize_to_bearing, radians_to_degrees, relative_bearing, validate_degree, Coordinate,
    EARTH_RADIUS_KM,
};
