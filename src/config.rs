//! Configuration for the sphere model and reporting unit

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::geodesy::{distance, find_point_at_distance_on_sphere, Coordinate, EARTH_RADIUS_KM};
use crate::types::DistanceUnit;

/// Sphere radius and default distance unit
///
/// Every field is optional in JSON; missing fields take the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeodesyConfig {
    #[serde(default = "default_earth_radius_km")]
    pub earth_radius_km: f64,
    #[serde(default)]
    pub default_unit: DistanceUnit,
}

fn default_earth_radius_km() -> f64 {
    EARTH_RADIUS_KM
}

impl Default for GeodesyConfig {
    fn default() -> Self {
        Self {
            earth_radius_km: default_earth_radius_km(),
            default_unit: DistanceUnit::default(),
        }
    }
}

impl GeodesyConfig {
    /// Parses and validates a configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GeodesyConfig = serde_json::from_str(json)?;
        config.validate()?;

        debug!(
            earth_radius_km = config.earth_radius_km,
            default_unit = %config.default_unit,
            "loaded geodesy configuration"
        );
        Ok(config)
    }

    /// Checks that the radius is a finite positive number
    pub fn validate(&self) -> Result<()> {
        if !self.earth_radius_km.is_finite() || self.earth_radius_km <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "earth_radius_km must be finite and positive, got {}",
                self.earth_radius_km
            )));
        }
        Ok(())
    }

    /// Destination point on the configured sphere
    pub fn destination(&self, start: Coordinate, initial_bearing_radians: f64, distance_km: f64) -> Coordinate {
        find_point_at_distance_on_sphere(start, initial_bearing_radians, distance_km, self.earth_radius_km)
    }

    /// Great-circle distance in the configured default unit
    pub fn distance(&self, from: Coordinate, to: Coordinate) -> f64 {
        distance(from.latitude, from.longitude, to.latitude, to.longitude, self.default_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_defaults() {
        let config = GeodesyConfig::default();
        assert_eq!(config.earth_radius_km, 6371.01);
        assert_eq!(config.default_unit, DistanceUnit::Miles);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = GeodesyConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GeodesyConfig::default());
    }

    #[test]
    fn test_from_json_str() {
        let config = GeodesyConfig::from_json_str(r#"{"earth_radius_km": 6378.137, "default_unit": "K"}"#).unwrap();
        assert_eq!(config.earth_radius_km, 6378.137);
        assert_eq!(config.default_unit, DistanceUnit::Kilometres);

        let config = GeodesyConfig::from_json_str(r#"{"default_unit": "nautical_miles"}"#).unwrap();
        assert_eq!(config.default_unit, DistanceUnit::NauticalMiles);
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let err = GeodesyConfig::from_json_str(r#"{"earth_radius_km": -1.0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let config = GeodesyConfig { earth_radius_km: f64::NAN, ..GeodesyConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(GeodesyConfig::from_json_str("{"), Err(Error::Json(_))));
        assert!(matches!(
            GeodesyConfig::from_json_str(r#"{"radius": 1.0}"#),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            GeodesyConfig::from_json_str(r#"{"default_unit": "furlongs"}"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_destination_uses_configured_radius() {
        let config = GeodesyConfig { earth_radius_km: 1000.0, ..GeodesyConfig::default() };
        let quarter = std::f64::consts::PI * 1000.0 / 2.0;
        let end = config.destination(Coordinate::new(0.0, 0.0), std::f64::consts::FRAC_PI_2, quarter);
        assert_abs_diff_eq!(end.longitude, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_distance_uses_default_unit() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);

        let config = GeodesyConfig::from_json_str(r#"{"default_unit": "kilometres"}"#).unwrap();
        assert_abs_diff_eq!(config.distance(a, b), 111.19, epsilon = 0.01);
        assert_abs_diff_eq!(GeodesyConfig::default().distance(a, b), 69.09, epsilon = 0.01);
    }
}
