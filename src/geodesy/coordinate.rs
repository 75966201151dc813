use serde::{Deserialize, Serialize};

use crate::geodesy::{bearing, destination, distance};
use crate::types::DistanceUnit;

/// A geographic coordinate in degrees on the spherical Earth
///
/// Neither component is range checked: latitudes outside [-90, 90] and
/// longitudes outside [-180, 180] are carried through the math as-is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude/longitude in degrees
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a coordinate from longitude/latitude in degrees (x, y order)
    pub fn from_lonlat(lon: f64, lat: f64) -> Self {
        Self::new(lat, lon)
    }

    /// Point reached by travelling `distance_km` along `initial_bearing_radians`
    pub fn destination(&self, initial_bearing_radians: f64, distance_km: f64) -> Self {
        destination::find_point_at_distance(*self, initial_bearing_radians, distance_km)
    }

    /// Rhumb-line bearing in degrees from this coordinate to `other`
    pub fn bearing_to(&self, other: &Coordinate) -> f64 {
        bearing::bearing_degrees(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    /// Great-circle distance to `other` in the given unit
    pub fn distance_to(&self, other: &Coordinate, unit: DistanceUnit) -> f64 {
        distance::distance(self.latitude, self.longitude, other.latitude, other.longitude, unit)
    }
}
