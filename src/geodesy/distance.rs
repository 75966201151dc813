//! Great-circle distance by the spherical law of cosines

use tracing::trace;

use crate::geodesy::angle::{degrees_to_radians, radians_to_degrees};
use crate::types::DistanceUnit;

/// Nautical miles (arc minutes) per degree of arc
pub const MINUTES_PER_DEGREE: f64 = 60.0;

/// Statute miles per nautical mile, as used by the distance conversion
pub const STATUTE_MILES_PER_NAUTICAL_MILE: f64 = 1.1515;

/// Great-circle distance between two coordinates in degrees
///
/// Bit-identical coordinates return exactly 0 without touching the
/// trigonometry. Otherwise the cosine argument is passed to `acos` unclamped,
/// so nearly identical or nearly antipodal points can yield NaN.
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64, unit: DistanceUnit) -> f64 {
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }

    let theta = lon1 - lon2;
    let lat1 = degrees_to_radians(lat1);
    let lat2 = degrees_to_radians(lat2);
    let cos_arc = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * degrees_to_radians(theta).cos();

    let arc = cos_arc.acos();
    if arc.is_nan() {
        trace!(cos_arc, "distance cosine outside acos domain");
    }

    let miles = radians_to_degrees(arc) * MINUTES_PER_DEGREE * STATUTE_MILES_PER_NAUTICAL_MILE;
    miles * unit.factor_from_miles()
}

/// [`distance`] with the unit given as a character code
///
/// `'K'` and `'N'` select kilometres and nautical miles; any other code
/// means statute miles.
pub fn distance_with_code(lat1: f64, lon1: f64, lat2: f64, lon2: f64, unit: char) -> f64 {
    distance(lat1, lon1, lat2, lon2, DistanceUnit::from_code(unit))
}
