//! Destination point on a sphere (the direct geodesic problem)

use tracing::trace;

use crate::geodesy::angle::{degrees_to_radians, radians_to_degrees};
use crate::geodesy::coordinate::Coordinate;

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.01;

/// Point reached from `start` after `distance_km` along a great circle
/// leaving at `initial_bearing_radians`, on a sphere of [`EARTH_RADIUS_KM`]
///
/// The resulting longitude is not wrapped, so paths across the antimeridian
/// return values beyond ±180.
pub fn find_point_at_distance(start: Coordinate, initial_bearing_radians: f64, distance_km: f64) -> Coordinate {
    find_point_at_distance_on_sphere(start, initial_bearing_radians, distance_km, EARTH_RADIUS_KM)
}

/// Same as [`find_point_at_distance`] on a sphere of `radius_km`
///
/// # Arguments
/// * `start` - Starting coordinate in degrees
/// * `initial_bearing_radians` - Initial course, radians clockwise from north
/// * `distance_km` - Distance to travel, same unit as `radius_km`
/// * `radius_km` - Sphere radius
pub fn find_point_at_distance_on_sphere(
    start: Coordinate,
    initial_bearing_radians: f64,
    distance_km: f64,
    radius_km: f64,
) -> Coordinate {
    let dist_ratio = distance_km / radius_km;
    let dist_ratio_sin = dist_ratio.sin();
    let dist_ratio_cos = dist_ratio.cos();

    let start_lat = degrees_to_radians(start.latitude);
    let start_lon = degrees_to_radians(start.longitude);
    let start_lat_sin = start_lat.sin();
    let start_lat_cos = start_lat.cos();

    // Not clamped: drift outside [-1, 1] comes back as NaN.
    let sin_end_lat = start_lat_sin * dist_ratio_cos
        + start_lat_cos * dist_ratio_sin * initial_bearing_radians.cos();
    let end_lat = sin_end_lat.asin();
    if end_lat.is_nan() {
        trace!(sin_end_lat, "destination latitude outside asin domain");
    }

    let end_lon = start_lon
        + (initial_bearing_radians.sin() * dist_ratio_sin * start_lat_cos)
            .atan2(dist_ratio_cos - start_lat_sin * end_lat.sin());

    Coordinate::new(radians_to_degrees(end_lat), radians_to_degrees(end_lon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesy::distance::distance;
    use crate::types::DistanceUnit;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_zero_distance_is_identity() {
        for (lat, lon) in [(0.0, 0.0), (53.5461, -113.4938), (-33.86, 151.21), (89.0, 45.0)] {
            for bearing in [0.0, 1.0, PI, -2.5] {
                let end = find_point_at_distance(Coordinate::new(lat, lon), bearing, 0.0);
                assert_abs_diff_eq!(end.latitude, lat, epsilon = 1e-9);
                assert_abs_diff_eq!(end.longitude, lon, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_due_north_along_meridian() {
        // a quarter of the circumference reaches the pole
        let quarter = PI * EARTH_RADIUS_KM / 2.0;
        let end = find_point_at_distance(Coordinate::new(0.0, 10.0), 0.0, quarter);
        assert_abs_diff_eq!(end.latitude, 90.0, epsilon = 1e-6);
    }

    #[test]
    fn test_due_east_along_equator() {
        let one_degree = 2.0 * PI * EARTH_RADIUS_KM / 360.0;
        let end = find_point_at_distance(Coordinate::new(0.0, 0.0), FRAC_PI_2, one_degree);
        assert_abs_diff_eq!(end.latitude, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(end.longitude, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_longitude_not_wrapped_across_antimeridian() {
        let end = find_point_at_distance(Coordinate::new(0.0, 179.0), FRAC_PI_2, 500.0);
        assert!(end.longitude > 180.0, "longitude = {}", end.longitude);
        assert_abs_diff_eq!(end.longitude, 179.0 + 500.0 / (2.0 * PI * EARTH_RADIUS_KM / 360.0), epsilon = 1e-9);
    }

    #[test]
    fn test_reference_destination() {
        // Kinder Scout towards the east coast, 124.8 km at 96.02 degrees
        let start = Coordinate::new(53.320556, -1.729722);
        let end = find_point_at_distance(start, 96.021666667_f64.to_radians(), 124.8);
        assert_abs_diff_eq!(end.latitude, 53.188333, epsilon = 0.0005);
        assert_abs_diff_eq!(end.longitude, 0.133333, epsilon = 0.0005);
    }

    #[test]
    fn test_distance_back_recovers_travelled_distance() {
        let start = Coordinate::new(49.2827, -123.1207);
        for (bearing, km) in [(0.3, 250.0), (2.0, 800.0), (4.4, 1500.0)] {
            let end = find_point_at_distance(start, bearing, km);
            let back = distance(start.latitude, start.longitude, end.latitude, end.longitude, DistanceUnit::Kilometres);
            assert_relative_eq!(back, km, max_relative = 1e-3);
        }
    }

    #[test]
    fn test_custom_radius() {
        let end = find_point_at_distance_on_sphere(Coordinate::new(0.0, 0.0), FRAC_PI_2, PI / 2.0, 1.0);
        assert_abs_diff_eq!(end.longitude, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_non_finite_propagates() {
        let end = find_point_at_distance(Coordinate::new(f64::NAN, 0.0), 0.0, 10.0);
        assert!(end.latitude.is_nan());
        let end = find_point_at_distance(Coordinate::new(0.0, 0.0), 0.0, f64::INFINITY);
        assert!(end.latitude.is_nan());
    }
}
