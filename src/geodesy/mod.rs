//! Spherical navigation math on latitude/longitude pairs in degrees

pub mod angle;
pub mod bearing;
pub mod coordinate;
pub mod destination;
pub mod distance;

pub use angle::{
    degree_back, degrees_to_radians, is_degree_dest_left_of_cartesian, normalize_to_bearing,
    radians_to_degrees, validate_degree,
};
pub use bearing::{bearing_degrees, relative_bearing};
pub use coordinate::Coordinate;
pub use destination::{find_point_at_distance, find_point_at_distance_on_sphere, EARTH_RADIUS_KM};
pub use distance::{distance, distance_with_code, MINUTES_PER_DEGREE, STATUTE_MILES_PER_NAUTICAL_MILE};
