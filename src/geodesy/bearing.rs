//! Rhumb-line bearings between coordinates and bearings relative to a heading

use std::f64::consts::PI;

use crate::geodesy::angle::{degrees_to_radians, normalize_to_bearing};

/// Rhumb-line (constant-course) bearing from point 1 to point 2
///
/// Uses the Mercator latitude difference, taking the short way around when
/// the longitude difference exceeds half a turn. The result is in `[0, 360)`
/// degrees, 0 being north. Coincident points give 0.
pub fn bearing_degrees(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let mut d_lon = degrees_to_radians(lon2 - lon1);
    let d_phi = ((degrees_to_radians(lat2) / 2.0 + PI / 4.0).tan()
        / (degrees_to_radians(lat1) / 2.0 + PI / 4.0).tan())
    .ln();

    if d_lon.abs() > PI {
        d_lon = if d_lon > 0.0 {
            -(2.0 * PI - d_lon)
        } else {
            2.0 * PI + d_lon
        };
    }

    normalize_to_bearing(d_lon.atan2(d_phi))
}

/// Bearing to point 2 measured clockwise from `heading`
///
/// Arguments are longitude first: `(x1, y1)` is the observer and `(x2, y2)`
/// the target. The difference is corrected by at most one turn in each
/// direction, so headings far outside `[-360, 360]` can leave the result out
/// of range.
pub fn relative_bearing(x1: f64, y1: f64, heading: f64, x2: f64, y2: f64) -> f64 {
    let absolute = bearing_degrees(y1, x1, y2, x2);
    let mut relative = absolute - heading;
    if relative < 0.0 {
        relative += 360.0;
    }
    if relative > 360.0 {
        relative -= 360.0;
    }
    relative
}
