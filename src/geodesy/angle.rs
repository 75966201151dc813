//! Angle conversion, bearing normalization and half-plane classification
//!
//! `degree_back` and `validate_degree` keep their historical reduction rules
//! (iterative subtraction and truncation respectively) rather than a true
//! modulo; callers depend on the exact values they produce.

use std::f64::consts::PI;

const DEG_TO_RAD: f64 = PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / PI;

/// Upper bound on subtraction passes in [`degree_back`] before it falls back
/// to a single remainder step.
const MAX_BACK_REDUCTION_STEPS: f64 = 65_536.0;

/// Converts degrees to radians
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

/// Converts radians to degrees
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

/// Converts an angle in radians to a compass bearing in `[0, 360)` degrees
///
/// For angles of at least -360 degrees this is exactly `(deg + 360) % 360`.
/// Below that the Euclidean remainder keeps the result non-negative.
pub fn normalize_to_bearing(radians: f64) -> f64 {
    let bearing = (radians_to_degrees(radians) + 360.0).rem_euclid(360.0);
    // rem_euclid may round up to the divisor for tiny negative operands
    if bearing >= 360.0 {
        0.0
    } else {
        bearing
    }
}

/// Returns the reciprocal direction of `origin`, reduced into `(0, 360]`
///
/// Adds 180 and then subtracts 360 until the value no longer exceeds 360.
/// A result of exactly 360 is kept, not folded to 0. Inputs below -180 are
/// not lifted. Non-finite inputs yield NaN.
pub fn degree_back(origin: f64) -> f64 {
    let mut back = origin + 180.0;
    if !back.is_finite() {
        return f64::NAN;
    }

    if (back - 360.0) / 360.0 > MAX_BACK_REDUCTION_STEPS {
        let reduced = back % 360.0;
        return if reduced == 0.0 { 360.0 } else { reduced };
    }

    while back > 360.0 {
        back -= 360.0;
    }
    back
}

/// Whether `dest` lies in the open half-plane to the left of heading `src`
///
/// The left region spans from `src` to its reciprocal [`degree_back`]. When
/// that span wraps through north it becomes `(src, 360] ∪ [0, back)`.
pub fn is_degree_dest_left_of_cartesian(src: f64, dest: f64) -> bool {
    let back = degree_back(src);
    if back > src {
        dest > src && dest < back
    } else {
        (dest > src && dest <= 360.0) || (dest >= 0.0 && dest < back)
    }
}

/// Reduces `raw` by whole turns, truncating toward zero
///
/// A negative remainder `deg` is corrected to `360 - deg`, so small negative
/// inputs land above 360 (`validate_degree(-10.0) == 370.0`).
pub fn validate_degree(raw: f64) -> f64 {
    let deg = raw - (raw / 360.0).trunc() * 360.0;
    if deg < 0.0 {
        360.0 - deg
    } else {
        deg
    }
}
