//! Error types for skyforest-geodesy
//!
//! The geodesic functions themselves never fail: out-of-domain arguments come
//! back as NaN or infinity. Errors only arise on the text-facing surface
//! (unit parsing and configuration loading).

use std::fmt;

/// Result type for skyforest-geodesy operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in skyforest-geodesy operations
#[derive(Debug)]
pub enum Error {
    /// Unknown distance unit in strict parsing
    InvalidUnit(String),

    /// Configuration failed validation
    InvalidConfig(String),

    /// Configuration text is not valid JSON for the expected shape
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidUnit(unit) => write!(f, "Invalid distance unit: {:?}", unit),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json(error)
    }
}
