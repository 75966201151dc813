//! Core data types for skyforest-geodesy

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Unit a great-circle distance is reported in
///
/// The native unit of [`distance`](crate::geodesy::distance::distance) is
/// the statute mile; the other units are fixed multipliers on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    /// Kilometres
    #[serde(alias = "K")]
    Kilometres,
    /// Nautical miles
    #[serde(alias = "N")]
    NauticalMiles,
    /// Statute miles
    #[default]
    #[serde(alias = "M")]
    Miles,
}

impl DistanceUnit {
    /// Maps a single-character unit code to a unit
    ///
    /// `'K'` selects kilometres and `'N'` nautical miles. Every other code,
    /// including lowercase variants, falls back to statute miles.
    pub fn from_code(code: char) -> Self {
        match code {
            'K' => DistanceUnit::Kilometres,
            'N' => DistanceUnit::NauticalMiles,
            _ => DistanceUnit::Miles,
        }
    }

    /// Returns the single-character code for this unit
    pub fn code(&self) -> char {
        match self {
            DistanceUnit::Kilometres => 'K',
            DistanceUnit::NauticalMiles => 'N',
            DistanceUnit::Miles => 'M',
        }
    }

    /// Returns the name of this unit
    pub fn name(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometres => "kilometres",
            DistanceUnit::NauticalMiles => "nautical_miles",
            DistanceUnit::Miles => "miles",
        }
    }

    /// Multiplier applied to a distance in statute miles
    pub fn factor_from_miles(&self) -> f64 {
        match self {
            DistanceUnit::Kilometres => KM_PER_STATUTE_MILE,
            DistanceUnit::NauticalMiles => NAUTICAL_MILES_PER_STATUTE_MILE,
            DistanceUnit::Miles => 1.0,
        }
    }
}

/// Kilometres in one statute mile
pub const KM_PER_STATUTE_MILE: f64 = 1.609344;

/// Nautical miles in one statute mile, as used by the distance conversion
pub const NAUTICAL_MILES_PER_STATUTE_MILE: f64 = 0.8684;

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceUnit {
    type Err = Error;

    /// Strict parse: unlike [`DistanceUnit::from_code`], unknown text is an error.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed {
            "K" => return Ok(DistanceUnit::Kilometres),
            "N" => return Ok(DistanceUnit::NauticalMiles),
            "M" => return Ok(DistanceUnit::Miles),
            _ => {}
        }

        [DistanceUnit::Kilometres, DistanceUnit::NauticalMiles, DistanceUnit::Miles]
            .into_iter()
            .find(|unit| unit.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::InvalidUnit(s.to_string()))
    }
}
