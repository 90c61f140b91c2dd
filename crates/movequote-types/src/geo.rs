//! Geographic coordinates.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CoordinateError, QuoteError};

/// A latitude/longitude pair in signed degrees.
///
/// Latitude is always within [-90, 90] and longitude within [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

/// Unchecked form used for deserialization.
#[derive(Deserialize)]
struct RawGeoPoint {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = CoordinateError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lon)
    }
}

impl GeoPoint {
    /// Minimum and maximum latitude in degrees.
    pub const LAT_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;

    /// Minimum and maximum longitude in degrees.
    pub const LON_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

    /// Creates a new point, validating both coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is out of range or not finite.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        if !Self::LAT_RANGE.contains(&lat) {
            return Err(CoordinateError::Latitude(lat));
        }
        if !Self::LON_RANGE.contains(&lon) {
            return Err(CoordinateError::Longitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Returns the latitude in degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns the longitude in degrees.
    #[must_use]
    pub const fn lon(&self) -> f64 {
        self.lon
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4},{:.4}", self.lat, self.lon)
    }
}

/// Parses `"LAT,LON"`, e.g. `"-1.2921,36.8219"`.
impl FromStr for GeoPoint {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s.split_once(',').ok_or_else(|| parse_error(s))?;
        let lat: f64 = lat.trim().parse().map_err(|_| parse_error(s))?;
        let lon: f64 = lon.trim().parse().map_err(|_| parse_error(s))?;
        Ok(Self::new(lat, lon)?)
    }
}

fn parse_error(s: &str) -> QuoteError {
    QuoteError::Parse(format!("invalid coordinate '{s}', expected LAT,LON"))
}
