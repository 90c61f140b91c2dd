//! Moving request form and submission payload.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{GeoPoint, MoveSize, MovingDetailsError, QuoteRequest};

/// Minimum notice, in days, between submission and moving date.
pub const MIN_NOTICE_DAYS: i64 = 7;

/// Date-time format used by the backend for `moving_date`.
pub const MOVING_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A customer's moving request as entered in the form.
#[derive(Debug, Clone, PartialEq)]
pub struct MovingDetails {
    /// Human-readable origin, e.g. "Nairobi".
    pub from_location: String,
    /// Origin coordinates.
    pub from: GeoPoint,
    /// Human-readable destination.
    pub to_location: String,
    /// Destination coordinates.
    pub to: GeoPoint,
    /// Home size being moved.
    pub home_size: MoveSize,
    /// Requested moving date and time.
    pub moving_date: NaiveDateTime,
    /// Whether the packing service is requested.
    pub packing_service: bool,
    /// Free-form notes for the mover.
    pub additional_details: Option<String>,
}

impl MovingDetails {
    /// Returns the quote request for these details.
    #[must_use]
    pub const fn quote_request(&self) -> QuoteRequest {
        QuoteRequest::new(self.from, self.to, self.home_size, self.packing_service)
    }

    /// Validates the form against the current time.
    ///
    /// Location names must be non-empty and the moving date must be at
    /// least [`MIN_NOTICE_DAYS`] days after `now`.
    ///
    /// # Errors
    ///
    /// Returns the first failed rule.
    pub fn validate(&self, now: NaiveDateTime) -> Result<(), MovingDetailsError> {
        if self.from_location.trim().is_empty() {
            return Err(MovingDetailsError::MissingField("From location"));
        }
        if self.to_location.trim().is_empty() {
            return Err(MovingDetailsError::MissingField("To location"));
        }
        if self.moving_date < now {
            return Err(MovingDetailsError::DateInPast(self.moving_date));
        }
        if self.moving_date < now + Duration::days(MIN_NOTICE_DAYS) {
            return Err(MovingDetailsError::DateTooSoon {
                date: self.moving_date,
                min_days: MIN_NOTICE_DAYS,
            });
        }
        Ok(())
    }
}

/// JSON body posted to the backend when a moving request is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveSubmission {
    /// Origin name.
    pub from_location: String,
    /// Origin latitude.
    pub from_lat: f64,
    /// Origin longitude.
    pub from_lon: f64,
    /// Destination name.
    pub to_location: String,
    /// Destination latitude.
    pub to_lat: f64,
    /// Destination longitude.
    pub to_lon: f64,
    /// Home size form value.
    pub home_size: MoveSize,
    /// Moving date in [`MOVING_DATE_FORMAT`].
    #[serde(with = "moving_date_format")]
    pub moving_date: NaiveDateTime,
    /// Whether the packing service is requested.
    pub packing_service: bool,
    /// Free-form notes, empty when none were given.
    pub additional_details: String,
    /// Estimated price.
    pub price: f64,
}

impl MoveSubmission {
    /// Builds the payload from validated details and a computed price.
    #[must_use]
    pub fn new(details: &MovingDetails, price: f64) -> Self {
        Self {
            from_location: details.from_location.trim().to_string(),
            from_lat: details.from.lat(),
            from_lon: details.from.lon(),
            to_location: details.to_location.trim().to_string(),
            to_lat: details.to.lat(),
            to_lon: details.to.lon(),
            home_size: details.home_size,
            moving_date: details.moving_date,
            packing_service: details.packing_service,
            additional_details: details.additional_details.clone().unwrap_or_default(),
            price,
        }
    }

    /// Serializes the payload to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

mod moving_date_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use super::MOVING_DATE_FORMAT;

    pub(super) fn serialize<S: Serializer>(
        date: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(MOVING_DATE_FORMAT))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, MOVING_DATE_FORMAT).map_err(D::Error::custom)
    }
}
