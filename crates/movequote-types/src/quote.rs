//! Quote request and result.

use serde::{Deserialize, Serialize};

use crate::{GeoPoint, MoveSize};

/// Inputs for a single price computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Where the move starts.
    pub origin: GeoPoint,
    /// Where the move ends.
    pub destination: GeoPoint,
    /// Home size being moved.
    pub size: MoveSize,
    /// Whether the packing service is requested.
    #[serde(default)]
    pub packing_service: bool,
}

impl QuoteRequest {
    /// Creates a new quote request.
    #[must_use]
    pub const fn new(
        origin: GeoPoint,
        destination: GeoPoint,
        size: MoveSize,
        packing_service: bool,
    ) -> Self {
        Self {
            origin,
            destination,
            size,
            packing_service,
        }
    }

    /// Returns a copy with the packing service flag changed.
    #[must_use]
    pub const fn with_packing_service(mut self, packing_service: bool) -> Self {
        self.packing_service = packing_service;
        self
    }

    /// Returns a copy with a different home size.
    #[must_use]
    pub const fn with_size(mut self, size: MoveSize) -> Self {
        self.size = size;
        self
    }
}

/// A computed price estimate.
///
/// `amount` is the sum of `transport` and `packing`. Values are not rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Great-circle distance in kilometers.
    pub distance_km: f64,
    /// Distance-based part of the price.
    pub transport: f64,
    /// Packing service surcharge (zero when not requested).
    pub packing: f64,
    /// Total price in currency units.
    pub amount: f64,
}

impl QuoteResult {
    /// Creates a result from its components.
    #[must_use]
    pub const fn new(distance_km: f64, transport: f64, packing: f64) -> Self {
        Self {
            distance_km,
            transport,
            packing,
            amount: transport + packing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_amount_is_sum() {
        let result = QuoteResult::new(10.0, 5000.0, 3000.0);
        assert_eq!(result.amount, 8000.0);
        assert_eq!(result.transport, 5000.0);
        assert_eq!(result.packing, 3000.0);
    }

    #[test]
    fn test_request_deserialize_defaults_packing() {
        let json = r#"{
            "origin": {"lat": -1.2921, "lon": 36.8219},
            "destination": {"lat": -4.0435, "lon": 39.6682},
            "size": "studio"
        }"#;
        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.size, MoveSize::Studio);
        assert!(!request.packing_service);
    }

    #[test]
    fn test_with_builders() {
        let point = GeoPoint::new(0.0, 0.0).unwrap();
        let request = QuoteRequest::new(point, point, MoveSize::Bedsitter, false)
            .with_packing_service(true)
            .with_size(MoveSize::TwoBedroom);
        assert!(request.packing_service);
        assert_eq!(request.size, MoveSize::TwoBedroom);
    }
}
