//! Benchmark fixtures for movequote.

use movequote_lib::prelude::*;

/// A named route between two cities.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    /// Short label used as the benchmark id.
    pub name: &'static str,
    /// Origin coordinates.
    pub from: (f64, f64),
    /// Destination coordinates.
    pub to: (f64, f64),
}

impl Route {
    /// Builds a quote request for this route.
    ///
    /// # Panics
    ///
    /// Panics if the fixture coordinates are out of range.
    pub fn request(&self, size: MoveSize, packing_service: bool) -> QuoteRequest {
        let from = GeoPoint::new(self.from.0, self.from.1).expect("fixture origin in range");
        let to = GeoPoint::new(self.to.0, self.to.1).expect("fixture destination in range");
        QuoteRequest::new(from, to, size, packing_service)
    }
}

/// Routes of increasing length.
pub const ROUTES: &[Route] = &[
    Route {
        name: "same-point",
        from: (-1.2921, 36.8219),
        to: (-1.2921, 36.8219),
    },
    Route {
        name: "nairobi-nakuru",
        from: (-1.2921, 36.8219),
        to: (-0.3031, 36.0800),
    },
    Route {
        name: "nairobi-mombasa",
        from: (-1.2921, 36.8219),
        to: (-4.0435, 39.6682),
    },
    Route {
        name: "antipodal",
        from: (0.0, 0.0),
        to: (0.0, 180.0),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_are_valid() {
        for route in ROUTES {
            let request = route.request(MoveSize::Studio, false);
            assert!(estimate_quote(&request).amount >= 0.0, "{}", route.name);
        }
    }
}
