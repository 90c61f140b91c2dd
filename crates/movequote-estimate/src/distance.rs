//! Great-circle distance.

use movequote_types::GeoPoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the haversine distance between two points in kilometers.
///
/// Inputs are trusted: range checks happen when a [`GeoPoint`] is built.
#[must_use]
pub fn compute_distance_km(origin: &GeoPoint, destination: &GeoPoint) -> f64 {
    let lat1 = origin.lat().to_radians();
    let lat2 = destination.lat().to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (destination.lon() - origin.lon()).to_radians();

    let half_lat = (d_lat / 2.0).sin();
    let half_lon = (d_lon / 2.0).sin();
    let a = half_lat * half_lat + lat1.cos() * lat2.cos() * half_lon * half_lon;
    // Rounding can push `a` slightly past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
