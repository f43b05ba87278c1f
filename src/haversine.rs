//! Haversine great-circle distance.
//!
//! Straight-line distance over a spherical Earth, in kilometers. Ignores roads
//! entirely, which is what the nearest-neighbour sequencing wants.

use crate::point::Point;
use crate::traits::DistanceMetric;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

/// Calculate haversine distance between two (lat, lng) points in kilometers.
///
/// No range validation: out-of-range degrees go through the trigonometry
/// unchanged and NaN propagates into the result.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance between two points in kilometers.
pub fn distance(p1: &Point, p2: &Point) -> f64 {
    haversine_km(p1.coords(), p2.coords())
}

impl DistanceMetric for Haversine {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        haversine_km(from, to)
    }
}
