//! Test fixtures for nearest-route.
//!
//! Provides real Jakarta locations and small helpers for building point sets
//! and CSV payloads.

#![allow(dead_code)]

pub mod jakarta_locations;

pub use jakarta_locations::*;

use nearest_route::point::Point;

/// Render points as an upload-ready CSV document with a header row.
pub fn to_csv(points: &[Point]) -> String {
    let mut csv = String::from("name,lat,lng\n");
    for point in points {
        csv.push_str(&format!("{},{},{}\n", point.name, point.lat, point.lng));
    }
    csv
}
