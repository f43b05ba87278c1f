//! Named geographic point.
//!
//! This is the wire shape shared by the route endpoint, the CSV importer and
//! the persisted JSON artifact: `{"name": .., "lat": .., "lng": ..}`.

use serde::{Deserialize, Serialize};

use crate::traits::Waypoint;

/// A named location in degrees.
///
/// Nothing checks that `name` is non-empty or that the coordinates are in
/// range; the planner keys visitation on `name` alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
        }
    }

    /// Returns (lat, lng).
    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

impl Waypoint for Point {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }

    fn location(&self) -> (f64, f64) {
        self.coords()
    }
}
