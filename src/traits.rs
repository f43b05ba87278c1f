//! Core domain traits for the route planner.
//!
//! These are intentionally minimal. The planner only needs to know who a
//! waypoint is and where it sits; concrete apps can implement them for their
//! own data models instead of converting into [`crate::point::Point`].

use std::hash::Hash;

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// A named location to be sequenced into a route.
pub trait Waypoint {
    type Id: Id + Ord;

    /// Identity used for visited tracking. Two waypoints with equal ids are
    /// the same stop as far as the planner is concerned.
    fn id(&self) -> &Self::Id;

    /// Location coordinates (lat, lng) in degrees.
    fn location(&self) -> (f64, f64);
}

/// Distance between two (lat, lng) locations.
///
/// Implementations must not panic on out-of-range or NaN input; whatever the
/// arithmetic yields is returned as is.
pub trait DistanceMetric {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> f64;
}
