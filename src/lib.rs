//! nearest-route
//!
//! Greedy nearest-neighbour sequencing of named waypoints over great-circle
//! distance, plus the HTTP service and CSV import that feed it.

pub mod traits;
pub mod point;
pub mod haversine;
pub mod planner;
pub mod ingest;
pub mod store;
pub mod config;
pub mod logging;
pub mod server;
