//! Real Jakarta locations for realistic test fixtures.
//!
//! Coordinates are approximate (4 decimal places) public landmarks.

use nearest_route::point::Point;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.name, self.lat, self.lng)
    }
}

/// Default driver position used by the front end.
pub const DRIVER_START: Location = Location::new("Current", -6.2, 106.8);

// ============================================================================
// Central Jakarta
// ============================================================================

pub const CENTRAL: &[Location] = &[
    Location::new("Monas", -6.1754, 106.8272),
    Location::new("Istiqlal Mosque", -6.1702, 106.8312),
    Location::new("Jakarta Cathedral", -6.1693, 106.8330),
    Location::new("Gambir Station", -6.1766, 106.8307),
    Location::new("Bundaran HI", -6.1950, 106.8230),
    Location::new("Grand Indonesia", -6.1951, 106.8210),
    Location::new("Tanah Abang Market", -6.1866, 106.8131),
    Location::new("Pasar Baru", -6.1636, 106.8339),
];

// ============================================================================
// South Jakarta
// ============================================================================

pub const SOUTH: &[Location] = &[
    Location::new("Gelora Bung Karno", -6.2183, 106.8020),
    Location::new("Senayan City", -6.2274, 106.7975),
    Location::new("Blok M", -6.2443, 106.8006),
    Location::new("Kemang", -6.2607, 106.8136),
    Location::new("Ragunan Zoo", -6.3124, 106.8202),
    Location::new("Kota Kasablanka", -6.2242, 106.8430),
];

// ============================================================================
// North / Old Town
// ============================================================================

pub const NORTH: &[Location] = &[
    Location::new("Kota Tua", -6.1352, 106.8133),
    Location::new("Sunda Kelapa", -6.1233, 106.8090),
    Location::new("Ancol", -6.1223, 106.8337),
    Location::new("Glodok", -6.1445, 106.8147),
];

// ============================================================================
// East Jakarta
// ============================================================================

pub const EAST: &[Location] = &[
    Location::new("Taman Mini", -6.3025, 106.8952),
    Location::new("Halim Airport", -6.2666, 106.8910),
    Location::new("Jatinegara Station", -6.2150, 106.8707),
];

/// Returns all locations as points.
pub fn all_points() -> Vec<Point> {
    CENTRAL
        .iter()
        .chain(SOUTH)
        .chain(NORTH)
        .chain(EAST)
        .map(Location::to_point)
        .collect()
}

/// Returns a subset of points for smaller tests.
pub fn sample_points(count: usize) -> Vec<Point> {
    all_points().into_iter().take(count).collect()
}
