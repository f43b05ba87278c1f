//! CSV import tests against realistic uploads.

mod fixtures;

use std::io::Cursor;

use nearest_route::ingest::{parse_points, read_points, IngestError};
use nearest_route::planner::plan;
use nearest_route::point::Point;
use nearest_route::store::PointStore;
use tempfile::TempDir;

use fixtures::{all_points, to_csv, DRIVER_START};

#[test]
fn imports_full_fixture_set() {
    let expected = all_points();
    let csv = to_csv(&expected);

    let points = read_points(Cursor::new(csv.into_bytes())).expect("valid CSV");

    assert_eq!(points, expected);
}

#[test]
fn bad_latitude_fails_whole_import() {
    let err = parse_points(b"name,lat,lng\nX,1.0,2.0\nY,bad,3.0\n").unwrap_err();

    assert!(matches!(err, IngestError::InvalidLatitude { line: 3, .. }));
    assert_eq!(err.to_string(), "Invalid latitude");
}

#[test]
fn two_column_row_fails() {
    let err = parse_points(b"name,lat,lng\nX,1.0,2.0\nY,3.0\n").unwrap_err();

    assert!(matches!(err, IngestError::ColumnCount { line: 3, found: 2 }));
    assert!(err.to_string().contains("must have 3 columns"));
}

#[test]
fn header_text_is_not_checked() {
    let points = parse_points(b"whatever,header,here\nX,-6.2,106.8\n").unwrap();
    assert_eq!(points, vec![Point::new("X", -6.2, 106.8)]);
}

#[test]
fn blank_lines_are_skipped() {
    let points = parse_points(b"name,lat,lng\n\nX,1,2\n\nY,3,4\n").unwrap();
    assert_eq!(points.len(), 2);
}

#[test]
fn crlf_line_endings() {
    let points = parse_points(b"name,lat,lng\r\nX,1.5,2.5\r\n").unwrap();
    assert_eq!(points, vec![Point::new("X", 1.5, 2.5)]);
}

#[test]
fn empty_input_imports_nothing() {
    assert!(parse_points(b"").unwrap().is_empty());
}

#[test]
fn imported_points_persist_and_route() {
    let dir = TempDir::new().unwrap();
    let store = PointStore::new(dir.path().join("data.json"));
    let csv = to_csv(&all_points());

    let points = parse_points(csv.as_bytes()).unwrap();
    store.save(&points).unwrap();
    let loaded = store.load().unwrap();

    let route = plan(&DRIVER_START.to_point(), &loaded);
    assert_eq!(route.len(), points.len() + 1);
}
