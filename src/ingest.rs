//! CSV import of waypoints.
//!
//! Expected layout is a header row followed by `name,lat,lng` records. The
//! header content is never inspected. The first bad record fails the whole
//! import; nothing is returned for the rows that parsed before it.

use std::io::Read;

use thiserror::Error;

use crate::point::Point;

const EXPECTED_COLUMNS: usize = 3;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Invalid CSV format")]
    InvalidCsv(#[source] csv::Error),
    #[error("CSV must have 3 columns: name,lat,lng")]
    ColumnCount { line: u64, found: usize },
    #[error("Invalid latitude")]
    InvalidLatitude { line: u64, value: String },
    #[error("Invalid longitude")]
    InvalidLongitude { line: u64, value: String },
}

impl IngestError {
    /// 1-based line of the offending record, when known.
    pub fn line(&self) -> Option<u64> {
        match self {
            IngestError::InvalidCsv(err) => err.position().map(|pos| pos.line()),
            IngestError::ColumnCount { line, .. }
            | IngestError::InvalidLatitude { line, .. }
            | IngestError::InvalidLongitude { line, .. } => Some(*line),
        }
    }
}

/// Read points from CSV bytes.
pub fn parse_points(bytes: &[u8]) -> Result<Vec<Point>, IngestError> {
    read_points(bytes)
}

/// Read points from any CSV source.
pub fn read_points<R: Read>(reader: R) -> Result<Vec<Point>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut points = Vec::new();
    for record in reader.records() {
        let record = record.map_err(IngestError::InvalidCsv)?;
        points.push(point_from_record(&record)?);
    }

    tracing::debug!(count = points.len(), "parsed CSV points");
    Ok(points)
}

fn point_from_record(record: &csv::StringRecord) -> Result<Point, IngestError> {
    let line = record.position().map(|pos| pos.line()).unwrap_or_default();

    if record.len() != EXPECTED_COLUMNS {
        return Err(IngestError::ColumnCount {
            line,
            found: record.len(),
        });
    }

    let lat = record[1]
        .parse::<f64>()
        .map_err(|_| IngestError::InvalidLatitude {
            line,
            value: record[1].to_string(),
        })?;
    let lng = record[2]
        .parse::<f64>()
        .map_err(|_| IngestError::InvalidLongitude {
            line,
            value: record[2].to_string(),
        })?;

    Ok(Point::new(&record[0], lat, lng))
}
