//! Persisted point set for the front end.
//!
//! Imported points are written as a pretty-printed JSON array so a static
//! front end can fetch them directly.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::point::Point;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode points: {0}")]
    Encode(#[source] serde_json::Error),
    /// JSON has no NaN or infinity; serde_json would silently write `null`.
    #[error("point {name:?} has a non-finite coordinate")]
    NonFinite { name: String },
    #[error("failed to access {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

#[derive(Debug, Clone)]
pub struct PointStore {
    path: PathBuf,
}

impl PointStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the stored artifact with `points`.
    ///
    /// Fails without touching the file if any coordinate is NaN or infinite.
    pub fn save(&self, points: &[Point]) -> Result<(), StoreError> {
        if let Some(point) = points.iter().find(|p| !(p.lat.is_finite() && p.lng.is_finite())) {
            return Err(StoreError::NonFinite {
                name: point.name.clone(),
            });
        }
        let json = serde_json::to_vec_pretty(points).map_err(StoreError::Encode)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        fs::write(&self.path, json).map_err(|source| self.io_error(source))?;

        tracing::info!(path = %self.path.display(), count = points.len(), "saved points");
        Ok(())
    }

    pub fn load(&self) -> Result<Vec<Point>, StoreError> {
        let bytes = fs::read(&self.path).map_err(|source| self.io_error(source))?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
