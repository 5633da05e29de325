//! File-backed and in-memory route sources.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::RouteRecord;

use super::RouteSource;
use super::error::SourceError;

/// Reads route records from a JSON file on every load.
///
/// The file holds an array of objects with `route`, `departure_times` and
/// `bus_type` keys.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the data file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RouteSource for JsonFileSource {
    fn load(&self) -> Result<Vec<RouteRecord>, SourceError> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;

        let records: Vec<RouteRecord> =
            serde_json::from_str(&json).map_err(|source| SourceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = records.len(), "loaded route data");
        Ok(records)
    }
}

/// Serves a fixed list of routes held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<RouteRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<RouteRecord>) -> Self {
        Self { records }
    }
}

impl RouteSource for StaticSource {
    fn load(&self) -> Result<Vec<RouteRecord>, SourceError> {
        Ok(self.records.clone())
    }
}
