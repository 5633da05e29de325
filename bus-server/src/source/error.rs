//! Route data source error types.

use std::path::PathBuf;

/// Errors that can occur when loading route records.
///
/// Every variant means the timetable is unavailable; callers decide how to
/// surface it.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The data file could not be read
    #[error("failed to read route data from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a valid list of route records
    #[error("failed to parse route data from {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SourceError {
    /// Whether the route data could not be obtained.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, SourceError::Read { .. } | SourceError::Parse { .. })
    }
}
