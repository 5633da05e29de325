//! Route record sources.
//!
//! The matcher only needs "give me every route". Sources provide that from
//! a JSON file, from memory, or through a short-lived cache.

mod cache;
mod error;
mod file;

pub use cache::CachedRouteSource;
pub use error::SourceError;
pub use file::{JsonFileSource, StaticSource};

use crate::domain::RouteRecord;

/// Something that can load the full list of route records.
///
/// Implementations are called once per search and must not hold on to
/// the returned records.
pub trait RouteSource: Send + Sync {
    /// Load every known route.
    fn load(&self) -> Result<Vec<RouteRecord>, SourceError>;
}

impl<S: RouteSource + ?Sized> RouteSource for std::sync::Arc<S> {
    fn load(&self) -> Result<Vec<RouteRecord>, SourceError> {
        (**self).load()
    }
}
