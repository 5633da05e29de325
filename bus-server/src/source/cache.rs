//! Time-limited caching of route data.
//!
//! Without a cache the data file is re-read on every search. A short TTL
//! trades a little staleness for far fewer reads on busy servers.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache as MokaCache;
use tracing::debug;

use crate::domain::RouteRecord;

use super::RouteSource;
use super::error::SourceError;

/// Caches the records from an inner source for a fixed time.
///
/// Failed loads are never cached: the next call tries the inner source
/// again.
pub struct CachedRouteSource<S> {
    inner: S,
    routes: MokaCache<(), Arc<Vec<RouteRecord>>>,
}

impl<S: RouteSource> CachedRouteSource<S> {
    /// Wrap `inner`, keeping loaded records for `ttl`.
    pub fn new(inner: S, ttl: Duration) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(ttl)
            .max_capacity(1)
            .build();
        Self { inner, routes }
    }

    /// Drop the cached records so the next load hits the inner source.
    pub fn invalidate(&self) {
        self.routes.invalidate_all();
    }
}

impl<S: RouteSource> RouteSource for CachedRouteSource<S> {
    fn load(&self) -> Result<Vec<RouteRecord>, SourceError> {
        if let Some(records) = self.routes.get(&()) {
            return Ok(records.as_ref().clone());
        }

        debug!("route cache miss");
        let records = self.inner.load()?;
        self.routes.insert((), Arc::new(records.clone()));
        Ok(records)
    }
}
