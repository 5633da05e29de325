//! Route search over a collection of records.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::domain::RouteRecord;
use crate::source::{RouteSource, SourceError};

use super::alias::AliasTable;
use super::config::MatchConfig;
use super::similarity::close_matches;

/// Searches route records by fuzzy name match.
///
/// Holds no mutable state, so one matcher can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct RouteMatcher {
    aliases: Arc<AliasTable>,
    config: MatchConfig,
}

impl RouteMatcher {
    /// Create a matcher with the default configuration.
    pub fn new(aliases: Arc<AliasTable>) -> Self {
        Self::with_config(aliases, MatchConfig::default())
    }

    /// Create a matcher with a custom configuration.
    pub fn with_config(aliases: Arc<AliasTable>, config: MatchConfig) -> Self {
        Self { aliases, config }
    }

    /// Get the alias table.
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Get the matching configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The string actually compared against route names: lowercased,
    /// trimmed, then alias-resolved.
    pub fn normalize_query(&self, query: &str) -> String {
        normalize_query(query, &self.aliases)
    }

    /// Route names close enough to `query`, best first.
    ///
    /// `query` is used as given; see [`normalize_query`](Self::normalize_query).
    pub fn close_matches(&self, query: &str, route_names: &[String]) -> Vec<String> {
        close_matches(
            query,
            route_names,
            self.config.max_matches,
            self.config.cutoff,
        )
    }

    /// Find the records matching `query`.
    ///
    /// Returns fresh copies of every record whose lowercased name is among
    /// the close matches, in the order they appear in `routes`, each with
    /// `formatted_times` filled in. `routes` itself is not modified.
    pub fn search(&self, query: &str, routes: &[RouteRecord]) -> Vec<RouteRecord> {
        let query = self.normalize_query(query);

        let route_names: Vec<String> = routes.iter().map(RouteRecord::match_key).collect();
        let matched: HashSet<String> = self.close_matches(&query, &route_names).into_iter().collect();

        debug!(%query, candidates = route_names.len(), matched = matched.len(), "route search");

        if matched.is_empty() {
            return Vec::new();
        }

        routes
            .iter()
            .zip(&route_names)
            .filter(|(_, name)| matched.contains(name.as_str()))
            .map(|(record, _)| record.with_formatted_times())
            .collect()
    }

    /// Load routes from `source` once, then search them.
    ///
    /// Load failures are returned untouched.
    pub fn search_source(
        &self,
        query: &str,
        source: &dyn RouteSource,
    ) -> Result<Vec<RouteRecord>, SourceError> {
        let routes = source.load()?;
        Ok(self.search(query, &routes))
    }
}

impl Default for RouteMatcher {
    fn default() -> Self {
        Self::new(Arc::new(AliasTable::default()))
    }
}

/// Lowercase and trim `query`, then replace it with its canonical form if
/// the whole string is an alias.
pub fn normalize_query(query: &str, aliases: &AliasTable) -> String {
    let normalized = query.trim().to_lowercase();
    aliases.resolve(&normalized).to_string()
}

/// Search `routes` with the built-in aliases and default configuration.
pub fn search(query: &str, routes: &[RouteRecord]) -> Vec<RouteRecord> {
    RouteMatcher::default().search(query, routes)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
