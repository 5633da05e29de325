//! Matching configuration.

/// Parameters for fuzzy route matching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchConfig {
    /// Maximum number of distinct route names a query can match.
    pub max_matches: usize,

    /// Minimum similarity (0.0-1.0) for a route name to match.
    pub cutoff: f64,
}

impl MatchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_matches: usize, cutoff: f64) -> Self {
        Self {
            max_matches,
            cutoff,
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_matches: 5,
            cutoff: 0.6,
        }
    }
}
