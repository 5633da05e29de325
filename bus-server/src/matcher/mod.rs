//! Bus route search.
//!
//! Turns a rider's free-text query into the timetable entries they most
//! likely meant. The query is normalized, common shorthand is expanded, and
//! the result is fuzzy-matched against every route name. Matching records
//! come back with departure times ready for display.

mod alias;
mod config;
mod search;
mod similarity;

pub use alias::AliasTable;
pub use config::MatchConfig;
pub use search::{RouteMatcher, normalize_query, search};
pub use similarity::{Match, SequenceMatcher, close_matches, similarity};
