//! Query aliases.
//!
//! Riders type shorthand ("hyd") and common misspellings ("tirupsathi").
//! An alias table rewrites those to the canonical place name before fuzzy
//! matching.

use std::collections::HashMap;

/// Built-in aliases, all lowercase.
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("tpt", "tirupati"),
    ("hyd", "hyderabad"),
    ("bglr", "bangalore"),
    ("chen", "chennai"),
    ("tirupsathi", "tirupati"),
    ("tirupsthi", "tirupati"),
    ("hyderabad", "hyderabad"),
    ("banglore", "bangalore"),
];

/// Immutable mapping from shorthand to canonical token.
///
/// Lookups are on the whole query, never per word: "tpt bus" is not
/// rewritten.
///
/// # Examples
///
/// ```
/// use bus_server::matcher::AliasTable;
///
/// let aliases = AliasTable::default();
/// assert_eq!(aliases.resolve("tpt"), "tirupati");
/// assert_eq!(aliases.resolve("tpt bus"), "tpt bus");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// Build a table from `(alias, canonical)` pairs.
    ///
    /// Both sides are lowercased and trimmed, so lookups of normalized
    /// queries always line up with the keys.
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| {
                (
                    k.as_ref().trim().to_lowercase(),
                    v.as_ref().trim().to_lowercase(),
                )
            })
            .collect();
        Self { entries }
    }

    /// A table with no entries.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The canonical token for `query`, or `query` itself if it is not an
    /// alias.
    ///
    /// `query` is expected to be normalized already.
    pub fn resolve<'a>(&'a self, query: &'a str) -> &'a str {
        self.entries.get(query).map_or(query, String::as_str)
    }

    /// Look up an alias without falling back.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    /// Number of aliases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no aliases.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(alias, canonical)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new(DEFAULT_ALIASES.iter().copied())
    }
}
