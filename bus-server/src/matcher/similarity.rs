//! Sequence similarity.
//!
//! Scores two strings by their longest matching blocks: the longest common
//! contiguous run is found, then the search recurses into the pieces to its
//! left and right. With `M` matched characters across both strings of total
//! length `T`, the ratio is `2 * M / T`, so identical strings score 1.0 and
//! strings with nothing in common score 0.0.
//!
//! The comparison works on Unicode scalar values, not bytes.

use std::collections::{HashMap, HashSet};

/// Sequences at least this long get the popular-element heuristic.
const AUTOJUNK_MIN_LEN: usize = 200;

/// A matching block: `a[a_start..a_start + size] == b[b_start..b_start + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Match {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

/// Compares a changing sequence `a` against a fixed sequence `b`.
///
/// Indexing `b` is the expensive step, so one matcher is built per query
/// and `set_a` is called for each candidate.
///
/// # Examples
///
/// ```
/// use bus_server::matcher::SequenceMatcher;
///
/// let m = SequenceMatcher::new("hyderabad to tirupati", "hyderabad");
/// assert_eq!(m.ratio(), 0.6);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// Positions of each element of `b`, ascending. Popular elements are
    /// left out.
    b2j: HashMap<char, Vec<usize>>,
    /// Elements of `b` dropped from the index for being too common.
    popular: HashSet<char>,
    /// Element counts of `b`, for `quick_ratio`.
    b_counts: HashMap<char, usize>,
}

impl SequenceMatcher {
    /// Create a matcher comparing `a` against `b`.
    pub fn new(a: &str, b: &str) -> Self {
        let b: Vec<char> = b.chars().collect();

        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }

        let b_counts = b2j.iter().map(|(&c, idxs)| (c, idxs.len())).collect();

        let mut popular = HashSet::new();
        if b.len() >= AUTOJUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            popular.extend(
                b2j.iter()
                    .filter(|(_, idxs)| idxs.len() > ntest)
                    .map(|(&c, _)| c),
            );
            b2j.retain(|c, _| !popular.contains(c));
        }

        Self {
            a: a.chars().collect(),
            b,
            b2j,
            popular,
            b_counts,
        }
    }

    /// Replace the first sequence, keeping the index of `b`.
    pub fn set_a(&mut self, a: &str) {
        self.a = a.chars().collect();
    }

    /// Similarity in `[0.0, 1.0]`.
    ///
    /// Two empty strings are identical and score 1.0.
    pub fn ratio(&self) -> f64 {
        let matches = self.matching_blocks().iter().map(|m| m.size).sum();
        calculate_ratio(matches, self.a.len() + self.b.len())
    }

    /// An upper bound on [`ratio`](Self::ratio) from shared element counts,
    /// ignoring order.
    pub fn quick_ratio(&self) -> f64 {
        let mut available = self.b_counts.clone();
        let mut matches = 0;
        for c in &self.a {
            if let Some(n) = available.get_mut(c)
                && *n > 0
            {
                *n -= 1;
                matches += 1;
            }
        }
        calculate_ratio(matches, self.a.len() + self.b.len())
    }

    /// An upper bound on [`quick_ratio`](Self::quick_ratio) from lengths
    /// alone.
    pub fn real_quick_ratio(&self) -> f64 {
        let (la, lb) = (self.a.len(), self.b.len());
        calculate_ratio(la.min(lb), la + lb)
    }

    /// Non-overlapping matching blocks, ordered by position, with adjacent
    /// blocks merged.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            blocks.push(m);
            if alo < m.a_start && blo < m.b_start {
                queue.push((alo, m.a_start, blo, m.b_start));
            }
            if m.a_start + m.size < ahi && m.b_start + m.size < bhi {
                queue.push((m.a_start + m.size, ahi, m.b_start + m.size, bhi));
            }
        }
        blocks.sort_unstable();

        let mut merged: Vec<Match> = Vec::with_capacity(blocks.len());
        for m in blocks {
            match merged.last_mut() {
                Some(last)
                    if last.a_start + last.size == m.a_start
                        && last.b_start + last.size == m.b_start =>
                {
                    last.size += m.size;
                }
                _ => merged.push(m),
            }
        }
        merged
    }

    /// Longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among equally long blocks, the one starting earliest in `a` wins,
    /// then the one starting earliest in `b`.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let (a, b) = (&self.a, &self.b);
        let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);

        // j2len[j] = length of the match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for (i, c) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut new_j2len = HashMap::new();
            let Some(positions) = self.b2j.get(c) else {
                j2len = new_j2len;
                continue;
            };
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = j
                    .checked_sub(1)
                    .and_then(|prev| j2len.get(&prev))
                    .copied()
                    .unwrap_or(0)
                    + 1;
                new_j2len.insert(j, k);
                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
            j2len = new_j2len;
        }

        // Popular elements were not indexed; grow the block over any that
        // match on either side.
        while best_i > alo && best_j > blo && a[best_i - 1] == b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_size += 1;
        }
        while best_i + best_size < ahi
            && best_j + best_size < bhi
            && a[best_i + best_size] == b[best_j + best_size]
        {
            best_size += 1;
        }

        Match {
            a_start: best_i,
            b_start: best_j,
            size: best_size,
        }
    }

    /// Whether `c` was left out of the index for being too common in `b`.
    pub fn is_popular(&self, c: char) -> bool {
        self.popular.contains(&c)
    }
}

fn calculate_ratio(matches: usize, length: usize) -> f64 {
    if length == 0 {
        return 1.0;
    }
    2.0 * matches as f64 / length as f64
}

/// Similarity ratio between two strings.
pub fn similarity(a: &str, b: &str) -> f64 {
    SequenceMatcher::new(a, b).ratio()
}

/// Up to `n` distinct candidates scoring at least `cutoff` against `word`,
/// best first.
///
/// Equal scores keep the order in which candidates first appear.
pub fn close_matches<S: AsRef<str>>(
    word: &str,
    candidates: &[S],
    n: usize,
    cutoff: f64,
) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }

    let mut matcher = SequenceMatcher::new("", word);
    let mut seen = HashSet::new();
    let mut scored: Vec<(f64, &str)> = Vec::new();

    for candidate in candidates {
        let candidate = candidate.as_ref();
        if !seen.insert(candidate) {
            continue;
        }
        matcher.set_a(candidate);
        if matcher.real_quick_ratio() < cutoff || matcher.quick_ratio() < cutoff {
            continue;
        }
        let ratio = matcher.ratio();
        if ratio >= cutoff {
            scored.push((ratio, candidate));
        }
    }

    // Stable, so ties stay in candidate order
    scored.sort_by(|x, y| y.0.total_cmp(&x.0));
    scored
        .into_iter()
        .take(n)
        .map(|(_, s)| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings() {
        assert_eq!(similarity("tirupati", "tirupati"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn nothing_in_common() {
        assert_eq!(similarity("abc", "xyz"), 0.0);
        assert_eq!(similarity("", "abc"), 0.0);
    }

    #[test]
    fn prefix_of_route_name() {
        // 9 matched of 9 + 21 characters
        assert_eq!(similarity("hyderabad to tirupati", "hyderabad"), 0.6);
    }

    #[test]
    fn known_ratio() {
        // Single block "bcd": 2 * 3 / 8
        assert_eq!(similarity("abcd", "bcde"), 0.75);
        assert_eq!(similarity("abxcd", "abcd"), 2.0 * 4.0 / 9.0);
    }

    #[test]
    fn matching_blocks_merge_and_order() {
        let m = SequenceMatcher::new("abxcd", "abcd");
        assert_eq!(
            m.matching_blocks(),
            vec![
                Match { a_start: 0, b_start: 0, size: 2 },
                Match { a_start: 3, b_start: 2, size: 2 },
            ]
        );
    }

    #[test]
    fn longest_match_prefers_earliest() {
        let m = SequenceMatcher::new("ab ab", "ab");
        let blocks = m.matching_blocks();
        assert_eq!(blocks[0], Match { a_start: 0, b_start: 0, size: 2 });
    }

    #[test]
    fn unicode_counts_characters() {
        assert_eq!(similarity("తిరుపతి", "తిరుపతి"), 1.0);
        assert!(similarity("తిరుపతి", "తిరుమల") > 0.0);
    }

    #[test]
    fn ratio_bounds_hold() {
        let mut m = SequenceMatcher::new("", "tirupati");
        for a in ["tirupati", "tirupati express", "hyderabad to tirupati", "pati", "x"] {
            m.set_a(a);
            assert!(m.real_quick_ratio() >= m.quick_ratio());
            assert!(m.quick_ratio() >= m.ratio());
        }
    }

    #[test]
    fn popular_elements_in_long_sequences() {
        let b = format!("{}x", "a".repeat(250));
        let m = SequenceMatcher::new("aaax", &b);
        assert!(m.is_popular('a'));
        assert!(!m.is_popular('x'));
        // The block still grows over the unindexed 'a's next to the 'x'
        assert_eq!(m.ratio(), 2.0 * 4.0 / (4.0 + 251.0));
    }

    #[test]
    fn short_sequences_have_no_popular_elements() {
        let m = SequenceMatcher::new("aaaa", "aaaa");
        assert!(!m.is_popular('a'));
    }

    #[test]
    fn close_matches_cutoff_and_order() {
        let candidates = ["tirupati express", "chennai to bangalore", "tirupati", "tirupathi"];
        let matches = close_matches("tirupati", &candidates, 5, 0.6);
        assert_eq!(matches, ["tirupati", "tirupathi", "tirupati express"]);
    }

    #[test]
    fn close_matches_limits_and_dedups() {
        let candidates = ["aaaa", "aaaa", "aaab", "aabb", "aaac", "aaad", "aaae"];
        let matches = close_matches("aaaa", &candidates, 3, 0.5);
        assert_eq!(matches, ["aaaa", "aaab", "aaac"]);
    }

    #[test]
    fn close_matches_ties_keep_input_order() {
        let candidates = ["abcy", "abcx", "abcz"];
        assert_eq!(
            close_matches("abc", &candidates, 5, 0.6),
            ["abcy", "abcx", "abcz"]
        );
    }

    #[test]
    fn close_matches_zero_limit() {
        assert!(close_matches("a", &["a"], 0, 0.0).is_empty());
    }
}
