//! Rhyme lookups against a loaded rhyme map.
//!
//! A query is matched against the terms of the map exactly, after trimming, upper-casing and
//! dropping any `(N)` variant suffix. The rhymes are the other terms of the first bucket that
//! holds the query, shown in Title case.
//!
//! A term listed more than once under different tails ends up in several buckets, but only one
//! bucket is used per query. Which one is decided by `TieBreak`. Variants such as `READ(2)` are
//! separate terms and are never matched by a query for `read`.
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::rhyme::errors::{RhymeError, Result};
use crate::rhyme::index::TailIndex;
use crate::rhyme::rhyme_map;
use crate::rhyme::words;

/// Chooses the bucket used when a term appears in more than one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TieBreak {
    /// The bucket that was created first, i.e. appears first in the map file.
    FirstLoaded,
    /// The bucket with the lexicographically lowest tail.
    LowestTail,
}

impl Default for TieBreak {
    fn default() -> Self {
        TieBreak::FirstLoaded
    }
}

impl FromStr for TieBreak {
    type Err = RhymeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "first-loaded" => Ok(TieBreak::FirstLoaded),
            "lowest-tail" => Ok(TieBreak::LowestTail),
            _ => Err(RhymeError::InvalidConfig(format!(
                "unknown tie-break: {}. Valid values: first-loaded, lowest-tail",
                s
            ))),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::FirstLoaded => write!(f, "first-loaded"),
            TieBreak::LowestTail => write!(f, "lowest-tail"),
        }
    }
}

/// Finds rhymes in a `TailIndex`. Immutable once constructed.
#[derive(Debug)]
pub struct RhymeFinder {
    index: TailIndex,

    // Exact term -> positions of the buckets holding it, ascending.
    term_buckets: HashMap<String, Vec<usize>>,

    tie_break: TieBreak,
}

impl RhymeFinder {
    /// Creates a finder over `index`.
    pub fn new(index: TailIndex, tie_break: TieBreak) -> RhymeFinder {
        let mut term_buckets: HashMap<String, Vec<usize>> = HashMap::new();
        for (pos, (_, terms)) in index.iter().enumerate() {
            for term in terms {
                let positions = term_buckets.entry(term.clone()).or_default();
                if positions.last() != Some(&pos) {
                    positions.push(pos);
                }
            }
        }
        RhymeFinder {
            index,
            term_buckets,
            tie_break,
        }
    }

    /// Loads the rhyme map at `path` and creates a finder over it.
    ///
    /// A map without any usable lines is an error, since every query would come back empty.
    pub fn from_map_file(path: &Path, tie_break: TieBreak) -> Result<RhymeFinder> {
        let index = rhyme_map::load_map(path)?;
        if index.is_empty() {
            return Err(RhymeError::EmptyMap {
                path: path.to_path_buf(),
            });
        }
        return Ok(RhymeFinder::new(index, tie_break));
    }

    /// Returns the display forms of the terms rhyming with `query`, in map order.
    ///
    /// Terms with the same canonical form as the query (`READ`, `READ(2)` for `read`) are left
    /// out. Empty if the query is blank or unknown.
    pub fn find_rhymes(&self, query: &str) -> Vec<String> {
        let canonical = words::canonicalize_for_compare(query);
        if canonical.is_empty() {
            return vec![];
        }

        let terms = match self.matching_bucket(&canonical) {
            Some(terms) => terms,
            None => {
                tracing::debug!(query, "no bucket holds the query");
                return vec![];
            }
        };
        return terms
            .iter()
            .filter(|term| words::canonicalize_for_compare(term) != canonical)
            .map(|term| words::format_for_display(term))
            .collect();
    }

    fn matching_bucket(&self, canonical: &str) -> Option<&[String]> {
        let positions = self.term_buckets.get(canonical)?;
        let chosen = match self.tie_break {
            TieBreak::FirstLoaded => positions.first().copied(),
            TieBreak::LowestTail => positions
                .iter()
                .copied()
                .min_by_key(|&pos| self.index.bucket(pos).map(|(tail, _)| tail)),
        }?;
        return self.index.bucket(chosen).map(|(_, terms)| terms);
    }

    /// Returns the number of rhyme patterns (distinct tails).
    pub fn pattern_count(&self) -> usize {
        self.index.len()
    }

    /// Returns the number of distinct terms, ignoring variant suffixes.
    pub fn total_words(&self) -> usize {
        let mut unique: HashSet<&str> = HashSet::new();
        for term in self.term_buckets.keys() {
            unique.insert(words::strip_variant(term));
        }
        unique.len()
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}
