//! The tail index: rhyme tails mapped to the dictionary terms that end with them.
use std::collections::{BTreeSet, HashMap};

/// A mapping from rhyme tail (e.g. `AE1 T`) to the terms sharing it (e.g. `CAT`, `HAT`).
///
/// Buckets remember the order they were created in, and terms within a bucket keep the order
/// they were added in. Every bucket holds at least one term.
#[derive(Clone, Debug, Default)]
pub struct TailIndex {
    buckets: Vec<(String, Vec<String>)>,

    // Tail -> position in `buckets`.
    positions: HashMap<String, usize>,
}

impl TailIndex {
    /// Creates a new empty index.
    pub fn new() -> TailIndex {
        TailIndex::default()
    }

    /// Appends `word` to the bucket for `tail`, creating the bucket if needed.
    ///
    /// Duplicates are kept as-is.
    pub fn push(&mut self, tail: &str, word: &str) {
        match self.positions.get(tail) {
            Some(&pos) => self.buckets[pos].1.push(String::from(word)),
            None => {
                self.positions.insert(String::from(tail), self.buckets.len());
                self.buckets
                    .push((String::from(tail), vec![String::from(word)]));
            }
        }
    }

    /// Sets the full word list for `tail`, replacing any earlier list.
    ///
    /// A replaced bucket keeps its original position. Empty word lists are ignored so that no
    /// bucket is ever empty.
    pub fn replace(&mut self, tail: &str, words: Vec<String>) {
        if words.is_empty() {
            return;
        }
        match self.positions.get(tail) {
            Some(&pos) => self.buckets[pos].1 = words,
            None => {
                self.positions.insert(String::from(tail), self.buckets.len());
                self.buckets.push((String::from(tail), words));
            }
        }
    }

    /// Returns the words for the given tail, or None.
    pub fn get(&self, tail: &str) -> Option<&[String]> {
        self.positions
            .get(tail)
            .map(|&pos| self.buckets[pos].1.as_slice())
    }

    /// Returns the bucket at `pos` in creation order.
    pub fn bucket(&self, pos: usize) -> Option<(&str, &[String])> {
        self.buckets
            .get(pos)
            .map(|(tail, words)| (tail.as_str(), words.as_slice()))
    }

    /// Iterates over `(tail, words)` in bucket creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.buckets
            .iter()
            .map(|(tail, words)| (tail.as_str(), words.as_slice()))
    }

    /// Returns the number of buckets (distinct tails).
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The distinct tails, sorted.
    pub fn unique_tails(&self) -> BTreeSet<String> {
        self.buckets.iter().map(|(tail, _)| tail.clone()).collect()
    }
}

/// Two indexes are equal when they hold the same buckets with the same word sequences.
/// The order of the buckets themselves does not matter.
impl PartialEq for TailIndex {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(tail, words)| other.get(tail) == Some(words))
    }
}
