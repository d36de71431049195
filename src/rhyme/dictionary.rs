//! A phonetic dictionary reader.
//!
//! This reads the `cmudict` phonetic dictionary and groups its terms by rhyme tail. Entries
//! have a term and a pronunciation, separated by exactly two spaces, with the option of
//! several pronunciations for a term:
//!
//! ```text
//! ALUMINIUM  AH0 L UW1 M IH0 N AH0 M
//! ALUMINIUM(2)  AE2 L Y UW1 M IH0 N AH0 M
//! ```
//!
//! Every other line (comments, headers, blank lines) is skipped.
//!
//! Related references:
//!
//! * <https://github.com/cmusphinx/cmudict>
//! * <http://www.speech.cs.cmu.edu/cgi-bin/cmudict>
//!
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::rhyme::errors::{RhymeError, Result};
use crate::rhyme::index::TailIndex;
use crate::rhyme::phonemes;
use crate::rhyme::rhyme_map::for_each_line;

/// An Entry is a single dictionary line: one term (or variant) and its phonemes.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    /// The term as listed, e.g. "FLOWER", "ALUMINIUM(2)", "LET'S", "A.M.".
    pub word: String,
    /// The individual phonemes in the original order, e.g. `["SH", "R", "IH1", "M", "P"]`.
    pub phonemes: Vec<String>,
}

impl Entry {
    /// Parses one dictionary line, or returns None if it doesn't have the `WORD  PHONEMES` shape.
    ///
    /// The line is split at the first two-space separator. Anything after it is the
    /// pronunciation, even if it contains further double spaces.
    pub fn parse(line: &str) -> Option<Entry> {
        lazy_static! {
            // Capture 1 is the term, capture 2 the pronunciation. The lazy `.*?` makes the
            // split happen at the first double space.
            static ref LINE_RE: Regex = Regex::new(r"^(.*?)  (.*)$").unwrap();
        }
        let caps = LINE_RE.captures(line)?;
        let word = &caps[1];
        if word.is_empty() {
            return None;
        }
        return Some(Entry {
            word: String::from(word),
            phonemes: phonemes::tokenize(&caps[2]),
        });
    }

    /// Returns the rhyme tail for this entry's pronunciation. Empty if it has no vowel sounds.
    pub fn rhyme_tail(&self) -> String {
        phonemes::extract_tail(&self.phonemes)
    }
}

/// Counters describing one pass over a dictionary.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BuildStats {
    /// Every line seen.
    pub lines: usize,
    /// Lines that were indexed.
    pub indexed: usize,
    /// Lines without the `WORD  PHONEMES` shape.
    pub malformed: usize,
    /// Well-formed lines whose pronunciation has no vowel sound.
    pub no_vowel: usize,
}

/// Accumulates dictionary lines into a `TailIndex`.
///
/// # Example Usage
///
/// ```
/// let mut builder = IndexBuilder::new();
/// builder.add_line("CAT  K AE1 T");
/// let index = builder.finish();
/// ```
#[derive(Debug, Default)]
pub struct IndexBuilder {
    index: TailIndex,
    stats: BuildStats,
}

impl IndexBuilder {
    pub fn new() -> IndexBuilder {
        IndexBuilder::default()
    }

    /// Adds one dictionary line. Returns whether it was indexed.
    pub fn add_line(&mut self, line: &str) -> bool {
        self.stats.lines += 1;
        let entry = match Entry::parse(line) {
            Some(entry) => entry,
            None => {
                self.stats.malformed += 1;
                return false;
            }
        };

        let tail = entry.rhyme_tail();
        if tail.is_empty() {
            tracing::trace!(word = %entry.word, "no vowel sound, skipping");
            self.stats.no_vowel += 1;
            return false;
        }
        self.index.push(&tail, &entry.word);
        self.stats.indexed += 1;
        return true;
    }

    /// Adds every line of `lines`, as though they were individually `add_line()`d.
    #[cfg(test)]
    pub fn add_all(&mut self, lines: &[&str]) {
        for line in lines {
            self.add_line(line);
        }
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    pub fn finish(self) -> TailIndex {
        self.index
    }
}

/// Builds an index from every line of `reader`.
pub fn build_index<R: BufRead>(reader: R) -> std::io::Result<(TailIndex, BuildStats)> {
    let mut builder = IndexBuilder::new();
    for_each_line(reader, |line| {
        builder.add_line(line);
    })?;
    let stats = builder.stats();
    return Ok((builder.finish(), stats));
}

/// Builds an index from the dictionary file at `path`.
pub fn build_index_from_file(path: &Path) -> Result<(TailIndex, BuildStats)> {
    let f = File::open(path).map_err(|e| RhymeError::io(path, e))?;
    let (index, stats) = build_index(BufReader::new(f)).map_err(|e| RhymeError::io(path, e))?;
    tracing::info!(
        path = %path.display(),
        lines = stats.lines,
        indexed = stats.indexed,
        malformed = stats.malformed,
        no_vowel = stats.no_vowel,
        tails = index.len(),
        "read dictionary"
    );
    return Ok((index, stats));
}
