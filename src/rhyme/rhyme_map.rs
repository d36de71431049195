//! Reading and writing the text artifacts produced by the generator.
//!
//! The rhyme map has one bucket per line, the tail followed by a colon and its terms:
//!
//! ```text
//! AE1 T: CAT HAT
//! AO1 G: DOG
//! ```
//!
//! The unique tails file has one tail per line, sorted.
use regex::Regex;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::rhyme::errors::{RhymeError, Result};
use crate::rhyme::index::TailIndex;
use crate::rhyme::words;

/// Writes `index` in rhyme map format, one bucket per line in bucket order.
pub fn write_map<W: Write>(index: &TailIndex, out: &mut W) -> io::Result<()> {
    for (tail, terms) in index.iter() {
        write!(out, "{}:", tail)?;
        for word in terms {
            write!(out, " {}", word)?;
        }
        writeln!(out)?;
    }
    return Ok(());
}

/// Reads a rhyme map. Lines that don't look like `TAIL: WORD...` are skipped.
///
/// If a tail appears on several lines, the last line wins.
pub fn read_map<R: BufRead>(reader: R) -> io::Result<TailIndex> {
    lazy_static! {
        // Capture 1 is everything before the first colon, capture 2 everything after it.
        static ref MAP_LINE_RE: Regex = Regex::new(r"^([^:]*):(.*)$").unwrap();
    }
    let mut index = TailIndex::new();
    let mut skipped = 0;
    for_each_line(reader, |line| {
        let caps = match MAP_LINE_RE.captures(line) {
            Some(caps) => caps,
            None => {
                skipped += 1;
                return;
            }
        };
        let tail = words::trim(&caps[1]);
        let terms: Vec<String> = caps[2].split_ascii_whitespace().map(String::from).collect();
        if tail.is_empty() || terms.is_empty() {
            skipped += 1;
            return;
        }
        index.replace(tail, terms);
    })?;
    if skipped > 0 {
        tracing::debug!(skipped, "skipped malformed rhyme map lines");
    }
    return Ok(index);
}

/// Writes the sorted tails, one per line.
pub fn write_unique_tails<W: Write>(tails: &BTreeSet<String>, out: &mut W) -> io::Result<()> {
    for tail in tails {
        writeln!(out, "{}", tail)?;
    }
    return Ok(());
}

/// Saves `index` as a rhyme map at `path`, creating parent directories as needed.
pub fn save_map(index: &TailIndex, path: &Path) -> Result<()> {
    write_file(path, |out| write_map(index, out))?;
    tracing::info!(path = %path.display(), tails = index.len(), "rhyme map saved");
    return Ok(());
}

/// Saves the unique tails of `index` at `path`, creating parent directories as needed.
pub fn save_unique_tails(index: &TailIndex, path: &Path) -> Result<()> {
    let tails = index.unique_tails();
    write_file(path, |out| write_unique_tails(&tails, out))?;
    tracing::info!(path = %path.display(), tails = tails.len(), "unique tails saved");
    return Ok(());
}

/// Loads a rhyme map from `path`.
pub fn load_map(path: &Path) -> Result<TailIndex> {
    let f = File::open(path).map_err(|e| RhymeError::io(path, e))?;
    let index = read_map(BufReader::new(f)).map_err(|e| RhymeError::io(path, e))?;
    tracing::info!(path = %path.display(), tails = index.len(), "loaded rhyme map");
    return Ok(index);
}

/// Calls `f` with every line of `reader`, without its `\n` or `\r\n` ending.
///
/// Bytes that aren't valid UTF-8 (e.g. Latin-1 accents in older dictionaries) are replaced with
/// U+FFFD instead of failing the whole read.
pub(crate) fn for_each_line<R, F>(mut reader: R, mut f: F) -> io::Result<()>
where
    R: BufRead,
    F: FnMut(&str),
{
    let mut buf = Vec::with_capacity(256);
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        f(&String::from_utf8_lossy(&buf));
    }
}

/// Opens `path` for writing, runs `write` against a buffered writer and flushes it.
pub(crate) fn write_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| RhymeError::io(parent, e))?;
        }
    }
    let f = File::create(path).map_err(|e| RhymeError::io(path, e))?;
    let mut out = BufWriter::new(f);
    write(&mut out)
        .and_then(|_| out.flush())
        .map_err(|e| RhymeError::io(path, e))?;
    return Ok(());
}
