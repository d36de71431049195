//! Renders the rhyme data as Rust source, for embedding it in another program at compile time.
//!
//! The generated files look like:
//!
//! ```text
//! pub static RHYME_MAP: &[(&str, &[&str])] = &[
//!     ("AE1 T", &["CAT", "HAT"]),
//! ];
//! ```
use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::Path;

use crate::rhyme::errors::Result;
use crate::rhyme::index::TailIndex;
use crate::rhyme::rhyme_map::write_file;

const HEADER: &str = "// Generated by `rhymer generate`. Do not edit.\n\n";

/// Writes the tails as a `UNIQUE_RHYME_PARTS` static slice.
pub fn write_unique_tails_source<W: Write>(tails: &BTreeSet<String>, out: &mut W) -> io::Result<()> {
    out.write_all(HEADER.as_bytes())?;
    writeln!(out, "pub static UNIQUE_RHYME_PARTS: &[&str] = &[")?;
    for tail in tails {
        // Debug formatting of a str is a valid Rust string literal.
        writeln!(out, "    {:?},", tail)?;
    }
    writeln!(out, "];")?;
    return Ok(());
}

/// Writes the index as a `RHYME_MAP` static slice of `(tail, words)` pairs, in bucket order.
pub fn write_rhyme_map_source<W: Write>(index: &TailIndex, out: &mut W) -> io::Result<()> {
    out.write_all(HEADER.as_bytes())?;
    writeln!(out, "pub static RHYME_MAP: &[(&str, &[&str])] = &[")?;
    for (tail, words) in index.iter() {
        let quoted: Vec<String> = words.iter().map(|w| format!("{:?}", w)).collect();
        writeln!(out, "    ({:?}, &[{}]),", tail, quoted.join(", "))?;
    }
    writeln!(out, "];")?;
    return Ok(());
}

/// Saves both generated sources.
pub fn save_sources(index: &TailIndex, unique_tails_path: &Path, rhyme_map_path: &Path) -> Result<()> {
    let tails = index.unique_tails();
    write_file(unique_tails_path, |out| write_unique_tails_source(&tails, out))?;
    tracing::info!(path = %unique_tails_path.display(), "unique tails source written");
    write_file(rhyme_map_path, |out| write_rhyme_map_source(index, out))?;
    tracing::info!(path = %rhyme_map_path.display(), "rhyme map source written");
    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> TailIndex {
        let mut index = TailIndex::new();
        index.push("AE1 T", "CAT");
        index.push("AE1 T", "HAT");
        index.push("AO1 G", "DOG");
        index
    }

    #[test]
    fn test_rhyme_map_source() {
        let mut out = vec![];
        write_rhyme_map_source(&sample_index(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("// Generated"));
        assert!(text.contains("pub static RHYME_MAP: &[(&str, &[&str])] = &[\n"));
        assert!(text.contains("    (\"AE1 T\", &[\"CAT\", \"HAT\"]),\n"));
        assert!(text.contains("    (\"AO1 G\", &[\"DOG\"]),\n"));
        assert!(text.ends_with("];\n"));
    }

    #[test]
    fn test_unique_tails_source() {
        let mut out = vec![];
        write_unique_tails_source(&sample_index().unique_tails(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("    \"AE1 T\",\n    \"AO1 G\",\n];\n"));
    }

    #[test]
    fn test_quotes_are_escaped() {
        let mut index = TailIndex::new();
        index.push("IY1", "\"QUOTE");
        let mut out = vec![];
        write_rhyme_map_source(&index, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(r#"("IY1", &["\"QUOTE"]),"#), "{}", text);
    }

    #[test]
    fn test_save_sources() {
        let dir = tempfile::tempdir().unwrap();
        let tails_path = dir.path().join("unique_rhyme_parts.rs");
        let map_path = dir.path().join("rhyme_map.rs");
        save_sources(&sample_index(), &tails_path, &map_path).unwrap();
        assert!(std::fs::read_to_string(&tails_path).unwrap().contains("UNIQUE_RHYME_PARTS"));
        assert!(std::fs::read_to_string(&map_path).unwrap().contains("RHYME_MAP"));
    }
}
