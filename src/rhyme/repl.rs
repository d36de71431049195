//! The interactive query loop: one word per line in, rhymes out.
use std::io::{self, BufRead, Write};

use crate::rhyme::finder::RhymeFinder;

const PROMPT: &str = "\nEnter a word to find rhymes (or 'quit' to exit): ";

/// Reads queries from `input` until `quit` or end of input, writing results to `out`.
pub fn run<R: BufRead, W: Write>(finder: &RhymeFinder, input: R, out: &mut W) -> io::Result<()> {
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let query = line.trim_end_matches('\r');
        if query == "quit" {
            writeln!(out, "Exiting program...")?;
            return Ok(());
        }

        if query.trim().is_empty() {
            writeln!(out, "Empty input, please enter a word.")?;
        } else {
            tracing::debug!(query, "finding rhymes");
            write_rhymes(&finder.find_rhymes(query), out)?;
        }
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }
    writeln!(out)?;
    return Ok(());
}

fn write_rhymes<W: Write>(rhymes: &[String], out: &mut W) -> io::Result<()> {
    if rhymes.is_empty() {
        return writeln!(out, "No rhymes found.");
    }
    writeln!(out, "Found {} rhymes:", rhymes.len())?;
    writeln!(out, "{}", rhymes.join(", "))
}
