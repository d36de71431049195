//! Rhyme dictionary generation and lookup.
//!
//! Generation: dictionary -> `phonemes` -> `dictionary::IndexBuilder` -> `rhyme_map` / `source`.
//! Lookup: `rhyme_map` -> `finder::RhymeFinder` (with `words` normalization) -> `repl` / `server`.
pub mod config;
pub mod dictionary;
pub mod errors;
pub mod finder;
pub mod generate;
pub mod index;
pub mod phonemes;
pub mod repl;
pub mod rhyme_map;
pub mod server;
pub mod source;
pub mod words;
