//! Settings for each subcommand, taken from command line flags with environment fallbacks.
use clap::ArgMatches;
use std::path::PathBuf;
use std::str::FromStr;

use crate::rhyme::errors::Result;
use crate::rhyme::finder::TieBreak;

pub const DEFAULT_DICTIONARY_PATH: &str = "cmudict.dict";
pub const DEFAULT_MAP_PATH: &str = "rhyme_map.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

pub const UNIQUE_TAILS_FILE: &str = "unique_rhyme_parts.txt";
pub const RHYME_MAP_FILE: &str = "rhyme_map.txt";
pub const UNIQUE_TAILS_SOURCE_FILE: &str = "unique_rhyme_parts.rs";
pub const RHYME_MAP_SOURCE_FILE: &str = "rhyme_map.rs";

pub const ENV_MAP_PATH: &str = "RHYMER_MAP_PATH";
pub const ENV_TIE_BREAK: &str = "RHYMER_TIE_BREAK";
pub const ENV_OUTPUT_DIR: &str = "RHYMER_OUTPUT_DIR";

/// Picks the flag if given, then the environment value, then the default.
fn resolve(flag: Option<&str>, env_value: Option<String>, default: &str) -> String {
    flag.map(String::from)
        .or(env_value)
        .unwrap_or_else(|| String::from(default))
}

fn env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Settings for `generate`.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerateConfig {
    /// The cmudict-format input.
    pub dictionary_path: PathBuf,
    /// Where all artifacts are written.
    pub output_dir: PathBuf,
    /// Whether to also write the generated Rust sources.
    pub emit_source: bool,
}

impl GenerateConfig {
    pub fn from_matches(m: &ArgMatches) -> GenerateConfig {
        GenerateConfig::resolve(
            m.value_of("dictionary"),
            m.value_of("output-dir"),
            env(ENV_OUTPUT_DIR),
            m.is_present("emit-source"),
        )
    }

    fn resolve(
        dictionary: Option<&str>,
        output_dir: Option<&str>,
        env_output_dir: Option<String>,
        emit_source: bool,
    ) -> GenerateConfig {
        GenerateConfig {
            dictionary_path: PathBuf::from(dictionary.unwrap_or(DEFAULT_DICTIONARY_PATH)),
            output_dir: PathBuf::from(resolve(output_dir, env_output_dir, DEFAULT_OUTPUT_DIR)),
            emit_source,
        }
    }

    pub fn unique_tails_path(&self) -> PathBuf {
        self.output_dir.join(UNIQUE_TAILS_FILE)
    }

    pub fn rhyme_map_path(&self) -> PathBuf {
        self.output_dir.join(RHYME_MAP_FILE)
    }

    pub fn unique_tails_source_path(&self) -> PathBuf {
        self.output_dir.join(UNIQUE_TAILS_SOURCE_FILE)
    }

    pub fn rhyme_map_source_path(&self) -> PathBuf {
        self.output_dir.join(RHYME_MAP_SOURCE_FILE)
    }
}

/// Settings for `query` and `serve`.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryConfig {
    pub map_path: PathBuf,
    pub tie_break: TieBreak,
}

impl QueryConfig {
    /// # Errors
    /// Returns an error if the tie-break value is not recognized.
    pub fn from_matches(m: &ArgMatches) -> Result<QueryConfig> {
        QueryConfig::resolve(
            m.value_of("map"),
            env(ENV_MAP_PATH),
            m.value_of("tie-break"),
            env(ENV_TIE_BREAK),
        )
    }

    fn resolve(
        map: Option<&str>,
        env_map: Option<String>,
        tie_break: Option<&str>,
        env_tie_break: Option<String>,
    ) -> Result<QueryConfig> {
        let tie_break = resolve(
            tie_break,
            env_tie_break,
            &TieBreak::default().to_string(),
        );
        Ok(QueryConfig {
            map_path: PathBuf::from(resolve(map, env_map, DEFAULT_MAP_PATH)),
            tie_break: TieBreak::from_str(&tie_break)?,
        })
    }
}
