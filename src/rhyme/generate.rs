//! The data generator: reads a dictionary once and writes every artifact from the result.
use crate::rhyme::config::GenerateConfig;
use crate::rhyme::dictionary::{self, BuildStats};
use crate::rhyme::errors::Result;
use crate::rhyme::rhyme_map;
use crate::rhyme::source;

/// Builds the tail index from `config.dictionary_path` and writes the unique tails, the rhyme
/// map and (optionally) the generated sources into `config.output_dir`.
pub fn run(config: &GenerateConfig) -> Result<BuildStats> {
    let (index, stats) = dictionary::build_index_from_file(&config.dictionary_path)?;
    if index.is_empty() {
        tracing::warn!(
            path = %config.dictionary_path.display(),
            "no entries were indexed, the artifacts will be empty"
        );
    }

    rhyme_map::save_unique_tails(&index, &config.unique_tails_path())?;
    rhyme_map::save_map(&index, &config.rhyme_map_path())?;
    if config.emit_source {
        source::save_sources(
            &index,
            &config.unique_tails_source_path(),
            &config.rhyme_map_source_path(),
        )?;
    }
    return Ok(stats);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rhyme::errors::RhymeError;
    use crate::rhyme::finder::{RhymeFinder, TieBreak};
    use std::fs;

    const DICT: &str = "\
;;; test dictionary
CAT  K AE1 T
HAT  HH AE1 T
DOG  D AO1 G
HMM  HH M M
";

    #[test]
    fn test_generate_then_query() {
        let dir = tempfile::tempdir().unwrap();
        let dict_path = dir.path().join("cmudict.dict");
        fs::write(&dict_path, DICT).unwrap();
        let config = GenerateConfig {
            dictionary_path: dict_path,
            output_dir: dir.path().join("output"),
            emit_source: true,
        };

        let stats = run(&config).unwrap();
        assert_eq!(stats.indexed, 3);
        assert_eq!(stats.no_vowel, 1);
        assert_eq!(stats.malformed, 1);

        let map = fs::read_to_string(config.rhyme_map_path()).unwrap();
        assert!(map.lines().any(|l| l == "AE1 T: CAT HAT"), "{}", map);
        assert!(map.lines().any(|l| l == "AO1 G: DOG"), "{}", map);
        assert_eq!(
            fs::read_to_string(config.unique_tails_path()).unwrap(),
            "AE1 T\nAO1 G\n"
        );
        assert!(config.rhyme_map_source_path().exists());
        assert!(config.unique_tails_source_path().exists());

        let finder = RhymeFinder::from_map_file(&config.rhyme_map_path(), TieBreak::FirstLoaded).unwrap();
        assert_eq!(finder.find_rhymes("cat"), vec!["Hat"]);
        assert!(finder.find_rhymes("dog").is_empty());
    }

    #[test]
    fn test_sources_are_optional() {
        let dir = tempfile::tempdir().unwrap();
        let dict_path = dir.path().join("cmudict.dict");
        fs::write(&dict_path, DICT).unwrap();
        let config = GenerateConfig {
            dictionary_path: dict_path,
            output_dir: dir.path().to_path_buf(),
            emit_source: false,
        };
        run(&config).unwrap();
        assert!(config.rhyme_map_path().exists());
        assert!(!config.rhyme_map_source_path().exists());
    }

    #[test]
    fn test_missing_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenerateConfig {
            dictionary_path: dir.path().join("nope.dict"),
            output_dir: dir.path().join("output"),
            emit_source: false,
        };
        assert!(matches!(run(&config), Err(RhymeError::Io { .. })));
        assert!(!config.rhyme_map_path().exists());
    }
}
