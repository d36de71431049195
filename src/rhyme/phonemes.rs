//! Phoneme handling for cmudict-style pronunciations.
//!
//! The dictionary uses the ARPABET phonemes, described here:
//! <https://en.wikipedia.org/wiki/ARPABET>
//!
//! A pronunciation is a run of whitespace-separated phonemes, e.g. `HH EH1 L OW0`. Vowel
//! sounds carry a trailing stress digit (`0` unstressed, `1` primary, `2` secondary) and
//! consonants carry none.
//!
//! The "rhyme tail" of a pronunciation is everything from its last vowel sound onwards:
//!
//! ```text
//! K AE1 T      ->  AE1 T
//! HH EH1 L OW0 ->  OW0
//! ```
//!
//! The stress digit is kept, so `AH0 N` and `AH1 N` are different tails.

/// Splits a pronunciation into its phonemes.
///
/// Runs of ASCII whitespace separate tokens and empty tokens are dropped. Unknown
/// phonemes are passed through untouched.
pub fn tokenize(pronunciation: &str) -> Vec<String> {
    return pronunciation
        .split_ascii_whitespace()
        .map(String::from)
        .collect();
}

/// Returns whether the phoneme is a vowel sound, i.e. ends in a stress digit.
pub fn is_vowel(phoneme: &str) -> bool {
    return phoneme
        .as_bytes()
        .last()
        .map_or(false, |b| b.is_ascii_digit());
}

/// Extracts the rhyme tail from a sequence of phonemes.
///
/// Returns the last vowel phoneme followed by every phoneme after it, joined with single
/// spaces. Returns an empty string if no phoneme is a vowel.
pub fn extract_tail<S: AsRef<str>>(phonemes: &[S]) -> String {
    let mut last_vowel: Option<&str> = None;
    let mut after_last_vowel: Vec<&str> = vec![];

    for ph in phonemes {
        let ph = ph.as_ref();
        if is_vowel(ph) {
            last_vowel = Some(ph);
            after_last_vowel.clear();
        } else {
            after_last_vowel.push(ph);
        }
    }

    match last_vowel {
        None => String::new(),
        Some(vowel) => {
            let mut tail = String::with_capacity(4 * (after_last_vowel.len() + 1));
            tail.push_str(vowel);
            for ph in after_last_vowel {
                tail.push(' ');
                tail.push_str(ph);
            }
            tail
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_whitespace_runs() {
        assert_eq!(tokenize("K AE1 T"), vec!["K", "AE1", "T"]);
        assert_eq!(tokenize("  K\tAE1   T \r\n"), vec!["K", "AE1", "T"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t").is_empty());
    }

    #[test]
    fn test_tokenize_passes_unknown_tokens_through() {
        assert_eq!(tokenize("XYZ9 q ??"), vec!["XYZ9", "q", "??"]);
    }

    #[test]
    fn test_is_vowel() {
        assert!(is_vowel("AH0"));
        assert!(is_vowel("AE1"));
        assert!(is_vowel("OW2"));
        assert!(!is_vowel("K"));
        assert!(!is_vowel("NG"));
        assert!(!is_vowel(""));
    }

    #[test]
    fn test_extract_tail_examples() {
        assert_eq!(extract_tail(&["HH", "EH1", "L", "OW0"]), "OW0");
        assert_eq!(extract_tail(&["K", "AE1", "T"]), "AE1 T");
        assert_eq!(extract_tail(&["TH", "R", "OW1"]), "OW1");
        assert_eq!(extract_tail(&["M", "M"]), "");
        assert_eq!(
            extract_tail(&["AE1", "M", "P", "ER0", "S", "AE2", "N", "D"]),
            "AE2 N D"
        );
    }

    #[test]
    fn test_extract_tail_of_nothing_is_empty() {
        let empty: Vec<String> = vec![];
        assert_eq!(extract_tail(&empty), "");
    }

    #[test]
    fn test_extract_tail_is_empty_iff_no_vowel() {
        let cases: Vec<Vec<&str>> = vec![
            vec!["K", "AE1", "T"],
            vec!["M", "M"],
            vec!["S", "T", "R"],
            vec!["AH0"],
            vec!["B", "IY1", "Z", "IY0"],
            vec![],
        ];
        for phonemes in cases {
            let has_vowel = phonemes.iter().any(|p| is_vowel(p));
            assert_eq!(extract_tail(&phonemes).is_empty(), !has_vowel, "{:?}", phonemes);
        }
    }

    #[test]
    fn test_extract_tail_keeps_stress() {
        let stressed = extract_tail(&["F", "AH1", "N"]);
        let unstressed = extract_tail(&["B", "AH0", "N"]);
        assert_eq!(stressed, "AH1 N");
        assert_eq!(unstressed, "AH0 N");
        assert_ne!(stressed, unstressed);
    }

    #[test]
    fn test_extract_tail_is_deterministic() {
        let phonemes = tokenize("P R OW1 G R AE2 M");
        assert_eq!(extract_tail(&phonemes), extract_tail(&phonemes));
        assert_eq!(extract_tail(&phonemes), "AE2 M");
    }

    #[test]
    fn test_tail_has_no_stray_whitespace() {
        let tail = extract_tail(&tokenize("  D  AO1   G  "));
        assert_eq!(tail, "AO1 G");
    }
}
