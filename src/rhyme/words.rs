//! Normalization of dictionary terms and user queries.
//!
//! Terms in the dictionary are uppercase and may carry a variant suffix, e.g. `READ(2)` for the
//! second pronunciation of `READ`. Queries arrive in any case. Comparisons use the uppercase,
//! variant-stripped form and results are shown in Title case.
//!
//! Everything here is ASCII-only. Other bytes pass through unchanged.

/// Returns `word` up to (not including) the first `(`, or all of `word` if there is none.
pub fn strip_variant(word: &str) -> &str {
    match word.find('(') {
        Some(pos) => &word[..pos],
        None => word,
    }
}

/// Drops leading and trailing spaces, tabs, carriage returns and newlines.
pub fn trim(word: &str) -> &str {
    return word.trim_matches(|c: char| c == ' ' || c == '\t' || c == '\r' || c == '\n');
}

/// The form used to look a query up in the index, e.g. ` cat ` -> `CAT`.
pub fn canonicalize_for_compare(word: &str) -> String {
    return strip_variant(trim(word)).to_ascii_uppercase();
}

/// The form used when showing a dictionary term to a user, e.g. `READ(2)` -> `Read`.
pub fn format_for_display(word: &str) -> String {
    let mut result = trim(strip_variant(word)).to_ascii_lowercase();
    if let Some(first) = result.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    return result;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_variant() {
        assert_eq!(strip_variant("READ(2)"), "READ");
        assert_eq!(strip_variant("READ"), "READ");
        assert_eq!(strip_variant("(2)"), "");
        assert_eq!(strip_variant("A(B(C"), "A");
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim("  cat\t\r\n"), "cat");
        assert_eq!(trim("\n\n"), "");
        assert_eq!(trim("two words"), "two words");
    }

    #[test]
    fn test_canonicalize_for_compare() {
        assert_eq!(canonicalize_for_compare("cat"), "CAT");
        assert_eq!(canonicalize_for_compare("  Cat \n"), "CAT");
        assert_eq!(canonicalize_for_compare("read(2)"), "READ");
        assert_eq!(canonicalize_for_compare("let's"), "LET'S");
        assert_eq!(canonicalize_for_compare(""), "");
    }

    #[test]
    fn test_format_for_display() {
        assert_eq!(format_for_display("HAT"), "Hat");
        assert_eq!(format_for_display("READ(2)"), "Read");
        assert_eq!(format_for_display("A.M."), "A.m.");
        assert_eq!(format_for_display("'FRISCO"), "'frisco");
        assert_eq!(format_for_display(""), "");
        assert_eq!(format_for_display("  X  "), "X");
    }

    #[test]
    fn test_format_for_display_leaves_non_ascii_alone() {
        assert_eq!(format_for_display("ÉCOLE"), "École");
        assert_eq!(format_for_display("ÜBER"), "Über");
    }

    #[test]
    fn test_format_for_display_is_idempotent() {
        for w in &["HAT", "READ(2)", "a.m.", "  mixedCase ", "x", "", "'TWAS", "ÜBER"] {
            let once = format_for_display(w);
            assert_eq!(format_for_display(&once), once, "{:?}", w);
        }
    }
}
