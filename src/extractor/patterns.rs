// file: src/extractor/patterns.rs
// description: compiled regex patterns for locator extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

/// Category key for the catch-all locator pattern. Keys the output file name
/// (`generic_locator_locators.txt`).
pub const GENERIC_LOCATOR: &str = "generic_locator";

lazy_static! {
    // Double-quoted string preceded by a trigger phrase, optionally followed
    // by a trailing noun. The bare "the" alternative subsumes the longer
    // three; all four alternatives and their order are load-bearing observable
    // behavior and must stay as-is. No word boundary on "the": a word merely
    // ending in "the" also triggers.
    pub static ref GENERIC_LOCATOR_PATTERN: Regex = Regex::new(
        r#"(?:on the|into the|to the|the)\s+"([^"]+)"\s*(?:element|link|field|button)?"#
    ).expect("GENERIC_LOCATOR_PATTERN regex is valid");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_capture(text: &str) -> Option<String> {
        GENERIC_LOCATOR_PATTERN
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    }

    #[test]
    fn test_trigger_phrase_variants() {
        assert_eq!(
            first_capture(r#"click on the "submit" button"#).as_deref(),
            Some("submit")
        );
        assert_eq!(
            first_capture(r#"type text into the "username" field"#).as_deref(),
            Some("username")
        );
        assert_eq!(
            first_capture(r#"navigate to the "home" link"#).as_deref(),
            Some("home")
        );
        assert_eq!(
            first_capture(r#"verify the "banner" element"#).as_deref(),
            Some("banner")
        );
    }

    #[test]
    fn test_trailing_noun_is_optional() {
        assert_eq!(first_capture(r#"wait for the "spinner""#).as_deref(), Some("spinner"));
    }

    #[test]
    fn test_quotes_excluded_from_capture() {
        let value = first_capture(r#"click on the "//a[@id='nav']" element"#).unwrap();
        assert_eq!(value, "//a[@id='nav']");
        assert!(!value.contains('"'));
    }

    #[test]
    fn test_no_trigger_no_match() {
        assert!(!GENERIC_LOCATOR_PATTERN.is_match(r#"this line has "a quoted string" only"#));
    }

    #[test]
    fn test_bare_the_inside_longer_word_still_triggers() {
        // "the" is matched without a word boundary, so a suffix hit counts.
        assert_eq!(first_capture(r#"breathe "X" deeply"#).as_deref(), Some("X"));
    }
}
