// file: src/extractor/locator.rs
// description: locator extraction from test-specification text with set-based dedupe

use crate::extractor::patterns::GENERIC_LOCATOR_PATTERN;
use crate::models::LocatorSet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Stateless single-pass matcher. Text in, deduplicated locator set out.
pub struct LocatorExtractor;

impl LocatorExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Collects every quoted string matched by the trigger-phrase pattern.
    /// Matching is non-overlapping and left-to-right; only the text between
    /// the quotes is kept. Duplicates within one document collapse.
    pub fn extract_from_text(&self, text: &str) -> LocatorSet {
        GENERIC_LOCATOR_PATTERN
            .captures_iter(text)
            .filter_map(|capture| capture.get(1))
            .map(|value| value.as_str().to_string())
            .collect()
    }

    /// Lenient file-level entry point: an unreadable path contributes an
    /// empty set and a diagnostic, never an error.
    pub fn extract_from_file(&self, path: &Path) -> LocatorSet {
        match fs::read_to_string(path) {
            Ok(content) => self.extract_from_text(&content),
            Err(err) => {
                warn!("Failed to read {}: {}", path.display(), err);
                LocatorSet::new()
            }
        }
    }
}

impl Default for LocatorExtractor {
    fn default() -> Self {
        Self::new()
    }
}
