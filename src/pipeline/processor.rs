// file: src/pipeline/processor.rs
// description: converts one scanned file into its extracted locator set
// reference: reads file content and runs the locator extractor

use crate::config::ScanConfig;
use crate::error::{HarvestError, Result};
use crate::extractor::LocatorExtractor;
use crate::models::LocatorSet;
use crate::scanner::ScannedFile;
use std::fs;
use std::path::Path;
use tracing::debug;

pub struct FileProcessor {
    extractor: LocatorExtractor,
    max_bytes: u64,
}

impl FileProcessor {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            extractor: LocatorExtractor::new(),
            max_bytes: (config.max_file_size_mb as u64) * 1_048_576,
        }
    }

    /// A failure here is a value, not a panic: the harvester turns it into a
    /// logged diagnostic and the file contributes an empty set.
    pub fn process(&self, scanned_file: &ScannedFile) -> Result<LocatorSet> {
        debug!("Processing file: {}", scanned_file.relative_path);

        let content = self.read_file_content(&scanned_file.path)?;

        if self.max_bytes > 0 && content.len() as u64 > self.max_bytes {
            return Err(HarvestError::FileTooLarge {
                path: scanned_file.path.clone(),
                size: content.len() as u64,
            });
        }

        let locators = self.extractor.extract_from_text(&content);

        debug!(
            "Extracted {} locators from {}",
            locators.len(),
            scanned_file.relative_path
        );

        Ok(locators)
    }

    fn read_file_content(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| HarvestError::FileOperation {
            path: path.to_path_buf(),
            source,
        })
    }
}
