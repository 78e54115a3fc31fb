// file: src/reporter/text.rs
// description: newline-delimited text report of harvested locators

use crate::error::Result;
use crate::models::LocatorSet;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct TextReporter {
    output_dir: PathBuf,
}

impl TextReporter {
    /// Creates the output directory if absent.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Writes `<category>_locators.txt`: sorted, one locator per line,
    /// newline-terminated. An empty set writes nothing and returns `None`;
    /// absence of the file is the observable "nothing found" signal.
    pub fn write_category(&self, category: &str, locators: &LocatorSet) -> Result<Option<PathBuf>> {
        if locators.is_empty() {
            info!("No {} locators found, skipping report file", category);
            return Ok(None);
        }

        let path = self.output_dir.join(format!("{category}_locators.txt"));

        let mut contents = String::new();
        for locator in locators.sorted_entries() {
            contents.push_str(locator);
            contents.push('\n');
        }

        fs::write(&path, contents)?;

        info!(
            "Saved {} unique {} locators to {}",
            locators.len(),
            category,
            path.display()
        );
        Ok(Some(path))
    }
}
