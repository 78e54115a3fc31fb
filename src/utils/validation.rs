// file: src/utils/validation.rs
// description: scan input validation utilities and helpers
// reference: input validation patterns

use crate::error::{HarvestError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    /// Root-path check. The only fatal validation in the run: failing it
    /// aborts before any file is touched and before any output is created.
    pub fn validate_scan_root(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(HarvestError::InvalidRoot {
                path: path.to_path_buf(),
                reason: "does not exist".to_string(),
            });
        }

        if !path.is_dir() {
            return Err(HarvestError::InvalidRoot {
                path: path.to_path_buf(),
                reason: "not a directory".to_string(),
            });
        }

        Ok(())
    }

    pub fn has_target_extension(path: &Path, extension: &str) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == extension)
    }

    pub fn truncate_text(text: &str, max_length: usize) -> String {
        if text.len() <= max_length {
            text.to_string()
        } else {
            format!("{}...", &text[..max_length])
        }
    }
}
