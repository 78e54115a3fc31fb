// file: src/scanner.rs
// description: Directory walking and candidate file discovery with filtering
// reference: https://docs.rs/walkdir

use crate::config::ScanConfig;
use crate::error::Result;
use crate::utils::Validator;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

pub struct FileScanner {
    config: ScanConfig,
}

#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub relative_path: String,
    pub size: u64,
}

/// Walk result: the candidate files plus the count of every file seen,
/// candidates or not. The summary line reports both.
#[derive(Debug, Default)]
pub struct ScanSummary {
    pub files: Vec<ScannedFile>,
    pub total_scanned: usize,
}

impl FileScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn scan_directory(&self, root: &Path) -> Result<ScanSummary> {
        info!("Scanning directory: {}", root.display());
        let mut summary = ScanSummary::default();

        for entry in WalkDir::new(root)
            .follow_links(self.config.follow_links)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }

            summary.total_scanned += 1;
            let path = entry.path();

            if !Validator::has_target_extension(path, &self.config.extension) {
                debug!("Skipping non-candidate file: {}", path.display());
                continue;
            }

            if self.should_skip(path) {
                debug!("Skipping excluded file: {}", path.display());
                continue;
            }

            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            let max_size = (self.config.max_file_size_mb * 1024 * 1024) as u64;

            if max_size > 0 && size > max_size {
                debug!(
                    "Skipping large file ({} MB): {}",
                    size / 1024 / 1024,
                    path.display()
                );
                continue;
            }

            let relative_path = path
                .strip_prefix(root)
                .unwrap_or(path)
                .to_string_lossy()
                .to_string();

            summary.files.push(ScannedFile {
                path: path.to_path_buf(),
                relative_path,
                size,
            });
        }

        info!(
            "Found {} candidate files out of {} scanned",
            summary.files.len(),
            summary.total_scanned
        );
        Ok(summary)
    }

    fn should_skip(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.config.skip_patterns {
            if pattern.contains('*') {
                let pattern_without_star = pattern.replace("*.", ".");
                if path_str.ends_with(&pattern_without_star) {
                    return true;
                }
            } else if path_str.contains(pattern) {
                return true;
            }
        }

        false
    }
}
