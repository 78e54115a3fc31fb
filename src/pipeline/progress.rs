// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for scan execution
// reference: uses indicatif for progress bars and tracks processing metrics

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_matched: usize,
    pub files_failed: usize,
    pub unique_locators: usize,
    pub duration_secs: u64,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files_per_second(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        self.files_matched as f64 / self.duration_secs as f64
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.files_matched + self.files_failed;
        if total == 0 {
            return 0.0;
        }
        (self.files_matched as f64 / total as f64) * 100.0
    }
}

/// Single bar across the candidate file list. The pipeline is synchronous,
/// so plain counters suffice.
pub struct ProgressTracker {
    bar: ProgressBar,
    files_matched: usize,
    files_failed: usize,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_files: usize) -> Self {
        Self::with_color(total_files, true)
    }

    pub fn with_color(total_files: usize, colored: bool) -> Self {
        Self {
            bar: create_progress_bar(total_files as u64, colored),
            files_matched: 0,
            files_failed: 0,
            start_time: Instant::now(),
        }
    }

    pub fn inc_files_matched(&mut self) {
        self.files_matched += 1;
        self.bar.inc(1);
    }

    pub fn inc_files_failed(&mut self) {
        self.files_failed += 1;
        self.bar.inc(1);
    }

    pub fn set_message(&self, message: String) {
        self.bar.set_message(message);
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Extraction complete");
    }

    pub fn stats(&self, files_scanned: usize, unique_locators: usize) -> ScanStats {
        ScanStats {
            files_scanned,
            files_matched: self.files_matched,
            files_failed: self.files_failed,
            unique_locators,
            duration_secs: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(total: u64, colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(total);
    if colored {
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
                )
                .expect("Failed to create progress bar template")
                .progress_chars("█▓▒░"),
        );
    } else {
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({eta}) {msg}")
                .expect("Failed to create progress bar template")
                .progress_chars("=>-"),
        );
    }
    bar
}
