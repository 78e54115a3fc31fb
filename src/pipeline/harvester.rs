// file: src/pipeline/harvester.rs
// description: coordinates directory scanning, extraction, and report writing
// reference: drives the synchronous walk-match-write pass

use crate::config::Config;
use crate::error::Result;
use crate::extractor::GENERIC_LOCATOR;
use crate::models::LocatorSet;
use crate::pipeline::processor::FileProcessor;
use crate::pipeline::progress::{ProgressTracker, ScanStats};
use crate::reporter::TextReporter;
use crate::scanner::FileScanner;
use crate::utils::Validator;
use std::path::Path;
use tracing::{info, warn};

pub struct Harvester {
    config: Config,
    colored: bool,
}

impl Harvester {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            colored: true,
        }
    }

    pub fn with_color(config: Config, colored: bool) -> Self {
        Self { config, colored }
    }

    /// The single walk-match-write pass. Only root validation is fatal;
    /// every per-file failure is logged and the walk continues. The union
    /// set is owned here and nowhere else.
    pub fn run(&self, root: &Path) -> Result<ScanStats> {
        Validator::validate_scan_root(root)?;

        info!("Starting locator extraction from: {}", root.display());

        let scanner = FileScanner::new(self.config.scan.clone());
        let summary = scanner.scan_directory(root)?;

        let processor = FileProcessor::new(&self.config.scan);
        let mut harvested = LocatorSet::new();
        let mut progress = ProgressTracker::with_color(summary.files.len(), self.colored);

        for file in &summary.files {
            progress.set_message(Validator::truncate_text(&file.relative_path, 60));

            match processor.process(file) {
                Ok(locators) => {
                    harvested.merge(locators);
                    progress.inc_files_matched();
                }
                Err(e) => {
                    warn!("Failed to process {}: {}", file.relative_path, e);
                    progress.inc_files_failed();
                }
            }
        }

        progress.finish();

        let reporter = TextReporter::new(&self.config.report.output_dir)?;
        let report_path = reporter.write_category(GENERIC_LOCATOR, &harvested)?;

        let stats = progress.stats(summary.total_scanned, harvested.len());
        self.log_final_stats(&stats, report_path.as_deref());

        Ok(stats)
    }

    fn log_final_stats(&self, stats: &ScanStats, report_path: Option<&Path>) {
        info!("=== Extraction Summary ===");
        info!("Duration: {} seconds", stats.duration_secs);
        info!("Files scanned (all types): {}", stats.files_scanned);
        info!("Candidate files processed: {}", stats.files_matched);
        info!("Files failed: {}", stats.files_failed);
        info!("Success rate: {:.2}%", stats.success_rate());
        info!("Unique locators extracted: {}", stats.unique_locators);
        match report_path {
            Some(path) => info!("Report written to: {}", path.display()),
            None => info!("No locators found, no report written"),
        }
        info!("==========================");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ReportConfig, ScanConfig};
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn test_config(output_dir: PathBuf) -> Config {
        Config {
            scan: ScanConfig {
                extension: "cpt".to_string(),
                skip_patterns: vec![],
                follow_links: false,
                max_file_size_mb: 0,
            },
            report: ReportConfig { output_dir },
        }
    }

    #[test]
    fn test_end_to_end_harvest() {
        let project = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let output_dir = out.path().join("reports");

        fs::write(
            project.path().join("login.cpt"),
            r#"
* Click on the "//input[@type='submit']" button.
* Enter "user" into the "//input[@id='name']" field.
* Verify the "welcome_banner" element.
"#,
        )
        .unwrap();
        fs::write(
            project.path().join("notes.txt"),
            r#"* Click on the "ignored_locator" element."#,
        )
        .unwrap();

        let harvester = Harvester::with_color(test_config(output_dir.clone()), false);
        let stats = harvester.run(project.path()).unwrap();

        assert_eq!(stats.files_scanned, 2);
        assert_eq!(stats.files_matched, 1);
        assert_eq!(stats.files_failed, 0);
        assert_eq!(stats.unique_locators, 3);

        let report = fs::read_to_string(output_dir.join("generic_locator_locators.txt")).unwrap();
        assert_eq!(
            report,
            "//input[@id='name']\n//input[@type='submit']\nwelcome_banner\n"
        );
        assert!(!report.contains("ignored_locator"));
    }

    #[test]
    fn test_invalid_root_is_fatal_with_no_side_effects() {
        let out = TempDir::new().unwrap();
        let output_dir = out.path().join("reports");

        let harvester = Harvester::with_color(test_config(output_dir.clone()), false);
        let result = harvester.run(Path::new("/nonexistent/project"));

        assert!(result.is_err());
        assert!(!output_dir.exists(), "no output artifacts on invalid root");
    }

    #[test]
    fn test_file_root_is_rejected() {
        let project = TempDir::new().unwrap();
        let file_path = project.path().join("spec.cpt");
        fs::write(&file_path, "* spec").unwrap();
        let out = TempDir::new().unwrap();

        let harvester = Harvester::with_color(test_config(out.path().join("reports")), false);
        assert!(harvester.run(&file_path).is_err());
    }

    #[test]
    fn test_no_locators_writes_no_report() {
        let project = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let output_dir = out.path().join("reports");

        fs::write(project.path().join("plain.cpt"), "no locators in here").unwrap();

        let harvester = Harvester::with_color(test_config(output_dir.clone()), false);
        let stats = harvester.run(project.path()).unwrap();

        assert_eq!(stats.files_matched, 1);
        assert_eq!(stats.unique_locators, 0);
        assert!(output_dir.is_dir());
        assert!(!output_dir.join("generic_locator_locators.txt").exists());
    }

    #[test]
    fn test_duplicates_across_files_collapse() {
        let project = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let output_dir = out.path().join("reports");

        fs::write(
            project.path().join("a.cpt"),
            r#"* Click on the "shared_locator" element."#,
        )
        .unwrap();
        fs::write(
            project.path().join("b.cpt"),
            r#"* Click on the "shared_locator" element."#,
        )
        .unwrap();

        let harvester = Harvester::with_color(test_config(output_dir.clone()), false);
        let stats = harvester.run(project.path()).unwrap();

        assert_eq!(stats.files_matched, 2);
        assert_eq!(stats.unique_locators, 1);

        let report = fs::read_to_string(output_dir.join("generic_locator_locators.txt")).unwrap();
        assert_eq!(report, "shared_locator\n");
    }
}
