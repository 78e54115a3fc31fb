// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod reporter;
pub mod scanner;
pub mod utils;

pub use config::{Config, ReportConfig, ScanConfig};
pub use error::{HarvestError, Result};
pub use extractor::{GENERIC_LOCATOR, LocatorExtractor};
pub use models::LocatorSet;
pub use pipeline::{FileProcessor, Harvester, ProgressTracker, ScanStats};
pub use reporter::TextReporter;
pub use scanner::{FileScanner, ScanSummary, ScannedFile};
pub use utils::Validator;
