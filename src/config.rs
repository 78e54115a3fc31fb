// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{HarvestError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub scan: ScanConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    pub extension: String,
    #[serde(default)]
    pub skip_patterns: Vec<String>,
    #[serde(default)]
    pub follow_links: bool,
    /// 0 disables the cap.
    #[serde(default)]
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("LOCATOR_HARVEST")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| HarvestError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| HarvestError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            scan: ScanConfig {
                extension: "cpt".to_string(),
                skip_patterns: vec![],
                follow_links: false,
                max_file_size_mb: 0,
            },
            report: ReportConfig {
                output_dir: PathBuf::from("extracted_locators_cpt"),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.scan.extension.is_empty() {
            return Err(HarvestError::Config(
                "scan.extension must not be empty".to_string(),
            ));
        }

        if self.scan.extension.starts_with('.') {
            return Err(HarvestError::Config(
                "scan.extension must not include a leading dot".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_config();

        assert_eq!(config.scan.extension, "cpt");
        assert!(config.scan.skip_patterns.is_empty());
        assert_eq!(config.scan.max_file_size_mb, 0);
        assert_eq!(
            config.report.output_dir,
            PathBuf::from("extracted_locators_cpt")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_extension() {
        let mut config = Config::default_config();
        config.scan.extension = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_dotted_extension() {
        let mut config = Config::default_config();
        config.scan.extension = ".cpt".to_string();
        assert!(config.validate().is_err());
    }
}
