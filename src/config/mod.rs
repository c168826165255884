#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::CsvFormat;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use chrono::{DateTime, TimeZone};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Effective configuration after merging the TOML file and command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub export_path: Option<String>,
    pub export_format: CsvFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            export_path: None,
            export_format: CsvFormat::default(),
        }
    }
}

impl Settings {
    pub fn from_provider<C: ConfigProvider>(config: &C) -> Self {
        Self {
            base_url: config.base_url().to_string(),
            timeout_seconds: config.timeout_seconds(),
            export_path: config.export_path().map(str::to_string),
            export_format: config.export_format(),
        }
    }

    /// The configured export path, or a timestamped file in the working directory.
    pub fn export_path_or_default<Tz: TimeZone>(&self, now: DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.export_path
            .clone()
            .unwrap_or_else(|| default_export_filename(now))
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn export_path(&self) -> Option<&str> {
        self.export_path.as_deref()
    }

    fn export_format(&self) -> CsvFormat {
        self.export_format
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        if let Some(path) = &self.export_path {
            validate_path("export_path", path)?;
        }
        Ok(())
    }
}

pub fn default_export_filename<Tz: TimeZone>(now: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("cars_{}.csv", now.format("%Y%m%d_%H%M%S"))
}
