pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{HttpInventoryApi, LocalStorage};
pub use app::PageController;
pub use config::{toml_config::TomlConfig, Settings};
pub use core::csv_export::{CsvExporter, ExportReport, ExportState, ExportTask};
pub use domain::model::{Car, CarList, CsvFormat, FieldValue, Style, StyleList};
pub use utils::error::{InventoryError, Result};
