use crate::app::controller::CarForm;
use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::domain::model::CsvFormat;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "car-inventory")]
#[command(about = "Manage the car inventory and export it to CSV")]
pub struct CliConfig {
    /// Base URL of the inventory server [default: http://localhost:8080]
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// TOML configuration file; command-line flags take precedence
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// HTTP request timeout [default: 30]
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the car table
    List,
    /// Create a car, or update it when --id is given and not 0
    Save(CarArgs),
    /// Delete a car by id
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Show the style list
    Styles,
    /// Create a style
    AddStyle {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Ask the server to produce its CSV export
    ExportRemote,
    /// Write the current car list to a local CSV file
    Export {
        /// Destination file [default: cars_<timestamp>.csv]
        #[arg(long, short)]
        output: Option<String>,
        /// plain (comma-space, unquoted) or quoted (RFC 4180)
        #[arg(long)]
        format: Option<CsvFormat>,
        /// Read the car list from a JSON file shaped like `GET /cars` instead of the server
        #[arg(long)]
        from_file: Option<String>,
    },
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct CarArgs {
    #[arg(long, default_value = "")]
    pub id: String,
    #[arg(long, default_value = "")]
    pub model: String,
    #[arg(long, default_value = "")]
    pub brand: String,
    #[arg(long, default_value = "")]
    pub year: String,
    #[arg(long, default_value = "")]
    pub price: String,
    #[arg(long, default_value = "")]
    pub color: String,
    #[arg(long, default_value = "")]
    pub style: String,
}

impl From<&CarArgs> for CarForm {
    fn from(args: &CarArgs) -> Self {
        Self {
            id: args.id.clone(),
            model: args.model.clone(),
            brand: args.brand.clone(),
            year: args.year.clone(),
            price: args.price.clone(),
            color: args.color.clone(),
            style_select: args.style.clone(),
        }
    }
}

impl CliConfig {
    /// Merge the optional TOML file with the command-line overrides.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Settings::from_provider(&file)
            }
            None => Settings::default(),
        };

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
        if let Command::Export { output, format, .. } = &self.command {
            if let Some(output) = output {
                settings.export_path = Some(output.clone());
            }
            if let Some(format) = format {
                settings.export_format = *format;
            }
        }

        settings.validate()?;
        Ok(settings)
    }
}
