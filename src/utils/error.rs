use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{method} {url} returned status {status}")]
    StatusError {
        method: String,
        url: String,
        status: u16,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Export task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl InventoryError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(e) if e.is_connect() => {
                "Could not reach the inventory server. Is it running?".to_string()
            }
            Self::ApiError(e) if e.is_timeout() => {
                "The inventory server did not answer in time.".to_string()
            }
            Self::StatusError { status, .. } => {
                format!("The inventory server rejected the request (HTTP {}).", status)
            }
            Self::IoError(e) => format!("File operation failed: {}", e),
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                format!("Invalid configuration: {}", self)
            }
            other => other.to_string(),
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => 2,
            Self::ApiError(_) | Self::StatusError { .. } => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
