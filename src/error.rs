use std::path::PathBuf;
use thiserror::Error;

/// Terminal failures of a collection run. Any of these discards partial
/// results; the host reports exactly one of them.
#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("The required file {} does not exist.", .0.display())]
    NotFound(PathBuf),

    #[error("An error occurred opening the file: {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("An error occurred reading the file:{}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The required file {} exists but does not contain valid data.", .0.display())]
    EmptyOrInvalid(PathBuf),

    #[error("An unexpected error occurred. The exception was: {0}")]
    Unexpected(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CollectorError {
    /// Short machine-readable kind, used in logs and JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            CollectorError::NotFound(_) => "not_found",
            CollectorError::Open { .. } => "open_error",
            CollectorError::Read { .. } => "read_error",
            CollectorError::EmptyOrInvalid(_) => "empty_or_invalid",
            CollectorError::Unexpected(_) => "unexpected",
            CollectorError::Config(_) | CollectorError::Toml(_) => "config",
        }
    }
}

pub type Result<T> = std::result::Result<T, CollectorError>;
