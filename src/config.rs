use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::DEFAULT_CONFIG_FILE;
use crate::error::{CollectorError, Result};

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level applied to this crate's targets unless RUST_LOG says otherwise
    pub level: String,
    /// Directory for the JSON log file; file logging is off when unset
    pub directory: Option<String>,
    pub file_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_name: "unix-groups.log".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    /// Load `path`, or the default config file when no path is given.
    /// A missing default file means defaults; a missing explicit file is an
    /// error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CollectorError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn reads_logging_and_output_sections() {
        let config = Config::from_toml(
            r#"
            [logging]
            level = "debug"
            directory = "logs"

            [output]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.directory.as_deref(), Some("logs"));
        assert_eq!(config.logging.file_name, "unix-groups.log");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_format_is_a_toml_error() {
        let err = Config::from_toml("[output]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, CollectorError::Toml(_)));
    }

    #[test]
    fn missing_explicit_file_is_a_config_error() {
        let err = Config::load(Some(Path::new("/no/such/unix-groups.toml"))).unwrap_err();
        assert!(matches!(err, CollectorError::Config(_)));
    }
}
