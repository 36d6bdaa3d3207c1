//! Configuration loading from disk and the command line.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::schema::EchoConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<EchoConfig, ConfigError> {
    let config: EchoConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<EchoConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Values given on the command line, layered over the loaded file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub path: Option<String>,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl ConfigOverrides {
    /// Apply the overrides and re-validate the result.
    pub fn apply(self, mut config: EchoConfig) -> Result<EchoConfig, ConfigError> {
        if let Some(bind_address) = self.bind_address {
            config.listener.bind_address = bind_address;
        }
        if let Some(path) = self.path {
            config.echo.path = path;
        }
        if let Some(log_level) = self.log_level {
            config.observability.log_level = log_level;
        }
        if self.json_logs {
            config.observability.json_logs = true;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}
