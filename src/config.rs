//! Configuration loading for catrina.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "catrina.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    pub protocol: Option<ProtocolConfig>,
    pub antibiotics: Option<AntibioticsConfig>,
    pub assistant: Option<AssistantConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ProtocolConfig {
    /// PDF or extracted text of the clinical protocol
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct AntibioticsConfig {
    /// CSV table of antibiotics
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct AssistantConfig {
    pub name: Option<String>,
}

impl Config {
    pub fn protocol_path(&self) -> Option<&Path> {
        self.protocol.as_ref().and_then(|p| p.path.as_deref())
    }

    pub fn antibiotics_path(&self) -> Option<&Path> {
        self.antibiotics.as_ref().and_then(|a| a.path.as_deref())
    }

    pub fn assistant_name(&self) -> Option<&str> {
        self.assistant.as_ref().and_then(|a| a.name.as_deref())
    }

    /// Override file values with those given on the command line
    pub fn with_overrides(mut self, protocol: Option<PathBuf>, antibiotics: Option<PathBuf>) -> Self {
        if let Some(path) = protocol {
            self.protocol = Some(ProtocolConfig { path: Some(path) });
        }
        if let Some(path) = antibiotics {
            self.antibiotics = Some(AntibioticsConfig { path: Some(path) });
        }
        self
    }
}

/// Parse config from TOML text
pub fn parse_config(text: &str, path: &Path) -> Result<Config, ConfigError> {
    toml::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load config from an explicit path
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text, path)
}

/// Load config from `path`, or from `catrina.toml` if it exists
///
/// A missing default file is not an error; an explicit path must exist.
pub fn load_config_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                load_config(default)
            } else {
                Ok(Config::default())
            }
        }
    }
}
