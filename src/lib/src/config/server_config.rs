use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_DATA_DIR, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PUBLIC_DIR, ENV_DATA_DIR, ENV_HOST,
    ENV_PORT, ENV_PUBLIC_DIR,
};
use crate::error::FormdropError;

/// Where the server listens and where it keeps its files.
///
/// Values are layered: defaults, then an optional TOML file, then the
/// `FORMDROP_*` environment variables, then whatever the caller sets last
/// (the command line flags in the server binary).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub public_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(contents: &str) -> Result<ServerConfig, FormdropError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<ServerConfig, FormdropError> {
        let path = path.as_ref();
        log::debug!("Loading server config from {:?}", path);
        let contents = std::fs::read_to_string(path)
            .map_err(|err| FormdropError::file_read_error(path, err))?;
        ServerConfig::from_toml_str(&contents)
    }

    /// Defaults, overridden by the file if one is given, overridden by the environment
    pub fn load(path: Option<&Path>) -> Result<ServerConfig, FormdropError> {
        let config = match path {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };
        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply the `FORMDROP_*` variables found by `lookup`
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<ServerConfig, FormdropError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port.trim().parse::<u16>().map_err(|err| {
                FormdropError::invalid_config(format!("{ENV_PORT} must be a port number: {err}"))
            })?;
        }
        if let Some(data_dir) = lookup(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(data_dir);
        }
        if let Some(public_dir) = lookup(ENV_PUBLIC_DIR) {
            self.public_dir = PathBuf::from(public_dir);
        }
        Ok(self)
    }

    pub fn to_toml_string(&self) -> Result<String, FormdropError> {
        Ok(toml::to_string(self)?)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
