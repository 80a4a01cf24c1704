//! Configuration file reading and loading

use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use super::models::Configuration;
use super::parse::parse_config;
use super::path::resolve_config_path;

/// Loads the configuration file from a resolved location.
///
/// Holds no parsed state: every `load()` reads and parses the file again.
#[derive(Debug, Clone)]
pub struct ContextStore {
    config_path: PathBuf,
}

impl ContextStore {
    /// Create a store for an explicit path, or the environment/default
    /// location when `path` is `None` or empty.
    pub fn new(path: Option<&str>) -> Result<Self> {
        Ok(Self {
            config_path: resolve_config_path(path)?,
        })
    }

    /// Create a store with an already resolved path (no `~` expansion)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Read the file as text. A missing file reads as empty content.
    pub fn read(&self) -> Result<String> {
        read_config_file(&self.config_path)
    }

    /// Read and parse the configuration.
    /// Parse failures are wrapped with the file path and a validity hint.
    pub fn load(&self) -> Result<Configuration> {
        let contents = self.read()?;
        parse_config(&contents).map_err(|e| ConfigError::Parse {
            path: self.config_path.clone(),
            source: Box::new(e),
        })
    }
}

/// Read the full contents of `path`, treating "not found" as empty.
/// Invalid UTF-8 is replaced rather than rejected so the parser reports it.
pub fn read_config_file(path: &Path) -> Result<String> {
    match fs::read(path) {
        Ok(bytes) => {
            debug!("Read {} bytes from {}", bytes.len(), path.display());
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("Config file {} not found, using empty config", path.display());
            Ok(String::new())
        }
        Err(e) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Load the configuration from `path`, or from `BAO_CONFIG_PATH` / `~/.bao`
/// when `path` is empty.
pub fn load_config(path: &str) -> Result<Configuration> {
    ContextStore::new(Some(path))?.load()
}
