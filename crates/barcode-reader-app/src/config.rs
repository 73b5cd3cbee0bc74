//! Configuration management for barcode-reader
//!
//! Config stored at: ~/.config/barcode-reader/config.json

use barcode_reader_types::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Print progress diagnostics to stderr
    #[serde(default)]
    pub verbose: bool,

    /// Rescan the inverted image when no barcode is found
    #[serde(default)]
    pub try_inverted: bool,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("barcode-reader");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or use defaults.
    ///
    /// A missing file (or a platform without a config directory) is not an
    /// error; a file that exists but does not parse is.
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(_) => return Ok(Config::default()),
        };

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load config from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Config = serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Barcode Reader Configuration")?;
        writeln!(f, "============================")?;
        writeln!(f, "Verbose:        {}", self.verbose)?;
        write!(f, "Try inverted:   {}", self.try_inverted)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            write!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
