use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{StoreError, StoreResult};
use crate::ui::messages::warning;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Location of the SQLite database file.
    pub database: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("wardstore")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".wardstore")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("wardstore.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("wardstore.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A malformed or unreadable file is reported once and replaced by the
    /// defaults.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!("Ignoring malformed config file: {e}"));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!("Failed to read config file: {e}"));
                Self::default()
            }
        }
    }

    /// Write the configuration to its standard location.
    pub fn save(&self) -> StoreResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|e| StoreError::Config(e.to_string()))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
