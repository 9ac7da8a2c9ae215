use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::width::{set_ambiguous_width, WidthPolicy};

pub const CONFIG_PATH_ENV: &str = "LAPA_CONFIG_PATH";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    ErrLoadingConfig(String),
    InvalidAmbiguousWidth(u8),
    PathNotFound,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ErrLoadingConfig(message) => {
                write!(f, "error loading config: {message}")
            }
            ConfigError::InvalidAmbiguousWidth(width) => {
                write!(f, "width.ambiguous must be 1 or 2, got {width}")
            }
            ConfigError::PathNotFound => write!(f, "config file not found"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[inline]
fn default_ambiguous_width() -> u8 {
    1
}

#[inline]
fn default_log_level() -> String {
    String::from("OFF")
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Width {
    /// Width of East Asian ambiguous characters, 1 or 2.
    #[serde(default = "default_ambiguous_width")]
    pub ambiguous: u8,
}

impl Default for Width {
    fn default() -> Width {
        Width {
            ambiguous: default_ambiguous_width(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Developer {
    #[serde(default = "default_log_level", rename = "log-level")]
    pub log_level: String,
    #[serde(default, rename = "log-file")]
    pub log_file: Option<String>,
}

impl Default for Developer {
    fn default() -> Developer {
        Developer {
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub width: Width,
    #[serde(default)]
    pub developer: Developer,
}

#[cfg(not(target_os = "windows"))]
#[inline]
pub fn config_dir_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home_dir) => home_dir.join(".config").join("lapa"),
        None => PathBuf::from(".lapa"),
    }
}

#[cfg(target_os = "windows")]
#[inline]
pub fn config_dir_path() -> PathBuf {
    match dirs::config_local_dir() {
        Some(dir) => dir.join("lapa"),
        None => PathBuf::from(".lapa"),
    }
}

/// `LAPA_CONFIG_PATH` when set, otherwise `config.toml` in [`config_dir_path`].
#[inline]
pub fn config_file_path() -> PathBuf {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => config_dir_path().join("config.toml"),
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let decoded = toml::from_str::<Config>(content)
            .map_err(|err| ConfigError::ErrLoadingConfig(err.to_string()))?;

        match decoded.width.ambiguous {
            1 | 2 => Ok(decoded),
            width => Err(ConfigError::InvalidAmbiguousWidth(width)),
        }
    }

    pub fn try_load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::PathNotFound);
        }

        match std::fs::read_to_string(path) {
            Ok(content) => Config::from_toml_str(&content),
            Err(err) => Err(ConfigError::ErrLoadingConfig(err.to_string())),
        }
    }

    pub fn try_load() -> Result<Self, ConfigError> {
        Config::try_load_from(&config_file_path())
    }

    /// Like [`Config::try_load`], falling back to the defaults.
    pub fn load() -> Self {
        match Config::try_load() {
            Ok(config) => config,
            Err(ConfigError::PathNotFound) => Config::default(),
            Err(err) => {
                warn!("{err}, using default config");
                Config::default()
            }
        }
    }

    #[inline]
    pub fn width_policy(&self) -> WidthPolicy {
        WidthPolicy::new(self.width.ambiguous)
    }

    /// Install the configured ambiguous width as the process default.
    pub fn apply(&self) {
        debug!("ambiguous width set to {}", self.width.ambiguous);
        set_ambiguous_width(self.width.ambiguous);
    }
}
