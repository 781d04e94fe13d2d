use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("cannot write default config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Window sizing configuration, read once at startup.
///
/// Zero or negative values are kept as-is here; the fit calculator
/// substitutes the 800x600 defaults per dimension when it uses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: Display,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    pub width: i32,
    pub height: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: Display::default(),
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl Config {
    /// Resolves the configuration: the executable's directory is tried
    /// first, then the current working directory. If neither has a
    /// `config.toml`, defaults are returned and a file with those defaults
    /// is written next to the caller (write failures are logged and
    /// otherwise ignored).
    ///
    /// A malformed existing file is an error for this call only; the caller
    /// falls back to `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let exe_dir = env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::load_from(exe_dir.as_deref(), &cwd)
    }

    fn load_from(exe_dir: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        let candidates = exe_dir
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .into_iter()
            .chain(std::iter::once(cwd.join(CONFIG_FILE_NAME)));

        for path in candidates {
            if path.is_file() {
                debug!("loading config from {}", path.display());
                return Self::parse_file(&path);
            }
        }

        let config = Self::default();
        let path = cwd.join(CONFIG_FILE_NAME);
        debug!("no config file found, creating {}", path.display());
        if let Err(e) = config.write_to(&path) {
            warn!("{e}");
        }
        Ok(config)
    }

    fn parse_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_to(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self).expect("config serializes to TOML");
        fs::write(path, contents).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
