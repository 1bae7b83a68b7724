//! Configuration file loading for the `lutefisk` binary.

use lutefisk_core::Fen;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up when `--config` is not given.
pub const CONFIG_FILE: &str = "lutefisk.toml";

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// `log_level` is not one of trace, debug, info, warn, error.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
    /// `square_size` must be at least one pixel.
    #[error("Square size must be positive")]
    ZeroSquareSize,
}

/// Board viewer settings.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Position loaded at startup. Defaults to the standard start position.
    #[serde(default = "default_start_fen")]
    pub start_fen: String,
    /// Maximum tracing level. Defaults to "info".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Print the board diagram after the moves are played.
    #[serde(default = "default_show_board")]
    pub show_board: bool,
    /// Pixel size of one square, used to map `--click` coordinates.
    #[serde(default = "default_square_size")]
    pub square_size: u32,
}

fn default_start_fen() -> String {
    Fen::STARTPOS.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_show_board() -> bool {
    true
}

fn default_square_size() -> u32 {
    64
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start_fen: default_start_fen(),
            log_level: default_log_level(),
            show_board: default_show_board(),
            square_size: default_square_size(),
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, `lutefisk.toml` is looked
    /// up in the current directory and its two parents; if none is found the
    /// defaults are used. Returns the path that was read, if any.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }

        let candidates = [
            PathBuf::from(CONFIG_FILE),
            Path::new("..").join(CONFIG_FILE),
            Path::new("../..").join(CONFIG_FILE),
        ];
        for path in candidates {
            if path.exists() {
                let config = Self::from_file(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((Self::default(), None))
    }

    /// Reads and parses a configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration text and validates it.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.level()?;
        if config.square_size == 0 {
            return Err(ConfigError::ZeroSquareSize);
        }
        Ok(config)
    }

    /// Returns `log_level` as a tracing level.
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}
