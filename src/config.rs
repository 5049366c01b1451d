//! Grid configuration persistence
//!
//! Stores user preferences in `~/.config/tablet/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::csv::Delimiter;
use crate::model::MIN_COLUMN_WIDTH;

/// Errors reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory available")]
    NoConfigDir,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config at {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// How the delimiter of a loaded document is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterSetting {
    /// From the file extension, else sniffed from content
    #[default]
    Auto,
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl DelimiterSetting {
    /// Fixed delimiter, or None for auto
    pub fn fixed(self) -> Option<Delimiter> {
        match self {
            DelimiterSetting::Auto => None,
            DelimiterSetting::Comma => Some(Delimiter::Comma),
            DelimiterSetting::Tab => Some(Delimiter::Tab),
            DelimiterSetting::Pipe => Some(Delimiter::Pipe),
            DelimiterSetting::Semicolon => Some(Delimiter::Semicolon),
        }
    }
}

/// Grid configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Floor for interactive column resizing, in pixels
    pub min_column_width: u32,
    /// Cap for the content-based initial width, in pixels
    pub max_initial_column_width: u32,
    /// Approximate glyph width used by the initial width estimate
    pub char_width_px: u32,
    pub delimiter: DelimiterSetting,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_column_width: MIN_COLUMN_WIDTH,
            max_initial_column_width: 300,
            char_width_px: 8,
            delimiter: DelimiterSetting::Auto,
        }
    }
}

impl GridConfig {
    /// Load config from the default location, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config.sanitized())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = serde_yaml::to_string(self).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, content).map_err(io_err)?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Widths below the resize floor are not allowed
    pub(crate) fn sanitized(mut self) -> Self {
        if self.min_column_width < MIN_COLUMN_WIDTH {
            tracing::warn!(
                "min_column_width {} below {}, raising",
                self.min_column_width,
                MIN_COLUMN_WIDTH
            );
            self.min_column_width = MIN_COLUMN_WIDTH;
        }
        self.max_initial_column_width = self.max_initial_column_width.max(self.min_column_width);
        self
    }
}
