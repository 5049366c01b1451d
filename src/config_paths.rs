//! Centralized configuration paths for tablet
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/tablet/`
//! - Windows: `%APPDATA%\tablet\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::config::ConfigError;

const APP_DIR: &str = "tablet";

/// Base config directory
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/tablet`
///   - Else: `~/.config/tablet`
///
/// Windows:
///   - `%APPDATA%\tablet`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/tablet/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/tablet/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), ConfigError> {
    fs::create_dir_all(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, ConfigError> {
    let logs = logs_dir().ok_or(ConfigError::NoConfigDir)?;
    ensure_dir(&logs)?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_is_under_config_dir() {
        if let (Some(dir), Some(file)) = (config_dir(), config_file()) {
            assert!(file.starts_with(&dir));
            assert!(file.to_string_lossy().ends_with("config.yaml"));
            assert!(dir.to_string_lossy().contains(APP_DIR));
        }
    }

    #[test]
    fn test_logs_dir_is_under_config_dir() {
        if let (Some(dir), Some(logs)) = (config_dir(), logs_dir()) {
            assert!(logs.starts_with(&dir));
        }
    }
}
