//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use arrange::{ArrangeError, config::AppConfig};

/// Relative path of the project-local configuration file.
pub const LOCAL_CONFIG_PATH: &str = "arrange/config.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for ArrangeError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Parse(_) => ArrangeError::InvalidConfig(err.to_string()),
            ConfigError::MissingFile(_) => ArrangeError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                err.to_string(),
            )),
        }
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (arrange/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or holds invalid values
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ArrangeError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new(LOCAL_CONFIG_PATH);
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "arrange", "arrange") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// Grid values are validated while deserializing, so an out-of-range value
/// surfaces here as [`ArrangeError::InvalidConfig`].
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ArrangeError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use arrange::geometry::PlacementDirection;

    use super::*;

    #[test]
    fn test_load_explicit_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[grid]\nx_count = 4\ngroup_by_name = true\nplacement_direction = \"Y-\""
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.grid().x_count(), 4);
        assert!(config.grid().group_by_name());
        assert_eq!(
            config.grid().placement_direction(),
            PlacementDirection::YNegative
        );
    }

    #[test]
    fn test_missing_explicit_config() {
        let err = load_config(Some("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ArrangeError::Io(_)));
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[grid]\nspacing_x = 0.0").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ArrangeError::InvalidConfig(_)));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[grid]\nz_count = 3").unwrap();

        assert!(load_config(Some(file.path())).is_err());
    }
}
