//! Locating the style and canvas configuration.
//!
//! The first file found wins; files are never merged. Sections and keys left
//! out of a file keep their defaults.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use arcanum::{ArcanumError, config::AppConfig};

/// Location of the project-local configuration file.
const LOCAL_CONFIG_PATH: &str = "arcanum/config.toml";

/// Failures while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration `{path}`: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for ArcanumError {
    fn from(err: ConfigError) -> Self {
        ArcanumError::Config(err.to_string())
    }
}

/// Loads the configuration for a run.
///
/// Looks, in order, at `explicit_path`, `arcanum/config.toml` under the
/// working directory, and `config.toml` in the platform config directory,
/// falling back to [`AppConfig::default`].
///
/// # Errors
///
/// Returns [`ArcanumError::Config`] if `explicit_path` does not exist or the
/// chosen file is not valid configuration TOML.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ArcanumError> {
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

    if let Some(proj_dirs) = ProjectDirs::from("com", "arcanum", "arcanum") {
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

/// Reads and parses one configuration file.
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ArcanumError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.toml");
        fs::write(&path, "[canvas]\nwidth = 640.0\nheight = 480.0\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.canvas().width(), 640.0);
        assert_eq!(config.canvas().height(), 480.0);
    }

    #[test]
    fn test_missing_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("absent.toml"))).unwrap_err();

        match err {
            ArcanumError::Config(message) => assert!(message.contains("Missing configuration file")),
            other => panic!("Expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[canvas]\nwidth = \"wide\"\n").unwrap();

        assert!(matches!(
            load_config(Some(&path)),
            Err(ArcanumError::Config(_))
        ));
    }
}
