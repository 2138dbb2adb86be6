//! Configuration file loading for the figure generator
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system
//! directory).

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use xdsm::{XdsmError, config::StyleOptions};

/// Application configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Typesetting options passed through to the diagram library
    #[serde(default)]
    pub style: StyleOptions,

    /// Write-behavior defaults, overridable from the command line
    #[serde(default)]
    pub write: WriteDefaults,
}

/// Write-behavior defaults section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WriteDefaults {
    /// Default output directory
    #[serde(default)]
    pub out_dir: Option<PathBuf>,

    /// Run the LaTeX toolchain after writing sources
    #[serde(default)]
    pub build: Option<bool>,

    /// Delete intermediate build files after a successful build
    #[serde(default)]
    pub cleanup: Option<bool>,

    /// Discard toolchain console output
    #[serde(default)]
    pub quiet: Option<bool>,
}

/// Configuration-related errors for the figure generator
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for XdsmError {
    fn from(err: ConfigError) -> Self {
        XdsmError::Io(io::Error::other(err.to_string()))
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (xdsm/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path to config file
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, XdsmError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("xdsm/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("rs", "xdsm", "xdsm") {
        let config_dir = proj_dirs.config_dir();
        let system_config = config_dir.join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file doesn't exist, cannot be read, or fails to
/// parse as TOML.
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, XdsmError> {
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
    use super::*;

    use std::io::Write as _;

    use xdsm::config::MathFont;

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let result = load_config(Some("does/not/exist.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_path_parses_sections() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "[style]\nmath_font = \"computer_modern\"\n\n[write]\nbuild = false\nquiet = true"
        )
        .unwrap();

        let config = load_config(Some(file.path())).expect("config loads");
        assert_eq!(config.style.math_font, MathFont::ComputerModern);
        assert_eq!(config.write.build, Some(false));
        assert_eq!(config.write.quiet, Some(true));
        assert_eq!(config.write.out_dir, None);
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "not valid toml [").unwrap();

        let result = load_config(Some(file.path()));
        assert!(result.is_err());
    }
}
