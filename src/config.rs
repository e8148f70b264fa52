use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::scanner::{DEFAULT_TOP_N, MAX_TOP_N, MIN_TOP_N};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scanner: ScannerConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Number of files to report (1-100)
    pub top_n: usize,
    /// Include hidden files and directories
    pub include_hidden: bool,
    /// Only consider file names ending with this suffix
    pub extension: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// List every path that could not be accessed
    pub show_errors: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            include_hidden: false,
            extension: None,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist. The default file is optional; when it is
    /// missing the built-in defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/bigfiles/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("bigfiles").join("config.toml"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TOP_N..=MAX_TOP_N).contains(&self.scanner.top_n) {
            return Err(ConfigError::Invalid(format!(
                "scanner.top_n must be between {} and {}, got {}",
                MIN_TOP_N, MAX_TOP_N, self.scanner.top_n
            )));
        }

        if matches!(self.scanner.extension.as_deref(), Some("")) {
            return Err(ConfigError::Invalid(
                "scanner.extension must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
