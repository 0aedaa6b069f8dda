//! Task configuration loaded from TOML.
//!
//! Resolution order (highest first):
//! 1. An explicit file path passed to [`TaskConfiguration::load`]
//! 2. `<config dir>/stepwise/config.toml`
//! 3. Compiled defaults
//!
//! ```toml
//! [template]
//! allow_multiple_tasks = false
//!
//! [logging]
//! level = "info"
//! ```

use crate::project::ports::GroupSettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

/// Fully resolved task configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskConfiguration {
    /// Rules applied when instantiating project templates.
    pub template: TemplateConfiguration,
    /// Logging options.
    pub logging: LoggingConfiguration,
}

/// `[template]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateConfiguration {
    /// Whether a project may have several undone task groups at once.
    pub allow_multiple_tasks: bool,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfiguration {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfiguration {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

impl TaskConfiguration {
    /// Parses configuration from TOML text; missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseToml`] when the text is not valid TOML or
    /// a key has the wrong type.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads configuration from `explicit_path`, or from the default location.
    ///
    /// An explicit path must exist. The default location is optional and a
    /// missing file yields [`TaskConfiguration::default`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a file cannot be read or parsed.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit_path {
            let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;
            return Self::from_toml_str(&contents);
        }

        let Some(path) = Self::default_path() else {
            tracing::debug!("no config directory available, using defaults");
            return Ok(Self::default());
        };
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::ReadFile { path, source }),
        }
    }

    /// Returns `<config dir>/stepwise/config.toml` when a config directory
    /// exists on this platform.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("stepwise").join("config.toml"))
    }
}

impl GroupSettings for TaskConfiguration {
    fn allow_multiple_groups(&self) -> bool {
        self.template.allow_multiple_tasks
    }
}
