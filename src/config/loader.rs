//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for reading the payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{PayrollError, PayrollResult};

use super::types::PayrollConfig;

/// Loads and provides access to the payroll configuration.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// println!("Data file: {}", loader.config().storage.data_file.display());
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::ConfigNotFound`] if the file cannot be read
    /// and [`PayrollError::ConfigParseError`] if it is not valid YAML for
    /// [`PayrollConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<PayrollConfig>(path)?;

        info!(
            path = %path.display(),
            data_file = %config.storage.data_file.display(),
            "Loaded payroll configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        // An empty file is a valid "all defaults" configuration.
        if content.trim().is_empty() {
            return serde_yaml::from_str("{}").map_err(|e| PayrollError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            });
        }

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
