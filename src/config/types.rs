//! Configuration types for the payroll engine.
//!
//! Every section and field is optional in the YAML file; anything left out
//! takes the default shown on the field.

use serde::Deserialize;
use std::path::PathBuf;

/// Default location of the payroll workbook.
pub const DEFAULT_DATA_FILE: &str = "data/Payroll_Management_Data.xlsx";

/// Default institution name printed at the top of each slip.
pub const DEFAULT_INSTITUTION: &str = "GLA University";

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// Where the payroll table is stored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the workbook; defaults to `data/Payroll_Management_Data.xlsx`.
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

/// Salary slip settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SlipConfig {
    /// Heading printed on every slip; defaults to `GLA University`.
    pub institution: String,
}

impl Default for SlipConfig {
    fn default() -> Self {
        Self {
            institution: DEFAULT_INSTITUTION.to_string(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on; defaults to `127.0.0.1:8080`.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}

/// The complete payroll configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Storage settings.
    pub storage: StorageConfig,
    /// Slip settings.
    pub slip: SlipConfig,
    /// Server settings.
    pub server: ServerConfig,
}
