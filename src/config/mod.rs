//! Configuration loading and management for the payroll engine.
//!
//! The configuration names the workbook file, the institution printed on
//! slips and the address the HTTP server listens on.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Institution: {}", config.config().slip.institution);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_BIND_ADDRESS, DEFAULT_DATA_FILE, DEFAULT_INSTITUTION, PayrollConfig, ServerConfig,
    SlipConfig, StorageConfig,
};
