//! Payroll server binary.
//!
//! Reads the configuration named by `PAYROLL_CONFIG` (falling back to
//! `config/payroll.yaml` when it exists, and to built-in defaults otherwise)
//! and serves the payroll API.

use std::path::Path;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::{ConfigLoader, PayrollConfig};
use payroll_engine::error::PayrollResult;
use tracing::{error, info};

const CONFIG_ENV: &str = "PAYROLL_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/payroll.yaml";

fn load_config() -> PayrollResult<PayrollConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => Ok(ConfigLoader::load(path)?.into_config()),
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            Ok(ConfigLoader::load(DEFAULT_CONFIG_PATH)?.into_config())
        }
        Err(_) => {
            info!("No configuration file found, using defaults");
            Ok(PayrollConfig::default())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let config = load_config().inspect_err(|e| error!(error = %e, "Failed to load configuration"))?;

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address).await?;
    info!(
        address = %config.server.bind_address,
        data_file = %config.storage.data_file.display(),
        "Payroll server listening"
    );

    axum::serve(listener, create_router(AppState::from_config(&config))).await?;
    Ok(())
}
