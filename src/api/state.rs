//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::PayrollConfig;
use crate::service::PayrollService;
use crate::slip::PdfSlipRenderer;
use crate::store::WorkbookStore;

/// The service the HTTP surface drives.
pub type PayrollApp = PayrollService<WorkbookStore, PdfSlipRenderer>;

/// Shared application state.
///
/// Holds the payroll service behind a single lock so that each request runs
/// to completion before the next one touches the workbook.
#[derive(Clone)]
pub struct AppState {
    service: Arc<Mutex<PayrollApp>>,
}

impl AppState {
    /// Creates a new application state around `service`.
    pub fn new(service: PayrollApp) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
        }
    }

    /// Builds the workbook-backed service described by `config`.
    pub fn from_config(config: &PayrollConfig) -> Self {
        Self::new(PayrollService::new(
            WorkbookStore::new(&config.storage.data_file),
            PdfSlipRenderer::new(),
            config.slip.institution.clone(),
        ))
    }

    /// Returns the locked service.
    pub(crate) fn service(&self) -> &Mutex<PayrollApp> {
        &self.service
    }
}
