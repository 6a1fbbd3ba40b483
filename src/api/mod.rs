//! HTTP API module for the payroll engine.
//!
//! This module exposes the operator menu as REST endpoints: list, look up
//! and save records, download a salary slip and download the workbook.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse};
pub use state::{AppState, PayrollApp};
