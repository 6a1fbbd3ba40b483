//! Payroll record keeping and salary slip generation.
//!
//! This crate keeps one row per employee in an `.xlsx` workbook, computes
//! net salary from the pay components on every save, and renders one-page
//! PDF salary slips. The [`api`] module exposes these operations over HTTP.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::models::RecordForm;
//! use payroll_engine::service::PayrollService;
//! use payroll_engine::slip::PdfSlipRenderer;
//! use payroll_engine::store::WorkbookStore;
//!
//! let service = PayrollService::new(
//!     WorkbookStore::new("data/Payroll_Management_Data.xlsx"),
//!     PdfSlipRenderer::new(),
//!     "GLA University",
//! );
//!
//! let form = RecordForm {
//!     employee_code: "E1".to_string(),
//!     name: "A".to_string(),
//!     basic: "20000".to_string(),
//!     ..Default::default()
//! };
//! let saved = service.save_record(form)?;
//! println!("{:?}: net {}", saved.outcome, saved.record.net_salary);
//! # Ok::<(), payroll_engine::error::PayrollError>(())
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod slip;
pub mod store;
