//! The operator-facing payroll operations.
//!
//! [`PayrollService`] composes a [`RecordStore`] and a [`SlipRenderer`]
//! into the menu the operator works with: list, look up, save, generate a
//! slip and download the workbook. Every call loads the table fresh from
//! the store, so the file is the single source of truth.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{info, warn};

use crate::calculation::calculate_totals;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{EmployeeRecord, RecordForm};
use crate::slip::{SalarySlip, SlipRenderer};
use crate::store::{RecordStore, RecordTable, UpsertOutcome};

/// Result of saving a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveOutcome {
    /// Whether the record was inserted or updated.
    pub outcome: UpsertOutcome,
    /// The record as stored, with its computed net salary.
    pub record: EmployeeRecord,
}

/// A rendered slip ready for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSlip {
    /// Suggested file name, `SalarySlip_{code}.pdf`.
    pub file_name: String,
    /// MIME type of `bytes`.
    pub content_type: &'static str,
    /// The document.
    pub bytes: Vec<u8>,
}

/// Payroll operations over a store and a slip renderer.
#[derive(Debug, Clone)]
pub struct PayrollService<S, R> {
    store: S,
    renderer: R,
    institution: String,
}

impl<S: RecordStore, R: SlipRenderer> PayrollService<S, R> {
    /// Creates a service printing `institution` at the top of every slip.
    pub fn new(store: S, renderer: R, institution: impl Into<String>) -> Self {
        Self {
            store,
            renderer,
            institution: institution.into(),
        }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns every stored record, in file order.
    pub fn list_records(&self) -> PayrollResult<RecordTable> {
        let table = self.store.load()?;
        info!(rows = table.len(), "Listed payroll records");
        Ok(table)
    }

    /// Returns a form prefilled from the record with `code`, if any.
    pub fn lookup(&self, code: &str) -> PayrollResult<Option<RecordForm>> {
        let table = self.store.load()?;
        let found = table.find_by_code(code).map(RecordForm::from_record);

        if found.is_none() {
            warn!(employee_code = %code.trim(), "No record found for lookup");
        }
        Ok(found)
    }

    /// Validates `form`, computes the net salary and upserts the record.
    ///
    /// Nothing is written if validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Validation`] for rejected input and a storage
    /// error if the table cannot be loaded or saved.
    pub fn save_record(&self, form: RecordForm) -> PayrollResult<SaveOutcome> {
        let mut record = form.into_record().inspect_err(|e| {
            warn!(error = %e, "Rejected payroll record");
        })?;

        let mut table = self.store.load()?;

        record.net_salary = calculate_totals(&record.pay).net_salary;
        let outcome = table.upsert(record.clone());
        self.store.save(&table)?;

        info!(
            employee_code = %record.employee_code,
            outcome = ?outcome,
            net_salary = record.net_salary,
            rows = table.len(),
            "Saved payroll record"
        );

        Ok(SaveOutcome { outcome, record })
    }

    /// Renders the salary slip for the record with `code`.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::RecordNotFound`] if no record has `code`; the
    /// renderer is not invoked and the table is left untouched.
    pub fn generate_slip(
        &self,
        code: &str,
        generated_at: NaiveDateTime,
    ) -> PayrollResult<GeneratedSlip> {
        let table = self.store.load()?;
        let record = table.find_by_code(code).ok_or_else(|| {
            warn!(employee_code = %code.trim(), "Slip requested for unknown employee");
            PayrollError::RecordNotFound {
                code: code.trim().to_string(),
            }
        })?;

        let slip = SalarySlip::from_record(record, &self.institution, generated_at);
        let bytes = self.renderer.render(&slip)?;

        info!(
            employee_code = %record.employee_code,
            bytes = bytes.len(),
            "Generated salary slip"
        );

        Ok(GeneratedSlip {
            file_name: slip.file_name(),
            content_type: self.renderer.content_type(),
            bytes,
        })
    }

    /// Returns the whole table serialized as a workbook.
    pub fn export_workbook(&self) -> PayrollResult<Vec<u8>> {
        let table = self.store.load()?;
        let bytes = self.store.export(&table)?;
        info!(rows = table.len(), bytes = bytes.len(), "Exported payroll workbook");
        Ok(bytes)
    }
}
