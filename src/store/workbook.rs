//! The `.xlsx` backing store.
//!
//! The whole table is read with `calamine` on every load and written with
//! `rust_xlsxwriter` on every save. Saves go to a temporary file in the same
//! directory which is then renamed over the backing file, so a crash
//! mid-write leaves the previous file intact.

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use calamine::{Data, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{PayrollError, PayrollResult};

use super::RecordStore;
use super::schema::{
    COLUMNS, CellValue, excel_serial_to_date, header_mismatch, record_from_cells,
    record_to_cells,
};
use super::table::RecordTable;

/// A payroll table kept in a single `.xlsx` workbook.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::store::{RecordStore, WorkbookStore};
///
/// let store = WorkbookStore::new("data/Payroll_Management_Data.xlsx");
/// let table = store.load()?;
/// println!("{} employees", table.len());
/// # Ok::<(), payroll_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct WorkbookStore {
    path: PathBuf,
}

impl WorkbookStore {
    /// Creates a store backed by the workbook at `path`.
    ///
    /// Nothing is touched on disk until the first load or save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the path of the backing workbook.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_str(&self) -> String {
        self.path.display().to_string()
    }

    fn schema_error(&self, message: impl Into<String>) -> PayrollError {
        PayrollError::SchemaMismatch {
            path: self.path_str(),
            message: message.into(),
        }
    }

    fn read_table(&self) -> PayrollResult<RecordTable> {
        let mut workbook: Xlsx<BufReader<File>> = open_workbook(&self.path).map_err(|e| match e {
            calamine::XlsxError::Io(io) => PayrollError::storage_io(self.path_str(), io),
            other => self.schema_error(other.to_string()),
        })?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| self.schema_error("workbook has no worksheets"))?
            .map_err(|e| self.schema_error(e.to_string()))?;

        let mut rows = range
            .rows()
            .map(|row| row.iter().map(cell_value).collect::<Vec<_>>());

        let header = rows
            .next()
            .ok_or_else(|| self.schema_error("missing header row"))?;
        if let Some(message) = header_mismatch(&header) {
            return Err(self.schema_error(message));
        }

        let records = rows
            .filter(|cells| cells.iter().any(|c| *c != CellValue::Blank))
            .map(|cells| record_from_cells(&cells))
            .inspect(|record| debug!(employee_code = %record.employee_code, "Loaded row"))
            .collect();

        Ok(RecordTable::from_records(records))
    }
}

impl RecordStore for WorkbookStore {
    /// Loads the table, creating an empty workbook first if none exists.
    fn load(&self) -> PayrollResult<RecordTable> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "No payroll workbook found, creating an empty one");
            let table = RecordTable::new();
            self.save(&table)?;
            return Ok(table);
        }

        let table = self.read_table()?;
        info!(path = %self.path.display(), rows = table.len(), "Loaded payroll workbook");
        Ok(table)
    }

    fn save(&self, table: &RecordTable) -> PayrollResult<()> {
        let bytes = self.export(table)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| PayrollError::storage_io(dir.display(), e))?;

        let mut temp =
            NamedTempFile::new_in(dir).map_err(|e| PayrollError::storage_io(dir.display(), e))?;
        temp.write_all(&bytes)
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| PayrollError::storage_io(temp.path().display(), e))?;
        temp.persist(&self.path)
            .map_err(|e| PayrollError::storage_io(self.path_str(), e.error))?;

        info!(path = %self.path.display(), rows = table.len(), "Saved payroll workbook");
        Ok(())
    }

    fn export(&self, table: &RecordTable) -> PayrollResult<Vec<u8>> {
        encode_table(table).map_err(|e| PayrollError::storage_io(self.path_str(), e))
    }
}

/// Serializes the table as a single-sheet workbook with the fixed header.
pub fn encode_table(table: &RecordTable) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let header_format = Format::new().set_bold();

    for (col, name) in COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, &header_format)?;
    }

    for (i, record) in table.records().iter().enumerate() {
        let row = i as u32 + 1;
        for (col, cell) in record_to_cells(record).iter().enumerate() {
            write_cell(sheet, row, col as u16, cell)?;
        }
    }

    workbook.save_to_buffer()
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: &CellValue) -> Result<(), XlsxError> {
    match cell {
        CellValue::Blank => {}
        CellValue::Text(s) => {
            sheet.write_string(row, col, s)?;
        }
        CellValue::Number(n) => {
            sheet.write_number(row, col, *n)?;
        }
        CellValue::Date(d) => {
            sheet.write_string(row, col, d.format("%Y-%m-%d").to_string())?;
        }
    }
    Ok(())
}

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Blank,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            CellValue::Text(s.clone())
        }
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => excel_serial_to_date(dt.as_f64())
            .map(CellValue::Date)
            .unwrap_or(CellValue::Blank),
    }
}
