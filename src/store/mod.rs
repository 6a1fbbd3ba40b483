//! The payroll record store.
//!
//! The table is loaded wholesale at the start of every interaction and
//! written back wholesale after every mutation. There is no append log and
//! no partial update.

mod schema;
mod table;
mod workbook;

pub use schema::{COLUMNS, CellValue, excel_serial_to_date, header_mismatch};
pub use table::{RecordTable, UpsertOutcome};
pub use workbook::{WorkbookStore, encode_table};

use crate::error::PayrollResult;

/// File name offered when the table is downloaded.
pub const EXPORT_FILE_NAME: &str = "Payroll_Management_Data.xlsx";

/// MIME type of exported workbooks.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Persistence for the payroll table.
pub trait RecordStore {
    /// Reads the whole table, creating an empty backing file if none exists.
    fn load(&self) -> PayrollResult<RecordTable>;

    /// Replaces the backing file with `table`.
    fn save(&self, table: &RecordTable) -> PayrollResult<()>;

    /// Serializes `table` in the backing file's format without writing it.
    fn export(&self, table: &RecordTable) -> PayrollResult<Vec<u8>>;
}
