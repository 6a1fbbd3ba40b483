//! The fixed column layout of the payroll workbook.
//!
//! Column names and their order are the file's compatibility surface: every
//! load checks the header against [`COLUMNS`] and every save writes exactly
//! this header.

use chrono::{Days, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use tracing::warn;

use crate::calculation::{coerce_amount, parse_whole};
use crate::models::{EmployeeRecord, MAX_DAYS, PayComponents, SalaryMonth, parse_date};

/// Header row of the payroll workbook, in file order.
pub const COLUMNS: [&str; 26] = [
    "Employee Code",
    "Name",
    "Gender",
    "DOB",
    "DOJ",
    "Department",
    "Bank Name",
    "Account No.",
    "PAN",
    "UAN",
    "Location",
    "PF Number",
    "Total Days",
    "Absent Days",
    "Salary Month",
    "Salary Year",
    "Basic",
    "HRA",
    "Special Allowance",
    "Bonus",
    "PF",
    "Pro Tax",
    "Snacks",
    "Bus",
    "Loan",
    "Net Salary",
];

static BLANK: CellValue = CellValue::Blank;

/// A single cell, independent of the spreadsheet library in use.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// An empty cell.
    Blank,
    /// A text cell.
    Text(String),
    /// A numeric cell.
    Number(f64),
    /// A cell the reader already recognised as a date.
    Date(NaiveDate),
}

impl CellValue {
    fn text(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Blank
        } else {
            CellValue::Text(value.to_string())
        }
    }

    fn date(value: Option<NaiveDate>) -> Self {
        value
            .map(|d| CellValue::Text(d.format("%Y-%m-%d").to_string()))
            .unwrap_or(CellValue::Blank)
    }

    /// Returns the cell as trimmed text; whole numbers print without a
    /// fractional part.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Blank => String::new(),
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                format!("{}", *n as i64)
            }
            CellValue::Number(n) => n.to_string(),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Checks a header row against [`COLUMNS`].
///
/// Returns a description of the first difference, if any.
pub fn header_mismatch(header: &[CellValue]) -> Option<String> {
    let found: Vec<String> = header.iter().map(CellValue::as_text).collect();
    let trailing_blanks = found.iter().rev().take_while(|s| s.is_empty()).count();
    let found = &found[..found.len() - trailing_blanks];

    if found.len() != COLUMNS.len() {
        return Some(format!(
            "expected {} columns, found {}",
            COLUMNS.len(),
            found.len()
        ));
    }

    COLUMNS
        .iter()
        .zip(found)
        .position(|(expected, actual)| *expected != actual.as_str())
        .map(|i| {
            format!(
                "column {} is '{}', expected '{}'",
                i + 1,
                found[i],
                COLUMNS[i]
            )
        })
}

/// Lays a record out as one row of cells in [`COLUMNS`] order.
pub fn record_to_cells(record: &EmployeeRecord) -> Vec<CellValue> {
    let pay = &record.pay;
    let number = |n: i64| CellValue::Number(n as f64);

    vec![
        CellValue::text(&record.employee_code),
        CellValue::text(&record.name),
        CellValue::text(&record.gender),
        CellValue::date(record.date_of_birth),
        CellValue::date(record.date_of_joining),
        CellValue::text(&record.department),
        CellValue::text(&record.bank_name),
        CellValue::text(&record.account_number),
        CellValue::text(&record.pan),
        CellValue::text(&record.uan),
        CellValue::text(&record.location),
        CellValue::text(&record.pf_number),
        number(i64::from(record.total_days)),
        number(i64::from(record.absent_days)),
        CellValue::Text(record.salary_month.name().to_string()),
        number(i64::from(record.salary_year)),
        number(pay.basic),
        number(pay.hra),
        number(pay.special_allowance),
        number(pay.bonus),
        number(pay.pf),
        number(pay.professional_tax),
        number(pay.snacks),
        number(pay.bus),
        number(pay.loan),
        number(record.net_salary),
    ]
}

/// Reads a record from one row of cells in [`COLUMNS`] order.
///
/// Decoding is lenient: missing trailing cells are blank, unreadable
/// numbers are zero, and an unreadable month falls back to January.
pub fn record_from_cells(cells: &[CellValue]) -> EmployeeRecord {
    let cell = |i: usize| cells.get(i).unwrap_or(&BLANK);
    let text = |i: usize| cell(i).as_text();
    let amount = |i: usize| coerce_amount(&text(i));
    let days = |i: usize| amount(i).min(i64::from(MAX_DAYS)) as u8;

    let employee_code = text(0);
    let salary_month = match text(14) {
        raw if raw.is_empty() => SalaryMonth::default(),
        raw => raw.parse().unwrap_or_else(|e| {
            warn!(employee_code = %employee_code, error = %e, "Unreadable salary month, using January");
            SalaryMonth::default()
        }),
    };

    EmployeeRecord {
        name: text(1),
        gender: text(2),
        date_of_birth: date_cell(cell(3)),
        date_of_joining: date_cell(cell(4)),
        department: text(5),
        bank_name: text(6),
        account_number: text(7),
        pan: text(8),
        uan: text(9),
        location: text(10),
        pf_number: text(11),
        total_days: days(12),
        absent_days: days(13),
        salary_month,
        salary_year: i32::try_from(amount(15)).unwrap_or(0),
        pay: PayComponents {
            basic: amount(16),
            hra: amount(17),
            special_allowance: amount(18),
            bonus: amount(19),
            pf: amount(20),
            professional_tax: amount(21),
            snacks: amount(22),
            bus: amount(23),
            loan: amount(24),
        },
        // Net salary may legitimately be negative.
        net_salary: parse_whole(&text(25))
            .and_then(|n| n.to_i64())
            .unwrap_or(0),
        employee_code,
    }
}

fn date_cell(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::Blank => None,
        CellValue::Date(d) => Some(*d),
        CellValue::Number(serial) => excel_serial_to_date(*serial),
        CellValue::Text(s) => {
            let parsed = parse_date(s);
            if parsed.is_none() && !s.trim().is_empty() {
                warn!(value = %s, "Unreadable date cell, leaving it empty");
            }
            parsed
        }
    }
}

/// Converts an Excel serial day number (1900 date system) into a date.
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_days(Days::new(serial.trunc() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_cells() -> Vec<CellValue> {
        COLUMNS
            .iter()
            .map(|c| CellValue::Text(c.to_string()))
            .collect()
    }

    fn create_test_record() -> EmployeeRecord {
        EmployeeRecord {
            employee_code: "E1".to_string(),
            name: "A".to_string(),
            gender: "Male".to_string(),
            date_of_joining: NaiveDate::from_ymd_opt(2015, 7, 1),
            total_days: 30,
            salary_month: SalaryMonth::June,
            salary_year: 2025,
            pay: PayComponents {
                basic: 20000,
                hra: 5000,
                pf: 1200,
                professional_tax: 200,
                ..Default::default()
            },
            net_salary: 23600,
            ..Default::default()
        }
    }

    #[test]
    fn test_exact_header_matches() {
        assert_eq!(header_mismatch(&header_cells()), None);
    }

    #[test]
    fn test_header_with_trailing_blank_cells_matches() {
        let mut header = header_cells();
        header.push(CellValue::Blank);
        assert_eq!(header_mismatch(&header), None);
    }

    #[test]
    fn test_renamed_column_is_reported() {
        let mut header = header_cells();
        header[2] = CellValue::Text("Sex".to_string());
        assert_eq!(
            header_mismatch(&header).unwrap(),
            "column 3 is 'Sex', expected 'Gender'"
        );
    }

    #[test]
    fn test_missing_column_is_reported() {
        let mut header = header_cells();
        header.pop();
        assert_eq!(
            header_mismatch(&header).unwrap(),
            "expected 26 columns, found 25"
        );
    }

    #[test]
    fn test_row_layout_follows_columns() {
        let cells = record_to_cells(&create_test_record());
        assert_eq!(cells.len(), COLUMNS.len());
        assert_eq!(cells[0], CellValue::Text("E1".to_string()));
        assert_eq!(cells[3], CellValue::Blank);
        assert_eq!(cells[4], CellValue::Text("2015-07-01".to_string()));
        assert_eq!(cells[14], CellValue::Text("June".to_string()));
        assert_eq!(cells[16], CellValue::Number(20000.0));
        assert_eq!(cells[25], CellValue::Number(23600.0));
    }

    #[test]
    fn test_cells_round_trip() {
        let record = create_test_record();
        assert_eq!(record_from_cells(&record_to_cells(&record)), record);
    }

    #[test]
    fn test_negative_net_salary_is_kept() {
        let mut record = create_test_record();
        record.net_salary = -4000;
        assert_eq!(record_from_cells(&record_to_cells(&record)).net_salary, -4000);
    }

    #[test]
    fn test_float_code_reads_as_whole_number() {
        let mut cells = record_to_cells(&create_test_record());
        cells[0] = CellValue::Number(101.0);
        assert_eq!(record_from_cells(&cells).employee_code, "101");
    }

    #[test]
    fn test_lenient_numbers_and_short_rows() {
        let cells = vec![
            CellValue::Text("E9".to_string()),
            CellValue::Text("Z".to_string()),
            CellValue::Blank,
            CellValue::Blank,
            CellValue::Blank,
            CellValue::Blank,
            CellValue::Blank,
            CellValue::Blank,
            CellValue::Blank,
            CellValue::Blank,
            CellValue::Blank,
            CellValue::Blank,
            CellValue::Text("thirty".to_string()),
            CellValue::Number(2.0),
            CellValue::Number(3.0),
            CellValue::Number(2024.0),
            CellValue::Number(15000.7),
        ];

        let record = record_from_cells(&cells);
        assert_eq!(record.total_days, 0);
        assert_eq!(record.absent_days, 2);
        assert_eq!(record.salary_month, SalaryMonth::March);
        assert_eq!(record.salary_year, 2024);
        assert_eq!(record.pay.basic, 15000);
        assert_eq!(record.pay.loan, 0);
        assert_eq!(record.net_salary, 0);
    }

    #[test]
    fn test_date_cells_accept_serials_and_text() {
        assert_eq!(
            date_cell(&CellValue::Number(42186.0)),
            NaiveDate::from_ymd_opt(2015, 7, 1)
        );
        assert_eq!(
            date_cell(&CellValue::Text("12.04.1990".to_string())),
            NaiveDate::from_ymd_opt(1990, 4, 12)
        );
        assert_eq!(date_cell(&CellValue::Text("soon".to_string())), None);
    }

    #[test]
    fn test_excel_serial_rejects_non_dates() {
        assert_eq!(excel_serial_to_date(0.0), None);
        assert_eq!(excel_serial_to_date(f64::NAN), None);
        assert_eq!(
            excel_serial_to_date(32975.5),
            NaiveDate::from_ymd_opt(1990, 4, 12)
        );
    }
}
