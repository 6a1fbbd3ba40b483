//! The salary slip document model.
//!
//! A [`SalarySlip`] holds every string that appears on the slip, already
//! formatted. Renderers only decide where the strings go.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::calculation::{calculate_totals, format_rupees};
use crate::models::{EmployeeRecord, format_slip_date};

/// Format of the "Generated On" timestamp.
pub const GENERATED_ON_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Caption printed under the signature line.
pub const SIGNATORY_CAPTION: &str = "Authorised Signatory";

/// Column headings of the pay grid.
pub const PAY_GRID_HEADER: [&str; 4] = ["Earnings", "Amount", "Deductions", "Amount"];

/// One row of the identity block: two label/value pairs side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityRow {
    /// Left label and value.
    pub left: (String, String),
    /// Right label and value.
    pub right: (String, String),
}

/// One body row of the earnings/deductions grid.
///
/// Earnings has fewer components than deductions, so the last rows carry
/// empty earnings cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayGridRow {
    /// Earnings label, or empty.
    pub earning: String,
    /// Formatted earnings amount, or empty.
    pub earning_amount: String,
    /// Deduction label, or empty.
    pub deduction: String,
    /// Formatted deduction amount, or empty.
    pub deduction_amount: String,
}

/// A fully formatted salary slip for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalarySlip {
    /// Employee code the slip was generated for.
    pub employee_code: String,
    /// Institution heading.
    pub institution: String,
    /// `Salary Slip - {Month} {Year}`.
    pub subtitle: String,
    /// Identity block rows.
    pub identity: Vec<IdentityRow>,
    /// Pay grid body rows.
    pub pay_rows: Vec<PayGridRow>,
    /// Total earnings, formatted.
    pub total_earnings: String,
    /// Total deductions, formatted.
    pub total_deductions: String,
    /// Net salary, formatted.
    pub net_salary: String,
    /// `Generated On: DD-MM-YYYY HH:MM`.
    pub generated_on: String,
}

impl SalarySlip {
    /// Builds the slip for `record`.
    ///
    /// Totals are derived from the pay components; the stored net salary is
    /// ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use payroll_engine::models::{EmployeeRecord, PayComponents};
    /// use payroll_engine::slip::SalarySlip;
    ///
    /// let record = EmployeeRecord {
    ///     employee_code: "E1".to_string(),
    ///     pay: PayComponents { basic: 20000, pf: 1200, ..Default::default() },
    ///     ..Default::default()
    /// };
    /// let at = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap().and_hms_opt(9, 5, 0).unwrap();
    ///
    /// let slip = SalarySlip::from_record(&record, "GLA University", at);
    /// assert_eq!(slip.net_salary, "Rs. 18,800.00");
    /// assert_eq!(slip.generated_on, "Generated On: 30-06-2025 09:05");
    /// ```
    pub fn from_record(
        record: &EmployeeRecord,
        institution: &str,
        generated_at: NaiveDateTime,
    ) -> Self {
        let totals = calculate_totals(&record.pay);

        Self {
            employee_code: record.employee_code.clone(),
            institution: institution.to_string(),
            subtitle: format!(
                "Salary Slip - {} {}",
                record.salary_month, record.salary_year
            ),
            identity: identity_rows(record),
            pay_rows: pay_rows(record),
            total_earnings: format_rupees(totals.total_earnings),
            total_deductions: format_rupees(totals.total_deductions),
            net_salary: format_rupees(totals.net_salary),
            generated_on: format!("Generated On: {}", generated_at.format(GENERATED_ON_FORMAT)),
        }
    }

    /// Returns the download file name, `SalarySlip_{code}.pdf`.
    pub fn file_name(&self) -> String {
        format!("SalarySlip_{}.pdf", self.employee_code)
    }
}

fn pair(label: &str, value: impl Into<String>) -> (String, String) {
    (label.to_string(), value.into())
}

fn identity_rows(record: &EmployeeRecord) -> Vec<IdentityRow> {
    vec![
        IdentityRow {
            left: pair("Employee Code", record.employee_code.as_str()),
            right: pair("Employee Name", record.name.as_str()),
        },
        IdentityRow {
            left: pair("Date of Joining", format_slip_date(record.date_of_joining)),
            right: pair("PF Number", record.pf_number.as_str()),
        },
        IdentityRow {
            left: pair("Location", record.location.as_str()),
            right: pair("Department", record.department.as_str()),
        },
        IdentityRow {
            left: pair("Total Days", record.total_days.to_string()),
            right: pair("Absent Days", record.absent_days.to_string()),
        },
    ]
}

fn pay_rows(record: &EmployeeRecord) -> Vec<PayGridRow> {
    let earnings = record.pay.earnings();
    let deductions = record.pay.deductions();
    let rows = earnings.len().max(deductions.len());

    (0..rows)
        .map(|i| {
            let (earning, earning_amount) = earnings
                .get(i)
                .map(|(label, amount)| (label.to_string(), format_rupees(*amount)))
                .unwrap_or_default();
            let (deduction, deduction_amount) = deductions
                .get(i)
                .map(|(label, amount)| (label.to_string(), format_rupees(*amount)))
                .unwrap_or_default();

            PayGridRow {
                earning,
                earning_amount,
                deduction,
                deduction_amount,
            }
        })
        .collect()
}
