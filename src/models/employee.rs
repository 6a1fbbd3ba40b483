//! Employee record model.
//!
//! This module defines [`EmployeeRecord`], one row of the payroll table, and
//! [`PayComponents`], the nine monetary fields a salary is computed from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::SalaryMonth;

/// The earnings and deductions of a single pay period.
///
/// All amounts are whole rupees and never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayComponents {
    /// Basic pay.
    pub basic: i64,
    /// House rent allowance.
    pub hra: i64,
    /// Special allowance.
    pub special_allowance: i64,
    /// Bonus.
    pub bonus: i64,
    /// Provident fund contribution.
    pub pf: i64,
    /// Professional tax.
    pub professional_tax: i64,
    /// Snacks deduction.
    pub snacks: i64,
    /// Bus deduction.
    pub bus: i64,
    /// Loan repayment.
    pub loan: i64,
}

impl PayComponents {
    /// Earnings in slip order, labelled as they appear on the slip.
    pub fn earnings(&self) -> [(&'static str, i64); 4] {
        [
            ("Basic", self.basic),
            ("HRA", self.hra),
            ("Special Allowance", self.special_allowance),
            ("Bonus", self.bonus),
        ]
    }

    /// Deductions in slip order, labelled as they appear on the slip.
    pub fn deductions(&self) -> [(&'static str, i64); 5] {
        [
            ("PF", self.pf),
            ("Professional Tax", self.professional_tax),
            ("Snacks", self.snacks),
            ("Bus", self.bus),
            ("Loan", self.loan),
        ]
    }
}

/// One employee's payroll row, keyed by `employee_code`.
///
/// `net_salary` is a cache of the salary calculation taken at save time.
/// It is overwritten on every save and is never taken from operator input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The unique employee code (trimmed).
    pub employee_code: String,
    /// The employee's name.
    pub name: String,
    /// Gender as entered by the operator.
    pub gender: String,
    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,
    /// Date of joining.
    pub date_of_joining: Option<NaiveDate>,
    /// Department.
    pub department: String,
    /// Bank name.
    pub bank_name: String,
    /// Bank account number.
    pub account_number: String,
    /// Permanent account number.
    pub pan: String,
    /// Universal account number.
    pub uan: String,
    /// Work location.
    pub location: String,
    /// Provident fund number.
    pub pf_number: String,
    /// Working days in the pay period.
    pub total_days: u8,
    /// Days absent in the pay period.
    pub absent_days: u8,
    /// The month being paid.
    pub salary_month: SalaryMonth,
    /// The year being paid.
    pub salary_year: i32,
    /// Earnings and deductions.
    #[serde(flatten)]
    pub pay: PayComponents,
    /// Net salary recorded at the last save.
    pub net_salary: i64,
}

impl EmployeeRecord {
    /// Returns true if this record is keyed by `code` (both sides trimmed).
    ///
    /// A blank code never matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::EmployeeRecord;
    ///
    /// let record = EmployeeRecord {
    ///     employee_code: "E1".to_string(),
    ///     name: "A".to_string(),
    ///     ..Default::default()
    /// };
    /// assert!(record.has_code(" E1 "));
    /// assert!(!record.has_code("E10"));
    /// ```
    pub fn has_code(&self, code: &str) -> bool {
        let code = code.trim();
        !code.is_empty() && self.employee_code.trim() == code
    }
}
