//! The add/edit form view-model.
//!
//! [`RecordForm`] carries every field as the operator typed it. The UI fills
//! it from a looked-up record (or leaves the defaults), the operator edits
//! it, and [`RecordForm::into_record`] turns it into an [`EmployeeRecord`].
//! The engine never stores a form.

use chrono::{Datelike, Local};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize};

use crate::calculation::{MAX_AMOUNT, parse_whole};
use crate::error::{PayrollError, PayrollResult};

use super::{EmployeeRecord, PayComponents, SalaryMonth, parse_date};

/// Lowest salary year the form accepts.
pub const MIN_SALARY_YEAR: i32 = 1960;
/// Highest salary year the form accepts.
pub const MAX_SALARY_YEAR: i32 = 2050;
/// Highest day count the form accepts.
pub const MAX_DAYS: u8 = 31;

/// Raw operator input for one employee record.
///
/// Numeric fields accept either JSON numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordForm {
    /// Employee Code.
    #[serde(deserialize_with = "lenient_text")]
    pub employee_code: String,
    /// Name.
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    /// Gender.
    #[serde(deserialize_with = "lenient_text")]
    pub gender: String,
    /// DOB.
    #[serde(deserialize_with = "lenient_text")]
    pub date_of_birth: String,
    /// DOJ.
    #[serde(deserialize_with = "lenient_text")]
    pub date_of_joining: String,
    /// Department.
    #[serde(deserialize_with = "lenient_text")]
    pub department: String,
    /// Bank Name.
    #[serde(deserialize_with = "lenient_text")]
    pub bank_name: String,
    /// Account No.
    #[serde(deserialize_with = "lenient_text")]
    pub account_number: String,
    /// PAN.
    #[serde(deserialize_with = "lenient_text")]
    pub pan: String,
    /// UAN.
    #[serde(deserialize_with = "lenient_text")]
    pub uan: String,
    /// Location.
    #[serde(deserialize_with = "lenient_text")]
    pub location: String,
    /// PF Number.
    #[serde(deserialize_with = "lenient_text")]
    pub pf_number: String,
    /// Total Days.
    #[serde(deserialize_with = "lenient_text")]
    pub total_days: String,
    /// Absent Days.
    #[serde(deserialize_with = "lenient_text")]
    pub absent_days: String,
    /// Salary Month, as a name or a number.
    #[serde(deserialize_with = "lenient_text")]
    pub salary_month: String,
    /// Salary Year.
    #[serde(deserialize_with = "lenient_text")]
    pub salary_year: String,
    /// Basic.
    #[serde(deserialize_with = "lenient_text")]
    pub basic: String,
    /// HRA.
    #[serde(deserialize_with = "lenient_text")]
    pub hra: String,
    /// Special Allowance.
    #[serde(deserialize_with = "lenient_text")]
    pub special_allowance: String,
    /// Bonus.
    #[serde(deserialize_with = "lenient_text")]
    pub bonus: String,
    /// PF.
    #[serde(deserialize_with = "lenient_text")]
    pub pf: String,
    /// Pro Tax.
    #[serde(deserialize_with = "lenient_text")]
    pub professional_tax: String,
    /// Snacks.
    #[serde(deserialize_with = "lenient_text")]
    pub snacks: String,
    /// Bus.
    #[serde(deserialize_with = "lenient_text")]
    pub bus: String,
    /// Loan.
    #[serde(deserialize_with = "lenient_text")]
    pub loan: String,
}

impl Default for RecordForm {
    /// A blank form: 30 working days, January of the current year, zero pay.
    fn default() -> Self {
        Self {
            employee_code: String::new(),
            name: String::new(),
            gender: "Male".to_string(),
            date_of_birth: String::new(),
            date_of_joining: String::new(),
            department: String::new(),
            bank_name: String::new(),
            account_number: String::new(),
            pan: String::new(),
            uan: String::new(),
            location: String::new(),
            pf_number: String::new(),
            total_days: "30".to_string(),
            absent_days: "0".to_string(),
            salary_month: SalaryMonth::January.name().to_string(),
            salary_year: Local::now().year().to_string(),
            basic: "0".to_string(),
            hra: "0".to_string(),
            special_allowance: "0".to_string(),
            bonus: "0".to_string(),
            pf: "0".to_string(),
            professional_tax: "0".to_string(),
            snacks: "0".to_string(),
            bus: "0".to_string(),
            loan: "0".to_string(),
        }
    }
}

impl RecordForm {
    /// Prefills a form from a stored record.
    pub fn from_record(record: &EmployeeRecord) -> Self {
        let date = |d: Option<chrono::NaiveDate>| {
            d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
        };

        Self {
            employee_code: record.employee_code.clone(),
            name: record.name.clone(),
            gender: record.gender.clone(),
            date_of_birth: date(record.date_of_birth),
            date_of_joining: date(record.date_of_joining),
            department: record.department.clone(),
            bank_name: record.bank_name.clone(),
            account_number: record.account_number.clone(),
            pan: record.pan.clone(),
            uan: record.uan.clone(),
            location: record.location.clone(),
            pf_number: record.pf_number.clone(),
            total_days: record.total_days.to_string(),
            absent_days: record.absent_days.to_string(),
            salary_month: record.salary_month.name().to_string(),
            salary_year: record.salary_year.to_string(),
            basic: record.pay.basic.to_string(),
            hra: record.pay.hra.to_string(),
            special_allowance: record.pay.special_allowance.to_string(),
            bonus: record.pay.bonus.to_string(),
            pf: record.pay.pf.to_string(),
            professional_tax: record.pay.professional_tax.to_string(),
            snacks: record.pay.snacks.to_string(),
            bus: record.pay.bus.to_string(),
            loan: record.pay.loan.to_string(),
        }
    }

    /// Validates the form and converts it into a record.
    ///
    /// Employee Code and Name are required. Numeric fields that do not read
    /// as numbers count as zero; numbers outside the form's bounds are
    /// rejected. The returned record's `net_salary` is left at zero for the
    /// save path to fill in.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::Validation`] naming the first offending
    /// column.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::RecordForm;
    ///
    /// let form = RecordForm {
    ///     employee_code: " E1 ".to_string(),
    ///     name: "A".to_string(),
    ///     basic: "20000".to_string(),
    ///     hra: "not a number".to_string(),
    ///     ..Default::default()
    /// };
    ///
    /// let record = form.into_record().unwrap();
    /// assert_eq!(record.employee_code, "E1");
    /// assert_eq!(record.pay.basic, 20000);
    /// assert_eq!(record.pay.hra, 0);
    /// ```
    pub fn into_record(self) -> PayrollResult<EmployeeRecord> {
        let employee_code = required("Employee Code", &self.employee_code)?;
        let name = required("Name", &self.name)?;

        let date_of_birth = optional_date("DOB", &self.date_of_birth)?;
        let date_of_joining = optional_date("DOJ", &self.date_of_joining)?;

        let total_days = bounded("Total Days", &self.total_days, 0, i64::from(MAX_DAYS))? as u8;
        let absent_days =
            bounded("Absent Days", &self.absent_days, 0, i64::from(MAX_DAYS))? as u8;

        let salary_month = self
            .salary_month
            .parse::<SalaryMonth>()
            .map_err(|e| PayrollError::validation("Salary Month", e.to_string()))?;
        let salary_year = year(&self.salary_year)?;

        let pay = PayComponents {
            basic: amount("Basic", &self.basic)?,
            hra: amount("HRA", &self.hra)?,
            special_allowance: amount("Special Allowance", &self.special_allowance)?,
            bonus: amount("Bonus", &self.bonus)?,
            pf: amount("PF", &self.pf)?,
            professional_tax: amount("Pro Tax", &self.professional_tax)?,
            snacks: amount("Snacks", &self.snacks)?,
            bus: amount("Bus", &self.bus)?,
            loan: amount("Loan", &self.loan)?,
        };

        Ok(EmployeeRecord {
            employee_code,
            name,
            gender: self.gender.trim().to_string(),
            date_of_birth,
            date_of_joining,
            department: self.department.trim().to_string(),
            bank_name: self.bank_name.trim().to_string(),
            account_number: self.account_number.trim().to_string(),
            pan: self.pan.trim().to_string(),
            uan: self.uan.trim().to_string(),
            location: self.location.trim().to_string(),
            pf_number: self.pf_number.trim().to_string(),
            total_days,
            absent_days,
            salary_month,
            salary_year,
            pay,
            net_salary: 0,
        })
    }
}

fn required(field: &str, raw: &str) -> PayrollResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PayrollError::validation(field, "is required"));
    }
    Ok(trimmed.to_string())
}

fn optional_date(field: &str, raw: &str) -> PayrollResult<Option<chrono::NaiveDate>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_date(raw)
        .map(Some)
        .ok_or_else(|| PayrollError::validation(field, format!("'{}' is not a date", raw.trim())))
}

/// Non-numeric input counts as zero; numeric input must be within bounds.
fn bounded(field: &str, raw: &str, min: i64, max: i64) -> PayrollResult<i64> {
    let Some(value) = parse_whole(raw) else {
        return Ok(0);
    };

    value
        .to_i64()
        .filter(|v| (min..=max).contains(v))
        .ok_or_else(|| {
            PayrollError::validation(field, format!("must be between {} and {}", min, max))
        })
}

fn amount(field: &str, raw: &str) -> PayrollResult<i64> {
    bounded(field, raw, 0, MAX_AMOUNT)
}

fn year(raw: &str) -> PayrollResult<i32> {
    let range = i64::from(MIN_SALARY_YEAR)..=i64::from(MAX_SALARY_YEAR);
    parse_whole(raw)
        .as_ref()
        .and_then(Decimal::to_i64)
        .filter(|y| range.contains(y))
        .map(|y| y as i32)
        .ok_or_else(|| {
            PayrollError::validation(
                "Salary Year",
                format!("must be between {} and {}", MIN_SALARY_YEAR, MAX_SALARY_YEAR),
            )
        })
}

/// Accepts a string, a number or null and keeps it as text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::NaiveDate;

    fn create_valid_form() -> RecordForm {
        RecordForm {
            employee_code: "E1".to_string(),
            name: "Asha Verma".to_string(),
            gender: "Female".to_string(),
            date_of_birth: "1990-04-12".to_string(),
            date_of_joining: "01-07-2015".to_string(),
            salary_month: "March".to_string(),
            salary_year: "2025".to_string(),
            basic: "20000".to_string(),
            hra: "5000".to_string(),
            pf: "1200".to_string(),
            professional_tax: "200".to_string(),
            ..Default::default()
        }
    }

    fn validation_field(result: PayrollResult<EmployeeRecord>) -> String {
        match result {
            Err(PayrollError::Validation { field, .. }) => field,
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_form_converts() {
        let record = create_valid_form().into_record().unwrap();

        assert_eq!(record.employee_code, "E1");
        assert_eq!(record.gender, "Female");
        assert_eq!(record.date_of_birth, NaiveDate::from_ymd_opt(1990, 4, 12));
        assert_eq!(record.date_of_joining, NaiveDate::from_ymd_opt(2015, 7, 1));
        assert_eq!(record.total_days, 30);
        assert_eq!(record.salary_month, SalaryMonth::March);
        assert_eq!(record.salary_year, 2025);
        assert_eq!(record.pay.basic, 20000);
        assert_eq!(record.pay.professional_tax, 200);
        assert_eq!(record.net_salary, 0);
    }

    #[test]
    fn test_missing_code_is_rejected() {
        let mut form = create_valid_form();
        form.employee_code = "   ".to_string();
        let result = form.into_record();
        assert!(matches!(&result, Err(e) if e.kind() == ErrorKind::Validation));
        assert_eq!(validation_field(result), "Employee Code");
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let mut form = create_valid_form();
        form.name = String::new();
        assert_eq!(validation_field(form.into_record()), "Name");
    }

    #[test]
    fn test_text_fields_are_trimmed() {
        let mut form = create_valid_form();
        form.employee_code = "  E7\t".to_string();
        form.department = " Physics ".to_string();
        let record = form.into_record().unwrap();
        assert_eq!(record.employee_code, "E7");
        assert_eq!(record.department, "Physics");
    }

    #[test]
    fn test_non_numeric_amounts_become_zero() {
        let mut form = create_valid_form();
        form.bonus = "abc".to_string();
        form.loan = String::new();
        let record = form.into_record().unwrap();
        assert_eq!(record.pay.bonus, 0);
        assert_eq!(record.pay.loan, 0);
    }

    #[test]
    fn test_amount_above_bound_is_rejected() {
        let mut form = create_valid_form();
        form.snacks = "10000001".to_string();
        assert_eq!(validation_field(form.into_record()), "Snacks");
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let mut form = create_valid_form();
        form.bus = "-10".to_string();
        assert_eq!(validation_field(form.into_record()), "Bus");
    }

    #[test]
    fn test_days_above_31_are_rejected() {
        let mut form = create_valid_form();
        form.absent_days = "32".to_string();
        assert_eq!(validation_field(form.into_record()), "Absent Days");
    }

    #[test]
    fn test_numeric_month_is_accepted() {
        let mut form = create_valid_form();
        form.salary_month = "11".to_string();
        assert_eq!(
            form.into_record().unwrap().salary_month,
            SalaryMonth::November
        );
    }

    #[test]
    fn test_unknown_month_is_rejected() {
        let mut form = create_valid_form();
        form.salary_month = "Smarch".to_string();
        assert_eq!(validation_field(form.into_record()), "Salary Month");
    }

    #[test]
    fn test_year_out_of_range_is_rejected() {
        let mut form = create_valid_form();
        form.salary_year = "1901".to_string();
        assert_eq!(validation_field(form.into_record()), "Salary Year");
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let mut form = create_valid_form();
        form.date_of_joining = "someday".to_string();
        assert_eq!(validation_field(form.into_record()), "DOJ");
    }

    #[test]
    fn test_prefill_round_trips_through_form() {
        let record = create_valid_form().into_record().unwrap();
        let again = RecordForm::from_record(&record).into_record().unwrap();
        assert_eq!(again, record);
    }

    #[test]
    fn test_deserialize_accepts_numbers_and_nulls() {
        let json = r#"{
            "employee_code": "E3",
            "name": "Ravi",
            "basic": 15000,
            "hra": "2500",
            "bonus": null,
            "salary_month": 4,
            "salary_year": 2024
        }"#;

        let form: RecordForm = serde_json::from_str(json).unwrap();
        assert_eq!(form.basic, "15000");
        assert_eq!(form.bonus, "");
        assert_eq!(form.total_days, "30");

        let record = form.into_record().unwrap();
        assert_eq!(record.pay.basic, 15000);
        assert_eq!(record.pay.hra, 2500);
        assert_eq!(record.pay.bonus, 0);
        assert_eq!(record.salary_month, SalaryMonth::April);
    }
}
