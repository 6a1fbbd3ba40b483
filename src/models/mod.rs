//! Core data models for the payroll engine.
//!
//! This module contains the employee record, its pay components, the salary
//! month and the form view-model used to edit records.

mod dates;
mod employee;
mod record_form;
mod salary_month;

pub use dates::{SLIP_DATE_FORMAT, format_slip_date, parse_date};
pub use employee::{EmployeeRecord, PayComponents};
pub use record_form::{MAX_DAYS, MAX_SALARY_YEAR, MIN_SALARY_YEAR, RecordForm};
pub use salary_month::{ParseSalaryMonthError, SalaryMonth};
