//! Calculation logic for the payroll engine.
//!
//! This module contains the salary calculation, the lenient numeric
//! coercion applied to operator and spreadsheet input, and the currency
//! formatting used on salary slips.

mod coercion;
mod money;
mod salary;

pub use coercion::{coerce_amount, parse_whole};
pub use money::{RUPEE_PREFIX, format_grouped, format_rupees};
pub use salary::{SalaryTotals, calculate_totals};

/// Upper bound on any single monetary field accepted from the form.
pub const MAX_AMOUNT: i64 = 10_000_000;
