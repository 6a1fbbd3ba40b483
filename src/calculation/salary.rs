//! Salary calculation.
//!
//! Net salary is total earnings less total deductions. There is no floor:
//! a record whose deductions exceed its earnings has a negative net salary.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::PayComponents;

/// Totals derived from a set of [`PayComponents`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryTotals {
    /// Basic + HRA + Special Allowance + Bonus.
    pub total_earnings: i64,
    /// PF + Professional Tax + Snacks + Bus + Loan.
    pub total_deductions: i64,
    /// Total earnings less total deductions.
    pub net_salary: i64,
}

/// Calculates total earnings, total deductions and net salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_totals;
/// use payroll_engine::models::PayComponents;
///
/// let pay = PayComponents {
///     basic: 20000,
///     hra: 5000,
///     pf: 1200,
///     professional_tax: 200,
///     ..Default::default()
/// };
///
/// let totals = calculate_totals(&pay);
/// assert_eq!(totals.total_earnings, 25000);
/// assert_eq!(totals.total_deductions, 1400);
/// assert_eq!(totals.net_salary, 23600);
/// ```
pub fn calculate_totals(pay: &PayComponents) -> SalaryTotals {
    let total_earnings = sum(pay.earnings().iter().map(|(_, amount)| *amount));
    let total_deductions = sum(pay.deductions().iter().map(|(_, amount)| *amount));
    let net_salary = total_earnings.saturating_sub(total_deductions);

    debug!(
        total_earnings,
        total_deductions, net_salary, "Calculated salary totals"
    );

    SalaryTotals {
        total_earnings,
        total_deductions,
        net_salary,
    }
}

// Amounts entered through the form are bounded, so saturation only matters
// for hand-edited spreadsheet cells.
fn sum(amounts: impl Iterator<Item = i64>) -> i64 {
    amounts.fold(0i64, i64::saturating_add)
}
