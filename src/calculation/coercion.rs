//! Lenient numeric coercion.
//!
//! Amounts reach the engine as operator text or spreadsheet cells. Anything
//! that does not read as a number counts as zero instead of failing the
//! interaction.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Parses `raw` as a number and truncates it toward zero.
///
/// Accepts plain integers, decimals (`"1200.75"`) and scientific notation
/// (`"1.2e3"`). Returns `None` for blank or non-numeric text.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::parse_whole;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_whole("1200.75"), Some(Decimal::from(1200)));
/// assert_eq!(parse_whole("-3.9"), Some(Decimal::from(-3)));
/// assert_eq!(parse_whole("twelve"), None);
/// ```
pub fn parse_whole(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
        .map(|value| value.trunc())
}

/// Coerces raw input to a non-negative whole amount.
///
/// Blank, non-numeric and negative input all become `0`; fractional input is
/// truncated.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::coerce_amount;
///
/// assert_eq!(coerce_amount("20000"), 20000);
/// assert_eq!(coerce_amount("1200.0"), 1200);
/// assert_eq!(coerce_amount(""), 0);
/// assert_eq!(coerce_amount("n/a"), 0);
/// assert_eq!(coerce_amount("-50"), 0);
/// ```
pub fn coerce_amount(raw: &str) -> i64 {
    parse_whole(raw)
        .and_then(|value| value.to_i64())
        .map(|value| value.max(0))
        .unwrap_or(0)
}
