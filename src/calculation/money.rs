//! Currency formatting for salary slips.

use rust_decimal::Decimal;

/// Prefix printed before every amount on a slip.
pub const RUPEE_PREFIX: &str = "Rs. ";

/// Formats an amount as rupees with thousands separators and two decimals.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::format_rupees;
///
/// assert_eq!(format_rupees(12345), "Rs. 12,345.00");
/// assert_eq!(format_rupees(0), "Rs. 0.00");
/// assert_eq!(format_rupees(-1400), "Rs. -1,400.00");
/// ```
pub fn format_rupees(amount: i64) -> String {
    format!("{}{}", RUPEE_PREFIX, format_grouped(Decimal::from(amount)))
}

/// Formats a value with comma thousands separators and two decimal places.
pub fn format_grouped(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, fraction)
}
