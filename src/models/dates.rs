//! Date parsing and formatting shared by the form, the store and the slip.

use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d-%m-%Y", "%d.%m.%Y", "%d/%m/%Y"];

/// Format used for dates printed on a salary slip.
pub const SLIP_DATE_FORMAT: &str = "%d-%m-%Y";

/// Parses a date written as `YYYY-MM-DD`, `DD-MM-YYYY`, `DD.MM.YYYY` or
/// `DD/MM/YYYY`. A trailing time (`2015-07-01 00:00:00`) is ignored.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::parse_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2015, 7, 1);
/// assert_eq!(parse_date("2015-07-01"), expected);
/// assert_eq!(parse_date("01-07-2015"), expected);
/// assert_eq!(parse_date("2015-07-01 00:00:00"), expected);
/// assert_eq!(parse_date("July 1st"), None);
/// ```
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
                .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
                .ok()
                .map(|dt| dt.date())
        })
}

/// Formats an optional date for a slip; a missing date is an empty string.
pub fn format_slip_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(SLIP_DATE_FORMAT).to_string())
        .unwrap_or_default()
}
