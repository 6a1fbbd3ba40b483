//! Salary month model.
//!
//! Stored files and operator input may carry the pay month either as a name
//! or as a number. Both are converted once, here, into [`SalaryMonth`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The calendar month a salary record is paid for.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalaryMonth;
///
/// let month: SalaryMonth = "march".parse().unwrap();
/// assert_eq!(month, SalaryMonth::March);
/// assert_eq!("3".parse::<SalaryMonth>().unwrap(), SalaryMonth::March);
/// assert_eq!(month.name(), "March");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SalaryMonth {
    /// January.
    #[default]
    January,
    /// February.
    February,
    /// March.
    March,
    /// April.
    April,
    /// May.
    May,
    /// June.
    June,
    /// July.
    July,
    /// August.
    August,
    /// September.
    September,
    /// October.
    October,
    /// November.
    November,
    /// December.
    December,
}

impl SalaryMonth {
    /// All months in calendar order.
    pub const ALL: [SalaryMonth; 12] = [
        SalaryMonth::January,
        SalaryMonth::February,
        SalaryMonth::March,
        SalaryMonth::April,
        SalaryMonth::May,
        SalaryMonth::June,
        SalaryMonth::July,
        SalaryMonth::August,
        SalaryMonth::September,
        SalaryMonth::October,
        SalaryMonth::November,
        SalaryMonth::December,
    ];

    /// Returns the month for a 1-based index, if it is in range.
    pub fn from_number(number: u32) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize).copied())
    }

    /// Returns the 1-based month number.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Returns the English month name as written to the backing file.
    pub fn name(self) -> &'static str {
        match self {
            SalaryMonth::January => "January",
            SalaryMonth::February => "February",
            SalaryMonth::March => "March",
            SalaryMonth::April => "April",
            SalaryMonth::May => "May",
            SalaryMonth::June => "June",
            SalaryMonth::July => "July",
            SalaryMonth::August => "August",
            SalaryMonth::September => "September",
            SalaryMonth::October => "October",
            SalaryMonth::November => "November",
            SalaryMonth::December => "December",
        }
    }
}

impl fmt::Display for SalaryMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a value names no month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSalaryMonthError(String);

impl fmt::Display for ParseSalaryMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a month name or a number from 1 to 12", self.0)
    }
}

impl std::error::Error for ParseSalaryMonthError {}

impl FromStr for SalaryMonth {
    type Err = ParseSalaryMonthError;

    /// Accepts full names, three-letter abbreviations and `1`-`12`.
    ///
    /// Spreadsheet cells sometimes hand numbers back as `"3.0"`, so a whole
    /// float is accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ParseSalaryMonthError(trimmed.to_string());

        if let Ok(number) = trimmed.parse::<f64>() {
            if number.fract() != 0.0 || number < 1.0 {
                return Err(err());
            }
            return Self::from_number(number as u32).ok_or_else(err);
        }

        let lower = trimmed.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|month| {
                let name = month.name().to_ascii_lowercase();
                lower == name || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_names_case_insensitive() {
        assert_eq!("January".parse::<SalaryMonth>().unwrap(), SalaryMonth::January);
        assert_eq!("DECEMBER".parse::<SalaryMonth>().unwrap(), SalaryMonth::December);
        assert_eq!(" july ".parse::<SalaryMonth>().unwrap(), SalaryMonth::July);
    }

    #[test]
    fn test_parse_abbreviations() {
        assert_eq!("sep".parse::<SalaryMonth>().unwrap(), SalaryMonth::September);
        assert_eq!("Feb".parse::<SalaryMonth>().unwrap(), SalaryMonth::February);
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!("1".parse::<SalaryMonth>().unwrap(), SalaryMonth::January);
        assert_eq!("12".parse::<SalaryMonth>().unwrap(), SalaryMonth::December);
        assert_eq!("4.0".parse::<SalaryMonth>().unwrap(), SalaryMonth::April);
    }

    #[test]
    fn test_parse_rejects_out_of_range_and_garbage() {
        assert!("0".parse::<SalaryMonth>().is_err());
        assert!("13".parse::<SalaryMonth>().is_err());
        assert!("2.5".parse::<SalaryMonth>().is_err());
        assert!("Ju".parse::<SalaryMonth>().is_err());
        assert!("".parse::<SalaryMonth>().is_err());
    }

    #[test]
    fn test_number_and_from_number_agree() {
        for month in SalaryMonth::ALL {
            assert_eq!(SalaryMonth::from_number(month.number()), Some(month));
        }
        assert_eq!(SalaryMonth::from_number(0), None);
    }

    #[test]
    fn test_display_uses_full_name() {
        assert_eq!(SalaryMonth::November.to_string(), "November");
    }
}
