//! `DD/MM/YYYY` dates.

use chrono::NaiveDate;

use crate::error::{FinanceError, Result};

pub const BR_DATE_FORMAT: &str = "%d/%m/%Y";

pub fn parse_br_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), BR_DATE_FORMAT).map_err(|_| {
        FinanceError::validation(format!("invalid date '{}' (expected DD/MM/YYYY)", input.trim()))
    })
}

pub fn format_br_date(date: NaiveDate) -> String {
    date.format(BR_DATE_FORMAT).to_string()
}

/// Inserts slashes while the user types: `"0102"` → `"01/02"`, `"01022025"` → `"01/02/2025"`.
///
/// Non-digits are dropped and at most eight digits are kept.
pub fn mask_date_input(typed: &str) -> String {
    let digits: Vec<char> = typed.chars().filter(|c| c.is_ascii_digit()).take(8).collect();
    let mut masked = String::with_capacity(10);
    for (i, digit) in digits.iter().enumerate() {
        if i == 2 || i == 4 {
            masked.push('/');
        }
        masked.push(*digit);
    }
    masked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format_br_date() {
        let date = parse_br_date("01/02/2025").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(format_br_date(date), "01/02/2025");
    }

    #[test]
    fn test_parse_br_date_rejects_invalid() {
        assert!(parse_br_date("31/02/2025").is_err());
        assert!(parse_br_date("2025-02-01").is_err());
        assert!(parse_br_date("").is_err());
    }

    #[test]
    fn test_mask_date_input() {
        assert_eq!(mask_date_input("01022025"), "01/02/2025");
        assert_eq!(mask_date_input("0102"), "01/02");
        assert_eq!(mask_date_input("010"), "01/0");
        assert_eq!(mask_date_input("01"), "01");
        assert_eq!(mask_date_input("01/02/2025999"), "01/02/2025");
        assert_eq!(mask_date_input(""), "");
    }
}
