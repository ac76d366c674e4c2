//! Brazilian-real amounts: parsing user input, formatting, and the as-you-type cents mask.

use crate::error::{FinanceError, Result};

/// Parses a Brazilian-format amount such as `"1.234,56"`, `"R$ 150,00"` or `"99.9"`.
///
/// Everything except digits, `,` and `.` is dropped. When both separators appear, `.` groups thousands.
/// The first `,` is the decimal separator. The result must be finite and greater than zero.
pub fn parse_amount(input: &str) -> Result<f64> {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();
    let normalized = if cleaned.contains('.') && cleaned.contains(',') {
        cleaned.replace('.', "")
    } else {
        cleaned
    };
    let normalized = normalized.replacen(',', ".", 1);

    let value: f64 = normalized.parse().map_err(|_| {
        FinanceError::validation(format!("invalid amount '{}' (e.g. 150,00)", input.trim()))
    })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(FinanceError::validation(format!(
            "amount must be greater than zero, got '{}'",
            input.trim()
        )));
    }
    Ok(value)
}

/// `1234.56` → `"1.234,56"`. Rounds to cents; non-finite values format as zero.
pub fn format_decimal_br(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{},{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// `1234.56` → `"R$ 1.234,56"`, `-10.0` → `"-R$ 10,00"`.
pub fn format_brl(value: f64) -> String {
    let formatted = format_decimal_br(value);
    match formatted.strip_prefix('-') {
        Some(unsigned) => format!("-R$ {}", unsigned),
        None => format!("R$ {}", formatted),
    }
}

/// Reinterprets whatever the user has typed so far as a count of cents: `"123456"` → `"1.234,56"`.
///
/// Returns an empty string when there are no digits.
pub fn mask_amount_input(typed: &str) -> String {
    let digits: String = typed.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return String::new();
    }
    let trimmed = digits.trim_start_matches('0');
    let cents: u64 = if trimmed.is_empty() {
        0
    } else {
        trimmed.parse().unwrap_or(u64::MAX)
    };
    format!("{},{:02}", group_thousands(cents / 100), cents % 100)
}

fn group_thousands(mut whole: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if whole < 1000 {
            groups.push(whole.to_string());
            break;
        }
        groups.push(format!("{:03}", whole % 1000));
        whole /= 1000;
    }
    groups.reverse();
    groups.join(".")
}
