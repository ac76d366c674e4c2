//! Input predicates used by the transition table. All take already-trimmed input.

use regex::Regex;
use std::sync::OnceLock;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    // Literal pattern; cannot fail to compile.
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

/// Something `@` something `.` something, without whitespace.
pub fn is_valid_email(input: &str) -> bool {
    email_pattern().is_match(input)
}

pub fn is_present(input: &str) -> bool {
    !input.trim().is_empty()
}

/// Counts characters, not bytes, so accented text is measured as typed.
pub fn meets_min_len(input: &str, min_len: usize) -> bool {
    is_present(input) && input.trim().chars().count() >= min_len
}
