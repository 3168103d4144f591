//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Loose `local@domain.tld` shape: no `@` in either part and at least one dot
/// after the `@`.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
});

/// Check if an email address has the `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Count characters rather than bytes so multi-byte names are measured the
/// way users see them
pub fn char_length(value: &str) -> usize {
    value.chars().count()
}

/// Check if a string length (in characters) is within bounds
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = char_length(value);
    len >= min && len <= max
}

/// Check if a string contains something other than whitespace
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}
