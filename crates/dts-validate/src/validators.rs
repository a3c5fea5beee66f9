//! Single-value validators.
//!
//! Each validator classifies one optional cell into a [`Validity`]. Blank
//! input is always `NotApplicable`.

use std::sync::LazyLock;

use dts_common::{format_numeric, is_blank};
use dts_model::Validity;
use regex::Regex;

/// Permanent Account Number layout. The fourth character is the holder type.
pub const PAN_PATTERN: &str = r"^[A-Z]{3}[ABCFGHJLPT][A-Z][0-9]{4}[A-Z]$";

pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static PAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PAN_PATTERN).expect("PAN pattern compiles"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, ' ' | '.' | '-' | '/' | ',' | '&' | '(' | ')')
}

/// Drop characters that cannot appear in a name and collapse whitespace.
///
/// ```
/// use dts_validate::validators::clean_name;
///
/// assert_eq!(clean_name("  Asha\t#Rao  "), "AshaRao");
/// assert_eq!(clean_name("Rao  &  Sons (P) Ltd."), "Rao & Sons (P) Ltd.");
/// ```
pub fn clean_name(value: &str) -> String {
    let kept: String = value.chars().filter(|ch| is_name_char(*ch)).collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_single_repeated_char(value: &str) -> bool {
    let mut chars = value.chars().map(|ch| ch.to_ascii_lowercase());
    match chars.next() {
        Some(first) => chars.all(|ch| ch == first),
        None => false,
    }
}

pub fn validate_name(value: Option<&str>) -> Validity {
    let Some(raw) = value.filter(|v| !v.trim().is_empty()) else {
        return Validity::NotApplicable;
    };
    let cleaned = clean_name(raw);
    if cleaned.chars().count() <= 2 {
        return Validity::Invalid;
    }
    if is_single_repeated_char(&cleaned) {
        return Validity::Invalid;
    }
    Validity::from_bool(cleaned.chars().any(|ch| ch.is_ascii_alphabetic()))
}

/// Render spreadsheet-style numbers (`9876543210.0`, `9.87654321E9`) as integers.
fn integral_rendering(value: &str) -> Option<String> {
    if !value.contains(['.', 'e', 'E']) {
        return None;
    }
    let number = value.parse::<f64>().ok()?;
    if !number.is_finite() || number.fract() != 0.0 {
        return None;
    }
    Some(format_numeric(number))
}

pub fn validate_phone(value: Option<&str>) -> Validity {
    let Some(raw) = value.map(str::trim) else {
        return Validity::NotApplicable;
    };
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") || raw.eq_ignore_ascii_case("none") {
        return Validity::NotApplicable;
    }
    let rendered = integral_rendering(raw).unwrap_or_else(|| raw.to_string());
    let digits: Vec<u8> = rendered.bytes().filter(u8::is_ascii_digit).collect();
    let mobile_lead = |d: u8| matches!(d, b'6'..=b'9');
    let valid = match digits.len() {
        10 => mobile_lead(digits[0]),
        12 => digits.starts_with(b"91") && mobile_lead(digits[2]),
        _ => false,
    };
    Validity::from_bool(valid)
}

pub fn validate_email(value: Option<&str>) -> Validity {
    match value {
        Some(raw) if !is_blank(Some(raw)) => {
            Validity::from_bool(EMAIL_RE.is_match(&raw.to_lowercase()))
        }
        _ => Validity::NotApplicable,
    }
}

pub fn validate_pan(value: Option<&str>) -> Validity {
    match value {
        Some(raw) if !is_blank(Some(raw)) => {
            Validity::from_bool(PAN_RE.is_match(&raw.to_uppercase()))
        }
        _ => Validity::NotApplicable,
    }
}
