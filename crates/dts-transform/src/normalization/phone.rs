//! Phone number formatting for request files.

/// Dialing prefix added to bare national numbers.
pub const COUNTRY_CODE: &str = "91";

/// Keep only the digits of a phone value and prefix national numbers.
///
/// Exactly ten digits get the country code; any other digit string is
/// returned as is, so already prefixed or malformed values pass through
/// unchanged apart from the stripping. Absent input yields an empty string.
pub fn normalize_phone(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 {
        format!("{COUNTRY_CODE}{digits}")
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn national_number_gets_prefix() {
        assert_eq!(normalize_phone(Some("9876543210")), "919876543210");
        assert_eq!(normalize_phone(Some("+91 98765-43210")), "919876543210");
        assert_eq!(normalize_phone(Some("(987) 654 3210")), "919876543210");
    }

    #[test]
    fn other_lengths_only_stripped() {
        assert_eq!(normalize_phone(Some("919876543210")), "919876543210");
        assert_eq!(normalize_phone(Some("12-34")), "1234");
        assert_eq!(normalize_phone(Some("n/a")), "");
    }

    #[test]
    fn absent_is_empty() {
        assert_eq!(normalize_phone(None), "");
        assert_eq!(normalize_phone(Some("")), "");
    }
}
