/// Split a full name into first, middle and last parts on whitespace.
///
/// One token is a first name only; two tokens are first and last; with
/// more, everything between the first and last token is the middle name,
/// joined by single spaces.
pub fn split_name(full_name: Option<&str>) -> (String, String, String) {
    let parts: Vec<&str> = full_name.unwrap_or_default().split_whitespace().collect();
    match parts.as_slice() {
        [] => (String::new(), String::new(), String::new()),
        [first] => (first.to_string(), String::new(), String::new()),
        [first, last] => (first.to_string(), String::new(), last.to_string()),
        [first, middle @ .., last] => (first.to_string(), middle.join(" "), last.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_token() {
        assert_eq!(split_name(Some("John")), ("John".into(), String::new(), String::new()));
    }

    #[test]
    fn two_tokens() {
        assert_eq!(split_name(Some("John Doe")), ("John".into(), String::new(), "Doe".into()));
    }

    #[test]
    fn middle_tokens_joined() {
        assert_eq!(
            split_name(Some("  John   Middle Many\tDoe ")),
            ("John".into(), "Middle Many".into(), "Doe".into())
        );
    }

    #[test]
    fn blank_or_absent() {
        let empty = (String::new(), String::new(), String::new());
        assert_eq!(split_name(None), empty);
        assert_eq!(split_name(Some("   ")), empty);
    }
}
