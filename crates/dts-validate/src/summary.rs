//! Descriptive counts for a validated column.

use std::collections::HashMap;

use dts_common::is_blank;
use dts_model::{SummaryCounts, Validity};

/// Summarize a raw column and its per-row validity.
///
/// A duplicate is every non-missing row whose exact value occurs more than
/// once, not only the repeats after the first.
pub fn summarize_column(raw: &[Option<String>], validity: &[Validity]) -> SummaryCounts {
    let missing = raw.iter().filter(|v| is_blank(v.as_deref())).count();

    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    for value in raw.iter().filter_map(Option::as_deref) {
        if !is_blank(Some(value)) {
            *occurrences.entry(value).or_default() += 1;
        }
    }
    let duplicates = occurrences.values().filter(|count| **count > 1).sum();

    let valid = validity.iter().filter(|v| **v == Validity::Valid).count();
    let invalid = validity.iter().filter(|v| **v == Validity::Invalid).count();

    SummaryCounts {
        total: raw.len(),
        missing,
        duplicates,
        invalid,
        valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::validate_pan;

    fn column(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn counts_missing_and_every_duplicate_occurrence() {
        let raw = column(&[None, Some(""), Some("X"), Some("X"), Some("Y")]);
        let validity = vec![
            Validity::NotApplicable,
            Validity::NotApplicable,
            Validity::Invalid,
            Validity::Invalid,
            Validity::Valid,
        ];
        let counts = summarize_column(&raw, &validity);
        assert_eq!(counts.total, 5);
        assert_eq!(counts.missing, 2);
        assert_eq!(counts.duplicates, 2);
        assert_eq!(counts.invalid, 2);
        assert_eq!(counts.valid, 1);
        assert!(counts.is_consistent());
    }

    #[test]
    fn whitespace_only_values_are_missing_not_duplicates() {
        let raw = column(&[Some("  "), Some("  "), Some("ABCPE1234F")]);
        let validity: Vec<Validity> = raw.iter().map(|v| validate_pan(v.as_deref())).collect();
        let counts = summarize_column(&raw, &validity);
        assert_eq!(counts.missing, 2);
        assert_eq!(counts.duplicates, 0);
        assert_eq!(counts.valid, 1);
    }

    #[test]
    fn duplicates_use_exact_strings() {
        let raw = column(&[Some("abc"), Some("ABC"), Some("abc "), Some("abc")]);
        let counts = summarize_column(&raw, &[Validity::Valid; 4]);
        assert_eq!(counts.duplicates, 2);
    }

    #[test]
    fn empty_column() {
        let counts = summarize_column(&[], &[]);
        assert_eq!(counts, SummaryCounts::default());
    }
}
